//! A queue of state updates drained by whoever owns the presentation state.
//!
//! Background tasks cannot touch the view directly; they hand a closure to a
//! [`MainHandle`] and the loop holding the [`MainQueue`] runs it against its
//! state, one update at a time, in arrival order.

use tokio::sync::mpsc;

pub type Update<S> = Box<dyn FnOnce(&mut S) + Send>;

pub fn main_queue<S>() -> (MainHandle<S>, MainQueue<S>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (MainHandle { tx }, MainQueue { rx })
}

pub struct MainHandle<S> {
    tx: mpsc::UnboundedSender<Update<S>>,
}

impl<S> Clone for MainHandle<S> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<S> MainHandle<S> {
    /// Queues `update`. Returns false if the queue has been dropped, in which
    /// case `update` is dropped without running.
    pub fn dispatch<U>(&self, update: U) -> bool
    where
        U: FnOnce(&mut S) + Send + 'static,
    {
        self.tx.send(Box::new(update)).is_ok()
    }
}

pub struct MainQueue<S> {
    rx: mpsc::UnboundedReceiver<Update<S>>,
}

impl<S> MainQueue<S> {
    /// Waits for the next update. `None` once every handle is gone and the
    /// queue is empty.
    pub async fn next(&mut self) -> Option<Update<S>> {
        self.rx.recv().await
    }

    /// Waits for one update and applies it. Returns false if none will come.
    pub async fn run_one(&mut self, state: &mut S) -> bool {
        match self.rx.recv().await {
            Some(update) => {
                update(state);
                true
            }
            None => false,
        }
    }

    /// Applies every update already queued, without waiting.
    pub fn drain(&mut self, state: &mut S) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.rx.try_recv() {
            update(state);
            applied += 1;
        }
        applied
    }
}
