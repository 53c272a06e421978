use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use utilities::{parse_command, prompt, Command};
use view::{Received, WordsView};
use web_service::config::{self, ConfigError};
use web_service::{main_queue, MainHandle, MainQueue, ServiceConfig, WebService};

mod logging;
mod utilities;
mod view;

/// Fetch a handful of random words and list them.
#[derive(Debug, Parser)]
#[command(name = "random-words", long_about = None)]
struct Args {
    /// Fetch this many words once, print them and exit.
    #[arg(long, value_name = "N")]
    count: Option<String>,

    /// Words endpoint to query instead of the configured one.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Read configuration from this file instead of ~/.config/random-words/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => with_base_url(
            config::load_from(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            args.base_url,
        ),
        None => resolve_config(config::load_or_init(), args.base_url)?,
    };
    let service = WebService::new(config)?;
    tracing::info!(base_url = %service.config().base_url, "words service ready");

    let (main, mut queue) = main_queue::<WordsView>();
    let mut view = WordsView::default();

    if let Some(count) = args.count {
        request_words(&service, &main, &mut view, &count);
        queue.run_one(&mut view).await;
        if view.failed() {
            anyhow::bail!("couldn't fetch words");
        }
        tracing::debug!(words = view.words().map_or(0, |words| words.len()), "done");
        return Ok(());
    }

    println!(
        "Type how many words to fetch (fewer than 10 works best), or `long`, `count`, `word <n>`, `quit`."
    );
    interact(&service, &main, &mut queue, &mut view).await
}

/// A `--base-url` is enough to run without the XDG config, so a missing or
/// unreadable file only fails startup when no url was given.
fn resolve_config(
    loaded: Result<ServiceConfig, ConfigError>,
    base_url: Option<String>,
) -> anyhow::Result<ServiceConfig> {
    match (loaded, base_url) {
        (Ok(config), base_url) => Ok(with_base_url(config, base_url)),
        (Err(error), Some(base_url)) => {
            tracing::warn!(%error, "config unavailable, using defaults");
            Ok(with_base_url(ServiceConfig::default(), Some(base_url)))
        }
        (Err(error), None) => Err(error).context("failed to load config"),
    }
}

fn with_base_url(mut config: ServiceConfig, base_url: Option<String>) -> ServiceConfig {
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    config
}

async fn interact(
    service: &WebService,
    main: &MainHandle<WordsView>,
    queue: &mut MainQueue<WordsView>,
    view: &mut WordsView,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt(">> ")?;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Command::Quit => break,
                    Command::Fetch(count) => request_words(service, main, view, &count),
                    Command::Long => print!("{}", view.render_long()),
                    Command::Count => print!("{}", view.render_count()),
                    Command::Word(position) => print!("{}", view.render_word(position)),
                    Command::Empty => {}
                }
                prompt(">> ")?;
            }
            Some(update) = queue.next() => {
                update(&mut *view);
                prompt(">> ")?;
            }
        }
    }
    Ok(())
}

fn request_words(
    service: &WebService,
    main: &MainHandle<WordsView>,
    view: &mut WordsView,
    count: &str,
) {
    let tag = view.begin_request();
    tracing::info!(tag, count, "requesting words");
    let resource = service.words_resource(count);
    service.fetch_and_parse(resource, main, move |view: &mut WordsView, words| {
        match view.receive(tag, words) {
            Received::Shown => {
                println!();
                print!("{}", view.render_list());
            }
            Received::Failed => {
                println!();
                println!("Couldn't fetch words, please try again.");
            }
            Received::Stale => {}
        }
    });
}
