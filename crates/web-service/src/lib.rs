use fetch::get_data;
use url::Url;

pub mod config;
mod dispatch;
mod fetch;
mod resource;
mod words;
mod words_api;

pub use config::ServiceConfig;
pub use dispatch::{main_queue, MainHandle, MainQueue, Update};
pub use resource::Resource;
pub use words::{parse_words, Word, WordList, LONG_WORD_LEN};
pub use words_api::{words_url, DEFAULT_WORDS_URL};

/// Everything that can go wrong between building a request and handing back
/// a parsed value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("response carried no body")]
    DataAbsent,
    #[error("response body could not be parsed")]
    Parse,
}

#[derive(Debug, Clone)]
pub struct WebService {
    client: reqwest::Client,
    base_url: Url,
    config: ServiceConfig,
}

impl WebService {
    /// Builds the shared client and validates the configured base url, so a
    /// bad endpoint is reported before any request is made.
    pub fn new(config: ServiceConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url)?;
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build().map_err(Error::Client)?;
        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn words_url(&self, count: &str) -> Url {
        words_url(&self.base_url, count)
    }

    pub fn words_resource(&self, count: &str) -> Resource<WordList> {
        let parse: fn(&[u8]) -> Option<WordList> = WordList::from_body;
        Resource::new(self.words_url(count), parse)
    }

    /// Fetches `resource` and reports exactly which step failed.
    pub async fn load_result<T, F>(&self, resource: &Resource<T, F>) -> Result<T, Error>
    where
        F: Fn(&[u8]) -> Option<T>,
    {
        get_data(&self.client, resource).await
    }

    /// Fetches `resource`, collapsing every failure to `None`.
    pub async fn load<T, F>(&self, resource: &Resource<T, F>) -> Option<T>
    where
        F: Fn(&[u8]) -> Option<T>,
    {
        match self.load_result(resource).await {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::debug!(url = %resource.url(), %error, "fetch failed");
                None
            }
        }
    }

    /// Fetches `resource` on a background task and runs `on_complete` once on
    /// the queue behind `main`. Must be called from within a tokio runtime.
    ///
    /// The request cannot be cancelled. If the queue has been dropped by the
    /// time the response arrives, the completion is dropped without running.
    pub fn fetch_and_parse<T, F, S, C>(
        &self,
        resource: Resource<T, F>,
        main: &MainHandle<S>,
        on_complete: C,
    ) where
        T: Send + 'static,
        F: Fn(&[u8]) -> Option<T> + Send + Sync + 'static,
        S: 'static,
        C: FnOnce(&mut S, Option<T>) + Send + 'static,
    {
        let service = self.clone();
        let main = main.clone();
        tokio::spawn(async move {
            let output = service.load(&resource).await;
            if !main.dispatch(move |state: &mut S| on_complete(state, output)) {
                tracing::debug!(url = %resource.url(), "ui queue closed, dropping completion");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_base_url() {
        let config = ServiceConfig {
            base_url: "not a url".to_owned(),
            user_agent: None,
        };
        assert!(matches!(WebService::new(config), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn words_resource_targets_configured_endpoint() {
        let config = ServiceConfig {
            base_url: "http://localhost:8080/word".to_owned(),
            user_agent: Some("random-words-test".to_owned()),
        };
        let service = WebService::new(config).unwrap();
        let resource = service.words_resource("7");
        assert_eq!(resource.url().as_str(), "http://localhost:8080/word?number=7");
        assert_eq!(
            resource.parse(b"\"ab\",\"cd\"").unwrap().words(),
            ["ab", "cd"]
        );
    }
}
