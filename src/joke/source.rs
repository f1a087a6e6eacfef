use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::config::ApiConfig;
use crate::joke::error::FetchError;
use crate::joke::record::JokeRecord;

/// Path of the random-joke endpoint, relative to the API base URL.
pub const RANDOM_JOKE_PATH: &str = "/jokes/random";

/// Something that can produce one joke per call.
///
/// Each call is a fresh request: implementations must not cache or retry.
#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch(&self) -> Result<JokeRecord, FetchError>;
}

/// [`JokeSource`] backed by the public jokes HTTP API.
///
/// Holds one reusable client; every fetch is a single GET without
/// parameters or authentication.
pub struct HttpJokeSource {
    client: Client,
    endpoint: String,
}

impl HttpJokeSource {
    /// Wrap an already-built client.
    pub fn new(client: Client, base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), RANDOM_JOKE_PATH);
        Self { client, endpoint }
    }

    /// Build the client from the API section of the configuration.
    pub fn from_config(api: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(api.request_timeout())
            .connect_timeout(api.connect_timeout())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self::new(client, &api.base_url))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl JokeSource for HttpJokeSource {
    async fn fetch(&self) -> Result<JokeRecord, FetchError> {
        let transport = |source| FetchError::Transport {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::status(status.as_u16(), &body));
        }

        let body = response.bytes().await.map_err(transport)?;
        let joke = serde_json::from_slice::<JokeRecord>(&body)?;

        tracing::debug!(joke_id = %joke.id(), "Joke received");
        Ok(joke)
    }
}
