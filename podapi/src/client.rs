//! HTTP client for the PodScribe backend API
//!
//! This module provides the typed request gateway used by the workflow
//! layer: five fixed request shapes against a configured base address,
//! with structured bodies both ways.
//!
//! # Example
//!
//! ```no_run
//! use podapi::PodScribeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PodScribeClient::new("http://localhost:8000").await?;
//!
//!     let channels = client.channel_list().await?;
//!     for channel in &channels {
//!         println!("{} - {}", channel.id, channel.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::{
    Channel, ChannelListResponse, DeleteRequest, EmptyResponse, Episode, EpisodesRequest,
    EpisodesResponse, ErrorResponse, RegisterRequest, TranscribeRequest, TranscribeResponse,
    Transcription,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Default backend base URL (local development server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "podapi/0.1.0";

/// PodScribe HTTP client
///
/// The client is stateless: it holds no selection and caches nothing.
/// Callers distinguish application-level failures (the backend answered
/// with a non-success status) from transport failures (the request never
/// completed) through the [`Error`] variants.
///
/// The client performs no retries and no cancellation, and applies no
/// request timeout unless one is configured on the builder. Transcription
/// requests in particular can run for minutes on long episodes.
#[derive(Debug, Clone)]
pub struct PodScribeClient {
    pub(crate) client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl PodScribeClient {
    /// Create a new client for the given backend base URL
    pub async fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).build().await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom reqwest::Client
    ///
    /// Useful for sharing HTTP connection pools or custom proxy settings
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url.into()),
            timeout: None,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    // ========================================================================
    // Channel List
    // ========================================================================

    /// Fetch the list of registered channels
    ///
    /// A backend response without a `channelList` field yields an empty
    /// list rather than an error.
    pub async fn channel_list(&self) -> Result<Vec<Channel>> {
        let response: ChannelListResponse = self.get_json("channel-list").await?;

        #[cfg(feature = "logging")]
        tracing::debug!("Received {} registered channels", response.channel_list.len());

        Ok(response.channel_list)
    }

    // ========================================================================
    // Episodes
    // ========================================================================

    /// Fetch the episode list for a channel
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use podapi::PodScribeClient;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = PodScribeClient::new("http://localhost:8000").await?;
    /// let channels = client.channel_list().await?;
    /// let episodes = client.episodes(&channels[0]).await?;
    /// println!("{} episodes", episodes.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn episodes(&self, channel: &Channel) -> Result<Vec<Episode>> {
        let response: EpisodesResponse = self
            .post_json("episodes", &EpisodesRequest { channel })
            .await?;

        #[cfg(feature = "logging")]
        tracing::debug!(
            "Received {} episodes for channel {}",
            response.episodes.len(),
            channel.id
        );

        Ok(response.episodes)
    }

    // ========================================================================
    // Transcription
    // ========================================================================

    /// Request transcription and translation of an episode's audio
    ///
    /// The backend downloads the audio, transcribes it and translates the
    /// result in one call; the response carries the full transcript,
    /// its translation, and the ordered segment timeline.
    pub async fn transcribe(&self, episode: &Episode, channel: &Channel) -> Result<Transcription> {
        #[cfg(feature = "logging")]
        tracing::debug!("Requesting transcription for {}", episode.audio_url);

        let response: TranscribeResponse = self
            .post_json("transcribe", &TranscribeRequest { episode, channel })
            .await?;

        #[cfg(feature = "logging")]
        tracing::debug!(
            "Received transcription: {} segments",
            response.transcription.segments.len()
        );

        Ok(response.transcription)
    }

    // ========================================================================
    // Channel Registration
    // ========================================================================

    /// Register a new channel from an RSS feed URL
    pub async fn register_channel(&self, new_rss_url: &str) -> Result<()> {
        let _: EmptyResponse = self
            .post_json("channel-register", &RegisterRequest { new_rss_url })
            .await?;

        #[cfg(feature = "logging")]
        tracing::debug!("Registered channel from {}", new_rss_url);

        Ok(())
    }

    /// Delete a registered channel by id
    ///
    /// The backend expects the id serialized as a string.
    pub async fn delete_channel(&self, id: u64) -> Result<()> {
        let _: EmptyResponse = self
            .post_json(
                "channel-delete",
                &DeleteRequest {
                    del_rss_id: id.to_string(),
                },
            )
            .await?;

        #[cfg(feature = "logging")]
        tracing::debug!("Deleted channel {}", id);

        Ok(())
    }

    // ========================================================================
    // Request Plumbing
    // ========================================================================

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}/{}", self.base_url, path))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let mut request = self.client.get(self.endpoint(path)?);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        Self::parse_body(request.send().await?).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let mut request = self.client.post(self.endpoint(path)?).json(body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        Self::parse_body(request.send().await?).await
    }

    /// Parse a response body into the expected success shape
    ///
    /// The body is read as text first so a non-success status can be
    /// mined for the backend's `error` payload: with one it becomes
    /// [`Error::Api`], without one [`Error::UnexpectedStatus`].
    async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(ErrorResponse {
                error: Some(message),
            }) => Err(Error::Api(message)),
            _ => Err(Error::UnexpectedStatus(status)),
        }
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Builder for configuring a PodScribeClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
    proxy: Option<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the backend base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(url.into());
        self
    }

    /// Set a per-request timeout
    ///
    /// No timeout is applied by default; transcription of a long episode
    /// is legitimately slow.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a proxy URL
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<PodScribeClient> {
        let client = if let Some(client) = self.client {
            client
        } else {
            let mut builder = Client::builder().user_agent(&self.user_agent);

            if let Some(proxy_url) = &self.proxy {
                let proxy = reqwest::Proxy::all(proxy_url)?;
                builder = builder.proxy(proxy);
            }

            builder.build()?
        };

        Ok(PodScribeClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
        })
    }
}
