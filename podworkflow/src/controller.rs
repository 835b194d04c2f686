//! Workflow controller: selection state and action sequencing
//!
//! This module owns the single mutable [`WorkflowState`] and sequences
//! the network-bearing user actions against the PodScribe backend:
//! select channel → fetch episodes → select episode → fetch
//! transcription, plus channel registration and deletion.

use std::sync::{Arc, RwLock};

use crossbeam_channel::Receiver;
use podapi::{Channel, Episode, Error, PodScribeClient};

use crate::events::{WorkflowEvent, WorkflowEventBus};
use crate::state::WorkflowState;

/// Message shown for transport failures (connectivity, malformed body).
/// The underlying detail is logged, never surfaced.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Fallback message when an episode fetch fails without a backend message
pub const EPISODES_ERROR_MESSAGE: &str = "Failed to fetch episodes";

/// Fallback message when a transcription request fails without a backend message
pub const TRANSCRIBE_ERROR_MESSAGE: &str = "Transcription failed";

/// Fallback message when channel registration fails without a backend message
pub const REGISTER_ERROR_MESSAGE: &str = "Failed to register channel";

/// Fallback message when channel deletion fails without a backend message
pub const DELETE_ERROR_MESSAGE: &str = "Failed to delete channel";

/// Orchestrates the PodScribe browsing/transcription workflow
///
/// The controller is the only writer of the workflow state; views read
/// clones via [`snapshot`](Self::snapshot) and subscribe to change
/// notifications via [`subscribe`](Self::subscribe). Failures never
/// escape the operations as errors: they are folded into the state's
/// message field, to be cleared at the start of the next action.
///
/// # Single-flight convention
///
/// At most one network-bearing action is intended to be in flight,
/// enforced by the view disabling its triggers while
/// [`is_busy`](Self::is_busy). The controller itself neither queues nor
/// rejects re-entrant calls: a caller that bypasses the disabled
/// triggers can start two overlapping actions whose responses race.
///
/// # No cancellation
///
/// In-flight requests are never cancelled. A response that arrives
/// after the selection has moved on still overwrites the state it was
/// requested for.
///
/// # Example
///
/// ```no_run
/// use podworkflow::WorkflowController;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let controller = WorkflowController::new("http://localhost:8000").await?;
///     controller.load_channels().await;
///
///     let channels = controller.snapshot().channels;
///     if let Some(channel) = channels.first() {
///         controller.select_channel(channel.clone());
///         controller.load_episodes().await;
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct WorkflowController {
    /// Underlying HTTP client
    client: PodScribeClient,
    /// The single shared workflow state (thread-safe)
    state: Arc<RwLock<WorkflowState>>,
    /// Change notification bus
    events: WorkflowEventBus,
}

impl WorkflowController {
    /// Create a controller with its own client for the given backend
    pub async fn new(base_url: impl Into<String>) -> podapi::Result<Self> {
        Ok(Self::with_client(PodScribeClient::new(base_url).await?))
    }

    /// Create a controller around an existing client
    pub fn with_client(client: PodScribeClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(WorkflowState::default())),
            events: WorkflowEventBus::new(),
        }
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &PodScribeClient {
        &self.client
    }

    // ========================================================================
    // Read Surface
    // ========================================================================

    /// Clone the current workflow state
    pub fn snapshot(&self) -> WorkflowState {
        self.state.read().unwrap().clone()
    }

    /// Whether a network-bearing action is in flight
    pub fn is_busy(&self) -> bool {
        self.state.read().unwrap().busy
    }

    /// Message of the last failed action, if any
    pub fn error(&self) -> Option<String> {
        self.state.read().unwrap().error.clone()
    }

    /// Subscribe to state change notifications
    pub fn subscribe(&self) -> Receiver<WorkflowEvent> {
        self.events.subscribe()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select a channel
    ///
    /// Selection only: the episode list and transcription keep their
    /// previous contents until [`load_episodes`](Self::load_episodes)
    /// replaces them.
    pub fn select_channel(&self, channel: Channel) {
        {
            let mut state = self.state.write().unwrap();
            state.channel = Some(channel.clone());
        }
        self.events
            .broadcast(WorkflowEvent::ChannelSelected { channel });
    }

    /// Select an episode
    pub fn select_episode(&self, episode: Episode) {
        {
            let mut state = self.state.write().unwrap();
            state.episode = Some(episode.clone());
        }
        self.events
            .broadcast(WorkflowEvent::EpisodeSelected { episode });
    }

    // ========================================================================
    // Channel List
    // ========================================================================

    /// Fetch the registered channel list
    ///
    /// Used at startup and re-run after every register/delete attempt.
    /// This fetch does not set busy and never surfaces its failures into
    /// the workflow state: a failed refresh is logged and the previous
    /// list is kept.
    pub async fn load_channels(&self) {
        self.refresh_channels().await;
    }

    async fn refresh_channels(&self) {
        match self.client.channel_list().await {
            Ok(channels) => {
                {
                    let mut state = self.state.write().unwrap();
                    state.channels = channels.clone();
                }
                self.events
                    .broadcast(WorkflowEvent::ChannelListUpdated { channels });
            }
            Err(e) => {
                tracing::warn!("Channel list refresh failed: {}", e);
            }
        }
    }

    // ========================================================================
    // Episodes
    // ========================================================================

    /// Fetch the episode list of the selected channel
    ///
    /// No-op (with a warning) when no channel is selected. On success
    /// the episode list is replaced wholesale and the episode selection
    /// and transcription are cleared; on failure the previous episode
    /// list is kept and the error message is set.
    pub async fn load_episodes(&self) {
        let Some(channel) = self.state.read().unwrap().channel.clone() else {
            tracing::warn!("load_episodes called without a channel selection");
            return;
        };

        let _busy = self.begin_action();

        match self.client.episodes(&channel).await {
            Ok(episodes) => {
                let cleared_transcription = {
                    let mut state = self.state.write().unwrap();
                    state.episodes = episodes.clone();
                    state.episode = None;
                    state.transcription.take().is_some()
                };
                self.events
                    .broadcast(WorkflowEvent::EpisodesUpdated { episodes });
                if cleared_transcription {
                    self.events.broadcast(WorkflowEvent::TranscriptionUpdated {
                        transcription: None,
                    });
                }
            }
            Err(e) => self.fail(e, EPISODES_ERROR_MESSAGE),
        }
    }

    // ========================================================================
    // Transcription
    // ========================================================================

    /// Request transcription of the selected episode
    ///
    /// The transcription is cleared before the request is issued so
    /// stale content is never shown while the new one loads. On failure
    /// it stays empty and the error message is set.
    pub async fn load_transcription(&self) {
        let (channel, episode) = {
            let state = self.state.read().unwrap();
            match (state.channel.clone(), state.episode.clone()) {
                (Some(channel), Some(episode)) => (channel, episode),
                _ => {
                    tracing::warn!("load_transcription called without an episode selection");
                    return;
                }
            }
        };

        let _busy = self.begin_action();

        // Anti-stale-display: empty out the previous transcript before
        // the request leaves.
        let cleared = {
            let mut state = self.state.write().unwrap();
            state.transcription.take().is_some()
        };
        if cleared {
            self.events.broadcast(WorkflowEvent::TranscriptionUpdated {
                transcription: None,
            });
        }

        match self.client.transcribe(&episode, &channel).await {
            Ok(transcription) => {
                {
                    let mut state = self.state.write().unwrap();
                    state.transcription = Some(transcription.clone());
                }
                self.events.broadcast(WorkflowEvent::TranscriptionUpdated {
                    transcription: Some(transcription),
                });
            }
            Err(e) => self.fail(e, TRANSCRIBE_ERROR_MESSAGE),
        }
    }

    // ========================================================================
    // Channel Management
    // ========================================================================

    /// Register a new channel from an RSS feed URL
    ///
    /// Whatever the register request's outcome — success, backend
    /// error, or transport failure — a fresh channel-list fetch follows,
    /// so the list always reflects the attempt.
    pub async fn register_channel(&self, new_rss_url: &str) {
        let _busy = self.begin_action();

        if let Err(e) = self.client.register_channel(new_rss_url).await {
            self.fail(e, REGISTER_ERROR_MESSAGE);
        }

        self.refresh_channels().await;
    }

    /// Delete a registered channel by id
    ///
    /// Symmetric to [`register_channel`](Self::register_channel),
    /// including the unconditional list refresh.
    pub async fn delete_channel(&self, id: u64) {
        let _busy = self.begin_action();

        if let Err(e) = self.client.delete_channel(id).await {
            self.fail(e, DELETE_ERROR_MESSAGE);
        }

        self.refresh_channels().await;
    }

    // ========================================================================
    // Busy/Error Lifecycle
    // ========================================================================

    /// Open the busy region and clear the previous error
    ///
    /// The returned guard closes the region on drop, so busy is
    /// released on every exit path.
    fn begin_action(&self) -> BusyGuard {
        let had_error = {
            let mut state = self.state.write().unwrap();
            state.busy = true;
            state.error.take().is_some()
        };

        self.events
            .broadcast(WorkflowEvent::BusyChanged { busy: true });
        if had_error {
            self.events
                .broadcast(WorkflowEvent::ErrorChanged { error: None });
        }

        BusyGuard {
            state: self.state.clone(),
            events: self.events.clone(),
        }
    }

    /// Fold an action failure into the workflow state
    ///
    /// Backend messages are surfaced verbatim; a non-success status
    /// without a message falls back to the per-operation default;
    /// transport failures surface only the generic message.
    fn fail(&self, error: Error, default_message: &str) {
        tracing::warn!("Workflow action failed: {}", error);

        let message = match &error {
            Error::Api(message) => message.clone(),
            Error::UnexpectedStatus(_) => default_message.to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        };

        {
            let mut state = self.state.write().unwrap();
            state.error = Some(message.clone());
        }
        self.events.broadcast(WorkflowEvent::ErrorChanged {
            error: Some(message),
        });
    }
}

impl std::fmt::Debug for WorkflowController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().unwrap();
        f.debug_struct("WorkflowController")
            .field("client", &self.client)
            .field("phase", &state.phase())
            .field("channels", &state.channels.len())
            .field("episodes", &state.episodes.len())
            .finish()
    }
}

/// Scoped busy region: busy is set on creation and cleared on drop
struct BusyGuard {
    state: Arc<RwLock<WorkflowState>>,
    events: WorkflowEventBus,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        {
            let mut state = self.state.write().unwrap();
            state.busy = false;
        }
        self.events
            .broadcast(WorkflowEvent::BusyChanged { busy: false });
    }
}
