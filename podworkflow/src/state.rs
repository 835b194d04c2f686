//! Workflow state snapshot shared with the view layer

use podapi::{Channel, Episode, Transcription};

/// Coarse workflow phase derived from the state
///
/// `Busy` wins over `Error`: a retry that is already in flight shows as
/// busy even though the previous attempt's message is still cleared
/// only at action start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    /// No action in flight, no pending error message
    Idle,
    /// A network-bearing action is in flight
    Busy,
    /// The last action failed; any operation may be retried from here
    Error,
}

/// Snapshot of everything the view layer renders
///
/// The controller owns the single mutable instance; the view receives
/// clones via `WorkflowController::snapshot()` and change notifications
/// via the event bus. Lists are replaced wholesale, never merged.
#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    /// Registered channels (refreshed at startup and after every
    /// register/delete attempt)
    pub channels: Vec<Channel>,
    /// Currently selected channel
    pub channel: Option<Channel>,
    /// Episode list of the selected channel
    pub episodes: Vec<Episode>,
    /// Currently selected episode
    pub episode: Option<Episode>,
    /// Transcription of the selected episode; `None` while empty or
    /// cleared ahead of a pending request
    pub transcription: Option<Transcription>,
    /// Whether a network-bearing action is in flight
    pub busy: bool,
    /// Message of the last failed action, cleared at the next action start
    pub error: Option<String>,
}

impl WorkflowState {
    /// Derive the coarse phase
    pub fn phase(&self) -> WorkflowPhase {
        if self.busy {
            WorkflowPhase::Busy
        } else if self.error.is_some() {
            WorkflowPhase::Error
        } else {
            WorkflowPhase::Idle
        }
    }

    /// Whether a channel is currently selected
    pub fn has_channel_selected(&self) -> bool {
        self.channel.is_some()
    }

    /// Whether an episode is currently selected
    pub fn has_episode_selected(&self) -> bool {
        self.episode.is_some()
    }

    /// Whether a transcription is currently populated
    pub fn has_transcription(&self) -> bool {
        self.transcription.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        let state = WorkflowState::default();
        assert_eq!(state.phase(), WorkflowPhase::Idle);
        assert!(!state.has_channel_selected());
        assert!(!state.has_episode_selected());
        assert!(!state.has_transcription());
    }

    #[test]
    fn test_busy_wins_over_error() {
        let state = WorkflowState {
            busy: true,
            error: Some("previous failure".into()),
            ..Default::default()
        };
        assert_eq!(state.phase(), WorkflowPhase::Busy);
    }

    #[test]
    fn test_error_phase() {
        let state = WorkflowState {
            error: Some("feed unreachable".into()),
            ..Default::default()
        };
        assert_eq!(state.phase(), WorkflowPhase::Error);
    }
}
