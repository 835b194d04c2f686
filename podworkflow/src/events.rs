//! Change notification bus for the view layer
//!
//! Every mutation of the workflow state is announced explicitly so a
//! view layer (or a test) can subscribe and react; nothing re-renders
//! implicitly.

use std::sync::{Arc, Mutex};

use crossbeam_channel::{unbounded, Receiver, Sender};
use podapi::{Channel, Episode, Transcription};

/// Notification emitted when a piece of workflow state changes
#[derive(Debug, Clone)]
pub enum WorkflowEvent {
    /// The registered channel list was replaced
    ChannelListUpdated { channels: Vec<Channel> },
    /// A channel was selected
    ChannelSelected { channel: Channel },
    /// The episode list was replaced
    EpisodesUpdated { episodes: Vec<Episode> },
    /// An episode was selected
    EpisodeSelected { episode: Episode },
    /// The transcription was replaced (`None` = cleared)
    TranscriptionUpdated {
        transcription: Option<Transcription>,
    },
    /// The busy flag flipped
    BusyChanged { busy: bool },
    /// The error message changed (`None` = cleared)
    ErrorChanged { error: Option<String> },
}

/// Fan-out bus for [`WorkflowEvent`]s
///
/// Each subscriber gets its own unbounded channel; subscribers that
/// dropped their receiver are pruned on the next broadcast.
#[derive(Clone, Default)]
pub struct WorkflowEventBus {
    subscribers: Arc<Mutex<Vec<Sender<WorkflowEvent>>>>,
}

impl WorkflowEventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Open a new subscription
    pub fn subscribe(&self) -> Receiver<WorkflowEvent> {
        let (tx, rx) = unbounded::<WorkflowEvent>();
        {
            let mut subscribers = self.subscribers.lock().unwrap();
            subscribers.push(tx);
        }
        rx
    }

    /// Deliver an event to every live subscriber
    pub(crate) fn broadcast(&self, event: WorkflowEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
