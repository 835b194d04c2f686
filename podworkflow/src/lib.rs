//! Workflow orchestration for the PodScribe client
//!
//! This crate sequences the multi-step, network-dependent user actions
//! of the PodScribe client — select channel → fetch episodes → select
//! episode → fetch transcription, plus channel registration/deletion —
//! over a single explicitly-owned [`WorkflowState`].
//!
//! # Architecture
//!
//! - [`WorkflowController`] is the only writer of the state. Its
//!   operations never return errors; failures become the state's
//!   message field and are cleared at the next action start.
//! - Views read [`WorkflowController::snapshot`] clones and subscribe
//!   to [`WorkflowEvent`] notifications through the bus; there is no
//!   ambient reactivity.
//! - At most one network-bearing action is meant to be in flight
//!   (busy flag + view-side trigger disabling); the busy region is a
//!   scoped guard released on every exit path.
//!
//! # Example
//!
//! ```no_run
//! use podworkflow::{WorkflowController, WorkflowEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let controller = WorkflowController::new("http://localhost:8000").await?;
//!     let events = controller.subscribe();
//!
//!     controller.load_channels().await;
//!     for event in events.try_iter() {
//!         if let WorkflowEvent::ChannelListUpdated { channels } = event {
//!             println!("{} channels registered", channels.len());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod events;
pub mod state;

// Re-exports
pub use controller::{
    WorkflowController, DELETE_ERROR_MESSAGE, EPISODES_ERROR_MESSAGE, GENERIC_ERROR_MESSAGE,
    REGISTER_ERROR_MESSAGE, TRANSCRIBE_ERROR_MESSAGE,
};
pub use events::{WorkflowEvent, WorkflowEventBus};
pub use state::{WorkflowPhase, WorkflowState};
