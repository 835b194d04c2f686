//! PodScribe backend client library
//!
//! This crate provides a typed Rust client for the PodScribe podcast
//! transcription backend: listing registered channels, fetching a
//! channel's episodes, requesting transcription+translation of an
//! episode, and registering or deleting channels.
//!
//! # Features
//!
//! - **Channel List**: fetch the registered podcast channels
//! - **Episodes**: fetch the episode list of a channel on demand
//! - **Transcription**: request transcription and translation of an
//!   episode's audio in one call, with a segment timeline for playback
//!   synchronization
//! - **Channel Management**: register a channel from an RSS feed URL,
//!   delete a registered channel by id
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
//!     let episodes = client.episodes(&channels[0]).await?;
//!     let transcription = client.transcribe(&episodes[0], &channels[0]).await?;
//!
//!     println!("{} segments", transcription.segments.len());
//!     Ok(())
//! }
//! ```
//!
//! # Error Model
//!
//! The backend answers every request with structured JSON. Failed
//! requests carry an `{ "error": "..." }` payload alongside a
//! non-success status; the client surfaces that as [`Error::Api`],
//! distinct from transport failures ([`Error::Http`], [`Error::Json`]).
//! The client applies no retries and, by default, no timeout —
//! transcribing a long episode can legitimately take minutes.

pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use client::{ClientBuilder, PodScribeClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{Channel, Episode, Segment, Transcription};
