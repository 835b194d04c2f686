//! Playback synchronization for PodScribe transcripts
//!
//! This crate maps a stream of playback-time samples onto the active
//! transcript segment and notifies a subscriber exactly when the active
//! index changes, so the view layer can scroll the matching transcript
//! element into view.
//!
//! The synchronizer is independent of networking: it only needs the
//! ordered segment list out of a [`podapi::Transcription`] and the
//! position samples the playback element emits.
//!
//! # Example
//!
//! ```
//! use podapi::Segment;
//! use podsync::PlaybackSynchronizer;
//!
//! let segments = vec![
//!     Segment::new(0.0, 4.5, "intro"),
//!     Segment::new(4.5, 9.0, "first topic"),
//! ];
//!
//! let mut sync = PlaybackSynchronizer::with_callback(segments, |index| {
//!     // scroll transcript element `index` into view
//!     println!("active segment is now {}", index);
//! });
//!
//! sync.update(1.0); // index 0, no notification (initial index)
//! sync.update(5.0); // index 1, notification fires once
//! ```

pub mod synchronizer;

// Re-exports
pub use synchronizer::PlaybackSynchronizer;
