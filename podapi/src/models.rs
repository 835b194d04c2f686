//! Data models for PodScribe backend responses
//!
//! This module contains the structures exchanged with the backend:
//! registered channels, episode lists and transcription results.

use serde::{Deserialize, Serialize};

// ============================================================================
// Channel Models
// ============================================================================

/// A registered podcast channel
///
/// Channels are identified by their backend-assigned `id`. The list of
/// registered channels is always replaced wholesale on refresh, never
/// merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Backend-assigned channel identifier
    pub id: u64,
    /// RSS feed URL the channel was registered from
    pub feed_url: String,
    /// Channel title as parsed from the feed
    pub title: String,
}

impl Channel {
    /// Create a new channel record
    pub fn new(id: u64, feed_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            feed_url: feed_url.into(),
            title: title.into(),
        }
    }
}

// ============================================================================
// Episode Models
// ============================================================================

/// One entry of a channel's episode list
///
/// Within a single list the audio URL is unique and serves as the
/// episode's identity. Episode lists are replaced wholesale per fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Episode title
    pub title: String,
    /// URL of the episode's audio file
    pub audio_url: String,
    /// Episode description
    pub description: String,
}

impl Episode {
    /// Create a new episode record
    pub fn new(
        title: impl Into<String>,
        audio_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            audio_url: audio_url.into(),
            description: description.into(),
        }
    }
}

// ============================================================================
// Transcription Models
// ============================================================================

/// One time-bounded span of transcript text
///
/// Within a transcript, segments are non-overlapping and sorted
/// ascending by `start`, with `start < end`. Containment is half-open
/// (`start` inclusive, `end` exclusive) so a position at a boundary has
/// exactly one owning segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    /// Start of the span, in seconds
    pub start: f64,
    /// End of the span, in seconds
    pub end: f64,
    /// Transcript text for the span
    pub text: String,
}

impl Segment {
    /// Create a new segment
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Whether a playback position falls inside this segment (half-open)
    pub fn contains(&self, position: f64) -> bool {
        self.start <= position && position < self.end
    }

    /// Duration of the span in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// The full output of one transcription request
///
/// Produced atomically by a single backend call and never partially
/// updated: a new transcription replaces the previous one wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transcription {
    /// Transcript in the episode's original language
    pub original: String,
    /// Translated transcript
    pub translation: String,
    /// Ordered, non-overlapping transcript segments
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Transcription {
    /// Whether the transcription carries no text at all
    pub fn is_empty(&self) -> bool {
        self.original.is_empty() && self.translation.is_empty() && self.segments.is_empty()
    }

    /// End of the last segment, in seconds (0.0 for a segment-less result)
    pub fn duration(&self) -> f64 {
        self.segments.last().map(|s| s.end).unwrap_or(0.0)
    }

    /// Find which segment covers a given playback position
    ///
    /// Linear scan, intended for one-off queries. Continuous playback
    /// tracking should go through a synchronizer that amortizes the
    /// lookup instead.
    pub fn segment_at(&self, position: f64) -> Option<(usize, &Segment)> {
        self.segments
            .iter()
            .enumerate()
            .find(|(_, seg)| seg.contains(position))
    }
}

// ============================================================================
// Wire Envelopes
// ============================================================================

/// Response from `GET /channel-list`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelListResponse {
    /// Registered channels; the backend may omit the field entirely
    #[serde(default)]
    pub channel_list: Vec<Channel>,
}

/// Response from `POST /episodes`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EpisodesResponse {
    pub episodes: Vec<Episode>,
}

/// Response from `POST /transcribe`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TranscribeResponse {
    pub transcription: Transcription,
}

/// Error payload carried by non-success responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: Option<String>,
}

/// Body shape accepted for endpoints that answer with an empty object
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EmptyResponse {}

/// Request body for `POST /episodes`
#[derive(Debug, Serialize)]
pub(crate) struct EpisodesRequest<'a> {
    pub channel: &'a Channel,
}

/// Request body for `POST /transcribe`
#[derive(Debug, Serialize)]
pub(crate) struct TranscribeRequest<'a> {
    pub episode: &'a Episode,
    pub channel: &'a Channel,
}

/// Request body for `POST /channel-register`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterRequest<'a> {
    pub new_rss_url: &'a str,
}

/// Request body for `POST /channel-delete`
///
/// The backend expects the id as a string even though channel ids are
/// numeric.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteRequest {
    pub del_rss_id: String,
}
