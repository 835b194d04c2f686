//! Active-segment tracking against a playback position stream

use podapi::Segment;

/// Tracks which transcript segment is active for a stream of playback
/// positions
///
/// The synchronizer is a pure read-and-project component: it never
/// mutates the segment list or the playback position, and performs no
/// I/O. One synchronizer serves one transcript; drop it when the
/// playback element it follows goes away.
///
/// # Sticky policy
///
/// When a position falls outside every segment (before the first start,
/// in a gap, past the last end, or a NaN sample), the previously held
/// index is retained unchanged. The highlighted segment therefore never
/// blanks out during gaps or out-of-range seeks.
///
/// # Complexity
///
/// Position samples arrive at media-element `timeupdate` frequency, so
/// the lookup binary-searches the sorted segment starts in O(log n)
/// instead of scanning linearly. For short transcripts a linear scan
/// would do; long episodes can carry thousands of segments.
///
/// # Example
///
/// ```
/// use podapi::Segment;
/// use podsync::PlaybackSynchronizer;
///
/// let segments = vec![
///     Segment::new(0.0, 5.0, "first"),
///     Segment::new(5.0, 10.0, "second"),
/// ];
/// let mut sync = PlaybackSynchronizer::new(segments);
///
/// assert_eq!(sync.update(2.0), 0);
/// assert_eq!(sync.update(6.0), 1);
/// assert_eq!(sync.update(12.0), 1); // past the end: sticky
/// ```
pub struct PlaybackSynchronizer {
    segments: Vec<Segment>,
    active: usize,
    on_index_changed: Option<Box<dyn Fn(usize) + Send>>,
}

impl PlaybackSynchronizer {
    /// Create a synchronizer over an ordered, non-overlapping segment list
    ///
    /// The active index starts at 0 before any sample has matched.
    pub fn new(segments: Vec<Segment>) -> Self {
        debug_assert!(
            segments.windows(2).all(|w| w[0].end <= w[1].start),
            "segments must be sorted and non-overlapping"
        );

        Self {
            segments,
            active: 0,
            on_index_changed: None,
        }
    }

    /// Create a synchronizer with a change callback already registered
    pub fn with_callback<F>(segments: Vec<Segment>, callback: F) -> Self
    where
        F: Fn(usize) + Send + 'static,
    {
        let mut sync = Self::new(segments);
        sync.set_on_index_changed(callback);
        sync
    }

    /// Register the callback fired on active-index transitions
    ///
    /// The callback runs exactly once per transition, with the new
    /// index; samples that leave the index unchanged never fire it.
    /// The usual hook scrolls the matching transcript element into
    /// view.
    pub fn set_on_index_changed<F>(&mut self, callback: F)
    where
        F: Fn(usize) + Send + 'static,
    {
        self.on_index_changed = Some(Box::new(callback));
    }

    /// Feed one playback-position sample and return the active index
    ///
    /// Hot path: no allocation, no I/O, O(log n) lookup.
    pub fn update(&mut self, position: f64) -> usize {
        if let Some(index) = self.locate(position) {
            if index != self.active {
                self.active = index;
                if let Some(callback) = &self.on_index_changed {
                    callback(index);
                }
            }
        }

        self.active
    }

    /// The currently active segment index
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The currently active segment, if the transcript has any
    pub fn active_segment(&self) -> Option<&Segment> {
        self.segments.get(self.active)
    }

    /// The segment list this synchronizer follows
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Find the unique segment owning a position, if any
    ///
    /// Half-open containment: `start <= position < end`, so boundary
    /// positions belong to the segment starting there.
    fn locate(&self, position: f64) -> Option<usize> {
        // First segment whose start lies strictly past the position;
        // the candidate is its predecessor.
        let upper = self.segments.partition_point(|s| s.start <= position);
        if upper == 0 {
            return None;
        }

        let candidate = upper - 1;
        if position < self.segments[candidate].end {
            Some(candidate)
        } else {
            None
        }
    }
}

impl std::fmt::Debug for PlaybackSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSynchronizer")
            .field("segments", &self.segments.len())
            .field("active", &self.active)
            .field("has_callback", &self.on_index_changed.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn two_segments() -> Vec<Segment> {
        vec![Segment::new(0.0, 5.0, "A"), Segment::new(5.0, 10.0, "B")]
    }

    #[test]
    fn test_matching_sample_selects_owner() {
        let mut sync = PlaybackSynchronizer::new(two_segments());

        assert_eq!(sync.update(2.0), 0);
        assert_eq!(sync.update(6.0), 1);
        assert_eq!(sync.active_segment().unwrap().text, "B");
    }

    #[test]
    fn test_boundary_belongs_to_next_segment() {
        let mut sync = PlaybackSynchronizer::new(two_segments());

        // Half-open: end is exclusive, start inclusive
        assert_eq!(sync.update(5.0), 1);
        assert_eq!(sync.update(0.0), 0);
    }

    #[test]
    fn test_initial_index_is_zero() {
        let sync = PlaybackSynchronizer::new(two_segments());
        assert_eq!(sync.active_index(), 0);
    }

    #[test]
    fn test_out_of_range_samples_are_sticky() {
        let mut sync = PlaybackSynchronizer::new(two_segments());

        assert_eq!(sync.update(6.0), 1);
        // Past the last end: retained
        assert_eq!(sync.update(12.0), 1);
        // Before the first start: retained, not reset
        assert_eq!(sync.update(-1.0), 1);
    }

    #[test]
    fn test_gap_samples_are_sticky() {
        let mut sync = PlaybackSynchronizer::new(vec![
            Segment::new(0.0, 5.0, "A"),
            Segment::new(8.0, 12.0, "B"),
        ]);

        assert_eq!(sync.update(3.0), 0);
        // 5.0..8.0 is a gap between the segments
        assert_eq!(sync.update(6.0), 0);
        assert_eq!(sync.update(9.0), 1);
    }

    #[test]
    fn test_nan_sample_is_harmless() {
        let mut sync = PlaybackSynchronizer::new(two_segments());

        assert_eq!(sync.update(7.0), 1);
        assert_eq!(sync.update(f64::NAN), 1);
    }

    #[test]
    fn test_empty_transcript_never_matches() {
        let mut sync = PlaybackSynchronizer::new(Vec::new());

        assert_eq!(sync.update(3.0), 0);
        assert!(sync.active_segment().is_none());
    }

    #[test]
    fn test_callback_fires_exactly_once_per_transition() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();

        let mut sync = PlaybackSynchronizer::with_callback(two_segments(), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Still in segment 0: index unchanged, no firing
        sync.update(1.0);
        sync.update(3.0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        // One transition into segment 1
        sync.update(7.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // No-op samples after the transition stay silent
        sync.update(8.0);
        sync.update(12.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Back into segment 0 fires again
        sync.update(2.0);
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callback_receives_new_index() {
        let seen = Arc::new(AtomicUsize::new(usize::MAX));
        let sink = seen.clone();

        let mut sync = PlaybackSynchronizer::with_callback(two_segments(), move |index| {
            sink.store(index, Ordering::SeqCst);
        });

        sync.update(6.0);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unique_containment_over_many_segments() {
        let segments: Vec<Segment> = (0..100)
            .map(|i| Segment::new(i as f64, (i + 1) as f64, format!("s{}", i)))
            .collect();
        let mut sync = PlaybackSynchronizer::new(segments);

        for i in 0..100 {
            let t = i as f64 + 0.5;
            assert_eq!(sync.update(t), i);
        }
        assert_eq!(sync.update(99.999), 99);
        assert_eq!(sync.update(100.0), 99); // sticky past the end
    }
}
