use crate::animation::values::Interpolatable;

/// An ordered sequence of timestamped keyframe values for one target.
///
/// `times` holds clip-local tick timestamps in non-decreasing order, as
/// guaranteed by the importer; they are never re-sorted here. `values` is
/// parallel to `times`. Both are immutable after construction.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>) -> Self {
        debug_assert_eq!(times.len(), values.len(), "times/values length mismatch");
        Self { times, values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Samples the track at `time` (clip-local ticks).
    ///
    /// A single-key track returns that key's value verbatim; this is the
    /// common case for a bone that does not move during the clip. Otherwise
    /// the bracketing interval is found by a linear scan from the start —
    /// clips are short, and the scan is correct both for monotonically
    /// increasing `time` across ticks and for out-of-order queries. When
    /// `time` is at or past the last timestamp the bracketing index clamps
    /// to `len - 2` rather than letting the search degenerate.
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        assert!(!self.times.is_empty(), "track is empty");

        let len = self.times.len();
        if len == 1 {
            return self.values[0];
        }

        let mut index = len - 2;
        for i in 0..len - 1 {
            if time < self.times[i + 1] {
                index = i;
                break;
            }
        }

        let t0 = self.times[index];
        let t1 = self.times[index + 1];
        let dt = t1 - t0;
        let factor = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };

        // Queries inside [times[0], last) must bracket cleanly; anything else
        // is a caller error. Release builds clamp and stay defined.
        debug_assert!(
            (0.0..=1.0).contains(&factor) || time < self.times[0] || time >= self.times[len - 1],
            "interpolation factor {factor} out of range at time {time}"
        );
        let factor = factor.clamp(0.0, 1.0);

        T::interpolate(self.values[index], self.values[index + 1], factor)
    }
}
