//! One frame's worth of bars and the ranking pass that prepares it.

use crate::core::constants::FULL_SCALE_WIDTH;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub category: String,
    pub value: i64,
    /// Rendered length in columns, `0.0..=150.0`. Set by [`Snapshot::rank`].
    pub width: f64,
}

impl Bar {
    #[must_use]
    pub fn new(label: impl Into<String>, category: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            category: category.into(),
            value,
            width: 0.0,
        }
    }

    /// Whole columns actually drawn for this bar.
    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.width.round() as usize
    }
}

/// Bars sharing one timestamp.
#[derive(Clone, Debug)]
pub struct Snapshot {
    timestamp: String,
    bars: Vec<Bar>,
    limit: usize,
    ranked: bool,
}

impl Snapshot {
    #[must_use]
    pub fn new(timestamp: impl Into<String>, limit: usize) -> Self {
        Self {
            timestamp: timestamp.into(),
            bars: Vec::with_capacity(limit),
            limit,
            ranked: false,
        }
    }

    pub fn push(&mut self, bar: Bar) {
        debug_assert!(!self.ranked, "bar pushed into a ranked snapshot");
        self.bars.push(bar);
    }

    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[inline]
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[inline]
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    #[must_use]
    pub fn is_ranked(&self) -> bool {
        self.ranked
    }

    /// Largest and smallest value left after ranking, `(min, max)`.
    #[must_use]
    pub fn value_range(&self) -> Option<(i64, i64)> {
        Some((self.bars.last()?.value, self.bars.first()?.value))
    }

    /// Sort descending (stable), drop everything past `limit`, then size the
    /// bars against the largest value. Later calls do nothing.
    ///
    /// # Panics
    /// If the snapshot holds fewer bars than its limit. The loader never
    /// builds such a snapshot.
    pub fn rank(&mut self) {
        if self.ranked {
            return;
        }
        assert!(
            self.limit <= self.bars.len(),
            "snapshot {} has {} bars, fewer than its limit {}",
            self.timestamp,
            self.bars.len(),
            self.limit
        );

        // `sort_by` is stable: equal values keep file order
        self.bars.sort_by(|a, b| b.value.cmp(&a.value));
        self.bars.truncate(self.limit);

        let max = self.bars.first().map_or(0, |b| b.value);
        for bar in &mut self.bars {
            bar.width = if max > 0 {
                let scaled = FULL_SCALE_WIDTH as f64 * bar.value as f64 / max as f64;
                scaled.clamp(0.0, FULL_SCALE_WIDTH as f64)
            } else {
                0.0
            };
        }
        self.ranked = true;
    }
}
