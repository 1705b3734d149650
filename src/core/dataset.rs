//! Everything read from one data file.

use crate::core::{palette::CategoryPalette, snapshot::Snapshot};

/// The three descriptive lines at the top of a data file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    /// What the values measure, e.g. "Population (thousands)".
    pub label: String,
    pub source: String,
}

/// Header, ranked snapshots in file order, and the category colours
/// assigned while reading them.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub header: Header,
    snapshots: Vec<Snapshot>,
    palette: CategoryPalette,
}

impl Dataset {
    /// Ranks every snapshot that is not ranked yet.
    #[must_use]
    pub fn new(header: Header, mut snapshots: Vec<Snapshot>, palette: CategoryPalette) -> Self {
        for s in &mut snapshots {
            s.rank();
        }
        Self {
            header,
            snapshots,
            palette,
        }
    }

    #[inline]
    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    #[inline]
    #[must_use]
    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
