//! Recorded frequency trajectories.
//!
//! A trajectory is the sequence of snapshots a plotter draws as two series
//! (q1 and q2 against generation). It can be bounded to a sliding window of
//! the most recent generations, which is what a live plot keeps.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::Snapshot;

/// Ordered snapshots, optionally limited to the most recent `window` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    points: VecDeque<Snapshot>,
    window: Option<usize>,
}

impl Trajectory {
    /// Unbounded trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trajectory that keeps only the last `window` snapshots.
    ///
    /// A window of zero keeps nothing.
    pub fn bounded(window: usize) -> Self {
        Self {
            points: VecDeque::new(),
            window: Some(window),
        }
    }

    /// Append a snapshot, evicting the oldest one if the window is full.
    pub fn push(&mut self, snapshot: Snapshot) {
        if let Some(window) = self.window {
            if window == 0 {
                return;
            }
            while self.points.len() >= window {
                self.points.pop_front();
            }
        }
        self.points.push_back(snapshot);
    }

    /// Forget every recorded snapshot.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Window size, if bounded.
    pub fn window(&self) -> Option<usize> {
        self.window
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no snapshot is stored.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest stored snapshot.
    pub fn first(&self) -> Option<&Snapshot> {
        self.points.front()
    }

    /// Most recent snapshot.
    pub fn last(&self) -> Option<&Snapshot> {
        self.points.back()
    }

    /// Iterate over stored snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.points.iter()
    }

    /// Deme 1 series.
    pub fn q1_series(&self) -> Vec<f64> {
        self.points.iter().map(|s| s.q1.get()).collect()
    }

    /// Deme 2 series.
    pub fn q2_series(&self) -> Vec<f64> {
        self.points.iter().map(|s| s.q2.get()).collect()
    }
}

impl Extend<Snapshot> for Trajectory {
    fn extend<I: IntoIterator<Item = Snapshot>>(&mut self, iter: I) {
        for snapshot in iter {
            self.push(snapshot);
        }
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Snapshot;
    type IntoIter = std::collections::vec_deque::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
