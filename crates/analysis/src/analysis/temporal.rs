//! Temporal analysis
//!
//! Functions for reading timing information off a recorded trajectory.

use demedrive_sim::simulation::Trajectory;

/// Which deme to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemeId {
    /// Deme 1
    Target,
    /// Deme 2
    NonTarget,
}

/// First generation at which the drive frequency in `deme` reaches `level`
/// or more. `None` if it never does within the trajectory.
pub fn generations_to_reach(trajectory: &Trajectory, deme: DemeId, level: f64) -> Option<usize> {
    trajectory
        .iter()
        .find(|snap| {
            let q = match deme {
                DemeId::Target => snap.q1,
                DemeId::NonTarget => snap.q2,
            };
            q.get() >= level
        })
        .map(|snap| snap.generation)
}

/// Largest per-deme change between each pair of consecutive snapshots.
pub fn change_per_generation(trajectory: &Trajectory) -> Vec<f64> {
    let snaps: Vec<_> = trajectory.iter().collect();
    snaps
        .windows(2)
        .map(|pair| pair[1].max_change(pair[0]))
        .collect()
}
