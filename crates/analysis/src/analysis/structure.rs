//! Population structure
//!
//! Differentiation between the two demes at the drive locus.

use demedrive_sim::simulation::Snapshot;

/// Expected heterozygosity `2q(1 - q)` of a deme at Hardy–Weinberg
/// equilibrium.
pub fn heterozygosity(q: f64) -> f64 {
    2.0 * q * (1.0 - q)
}

/// Wright's FST between two demes of equal size.
///
/// # Formula
///
/// $$F_{ST} = \frac{H_T - H_S}{H_T}$$
///
/// where $H_S$ is the mean within-deme heterozygosity and $H_T$ the
/// heterozygosity of the pooled population. Returns 0.0 when the pooled
/// population is monomorphic.
pub fn fst(q1: f64, q2: f64) -> f64 {
    let h_s = 0.5 * (heterozygosity(q1) + heterozygosity(q2));
    let h_t = heterozygosity(0.5 * (q1 + q2));
    if h_t <= 0.0 {
        return 0.0;
    }
    ((h_t - h_s) / h_t).clamp(0.0, 1.0)
}

/// FST of a snapshot.
pub fn snapshot_fst(snapshot: &Snapshot) -> f64 {
    fst(snapshot.q1.get(), snapshot.q2.get())
}
