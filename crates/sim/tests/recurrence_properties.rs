//! Integration tests for the behaviour of the two-deme recurrence.

use demedrive_sim::prelude::*;
use demedrive_sim::simulation::LifeCycle;
use proptest::prelude::*;

/// Independent rendition of one generation (selection, then symmetric
/// migration), used as the reference trajectory.
fn reference_step(q1: f64, q2: f64, s: f64, c: f64, h: f64, m: f64) -> (f64, f64) {
    let select = |q: f64| {
        let p = 1.0 - q;
        let s_n = 0.5 * (1.0 - c) * (1.0 - h * s);
        let s_c = c * (1.0 - s);
        let w = q * q * (1.0 - s) + 2.0 * p * q * (2.0 * s_n + s_c) + p * p;
        (q * q * (1.0 - s) + 2.0 * p * q * (s_n + s_c)) / w
    };
    let a = select(q1);
    let b = select(q2);
    (
        ((1.0 - m) * a + m * b).clamp(0.0, 1.0),
        ((1.0 - m) * b + m * a).clamp(0.0, 1.0),
    )
}

/// Independent rendition of one generation with asymmetric migration
/// (deme 2 -> 1 at `m`, deme 1 -> 2 at `alpha * m`) followed by selection.
#[allow(clippy::too_many_arguments)]
fn reference_step_migration_first(
    q1: f64,
    q2: f64,
    s: f64,
    c: f64,
    h: f64,
    m: f64,
    alpha: f64,
) -> (f64, f64) {
    let a = ((1.0 - alpha * m) * q1 + m * q2) / (1.0 - alpha * m + m);
    let b = ((1.0 - m) * q2 + alpha * m * q1) / (1.0 - m + alpha * m);
    let s_n = 0.5 * (1.0 - c) * (1.0 - h * s);
    let s_c = c * (1.0 - s);
    let select = |q: f64| {
        let p = 1.0 - q;
        let w = q * q * (1.0 - s) + 2.0 * q * p * (2.0 * s_n + s_c) + p * p;
        (q * q * (1.0 - s) + 2.0 * q * p * (s_n + s_c)) / w
    };
    (select(a), select(b))
}

fn scenario() -> SimulationParameters {
    SimulationParameters::new(0.1, 0.9, 0.0, 0.05, 0.01, 0.0).unwrap()
}

#[test]
fn test_scenario_first_step_spreads_drive() {
    let mut engine = RecurrenceEngine::new(scenario());
    let (q1, q2) = engine.step();
    assert!(q1.get() > 0.01, "q1 should increase, got {q1}");
    assert!(q2.get() > 0.0, "q2 should receive migrants, got {q2}");
    assert!(q2.get() < q1.get());
}

#[test]
fn test_scenario_matches_reference_after_200_generations() {
    let mut engine = RecurrenceEngine::new(scenario());
    let (mut r1, mut r2) = (0.01, 0.0);
    for _ in 0..200 {
        engine.step();
        (r1, r2) = reference_step(r1, r2, 0.1, 0.9, 0.0, 0.05);
    }
    let snap = engine.current();
    assert_eq!(snap.generation, 200);
    assert!((snap.q1.get() - r1).abs() < 1e-6);
    assert!((snap.q2.get() - r2).abs() < 1e-6);

    // Equilibrium reached: one more generation barely moves either deme.
    let before = engine.current();
    engine.step();
    assert!(engine.current().max_change(&before) < 1e-6);
}

#[test]
fn test_migration_first_asymmetric_matches_reference() {
    let (s, c, h, m, alpha) = (0.6, 0.72, 1.0, 0.08, 0.1);
    let params = SimulationParameters::new(s, c, h, m, 0.7, 0.1)
        .unwrap()
        .with_alpha(alpha)
        .unwrap()
        .with_life_cycle(LifeCycle::MigrationThenSelection);
    let mut engine = RecurrenceEngine::new(params);
    let (mut r1, mut r2) = (0.7, 0.1);
    for generation in 1..=500 {
        let (q1, q2) = engine.step();
        (r1, r2) = reference_step_migration_first(r1, r2, s, c, h, m, alpha);
        assert!((q1.get() - r1).abs() < 1e-12, "q1 at generation {generation}");
        assert!((q2.get() - r2).abs() < 1e-12, "q2 at generation {generation}");
    }
}

#[test]
fn test_isolated_demes_are_independent() {
    let base = SimulationParameters::new(0.3, 0.7, 0.4, 0.0, 0.25, 0.0).unwrap();
    let mut a = RecurrenceEngine::new(base);
    let mut b = RecurrenceEngine::new(base.with_initial(0.25, 0.9).unwrap());
    for _ in 0..100 {
        let (a1, _) = a.step();
        let (b1, _) = b.step();
        assert_eq!(a1, b1);
    }
}

#[test]
fn test_migration_alone_homogenizes() {
    let params = SimulationParameters::new(0.0, 0.0, 0.5, 0.1, 0.9, 0.1).unwrap();
    let mut engine = RecurrenceEngine::new(params);
    engine.run_for(500);
    let snap = engine.current();
    assert!((snap.q1.get() - snap.q2.get()).abs() < 1e-9);
    // symmetric exchange conserves the mean
    assert!((snap.q1.get() - 0.5).abs() < 1e-9);
}

#[test]
fn test_absent_drive_never_appears() {
    let params = SimulationParameters::new(0.2, 0.9, 0.5, 0.0, 0.0, 0.0).unwrap();
    let mut engine = RecurrenceEngine::new(params);
    for _ in 0..1000 {
        let (q1, q2) = engine.step();
        assert_eq!(q1, Frequency::ZERO);
        assert_eq!(q2, Frequency::ZERO);
    }
}

#[test]
fn test_fixed_cost_free_drive_stays_fixed() {
    for c in [0.0, 0.3, 1.0] {
        let params = SimulationParameters::new(0.0, c, 0.5, 0.0, 1.0, 0.2).unwrap();
        let mut engine = RecurrenceEngine::new(params);
        for _ in 0..200 {
            let (q1, _) = engine.step();
            assert_eq!(q1, Frequency::ONE, "c = {c}");
        }
    }
}

#[test]
fn test_reset_reproduces_fresh_trajectory() {
    let params = Preset::B2.parameters();
    let mut fresh = RecurrenceEngine::new(params);
    let expected = fresh.trajectory(75);

    let mut reused = RecurrenceEngine::new(Preset::RodentDominant.parameters());
    reused.run_for(33);
    reused.reset(params);
    let actual = reused.trajectory(75);

    assert_eq!(expected, actual);
}

#[test]
fn test_symmetric_alpha_equals_plain_exchange() {
    let params = Preset::InteractiveDefault.parameters();
    let mut plain = RecurrenceEngine::new(params);
    let mut explicit = RecurrenceEngine::new(params.with_alpha(1.0).unwrap());
    for _ in 0..50 {
        assert_eq!(plain.step(), explicit.step());
    }
}

#[test]
fn test_lethal_fixed_drive_stays_in_domain() {
    let params = SimulationParameters::new(1.0, 1.0, 1.0, 0.0, 1.0, 0.5).unwrap();
    let mut engine = RecurrenceEngine::new(params);
    for _ in 0..10 {
        let (q1, q2) = engine.step();
        assert!(!q1.get().is_nan() && !q2.get().is_nan());
    }
    assert_eq!(engine.current().q1, Frequency::ONE);
}

fn arb_parameters() -> impl Strategy<Value = SimulationParameters> {
    (
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..=1.0f64,
        any::<bool>(),
    )
        .prop_map(|(s, c, h, m, alpha_frac, q1, q2, migration_first)| {
            // alpha in [0, 1/m] keeps alpha * m <= 1
            let alpha = if m > 0.0 { alpha_frac / m } else { alpha_frac };
            let life_cycle = if migration_first {
                LifeCycle::MigrationThenSelection
            } else {
                LifeCycle::SelectionThenMigration
            };
            SimulationParameters {
                s,
                c,
                h,
                m,
                alpha: alpha.min(1e6),
                q1_0: q1,
                q2_0: q2,
                life_cycle,
            }
        })
}

proptest! {
    #[test]
    fn frequencies_stay_in_unit_interval(params in arb_parameters(), steps in 1usize..60) {
        let mut engine = RecurrenceEngine::new(params);
        for _ in 0..steps {
            let (q1, q2) = engine.step();
            prop_assert!((0.0..=1.0).contains(&q1.get()));
            prop_assert!((0.0..=1.0).contains(&q2.get()));
        }
    }

    #[test]
    fn step_is_deterministic(params in arb_parameters(), steps in 1usize..30) {
        let mut a = RecurrenceEngine::new(params);
        let mut b = RecurrenceEngine::new(params);
        for _ in 0..steps {
            prop_assert_eq!(a.step(), b.step());
        }
        prop_assert_eq!(a.generation(), steps);
    }

    #[test]
    fn genotype_frequencies_sum_to_one(params in arb_parameters(), steps in 0usize..20) {
        let mut engine = RecurrenceEngine::new(params);
        engine.run_for(steps);
        for g in engine.genotype_frequencies() {
            prop_assert!((g.total() - 1.0).abs() < 1e-9);
        }
    }
}
