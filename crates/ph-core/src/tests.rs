//! Unit tests for ph-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_next_and_display() {
        let t = Tick(10);
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick::ZERO.next().to_string(), "T1");
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig { total_ticks: 500, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(500));
    }
}

#[cfg(test)]
mod params {
    use crate::{Distribution, PhError, SimParams};

    #[test]
    fn defaults_are_valid() {
        assert!(SimParams::default().validate().is_ok());
    }

    #[test]
    fn zero_agents_rejected() {
        let p = SimParams { agent_count: 0, ..SimParams::default() };
        assert!(matches!(p.validate(), Err(PhError::Config(_))));
    }

    #[test]
    fn non_finite_rejected() {
        let p = SimParams { speed: f32::NAN, ..SimParams::default() };
        assert!(matches!(p.validate(), Err(PhError::NonFinite { name: "speed", .. })));

        let p = SimParams { turn_speed: f32::INFINITY, ..SimParams::default() };
        assert!(matches!(p.validate(), Err(PhError::NonFinite { name: "turn_speed", .. })));
    }

    #[test]
    fn decay_outside_unit_interval_rejected() {
        let p = SimParams { decay_factor: 1.01, ..SimParams::default() };
        assert!(p.validate().is_err());
        let p = SimParams { decay_factor: -0.1, ..SimParams::default() };
        assert!(p.validate().is_err());
        let p = SimParams { decay_factor: 1.0, ..SimParams::default() };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn negative_speed_rejected() {
        let p = SimParams { speed: -1.0, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn negative_angles_allowed() {
        // A negative sensor angle just mirrors the sensors.
        let p = SimParams { sensor_angle: -0.5, turn_speed: -0.2, ..SimParams::default() };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn distribution_display() {
        assert_eq!(Distribution::CenterDisk.to_string(), "center-disk");
        assert_eq!(Distribution::UniformRandom.to_string(), "uniform-random");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.coin_flip(), r2.coin_flip());
            assert_eq!(r1.uniform(0.0, 1.0), r2.uniform(0.0, 1.0));
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<f32> = (0..8).map(|_| r0.uniform(0.0, 1.0)).collect();
        let b: Vec<f32> = (0..8).map(|_| r1.uniform(0.0, 1.0)).collect();
        assert_ne!(a, b, "streams for adjacent agents should diverge");
    }

    #[test]
    fn coin_flip_is_roughly_fair() {
        let mut rng = SimRng::new(7);
        let heads = (0..10_000).filter(|_| rng.coin_flip()).count();
        assert!((4_700..5_300).contains(&heads), "got {heads} heads");
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.uniform(1.0, 1.25);
            assert!((1.0..=1.25).contains(&v));
        }
        assert_eq!(rng.uniform(2.0, 2.0), 2.0);
    }

    #[test]
    fn child_rngs_diverge() {
        let mut root = SimRng::new(99);
        let mut a = root.child(0);
        let mut b = root.child(0);
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_ne!(x, y);
    }
}
