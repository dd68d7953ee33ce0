//! Unit tests for ph-agent.

use ph_core::{Distribution, HeadingMode, SimRng};

use crate::{Agent, AgentPopulation, PopulationBuilder};

fn init(count: usize, dist: Distribution, w: usize, h: usize, seed: u64) -> AgentPopulation {
    let mut pop = AgentPopulation::new();
    pop.initialize(count, &dist, w, h, &mut SimRng::new(seed)).unwrap();
    pop
}

#[cfg(test)]
mod wrap {
    use crate::wrap_coord;

    use super::*;

    #[test]
    fn wraps_both_directions() {
        let mut a = Agent::new(10.5, -0.5, 0.0);
        a.wrap(10.0, 8.0);
        assert!((a.x - 0.5).abs() < 1e-6);
        assert!((a.y - 7.5).abs() < 1e-6);
    }

    #[test]
    fn tiny_negative_never_yields_len() {
        let v = wrap_coord(-1e-9, 10.0);
        assert!((0.0..10.0).contains(&v), "got {v}");
    }

    #[test]
    fn large_steps_wrap_fully() {
        assert!((wrap_coord(35.0, 10.0) - 5.0).abs() < 1e-5);
        assert!((wrap_coord(-25.0, 10.0) - 5.0).abs() < 1e-5);
    }
}

#[cfg(test)]
mod placement {
    use std::f32::consts::{FRAC_PI_2, TAU};

    use super::*;
    use crate::DISK_RADIUS_FRACTION;

    #[test]
    fn uniform_in_bounds_with_exact_count() {
        let pop = init(2_000, Distribution::UniformRandom, 64, 32, 1);
        assert_eq!(pop.len(), 2_000);
        for a in &pop {
            assert!((0.0..64.0).contains(&a.x));
            assert!((0.0..32.0).contains(&a.y));
            assert!((0.0..TAU).contains(&a.heading));
        }
    }

    #[test]
    fn uniform_spreads_over_field() {
        let pop = init(4_000, Distribution::UniformRandom, 100, 100, 2);
        let left = pop.iter().filter(|a| a.x < 50.0).count();
        assert!((1_700..2_300).contains(&left), "left half got {left}");
    }

    #[test]
    fn center_point_even_headings() {
        let dist = Distribution::CenterPoint { headings: HeadingMode::Even };
        let pop = init(4, dist, 20, 10, 3);
        for (i, a) in pop.iter().enumerate() {
            assert_eq!((a.x, a.y), (10.0, 5.0));
            let expected = TAU * i as f32 / 4.0 - FRAC_PI_2;
            assert!((a.heading - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn center_point_random_headings() {
        let dist = Distribution::CenterPoint { headings: HeadingMode::Random };
        let pop = init(50, dist, 20, 10, 3);
        assert!(pop.iter().all(|a| a.x == 10.0 && a.y == 5.0));
        let distinct = pop.iter().filter(|a| a.heading != pop.as_slice()[0].heading).count();
        assert!(distinct > 40);
    }

    #[test]
    fn center_disk_within_radius() {
        let pop = init(3_000, Distribution::CenterDisk, 200, 100, 4);
        let radius = 200.0 * DISK_RADIUS_FRACTION;
        for a in &pop {
            let dx = a.x - 100.0;
            let dy = a.y - 50.0;
            assert!((dx * dx + dy * dy).sqrt() <= radius + 1e-3);
        }
    }

    #[test]
    fn center_disk_area_uniform() {
        // Half the area of a disk lies outside radius R/√2.
        let pop = init(8_000, Distribution::CenterDisk, 100, 100, 5);
        let inner_r = 100.0 * DISK_RADIUS_FRACTION / 2f32.sqrt();
        let inner = pop
            .iter()
            .filter(|a| ((a.x - 50.0).powi(2) + (a.y - 50.0).powi(2)).sqrt() < inner_r)
            .count();
        assert!((3_600..4_400).contains(&inner), "inner half-area got {inner}");
    }

    #[test]
    fn center_disk_wraps_on_elongated_fields() {
        let pop = init(1_000, Distribution::CenterDisk, 400, 10, 6);
        assert!(pop.iter().all(|a| (0.0..10.0).contains(&a.y) && (0.0..400.0).contains(&a.x)));
    }
}

#[cfg(test)]
mod population {
    use super::*;

    #[test]
    fn initialize_replaces_existing() {
        let mut pop = init(100, Distribution::UniformRandom, 10, 10, 7);
        pop.initialize(3, &Distribution::CenterDisk, 10, 10, &mut SimRng::new(8)).unwrap();
        assert_eq!(pop.len(), 3);
    }

    #[test]
    fn zero_count_rejected_and_prior_kept() {
        let mut pop = init(5, Distribution::UniformRandom, 10, 10, 9);
        let before = pop.as_slice().to_vec();
        assert!(pop.initialize(0, &Distribution::UniformRandom, 10, 10, &mut SimRng::new(1)).is_err());
        assert_eq!(pop.as_slice(), before.as_slice());
    }

    #[test]
    fn zero_dimension_rejected() {
        let mut pop = AgentPopulation::new();
        assert!(pop.initialize(5, &Distribution::UniformRandom, 0, 10, &mut SimRng::new(1)).is_err());
        assert!(pop.is_empty());
    }

    #[test]
    fn same_seed_same_layout() {
        let a = init(50, Distribution::UniformRandom, 30, 30, 11);
        let b = init(50, Distribution::UniformRandom, 30, 30, 11);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn builder_aligns_rngs_with_agents() {
        let (agents, rngs) = PopulationBuilder::new(25)
            .distribution(Distribution::CenterDisk)
            .build(40, 40, &mut SimRng::new(1))
            .unwrap();
        assert_eq!(agents.len(), 25);
        assert_eq!(rngs.len(), 25);
        assert_eq!(agents.agent_ids().count(), 25);
    }

    #[test]
    fn builder_rejects_empty_population() {
        let result = PopulationBuilder::new(0).build(40, 40, &mut SimRng::new(1));
        assert!(result.is_err());
        let result = PopulationBuilder::new(5).build(40, 0, &mut SimRng::new(1));
        assert!(result.is_err());
    }
}
