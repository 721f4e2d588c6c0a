//! The CEC 2013 niching benchmark suite: twenty maximisation problems
//! selected by ID.

use std::fmt;

use crate::error::{Error, Result};

pub mod basic;
pub mod composition;

use composition::{Composition, CompositionKind, COMPOSITION_LOWER_BOUND, COMPOSITION_UPPER_BOUND};

pub const PROBLEM_COUNT: u32 = 20;

const DIMENSIONS: [usize; 20] = [1, 1, 1, 2, 2, 2, 2, 3, 3, 2, 2, 2, 2, 3, 3, 5, 5, 10, 10, 20];
const GLOBAL_OPTIMA: [usize; 20] = [2, 5, 1, 4, 2, 18, 36, 81, 216, 12, 6, 8, 6, 6, 8, 6, 8, 6, 8, 8];
const OPTIMUM_FITNESS: [f64; 20] = [
    200.0,
    1.0,
    1.0,
    200.0,
    1.031628453489877,
    186.7309088310239,
    1.0,
    2709.093505572820,
    1.0,
    -2.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];
const NICHE_RADIUS: [f64; 20] = [
    0.01, 0.01, 0.01, 0.01, 0.5, 0.5, 0.2, 0.5, 0.2, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01,
    0.01, 0.01, 0.01, 0.01,
];
const MAX_EVALUATIONS: [u64; 20] = [
    50_000, 50_000, 50_000, 50_000, 50_000, 200_000, 200_000, 400_000, 400_000, 200_000, 200_000,
    200_000, 200_000, 400_000, 400_000, 400_000, 400_000, 400_000, 400_000, 400_000,
];

/// A box-bounded function that can be sampled point by point.
pub trait Benchmark {
    fn dimension(&self) -> usize;
    fn lower_bound(&self, axis: usize) -> Result<f64>;
    fn upper_bound(&self, axis: usize) -> Result<f64>;
    fn evaluate(&self, point: &[f64]) -> Result<f64>;
}

#[derive(Clone)]
enum Objective {
    Closed(fn(&[f64]) -> f64),
    Composition(Box<Composition>),
}

impl fmt::Debug for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed(_) => f.write_str("Closed"),
            Self::Composition(composition) => fmt::Debug::fmt(composition, f),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cec2013 {
    id: u32,
    objective: Objective,
}

impl Cec2013 {
    pub fn new(id: u32) -> Result<Self> {
        let objective = match id {
            1 => Objective::Closed(basic::five_uneven_peak_trap),
            2 => Objective::Closed(basic::equal_maxima),
            3 => Objective::Closed(basic::uneven_decreasing_maxima),
            4 => Objective::Closed(basic::himmelblau),
            5 => Objective::Closed(basic::six_hump_camel_back),
            6 | 8 => Objective::Closed(basic::shubert),
            7 | 9 => Objective::Closed(basic::vincent),
            10 => Objective::Closed(basic::modified_rastrigin),
            11..=20 => {
                let kind = match id {
                    11 => CompositionKind::Cf1,
                    12 => CompositionKind::Cf2,
                    13 | 14 | 16 | 18 => CompositionKind::Cf3,
                    _ => CompositionKind::Cf4,
                };
                let dimension = DIMENSIONS[id as usize - 1];
                Objective::Composition(Box::new(Composition::new(kind, dimension)))
            }
            _ => return Err(Error::UnknownProblem(id)),
        };

        Ok(Self { id, objective })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    fn index(&self) -> usize {
        self.id as usize - 1
    }

    /// Fitness shared by every global optimum.
    pub fn global_optimum_fitness(&self) -> f64 {
        OPTIMUM_FITNESS[self.index()]
    }

    pub fn global_optima_count(&self) -> usize {
        GLOBAL_OPTIMA[self.index()]
    }

    /// Distance below which two solutions are considered the same peak.
    pub fn niche_radius(&self) -> f64 {
        NICHE_RADIUS[self.index()]
    }

    /// Evaluation budget of the competition protocol.
    pub fn max_evaluations(&self) -> u64 {
        MAX_EVALUATIONS[self.index()]
    }

    fn check_axis(&self, axis: usize) -> Result<()> {
        let dimension = self.dimension();
        if axis >= dimension {
            return Err(Error::AxisOutOfRange { axis, dimension });
        }
        Ok(())
    }

    /// Counts the distinct global optima found in `population`.
    ///
    /// Solutions are visited from best to worst; each one farther than the
    /// niche radius from every seed so far becomes a new seed. Seeds within
    /// `accuracy` of the optimum fitness are counted, up to the number of
    /// optima the problem has. Returns the count and the counted seeds.
    pub fn count_global_optima(
        &self,
        population: &[Vec<f64>],
        accuracy: f64,
    ) -> Result<(usize, Vec<Vec<f64>>)> {
        let mut scored = population
            .iter()
            .map(|point| Ok((self.evaluate(point)?, point)))
            .collect::<Result<Vec<_>>>()?;
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let radius = self.niche_radius();
        let mut seeds: Vec<(f64, &Vec<f64>)> = Vec::new();
        for (fitness, point) in scored {
            let covered = seeds.iter().any(|(_, seed)| {
                let square_distance: f64 = seed
                    .iter()
                    .zip(point.iter())
                    .map(|(a, b)| (a - b).powi(2))
                    .sum();
                square_distance.sqrt() <= radius
            });
            if !covered {
                seeds.push((fitness, point));
            }
        }

        let target = self.global_optimum_fitness();
        let found = seeds
            .into_iter()
            .filter(|(fitness, _)| (fitness - target).abs() <= accuracy)
            .take(self.global_optima_count())
            .map(|(_, point)| point.clone())
            .collect::<Vec<_>>();

        Ok((found.len(), found))
    }
}

impl Benchmark for Cec2013 {
    fn dimension(&self) -> usize {
        DIMENSIONS[self.index()]
    }

    fn lower_bound(&self, axis: usize) -> Result<f64> {
        self.check_axis(axis)?;
        Ok(match self.id {
            1..=3 => 0.0,
            4 => -6.0,
            5 if axis == 0 => -1.9,
            5 => -1.1,
            6 | 8 => -10.0,
            7 | 9 => 0.25,
            10 => 0.0,
            _ => COMPOSITION_LOWER_BOUND,
        })
    }

    fn upper_bound(&self, axis: usize) -> Result<f64> {
        self.check_axis(axis)?;
        Ok(match self.id {
            1 => 30.0,
            2 | 3 => 1.0,
            4 => 6.0,
            5 if axis == 0 => 1.9,
            5 => 1.1,
            6 | 8 => 10.0,
            7 | 9 => 10.0,
            10 => 1.0,
            _ => COMPOSITION_UPPER_BOUND,
        })
    }

    fn evaluate(&self, point: &[f64]) -> Result<f64> {
        let expected = self.dimension();
        if point.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                got: point.len(),
            });
        }

        Ok(match &self.objective {
            Objective::Closed(function) => function(point),
            Objective::Composition(composition) => composition.evaluate(point),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_problem() {
        assert!(matches!(Cec2013::new(0), Err(Error::UnknownProblem(0))));
        assert!(matches!(Cec2013::new(21), Err(Error::UnknownProblem(21))));
    }

    #[test]
    fn test_every_problem_constructs() {
        for id in 1..=PROBLEM_COUNT {
            let problem = Cec2013::new(id).unwrap();
            assert_eq!(problem.id(), id);
            for axis in 0..problem.dimension() {
                let lower = problem.lower_bound(axis).unwrap();
                let upper = problem.upper_bound(axis).unwrap();
                assert!(lower < upper);
            }
            let center = (0..problem.dimension())
                .map(|axis| {
                    let lower = problem.lower_bound(axis).unwrap();
                    let upper = problem.upper_bound(axis).unwrap();
                    (lower + upper) / 2.0
                })
                .collect::<Vec<_>>();
            assert!(problem.evaluate(&center).unwrap().is_finite());
        }
    }

    #[test]
    fn test_bounds() {
        let camel = Cec2013::new(5).unwrap();
        assert_eq!(camel.lower_bound(0).unwrap(), -1.9);
        assert_eq!(camel.upper_bound(0).unwrap(), 1.9);
        assert_eq!(camel.lower_bound(1).unwrap(), -1.1);
        assert_eq!(camel.upper_bound(1).unwrap(), 1.1);

        let composition = Cec2013::new(13).unwrap();
        assert_eq!(composition.lower_bound(1).unwrap(), -5.0);
        assert_eq!(composition.upper_bound(1).unwrap(), 5.0);

        assert!(matches!(
            camel.lower_bound(2),
            Err(Error::AxisOutOfRange {
                axis: 2,
                dimension: 2
            })
        ));
    }

    #[test]
    fn test_evaluate_dimension_mismatch() {
        let trap = Cec2013::new(1).unwrap();
        assert!(matches!(
            trap.evaluate(&[1.0, 2.0]),
            Err(Error::DimensionMismatch {
                expected: 1,
                got: 2
            })
        ));
    }

    #[test]
    fn test_metadata() {
        let shubert = Cec2013::new(6).unwrap();
        assert_eq!(shubert.global_optima_count(), 18);
        assert_eq!(shubert.niche_radius(), 0.5);
        assert_eq!(shubert.max_evaluations(), 200_000);
        assert_eq!(Cec2013::new(20).unwrap().dimension(), 20);
    }

    #[test]
    fn test_count_global_optima() {
        let himmelblau = Cec2013::new(4).unwrap();
        let population = vec![
            vec![3.0, 2.0],
            vec![3.0001, 2.0001],
            vec![-2.805118, 3.131312],
            vec![-3.779310, -3.283186],
            vec![3.584428, -1.848126],
            vec![0.0, 0.0],
        ];
        let (count, seeds) = himmelblau.count_global_optima(&population, 1e-3).unwrap();
        assert_eq!(count, 4);
        assert_eq!(seeds.len(), 4);
        assert!(!seeds.contains(&vec![0.0, 0.0]));

        let (count, _) = himmelblau
            .count_global_optima(&population[..2], 1e-3)
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_count_six_hump_camel_back_optima() {
        let camel = Cec2013::new(5).unwrap();
        let population = vec![
            vec![0.08984201368301331, -0.7126564032704135],
            vec![-0.08984201368301331, 0.7126564032704135],
            vec![0.0, 0.0],
        ];
        let (count, seeds) = camel.count_global_optima(&population, 1e-4).unwrap();
        assert_eq!(count, 2);
        assert!(!seeds.contains(&vec![0.0, 0.0]));
        for seed in &seeds {
            let fitness = camel.evaluate(seed).unwrap();
            assert!((fitness - camel.global_optimum_fitness()).abs() < 1e-4);
        }
    }

    #[test]
    fn test_count_global_optima_rejects_wrong_dimension() {
        let himmelblau = Cec2013::new(4).unwrap();
        let result = himmelblau.count_global_optima(&[vec![1.0]], 1e-3);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }
}
