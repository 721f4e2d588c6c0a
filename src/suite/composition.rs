use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::basic::{expanded_griewank_rosenbrock, griewank, rastrigin, sphere, weierstrass};

pub const COMPOSITION_LOWER_BOUND: f64 = -5.0;
pub const COMPOSITION_UPPER_BOUND: f64 = 5.0;

const HEIGHT: f64 = 2000.0;
const OPTIMA_RANGE: f64 = 4.0;
const SEED: u64 = 2013;

type BasicFunction = fn(&[f64]) -> f64;

static CF1_FUNCTIONS: [BasicFunction; 6] =
    [griewank, griewank, weierstrass, weierstrass, sphere, sphere];
static CF2_FUNCTIONS: [BasicFunction; 8] = [
    rastrigin,
    rastrigin,
    weierstrass,
    weierstrass,
    griewank,
    griewank,
    sphere,
    sphere,
];
static CF3_FUNCTIONS: [BasicFunction; 6] = [
    expanded_griewank_rosenbrock,
    expanded_griewank_rosenbrock,
    weierstrass,
    weierstrass,
    griewank,
    griewank,
];
static CF4_FUNCTIONS: [BasicFunction; 8] = [
    rastrigin,
    rastrigin,
    expanded_griewank_rosenbrock,
    expanded_griewank_rosenbrock,
    weierstrass,
    weierstrass,
    griewank,
    griewank,
];

/// The four composition layouts of the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionKind {
    Cf1,
    Cf2,
    Cf3,
    Cf4,
}

impl CompositionKind {
    fn functions(&self) -> &'static [BasicFunction] {
        match self {
            Self::Cf1 => &CF1_FUNCTIONS,
            Self::Cf2 => &CF2_FUNCTIONS,
            Self::Cf3 => &CF3_FUNCTIONS,
            Self::Cf4 => &CF4_FUNCTIONS,
        }
    }

    fn sigmas(&self) -> &'static [f64] {
        match self {
            Self::Cf1 => &[1.0; 6],
            Self::Cf2 => &[1.0; 8],
            Self::Cf3 => &[1.0, 1.0, 2.0, 2.0, 2.0, 2.0],
            Self::Cf4 => &[1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0],
        }
    }

    fn lambdas(&self) -> &'static [f64] {
        match self {
            Self::Cf1 => &[1.0, 1.0, 8.0, 8.0, 1.0 / 5.0, 1.0 / 5.0],
            Self::Cf2 => &[
                1.0,
                1.0,
                10.0,
                10.0,
                1.0 / 10.0,
                1.0 / 10.0,
                1.0 / 7.0,
                1.0 / 7.0,
            ],
            Self::Cf3 => &[1.0 / 4.0, 1.0 / 10.0, 2.0, 1.0, 2.0, 5.0],
            Self::Cf4 => &[
                4.0,
                1.0,
                4.0,
                1.0,
                1.0 / 10.0,
                1.0 / 5.0,
                1.0 / 10.0,
                1.0 / 40.0,
            ],
        }
    }

    fn rotated(&self) -> bool {
        matches!(self, Self::Cf3 | Self::Cf4)
    }

    fn seed(&self, dimension: usize) -> u64 {
        let kind = match self {
            Self::Cf1 => 1,
            Self::Cf2 => 2,
            Self::Cf3 => 3,
            Self::Cf4 => 4,
        };
        SEED * 1000 + kind * 100 + dimension as u64
    }
}

#[derive(Clone)]
struct Component {
    function: BasicFunction,
    sigma: f64,
    lambda: f64,
    optimum: Vec<f64>,
    rotation: Option<Vec<Vec<f64>>>,
    /// Value at `(5, .., 5)` without shift, used to bring components to a common scale.
    f_max: f64,
}

impl Component {
    /// `((x - shift) / lambda) * M`, with `M` applied from the right.
    fn transform(&self, x: &[f64], shifted: bool) -> Vec<f64> {
        let scaled = x
            .iter()
            .enumerate()
            .map(|(i, xi)| {
                let shift = if shifted { self.optimum[i] } else { 0.0 };
                (xi - shift) / self.lambda
            })
            .collect::<Vec<_>>();

        match &self.rotation {
            None => scaled,
            Some(rotation) => (0..scaled.len())
                .map(|j| {
                    scaled
                        .iter()
                        .zip(rotation)
                        .map(|(s, row)| s * row[j])
                        .sum::<f64>()
                })
                .collect(),
        }
    }

    fn square_distance(&self, x: &[f64]) -> f64 {
        x.iter()
            .zip(&self.optimum)
            .map(|(xi, oi)| (xi - oi).powi(2))
            .sum()
    }
}

/// Weighted blend of shifted basic functions. Every shifted optimum is a
/// global maximum with value 0.
#[derive(Clone)]
pub struct Composition {
    kind: CompositionKind,
    dimension: usize,
    components: Vec<Component>,
}

impl Composition {
    pub fn new(kind: CompositionKind, dimension: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(kind.seed(dimension));

        let mut components = kind
            .functions()
            .iter()
            .zip(kind.sigmas())
            .zip(kind.lambdas())
            .map(|((&function, &sigma), &lambda)| {
                let optimum = (0..dimension)
                    .map(|_| rng.gen_range(-OPTIMA_RANGE..OPTIMA_RANGE))
                    .collect();
                let rotation = kind
                    .rotated()
                    .then(|| random_rotation(&mut rng, dimension));
                Component {
                    function,
                    sigma,
                    lambda,
                    optimum,
                    rotation,
                    f_max: 1.0,
                }
            })
            .collect::<Vec<_>>();

        let corner = vec![COMPOSITION_UPPER_BOUND; dimension];
        for component in components.iter_mut() {
            let z = component.transform(&corner, false);
            component.f_max = (component.function)(&z);
        }

        Self {
            kind,
            dimension,
            components,
        }
    }

    pub fn kind(&self) -> CompositionKind {
        self.kind
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn optima(&self) -> impl Iterator<Item = &[f64]> {
        self.components.iter().map(|c| c.optimum.as_slice())
    }

    fn weights(&self, x: &[f64]) -> Vec<f64> {
        let mut weights = self
            .components
            .iter()
            .map(|c| {
                let spread = 2.0 * self.dimension as f64 * c.sigma * c.sigma;
                (-c.square_distance(x) / spread).exp()
            })
            .collect::<Vec<_>>();

        let max_weight = weights.iter().copied().fold(f64::MIN, f64::max);
        let damping = 1.0 - max_weight.powi(10);
        for weight in weights.iter_mut() {
            if *weight != max_weight {
                *weight *= damping;
            }
        }

        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            let uniform = 1.0 / weights.len() as f64;
            weights.iter_mut().for_each(|w| *w = uniform);
        } else {
            weights.iter_mut().for_each(|w| *w /= total);
        }
        weights
    }

    pub fn evaluate(&self, x: &[f64]) -> f64 {
        let weights = self.weights(x);
        let blended: f64 = self
            .components
            .iter()
            .zip(weights)
            .map(|(c, w)| {
                let z = c.transform(x, true);
                w * HEIGHT * (c.function)(&z) / c.f_max
            })
            .sum();
        -blended
    }
}

impl fmt::Debug for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composition")
            .field("kind", &self.kind)
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

/// Random orthonormal matrix from Gram-Schmidt on uniform rows.
fn random_rotation(rng: &mut StdRng, dimension: usize) -> Vec<Vec<f64>> {
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(dimension);
    while rows.len() < dimension {
        let mut row = (0..dimension)
            .map(|_| rng.gen_range(-1.0..1.0))
            .collect::<Vec<f64>>();
        for basis in &rows {
            let projection: f64 = row.iter().zip(basis).map(|(a, b)| a * b).sum();
            row.iter_mut()
                .zip(basis)
                .for_each(|(a, b)| *a -= projection * b);
        }
        let norm = row.iter().map(|a| a * a).sum::<f64>().sqrt();
        if norm < 1e-8 {
            continue;
        }
        row.iter_mut().for_each(|a| *a /= norm);
        rows.push(row);
    }
    rows
}
