use log::debug;

use crate::{
    error::{Error, Result},
    suite::Benchmark,
};

/// Samples per axis used for rendered landscapes.
pub const RESOLUTION: usize = 1000;

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values = (0..n).map(|i| start + step * i as f64).collect::<Vec<_>>();
            values[n - 1] = end;
            values
        }
    }
}

/// A two dimensional function sampled on a regular grid.
///
/// Rows run along `y` and columns along `x`, stored row-major, so the value at
/// `(xs[column], ys[row])` lives at `row * width + column`.
#[derive(Debug, Clone, PartialEq)]
pub struct Landscape {
    xs: Vec<f64>,
    ys: Vec<f64>,
    values: Vec<f64>,
}

impl Landscape {
    pub fn sample<B: Benchmark + ?Sized>(benchmark: &B, resolution: usize) -> Result<Self> {
        if benchmark.dimension() != 2 {
            return Err(Error::UnsupportedDimension(benchmark.dimension()));
        }
        if resolution == 0 {
            return Err(Error::EmptyGrid);
        }

        let xs = linspace(benchmark.lower_bound(0)?, benchmark.upper_bound(0)?, resolution);
        let ys = linspace(benchmark.lower_bound(1)?, benchmark.upper_bound(1)?, resolution);
        debug!(
            "sampling {}x{} grid over x [{}, {}], y [{}, {}]",
            resolution,
            resolution,
            xs[0],
            xs[resolution - 1],
            ys[0],
            ys[resolution - 1]
        );

        let mut values = Vec::with_capacity(resolution * resolution);
        for &y in &ys {
            for &x in &xs {
                values.push(benchmark.evaluate(&[x, y])?);
            }
        }

        Ok(Self { xs, ys, values })
    }

    pub fn width(&self) -> usize {
        self.xs.len()
    }

    pub fn height(&self) -> usize {
        self.ys.len()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn x_bounds(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    pub fn y_bounds(&self) -> (f64, f64) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    pub fn value(&self, column: usize, row: usize) -> Option<f64> {
        if column >= self.width() || row >= self.height() {
            return None;
        }
        Some(self.values[row * self.width() + column])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.width())
    }

    /// Smallest and largest sampled value, skipping NaN samples.
    /// `None` when every sample is NaN.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
            })
    }
}
