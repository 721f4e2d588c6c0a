//! Closed-form problems of the suite and the building blocks of the
//! composition functions.

use std::f64::consts::PI;

/// Piecewise linear trap with two global peaks at the domain ends.
/// Points outside `[0, 30]` evaluate to `-1`.
pub fn five_uneven_peak_trap(x: &[f64]) -> f64 {
    let x = x[0];
    match x {
        x if (0.0..2.5).contains(&x) => 80.0 * (2.5 - x),
        x if (2.5..5.0).contains(&x) => 64.0 * (x - 2.5),
        x if (5.0..7.5).contains(&x) => 64.0 * (7.5 - x),
        x if (7.5..12.5).contains(&x) => 28.0 * (x - 7.5),
        x if (12.5..17.5).contains(&x) => 28.0 * (17.5 - x),
        x if (17.5..22.5).contains(&x) => 32.0 * (x - 17.5),
        x if (22.5..27.5).contains(&x) => 32.0 * (27.5 - x),
        x if (27.5..=30.0).contains(&x) => 80.0 * (x - 27.5),
        _ => -1.0,
    }
}

pub fn equal_maxima(x: &[f64]) -> f64 {
    (5.0 * PI * x[0]).sin().powi(6)
}

pub fn uneven_decreasing_maxima(x: &[f64]) -> f64 {
    let x = x[0];
    let envelope = (-2.0 * 2f64.ln() * ((x - 0.08) / 0.854).powi(2)).exp();
    envelope * (5.0 * PI * (x.powf(0.75) - 0.05)).sin().powi(6)
}

pub fn himmelblau(x: &[f64]) -> f64 {
    let (x, y) = (x[0], x[1]);
    200.0 - (x * x + y - 11.0).powi(2) - (x + y * y - 7.0).powi(2)
}

pub fn six_hump_camel_back(x: &[f64]) -> f64 {
    let (x, y) = (x[0], x[1]);
    let (x2, y2) = (x * x, y * y);
    -((4.0 - 2.1 * x2 + x2 * x2 / 3.0) * x2 + x * y + (4.0 * y2 - 4.0) * y2)
}

pub fn shubert(x: &[f64]) -> f64 {
    let product: f64 = x
        .iter()
        .map(|&xi| {
            (1..=5)
                .map(|j| {
                    let j = j as f64;
                    j * ((j + 1.0) * xi + j).cos()
                })
                .sum::<f64>()
        })
        .product();
    -product
}

pub fn vincent(x: &[f64]) -> f64 {
    x.iter().map(|xi| (10.0 * xi.ln()).sin()).sum::<f64>() / x.len() as f64
}

pub fn modified_rastrigin(x: &[f64]) -> f64 {
    const FREQUENCIES: [f64; 2] = [3.0, 4.0];
    let sum: f64 = x
        .iter()
        .zip(FREQUENCIES)
        .map(|(xi, k)| 10.0 + 9.0 * (2.0 * PI * k * xi).cos())
        .sum();
    -sum
}

pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

pub fn rastrigin(x: &[f64]) -> f64 {
    x.iter()
        .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos() + 10.0)
        .sum()
}

pub fn griewank(x: &[f64]) -> f64 {
    let sum = sphere(x) / 4000.0;
    let product: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum - product + 1.0
}

pub fn weierstrass(x: &[f64]) -> f64 {
    const ALPHA: f64 = 0.5;
    const BETA: f64 = 3.0;
    const K_MAX: i32 = 20;

    let series = |v: f64| {
        (0..=K_MAX)
            .map(|k| ALPHA.powi(k) * (2.0 * PI * BETA.powi(k) * (v + 0.5)).cos())
            .sum::<f64>()
    };
    let offset = x.len() as f64 * series(0.0);
    x.iter().map(|&xi| series(xi)).sum::<f64>() - offset
}

/// Griewank applied to the Rosenbrock value of a coordinate pair.
fn f8f2(a: f64, b: f64) -> f64 {
    let rosenbrock = 100.0 * (a * a - b).powi(2) + (1.0 - a).powi(2);
    1.0 + rosenbrock * rosenbrock / 4000.0 - rosenbrock.cos()
}

/// Expanded Griewank plus Rosenbrock, wrapping the last coordinate around
/// to the first. Coordinates are shifted by one so the optimum is at the origin.
pub fn expanded_griewank_rosenbrock(x: &[f64]) -> f64 {
    let n = x.len();
    (0..n)
        .map(|i| f8f2(x[i] + 1.0, x[(i + 1) % n] + 1.0))
        .sum()
}
