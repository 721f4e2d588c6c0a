//! Landscapes of the CEC 2013 niching benchmark suite.
//!
//! A problem is sampled on a square grid over its first two axes, the
//! result is written as a grayscale JPEG, and the sampled extents are
//! written as a three line text summary.

use std::path::{Path, PathBuf};

use log::info;

pub mod error;
pub mod landscape;
pub mod render;
pub mod suite;
pub mod summary;

pub use error::{Error, Result};
pub use landscape::{Landscape, RESOLUTION};
pub use suite::{Benchmark, Cec2013};

/// Files written for one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub image: PathBuf,
    pub bounds: PathBuf,
}

impl Artifacts {
    pub fn for_problem(id: u32, out_dir: &Path) -> Self {
        Self {
            image: out_dir.join(format!("fun_{}.jpg", id)),
            bounds: out_dir.join(format!("fun_{}_bounds.csv", id)),
        }
    }
}

/// Samples problem `id` and writes its image and bounds summary into `out_dir`.
///
/// Nothing is written unless the problem exists, is two dimensional, and
/// has at least one sample that is not NaN.
pub fn render_landscape(id: u32, out_dir: &Path, resolution: usize) -> Result<Artifacts> {
    let problem = Cec2013::new(id)?;
    let landscape = Landscape::sample(&problem, resolution)?;
    if landscape.value_range().is_none() {
        return Err(Error::UndefinedRange);
    }

    let artifacts = Artifacts::for_problem(id, out_dir);
    render::save_jpeg(&landscape, &artifacts.image)?;
    info!("wrote {}", artifacts.image.display());
    summary::write_bounds(&landscape, &artifacts.bounds)?;
    info!("wrote {}", artifacts.bounds.display());

    Ok(artifacts)
}
