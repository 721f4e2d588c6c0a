use std::{fs::File, io::Write, path::Path};

use crate::{
    error::{Error, Result},
    landscape::Landscape,
};

/// The three summary lines: sampled x and y extents, then the value range.
pub fn bounds_lines(landscape: &Landscape) -> Result<[String; 3]> {
    let (lx, ux) = landscape.x_bounds();
    let (ly, uy) = landscape.y_bounds();
    let (min, max) = landscape.value_range().ok_or(Error::UndefinedRange)?;
    Ok([
        format!("x: {} {}", lx, ux),
        format!("y: {} {}", ly, uy),
        format!("z: {} {}", min, max),
    ])
}

/// Writes the bounds summary, replacing any existing file.
pub fn write_bounds(landscape: &Landscape, path: &Path) -> Result<()> {
    let lines = bounds_lines(landscape)?;
    let mut file = File::create(path)?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()?;
    Ok(())
}
