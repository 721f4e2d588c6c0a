use std::path::Path;

use anyhow::Context;
use clap::Parser;
use log::info;

use cec_landscape::{render_landscape, RESOLUTION};

/// Render the landscape of a CEC 2013 niching benchmark problem.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Problem ID of the suite (1 to 20; only 2-dimensional problems can be drawn)
    problem_id: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("rendering problem {}", args.problem_id);

    render_landscape(args.problem_id, Path::new("."), RESOLUTION)
        .with_context(|| format!("failed to render problem {}", args.problem_id))?;

    Ok(())
}
