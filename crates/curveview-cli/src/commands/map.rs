use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::{load_config, parse_pair};

#[derive(Args)]
pub struct MapArgs {
    /// View config file (TOML)
    pub config: PathBuf,

    /// Point as X,Y (repeatable)
    #[arg(short, long = "point", required = true, allow_hyphen_values = true)]
    pub points: Vec<String>,

    /// Map screen positions back to data space
    #[arg(long)]
    pub inverse: bool,

    /// Fit the view to the widget before mapping
    #[arg(long)]
    pub fit: bool,
}

pub fn run(args: &MapArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let mut controller = config.controller()?;
    if args.fit {
        controller.fit_to_window(config.fit);
    }

    let state = controller.try_snapshot()?;
    let mut cache = config.transform_cache();
    let transform = cache.get_or_build(&state);

    for raw in &args.points {
        let (x, y) = parse_pair(raw)?;
        let (mx, my) = if args.inverse {
            transform.inverse(x, y)?
        } else {
            transform.apply(x, y)
        };
        println!("{x:.4}, {y:.4} -> {mx:.4}, {my:.4}");
    }
    debug!(params = %transform.parameters(), stats = ?cache.stats(), "mapped points");
    Ok(())
}
