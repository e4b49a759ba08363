use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use curveview_core::validation::{validate_point, validate_zoom_percent, ValidationPolicy};
use curveview_core::view::ViewState;

use super::{load_config, parse_pair};
use crate::summary::print_issues;

#[derive(Args)]
pub struct ValidateArgs {
    /// View config file (TOML)
    pub config: PathBuf,

    /// Fail on critical issues instead of correcting them
    #[arg(long)]
    pub strict: bool,

    /// Typed zoom percentage to check (e.g. 150)
    #[arg(long, allow_hyphen_values = true)]
    pub zoom_percent: Option<f64>,

    /// Typed data coordinate to check, as X,Y
    #[arg(long, allow_hyphen_values = true)]
    pub coord: Option<String>,
}

pub fn run(args: &ValidateArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    config.check()?;
    let policy = if args.strict {
        ValidationPolicy::Strict
    } else {
        ValidationPolicy::Comprehensive
    };

    let view = ViewState::new(&config.view, policy);
    print_issues("View", &view.issues);

    let zoom = args.zoom_percent.map(|p| validate_zoom_percent(p, policy));
    if let Some(ref result) = zoom {
        print_issues("Zoom entry", &result.issues);
    }

    let coord = match args.coord {
        Some(ref raw) => {
            let (x, y) = parse_pair(raw)?;
            let result = validate_point(x, y, policy);
            print_issues("Coordinate entry", &result.issues);
            Some(result)
        }
        None => None,
    };

    view.resolve()?;
    if let Some(result) = zoom {
        let factor = result.resolve()?;
        println!("Zoom factor: {factor}");
    }
    if let Some(result) = coord {
        let point = result.resolve()?;
        println!("Coordinate: {}, {}", point.x, point.y);
    }
    Ok(())
}
