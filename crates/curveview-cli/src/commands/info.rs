use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use curveview_core::background::BackgroundImage;
use curveview_core::transform::Transform;
use curveview_core::validation::ValidationPolicy;
use curveview_core::view::ViewState;

use super::load_config;
use crate::summary::{print_issues, print_view_summary};

#[derive(Args)]
pub struct InfoArgs {
    /// View config file (TOML)
    pub config: PathBuf,

    /// Background image; overrides the one in the config
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Fit the view to the widget before reporting
    #[arg(long)]
    pub fit: bool,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let mut controller = config.controller()?;

    if let Some(ref path) = args.image {
        let image = BackgroundImage::open(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        controller.set_background(Arc::new(image));
    }
    if args.fit {
        controller.fit_to_window(config.fit);
    }

    let report = ViewState::new(controller.params(), ValidationPolicy::Comprehensive);
    let state = controller.snapshot();
    let transform = Transform::new(&state);

    print_view_summary(&state, &transform.parameters());
    print_issues("Validation", &report.issues);
    Ok(())
}
