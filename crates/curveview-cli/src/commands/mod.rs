pub mod config;
pub mod info;
pub mod map;
pub mod validate;

use std::path::Path;

use anyhow::{bail, Context, Result};
use curveview_core::config::ViewConfig;

/// Read a TOML view config from disk.
pub(crate) fn load_config(path: &Path) -> Result<ViewConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid view config")
}

/// Parse an `X,Y` pair.
pub(crate) fn parse_pair(s: &str) -> Result<(f64, f64)> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid point '{s}'"))?;
    match parts.as_slice() {
        [x, y] => Ok((*x, *y)),
        _ => bail!("Expected X,Y but got '{s}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("1.5, -2").unwrap(), (1.5, -2.0));
        assert!(parse_pair("1,2,3").is_err());
        assert!(parse_pair("abc,2").is_err());
    }

    #[test]
    fn test_load_config_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.toml");
        std::fs::write(
            &path,
            "policy = \"Strict\"\nfit = \"Contain\"\n\n[view]\nzoom_factor = 2.0\nflip_y_axis = true\n",
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.view.zoom_factor, 2.0);
        assert!(config.view.flip_y_axis);
        assert_eq!(config.view.widget_width, 800);
        assert_eq!(config.cache.capacity, curveview_core::consts::DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_default_config_toml_round_trip() {
        let text = toml::to_string_pretty(&ViewConfig::default()).unwrap();
        let parsed: ViewConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.view, ViewConfig::default().view);
    }
}
