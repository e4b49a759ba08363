use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::background::BackgroundImage;
use crate::consts::DEFAULT_CACHE_CAPACITY;
use crate::error::{CurveViewError, Result};
use crate::transform::TransformCache;
use crate::validation::ValidationPolicy;
use crate::view::{FitMode, ViewController, ViewParams};

/// Serializable description of a view: live parameters plus the knobs that
/// decide how they are validated, fitted and cached.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub policy: ValidationPolicy,
    pub fit: FitMode,
    /// Optional background image; its size replaces the display size.
    pub background: Option<PathBuf>,
    pub view: ViewParams,
    pub cache: CacheConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ViewConfig {
    /// Reject settings that cannot be corrected by view validation.
    pub fn check(&self) -> Result<()> {
        if self.cache.capacity == 0 {
            return Err(CurveViewError::InvalidConfig(
                "cache.capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Build a controller, loading the background image if one is set.
    pub fn controller(&self) -> Result<ViewController> {
        self.check()?;
        let mut controller = ViewController::new(self.view.clone(), self.policy);
        if let Some(ref path) = self.background {
            let image = BackgroundImage::open(path)?;
            controller.set_background(Arc::new(image));
        }
        Ok(controller)
    }

    pub fn transform_cache(&self) -> TransformCache {
        TransformCache::with_capacity(self.cache.capacity)
    }
}
