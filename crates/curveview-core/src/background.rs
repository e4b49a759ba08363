use std::path::{Path, PathBuf};

use crate::error::{CurveViewError, Result};

/// Handle to the image shown behind the curves.
///
/// Only the path and native dimensions are kept; pixel data is owned by the
/// rendering side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl BackgroundImage {
    /// Read the native dimensions of an image file without decoding pixels.
    pub fn open(path: &Path) -> Result<Self> {
        let (width, height) = image::image_dimensions(path)?;
        if width == 0 || height == 0 {
            return Err(CurveViewError::InvalidConfig(format!(
                "Background image {} has empty dimensions {width}x{height}",
                path.display()
            )));
        }
        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
        })
    }
}
