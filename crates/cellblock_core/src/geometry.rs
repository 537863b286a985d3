//! Canvas geometry: how many cells fit, and at which scale.

use crate::error::{CaError, Result};
use serde::{Deserialize, Serialize};

/// Row width (columns) and row count (generations) of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub row_width: usize,
    pub row_height: usize,
}

impl Dimensions {
    pub fn new(row_width: usize, row_height: usize) -> Result<Self> {
        if row_width == 0 {
            return Err(CaError::dimension("row width must be positive"));
        }
        if row_height == 0 {
            return Err(CaError::dimension("row height must be positive"));
        }
        Ok(Self {
            row_width,
            row_height,
        })
    }

    /// Upper bound on cell updates for a full run.
    pub fn cell_budget(&self) -> usize {
        self.row_width.saturating_mul(self.row_height)
    }
}

/// Pixel canvas plus the derived cell scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasGeometry {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub scale: f64,
}

impl CanvasGeometry {
    pub fn new(canvas_width: f64, canvas_height: f64, scale: f64) -> Result<Self> {
        if !(canvas_width.is_finite() && canvas_width > 0.0) {
            return Err(CaError::dimension(format!(
                "canvas width {canvas_width} must be positive"
            )));
        }
        if !(canvas_height.is_finite() && canvas_height > 0.0) {
            return Err(CaError::dimension(format!(
                "canvas height {canvas_height} must be positive"
            )));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(CaError::dimension(format!("scale {scale} must be positive")));
        }
        Ok(Self {
            canvas_width,
            canvas_height,
            scale,
        })
    }

    /// Builds the geometry with the scale picked by `mod1`.
    pub fn from_modifier(canvas_width: f64, canvas_height: f64, mod1: f64) -> Result<Self> {
        let scale = scale_for(canvas_width, mod1);
        Self::new(canvas_width, canvas_height, scale)
    }

    /// Horizontal inset: a quarter of the canvas width corrected by the
    /// aspect ratio, which works out to a quarter of the height.
    pub fn width_offset(&self) -> f64 {
        self.canvas_width * 0.25 * (self.canvas_height / self.canvas_width)
    }

    pub fn height_offset(&self) -> f64 {
        self.canvas_height * 0.25
    }

    /// Frame width drawn around the artwork.
    pub fn margin(&self) -> u32 {
        (self.canvas_width * 0.125 * 0.125).floor() as u32
    }

    pub fn dimensions(&self) -> Result<Dimensions> {
        let cols = ((self.canvas_width - self.width_offset()) / self.scale).floor();
        let rows = ((self.canvas_height - self.height_offset()) / self.scale).floor();
        if cols < 1.0 {
            return Err(CaError::dimension(format!(
                "canvas {}x{} at scale {} leaves no columns",
                self.canvas_width, self.canvas_height, self.scale
            )));
        }
        if rows < 1.0 {
            return Err(CaError::dimension(format!(
                "canvas {}x{} at scale {} leaves no rows",
                self.canvas_width, self.canvas_height, self.scale
            )));
        }
        Dimensions::new(cols as usize, rows as usize)
    }
}

/// `floor(log2(canvas_width) - 2)`: the largest scale exponent `mod1` can reach.
pub fn size_threshold(canvas_width: f64) -> i32 {
    (canvas_width.log2() - 2.0).floor() as i32
}

/// Cell scale for `mod1`: always a power of two.
pub fn scale_for(canvas_width: f64, mod1: f64) -> f64 {
    let threshold = f64::from(size_threshold(canvas_width));
    let exponent = (1.0 + mod1 * (threshold - 1.0)).round() as i32;
    2f64.powi(exponent)
}
