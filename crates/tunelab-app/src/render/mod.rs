//! Canvas renderers shared by the widgets.
//!
//! Everything here does a full repaint from the current state each frame;
//! nothing mutates simulation state. Geometry is expressed in egui points,
//! which the backend rasterizes at the display's native pixel density.

mod dial;
mod diagram;
mod plots;

pub use dial::*;
pub use diagram::*;
pub use plots::*;

use egui::Color32;

/// Trace color for measured values
pub const MEASURED_COLOR: Color32 = Color32::from_rgb(100, 200, 255);

/// Trace color for targets / references
pub const TARGET_COLOR: Color32 = Color32::from_rgb(255, 180, 70);

/// Pass / in-tolerance accent
pub const PASS_COLOR: Color32 = Color32::from_rgb(110, 220, 130);

/// Fail / out-of-tolerance accent
pub const FAIL_COLOR: Color32 = Color32::from_rgb(240, 100, 100);

/// Dimmed structural strokes (axes, diagram outlines)
pub const DIM_COLOR: Color32 = Color32::from_rgb(150, 150, 150);

/// Color-code a readout by sign and magnitude: near zero is good.
pub fn readout_color(value: f64, warn_above: f64) -> Color32 {
    if value.abs() < warn_above {
        PASS_COLOR
    } else {
        FAIL_COLOR
    }
}
