//! Shared types for TuneLab interactive control-theory widgets.
//!
//! This crate defines the plain-value configuration records used across all
//! TuneLab components:
//! - Controller gains and limits
//! - Plant parameter sets (rotational pointer, thermal oven)
//! - Digital filter specifications
//! - Challenge definitions and run results
//! - Simulation settings
//! - Post metadata for the hosting site's article listing

mod challenge;
mod filter;
mod params;
mod post;
mod settings;

pub use challenge::*;
pub use filter::*;
pub use params::*;
pub use post::*;
pub use settings::*;
