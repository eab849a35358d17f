//! Digital filter specification types.

use serde::{Deserialize, Serialize};

/// Half-bandwidth (in cycles/sample) used by bandpass designs.
///
/// Tuning default carried over from the demo scenarios, not a derived value.
pub const BANDPASS_HALF_WIDTH: f64 = 0.1;

/// Lowest normalized cutoff accepted by the designer (cycles/sample)
pub const CUTOFF_MIN: f64 = 0.01;

/// Highest normalized cutoff accepted by the designer, exclusive of the
/// Nyquist frequency at 0.5 (cycles/sample)
pub const CUTOFF_MAX: f64 = 0.49;

/// FIR filter response type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterType {
    Lowpass,
    Highpass,
    Bandpass,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::Lowpass => "Lowpass",
            FilterType::Highpass => "Highpass",
            FilterType::Bandpass => "Bandpass",
        }
    }
}

/// Windowed-sinc FIR filter specification
///
/// `cutoff` is expressed as a fraction of the Nyquist frequency (0..1); the
/// designer converts it to cycles/sample and clamps to
/// [`CUTOFF_MIN`, `CUTOFF_MAX`] before any sinc evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub filter_type: FilterType,
    /// Cutoff as a fraction of Nyquist
    pub cutoff: f64,
    /// Number of taps (filter length)
    pub taps: usize,
}

impl FilterSpec {
    pub fn new(filter_type: FilterType, cutoff: f64, taps: usize) -> Self {
        Self {
            filter_type,
            cutoff,
            taps,
        }
    }

    /// Cutoff in cycles/sample, clamped to the legal design band
    pub fn cutoff_cycles(&self) -> f64 {
        (0.5 * self.cutoff).clamp(CUTOFF_MIN, CUTOFF_MAX)
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            filter_type: FilterType::Lowpass,
            cutoff: 0.25,
            taps: 31,
        }
    }
}

/// IIR filter order selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IirOrder {
    First,
    Second,
}

impl IirOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            IirOrder::First => "First order",
            IirOrder::Second => "Second order",
        }
    }
}

/// Recursive smoothing filter specification
///
/// `alpha` is the smoothing factor of the underlying leaky integrator; the
/// second-order form reuses it as a cascade of two identical first-order
/// sections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IirSpec {
    pub alpha: f64,
    pub order: IirOrder,
}

impl Default for IirSpec {
    fn default() -> Self {
        Self {
            alpha: 0.15,
            order: IirOrder::First,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_conversion() {
        let spec = FilterSpec::new(FilterType::Lowpass, 0.25, 15);
        assert!((spec.cutoff_cycles() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_cutoff_clamping() {
        let low = FilterSpec::new(FilterType::Lowpass, 0.0, 15);
        assert_eq!(low.cutoff_cycles(), CUTOFF_MIN);

        let high = FilterSpec::new(FilterType::Lowpass, 2.0, 15);
        assert_eq!(high.cutoff_cycles(), CUTOFF_MAX);
    }

    #[test]
    fn test_spec_roundtrip_json() {
        let spec = FilterSpec::new(FilterType::Bandpass, 0.4, 63);
        let json = serde_json::to_string(&spec).unwrap();
        let back: FilterSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }
}
