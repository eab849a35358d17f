//! Low-order recursive (IIR) smoothing filters.

use num_complex::Complex64;

/// First-order exponential smoother (leaky integrator).
///
/// y' = alpha * x + (1 - alpha) * y
///
/// # Example
///
/// ```ignore
/// let mut iir = FirstOrderIir::new(0.15);
/// let smoothed = iir.step(noisy_sample);
/// ```
#[derive(Debug, Clone)]
pub struct FirstOrderIir {
    alpha: f64,

    // State
    y: f64,
}

impl FirstOrderIir {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            y: 0.0,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn output(&self) -> f64 {
        self.y
    }

    pub fn step(&mut self, x: f64) -> f64 {
        self.y = self.alpha * x + (1.0 - self.alpha) * self.y;
        self.y
    }

    pub fn reset(&mut self) {
        self.y = 0.0;
    }

    /// Closed-form magnitude response at a fraction of Nyquist (0..1).
    ///
    /// H(z) = alpha / (1 - (1-alpha) z^-1), evaluated on the unit circle.
    pub fn response_at(alpha: f64, nyquist_fraction: f64) -> f64 {
        let omega = std::f64::consts::PI * nyquist_fraction;
        let z_inv = Complex64::from_polar(1.0, -omega);
        let h = Complex64::new(alpha, 0.0) / (Complex64::new(1.0, 0.0) - (1.0 - alpha) * z_inv);
        h.norm()
    }
}

/// Second-order smoother: two identical first-order sections in cascade,
/// expressed as a single difference equation.
///
/// b0 = alpha^2, a1 = 2(1 - alpha), a2 = (1 - alpha)^2
/// y' = b0 * x + a1 * y1 - a2 * y2
///
/// y1/y2 are the previous two outputs, shifted each step.
#[derive(Debug, Clone)]
pub struct SecondOrderIir {
    alpha: f64,

    // State: last two outputs
    y1: f64,
    y2: f64,
}

impl SecondOrderIir {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            y1: 0.0,
            y2: 0.0,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn output(&self) -> f64 {
        self.y1
    }

    pub fn step(&mut self, x: f64) -> f64 {
        let b0 = self.alpha * self.alpha;
        let a1 = 2.0 * (1.0 - self.alpha);
        let a2 = (1.0 - self.alpha) * (1.0 - self.alpha);

        let y = b0 * x + a1 * self.y1 - a2 * self.y2;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }

    pub fn reset(&mut self) {
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// Closed-form magnitude response at a fraction of Nyquist (0..1).
    ///
    /// H(z) = alpha^2 / (1 - 2(1-alpha) z^-1 + (1-alpha)^2 z^-2), the
    /// square of the first-order section's response.
    pub fn response_at(alpha: f64, nyquist_fraction: f64) -> f64 {
        let omega = std::f64::consts::PI * nyquist_fraction;
        let z_inv = Complex64::from_polar(1.0, -omega);
        let one = Complex64::new(1.0, 0.0);
        let b0 = alpha * alpha;
        let denom = one - 2.0 * (1.0 - alpha) * z_inv + (1.0 - alpha) * (1.0 - alpha) * z_inv * z_inv;
        (Complex64::new(b0, 0.0) / denom).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_order_converges_to_dc() {
        let mut iir = FirstOrderIir::new(0.2);
        for _ in 0..200 {
            iir.step(1.0);
        }
        assert!((iir.output() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_order_single_step() {
        let mut iir = FirstOrderIir::new(0.25);
        let y = iir.step(4.0);
        assert!((y - 1.0).abs() < 1e-12);
        let y = iir.step(4.0);
        assert!((y - (0.25 * 4.0 + 0.75 * 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_second_order_matches_cascade() {
        // The single difference equation must equal two first-order
        // sections applied back to back
        let alpha = 0.3;
        let mut second = SecondOrderIir::new(alpha);
        let mut stage_a = FirstOrderIir::new(alpha);
        let mut stage_b = FirstOrderIir::new(alpha);

        let input = [1.0, -0.5, 2.0, 0.0, 0.3, 1.7, -1.2, 0.8];
        for &x in &input {
            let direct = second.step(x);
            let cascade = stage_b.step(stage_a.step(x));
            assert!(
                (direct - cascade).abs() < 1e-12,
                "direct {} vs cascade {}",
                direct,
                cascade
            );
        }
    }

    #[test]
    fn test_second_order_converges_to_dc() {
        let mut iir = SecondOrderIir::new(0.2);
        for _ in 0..400 {
            iir.step(1.0);
        }
        assert!((iir.output() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_response_unity_at_dc() {
        for &alpha in &[0.05, 0.2, 0.8] {
            assert!((FirstOrderIir::response_at(alpha, 0.0) - 1.0).abs() < 1e-12);
            assert!((SecondOrderIir::response_at(alpha, 0.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_response_monotone_attenuation() {
        // The smoother attenuates more as frequency rises
        let low = FirstOrderIir::response_at(0.2, 0.1);
        let high = FirstOrderIir::response_at(0.2, 0.9);
        assert!(low > high);
    }

    #[test]
    fn test_second_order_attenuates_more() {
        // At the same alpha and frequency the cascade rolls off harder
        let first = FirstOrderIir::response_at(0.2, 0.5);
        let second = SecondOrderIir::response_at(0.2, 0.5);
        assert!(second < first);
        // And equals the square of the single section
        assert!((second - first * first).abs() < 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut iir = SecondOrderIir::new(0.3);
        iir.step(5.0);
        iir.step(5.0);
        iir.reset();
        assert_eq!(iir.output(), 0.0);
    }
}
