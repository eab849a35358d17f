//! Windowed-sinc FIR filter design, application, and frequency response.

use tunelab_types::{FilterSpec, FilterType, BANDPASS_HALF_WIDTH, CUTOFF_MAX, CUTOFF_MIN};

/// Frequency samples used by [`frequency_response`]
pub const RESPONSE_POINTS: usize = 100;

/// Hamming-windowed sinc taps for a lowpass at `fc` cycles/sample.
///
/// Unnormalized. The center-tap sinc singularity is replaced by its
/// analytic limit `2*fc` rather than evaluated by division.
fn lowpass_taps(fc: f64, taps: usize) -> Vec<f64> {
    let m = (taps - 1) as f64;
    (0..taps)
        .map(|n| {
            let offset = n as f64 - m / 2.0;
            let sinc = if offset == 0.0 {
                2.0 * fc
            } else {
                (2.0 * std::f64::consts::PI * fc * offset).sin() / (std::f64::consts::PI * offset)
            };
            let window = if taps == 1 {
                1.0
            } else {
                0.54 - 0.46 * (2.0 * std::f64::consts::PI * n as f64 / m).cos()
            };
            sinc * window
        })
        .collect()
}

/// Normalize in place by the sum of absolute values divided by `gain`.
fn normalize(taps: &mut [f64], gain: f64) {
    let sum_abs: f64 = taps.iter().map(|t| t.abs()).sum();
    // Windowed-sinc tap sets always have a nonzero center lobe, so sum_abs
    // cannot vanish for legal specs
    for t in taps.iter_mut() {
        *t = *t / sum_abs * gain;
    }
}

/// Design FIR coefficients for `spec`.
///
/// - Lowpass: Hamming-windowed sinc, normalized to unit absolute sum.
/// - Highpass: spectral inversion of the matching lowpass (unit impulse
///   minus the lowpass taps).
/// - Bandpass: difference of two lowpass designs at cutoff +/- the fixed
///   half-bandwidth, normalized with doubled gain to restore passband
///   unity.
///
/// Cutoffs are clamped away from DC and Nyquist before any sinc is
/// evaluated, so every returned coefficient is finite.
pub fn design(spec: &FilterSpec) -> Vec<f64> {
    let taps = spec.taps.max(1);
    let fc = spec.cutoff_cycles();

    match spec.filter_type {
        FilterType::Lowpass => {
            let mut h = lowpass_taps(fc, taps);
            normalize(&mut h, 1.0);
            h
        }
        FilterType::Highpass => {
            let mut h = lowpass_taps(fc, taps);
            normalize(&mut h, 1.0);
            // delta[center] - lowpass
            for t in h.iter_mut() {
                *t = -*t;
            }
            h[(taps - 1) / 2] += 1.0;
            h
        }
        FilterType::Bandpass => {
            let lo = (fc - BANDPASS_HALF_WIDTH).clamp(CUTOFF_MIN, CUTOFF_MAX);
            let hi = (fc + BANDPASS_HALF_WIDTH).clamp(CUTOFF_MIN, CUTOFF_MAX);
            let upper = lowpass_taps(hi, taps);
            let mut h = lowpass_taps(lo, taps);
            for (t, u) in h.iter_mut().zip(upper.iter()) {
                *t = u - *t;
            }
            normalize(&mut h, 2.0);
            h
        }
    }
}

/// Causal convolution of `input` with `coeffs`.
///
/// Samples before the start of the input are taken as zero; no pre-roll.
pub fn apply(coeffs: &[f64], input: &[f64]) -> Vec<f64> {
    input
        .iter()
        .enumerate()
        .map(|(i, _)| {
            coeffs
                .iter()
                .enumerate()
                .take(i + 1)
                .map(|(j, &c)| c * input[i - j])
                .sum()
        })
        .collect()
}

/// DTFT magnitude at one normalized frequency (fraction of Nyquist, 0..1).
pub fn response_at(coeffs: &[f64], nyquist_fraction: f64) -> f64 {
    let omega = std::f64::consts::PI * nyquist_fraction;
    let (mut re, mut im) = (0.0, 0.0);
    for (n, &c) in coeffs.iter().enumerate() {
        re += c * (omega * n as f64).cos();
        im += c * (omega * n as f64).sin();
    }
    (re * re + im * im).sqrt()
}

/// DTFT magnitude sampled at [`RESPONSE_POINTS`] frequencies in [0, 0.5)
/// cycles/sample.
///
/// Direct summation: the tap and point counts are small enough that an FFT
/// buys nothing here.
pub fn frequency_response(coeffs: &[f64]) -> Vec<f64> {
    (0..RESPONSE_POINTS)
        .map(|k| response_at(coeffs, k as f64 / RESPONSE_POINTS as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowpass_spec() -> FilterSpec {
        FilterSpec::new(FilterType::Lowpass, 0.25, 15)
    }

    #[test]
    fn test_all_coefficients_finite() {
        for filter_type in [FilterType::Lowpass, FilterType::Highpass, FilterType::Bandpass] {
            for taps in [5, 14, 15, 63] {
                for cutoff in [0.0, 0.05, 0.25, 0.5, 0.99, 2.0] {
                    let h = design(&FilterSpec::new(filter_type, cutoff, taps));
                    assert_eq!(h.len(), taps);
                    assert!(h.iter().all(|c| c.is_finite()));
                }
            }
        }
    }

    #[test]
    fn test_center_tap_is_analytic_limit() {
        // Odd tap count puts a sample exactly on the sinc singularity
        let fc = 0.125;
        let h = lowpass_taps(fc, 15);
        // Hamming window is 1.0 at the center
        assert!((h[7] - 2.0 * fc).abs() < 1e-12);
    }

    #[test]
    fn test_lowpass_passband_and_stopband() {
        let h = design(&lowpass_spec());
        let response = frequency_response(&h);

        // DC gain close to unity, top bin well attenuated
        assert!(response[0] > 0.9, "DC response {} too low", response[0]);
        assert!(
            *response.last().unwrap() < 0.3,
            "stopband response {} too high",
            response.last().unwrap()
        );
    }

    #[test]
    fn test_normalization_sum_nonzero() {
        for filter_type in [FilterType::Lowpass, FilterType::Highpass, FilterType::Bandpass] {
            let spec = FilterSpec::new(filter_type, 0.3, 21);
            let fc = spec.cutoff_cycles();
            let raw = match filter_type {
                FilterType::Bandpass => {
                    let lo = lowpass_taps((fc - BANDPASS_HALF_WIDTH).max(CUTOFF_MIN), 21);
                    let hi = lowpass_taps((fc + BANDPASS_HALF_WIDTH).min(CUTOFF_MAX), 21);
                    hi.iter().zip(lo.iter()).map(|(h, l)| h - l).collect()
                }
                _ => lowpass_taps(fc, 21),
            };
            let sum_abs: f64 = raw.iter().map(|c: &f64| c.abs()).sum();
            assert!(sum_abs > 1e-6);
        }
    }

    #[test]
    fn test_highpass_is_spectral_inversion() {
        for taps in [9, 15, 31] {
            let lp = design(&FilterSpec::new(FilterType::Lowpass, 0.25, taps));
            let hp = design(&FilterSpec::new(FilterType::Highpass, 0.25, taps));
            let center = (taps - 1) / 2;
            for n in 0..taps {
                let delta = if n == center { 1.0 } else { 0.0 };
                assert!(
                    (hp[n] - (delta - lp[n])).abs() < 1e-12,
                    "tap {} mismatch",
                    n
                );
            }
        }
    }

    #[test]
    fn test_highpass_blocks_dc_passes_top() {
        let hp = design(&FilterSpec::new(FilterType::Highpass, 0.25, 15));
        let response = frequency_response(&hp);
        assert!(response[0] < 0.1);
        assert!(*response.last().unwrap() > 0.9);
    }

    #[test]
    fn test_bandpass_peaks_at_center() {
        let spec = FilterSpec::new(FilterType::Bandpass, 0.5, 63);
        let h = design(&spec);
        // Passband center regains near-unity gain via the doubled norm
        let center = response_at(&h, 0.5);
        assert!(center > 0.7, "center response {} too low", center);
        // Band edges well outside the passband are attenuated
        assert!(response_at(&h, 0.02) < 0.2);
        assert!(response_at(&h, 0.98) < 0.2);
    }

    #[test]
    fn test_apply_impulse_reproduces_coefficients() {
        let h = design(&lowpass_spec());
        let mut impulse = vec![0.0; h.len()];
        impulse[0] = 1.0;
        let out = apply(&h, &impulse);
        for (a, b) in out.iter().zip(h.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_apply_is_causal() {
        let h = vec![0.5, 0.5];
        let input = vec![2.0, 4.0, 6.0];
        let out = apply(&h, &input);
        // First output only sees the first input sample
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 3.0);
        assert_eq!(out[2], 5.0);
    }

    #[test]
    fn test_moving_average_smooths_dc() {
        let h = vec![0.25; 4];
        let input = vec![1.0; 8];
        let out = apply(&h, &input);
        // After the warmup the DC gain is the coefficient sum
        assert!((out[7] - 1.0).abs() < 1e-12);
    }
}
