//! System-level FIR design tests: designed filters applied to synthetic
//! two-tone signals, checked against the challenge goals.

use tunelab_core::fir;
use tunelab_core::FilterGoalCheck;
use tunelab_types::{FilterChallengeDef, FilterSpec, FilterType};

/// Peak amplitude of the last half of a signal (skips filter warmup)
fn settled_peak(samples: &[f64]) -> f64 {
    samples[samples.len() / 2..]
        .iter()
        .fold(0.0f64, |acc, &x| acc.max(x.abs()))
}

/// Two-tone test signal; frequencies are fractions of Nyquist
fn two_tone(signal_freq: f64, noise_freq: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|n| {
            let t = n as f64 * std::f64::consts::PI;
            (signal_freq * t).sin() + (noise_freq * t).sin()
        })
        .collect()
}

#[test]
fn test_lowpass_separates_tones() {
    let spec = FilterSpec::new(FilterType::Lowpass, 0.3, 63);
    let coeffs = fir::design(&spec);

    let clean: Vec<f64> = (0..512)
        .map(|n| (0.08 * n as f64 * std::f64::consts::PI).sin())
        .collect();
    let noisy = two_tone(0.08, 0.8, 512);
    let filtered = fir::apply(&coeffs, &noisy);

    // The high tone must be mostly gone: the filtered peak is close to the
    // clean single-tone peak, nowhere near the two-tone sum
    let peak = settled_peak(&filtered);
    let clean_peak = settled_peak(&clean);
    assert!(
        (peak - clean_peak).abs() < 0.15,
        "filtered peak {} vs clean {}",
        peak,
        clean_peak
    );
}

#[test]
fn test_hum_challenge_passes_with_sane_lowpass() {
    let def = FilterChallengeDef {
        name: "Remove hum".into(),
        signal_freqs: vec![0.08],
        noise_freqs: vec![0.7],
        pass_threshold: 0.7,
        stop_threshold: 0.1,
    };

    let coeffs = fir::design(&FilterSpec::new(FilterType::Lowpass, 0.3, 63));
    assert!(FilterGoalCheck::meets_goal(&def, &coeffs));

    // A cutoff above the noise tone lets the hum through
    let leaky = fir::design(&FilterSpec::new(FilterType::Lowpass, 0.9, 63));
    assert!(!FilterGoalCheck::meets_goal(&def, &leaky));
}

#[test]
fn test_carrier_challenge_needs_bandpass() {
    let def = FilterChallengeDef {
        name: "Keep the carrier".into(),
        signal_freqs: vec![0.5],
        noise_freqs: vec![0.08, 0.9],
        pass_threshold: 0.7,
        stop_threshold: 0.1,
    };

    // Neither a lowpass nor a highpass can satisfy both edges
    let lp = fir::design(&FilterSpec::new(FilterType::Lowpass, 0.6, 63));
    assert!(!FilterGoalCheck::meets_goal(&def, &lp));
    let hp = fir::design(&FilterSpec::new(FilterType::Highpass, 0.4, 63));
    assert!(!FilterGoalCheck::meets_goal(&def, &hp));

    let bp = fir::design(&FilterSpec::new(FilterType::Bandpass, 0.5, 63));
    assert!(FilterGoalCheck::meets_goal(&def, &bp));
}

#[test]
fn test_response_samples_cover_half_band() {
    let coeffs = fir::design(&FilterSpec::default());
    let response = fir::frequency_response(&coeffs);
    assert_eq!(response.len(), fir::RESPONSE_POINTS);
    assert!(response.iter().all(|m| m.is_finite() && *m >= 0.0));
}
