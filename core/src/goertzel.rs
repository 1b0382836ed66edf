use std::f64::consts::PI;

/// Goertzel filter measuring signal power at a single frequency
///
/// Runs the second-order recursion
/// ```text
/// s[n] = x[n] + 2·cos(ω)·s[n-1] - s[n-2],   ω = 2π·f / sample_rate
/// ```
/// over a window and returns `s[N-2]² + s[N-1]² - 2·cos(ω)·s[N-1]·s[N-2]`.
///
/// The target frequency is used as is, not rounded to a DFT bin. The result is
/// relative power, only meaningful when compared against another frequency
/// over the same window.
#[derive(Debug, Clone, Copy)]
pub struct Goertzel {
    target_freq: f64,
    coeff: f64,
}

impl Goertzel {
    pub fn new(target_freq: f64, sample_rate: f64) -> Self {
        let omega = 2.0 * PI * target_freq / sample_rate;
        Self {
            target_freq,
            coeff: 2.0 * omega.cos(),
        }
    }

    pub fn target_freq(&self) -> f64 {
        self.target_freq
    }

    /// Power at the target frequency over the whole window
    pub fn power(&self, window: &[f64]) -> f64 {
        let mut s_prev = 0.0;
        let mut s_prev2 = 0.0;

        for &sample in window {
            let s = sample + self.coeff * s_prev - s_prev2;
            s_prev2 = s_prev;
            s_prev = s;
        }

        s_prev2 * s_prev2 + s_prev * s_prev - self.coeff * s_prev * s_prev2
    }

    /// Power over `signal[start..start + length]`
    ///
    /// # Panics
    /// If the window extends past the end of `signal`.
    pub fn power_at(&self, signal: &[f64], start: usize, length: usize) -> f64 {
        self.power(&signal[start..start + length])
    }
}

/// One-shot Goertzel power of `signal[start..start + length]` at `target_freq`
///
/// # Panics
/// If the window extends past the end of `signal`.
pub fn goertzel_power(
    signal: &[f64],
    start: usize,
    length: usize,
    target_freq: f64,
    sample_rate: f64,
) -> f64 {
    Goertzel::new(target_freq, sample_rate).power_at(signal, start, length)
}
