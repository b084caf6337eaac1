//! Window function evaluator
//!
//! Scales time-domain frames in place before the FFT to reduce spectral leakage

use super::kind::WindowKind;
use super::shapes::WindowShape;

/// Window function applied to sample buffers of any length
///
/// Holds no per-buffer state, so one instance can be reused across frames
/// of differing lengths and shared between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowFunction {
    shape: WindowShape,
}

impl WindowFunction {
    /// Create a window function
    ///
    /// # Arguments
    /// * `kind` - Window shape
    /// * `alpha` - Shape parameter for Blackman (default 0.16) and Gauss
    ///   (default 0.25); ignored by other shapes
    pub fn new(kind: WindowKind, alpha: Option<f64>) -> Self {
        Self {
            shape: WindowShape::from_kind(kind, alpha),
        }
    }

    /// Create a window function from an already resolved shape
    pub fn from_shape(shape: WindowShape) -> Self {
        Self { shape }
    }

    pub fn kind(&self) -> WindowKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> WindowShape {
        self.shape
    }

    /// Resolved alpha, or `None` for shapes without a parameter
    pub fn alpha(&self) -> Option<f64> {
        self.shape.alpha()
    }

    /// Coefficient w[index] for a window of `length` samples
    pub fn coefficient(&self, length: usize, index: usize) -> f64 {
        self.shape.coefficient(length, index)
    }

    /// Generate window coefficients w[n] for n = 0..length-1
    pub fn coefficients(&self, length: usize) -> Vec<f64> {
        (0..length).map(|n| self.coefficient(length, n)).collect()
    }

    /// Apply window in-place
    ///
    /// # Returns
    /// The same buffer, for chaining
    pub fn process<'a>(&self, buffer: &'a mut [f64]) -> &'a mut [f64] {
        let length = buffer.len();
        for (n, sample) in buffer.iter_mut().enumerate() {
            *sample *= self.coefficient(length, n);
        }
        buffer
    }

    /// Amplitude correction factor
    ///
    /// Multiply a windowed FFT magnitude by this to restore the level of
    /// an unwindowed sinusoid.
    pub fn correction_factor(&self, length: usize) -> f64 {
        let sum: f64 = (0..length).map(|n| self.coefficient(length, n)).sum();
        if sum == 0.0 {
            1.0
        } else {
            length as f64 / sum
        }
    }

    /// Power correction factor (for power spectral density)
    pub fn power_correction_factor(&self, length: usize) -> f64 {
        let sum_sq: f64 = (0..length)
            .map(|n| self.coefficient(length, n).powi(2))
            .sum();
        if sum_sq == 0.0 {
            1.0
        } else {
            length as f64 / sum_sq
        }
    }
}

impl From<WindowKind> for WindowFunction {
    fn from(kind: WindowKind) -> Self {
        WindowFunction::new(kind, None)
    }
}

/// Apply window to a copy of `signal`
pub fn apply_window(signal: &[f64], window: &WindowFunction) -> Vec<f64> {
    let mut windowed = signal.to_vec();
    window.process(&mut windowed);
    windowed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<f64> {
        (0..len).map(|n| (n as f64 * 0.37).sin() * 3.0 - 0.5).collect()
    }

    #[test]
    fn test_rectangular_is_identity() {
        let signal = ramp(100);
        let mut buffer = signal.clone();
        WindowFunction::new(WindowKind::Rectangular, None).process(&mut buffer);
        assert_eq!(buffer, signal);
    }

    #[test]
    fn test_process_returns_same_buffer() {
        let mut buffer = vec![1.0; 16];
        let ptr = buffer.as_ptr();
        let out = WindowFunction::new(WindowKind::Hann, None).process(&mut buffer);
        assert_eq!(out.as_ptr(), ptr);
    }

    #[test]
    fn test_hann_and_hamming_taper_edges() {
        let mut hann = vec![1.0; 100];
        WindowFunction::new(WindowKind::Hann, None).process(&mut hann);
        assert!(hann[0].abs() < 1e-12);
        assert!(hann[99].abs() < 1e-12);

        let mut hamming = vec![1.0; 100];
        WindowFunction::new(WindowKind::Hamming, None).process(&mut hamming);
        assert!(hamming[0] < 0.1);
        assert!(hamming[99] < 0.1);

        let mut triangular = vec![1.0; 100];
        WindowFunction::new(WindowKind::Triangular, None).process(&mut triangular);
        assert!(triangular[0] <= 0.01 + 1e-12);
        assert!(triangular[99] <= 0.01 + 1e-12);
    }

    #[test]
    fn test_no_amplification() {
        let signal = ramp(257);
        let max_abs = signal.iter().fold(0.0f64, |m, &s| m.max(s.abs()));

        for kind in WindowKind::ALL {
            let mut buffer = signal.clone();
            WindowFunction::new(kind, None).process(&mut buffer);
            for (&w, &s) in buffer.iter().zip(signal.iter()) {
                assert!(w.abs() <= max_abs + 1e-12, "{kind} amplified the signal");
                assert!(w.abs() <= s.abs() + 1e-12, "{kind} coefficient above 1");
            }
        }
    }

    #[test]
    fn test_reuse_across_lengths() {
        let window = WindowFunction::new(WindowKind::Blackman, None);
        let mut short = vec![1.0; 8];
        let mut long = vec![1.0; 1024];
        window.process(&mut short);
        window.process(&mut long);
        assert_eq!(short, window.coefficients(8));
        assert_eq!(long, window.coefficients(1024));
    }

    #[test]
    fn test_lanczos_centre_sample_untouched() {
        let mut buffer = vec![2.5; 9];
        WindowFunction::new(WindowKind::Lanczos, None).process(&mut buffer);
        assert_eq!(buffer[4], 2.5);
        assert!(buffer.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_correction_factor() {
        let factor_rect = WindowFunction::from(WindowKind::Rectangular).correction_factor(100);
        let factor_hamming = WindowFunction::from(WindowKind::Hamming).correction_factor(100);

        // Rectangular window has no correction needed
        assert!((factor_rect - 1.0).abs() < 0.01);

        // Hamming window reduces amplitude, so correction > 1
        assert!(factor_hamming > 1.5 && factor_hamming < 2.5);

        let power_hann = WindowFunction::from(WindowKind::Hann).power_correction_factor(1024);
        assert!((power_hann - 1.0 / 0.375).abs() < 0.01);
    }

    #[test]
    fn test_apply_window_leaves_input() {
        let signal = vec![1.0; 32];
        let windowed = apply_window(&signal, &WindowFunction::from(WindowKind::Hann));
        assert_eq!(signal, vec![1.0; 32]);
        assert!(windowed[0].abs() < 1e-12);
    }
}
