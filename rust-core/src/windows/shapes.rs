//! Window shape formulas
//!
//! Each function evaluates the coefficient w[n] for a window of `length`
//! samples. Lengths of 0 or 1 are handled by [`WindowShape::coefficient`].

use super::kind::WindowKind;
use std::f64::consts::{E, PI};

const TWO_PI: f64 = 2.0 * PI;

/// Bartlett window: w[n] = 2/(M-1) * ((M-1)/2 - |n - (M-1)/2|)
///
/// Zero at both endpoints.
pub fn bartlett(length: usize, index: usize) -> f64 {
    let m1 = length as f64 - 1.0;
    let n = index as f64;
    2.0 / m1 * (m1 / 2.0 - (n - m1 / 2.0).abs())
}

/// Bartlett-Hann window: w[n] = 0.62 - 0.48*|n/(M-1) - 0.5| - 0.38*cos(2πn/(M-1))
pub fn bartlett_hann(length: usize, index: usize) -> f64 {
    let m1 = length as f64 - 1.0;
    let n = index as f64;
    0.62 - 0.48 * (n / m1 - 0.5).abs() - 0.38 * (TWO_PI * n / m1).cos()
}

/// Blackman window with shape parameter alpha
///
/// w[n] = (1-α)/2 - 0.5*cos(2πn/(M-1)) + α/2*cos(4πn/(M-1)).
/// α = 0.16 gives the classic 0.42/0.5/0.08 coefficients.
pub fn blackman(length: usize, index: usize, alpha: f64) -> f64 {
    let m1 = length as f64 - 1.0;
    let n = index as f64;
    let a0 = (1.0 - alpha) / 2.0;
    let a1 = 0.5;
    let a2 = alpha / 2.0;

    a0 - a1 * (TWO_PI * n / m1).cos() + a2 * (4.0 * PI * n / m1).cos()
}

/// Cosine (sine) window: w[n] = cos(πn/(M-1) - π/2)
pub fn cosine(length: usize, index: usize) -> f64 {
    let m1 = length as f64 - 1.0;
    (PI * index as f64 / m1 - PI / 2.0).cos()
}

/// Gaussian window: w[n] = exp(-0.5 * ((n - (M-1)/2) / (α(M-1)/2))^2)
pub fn gauss(length: usize, index: usize, alpha: f64) -> f64 {
    let m1 = length as f64 - 1.0;
    let n = index as f64;
    E.powf(-0.5 * ((n - m1 / 2.0) / (alpha * m1 / 2.0)).powi(2))
}

/// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
pub fn hamming(length: usize, index: usize) -> f64 {
    let m1 = length as f64 - 1.0;
    0.54 - 0.46 * (TWO_PI * index as f64 / m1).cos()
}

/// Hann window: w[n] = 0.5*(1 - cos(2πn/(M-1)))
pub fn hann(length: usize, index: usize) -> f64 {
    let m1 = length as f64 - 1.0;
    0.5 * (1.0 - (TWO_PI * index as f64 / m1).cos())
}

/// Lanczos (sinc) window: w[n] = sinc(2n/(M-1) - 1)
///
/// The removable singularity at the centre evaluates to 1.
pub fn lanczos(length: usize, index: usize) -> f64 {
    let m1 = length as f64 - 1.0;
    let x = 2.0 * index as f64 / m1 - 1.0;
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    (PI * x).sin() / (PI * x)
}

/// Rectangular window (no windowing)
pub fn rectangular(_length: usize, _index: usize) -> f64 {
    1.0
}

/// Triangular window: w[n] = 2/M * (M/2 - |n - (M-1)/2|)
///
/// Unlike Bartlett the endpoints are 1/M, not zero.
pub fn triangular(length: usize, index: usize) -> f64 {
    let m = length as f64;
    let n = index as f64;
    2.0 / m * (m / 2.0 - (n - (m - 1.0) / 2.0).abs())
}

/// Window shape with its resolved parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowShape {
    Bartlett,
    BartlettHann,
    Blackman { alpha: f64 },
    Cosine,
    Gauss { alpha: f64 },
    Hamming,
    Hann,
    Lanczos,
    Rectangular,
    Triangular,
}

impl WindowShape {
    /// Build a shape from its kind
    ///
    /// Blackman and Gauss fall back to their default alpha when `alpha` is
    /// absent, zero or not finite. Other kinds ignore it.
    pub fn from_kind(kind: WindowKind, alpha: Option<f64>) -> Self {
        let resolve = |default: f64| match alpha {
            Some(a) if a != 0.0 && a.is_finite() => a,
            _ => default,
        };

        match kind {
            WindowKind::Bartlett => WindowShape::Bartlett,
            WindowKind::BartlettHann => WindowShape::BartlettHann,
            WindowKind::Blackman => WindowShape::Blackman { alpha: resolve(0.16) },
            WindowKind::Cosine => WindowShape::Cosine,
            WindowKind::Gauss => WindowShape::Gauss { alpha: resolve(0.25) },
            WindowKind::Hamming => WindowShape::Hamming,
            WindowKind::Hann => WindowShape::Hann,
            WindowKind::Lanczos => WindowShape::Lanczos,
            WindowKind::Rectangular => WindowShape::Rectangular,
            WindowKind::Triangular => WindowShape::Triangular,
        }
    }

    pub fn kind(&self) -> WindowKind {
        match self {
            WindowShape::Bartlett => WindowKind::Bartlett,
            WindowShape::BartlettHann => WindowKind::BartlettHann,
            WindowShape::Blackman { .. } => WindowKind::Blackman,
            WindowShape::Cosine => WindowKind::Cosine,
            WindowShape::Gauss { .. } => WindowKind::Gauss,
            WindowShape::Hamming => WindowKind::Hamming,
            WindowShape::Hann => WindowKind::Hann,
            WindowShape::Lanczos => WindowKind::Lanczos,
            WindowShape::Rectangular => WindowKind::Rectangular,
            WindowShape::Triangular => WindowKind::Triangular,
        }
    }

    /// Shape parameter, if this shape carries one
    pub fn alpha(&self) -> Option<f64> {
        match self {
            WindowShape::Blackman { alpha } | WindowShape::Gauss { alpha } => Some(*alpha),
            _ => None,
        }
    }

    /// Evaluate coefficient w[index] for a window of `length` samples
    ///
    /// Windows of length 0 or 1 have a single unit coefficient; the
    /// formulas divide by M-1.
    pub fn coefficient(&self, length: usize, index: usize) -> f64 {
        if length <= 1 {
            return 1.0;
        }

        match *self {
            WindowShape::Bartlett => bartlett(length, index),
            WindowShape::BartlettHann => bartlett_hann(length, index),
            WindowShape::Blackman { alpha } => blackman(length, index, alpha),
            WindowShape::Cosine => cosine(length, index),
            WindowShape::Gauss { alpha } => gauss(length, index, alpha),
            WindowShape::Hamming => hamming(length, index),
            WindowShape::Hann => hann(length, index),
            WindowShape::Lanczos => lanczos(length, index),
            WindowShape::Rectangular => rectangular(length, index),
            WindowShape::Triangular => triangular(length, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_hann_endpoints_zero() {
        let len = 64;
        assert!(hann(len, 0).abs() < TOL);
        assert!(hann(len, len - 1).abs() < TOL);
    }

    #[test]
    fn test_bartlett_endpoints_and_peak() {
        let len = 65;
        assert!(bartlett(len, 0).abs() < TOL);
        assert!(bartlett(len, len - 1).abs() < TOL);
        assert!((bartlett(len, 32) - 1.0).abs() < TOL);
    }

    #[test]
    fn test_triangular_endpoints() {
        let len = 64;
        assert!((triangular(len, 0) - 1.0 / 64.0).abs() < TOL);
        assert!((triangular(len, len - 1) - 1.0 / 64.0).abs() < TOL);
    }

    #[test]
    fn test_hamming_residual_floor() {
        let len = 128;
        assert!((hamming(len, 0) - 0.08).abs() < TOL);
        assert!((hamming(len, len - 1) - 0.08).abs() < 1e-9);
    }

    #[test]
    fn test_blackman_default_matches_classic() {
        let len = 101;
        let classic = |n: usize| {
            let m1 = (len - 1) as f64;
            0.42 - 0.5 * (TWO_PI * n as f64 / m1).cos() + 0.08 * (4.0 * PI * n as f64 / m1).cos()
        };
        for n in [0, 10, 50, 77, 100] {
            assert!((blackman(len, n, 0.16) - classic(n)).abs() < TOL);
        }
    }

    #[test]
    fn test_lanczos_centre_is_exactly_one() {
        let len = 33;
        let centre = lanczos(len, 16);
        assert_eq!(centre, 1.0);
        assert!(!centre.is_nan());
        // sinc(±1) = 0 at the edges
        assert!(lanczos(len, 0).abs() < 1e-12);
    }

    #[test]
    fn test_gauss_centre_and_symmetry() {
        let len = 41;
        assert!((gauss(len, 20, 0.25) - 1.0).abs() < TOL);
        assert!((gauss(len, 3, 0.25) - gauss(len, 37, 0.25)).abs() < TOL);
        // narrower alpha decays faster
        assert!(gauss(len, 5, 0.1) < gauss(len, 5, 0.5));
    }

    #[test]
    fn test_cosine_peak_at_centre() {
        let len = 21;
        assert!((cosine(len, 10) - 1.0).abs() < TOL);
        assert!(cosine(len, 0).abs() < TOL);
    }

    #[test]
    fn test_shape_alpha_resolution() {
        assert_eq!(
            WindowShape::from_kind(WindowKind::Blackman, None),
            WindowShape::Blackman { alpha: 0.16 }
        );
        assert_eq!(
            WindowShape::from_kind(WindowKind::Blackman, Some(0.0)),
            WindowShape::Blackman { alpha: 0.16 }
        );
        assert_eq!(
            WindowShape::from_kind(WindowKind::Gauss, Some(0.4)),
            WindowShape::Gauss { alpha: 0.4 }
        );
        assert_eq!(
            WindowShape::from_kind(WindowKind::Gauss, Some(f64::NAN)),
            WindowShape::Gauss { alpha: 0.25 }
        );
        assert_eq!(WindowShape::from_kind(WindowKind::Hann, Some(0.4)).alpha(), None);
    }

    #[test]
    fn test_degenerate_lengths() {
        for kind in WindowKind::ALL {
            let shape = WindowShape::from_kind(kind, None);
            assert_eq!(shape.coefficient(1, 0), 1.0);
            assert_eq!(shape.coefficient(0, 0), 1.0);
            assert_eq!(shape.kind(), kind);
        }
    }
}
