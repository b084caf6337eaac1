//! Python bindings for window functions

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::windows::{WindowFunction, WindowKind};
use super::value_error;

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Bartlett,
    BartlettHann,
    Blackman,
    Cosine,
    Gauss,
    Hamming,
    Hann,
    Lanczos,
    Rectangular,
    Triangular,
}

impl From<PyWindowType> for WindowKind {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Bartlett => WindowKind::Bartlett,
            PyWindowType::BartlettHann => WindowKind::BartlettHann,
            PyWindowType::Blackman => WindowKind::Blackman,
            PyWindowType::Cosine => WindowKind::Cosine,
            PyWindowType::Gauss => WindowKind::Gauss,
            PyWindowType::Hamming => WindowKind::Hamming,
            PyWindowType::Hann => WindowKind::Hann,
            PyWindowType::Lanczos => WindowKind::Lanczos,
            PyWindowType::Rectangular => WindowKind::Rectangular,
            PyWindowType::Triangular => WindowKind::Triangular,
        }
    }
}

/// Window function exposed to Python
#[pyclass(name = "WindowFunction")]
pub struct PyWindowFunction {
    window: WindowFunction,
}

#[pymethods]
impl PyWindowFunction {
    /// Create a window function
    ///
    /// Args:
    ///     window_type: Window shape
    ///     alpha: Shape parameter for Blackman (0.16) and Gauss (0.25)
    #[new]
    #[pyo3(signature = (window_type, alpha=None))]
    fn new(window_type: PyWindowType, alpha: Option<f64>) -> Self {
        Self {
            window: WindowFunction::new(window_type.into(), alpha),
        }
    }

    /// Create a window function from a name ("hann") or numeric id (1-10)
    #[staticmethod]
    #[pyo3(signature = (name, alpha=None))]
    fn from_name(name: &str, alpha: Option<f64>) -> PyResult<Self> {
        let kind: WindowKind = name.parse().map_err(value_error)?;
        Ok(Self {
            window: WindowFunction::new(kind, alpha),
        })
    }

    /// Apply the window to a copy of the buffer
    ///
    /// Args:
    ///     buffer: Samples as numpy array
    ///
    /// Returns:
    ///     Windowed samples as numpy array
    fn process<'py>(
        &self,
        py: Python<'py>,
        buffer: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let mut samples = buffer.as_slice().map_err(value_error)?.to_vec();
        self.window.process(&mut samples);

        Ok(PyArray1::from_vec(py, samples))
    }

    /// Window coefficients for a given length
    fn coefficients<'py>(&self, py: Python<'py>, length: usize) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.window.coefficients(length))
    }

    /// Resolved shape parameter, None for shapes without one
    #[getter]
    fn alpha(&self) -> Option<f64> {
        self.window.alpha()
    }

    /// Canonical window name
    #[getter]
    fn name(&self) -> &'static str {
        self.window.kind().name()
    }
}
