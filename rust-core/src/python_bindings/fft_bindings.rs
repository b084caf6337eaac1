//! Python bindings for the FFT engine

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::spectrum::FftEngine;
use super::value_error;

/// FFT engine exposed to Python
#[pyclass(name = "FFT")]
pub struct PyFft {
    engine: FftEngine,
}

#[pymethods]
impl PyFft {
    /// Create a new FFT engine
    ///
    /// Args:
    ///     buffer_size: FFT size (power of 2)
    ///     sample_rate: Sample rate in Hz (0 if frequencies are unused)
    #[new]
    #[pyo3(signature = (buffer_size, sample_rate=0.0))]
    fn new(buffer_size: usize, sample_rate: f64) -> Self {
        Self {
            engine: FftEngine::new(buffer_size, sample_rate),
        }
    }

    /// Forward transform of one frame
    ///
    /// Args:
    ///     buffer: Exactly buffer_size samples as numpy array
    ///
    /// Returns:
    ///     Magnitude spectrum (buffer_size/2 bins) as numpy array
    fn forward<'py>(
        &mut self,
        py: Python<'py>,
        buffer: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let samples = buffer.as_slice().map_err(value_error)?;
        self.engine.forward(samples).map_err(value_error)?;

        Ok(PyArray1::from_slice(py, self.engine.spectrum()))
    }

    /// Magnitude spectrum from the latest forward call
    fn spectrum<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.engine.spectrum())
    }

    /// Raw real part of the latest transform
    fn real<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.engine.real())
    }

    /// Raw imaginary part of the latest transform
    fn imag<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.engine.imag())
    }

    /// Centre frequency of a bin in Hz
    fn band_frequency(&self, index: usize) -> f64 {
        self.engine.band_frequency(index)
    }

    #[getter]
    fn peak(&self) -> f64 {
        self.engine.peak()
    }

    #[getter]
    fn peak_band(&self) -> usize {
        self.engine.peak_band()
    }

    #[getter]
    fn bandwidth(&self) -> f64 {
        self.engine.bandwidth()
    }

    #[getter]
    fn buffer_size(&self) -> usize {
        self.engine.buffer_size()
    }

    #[getter]
    fn sample_rate(&self) -> f64 {
        self.engine.sample_rate()
    }
}
