//! Python bindings for the spectrogram driver

use pyo3::prelude::*;
use numpy::{PyArray1, PyArray2, PyReadonlyArray1, ToPyArray};
use crate::audio::pcm::PcmBuffer;
use crate::spectrum::{Spectrogram, SpectrogramConfig};
use super::value_error;
use super::window_bindings::PyWindowType;

/// Spectrogram exposed to Python
#[pyclass(name = "Spectrogram")]
pub struct PySpectrogram {
    spectrogram: Spectrogram,
}

#[pymethods]
impl PySpectrogram {
    /// Create a spectrogram
    ///
    /// Args:
    ///     fft_size: Frame length (power of 2)
    ///     gain: Magnitude to 8-bit level multiplier
    ///     window_type: Optional window applied to every frame
    #[new]
    #[pyo3(signature = (fft_size=1024, gain=12000.0, window_type=None))]
    fn new(fft_size: usize, gain: f64, window_type: Option<PyWindowType>) -> Self {
        let config = SpectrogramConfig {
            fft_size,
            gain,
            window: window_type.map(Into::into),
        };

        Self {
            spectrogram: Spectrogram::new(config),
        }
    }

    /// Analyze a mono signal
    ///
    /// Args:
    ///     signal: Samples as numpy array
    ///     sample_rate: Sample rate in Hz
    fn process(&mut self, signal: PyReadonlyArray1<f64>, sample_rate: f64) -> PyResult<()> {
        let samples = signal.as_slice().map_err(value_error)?.to_vec();
        let pcm = PcmBuffer::from_mono(sample_rate, samples);
        self.spectrogram.process(&pcm).map_err(value_error)
    }

    /// Magnitudes as (frames, bins) numpy array
    fn magnitudes<'py>(&self, py: Python<'py>) -> &'py PyArray2<f64> {
        self.spectrogram.magnitudes().to_pyarray(py)
    }

    /// 8-bit levels as (frames, bins) numpy array
    fn levels<'py>(&self, py: Python<'py>) -> &'py PyArray2<u8> {
        self.spectrogram.levels().to_pyarray(py)
    }

    fn x_by_time(&self, time: f64) -> usize {
        self.spectrogram.x_by_time(time)
    }

    fn time_by_x(&self, x: usize) -> f64 {
        self.spectrogram.time_by_x(x)
    }

    /// Grayscale RGBA raster
    ///
    /// Returns:
    ///     Tuple of (width, height, flat RGBA bytes)
    fn image_data<'py>(&self, py: Python<'py>) -> PyResult<(usize, usize, &'py PyArray1<u8>)> {
        let image = self.spectrogram.image_data().map_err(value_error)?;
        Ok((image.width, image.height, PyArray1::from_vec(py, image.data)))
    }

    #[getter]
    fn frame_count(&self) -> usize {
        self.spectrogram.frame_count()
    }

    #[getter]
    fn bin_count(&self) -> usize {
        self.spectrogram.bin_count()
    }
}
