//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod fft_bindings;
mod window_bindings;
mod spectrogram_bindings;

/// Core errors surface in Python as ValueError
pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python module definition
#[pymodule]
fn spectrogram(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<fft_bindings::PyFft>()?;
    m.add_class::<window_bindings::PyWindowFunction>()?;
    m.add_class::<spectrogram_bindings::PySpectrogram>()?;

    // Add WindowType enum
    m.add_class::<window_bindings::PyWindowType>()?;

    Ok(())
}
