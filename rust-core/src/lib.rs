//! Spectrogram - Radix-2 FFT and Window Function Core
//! 
//! Fixed-size real-input FFT with precomputed tables, analysis windows and
//! a frame-by-frame spectrogram driver, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod audio;
pub mod windows;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use audio::PcmBuffer;
pub use windows::{WindowFunction, WindowKind};
pub use spectrum::{FftEngine, FftError, Spectrogram, SpectrumAnalyzer};
