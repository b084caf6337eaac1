//! Spectral analysis with FFT

pub mod fft;
pub mod analysis;
pub mod spectrogram;

pub use fft::{FftEngine, FftError};
pub use analysis::{AnalyzerConfig, SpectrumAnalyzer};
pub use spectrogram::{compute_spectrogram, Spectrogram, SpectrogramConfig, SpectrogramError, SpectrogramImage};
