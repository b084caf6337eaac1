//! High-level spectrum analyzer
//!
//! Combines the FFT engine with windowing for frame-by-frame spectral analysis

use super::fft::{FftEngine, FftError};
use crate::windows::{WindowFunction, WindowKind};
use serde::{Deserialize, Serialize};

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// FFT size (number of samples, must be power of 2)
    pub fft_size: usize,

    /// Window type for spectral analysis
    pub window: WindowKind,

    /// Window shape parameter (Blackman, Gauss)
    pub alpha: Option<f64>,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Apply amplitude correction for windowing
    pub apply_correction: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            window: WindowKind::Hamming,
            alpha: None,
            sample_rate: 48000.0,
            apply_correction: true,
        }
    }
}

/// Windowed spectrum analyzer
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft_engine: FftEngine,
    window: WindowFunction,
    correction_factor: f64,
    frame: Vec<f64>,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Result<Self, FftError> {
        let fft_engine = FftEngine::try_new(config.fft_size, config.sample_rate)?;
        let window = WindowFunction::new(config.window, config.alpha);
        let correction_factor = Self::correction_for(&config, &window);

        Ok(Self {
            frame: vec![0.0; config.fft_size],
            config,
            fft_engine,
            window,
            correction_factor,
        })
    }

    fn correction_for(config: &AnalyzerConfig, window: &WindowFunction) -> f64 {
        if config.apply_correction {
            window.correction_factor(config.fft_size)
        } else {
            1.0
        }
    }

    /// Analyze one frame and return its magnitude spectrum
    ///
    /// The caller's frame is left untouched; windowing happens on an
    /// internal copy.
    ///
    /// # Arguments
    /// * `frame` - Exactly `fft_size` samples
    ///
    /// # Returns
    /// Magnitude spectrum, `fft_size/2` bins
    pub fn analyze(&mut self, frame: &[f64]) -> Result<Vec<f64>, FftError> {
        if frame.len() != self.config.fft_size {
            return Err(FftError::SizeMismatch {
                expected: self.config.fft_size,
                actual: frame.len(),
            });
        }

        self.frame.copy_from_slice(frame);
        self.window.process(&mut self.frame);
        self.fft_engine.forward(&self.frame)?;

        let correction = self.correction_factor;
        Ok(self
            .fft_engine
            .spectrum()
            .iter()
            .map(|&mag| mag * correction)
            .collect())
    }

    /// Analyze and return magnitude in dB
    ///
    /// # Arguments
    /// * `frame` - Input frame
    /// * `reference` - Reference level for dB (default: 1.0)
    pub fn analyze_db(&mut self, frame: &[f64], reference: f64) -> Result<Vec<f64>, FftError> {
        let spectrum = self.analyze(frame)?;
        Ok(spectrum
            .iter()
            .map(|&mag| {
                let mag_clamped = mag.max(1e-10);
                20.0 * (mag_clamped / reference).log10()
            })
            .collect())
    }

    /// Bin centre frequencies in Hz
    pub fn frequency_bins_hz(&self) -> Vec<f64> {
        self.fft_engine.frequency_axis()
    }

    /// Centre frequency of the strongest bin from the latest frame
    pub fn peak_frequency(&self) -> f64 {
        self.fft_engine.band_frequency(self.fft_engine.peak_band())
    }

    /// Update configuration
    ///
    /// The FFT tables are rebuilt only when size or sample rate change.
    pub fn update_config(&mut self, config: AnalyzerConfig) -> Result<(), FftError> {
        let needs_new_fft = config.fft_size != self.config.fft_size
            || config.sample_rate != self.config.sample_rate;

        if needs_new_fft {
            self.fft_engine = FftEngine::try_new(config.fft_size, config.sample_rate)?;
            self.frame = vec![0.0; config.fft_size];
        }

        self.window = WindowFunction::new(config.window, config.alpha);
        self.correction_factor = Self::correction_for(&config, &self.window);
        self.config = config;
        Ok(())
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn engine(&self) -> &FftEngine {
        &self.fft_engine
    }

    /// Get number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.fft_engine.num_bins()
    }
}
