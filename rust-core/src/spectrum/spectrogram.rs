//! Spectrogram driver
//!
//! Cuts a mono signal into consecutive non-overlapping frames, runs the FFT
//! engine on each and stacks the spectra into a frame × bin matrix.

use super::fft::{FftEngine, FftError};
use crate::audio::pcm::{PcmBuffer, PcmError};
use crate::windows::{WindowFunction, WindowKind};
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpectrogramError {
    #[error(transparent)]
    Fft(#[from] FftError),

    #[error(transparent)]
    Pcm(#[from] PcmError),

    #[error("Spectrogram has no frames")]
    Empty,
}

/// Compute the magnitude spectrogram of a mono signal
///
/// A trailing run shorter than `fft_size` is dropped, not zero-padded.
///
/// # Arguments
/// * `signal` - Mono samples
/// * `fft_size` - Frame length (power of 2)
/// * `window` - Optional window applied to every frame before the FFT
///
/// # Returns
/// Matrix of shape (frames, fft_size/2)
pub fn compute_spectrogram(
    signal: &[f64],
    fft_size: usize,
    window: Option<&WindowFunction>,
) -> Result<Array2<f64>, FftError> {
    let mut fft = FftEngine::try_new(fft_size, 0.0)?;
    let num_frames = signal.len() / fft_size;
    let mut matrix = Array2::zeros((num_frames, fft_size / 2));
    let mut frame = vec![0.0; fft_size];

    for (chunk, mut row) in signal
        .chunks_exact(fft_size)
        .zip(matrix.axis_iter_mut(Axis(0)))
    {
        frame.copy_from_slice(chunk);
        if let Some(window) = window {
            window.process(&mut frame);
        }
        fft.forward(&frame)?;

        for (dst, &src) in row.iter_mut().zip(fft.spectrum()) {
            *dst = src;
        }
    }

    Ok(matrix)
}

/// Spectrogram configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrogramConfig {
    /// Frame length in samples (power of 2)
    pub fft_size: usize,

    /// Multiplier mapping magnitudes to 8-bit levels
    pub gain: f64,

    /// Window applied to every frame, none by default
    pub window: Option<WindowKind>,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            fft_size: 1024,
            gain: 12000.0,
            window: None,
        }
    }
}

/// Grayscale RGBA raster of a spectrogram
///
/// One column per frame, one row per bin, lowest bin on the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectrogramImage {
    pub width: usize,
    pub height: usize,
    /// Row-major RGBA, 4 bytes per pixel
    pub data: Vec<u8>,
}

/// Spectrogram of the first channel of a PCM buffer
#[derive(Debug, Clone)]
pub struct Spectrogram {
    config: SpectrogramConfig,
    magnitudes: Array2<f64>,
    levels: Array2<u8>,
    sample_rate: Option<f64>,
}

impl Spectrogram {
    pub fn new(config: SpectrogramConfig) -> Self {
        let bins = config.fft_size / 2;
        Self {
            config,
            magnitudes: Array2::zeros((0, bins)),
            levels: Array2::zeros((0, bins)),
            sample_rate: None,
        }
    }

    /// Spectrogram with default gain and no window
    pub fn with_fft_size(fft_size: usize) -> Self {
        Self::new(SpectrogramConfig {
            fft_size,
            ..SpectrogramConfig::default()
        })
    }

    /// Analyze channel 0 of `pcm`, replacing any previous result
    pub fn process(&mut self, pcm: &PcmBuffer) -> Result<(), SpectrogramError> {
        let signal = pcm.channel_data(0)?;
        let fft_size = self.config.fft_size;

        if signal.len() < fft_size {
            log::warn!(
                "signal of {} samples is shorter than one {}-sample frame",
                signal.len(),
                fft_size
            );
        }

        let window = self
            .config
            .window
            .map(|kind| WindowFunction::new(kind, None));
        let magnitudes = compute_spectrogram(signal, fft_size, window.as_ref())?;

        let gain = self.config.gain;
        self.levels = magnitudes.mapv(|mag| (mag * gain).round().clamp(0.0, 255.0) as u8);
        self.magnitudes = magnitudes;
        self.sample_rate = Some(pcm.sample_rate());

        log::debug!(
            "spectrogram: {} frames x {} bins from {} samples at {} Hz",
            self.frame_count(),
            self.bin_count(),
            signal.len(),
            pcm.sample_rate()
        );

        Ok(())
    }

    /// Magnitude matrix (frames × bins)
    pub fn magnitudes(&self) -> &Array2<f64> {
        &self.magnitudes
    }

    /// 8-bit levels: clamp(round(magnitude × gain), 0, 255)
    pub fn levels(&self) -> &Array2<u8> {
        &self.levels
    }

    pub fn frame_count(&self) -> usize {
        self.magnitudes.nrows()
    }

    pub fn bin_count(&self) -> usize {
        self.magnitudes.ncols()
    }

    pub fn config(&self) -> &SpectrogramConfig {
        &self.config
    }

    fn frame_duration(&self) -> Option<f64> {
        self.sample_rate
            .filter(|&rate| rate > 0.0)
            .map(|rate| self.config.fft_size as f64 / rate)
    }

    /// Frame (column) index containing time `time` in seconds
    ///
    /// Returns 0 until a signal has been processed.
    pub fn x_by_time(&self, time: f64) -> usize {
        self.frame_duration()
            .map_or(0, |dur| (time / dur).max(0.0) as usize)
    }

    /// Start time in seconds of frame (column) `x`
    ///
    /// Returns 0 until a signal has been processed.
    pub fn time_by_x(&self, x: usize) -> f64 {
        self.frame_duration().map_or(0.0, |dur| x as f64 * dur)
    }

    /// Render levels as a grayscale RGBA image
    pub fn image_data(&self) -> Result<SpectrogramImage, SpectrogramError> {
        let (width, height) = self.levels.dim();
        if width == 0 || height == 0 {
            return Err(SpectrogramError::Empty);
        }

        let mut data = vec![0u8; width * height * 4];
        for ((x, bin), &level) in self.levels.indexed_iter() {
            let y = height - 1 - bin;
            let pos = (y * width + x) * 4;
            data[pos] = level;
            data[pos + 1] = level;
            data[pos + 2] = level;
            data[pos + 3] = 255;
        }

        Ok(SpectrogramImage {
            width,
            height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn tone(len: usize, bin: f64, fft_size: usize) -> Vec<f64> {
        (0..len)
            .map(|i| (2.0 * PI * bin * i as f64 / fft_size as f64).sin())
            .collect()
    }

    #[test]
    fn test_remainder_dropped() {
        let signal = tone(64 * 3 + 40, 5.0, 64);
        let matrix = compute_spectrogram(&signal, 64, None).unwrap();
        assert_eq!(matrix.dim(), (3, 32));

        let short = compute_spectrogram(&signal[..63], 64, None).unwrap();
        assert_eq!(short.dim(), (0, 32));
    }

    #[test]
    fn test_rows_match_engine_per_frame() {
        let fft_size = 128;
        let signal: Vec<f64> = (0..fft_size * 2)
            .map(|i| if i < fft_size { 1.0 } else { (i as f64 * 0.9).cos() })
            .collect();
        let matrix = compute_spectrogram(&signal, fft_size, None).unwrap();

        let mut fft = FftEngine::new(fft_size, 0.0);
        for (frame, row) in signal.chunks(fft_size).zip(matrix.rows()) {
            fft.forward(frame).unwrap();
            assert_eq!(row.to_vec(), fft.spectrum().to_vec());
        }
        // First frame is DC
        assert!((matrix[[0, 0]] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_windowed_frames() {
        let signal = vec![1.0; 256];
        let hann = WindowFunction::new(WindowKind::Hann, None);
        let plain = compute_spectrogram(&signal, 256, None).unwrap();
        let windowed = compute_spectrogram(&signal, 256, Some(&hann)).unwrap();
        assert!(windowed[[0, 0]] < plain[[0, 0]]);
        assert!(windowed[[0, 1]] > 0.0);
    }

    #[test]
    fn test_invalid_fft_size() {
        assert_eq!(
            compute_spectrogram(&[0.0; 300], 100, None),
            Err(FftError::InvalidSize(100))
        );
    }

    #[test]
    fn test_levels_and_time_mapping() {
        let fft_size = 256;
        let sample_rate = 8000.0;
        let pcm = PcmBuffer::from_mono(sample_rate, tone(fft_size * 4, 10.0, fft_size));

        let mut spectrogram = Spectrogram::with_fft_size(fft_size);
        assert_eq!(spectrogram.x_by_time(1.0), 0);
        assert_eq!(spectrogram.time_by_x(3), 0.0);

        spectrogram.process(&pcm).unwrap();
        assert_eq!(spectrogram.frame_count(), 4);
        assert_eq!(spectrogram.bin_count(), 128);

        // Unit sine saturates its bin, silence elsewhere stays dark
        assert_eq!(spectrogram.levels()[[0, 10]], 255);
        assert_eq!(spectrogram.levels()[[0, 60]], 0);

        let frame_dur = fft_size as f64 / sample_rate;
        assert!((spectrogram.time_by_x(3) - 3.0 * frame_dur).abs() < 1e-12);
        assert_eq!(spectrogram.x_by_time(2.5 * frame_dur), 2);
    }

    #[test]
    fn test_level_quantization() {
        let mut spectrogram = Spectrogram::new(SpectrogramConfig {
            fft_size: 64,
            gain: 100.0,
            window: None,
        });
        // DC magnitude = 2 * v
        let pcm = PcmBuffer::from_mono(64.0, vec![0.5; 64]);
        spectrogram.process(&pcm).unwrap();
        assert_eq!(spectrogram.levels()[[0, 0]], 100);
        assert_eq!(spectrogram.levels()[[0, 1]], 0);
    }

    #[test]
    fn test_image_layout() {
        let fft_size = 16;
        let pcm = PcmBuffer::from_mono(16.0, vec![1.0; fft_size * 2]);
        let mut spectrogram = Spectrogram::with_fft_size(fft_size);
        spectrogram.process(&pcm).unwrap();

        let image = spectrogram.image_data().unwrap();
        assert_eq!((image.width, image.height), (2, 8));
        assert_eq!(image.data.len(), 2 * 8 * 4);

        // Bin 0 (DC) lands on the bottom row
        let bottom = ((image.height - 1) * image.width) * 4;
        assert_eq!(&image.data[bottom..bottom + 4], &[255, 255, 255, 255]);
        assert_eq!(&image.data[0..4], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_empty_image_for_short_signal() {
        let spectrogram = Spectrogram::with_fft_size(64);
        assert_eq!(spectrogram.image_data(), Err(SpectrogramError::Empty));

        let mut spectrogram = Spectrogram::with_fft_size(64);
        let pcm = PcmBuffer::from_mono(8000.0, vec![0.0; 10]);
        spectrogram.process(&pcm).unwrap();
        assert_eq!(spectrogram.frame_count(), 0);
        assert_eq!(spectrogram.image_data(), Err(SpectrogramError::Empty));
    }

    #[test]
    fn test_config_defaults() {
        let config: SpectrogramConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SpectrogramConfig::default());
        assert_eq!(config.gain, 12000.0);
    }
}
