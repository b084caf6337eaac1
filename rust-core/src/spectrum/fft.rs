//! Radix-2 FFT engine for real-valued signals
//!
//! Iterative decimation-in-time Cooley-Tukey with bit-reversal and twiddle
//! tables computed once per engine. Optimized for repeated frames of one size.

use num_complex::Complex;
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    #[error("Invalid buffer size {0}, must be a power of 2")]
    InvalidSize(usize),

    #[error("Supplied buffer is not the same size as defined FFT. FFT size: {expected}, buffer size: {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// FFT engine for real-valued frames of a fixed power-of-two size
///
/// Results of [`FftEngine::forward`] live in the engine and are overwritten
/// by the next call.
#[derive(Debug, Clone)]
pub struct FftEngine {
    /// FFT size (number of samples)
    buffer_size: usize,

    /// Sample rate in Hz, only used for frequency labelling
    sample_rate: f64,

    /// Width of one spectrum bin in Hz
    bandwidth: f64,

    /// reverse_table[i] is i with its log2(buffer_size) bits reversed
    reverse_table: Vec<usize>,

    /// sin(-π/h) and cos(-π/h), indexed by stage half-size h
    sin_table: Vec<f64>,
    cos_table: Vec<f64>,

    real: Vec<f64>,
    imag: Vec<f64>,

    /// Magnitude spectrum, buffer_size/2 bins
    spectrum: Vec<f64>,

    peak_band: usize,
    peak: f64,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// The size is not validated here; [`FftEngine::forward`] rejects
    /// sizes that are not a power of two. Use [`FftEngine::try_new`] to
    /// fail early.
    ///
    /// # Arguments
    /// * `buffer_size` - FFT size (number of samples, power of 2)
    /// * `sample_rate` - Sample rate in Hz (0 if frequencies are not needed)
    pub fn new(buffer_size: usize, sample_rate: f64) -> Self {
        let bandwidth = if buffer_size == 0 {
            0.0
        } else {
            2.0 / buffer_size as f64 * sample_rate / 2.0
        };

        let reverse_table = build_reverse_table(buffer_size);

        // Index 0 evaluates sin/cos of -inf; no stage uses it
        let (sin_table, cos_table): (Vec<f64>, Vec<f64>) = (0..buffer_size)
            .map(|h| {
                let angle = -PI / h as f64;
                (angle.sin(), angle.cos())
            })
            .unzip();

        log::debug!(
            "built FFT tables: size={} sample_rate={} bandwidth={:.3} Hz",
            buffer_size,
            sample_rate,
            bandwidth
        );

        Self {
            buffer_size,
            sample_rate,
            bandwidth,
            reverse_table,
            sin_table,
            cos_table,
            real: vec![0.0; buffer_size],
            imag: vec![0.0; buffer_size],
            spectrum: vec![0.0; buffer_size / 2],
            peak_band: 0,
            peak: 0.0,
        }
    }

    /// Create new FFT engine, rejecting sizes that are not a power of 2
    pub fn try_new(buffer_size: usize, sample_rate: f64) -> Result<Self, FftError> {
        if !buffer_size.is_power_of_two() {
            return Err(FftError::InvalidSize(buffer_size));
        }
        Ok(Self::new(buffer_size, sample_rate))
    }

    /// Forward transform of one frame
    ///
    /// Fills the real/imaginary working buffers, the magnitude spectrum
    /// `2/N * |X[k]|` for k = 0..N/2 and the peak bin. Both preconditions
    /// are checked before anything is written.
    ///
    /// # Arguments
    /// * `buffer` - Time-domain samples, exactly `buffer_size` long
    pub fn forward(&mut self, buffer: &[f64]) -> Result<(), FftError> {
        let n = self.buffer_size;

        if !n.is_power_of_two() {
            return Err(FftError::InvalidSize(n));
        }
        if buffer.len() != n {
            return Err(FftError::SizeMismatch {
                expected: n,
                actual: buffer.len(),
            });
        }

        let real = &mut self.real;
        let imag = &mut self.imag;

        for (i, &rev) in self.reverse_table.iter().enumerate() {
            real[i] = buffer[rev];
            imag[i] = 0.0;
        }

        let mut half_size = 1;
        while half_size < n {
            // Advancing the phasor by the stage step avoids sin/cos in the
            // inner loop at the cost of some accumulated rotation error
            let step = Complex::new(self.cos_table[half_size], self.sin_table[half_size]);
            let mut phase = Complex::new(1.0, 0.0);

            for fft_step in 0..half_size {
                let mut i = fft_step;
                while i < n {
                    let off = i + half_size;
                    let t = phase * Complex::new(real[off], imag[off]);

                    real[off] = real[i] - t.re;
                    imag[off] = imag[i] - t.im;
                    real[i] += t.re;
                    imag[i] += t.im;

                    i += half_size << 1;
                }

                phase *= step;
            }

            half_size <<= 1;
        }

        self.calculate_spectrum();
        Ok(())
    }

    fn calculate_spectrum(&mut self) {
        let scale = 2.0 / self.buffer_size as f64;

        self.peak_band = 0;
        self.peak = 0.0;

        for (i, bin) in self.spectrum.iter_mut().enumerate() {
            let (re, im) = (self.real[i], self.imag[i]);
            let mag = scale * (re * re + im * im).sqrt();

            // Strict comparison: the lowest bin wins ties
            if mag > self.peak {
                self.peak_band = i;
                self.peak = mag;
            }

            *bin = mag;
        }
    }

    /// Centre frequency of spectrum bin `index` in Hz
    pub fn band_frequency(&self, index: usize) -> f64 {
        self.bandwidth * index as f64 + self.bandwidth / 2.0
    }

    /// Centre frequencies of all spectrum bins in Hz
    pub fn frequency_axis(&self) -> Vec<f64> {
        (0..self.num_bins()).map(|i| self.band_frequency(i)).collect()
    }

    /// Latest magnitude spectrum in dB: 20*log10(|X[k]|/reference)
    pub fn spectrum_db(&self, reference: f64) -> Vec<f64> {
        self.spectrum
            .iter()
            .map(|&mag| {
                let mag_clamped = mag.max(1e-10); // Avoid log(0)
                20.0 * (mag_clamped / reference).log10()
            })
            .collect()
    }

    /// Magnitude spectrum from the latest forward call
    pub fn spectrum(&self) -> &[f64] {
        &self.spectrum
    }

    /// Raw real part of the latest transform (all `buffer_size` bins)
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Raw imaginary part of the latest transform
    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    /// Index of the strongest bin in the latest forward call
    pub fn peak_band(&self) -> usize {
        self.peak_band
    }

    /// Magnitude of the strongest bin in the latest forward call
    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Width of one bin in Hz
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Number of spectrum bins (buffer_size/2)
    pub fn num_bins(&self) -> usize {
        self.spectrum.len()
    }

    pub fn reverse_table(&self) -> &[usize] {
        &self.reverse_table
    }

    pub fn sin_table(&self) -> &[f64] {
        &self.sin_table
    }

    pub fn cos_table(&self) -> &[f64] {
        &self.cos_table
    }
}

/// Bit-reversal permutation built by doubling
///
/// Each pass copies the known prefix with the next lower bit set. For sizes
/// that are not a power of two the table is filled as far as it reaches.
fn build_reverse_table(size: usize) -> Vec<usize> {
    let mut table = vec![0usize; size];

    let mut limit = 1;
    let mut bit = size >> 1;

    while limit < size {
        for i in 0..limit.min(size - limit) {
            table[i + limit] = table[i] + bit;
        }

        limit <<= 1;
        bit >>= 1;
    }

    table
}
