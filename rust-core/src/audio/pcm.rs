//! Decoded PCM sample buffers
//!
//! Planar multi-channel container handed over by the host decoder

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PcmError {
    #[error("PCM buffer must have at least one channel")]
    NoChannels,

    #[error("Channel {channel} has {actual} samples, expected {expected}")]
    RaggedChannels {
        channel: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Channel {channel} out of range ({count} channels)")]
    ChannelOutOfRange { channel: usize, count: usize },
}

/// Planar PCM buffer: one sample vector per channel, equal lengths
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
    sample_rate: f64,
    channels: Vec<Vec<f64>>,
}

impl PcmBuffer {
    /// Create PCM buffer
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate in Hz
    /// * `channels` - Planar channel data, all of the same length
    pub fn new(sample_rate: f64, channels: Vec<Vec<f64>>) -> Result<Self, PcmError> {
        let expected = channels.first().ok_or(PcmError::NoChannels)?.len();

        if let Some((channel, data)) = channels
            .iter()
            .enumerate()
            .find(|(_, data)| data.len() != expected)
        {
            return Err(PcmError::RaggedChannels {
                channel,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Single-channel buffer
    pub fn from_mono(sample_rate: f64, samples: Vec<f64>) -> Self {
        Self {
            sample_rate,
            channels: vec![samples],
        }
    }

    /// Samples of one channel
    pub fn channel_data(&self, channel: usize) -> Result<&[f64], PcmError> {
        self.channels
            .get(channel)
            .map(Vec::as_slice)
            .ok_or(PcmError::ChannelOutOfRange {
                channel,
                count: self.channels.len(),
            })
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        if self.sample_rate > 0.0 {
            self.len() as f64 / self.sample_rate
        } else {
            0.0
        }
    }

    /// Copy out the time range [start, end) in seconds
    ///
    /// Times are truncated to sample indices and clamped to the buffer; an
    /// inverted range yields an empty buffer.
    pub fn cut(&self, start: f64, end: f64) -> PcmBuffer {
        let len = self.len();
        let to_index = |t: f64| ((t * self.sample_rate).max(0.0) as usize).min(len);
        let start = to_index(start);
        let end = to_index(end).max(start);

        PcmBuffer {
            sample_rate: self.sample_rate,
            channels: self
                .channels
                .iter()
                .map(|data| data[start..end].to_vec())
                .collect(),
        }
    }
}
