//! PCM sample buffers handed over by the host audio decoder

pub mod pcm;

pub use pcm::{PcmBuffer, PcmError};
