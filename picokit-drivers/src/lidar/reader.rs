//! Polled LiDAR frame reader
//!
//! Each call takes at most one fixed-length chunk from the byte source.
//! Chunks that fail header or checksum validation are dropped whole;
//! there is no byte-level resynchronisation. A misaligned stream
//! realigns once the source drops or delivers a partial frame.

use picokit_hal::ByteSource;
use picokit_protocol::{FrameError, LidarFrame, FRAME_LEN};

/// Running counters of reader outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReaderStats {
    /// Frames decoded successfully
    pub frames: u32,
    /// Chunks dropped for a bad header
    pub header_errors: u32,
    /// Chunks dropped for a checksum mismatch
    pub checksum_errors: u32,
    /// Reads that returned fewer bytes than announced
    pub underruns: u32,
    /// Errors reported by the byte source itself
    pub read_errors: u32,
}

impl ReaderStats {
    fn record(&mut self, result: &Result<LidarFrame, FrameError>) {
        let counter = match result {
            Ok(_) => &mut self.frames,
            Err(FrameError::BadHeader) => &mut self.header_errors,
            Err(FrameError::InvalidChecksum) => &mut self.checksum_errors,
            Err(FrameError::Incomplete) => &mut self.underruns,
        };
        *counter = counter.wrapping_add(1);
    }

    /// Total chunks dropped for any reason
    pub fn dropped(&self) -> u32 {
        self.header_errors
            .wrapping_add(self.checksum_errors)
            .wrapping_add(self.underruns)
    }
}

/// Spots new losses between two looks at [`ReaderStats`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LossMonitor {
    dropped: u32,
    read_errors: u32,
}

impl LossMonitor {
    /// Start from the counters in `stats`
    pub fn new(stats: ReaderStats) -> Self {
        Self {
            dropped: stats.dropped(),
            read_errors: stats.read_errors,
        }
    }

    /// Returns `stats` if chunks were dropped or the source reported
    /// errors since the previous check
    pub fn check(&mut self, stats: ReaderStats) -> Option<ReaderStats> {
        let dropped = stats.dropped();
        if dropped == self.dropped && stats.read_errors == self.read_errors {
            return None;
        }
        self.dropped = dropped;
        self.read_errors = stats.read_errors;
        Some(stats)
    }
}

/// LiDAR reader over a polled byte source
pub struct LidarReader<S> {
    source: S,
    stats: ReaderStats,
}

impl<S: ByteSource> LidarReader<S> {
    /// Create a new reader owning `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            stats: ReaderStats::default(),
        }
    }

    /// Try to read one frame without waiting
    ///
    /// Returns `None` when fewer than `FRAME_LEN` bytes are buffered (nothing
    /// is consumed) or when the consumed chunk is invalid.
    pub fn try_read_frame(&mut self) -> Option<LidarFrame> {
        if self.source.available() < FRAME_LEN {
            return None;
        }

        let mut chunk = [0u8; FRAME_LEN];
        let n = self.source.read_exact(&mut chunk);

        let result = LidarFrame::decode(&chunk[..n]);
        self.stats.record(&result);

        match result {
            Ok(frame) => Some(frame),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("Dropped LiDAR chunk: {:?}", _e);
                None
            }
        }
    }

    /// One poll-loop iteration without the wait
    ///
    /// Returns true if a frame was delivered to `on_frame`.
    pub fn poll_once<F>(&mut self, on_frame: &mut F) -> bool
    where
        F: FnMut(LidarFrame),
    {
        match self.try_read_frame() {
            Some(frame) => {
                on_frame(frame);
                true
            }
            None => false,
        }
    }

    /// Counters since creation
    pub fn stats(&self) -> ReaderStats {
        ReaderStats {
            read_errors: self.source.read_errors(),
            ..self.stats
        }
    }

    #[cfg(test)]
    pub(crate) fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
