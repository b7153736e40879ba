//! Frame encoding and decoding for the LiDAR serial protocol.
//!
//! Frame format (9 bytes, fixed length):
//! - HEADER (2 bytes): 0x59 0x59
//! - DISTANCE (2 bytes): little-endian u16
//! - STRENGTH (2 bytes): little-endian u16
//! - RESERVED (2 bytes): ignored (temperature on most modules)
//! - CHECKSUM (1 byte): low byte of the sum of bytes 0..8

/// Frame length in bytes
pub const FRAME_LEN: usize = 9;

/// Frame header sentinel pair
pub const FRAME_HEADER: [u8; 2] = [0x59, 0x59];

const DISTANCE_OFFSET: usize = 2;
const STRENGTH_OFFSET: usize = 4;
const CHECKSUM_OFFSET: usize = FRAME_LEN - 1;

/// Errors that can occur during frame decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Fewer than `FRAME_LEN` bytes were supplied
    Incomplete,
    /// First two bytes are not the header sentinel
    BadHeader,
    /// Checksum mismatch
    InvalidChecksum,
}

/// A decoded LiDAR measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LidarFrame {
    /// Distance (module units, cm for TF-Luna)
    pub distance: u16,
    /// Signal strength
    pub strength: u16,
}

/// Calculate the checksum over the first `FRAME_LEN - 1` bytes
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .take(CHECKSUM_OFFSET)
        .fold(0u8, |acc, &b| acc.wrapping_add(b))
}

impl LidarFrame {
    /// Create a new frame
    pub const fn new(distance: u16, strength: u16) -> Self {
        Self { distance, strength }
    }

    /// Decode a frame from raw bytes
    ///
    /// Only the first `FRAME_LEN` bytes are examined.
    pub fn decode(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() < FRAME_LEN {
            return Err(FrameError::Incomplete);
        }

        if bytes[..2] != FRAME_HEADER {
            return Err(FrameError::BadHeader);
        }

        if checksum(bytes) != bytes[CHECKSUM_OFFSET] {
            return Err(FrameError::InvalidChecksum);
        }

        let distance = u16::from_le_bytes([bytes[DISTANCE_OFFSET], bytes[DISTANCE_OFFSET + 1]]);
        let strength = u16::from_le_bytes([bytes[STRENGTH_OFFSET], bytes[STRENGTH_OFFSET + 1]]);

        Ok(Self { distance, strength })
    }

    /// Encode this frame
    ///
    /// Reserved bytes are written as zero.
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        let mut buffer = [0u8; FRAME_LEN];
        buffer[..2].copy_from_slice(&FRAME_HEADER);
        buffer[DISTANCE_OFFSET..DISTANCE_OFFSET + 2].copy_from_slice(&self.distance.to_le_bytes());
        buffer[STRENGTH_OFFSET..STRENGTH_OFFSET + 2].copy_from_slice(&self.strength.to_le_bytes());
        buffer[CHECKSUM_OFFSET] = checksum(&buffer);
        buffer
    }
}
