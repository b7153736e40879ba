//! UART serial communication abstractions
//!
//! Consumers poll a [`ByteSource`]: they ask how many bytes are buffered
//! and only then take them. [`StagedByteSource`] builds one on top of any
//! non-blocking `embedded-io` receiver.

use embedded_io::{Read, ReadReady};
use heapless::Deque;

/// Buffered source of received bytes
///
/// Both methods must return immediately.
pub trait ByteSource {
    /// Number of bytes that can be read without waiting
    fn available(&mut self) -> usize;

    /// Read up to `buf.len()` bytes
    ///
    /// Returns the number of bytes copied, which is less than requested
    /// when the source underruns.
    fn read_exact(&mut self, buf: &mut [u8]) -> usize;

    /// Receiver errors seen so far, for sources that can detect them
    fn read_errors(&self) -> u32 {
        0
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn available(&mut self) -> usize {
        (**self).available()
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> usize {
        (**self).read_exact(buf)
    }

    fn read_errors(&self) -> u32 {
        (**self).read_errors()
    }
}

/// Bytes pulled from the receiver per `read` call while refilling
const REFILL_CHUNK: usize = 16;

/// Staging buffer in front of a non-blocking UART receiver
///
/// Bytes are moved from the receiver into a fixed-size deque whenever
/// the receiver reports them ready. The deque is never over-filled; bytes
/// that do not fit stay in the receiver's own buffer for the next refill.
pub struct StagedByteSource<R, const N: usize> {
    rx: R,
    staged: Deque<u8, N>,
    read_errors: u32,
}

impl<R, const N: usize> StagedByteSource<R, N>
where
    R: Read + ReadReady,
{
    /// Create a new staging buffer around `rx`
    pub fn new(rx: R) -> Self {
        Self {
            rx,
            staged: Deque::new(),
            read_errors: 0,
        }
    }

    /// Release the wrapped receiver, dropping any staged bytes
    pub fn into_inner(self) -> R {
        self.rx
    }

    fn refill(&mut self) {
        let mut chunk = [0u8; REFILL_CHUNK];

        loop {
            let free = N - self.staged.len();
            if free == 0 {
                break;
            }

            match self.rx.read_ready() {
                Ok(true) => {}
                Ok(false) => break,
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("UART ready check failed");
                    self.read_errors = self.read_errors.wrapping_add(1);
                    break;
                }
            }

            let want = free.min(REFILL_CHUNK);
            match self.rx.read(&mut chunk[..want]) {
                Ok(0) => break,
                Ok(n) => {
                    for &byte in &chunk[..n] {
                        // Cannot fail: n <= free
                        let _ = self.staged.push_back(byte);
                    }
                }
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("UART read error");
                    self.read_errors = self.read_errors.wrapping_add(1);
                    break;
                }
            }
        }
    }
}

impl<R, const N: usize> ByteSource for StagedByteSource<R, N>
where
    R: Read + ReadReady,
{
    fn available(&mut self) -> usize {
        self.refill();
        self.staged.len()
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> usize {
        if self.staged.len() < buf.len() {
            self.refill();
        }

        let mut n = 0;
        for slot in buf.iter_mut() {
            match self.staged.pop_front() {
                Some(byte) => {
                    *slot = byte;
                    n += 1;
                }
                None => break,
            }
        }
        n
    }

    fn read_errors(&self) -> u32 {
        self.read_errors
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115_200,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::{ErrorKind, ErrorType};

    #[derive(Debug)]
    struct MockError;

    impl embedded_io::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Mock receiver with an internal FIFO and an optional injected error
    struct MockRx {
        fifo: Deque<u8, 64>,
        fail_next: bool,
    }

    impl MockRx {
        fn with_bytes(bytes: &[u8]) -> Self {
            let mut fifo = Deque::new();
            for &b in bytes {
                fifo.push_back(b).unwrap();
            }
            Self {
                fifo,
                fail_next: false,
            }
        }

        fn push(&mut self, bytes: &[u8]) {
            for &b in bytes {
                self.fifo.push_back(b).unwrap();
            }
        }
    }

    impl ErrorType for MockRx {
        type Error = MockError;
    }

    impl ReadReady for MockRx {
        fn read_ready(&mut self) -> Result<bool, MockError> {
            if self.fail_next {
                self.fail_next = false;
                return Err(MockError);
            }
            Ok(!self.fifo.is_empty())
        }
    }

    impl Read for MockRx {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, MockError> {
            let mut n = 0;
            while n < buf.len() {
                match self.fifo.pop_front() {
                    Some(b) => {
                        buf[n] = b;
                        n += 1;
                    }
                    None => break,
                }
            }
            Ok(n)
        }
    }

    #[test]
    fn test_available_counts_ready_bytes() {
        let mut source: StagedByteSource<_, 32> =
            StagedByteSource::new(MockRx::with_bytes(&[1, 2, 3]));
        assert_eq!(source.available(), 3);

        let mut buf = [0u8; 2];
        assert_eq!(source.read_exact(&mut buf), 2);
        assert_eq!(buf, [1, 2]);
        assert_eq!(source.available(), 1);
    }

    #[test]
    fn test_short_read_on_underrun() {
        let mut source: StagedByteSource<_, 32> =
            StagedByteSource::new(MockRx::with_bytes(&[7, 8]));

        let mut buf = [0u8; 4];
        assert_eq!(source.read_exact(&mut buf), 2);
        assert_eq!(&buf[..2], &[7, 8]);
        assert_eq!(source.available(), 0);
    }

    #[test]
    fn test_staging_never_overfills() {
        let bytes: [u8; 20] = core::array::from_fn(|i| i as u8);
        let mut source: StagedByteSource<_, 8> =
            StagedByteSource::new(MockRx::with_bytes(&bytes));

        // Only the staging capacity is visible, the rest waits in the receiver
        assert_eq!(source.available(), 8);

        let mut buf = [0u8; 8];
        assert_eq!(source.read_exact(&mut buf), 8);
        assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7]);

        // Bytes were not lost
        assert_eq!(source.available(), 8);
        assert_eq!(source.read_exact(&mut buf), 8);
        assert_eq!(buf[0], 8);
        assert_eq!(source.available(), 4);
    }

    #[test]
    fn test_receiver_error_is_counted() {
        let mut rx = MockRx::with_bytes(&[]);
        rx.fail_next = true;
        let mut source: StagedByteSource<_, 16> = StagedByteSource::new(rx);

        assert_eq!(source.available(), 0);
        assert_eq!(source.read_errors(), 1);

        let mut rx = source.into_inner();
        rx.push(&[0x59]);
        let mut source: StagedByteSource<_, 16> = StagedByteSource::new(rx);
        assert_eq!(source.available(), 1);
        assert_eq!(source.read_errors(), 0);
    }

    #[test]
    fn test_default_uart_config() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 115_200);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }
}
