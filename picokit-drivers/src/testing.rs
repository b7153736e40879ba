//! Host-side mocks shared by the driver tests

use core::cell::Cell;

use embedded_hal_async::delay::DelayNs;
use heapless::Deque;
use picokit_hal::{ByteSource, OutputPin};

/// In-memory byte source
///
/// `announce_extra` lets a test claim more bytes than are really there to
/// simulate an underrun; `read_errors` stands in for receiver faults.
pub(crate) struct MockSource {
    bytes: Deque<u8, 256>,
    pub(crate) announce_extra: usize,
    pub(crate) read_errors: u32,
    consumed: usize,
}

impl MockSource {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        let mut source = Self {
            bytes: Deque::new(),
            announce_extra: 0,
            read_errors: 0,
            consumed: 0,
        };
        source.push(bytes);
        source
    }

    pub(crate) fn push(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.bytes.push_back(b).unwrap();
        }
    }

    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }
}

impl ByteSource for MockSource {
    fn available(&mut self) -> usize {
        self.bytes.len() + self.announce_extra
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> usize {
        let mut n = 0;
        for slot in buf.iter_mut() {
            match self.bytes.pop_front() {
                Some(b) => {
                    *slot = b;
                    n += 1;
                }
                None => break,
            }
        }
        self.consumed += n;
        n
    }

    fn read_errors(&self) -> u32 {
        self.read_errors
    }
}

/// Indicator output that counts level changes
pub(crate) struct MockLed<'a> {
    high: bool,
    toggles: &'a Cell<u32>,
}

impl<'a> MockLed<'a> {
    pub(crate) fn new(toggles: &'a Cell<u32>) -> Self {
        Self {
            high: true,
            toggles,
        }
    }

    fn set(&mut self, high: bool) {
        if high != self.high {
            self.toggles.set(self.toggles.get() + 1);
        }
        self.high = high;
    }
}

impl OutputPin for MockLed<'_> {
    fn set_high(&mut self) {
        self.set(true);
    }

    fn set_low(&mut self) {
        self.set(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Delay that counts calls and yields once to the executor
pub(crate) struct YieldDelay<'a> {
    calls: &'a Cell<u32>,
}

impl<'a> YieldDelay<'a> {
    pub(crate) fn new(calls: &'a Cell<u32>) -> Self {
        Self { calls }
    }
}

impl DelayNs for YieldDelay<'_> {
    async fn delay_ns(&mut self, _ns: u32) {
        self.calls.set(self.calls.get() + 1);
        embassy_futures::yield_now().await;
    }
}
