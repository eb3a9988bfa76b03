//! Recording I2C bus shared by the bridge tests.

#![allow(dead_code)]

use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

impl i2c::Error for BusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// One I2C write as seen on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Write {
    pub address: u8,
    pub bytes: Vec<u8>,
}

/// Bus that records every write and can fail after a number of writes
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub writes: Vec<Write>,
    pub attempts: usize,
    pub fail_after: Option<usize>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `writes` writes, then reject every further one
    pub fn failing_after(writes: usize) -> Self {
        Self {
            fail_after: Some(writes),
            ..Self::default()
        }
    }

    /// Payload of every write with the leading register byte removed, joined
    pub fn payload(&self) -> Vec<u8> {
        self.writes
            .iter()
            .flat_map(|write| write.bytes[1..].iter().copied())
            .collect()
    }
}

impl ErrorType for RecordingBus {
    type Error = BusError;
}

impl I2c<SevenBitAddress> for RecordingBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.attempts += 1;
        if self.fail_after.is_some_and(|limit| self.writes.len() >= limit) {
            return Err(BusError);
        }

        // Adjacent writes go out as one transfer.
        let mut bytes = Vec::new();
        for operation in operations.iter() {
            match operation {
                Operation::Write(data) => bytes.extend_from_slice(data),
                Operation::Read(_) => panic!("the bridge is never read"),
            }
        }
        self.writes.push(Write { address, bytes });
        Ok(())
    }
}
