use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Nack;

impl i2c::Error for Nack {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(i2c::NoAcknowledgeSource::Address)
    }
}

/// Bus that keeps every transfer; `nack` makes it reject everything
#[derive(Debug, Default)]
pub(crate) struct Bus {
    pub(crate) transfers: Vec<Vec<u8>>,
    pub(crate) nack: bool,
}

impl Bus {
    /// Payloads of all transfers with the register byte removed, joined
    pub(crate) fn stream(&self) -> Vec<u8> {
        self.transfers
            .iter()
            .flat_map(|transfer| transfer[1..].iter().copied())
            .collect()
    }
}

impl ErrorType for Bus {
    type Error = Nack;
}

impl I2c<SevenBitAddress> for Bus {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.nack {
            return Err(Nack);
        }
        let mut transfer = Vec::new();
        for operation in operations.iter() {
            if let Operation::Write(data) = operation {
                transfer.extend_from_slice(data);
            }
        }
        self.transfers.push(transfer);
        Ok(())
    }
}
