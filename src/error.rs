use core::fmt;

/// Errors returned by a bridged strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The I2C bus rejected a write; the rest of the frame was not sent
    Transport(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "I2C write failed: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
