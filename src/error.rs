use thiserror::Error;

#[derive(Error, Debug)]
pub enum DynArrayError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{op}() called on empty container")]
    EmptyContainer { op: &'static str },

    #[error("capacity overflow")]
    CapacityOverflow,

    #[error("memory allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DynArrayError>;
