use thiserror::Error;

// --- Index ---

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IndexError {
    #[error("Index {index} is out of range for tensor of length {len}.")]
    OutOfRange { index: usize, len: usize },
}
