mod display;
mod errors;
mod ops;
mod tensor;

pub use errors::IndexError;
pub use ops::{tensor_add, PAIR};
pub use tensor::Tensor;
