use anyhow::{bail, Result};
use std::sync::Arc;

use crate::core::errors::IndexError;

#[derive(Clone)]
pub struct Tensor<T> {
    pub(crate) data: Arc<Vec<T>>,
}

impl<T: Copy> Tensor<T> {
    pub(crate) fn init(data: Vec<T>) -> Tensor<T> {
        Tensor {
            data: Arc::new(data),
        }
    }

    pub fn empty() -> Tensor<T> {
        Tensor::init(Vec::new())
    }

    pub fn new(data: &[T]) -> Tensor<T> {
        Tensor::init(data.to_vec())
    }

    // --- Data ---

    /// Replaces the whole sequence. Clones made before the call keep the old data.
    pub fn set_data(&mut self, data: &[T]) {
        self.data = Arc::new(data.to_vec());
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn index(&self, index: usize) -> Result<T> {
        match self.data.get(index) {
            Some(&elem) => Ok(elem),
            None => bail!(IndexError::OutOfRange {
                index,
                len: self.numel(),
            }),
        }
    }
}

impl<T: Copy> Default for Tensor<T> {
    fn default() -> Tensor<T> {
        Tensor::empty()
    }
}
