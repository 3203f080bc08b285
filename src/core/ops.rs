use anyhow::Result;
use num_traits::Num;
use std::ops::Add;

use crate::Tensor;

/// Number of leading elements read by [`tensor_add`].
pub const PAIR: usize = 2;

/// Adds the first two elements of `a` and `b` position by position.
///
/// Elements past index 1 are ignored. Fails with
/// [`IndexError::OutOfRange`](crate::IndexError::OutOfRange) if either
/// tensor holds fewer than two elements. Neither input is modified.
pub fn tensor_add<T>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>>
where
    T: Num + Copy,
{
    let data = (0..PAIR)
        .map(|index| -> Result<T> { Ok(a.index(index)? + b.index(index)?) })
        .collect::<Result<Vec<T>>>()?;

    Ok(Tensor::init(data))
}

// --- Operator ---

impl<T> Add for Tensor<T>
where
    T: Num + Copy,
{
    type Output = Result<Tensor<T>>;
    fn add(self, rhs: Tensor<T>) -> Self::Output {
        tensor_add(&self, &rhs)
    }
}

impl<T> Add for &Tensor<T>
where
    T: Num + Copy,
{
    type Output = Result<Tensor<T>>;
    fn add(self, rhs: &Tensor<T>) -> Self::Output {
        tensor_add(self, rhs)
    }
}

impl<T> Add<Tensor<T>> for &Tensor<T>
where
    T: Num + Copy,
{
    type Output = Result<Tensor<T>>;
    fn add(self, rhs: Tensor<T>) -> Self::Output {
        tensor_add(self, &rhs)
    }
}

impl<T> Add<&Tensor<T>> for Tensor<T>
where
    T: Num + Copy,
{
    type Output = Result<Tensor<T>>;
    fn add(self, rhs: &Tensor<T>) -> Self::Output {
        tensor_add(&self, rhs)
    }
}
