/*!
Fixed-size pair tensors and element-wise addition.

```
use pairsum::{tensor_add, Tensor};

let a = Tensor::new(&[1, 2]);
let b = Tensor::new(&[3, 4]);
assert_eq!(tensor_add(&a, &b).unwrap().data(), &[4, 6]);
```
*/

mod core;
pub use core::{tensor_add, IndexError, Tensor, PAIR};
