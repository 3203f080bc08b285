use pairsum::{tensor_add, Tensor};

fn main() -> anyhow::Result<()> {
    let mut t1 = Tensor::empty();
    t1.set_data(&[1, 2]);

    let mut t2 = Tensor::empty();
    t2.set_data(&[3, 4]);

    let t3 = tensor_add(&t1, &t2)?;
    println!("Sum: {:?}", t3.data());

    Ok(())
}
