use prettytable::{
    format::consts::FORMAT_BOX_CHARS,
    {Cell, Row, Table},
};
use std::{
    any::type_name,
    fmt::{Debug, Display, Formatter, Result},
};

use crate::Tensor;

impl<T: Copy> Debug for Tensor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Tensor")
            .field("dtype", &type_name::<T>())
            .field("elems", &self.numel())
            .finish()
    }
}

impl<T: Display + Copy> Display for Tensor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.numel() > 0 {
            let row = Row::from(self.data.iter().map(Cell::from));
            let mut table = Table::init(vec![row]);
            table.set_format(*FORMAT_BOX_CHARS);

            write!(f, "{}", table)?;
        }

        writeln!(f, "{:?}", self)
    }
}
