#[macro_use]
mod console;
mod numeric;

pub use numeric::{finite_or, keep_inside};
