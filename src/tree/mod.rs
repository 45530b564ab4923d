//! In-memory representation of decoded NBT data.

pub mod compound;
pub mod list;
pub mod value;

pub use compound::*;
pub use list::*;
pub use value::*;
