//! Бинарный кодек формата NBT.
//!
//! Разделён на четыре части: теги (`tags`), чтение (`decode`), запись
//! (`encode`) и gzip-обёртку файлов (`compression`).

pub mod compression;
pub mod decode;
pub mod encode;
pub mod tags;

pub use compression::*;
pub use decode::*;
pub use encode::*;
pub use tags::*;
