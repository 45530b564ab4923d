use thiserror::Error;

use crate::codec::tags::TagKind;

/// Errors that occur when reading or writing NBT data.
#[derive(Debug, Error)]
pub enum NbtError {
    /// Поток закончился раньше объявленной длины, либо длина в префиксе
    /// невозможна (отрицательная).
    #[error("Decode error: {0}")]
    Decode(String),

    /// Байт тега вне диапазона 0..=10.
    #[error("Unknown tag kind: 0x{0:02X}")]
    UnknownTagKind(u8),

    /// Структурное нарушение формата: не-COMPOUND на верхнем уровне,
    /// END запрошен как тег значения и т.п.
    #[error("Format error: {0}")]
    Format(String),

    /// Форма значения не даёт вывести тег записи (см. `guess_kind`).
    #[error("Cannot infer tag kind for {0}")]
    TypeInference(&'static str),

    /// Значение не помещается в запрошенный тег при записи: переполнение
    /// длины, выход за диапазон целого, несовместимая форма значения.
    #[error("Invalid value for {kind}: {reason}")]
    InvalidValue { kind: TagKind, reason: String },

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for NBT operations.
pub type NbtResult<T> = Result<T, NbtError>;
