use crate::{
    codec::tags::TagKind,
    error::{NbtError, NbtResult},
    tree::{Compound, List},
};

/// In-memory form of a single NBT payload.
///
/// The tree keeps values wider than the wire does: every integer tag is
/// held as `Int(i64)` and both float tags as `Float(f64)`. The tag kind
/// a value was read with (or should be written with) lives next to it
/// in the owning [`Compound`] or [`List`], not in the value itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// BYTE, SHORT, INT and LONG payloads.
    Int(i64),
    /// FLOAT and DOUBLE payloads.
    Float(f64),
    /// BYTE_ARRAY payload, uninterpreted.
    Bytes(Vec<u8>),
    /// STRING payload, always valid UTF-8.
    Text(String),
    /// LIST payload together with its element tag.
    List(List),
    /// COMPOUND payload.
    Compound(Compound),
}

impl Value {
    /// Human-readable shape name used in error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bytes(_) => "byte buffer",
            Value::Text(_) => "string",
            Value::List(_) => "list",
            Value::Compound(_) => "compound",
        }
    }

    /// Picks a tag for a value the caller never assigned one to.
    ///
    /// Integers become INT when they fit `i32` and LONG otherwise,
    /// floats always become DOUBLE. BYTE, SHORT, FLOAT and BYTE_ARRAY
    /// are never guessed, so a bare `Bytes` value cannot be written
    /// without an explicit kind.
    pub fn guess_kind(&self) -> NbtResult<TagKind> {
        match self {
            Value::Int(v) => {
                if i32::try_from(*v).is_ok() {
                    Ok(TagKind::Int)
                } else {
                    Ok(TagKind::Long)
                }
            }
            Value::Float(_) => Ok(TagKind::Double),
            Value::Text(_) => Ok(TagKind::String),
            Value::List(_) => Ok(TagKind::List),
            Value::Compound(_) => Ok(TagKind::Compound),
            Value::Bytes(_) => Err(NbtError::TypeInference(self.shape_name())),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<List> for Value {
    fn from(v: List) -> Self {
        Value::List(v)
    }
}

impl From<Compound> for Value {
    fn from(v: Compound) -> Self {
        Value::Compound(v)
    }
}
