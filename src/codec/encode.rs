//! Модуль для сериализации дерева NBT в бинарный поток.
//!
//! Запись ведётся по тегам, закреплённым за полями. Полю без тега он
//! выводится из формы значения и записывается обратно в дерево, чтобы
//! повторная сериализация использовала тот же тег. Поэтому запись
//! принимает `&mut`.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::{
    codec::tags::TagKind,
    error::{NbtError, NbtResult},
    tree::{Compound, Value},
};

/// Записывает именованный корневой COMPOUND-тег.
pub fn write_root<W: Write>(w: &mut W, name: &str, root: &mut Compound) -> NbtResult<()> {
    w.write_u8(TagKind::Compound as u8)?;
    write_string(w, name)?;
    write_compound_body(w, root)
}

/// Записывает полезную нагрузку значения под тегом `kind`.
///
/// Целое значение пишется под любым целым или дробным тегом, если
/// помещается в диапазон. Дробное под целым тегом не пишется. Несовпадение
/// формы значения и тега — [`NbtError::InvalidValue`].
pub fn write_payload<W: Write>(w: &mut W, kind: TagKind, value: &mut Value) -> NbtResult<()> {
    match kind {
        TagKind::End => Err(NbtError::Format("TAG_End has no payload".to_string())),
        TagKind::Byte => {
            let v = int_payload(kind, value)?;
            let b = i8::try_from(v).map_err(|_| range_error(kind, v))?;
            w.write_i8(b)?;
            Ok(())
        }
        TagKind::Short => {
            let v = int_payload(kind, value)?;
            let s = i16::try_from(v).map_err(|_| range_error(kind, v))?;
            w.write_i16::<BigEndian>(s)?;
            Ok(())
        }
        TagKind::Int => {
            let v = int_payload(kind, value)?;
            let i = i32::try_from(v).map_err(|_| range_error(kind, v))?;
            w.write_i32::<BigEndian>(i)?;
            Ok(())
        }
        TagKind::Long => {
            let v = int_payload(kind, value)?;
            w.write_i64::<BigEndian>(v)?;
            Ok(())
        }
        TagKind::Float => {
            let v = float_payload(kind, value)?;
            w.write_f32::<BigEndian>(v as f32)?;
            Ok(())
        }
        TagKind::Double => {
            let v = float_payload(kind, value)?;
            w.write_f64::<BigEndian>(v)?;
            Ok(())
        }
        TagKind::ByteArray => match value {
            Value::Bytes(b) => {
                let len = i32::try_from(b.len()).map_err(|_| NbtError::InvalidValue {
                    kind,
                    reason: format!("{} bytes exceed the length prefix", b.len()),
                })?;
                w.write_i32::<BigEndian>(len)?;
                w.write_all(b)?;
                Ok(())
            }
            other => Err(shape_error(kind, other)),
        },
        TagKind::String => match value {
            Value::Text(s) => write_string(w, s),
            other => Err(shape_error(kind, other)),
        },
        TagKind::List => match value {
            Value::List(list) => {
                let elem = match list.elem_kind() {
                    Some(k) => k,
                    None => match list.iter().next() {
                        Some(first) => first.guess_kind()?,
                        // Пустой список без тега элемента: пишем INT.
                        None => TagKind::Int,
                    },
                };
                list.set_elem_kind(elem);

                w.write_u8(elem as u8)?;
                let count = i32::try_from(list.len()).map_err(|_| NbtError::InvalidValue {
                    kind,
                    reason: format!("{} items exceed the length prefix", list.len()),
                })?;
                w.write_i32::<BigEndian>(count)?;
                for item in list.iter_mut() {
                    write_payload(w, elem, item)?;
                }
                Ok(())
            }
            other => Err(shape_error(kind, other)),
        },
        TagKind::Compound => match value {
            Value::Compound(c) => write_compound_body(w, c),
            other => Err(shape_error(kind, other)),
        },
    }
}

/// Записывает поля compound-а и завершающий байт END.
fn write_compound_body<W: Write>(w: &mut W, compound: &mut Compound) -> NbtResult<()> {
    let names: Vec<String> = compound.names().cloned().collect();
    for name in names {
        let Some(value) = compound.get(&name) else {
            continue;
        };
        let kind = match compound.kind(&name) {
            Some(k) => k,
            None => value.guess_kind()?,
        };
        compound.set_kind(&name, kind);

        w.write_u8(kind as u8)?;
        write_string(w, &name)?;
        let Some(value) = compound.get_mut(&name) else {
            continue;
        };
        write_payload(w, kind, value)?;
    }
    w.write_u8(TagKind::End as u8)?;
    Ok(())
}

/// Записывает STRING: знаковая двухбайтовая длина, затем UTF-8.
fn write_string<W: Write>(w: &mut W, s: &str) -> NbtResult<()> {
    let bytes = s.as_bytes();
    let len = i16::try_from(bytes.len()).map_err(|_| NbtError::InvalidValue {
        kind: TagKind::String,
        reason: format!("{} bytes exceed the length prefix", bytes.len()),
    })?;
    w.write_i16::<BigEndian>(len)?;
    w.write_all(bytes)?;
    Ok(())
}

fn int_payload(kind: TagKind, value: &Value) -> NbtResult<i64> {
    match value {
        Value::Int(v) => Ok(*v),
        other => Err(shape_error(kind, other)),
    }
}

fn float_payload(kind: TagKind, value: &Value) -> NbtResult<f64> {
    match value {
        Value::Float(v) => Ok(*v),
        Value::Int(v) => Ok(*v as f64),
        other => Err(shape_error(kind, other)),
    }
}

fn shape_error(kind: TagKind, value: &Value) -> NbtError {
    NbtError::InvalidValue {
        kind,
        reason: format!("cannot encode {} payload", value.shape_name()),
    }
}

fn range_error(kind: TagKind, v: i64) -> NbtError {
    NbtError::InvalidValue {
        kind,
        reason: format!("{v} out of range"),
    }
}
