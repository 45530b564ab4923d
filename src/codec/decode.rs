//! Модуль для десериализации дерева NBT из бинарного потока.
//!
//! Поток читается рекурсивно: однобайтовый тег определяет форму
//! полезной нагрузки, длины закодированы знаковыми big-endian числами.
//! Верхний уровень обязан быть одиночным именованным COMPOUND-тегом.

use std::io::{self, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::{
    codec::tags::TagKind,
    error::{NbtError, NbtResult},
    tree::{Compound, List, Value},
};

/// Читает именованный корневой тег.
///
/// Возвращает имя корня и его содержимое. Корень читается целиком и
/// только после этого проверяется: всё, кроме COMPOUND, на верхнем
/// уровне отвергается как [`NbtError::Format`].
pub fn read_root<R: Read>(r: &mut R) -> NbtResult<(String, Compound)> {
    let tag = r.read_u8()?;
    let kind = TagKind::try_from(tag).map_err(|_| NbtError::UnknownTagKind(tag))?;
    if kind == TagKind::End {
        return Err(NbtError::Format("stream starts with TAG_End".to_string()));
    }

    let name = read_string(r)?;
    let value = read_payload(r, kind)?;
    match value {
        Value::Compound(c) => Ok((name, c)),
        _ => Err(NbtError::Format(format!(
            "root tag is {kind}, expected TAG_Compound"
        ))),
    }
}

/// Читает полезную нагрузку тега `kind`.
///
/// `END` нагрузкой не обладает и приводит к [`NbtError::Format`].
pub fn read_payload<R: Read>(r: &mut R, kind: TagKind) -> NbtResult<Value> {
    match kind {
        TagKind::End => Err(NbtError::Format("TAG_End has no payload".to_string())),
        TagKind::Byte => {
            let v = r.read_i8()?;
            Ok(Value::Int(v as i64))
        }
        TagKind::Short => {
            let v = r.read_i16::<BigEndian>()?;
            Ok(Value::Int(v as i64))
        }
        TagKind::Int => {
            let v = r.read_i32::<BigEndian>()?;
            Ok(Value::Int(v as i64))
        }
        TagKind::Long => {
            let v = r.read_i64::<BigEndian>()?;
            Ok(Value::Int(v))
        }
        TagKind::Float => {
            let v = r.read_f32::<BigEndian>()?;
            Ok(Value::Float(v as f64))
        }
        TagKind::Double => {
            let v = r.read_f64::<BigEndian>()?;
            Ok(Value::Float(v))
        }
        TagKind::ByteArray => {
            let len = r.read_i32::<BigEndian>()?;
            if len < 0 {
                return Err(NbtError::Decode(format!(
                    "negative TAG_Byte_Array length {len}"
                )));
            }
            let buf = read_exact_len(r, len as usize, TagKind::ByteArray)?;
            Ok(Value::Bytes(buf))
        }
        TagKind::String => Ok(Value::Text(read_string(r)?)),
        TagKind::List => {
            let elem_tag = r.read_u8()?;
            let elem_kind =
                TagKind::try_from(elem_tag).map_err(|_| NbtError::UnknownTagKind(elem_tag))?;
            let count = r.read_i32::<BigEndian>()?;
            if count < 0 {
                return Err(NbtError::Decode(format!("negative TAG_List length {count}")));
            }
            // Пустые списки в чужих файлах встречаются с тегом элемента
            // END. Запоминаем его как есть, чтобы запись воспроизводила
            // исходные байты. Непустой END-список упадёт ниже при
            // чтении первой нагрузки.
            let mut list = List::with_kind(elem_kind);
            for _ in 0..count {
                list.push(read_payload(r, elem_kind)?);
            }
            Ok(Value::List(list))
        }
        TagKind::Compound => {
            let mut compound = Compound::new();
            loop {
                let tag = r.read_u8()?;
                if tag == TagKind::End as u8 {
                    break;
                }
                let kind = TagKind::try_from(tag).map_err(|_| NbtError::UnknownTagKind(tag))?;
                let name = read_string(r)?;
                let value = read_payload(r, kind)?;
                compound.insert_with_kind(name, value, kind);
            }
            Ok(Value::Compound(compound))
        }
    }
}

/// Читает STRING: знаковая двухбайтовая длина, затем UTF-8.
fn read_string<R: Read>(r: &mut R) -> NbtResult<String> {
    let len = r.read_i16::<BigEndian>()?;
    if len < 0 {
        return Err(NbtError::Decode(format!("negative TAG_String length {len}")));
    }
    let buf = read_exact_len(r, len as usize, TagKind::String)?;
    Ok(String::from_utf8(buf)?)
}

/// Читает ровно `len` байт объявленной длины.
fn read_exact_len<R: Read>(r: &mut R, len: usize, kind: TagKind) -> NbtResult<Vec<u8>> {
    let mut buf = vec![0; len];
    r.read_exact(&mut buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            NbtError::Decode(format!("stream ended inside {kind} payload"))
        } else {
            NbtError::Io(e)
        }
    })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn payload(kind: TagKind, bytes: &[u8]) -> NbtResult<Value> {
        let mut cursor = Cursor::new(bytes.to_vec());
        read_payload(&mut cursor, kind)
    }

    #[test]
    fn test_read_byte() {
        assert_eq!(payload(TagKind::Byte, &[0x7F]).unwrap(), Value::Int(127));
        assert_eq!(payload(TagKind::Byte, &[0x80]).unwrap(), Value::Int(-128));
    }

    #[test]
    fn test_read_short() {
        assert_eq!(
            payload(TagKind::Short, &[0x7F, 0xFF]).unwrap(),
            Value::Int(32767)
        );
        assert_eq!(
            payload(TagKind::Short, &[0xFF, 0xFE]).unwrap(),
            Value::Int(-2)
        );
    }

    #[test]
    fn test_read_int_and_long() {
        assert_eq!(
            payload(TagKind::Int, &0x12345678i32.to_be_bytes()).unwrap(),
            Value::Int(0x12345678)
        );
        assert_eq!(
            payload(TagKind::Long, &i64::MIN.to_be_bytes()).unwrap(),
            Value::Int(i64::MIN)
        );
    }

    #[test]
    fn test_read_float_widens_to_double() {
        let val = payload(TagKind::Float, &1.5f32.to_be_bytes()).unwrap();
        assert_eq!(val, Value::Float(1.5));
    }

    #[test]
    fn test_read_double() {
        use std::f64::consts::PI;

        let val = payload(TagKind::Double, &PI.to_be_bytes()).unwrap();
        match val {
            Value::Float(v) => assert!((v - PI).abs() < 1e-15),
            _ => panic!("Expected Value::Float"),
        }
    }

    #[test]
    fn test_read_string_payload() {
        let mut data = Vec::new();
        data.extend(&(5i16).to_be_bytes());
        data.extend(b"hello");
        assert_eq!(
            payload(TagKind::String, &data).unwrap(),
            Value::Text("hello".to_string())
        );
    }

    #[test]
    fn test_read_empty_string() {
        let data = 0i16.to_be_bytes();
        assert_eq!(
            payload(TagKind::String, &data).unwrap(),
            Value::Text(String::new())
        );
    }

    #[test]
    fn test_read_negative_string_length_error() {
        let data = (-1i16).to_be_bytes();
        let err = payload(TagKind::String, &data).unwrap_err();
        assert!(matches!(err, NbtError::Decode(_)));
    }

    #[test]
    fn test_read_truncated_string_error() {
        let mut data = Vec::new();
        data.extend(&(5i16).to_be_bytes());
        data.extend(b"he");
        let err = payload(TagKind::String, &data).unwrap_err();
        assert!(matches!(err, NbtError::Decode(_)));
        assert!(err.to_string().contains("stream ended"));
    }

    #[test]
    fn test_read_byte_array() {
        let mut data = Vec::new();
        data.extend(&(3i32).to_be_bytes());
        data.extend(&[1, 2, 3]);
        assert_eq!(
            payload(TagKind::ByteArray, &data).unwrap(),
            Value::Bytes(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_read_negative_byte_array_length_error() {
        let data = (-4i32).to_be_bytes();
        let err = payload(TagKind::ByteArray, &data).unwrap_err();
        assert!(matches!(err, NbtError::Decode(_)));
    }

    #[test]
    fn test_read_list_of_ints() {
        let mut data = Vec::new();
        data.push(TagKind::Int as u8);
        data.extend(&(2i32).to_be_bytes());
        data.extend(&(10i32).to_be_bytes());
        data.extend(&(20i32).to_be_bytes());

        let val = payload(TagKind::List, &data).unwrap();
        match val {
            Value::List(list) => {
                assert_eq!(list.elem_kind(), Some(TagKind::Int));
                assert_eq!(list.len(), 2);
                assert_eq!(list.get(0), Some(&Value::Int(10)));
                assert_eq!(list.get(1), Some(&Value::Int(20)));
            }
            _ => panic!("Expected Value::List"),
        }
    }

    #[test]
    fn test_read_empty_list_with_end_elem_kind() {
        let mut data = Vec::new();
        data.push(TagKind::End as u8);
        data.extend(&(0i32).to_be_bytes());

        let val = payload(TagKind::List, &data).unwrap();
        match val {
            Value::List(list) => {
                assert!(list.is_empty());
                assert_eq!(list.elem_kind(), Some(TagKind::End));
            }
            _ => panic!("Expected Value::List"),
        }
    }

    #[test]
    fn test_read_nonempty_end_list_error() {
        let mut data = Vec::new();
        data.push(TagKind::End as u8);
        data.extend(&(1i32).to_be_bytes());

        let err = payload(TagKind::List, &data).unwrap_err();
        assert!(matches!(err, NbtError::Format(_)));
        assert!(err.to_string().contains("TAG_End has no payload"));
    }

    #[test]
    fn test_read_negative_list_length_error() {
        let mut data = Vec::new();
        data.push(TagKind::Int as u8);
        data.extend(&(-1i32).to_be_bytes());

        let err = payload(TagKind::List, &data).unwrap_err();
        assert!(matches!(err, NbtError::Decode(_)));
    }

    #[test]
    fn test_read_unknown_list_elem_tag_error() {
        let mut data = Vec::new();
        data.push(42u8);
        data.extend(&(0i32).to_be_bytes());

        let err = payload(TagKind::List, &data).unwrap_err();
        assert!(matches!(err, NbtError::UnknownTagKind(42)));
    }

    #[test]
    fn test_read_compound_with_fields() {
        let mut data = Vec::new();
        // BYTE "on" = 1
        data.push(TagKind::Byte as u8);
        data.extend(&(2i16).to_be_bytes());
        data.extend(b"on");
        data.push(1);
        // STRING "id" = "stone"
        data.push(TagKind::String as u8);
        data.extend(&(2i16).to_be_bytes());
        data.extend(b"id");
        data.extend(&(5i16).to_be_bytes());
        data.extend(b"stone");
        data.push(TagKind::End as u8);

        let val = payload(TagKind::Compound, &data).unwrap();
        match val {
            Value::Compound(c) => {
                assert_eq!(c.len(), 2);
                assert_eq!(c.get("on"), Some(&Value::Int(1)));
                assert_eq!(c.kind("on"), Some(TagKind::Byte));
                assert_eq!(c.get("id"), Some(&Value::Text("stone".to_string())));
                assert_eq!(c.kind("id"), Some(TagKind::String));
            }
            _ => panic!("Expected Value::Compound"),
        }
    }

    #[test]
    fn test_read_unknown_field_tag_error() {
        // тег 11 в позиции поля compound-а
        let data = vec![11u8];
        let err = payload(TagKind::Compound, &data).unwrap_err();
        assert!(matches!(err, NbtError::UnknownTagKind(11)));
    }

    #[test]
    fn test_read_root_compound() {
        let mut data = Vec::new();
        data.push(TagKind::Compound as u8);
        data.extend(&(4i16).to_be_bytes());
        data.extend(b"root");
        data.push(TagKind::End as u8);

        let mut cursor = Cursor::new(data);
        let (name, root) = read_root(&mut cursor).unwrap();
        assert_eq!(name, "root");
        assert!(root.is_empty());
    }

    #[test]
    fn test_read_root_rejects_scalar() {
        // полный именованный BYTE-тег: читается целиком, затем отвергается
        let mut data = Vec::new();
        data.push(TagKind::Byte as u8);
        data.extend(&(1i16).to_be_bytes());
        data.extend(b"b");
        data.push(7);

        let mut cursor = Cursor::new(data);
        let err = read_root(&mut cursor).unwrap_err();
        assert!(matches!(err, NbtError::Format(_)));
        assert!(err.to_string().contains("expected TAG_Compound"));
    }

    #[test]
    fn test_read_root_rejects_end() {
        let data = vec![TagKind::End as u8];
        let mut cursor = Cursor::new(data);
        let err = read_root(&mut cursor).unwrap_err();
        assert!(matches!(err, NbtError::Format(_)));
    }

    #[test]
    fn test_read_invalid_utf8_error() {
        let mut data = Vec::new();
        data.extend(&(2i16).to_be_bytes());
        data.extend(&[0xFF, 0xFE]);
        let err = payload(TagKind::String, &data).unwrap_err();
        assert!(matches!(err, NbtError::Utf8(_)));
    }
}
