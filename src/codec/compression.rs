//! Модуль для сжатия и распаковки сериализованных деревьев с
//! помощью gzip.
//!
//! Файлы мира хранятся только в сжатом виде, поэтому обёртка
//! применяется всегда, без порога по размеру.

use std::io::{self, Read, Write};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Сжимает сериализованное дерево в gzip-контейнер.
///
/// # Аргументы
///
/// * `data` — исходный срез байтов для сжатия.
///
/// # Возвращает
///
/// `Ok(Vec<u8>)` с сжатыми данными или `Err` с ошибкой ввода-вывода.
pub fn compress_block(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Распаковывает gzip-контейнер обратно в сырые байты дерева.
///
/// # Аргументы
///
/// * `data` — срез байтов с заранее сжатыми данными.
///
/// # Возвращает
///
/// `Ok(Vec<u8>)` с декомпрессированными данными или `Err` с ошибкой.
pub fn decompress_block(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Тест проверяет, что сжатие и последующая декомпрессия маленького
    /// блока возвращают исходные данные.
    #[test]
    fn test_compress_decompress_roundtrip_small() {
        let data = b"short data";
        let compressed = compress_block(data).expect("compress failed");
        let decompressed = decompress_block(&compressed).expect("decompress failed");
        assert_eq!(&decompressed, data);
    }

    /// Тест проверяет корректность сжатия и декомпрессии для блока,
    /// заметно превосходящего размер gzip-заголовка.
    #[test]
    fn test_compress_decompress_roundtrip_large() {
        let data: Vec<u8> = (0..4096).map(|i| (i % 256) as u8).collect();
        let compressed = compress_block(&data).expect("compress failed");
        assert!(!compressed.is_empty());
        let decompressed = decompress_block(&compressed).expect("decompress failed");
        assert_eq!(decompressed, data);
    }

    /// Тест проверяет, что на выходе настоящий gzip-контейнер.
    #[test]
    fn test_compressed_output_is_gzip() {
        let compressed = compress_block(b"payload").unwrap();
        assert_eq!(&compressed[..2], &[0x1F, 0x8B]);
    }

    /// Тест проверяет, что при передаче некорректных данных в
    /// `decompress_block` возвращается ошибка.
    #[test]
    fn test_decompress_invalid_data() {
        let bad = vec![0u8; 10];
        assert!(decompress_block(&bad).is_err());
    }

    #[test]
    fn test_decompress_empty_input_fails() {
        assert!(decompress_block(&[]).is_err());
    }
}
