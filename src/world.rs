//! Раскладка папки мира в альфа-формате.
//!
//! Мир — это каталог с файлом `level.dat` в корне и чанками в двух
//! уровнях подкаталогов: `<b36(x mod 64)>/<b36(z mod 64)>/c.<b36(x)>.<b36(z)>.dat`,
//! где `b36` — base36-запись координаты. Все файлы — обычные
//! gzip-сжатые документы NBT, см. [`Document`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{document::Document, error::NbtResult};

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Записывает координату в base36 со знаком.
pub fn to_base36(value: i32) -> String {
    let mut n = i64::from(value).unsigned_abs();
    let mut digits = String::new();
    loop {
        digits.push(BASE36_DIGITS[(n % 36) as usize] as char);
        n /= 36;
        if n == 0 {
            break;
        }
    }

    let mut out = String::new();
    if value < 0 {
        out.push('-');
    }
    out.extend(digits.chars().rev());
    out
}

/// Разбирает base36-координату, обратную к [`to_base36`].
pub fn from_base36(s: &str) -> Option<i32> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if digits.is_empty() {
        return None;
    }

    let mut acc: i64 = 0;
    for c in digits.chars() {
        let d = c.to_digit(36)? as i64;
        acc = acc * 36 + d;
        if acc > i64::from(i32::MAX) + 1 {
            return None;
        }
    }
    if negative {
        acc = -acc;
    }
    i32::try_from(acc).ok()
}

/// Каталог мира на диске.
#[derive(Debug, Clone)]
pub struct WorldFolder {
    root: PathBuf,
}

impl WorldFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Путь к `level.dat` мира.
    pub fn level_path(&self) -> PathBuf {
        self.root.join("level.dat")
    }

    /// Путь к файлу чанка с координатами `(x, z)`.
    ///
    /// Подкаталоги берутся от координат по модулю 64, поэтому для
    /// отрицательных координат имя файла содержит знак, а каталог нет.
    pub fn chunk_path(&self, x: i32, z: i32) -> PathBuf {
        self.root
            .join(to_base36(x.rem_euclid(64)))
            .join(to_base36(z.rem_euclid(64)))
            .join(format!("c.{}.{}.dat", to_base36(x), to_base36(z)))
    }

    /// Загружает `level.dat`.
    pub fn load_level(&self) -> NbtResult<Document> {
        Document::from_file(self.level_path())
    }

    /// Сохраняет `level.dat`, создавая каталог мира при необходимости.
    pub fn save_level(&self, doc: &mut Document) -> NbtResult<()> {
        fs::create_dir_all(&self.root)?;
        doc.to_file(self.level_path())
    }

    /// Загружает чанк с координатами `(x, z)`.
    pub fn load_chunk(&self, x: i32, z: i32) -> NbtResult<Document> {
        Document::from_file(self.chunk_path(x, z))
    }

    /// Сохраняет чанк, создавая недостающие подкаталоги.
    pub fn save_chunk(&self, x: i32, z: i32, doc: &mut Document) -> NbtResult<()> {
        let path = self.chunk_path(x, z);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        doc.to_file(path)
    }

    /// Перечисляет координаты всех чанков, найденных в каталоге мира.
    ///
    /// Чанк опознаётся по имени файла `c.<x>.<z>.dat`, посторонние
    /// файлы и каталоги пропускаются. Результат отсортирован.
    pub fn present_chunks(&self) -> NbtResult<Vec<(i32, i32)>> {
        let mut chunks = Vec::new();
        for x_entry in fs::read_dir(&self.root)? {
            let x_dir = x_entry?.path();
            if !x_dir.is_dir() {
                continue;
            }
            for z_entry in fs::read_dir(&x_dir)? {
                let z_dir = z_entry?.path();
                if !z_dir.is_dir() {
                    continue;
                }
                for entry in fs::read_dir(&z_dir)? {
                    let path = entry?.path();
                    if let Some(coords) = parse_chunk_name(&path) {
                        chunks.push(coords);
                    }
                }
            }
        }
        chunks.sort_unstable();
        debug!("Found {} chunks under {}", chunks.len(), self.root.display());
        Ok(chunks)
    }
}

/// Достаёт координаты из имени файла чанка.
fn parse_chunk_name(path: &Path) -> Option<(i32, i32)> {
    if path.extension()? != "dat" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let mut parts = stem.split('.');
    if parts.next()? != "c" {
        return None;
    }
    let x = from_base36(parts.next()?)?;
    let z = from_base36(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, z))
}
