//! Именованный корневой тег и файловые операции над ним.
//!
//! Файл мира — это один gzip-сжатый именованный COMPOUND-тег. Документ
//! держит его имя и содержимое и умеет ходить в обе стороны: в сырые
//! байты, в сжатый контейнер и на диск.
//!
//! ```no_run
//! use craftnbt::Document;
//!
//! let mut doc = Document::new("Level");
//! doc.root_mut().insert("LevelName", "New World");
//! doc.to_file("level.dat")?;
//!
//! let loaded = Document::from_file("level.dat")?;
//! assert_eq!(loaded.name(), "Level");
//! # Ok::<(), craftnbt::NbtError>(())
//! ```

use std::{
    fs::File,
    io::{BufWriter, Cursor, Read, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    codec::{compress_block, decompress_block, read_root, write_root},
    error::NbtResult,
    tree::Compound,
};

/// Именованное дерево NBT целиком.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    root: Compound,
}

impl Document {
    /// Пустой документ с заданным именем корня.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: Compound::new(),
        }
    }

    /// Документ вокруг готового дерева.
    pub fn with_root(name: impl Into<String>, root: Compound) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn root(&self) -> &Compound {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Compound {
        &mut self.root
    }

    /// Читает несжатый документ из потока.
    ///
    /// Байты после корневого тега не трогаются: читается ровно один
    /// именованный тег.
    pub fn from_reader<R: Read>(r: &mut R) -> NbtResult<Self> {
        let (name, root) = read_root(r)?;
        Ok(Self { name, root })
    }

    /// Пишет несжатый документ в поток.
    pub fn to_writer<W: Write>(&mut self, w: &mut W) -> NbtResult<()> {
        write_root(w, &self.name, &mut self.root)
    }

    /// Разбирает несжатые байты документа.
    pub fn from_bytes(data: &[u8]) -> NbtResult<Self> {
        let mut cursor = Cursor::new(data);
        Self::from_reader(&mut cursor)
    }

    /// Сериализует документ в несжатые байты.
    pub fn to_bytes(&mut self) -> NbtResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        Ok(buf)
    }

    /// Разбирает gzip-сжатые байты документа.
    pub fn from_compressed_bytes(data: &[u8]) -> NbtResult<Self> {
        let raw = decompress_block(data)?;
        Self::from_bytes(&raw)
    }

    /// Сериализует документ в gzip-контейнер.
    pub fn to_compressed_bytes(&mut self) -> NbtResult<Vec<u8>> {
        let raw = self.to_bytes()?;
        Ok(compress_block(&raw)?)
    }

    /// Загружает документ из gzip-сжатого файла.
    pub fn from_file(path: impl AsRef<Path>) -> NbtResult<Self> {
        let path = path.as_ref();
        let mut compressed = Vec::new();
        File::open(path)?.read_to_end(&mut compressed)?;
        let raw = decompress_block(&compressed)?;
        debug!(
            "Loaded {} ({} compressed, {} raw bytes)",
            path.display(),
            compressed.len(),
            raw.len()
        );
        Self::from_bytes(&raw)
    }

    /// Текстовый дамп дерева, см. [`crate::pretty::render`].
    pub fn pretty(&mut self) -> NbtResult<String> {
        crate::pretty::render(self)
    }

    /// Сохраняет документ в gzip-сжатый файл.
    pub fn to_file(&mut self, path: impl AsRef<Path>) -> NbtResult<()> {
        let path = path.as_ref();
        let compressed = self.to_compressed_bytes()?;
        let mut file = BufWriter::new(File::create(path)?);
        file.write_all(&compressed)?;
        file.flush()?;
        debug!(
            "Saved {} ({} compressed bytes)",
            path.display(),
            compressed.len()
        );
        Ok(())
    }
}
