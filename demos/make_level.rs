//! Создание тестового мира на диске.
//!
//! Пишет каталог мира в альфа-раскладке: `level.dat` в корне и
//! несколько чанков 16x16x128 в подкаталогах base36. Затем сканирует
//! каталог обратно и печатает найденные чанки.
//!
//! Запуск: `cargo run --example make_level -- path/to/world`

use std::{env, process};

use craftnbt::{Compound, Document, List, NbtResult, TagKind, WorldFolder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(false)
        .init();

    let Some(root) = env::args().nth(1) else {
        eprintln!("usage: make_level <world dir>");
        process::exit(2);
    };

    if let Err(e) = run(&root) {
        eprintln!("make_level: {e}");
        process::exit(1);
    }
}

fn run(root: &str) -> NbtResult<()> {
    let world = WorldFolder::new(root);

    world.save_level(&mut level_document())?;
    for (x, z) in [(0, 0), (0, 1), (1, 0), (-1, -1)] {
        world.save_chunk(x, z, &mut chunk_document(x, z))?;
    }

    for (x, z) in world.present_chunks()? {
        println!("chunk ({x}, {z}) -> {}", world.chunk_path(x, z).display());
    }
    Ok(())
}

/// Минимальный `level.dat` с блоком `Data`.
fn level_document() -> Document {
    let mut data = Compound::new();
    data.insert("LevelName", "Demo World");
    data.insert_with_kind("Time", 0i64, TagKind::Long);
    data.insert_with_kind("LastPlayed", 0i64, TagKind::Long);
    data.insert("SpawnX", 8i32);
    data.insert("SpawnY", 64i32);
    data.insert("SpawnZ", 8i32);
    data.insert_with_kind("RandomSeed", 27594263i64, TagKind::Long);

    let mut doc = Document::new("");
    doc.root_mut().insert("Data", data);
    doc
}

/// Чанк с плоским ландшафтом: камень до высоты 60, поверх трава.
fn chunk_document(x: i32, z: i32) -> Document {
    let mut blocks = vec![0u8; 16 * 16 * 128];
    for column in blocks.chunks_mut(128) {
        for block in column.iter_mut().take(60) {
            *block = 1; // камень
        }
        column[60] = 2; // трава
    }

    let mut level = Compound::new();
    level.insert_with_kind("Blocks", blocks, TagKind::ByteArray);
    level.insert_with_kind("Data", vec![0u8; 16 * 16 * 64], TagKind::ByteArray);
    level.insert_with_kind("SkyLight", vec![0xFFu8; 16 * 16 * 64], TagKind::ByteArray);
    level.insert_with_kind("BlockLight", vec![0u8; 16 * 16 * 64], TagKind::ByteArray);
    level.insert_with_kind("HeightMap", vec![61u8; 16 * 16], TagKind::ByteArray);
    level.insert("xPos", x);
    level.insert("zPos", z);
    level.insert_with_kind("TerrainPopulated", 1i32, TagKind::Byte);
    level.insert_with_kind("LastUpdate", 0i64, TagKind::Long);
    level.insert("Entities", List::with_kind(TagKind::Compound));
    level.insert("TileEntities", List::with_kind(TagKind::Compound));

    let mut doc = Document::new("");
    doc.root_mut().insert("Level", level);
    doc
}
