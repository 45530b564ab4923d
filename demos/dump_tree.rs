//! Печать дерева тегов из файла сохранения.
//!
//! Читает gzip-файл `.dat`, разбирает дерево NBT и выводит его в
//! классическом текстовом виде `TAG_Kind('name'): value`.
//!
//! Запуск: `cargo run --example dump_tree -- path/to/level.dat`

use std::{env, process};

use craftnbt::{Document, NbtResult};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: dump_tree <file.dat>");
        process::exit(2);
    };

    if let Err(e) = run(&path) {
        eprintln!("dump_tree: {e}");
        process::exit(1);
    }
}

fn run(path: &str) -> NbtResult<()> {
    let mut doc = Document::from_file(path)?;
    print!("{}", doc.pretty()?);
    Ok(())
}
