//! Text dump of an NBT tree in the classic `TAG_Kind('name'): value`
//! shape.
//!
//! Rendering resolves the same tag guesses the writer would make and
//! records them back into the tree, so dumping a document is enough to
//! pin the tags of every field it touched. Compound fields are printed
//! in name order to keep the output stable.

use crate::{
    codec::tags::TagKind,
    document::Document,
    error::NbtResult,
    tree::{Compound, List, Value},
};

/// Renders a whole document.
pub fn render(doc: &mut Document) -> NbtResult<String> {
    let mut out = String::new();
    let name = doc.name().to_string();
    render_compound(&mut out, Some(&name), doc.root_mut(), 0)?;
    Ok(out)
}

fn render_compound(
    out: &mut String,
    label: Option<&str>,
    compound: &mut Compound,
    indent: usize,
) -> NbtResult<()> {
    push_line(
        out,
        indent,
        &format!(
            "{}: {} entries",
            heading(TagKind::Compound, label),
            compound.len()
        ),
    );
    push_line(out, indent, "{");

    let mut names: Vec<String> = compound.names().cloned().collect();
    names.sort();
    for name in names {
        let Some(value) = compound.get(&name) else {
            continue;
        };
        let kind = match compound.kind(&name) {
            Some(k) => k,
            None => value.guess_kind()?,
        };
        compound.set_kind(&name, kind);
        let Some(value) = compound.get_mut(&name) else {
            continue;
        };
        render_value(out, Some(&name), kind, value, indent + 1)?;
    }

    push_line(out, indent, "}");
    Ok(())
}

fn render_list(
    out: &mut String,
    label: Option<&str>,
    list: &mut List,
    indent: usize,
) -> NbtResult<()> {
    let elem = match list.elem_kind() {
        Some(k) => k,
        None => match list.iter().next() {
            Some(first) => first.guess_kind()?,
            None => TagKind::Int,
        },
    };
    list.set_elem_kind(elem);

    push_line(
        out,
        indent,
        &format!(
            "{}: {} entries of type {}",
            heading(TagKind::List, label),
            list.len(),
            elem
        ),
    );
    push_line(out, indent, "{");
    for item in list.iter_mut() {
        render_value(out, None, elem, item, indent + 1)?;
    }
    push_line(out, indent, "}");
    Ok(())
}

fn render_value(
    out: &mut String,
    label: Option<&str>,
    kind: TagKind,
    value: &mut Value,
    indent: usize,
) -> NbtResult<()> {
    match value {
        Value::Compound(c) => render_compound(out, label, c, indent),
        Value::List(list) => render_list(out, label, list, indent),
        Value::Int(v) => {
            push_line(out, indent, &format!("{}: {}", heading(kind, label), v));
            Ok(())
        }
        Value::Float(v) => {
            push_line(out, indent, &format!("{}: {}", heading(kind, label), v));
            Ok(())
        }
        Value::Text(s) => {
            push_line(out, indent, &format!("{}: '{}'", heading(kind, label), s));
            Ok(())
        }
        Value::Bytes(b) => {
            push_line(
                out,
                indent,
                &format!("{}: [{} bytes]", heading(kind, label), b.len()),
            );
            Ok(())
        }
    }
}

fn heading(kind: TagKind, label: Option<&str>) -> String {
    match label {
        Some(name) => format!("{kind}('{name}')"),
        None => kind.to_string(),
    }
}

fn push_line(out: &mut String, indent: usize, line: &str) {
    for _ in 0..indent {
        out.push_str("  ");
    }
    out.push_str(line);
    out.push('\n');
}
