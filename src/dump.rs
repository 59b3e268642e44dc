//! The dump renderer (component H): human-readable annotated hex dump.
//!
//! The exact column-alignment formula is treated as illustrative rather
//! than a byte-identical target: this renderer checks structural properties
//! (notes aligned in a column, hex bytes correct) instead of reproducing any
//! one reference layout exactly.

use std::collections::BTreeMap;

use crate::value::{Cbor, CborCase, Simple};
use crate::wire::{write_header, Major};

const INDENT_WIDTH: usize = 3;
const MAX_NOTE_COLUMN: usize = 40;

/// A lookup table from tag number to a human-readable name, consulted by
/// [`dump`] when rendering a tagged item's note.
pub type KnownTags = BTreeMap<u64, String>;

/// Render `value` as either a flat hex string (`annotated = false`) or a
/// multi-line annotated dump (`annotated = true`).
///
/// `known_tags`, when given, is consulted so a tagged item's note reads
/// `tag(N, name)` instead of the bare `tag(N)`.
#[must_use]
pub fn dump(value: &Cbor, annotated: bool, known_tags: Option<&KnownTags>) -> String {
    if !annotated {
        return hex::encode(value.to_bytes());
    }
    let mut lines = Vec::new();
    render(value, 0, known_tags, &mut lines);
    render_aligned(&lines)
}

struct Line {
    indent: usize,
    hex: String,
    note: String,
}

impl Line {
    fn new(indent: usize, hex: String, note: String) -> Self {
        Self { indent, hex, note }
    }

    fn first_column(&self) -> String {
        format!("{}{}", " ".repeat(self.indent * INDENT_WIDTH), self.hex)
    }
}

fn render_aligned(lines: &[Line]) -> String {
    let column = lines
        .iter()
        .map(|l| l.first_column().chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_NOTE_COLUMN);

    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let first = line.first_column();
        let pad = column.saturating_sub(first.chars().count()).max(0) + 1;
        out.push_str(&first);
        if !line.note.is_empty() {
            out.push_str(&" ".repeat(pad));
            out.push_str("# ");
            out.push_str(&line.note);
        }
    }
    out
}

fn header_of_count(major: Major, count: u64) -> Vec<u8> {
    let mut buf = Vec::new();
    write_header(&mut buf, major, count);
    buf
}

fn render(value: &Cbor, indent: usize, known_tags: Option<&KnownTags>, lines: &mut Vec<Line>) {
    match value.case() {
        CborCase::Unsigned(u) => {
            lines.push(Line::new(indent, hex::encode(value.to_bytes()), format!("unsigned({u})")));
        }
        CborCase::Negative(n) => {
            let v = -1_i128 - i128::from(*n);
            lines.push(Line::new(indent, hex::encode(value.to_bytes()), format!("negative({v})")));
        }
        CborCase::Bytes(b) => {
            let header = header_of_count(Major::Bytes, b.len() as u64);
            lines.push(Line::new(indent, hex::encode(header), format!("bytes({})", b.len())));
            lines.push(Line::new(indent + 1, hex::encode(b), sanitize_ascii(b)));
        }
        CborCase::Text(s) => {
            let header = header_of_count(Major::Text, s.len() as u64);
            lines.push(Line::new(indent, hex::encode(header), format!("text({})", quote(s))));
            lines.push(Line::new(indent + 1, hex::encode(s.as_bytes()), quote(s)));
        }
        CborCase::Array(items) => {
            let header = header_of_count(Major::Array, items.len() as u64);
            lines.push(Line::new(indent, hex::encode(header), format!("array({})", items.len())));
            for item in items {
                render(item, indent + 1, known_tags, lines);
            }
        }
        CborCase::Map(map) => {
            let header = header_of_count(Major::Map, map.len() as u64);
            lines.push(Line::new(indent, hex::encode(header), format!("map({})", map.len())));
            for (k, v) in map.iter() {
                render(k, indent + 1, known_tags, lines);
                render(v, indent + 1, known_tags, lines);
            }
        }
        CborCase::Tagged(tag, inner) => {
            let header = header_of_count(Major::Tagged, *tag);
            let note = match known_tags.and_then(|table| table.get(tag)) {
                Some(name) => format!("tag({tag}, {name})"),
                None => format!("tag({tag})"),
            };
            lines.push(Line::new(indent, hex::encode(header), note));
            render(inner, indent + 1, known_tags, lines);
        }
        CborCase::Simple(Simple::False) => lines.push(Line::new(indent, "f4".to_string(), "false".to_string())),
        CborCase::Simple(Simple::True) => lines.push(Line::new(indent, "f5".to_string(), "true".to_string())),
        CborCase::Simple(Simple::Null) => lines.push(Line::new(indent, "f6".to_string(), "null".to_string())),
        CborCase::Simple(Simple::Float(bits)) => {
            lines.push(Line::new(
                indent,
                hex::encode(value.to_bytes()),
                format!("float({})", bits.to_f64()),
            ));
        }
    }
}

fn sanitize_ascii(bytes: &[u8]) -> String {
    let s: String = bytes
        .iter()
        .map(|&b| if (0x20..=0x7e).contains(&b) { b as char } else { '.' })
        .collect();
    format!("\"{s}\"")
}

fn quote(s: &str) -> String {
    format!("\"{s}\"")
}
