//! `--stats`: structural counts over the parsed tree.

use std::io::{self, Read, Write};

use mini_ir::{distinct_identifiers, leaf_count, string_count};

use super::{EXIT_FAILURE, EXIT_SUCCESS};

/// Parse without running and report leaf, string and identifier counts.
pub fn print_stats<R: Read, W: Write>(source: R, out: &mut W) -> io::Result<i32> {
    let program = match mini_parse::parse_reader(source) {
        Ok(program) => program,
        Err(error) => {
            writeln!(out, "{error}")?;
            return Ok(EXIT_FAILURE);
        }
    };

    let (leaves, strings, idents) = match &program {
        Some(tree) => (leaf_count(tree), string_count(tree), distinct_identifiers(tree)),
        None => (0, 0, Vec::new()),
    };
    writeln!(out, "LEAF COUNT: {leaves}")?;
    writeln!(out, "STRING COUNT: {strings}")?;
    writeln!(out, "IDENT COUNT: {}", idents.len())?;
    if !idents.is_empty() {
        writeln!(out, "{}", idents.join(", "))?;
    }
    Ok(EXIT_SUCCESS)
}
