// src/csv.rs

use std::io::{self, Write};

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer. Quotes only when required;
/// embedded quotes are doubled.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, ",")?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows (headers first when present).
pub fn rows_to_string(rows: &[Vec<String>], headers: &Option<Vec<String>>) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h);
    }
    for r in rows {
        let _ = write_row(&mut buf, r);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_only_when_needed() {
        let rows = vec![vec![s!("Algorithms"), s!("Room B12"), s!("line1\nline2")]];
        let out = rows_to_string(&rows, &None);
        assert_eq!(out, "Algorithms,Room B12,\"line1\nline2\"\n");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let rows = vec![vec![s!(r#"TD "groupe 2""#)]];
        let out = rows_to_string(&rows, &None);
        assert_eq!(out, "\"TD \"\"groupe 2\"\"\"\n");
    }
}
