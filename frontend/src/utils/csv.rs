// Leading characters that spreadsheets evaluate as formulas.
fn needs_formula_guard(value: &str) -> bool {
    matches!(value.chars().next(), Some('=' | '+' | '-' | '@'))
}

fn quote_cell(value: &str) -> String {
    let mut escaped = value.replace('"', "\"\"");
    if needs_formula_guard(&escaped) {
        escaped.insert(0, '\'');
    }
    format!("\"{}\"", escaped)
}

/// Appends one quoted, comma separated line to `buffer`.
pub fn append_csv_row(buffer: &mut String, fields: &[String]) {
    let line = fields
        .iter()
        .map(|field| quote_cell(field))
        .collect::<Vec<_>>()
        .join(",");
    buffer.push_str(&line);
    buffer.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_every_cell_and_doubles_inner_quotes() {
        let mut buffer = String::new();
        append_csv_row(&mut buffer, &["a".into(), "say \"hi\"".into()]);
        assert_eq!(buffer, "\"a\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn guards_formula_prefixes() {
        let mut buffer = String::new();
        append_csv_row(&mut buffer, &["=SUM(A1)".into(), "-5".into()]);
        assert_eq!(buffer, "\"'=SUM(A1)\",\"'-5\"\n");
    }
}
