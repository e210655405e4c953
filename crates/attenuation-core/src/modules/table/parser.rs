use super::{AttenuationRow, TABLE_COLUMN_COUNT, TableError};

/// Parses a whitespace-delimited 4-column table
/// (`energy_eV abs_cm rayleigh_cm mie_cm`). Blank lines and `#` comments
/// are skipped. Row ordering is checked later by the table constructor.
pub fn parse_table_source(source: &str) -> Result<Vec<AttenuationRow>, TableError> {
    let mut rows = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != TABLE_COLUMN_COUNT {
            return Err(TableError::ColumnCount {
                line: line_number,
                found: tokens.len(),
            });
        }

        let mut values = [0.0_f64; TABLE_COLUMN_COUNT];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            *slot = parse_number(token).ok_or_else(|| TableError::InvalidNumber {
                line: line_number,
                token: (*token).to_string(),
            })?;
        }

        rows.push(AttenuationRow::new(values[0], values[1], values[2], values[3]));
    }

    Ok(rows)
}

// Accepts Fortran-style `D` exponents as well as `E`.
fn parse_number(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .or_else(|| token.replace(['d', 'D'], "e").parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::parse_table_source;
    use crate::modules::table::{AttenuationRow, TableError};

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let source = "# energy abs ray mie\n\n1.5 10 20 30\n  2.5e0  11  21  3.1D1  \n";
        let rows = parse_table_source(source).expect("table should parse");
        assert_eq!(
            rows,
            vec![
                AttenuationRow::new(1.5, 10.0, 20.0, 30.0),
                AttenuationRow::new(2.5, 11.0, 21.0, 31.0),
            ]
        );
    }

    #[test]
    fn malformed_number_reports_line() {
        let error = parse_table_source("1 2 3 4\n1 2 x 4\n").expect_err("bad token");
        match error {
            TableError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_column_is_rejected() {
        assert!(matches!(
            parse_table_source("1 2 3 4 5\n"),
            Err(TableError::ColumnCount { line: 1, found: 5 })
        ));
    }
}
