#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(header, *width, false, false))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();

    let divider = "-".repeat(header_line.len());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                let numeric = looks_numeric(&value);
                let colored = if options.color {
                    colorize_status(&value)
                } else {
                    value
                };
                format_cell(&colored, *width, numeric, options.color)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = vec![header_line, divider];
    lines.extend(row_lines);
    lines.join("\n")
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool, has_ansi: bool) -> String {
    let plain_len = if has_ansi {
        visible_len(value)
    } else {
        value.len()
    };
    let pad = width.saturating_sub(plain_len);
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Color the board statuses and outcomes the same way everywhere.
fn colorize_status(value: &str) -> String {
    let code = match value {
        "running" | "winner" => Some("32"),
        "planned" | "paused" | "inconclusive" => Some("33"),
        "loser" => Some("31"),
        "completed" => Some("36"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

fn visible_len(value: &str) -> usize {
    let mut len = 0;
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, render_entity_table, visible_len};

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["id", "status", "name"];
        let rows = vec![
            vec![
                "exp-1".to_string(),
                "backlog".to_string(),
                "short".to_string(),
            ],
            vec![
                "exp-200".to_string(),
                "running".to_string(),
                "a much longer name".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, TableOptions { color: false });
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("id"));
        assert!(lines[0].contains("status"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn color_codes_do_not_break_alignment() {
        let headers = ["status", "name"];
        let rows = vec![
            vec!["running".to_string(), "a".to_string()],
            vec!["backlog".to_string(), "b".to_string()],
        ];

        let table = render_entity_table(&headers, &rows, TableOptions { color: true });
        let data_rows: Vec<&str> = table.lines().skip(2).collect();
        assert_eq!(data_rows.len(), 2);
        assert_eq!(visible_len(data_rows[0]), visible_len(data_rows[1]));
    }

    #[test]
    fn numeric_cells_right_align() {
        let headers = ["name", "sessions"];
        let rows = vec![vec!["control".to_string(), "42".to_string()]];

        let table = render_entity_table(&headers, &rows, TableOptions { color: false });
        let row = table.lines().nth(2).unwrap();
        assert!(row.ends_with("42"));
    }
}
