const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
///
/// Counts are right-aligned. Cells wider than their column are cut with an
/// ellipsis once the table must shrink to `max_width`.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .fold(min_width(header), usize::max)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, is_count(&cell));
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

fn min_width(header: &str) -> usize {
    header.chars().count().max(MIN_COLUMN_WIDTH)
}

/// Narrow the widest columns one step at a time until the table fits.
fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > min_width(headers[*index]))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn is_count(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap a padded cell in a color code keyed on its plain text.
fn colorize(plain: &str, padded: String) -> String {
    let code = match plain {
        "Found" | "true" => Some("32"),
        "Lost" => Some("31"),
        "false" => Some("33"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_entity_table, truncate};

    #[test]
    fn counts_are_right_aligned() {
        let table = render_entity_table(
            &["value", "count"],
            &[vec!["Library".into(), "12".into()], vec!["Gym".into(), "3".into()]],
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "Library     12");
        assert_eq!(lines[3], "Gym          3");
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let table = render_entity_table(
            &["kind", "description"],
            &[vec!["Lost".into(), "black leather wallet with a student card".into()]],
            TableOptions {
                max_width: Some(24),
                color: false,
            },
        );
        for line in table.lines() {
            assert!(line.chars().count() <= 24, "line too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn color_wraps_kind_cells() {
        let table = render_entity_table(
            &["kind"],
            &[vec!["Lost".into()], vec!["Found".into()]],
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[31mLost"));
        assert!(table.contains("\u{1b}[32mFound"));
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Café crème", 5), "Café…");
        assert_eq!(truncate("Gym", 5), "Gym");
    }
}
