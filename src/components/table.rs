//! Line-based table rendering for the renter roster
//!
//! Builds styled text lines from a header row and data rows, with
//! unicode-aware column widths and cell truncation.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Fallback width for cells beyond the declared columns
const OVERFLOW_CELL_WIDTH: usize = 10;

/// Build table lines from headers and rows
///
/// Column widths are the widest of header and cells, capped at
/// `max_col_width`. A row renders exactly the cells it supplies; columns
/// with no cell render nothing.
pub fn build_table_lines(
    headers: &[&str],
    rows: &[Vec<String>],
    max_col_width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if headers.is_empty() {
        return vec![Line::from("No columns declared")];
    }

    // Calculate column widths from header and cell display widths
    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < col_widths.len() {
                col_widths[i] = col_widths[i].max(cell.width());
            }
        }
    }
    for width in &mut col_widths {
        *width = (*width).min(max_col_width);
    }

    // Render header
    let header_spans: Vec<Span> = headers
        .iter()
        .enumerate()
        .flat_map(|(i, h)| {
            vec![
                Span::styled(
                    fit_cell(h, col_widths[i]),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    lines.push(Line::from(header_spans));

    // Render separator
    let separator: String = col_widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )));

    // Render rows
    for row in rows {
        let row_spans: Vec<Span> = row
            .iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                let width = col_widths.get(i).copied().unwrap_or(OVERFLOW_CELL_WIDTH);
                vec![
                    Span::styled(fit_cell(cell, width), Style::default().fg(Color::White)),
                    Span::raw(" │ "),
                ]
            })
            .collect();
        lines.push(Line::from(row_spans));
    }

    // Add record count
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Total renters: {}", rows.len()),
        Style::default().fg(Color::Yellow),
    )));

    lines
}

/// Pad or truncate a cell to the given display width
///
/// Truncation operates on display width, not bytes, so multi-width
/// characters never split mid-glyph.
fn fit_cell(text: &str, width: usize) -> String {
    if text.width() > width {
        let mut out = String::new();
        let limit = width.saturating_sub(3);
        for c in text.chars() {
            let candidate_width = out.width() + c.to_string().width();
            if candidate_width > limit {
                break;
            }
            out.push(c);
        }
        out.push_str("...");
        out
    } else {
        let padding = width.saturating_sub(text.width());
        format!("{}{}", text, " ".repeat(padding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RenterRecord;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn roster_rows() -> Vec<Vec<String>> {
        RenterRecord::roster().iter().map(|r| r.cells()).collect()
    }

    #[test]
    fn test_header_line_carries_all_labels() {
        let lines = build_table_lines(&RenterRecord::COLUMNS, &roster_rows(), 50);
        let header = line_text(&lines[0]);
        for label in RenterRecord::COLUMNS {
            assert!(header.contains(label), "missing label: {}", label);
        }
    }

    #[test]
    fn test_one_body_line_per_record() {
        let rows = roster_rows();
        let lines = build_table_lines(&RenterRecord::COLUMNS, &rows, 50);
        // header + separator + rows + blank + count
        assert_eq!(lines.len(), rows.len() + 4);
        for (i, row) in rows.iter().enumerate() {
            let text = line_text(&lines[i + 2]);
            for cell in row {
                assert!(text.contains(cell.as_str()));
            }
        }
    }

    #[test]
    fn test_short_rows_are_not_padded_with_cells() {
        let lines = build_table_lines(&RenterRecord::COLUMNS, &roster_rows(), 50);
        // Barry supplies 4 cells, so his line ends after the 4th delimiter
        let barry = line_text(&lines[3]);
        assert_eq!(barry.matches('│').count(), 4);
        assert!(!barry.contains("28th Aug 2017"));
    }

    #[test]
    fn test_count_line_reports_roster_size() {
        let lines = build_table_lines(&RenterRecord::COLUMNS, &roster_rows(), 50);
        assert_eq!(line_text(lines.last().unwrap()), "Total renters: 4");
    }

    #[test]
    fn test_column_width_is_capped() {
        let rows = vec![vec!["x".repeat(80)]];
        let lines = build_table_lines(&["Col"], &rows, 20);
        let cell = line_text(&lines[2]);
        assert!(cell.starts_with(&"x".repeat(17)));
        assert!(cell.contains("..."));
    }

    #[test]
    fn test_fit_cell_pads_to_width() {
        assert_eq!(fit_cell("0x", 4), "0x  ");
    }

    #[test]
    fn test_fit_cell_truncates_on_display_width() {
        // Each ideograph is two columns wide; none may be split
        let fitted = fit_cell("賃貸人賃貸人", 9);
        assert_eq!(fitted, "賃貸人...");
    }

    #[test]
    fn test_empty_headers_render_placeholder() {
        let lines = build_table_lines(&[], &[], 50);
        assert_eq!(line_text(&lines[0]), "No columns declared");
    }
}
