use crate::record::TableRecord;
use crate::table::TableView;

const COLUMN_GAP: &str = "  ";

/// Render the table as aligned plain text
///
/// The first line holds the column titles, with an arrow on the primary
/// sort column, followed by a rule and one line per row.
pub fn render_table<R: TableRecord>(view: &TableView<R>) -> String {
    let header = view.header();
    let sorted = header.sorted_column_index();

    let titles: Vec<String> = header
        .columns()
        .iter()
        .enumerate()
        .map(|(column, col)| match sorted {
            Some(s) if s == column && header.is_sorted_ascending(column) => {
                format!("{} ▲", col.title)
            }
            Some(s) if s == column => format!("{} ▼", col.title),
            _ => col.title.clone(),
        })
        .collect();

    let rows: Vec<Vec<String>> = view
        .rows()
        .map(|node| {
            (0..titles.len())
                .map(|column| node.payload.cell_text(column).unwrap_or_default())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = titles.iter().map(|t| t.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &titles, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}
