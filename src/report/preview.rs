use crate::excel::Table;

const MAX_CELL_WIDTH: usize = 40;
const NULL_CELL: &str = "(empty)";

/// Lays out the first `limit` data rows as a fixed-width table: a header line,
/// then one line per row prefixed with its 0-based row index. Cells are
/// right-aligned to the widest entry of their column.
pub fn render_preview(table: &Table, limit: usize) -> Vec<String> {
    let shown = table.row_count.min(limit);

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(shown + 1);
    grid.push(table.headers().map(fit_cell).collect());

    for row_idx in 0..shown {
        let cells = table
            .row(row_idx)
            .into_iter()
            .map(|cell| match cell {
                Some(value) => fit_cell(&value.to_string()),
                None => NULL_CELL.to_string(),
            })
            .collect();
        grid.push(cells);
    }

    let widths: Vec<usize> = (0..table.column_count())
        .map(|col| {
            grid.iter()
                .map(|cells| cells[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let index_width = shown.saturating_sub(1).to_string().len();

    grid.iter()
        .enumerate()
        .map(|(line_idx, cells)| {
            let index = match line_idx {
                0 => String::new(),
                n => (n - 1).to_string(),
            };

            let mut line = format!("{:<width$}", index, width = index_width);
            for (cell, width) in cells.iter().zip(&widths) {
                line.push_str("  ");
                line.push_str(&format!("{:>width$}", cell, width = *width));
            }
            line
        })
        .collect()
}

// Keeps every cell on one line and caps its width
fn fit_cell(text: &str) -> String {
    let single_line: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if single_line.chars().count() <= MAX_CELL_WIDTH {
        return single_line;
    }

    let mut truncated: String = single_line.chars().take(MAX_CELL_WIDTH - 3).collect();
    truncated.push_str("...");
    truncated
}
