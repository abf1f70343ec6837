use std::fmt;

use scraper::{Html, Selector};
use serde::Serialize;

// Three historically-observed shapes of the career-stats table. Patterns are
// tried in order; the first one yielding a plausible cell count wins, and the
// last one is used as-is when none does.
const CELL_SELECTORS: [&str; 3] = [
    ".cb-font-12 .text-right , tr~ tr+ tr .text-right , tr~ tr+ tr .cb-col-8",
    ".cb-font-12 .text-right , tr+ tr .text-right , tr+ tr .cb-col-8",
    ".cb-plyr-thead .text-right , .cb-col-8",
];

// A table holding both formats flattens to at least this many cells.
const MIN_CELLS: usize = 79;

// Above this count the layout reserves space for absent format blocks, so
// skipping them keeps later offsets aligned.
const PADDED_LAYOUT_MIN: usize = 52;

const BAT_COLS: usize = 13;
const BOWL_COLS: usize = 12;

/// The two competition formats a table carries, in row order.
pub const FORMATS: [&str; 2] = ["t20i", "ipl"];

const PLACEHOLDER: &str = "-";

/// One format's line in a stats table. Values are raw lowercased cell text,
/// aligned with the table's column labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRow {
    pub format: String,
    pub values: Vec<String>,
}

/// A batting or bowling career table: column labels in source order, one row
/// per format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsTable {
    pub columns: Vec<String>,
    pub rows: Vec<StatRow>,
}

impl StatsTable {
    pub fn row(&self, format: &str) -> Option<&StatRow> {
        self.rows.iter().find(|r| r.format == format)
    }

    /// Cell for a format/column pair; first match when a label repeats.
    pub fn value(&self, format: &str, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.row(format)?.values.get(idx).map(String::as_str)
    }
}

impl fmt::Display for StatsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.values.get(i))
                    .map(String::len)
                    .chain([col.len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let label_width = self
            .rows
            .iter()
            .map(|r| r.format.len())
            .max()
            .unwrap_or(0);
        write!(f, "{:label_width$}", "")?;
        for (col, &width) in self.columns.iter().zip(&widths) {
            write!(f, "  {col:>width$}")?;
        }
        for row in &self.rows {
            write!(f, "\n{:label_width$}", row.format)?;
            for (value, &width) in row.values.iter().zip(&widths) {
                write!(f, "  {value:>width$}")?;
            }
        }
        Ok(())
    }
}

/// Scrape the batting and bowling tables off a profile document. Both sides
/// are `Some` or both `None`; players with neither a `t20i` nor an `ipl`
/// record are out of scope and yield `(None, None)`.
pub fn extract_stats(document: &Html) -> (Option<StatsTable>, Option<StatsTable>) {
    let cells = collect_cells(document);
    match slice_stats(&cells) {
        Some((bat, bowl)) => (Some(bat), Some(bowl)),
        None => (None, None),
    }
}

fn collect_cells(document: &Html) -> Vec<String> {
    let (fallbacks, last) = CELL_SELECTORS.split_at(CELL_SELECTORS.len() - 1);
    for &pattern in fallbacks {
        let cells = select_cells(document, pattern);
        if cells.len() >= MIN_CELLS {
            return cells;
        }
        log::debug!(
            "stats selector yielded {} cells, trying next shape",
            cells.len()
        );
    }
    select_cells(document, last[0])
}

fn select_cells(document: &Html, pattern: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(pattern) else {
        return Vec::new();
    };
    document
        .select(&selector)
        .map(|e| e.text().collect::<String>().to_lowercase())
        .collect()
}

/// Re-segment the flat cell sequence into the batting and bowling tables.
///
/// Layout: 13 batting headers, then per format an optional marker token plus
/// 13 values; then 12 bowling headers and the same with 12 values. A format
/// whose marker never appears gets a placeholder row, plus a cursor skip of
/// block size + 1 in the padded layout.
pub fn slice_stats(cells: &[String]) -> Option<(StatsTable, StatsTable)> {
    if cells.is_empty() {
        return None;
    }
    let has_t20i = cells.iter().any(|c| c == FORMATS[0]);
    let has_ipl = cells.iter().any(|c| c == FORMATS[1]);
    if !has_t20i && !has_ipl {
        return None;
    }
    let padded = cells.len() > PADDED_LAYOUT_MIN;
    let mut cursor = 0;

    let bat_columns = read_row(cells, &mut cursor, BAT_COLS);
    let bat_t20i = read_format_block(cells, &mut cursor, BAT_COLS, has_t20i, padded);
    let bat_ipl = read_format_block(cells, &mut cursor, BAT_COLS, has_ipl, padded);

    let bowl_columns = read_row(cells, &mut cursor, BOWL_COLS);
    let bowl_t20i = read_format_block(cells, &mut cursor, BOWL_COLS, has_t20i, padded);
    let bowl_ipl = read_format_block(cells, &mut cursor, BOWL_COLS, has_ipl, padded);

    Some((
        build_table(bat_columns, [bat_t20i, bat_ipl]),
        build_table(bowl_columns, [bowl_t20i, bowl_ipl]),
    ))
}

fn read_row(cells: &[String], cursor: &mut usize, len: usize) -> Vec<String> {
    let row = cells.iter().skip(*cursor).take(len).cloned().collect();
    *cursor += len;
    row
}

fn read_format_block(
    cells: &[String],
    cursor: &mut usize,
    len: usize,
    present: bool,
    padded: bool,
) -> Vec<String> {
    if present {
        *cursor += 1; // marker token
        read_row(cells, cursor, len)
    } else {
        if padded {
            *cursor += len + 1;
        }
        vec![PLACEHOLDER.to_string(); len]
    }
}

fn build_table(columns: Vec<String>, values: [Vec<String>; 2]) -> StatsTable {
    let rows = FORMATS
        .iter()
        .zip(values)
        .map(|(format, values)| StatRow {
            format: format.to_string(),
            values,
        })
        .collect();
    StatsTable { columns, rows }
}
