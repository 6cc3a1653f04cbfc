// file: src/render/align.rs
// description: tab-stop column alignment for blocks of tab-separated lines
// reference: elastic tabstop alignment with padding between columns

use lazy_static::lazy_static;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

lazy_static! {
    // SGR escape sequences emitted by the styling layer
    static ref ANSI_ESCAPE: Regex = Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI_ESCAPE regex is valid");
}

/// Aligns tab-separated cells into columns. Column widths are computed over
/// the whole block, so every line that has a given column shares its width.
/// Text after the last tab of a line is not part of a column; lines without
/// tabs pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TabAligner {
    padding: usize,
}

impl TabAligner {
    pub fn new(padding: usize) -> Self {
        Self { padding }
    }

    pub fn align(&self, block: &str) -> String {
        let rows: Vec<Vec<&str>> = block.split('\n').map(|line| line.split('\t').collect()).collect();

        let mut widths: Vec<usize> = Vec::new();
        for row in &rows {
            for (column, cell) in row.iter().take(row.len().saturating_sub(1)).enumerate() {
                let width = visible_width(cell);
                match widths.get_mut(column) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }

        let mut out = String::with_capacity(block.len());
        for (index, row) in rows.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            let last = row.len() - 1;
            for (column, cell) in row.iter().enumerate() {
                out.push_str(cell);
                if column < last {
                    let target = widths[column] + self.padding;
                    let fill = target.saturating_sub(visible_width(cell));
                    out.extend(std::iter::repeat_n(' ', fill));
                }
            }
        }
        out
    }
}

impl Default for TabAligner {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Terminal column width of the text with escape sequences removed.
/// East Asian wide characters and emoji take two columns.
pub fn visible_width(text: &str) -> usize {
    ANSI_ESCAPE.replace_all(text, "").width()
}
