//! Column-aligned plain-text tables.

use console::{measure_text_width, pad_str, Alignment};

/// A table printed as aligned columns under a header row.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row. Missing cells render empty; extra cells are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        self.rows
            .push(row.iter().map(|c| c.as_ref().to_string()).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| measure_text_width(cell))
                    .chain(std::iter::once(measure_text_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render the table. The last column is not padded.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let line = |cells: &[String]| -> String {
            widths
                .iter()
                .enumerate()
                .map(|(i, &width)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    if i + 1 == widths.len() {
                        cell.to_string()
                    } else {
                        pad_str(cell, width, Alignment::Left, None).into_owned()
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![line(&self.headers)];
        lines.extend(self.rows.iter().map(|row| line(row)));
        lines.join("\n")
    }
}
