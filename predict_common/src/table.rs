//! ASCII table rendering.
//!
//! ```text
//! | Metric        | Value     |
//! +---------------+-----------+
//! | Symbol        | BTC       |
//! | Current Price | $50000.00 |
//! ```
//!
//! Column widths are the longest header or cell of each column, counted in
//! characters.
use std::io::Write;

use crate::error::PredictError;
use crate::predictor::predicted_change_percent;
use crate::quote::PredictionSubject;
use crate::result::Result;

/// Headers plus rows of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given headers and no rows.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. The row must have one cell per header.
    pub fn add_row<I, S>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.headers.len() {
            return Err(PredictError::TableShape {
                expected: self.headers.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Width of every column.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Renders header, separator and rows, one line each.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();
        push_row(&mut out, &self.headers, &widths);
        push_separator(&mut out, &widths);
        for row in &self.rows {
            push_row(&mut out, row, &widths);
        }
        out
    }

    /// Writes the rendered table to `out`.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Prints the table to stdout.
    pub fn print(&self) -> Result<()> {
        self.write_to(std::io::stdout().lock())
    }
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        out.push_str(&format!(" {:<width$} |", cell, width = *width));
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize]) {
    out.push('+');
    for width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out.push('\n');
}

/// Builds the `Metric | Value` results table.
pub fn report_table(subject: &PredictionSubject, prediction: f64) -> Result<Table> {
    let change = predicted_change_percent(subject.current_price, prediction);

    let mut table = Table::new(["Metric", "Value"]);
    table.add_row(["Symbol".to_string(), subject.symbol.clone()])?;
    table.add_row(["Current Price".to_string(), format!("${:.2}", subject.current_price)])?;
    table.add_row(["Predicted Price".to_string(), format!("${:.2}", prediction)])?;
    table.add_row(["Predicted Change".to_string(), format!("{:.2}%", change)])?;
    table.add_row(["24h Change".to_string(), format!("{:.2}%", subject.percent_change_24h)])?;
    table.add_row(["7d Change".to_string(), format!("{:.2}%", subject.percent_change_7d)])?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_longest_cell() {
        let mut table = Table::new(["Metric", "Value"]);
        table.add_row(["Symbol", "BTC"]).unwrap();
        table.add_row(["Current Price", "$50000.00"]).unwrap();

        assert_eq!(table.column_widths(), vec![13, 9]);
        assert_eq!(
            table.render(),
            "| Metric        | Value     |\n\
             +---------------+-----------+\n\
             | Symbol        | BTC       |\n\
             | Current Price | $50000.00 |\n"
        );
    }

    #[test]
    fn separator_has_width_plus_two_dashes() {
        let mut table = Table::new(["Metric", "Value"]);
        table.add_row(["Symbol", "BTC"]).unwrap();
        table.add_row(["Current Price", "$50000.00"]).unwrap();

        let rendered = table.render();
        let separator = rendered.lines().nth(1).unwrap();
        let dashes: Vec<usize> = separator
            .split('+')
            .filter(|part| !part.is_empty())
            .map(str::len)
            .collect();
        assert_eq!(dashes, vec![15, 11]);
    }

    #[test]
    fn header_wider_than_cells_sets_width() {
        let mut table = Table::new(["Predicted Change"]);
        table.add_row(["4.00%"]).unwrap();
        assert_eq!(table.column_widths(), vec![16]);
    }

    #[test]
    fn empty_table_prints_header_and_separator() {
        let table = Table::new(["A", "Bee"]);
        assert_eq!(table.render(), "| A | Bee |\n+---+-----+\n");
    }

    #[test]
    fn mismatched_row_is_rejected() {
        let mut table = Table::new(["Metric", "Value"]);
        let err = table.add_row(["only one"]).expect_err("row too short");
        assert!(matches!(err, PredictError::TableShape { expected: 2, actual: 1 }));
        assert_eq!(table.render().lines().count(), 2);
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let mut table = Table::new(["Coin"]);
        table.add_row(["€uro"]).unwrap();
        assert_eq!(table.column_widths(), vec![4]);
        assert_eq!(table.render().lines().nth(2), Some("| €uro |"));
    }

    #[test]
    fn write_to_emits_rendered_text() {
        let table = Table::new(["X"]);
        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), table.render());
    }

    #[test]
    fn report_formats_prices_and_percentages() {
        let subject = PredictionSubject {
            symbol: String::from("BTC"),
            current_price: 50000.0,
            percent_change_24h: 5.0,
            percent_change_7d: 10.0,
        };

        let rendered = report_table(&subject, 52000.0).unwrap().render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "| Metric           | Value     |");
        assert_eq!(lines[2], "| Symbol           | BTC       |");
        assert_eq!(lines[3], "| Current Price    | $50000.00 |");
        assert_eq!(lines[4], "| Predicted Price  | $52000.00 |");
        assert_eq!(lines[5], "| Predicted Change | 4.00%     |");
        assert_eq!(lines[6], "| 24h Change       | 5.00%     |");
        assert_eq!(lines[7], "| 7d Change        | 10.00%    |");
    }

    #[test]
    fn report_with_zero_price_shows_zero_change() {
        let subject = PredictionSubject::new("DEAD");
        let rendered = report_table(&subject, 0.0).unwrap().render();
        assert!(rendered.contains("| Predicted Change | 0.00% |"), "{rendered}");
    }
}
