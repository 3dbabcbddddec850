use std::fmt;

use chrono::NaiveDateTime;

/// A single spreadsheet cell, typed as the reader saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Integer(i64),
    Real(f64),
    DateTime(NaiveDateTime),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Text(v) => write!(f, "{v}"),
            CellValue::Integer(v) => write!(f, "{v}"),
            CellValue::Real(v) => {
                if v.is_finite() && v.fract().abs() < f64::EPSILON {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{v}")
                }
            }
            CellValue::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// A fully parsed worksheet: header names plus data rows in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn row_count(&self) -> i64 {
        self.rows.len() as i64
    }
}

/// Renders the table the way it is dumped to stdout: one space-padded
/// line per row, headers first.
impl fmt::Display for SheetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                (0..self.headers.len())
                    .map(|idx| row.get(idx).map(CellValue::to_string).unwrap_or_default())
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &rendered {
            for (idx, value) in row.iter().enumerate() {
                widths[idx] = widths[idx].max(value.chars().count());
            }
        }

        let write_line = |f: &mut fmt::Formatter<'_>, values: &[String]| {
            let mut line = String::new();
            for (idx, value) in values.iter().enumerate() {
                if idx > 0 {
                    line.push_str("  ");
                }
                let padding = widths[idx].saturating_sub(value.chars().count());
                line.push_str(value);
                line.push_str(&" ".repeat(padding));
            }
            writeln!(f, "{}", line.trim_end())
        };

        write_line(f, &self.headers)?;
        for row in &rendered {
            write_line(f, row)?;
        }
        Ok(())
    }
}
