/// Column alignment for rendered tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A plain-text table generator for terminal output.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
    aligns: Vec<Align>,
}

impl Table {
    /// Create a new table with the given headers. Columns default to
    /// left alignment.
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.len()).collect();
        let aligns = vec![Align::Left; headers.len()];
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
            aligns,
        }
    }

    /// Right-align a column (typically amounts).
    pub fn align_right(mut self, col: usize) -> Self {
        if col < self.aligns.len() {
            self.aligns[col] = Align::Right;
        }
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row_strings: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        for (i, col) in row_strings.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.len());
            }
        }

        self.rows.push(row_strings);
    }

    /// Render the table as a formatted string, without a trailing
    /// newline.
    pub fn render(&self) -> String {
        let mut lines = vec![self.render_row(&self.headers), self.render_separator()];
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.join("\n")
    }

    /// Render a single row with per-column padding and alignment. A
    /// trailing left-aligned cell is left unpadded.
    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i >= self.col_widths.len() {
                break;
            }
            let width = self.col_widths[i];
            let last = i == row.len() - 1;
            match self.aligns[i] {
                Align::Left if last => line.push_str(col),
                Align::Left => line.push_str(&format!("{:<width$}", col, width = width)),
                Align::Right => line.push_str(&format!("{:>width$}", col, width = width)),
            }
            if !last {
                line.push_str(" | ");
            }
        }
        line
    }

    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}
