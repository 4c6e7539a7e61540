/// One positioned line of text on the full-screen surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRow {
    pub row:  u16,
    pub col:  u16,
    pub text: String,
    pub bold: bool,
}

/// A complete frame, rebuilt from scratch on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub rows: Vec<ScreenRow>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, row: u16, col: u16, text: impl Into<String>) {
        self.rows.push(ScreenRow { row, col, text: text.into(), bold: false });
    }

    pub fn put_bold(&mut self, row: u16, col: u16, text: impl Into<String>) {
        self.rows.push(ScreenRow { row, col, text: text.into(), bold: true });
    }

    /// Text of every row in the frame, top to bottom.
    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.text.as_str())
    }

    #[cfg(test)]
    pub fn contains(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    /// Render as plain text lines, padding each row with its column offset.
    /// Rows skipped in the layout come out as empty lines.
    pub fn to_lines(&self) -> Vec<String> {
        let height = self.rows.iter().map(|r| r.row as usize + 1).max().unwrap_or(0);
        let mut lines = vec![String::new(); height];
        for r in &self.rows {
            let line = &mut lines[r.row as usize];
            let pad = (r.col as usize).saturating_sub(line.chars().count());
            line.push_str(&" ".repeat(pad));
            line.push_str(&r.text);
        }
        lines
    }
}
