//! Bordered table rendering.
//!
//! Produces the double-line box look of the fleet listing and the
//! per-bus seat map. Cells carry a semantic role instead of raw escape
//! codes so column widths are computed on the visible text and painting
//! happens last.

use crate::theme::{Role, Theme};

/// One table cell: visible text plus an optional styling role.
#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    role: Option<Role>,
}

impl Cell {
    /// Unstyled cell.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: None,
        }
    }

    /// Cell painted with the given role.
    pub fn styled(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role: Some(role),
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn painted(&self, theme: &Theme) -> String {
        match self.role {
            Some(role) => theme.paint(role, &self.text),
            None => self.text.clone(),
        }
    }
}

/// A bordered table with a spanning title row, a header row, and
/// center-aligned data rows.
#[derive(Debug)]
pub struct Table {
    columns: usize,
    min_width: usize,
    title: Option<Cell>,
    header: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Empty table with the given column count.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            min_width: 10,
            title: None,
            header: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Floor for every column width.
    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Title spanning all columns.
    pub fn title(mut self, cell: Cell) -> Self {
        self.title = Some(cell);
        self
    }

    /// Header row; extra cells are dropped, missing ones stay empty.
    pub fn header(mut self, cells: Vec<Cell>) -> Self {
        self.header = cells;
        self.header.truncate(self.columns);
        self
    }

    /// Append a data row, padded to the column count.
    pub fn row(&mut self, mut cells: Vec<Cell>) {
        cells.truncate(self.columns);
        while cells.len() < self.columns {
            cells.push(Cell::plain(""));
        }
        self.rows.push(cells);
    }

    /// Render to a string without a trailing newline.
    pub fn render(&self, theme: &Theme) -> String {
        let widths = self.column_widths();
        let inner: usize = widths.iter().sum::<usize>() + widths.len() - 1;

        let mut lines = Vec::new();
        match &self.title {
            Some(title) => {
                lines.push(border(&[inner], '╔', '╦', '╗'));
                lines.push(format!("║{}║", centered(title, inner, theme)));
                lines.push(border(&widths, '╠', '╦', '╣'));
            }
            None => lines.push(border(&widths, '╔', '╦', '╗')),
        }

        if !self.header.is_empty() {
            lines.push(self.cells_line(&self.header, &widths, theme));
            lines.push(border(&widths, '╠', '╬', '╣'));
        }

        for row in &self.rows {
            lines.push(self.cells_line(row, &widths, theme));
        }

        lines.push(border(&widths, '╚', '╩', '╝'));
        lines.join("\n")
    }

    fn cells_line(&self, cells: &[Cell], widths: &[usize], theme: &Theme) -> String {
        let empty = Cell::plain("");
        let mut line = String::from("║");
        for (index, width) in widths.iter().enumerate() {
            let cell = cells.get(index).unwrap_or(&empty);
            line.push_str(&centered(cell, *width, theme));
            line.push('║');
        }
        line
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![self.min_width; self.columns];
        for cells in std::iter::once(&self.header).chain(self.rows.iter()) {
            for (index, cell) in cells.iter().enumerate().take(self.columns) {
                widths[index] = widths[index].max(cell.width() + 2);
            }
        }

        // widen the last column if the spanning title would not fit
        if let Some(title) = &self.title {
            let needed = title.width() + 2;
            let inner = widths.iter().sum::<usize>() + widths.len() - 1;
            if needed > inner {
                if let Some(last) = widths.last_mut() {
                    *last += needed - inner;
                }
            }
        }
        widths
    }
}

fn border(widths: &[usize], left: char, junction: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (index, width) in widths.iter().enumerate() {
        if index > 0 {
            line.push(junction);
        }
        for _ in 0..*width {
            line.push('═');
        }
    }
    line.push(right);
    line
}

fn centered(cell: &Cell, width: usize, theme: &Theme) -> String {
    let pad = width.saturating_sub(cell.width());
    let left = pad / 2;
    let right = pad - left;
    format!(
        "{}{}{}",
        " ".repeat(left),
        cell.painted(theme),
        " ".repeat(right)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_theme() -> Theme {
        Theme::new(false)
    }

    #[test]
    fn renders_title_header_and_rows() {
        let mut table = Table::new(4)
            .min_width(12)
            .title(Cell::plain("Listing (Page 1/2)"))
            .header(vec![
                Cell::plain("ID"),
                Cell::plain("Seat"),
                Cell::plain("Available"),
                Cell::plain("Unavailable"),
            ]);
        table.row(vec![
            Cell::plain("1"),
            Cell::plain("4"),
            Cell::plain("3"),
            Cell::plain("1"),
        ]);
        table.row(vec![
            Cell::plain("2"),
            Cell::plain("4"),
            Cell::plain("4"),
            Cell::plain("0"),
        ]);

        let rendered = table.render(&plain_theme());
        let lines: Vec<&str> = rendered.lines().collect();
        // top, title, separator, header, separator, two rows, bottom
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with('╔'));
        assert!(lines[0].ends_with('╗'));
        assert!(lines[1].contains("Listing (Page 1/2)"));
        assert!(lines[3].contains("Unavailable"));
        assert!(lines[6].contains('2'));
        assert!(lines[7].starts_with('╚'));
        assert!(lines[7].ends_with('╝'));
    }

    #[test]
    fn all_lines_share_the_same_visible_width() {
        let mut table = Table::new(3).title(Cell::plain("T")).header(vec![
            Cell::plain("a"),
            Cell::plain("bb"),
            Cell::plain("ccc"),
        ]);
        table.row(vec![
            Cell::plain("1"),
            Cell::plain("22"),
            Cell::plain("333"),
        ]);

        let rendered = table.render(&plain_theme());
        let widths: Vec<usize> = rendered.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn short_rows_are_padded_to_the_column_count() {
        let mut table = Table::new(5).header(vec![Cell::plain("Seat"); 5]);
        table.row(vec![Cell::plain("(+) 1"), Cell::plain("(+) 2")]);

        let rendered = table.render(&plain_theme());
        let last_row = rendered.lines().nth(3).expect("data row");
        assert_eq!(last_row.matches('║').count(), 6);
    }

    #[test]
    fn long_titles_widen_the_table() {
        let title = "A title far wider than the single tiny column below";
        let mut table = Table::new(1).min_width(4).title(Cell::plain(title));
        table.row(vec![Cell::plain("x")]);

        let rendered = table.render(&plain_theme());
        assert!(rendered.lines().nth(1).expect("title row").contains(title));
        let widths: Vec<usize> = rendered.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn styled_cells_do_not_break_alignment() {
        let theme = Theme::new(true);
        let mut plain = Table::new(2).header(vec![Cell::plain("a"), Cell::plain("b")]);
        plain.row(vec![Cell::plain("1"), Cell::plain("2")]);

        let mut styled = Table::new(2).header(vec![Cell::plain("a"), Cell::plain("b")]);
        styled.row(vec![
            Cell::styled("1", Role::Success),
            Cell::styled("2", Role::Danger),
        ]);

        // identical geometry: only the painted text differs
        let plain_borders: Vec<String> = plain
            .render(&plain_theme())
            .lines()
            .filter(|line| line.starts_with('╔') || line.starts_with('╚'))
            .map(str::to_string)
            .collect();
        let styled_borders: Vec<String> = styled
            .render(&theme)
            .lines()
            .filter(|line| line.starts_with('╔') || line.starts_with('╚'))
            .map(str::to_string)
            .collect();
        assert_eq!(plain_borders, styled_borders);
    }
}
