use crate::core::constants::DEFAULT_LEFT_WIDTH;
use unicode_width::UnicodeWidthStr;

/// Two parallel columns; the left one takes the extra entry on odd counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Minimum display width of a left-column entry.
    pub left_width: usize,
    pub bullet: &'static str,
}

impl ColumnLayout {
    pub fn new(left_width: usize) -> Self {
        Self {
            left_width,
            ..Self::default()
        }
    }

    /// `ceil(n/2)` entries left, the remainder right.
    pub fn split<'a>(&self, items: &'a [String]) -> (&'a [String], &'a [String]) {
        items.split_at(items.len().div_ceil(2))
    }

    /// Width of a complete left cell, bullet included.
    pub fn cell_width(&self) -> usize {
        self.bullet.width() + self.left_width
    }

    pub fn rows(&self, items: &[String]) -> Vec<String> {
        let (left, right) = self.split(items);
        let count = left.len().max(right.len());

        (0..count)
            .map(|i| {
                let left_cell = match left.get(i) {
                    Some(name) => format!("{}{}", self.bullet, pad_end(name, self.left_width)),
                    None => " ".repeat(self.cell_width()),
                };
                let right_cell = right
                    .get(i)
                    .map(|name| format!("{}{}", self.bullet, name))
                    .unwrap_or_default();
                format!("{} {}", left_cell, right_cell)
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            left_width: DEFAULT_LEFT_WIDTH,
            bullet: "• ",
        }
    }
}

/// Pads with spaces to at least `width` display columns.
pub fn pad_end(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}

/// Decoration glyphs of the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyle {
    pub border: &'static str,
    pub header_open: (&'static str, &'static str),
    pub header_close: &'static str,
    pub section_open: (&'static str, &'static str),
    pub section_close: &'static str,
    /// Wraps titles and field names.
    pub emphasis: &'static str,
}

impl MenuStyle {
    pub fn emphasize(&self, text: &str) -> String {
        format!("{}{}{}", self.emphasis, text, self.emphasis)
    }

    pub fn section_title(&self, label: &str) -> String {
        format!(
            "{}{}{}",
            self.section_open.0,
            self.emphasize(label),
            self.section_open.1
        )
    }

    pub fn header_title(&self, name: &str) -> String {
        format!(
            "{}{}{}",
            self.header_open.0,
            self.emphasize(name),
            self.header_open.1
        )
    }

    /// Border-prefixed line; a bare border for empty content.
    pub fn line(&self, content: &str) -> String {
        if content.is_empty() {
            self.border.to_string()
        } else {
            format!("{} {}", self.border, content)
        }
    }

    pub fn plain() -> Self {
        Self {
            border: "|",
            header_open: ("+- ", " -+"),
            header_close: "+--+",
            section_open: ("+-- ", " --+"),
            section_close: "+----+",
            emphasis: "",
        }
    }
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            border: "│",
            header_open: ("╭─◇ ", " ◇─╮"),
            header_close: "╰──────────────╯",
            section_open: ("╭─── ", " ───╮"),
            section_close: "╰─────────────────────╯",
            emphasis: "*",
        }
    }
}
