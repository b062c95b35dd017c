//! Styled text lines for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-span styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const PLAIN: Self = Self::fg(Rgb::new(220, 220, 220));
    pub const GOOD: Self = Self::fg(Rgb::new(80, 200, 120));
    pub const BAD: Self = Self::fg(Rgb::new(230, 70, 70));
    pub const GOLD: Self = Self::fg(Rgb::new(255, 200, 40));
    pub const SILVER: Self = Self::fg(Rgb::new(192, 192, 200));
    pub const BRONZE: Self = Self::fg(Rgb::new(160, 95, 45));

    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::PLAIN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::PLAIN)
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            spans: vec![Span::new(text, style)],
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    /// Concatenated text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A full screen of lines, drawn top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    lines: Vec<Line>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn push_plain(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Line::plain(text))
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(Line::blank())
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line>) -> &mut Self {
        self.lines.extend(lines);
        self
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Plain text of the whole screen, one line per row.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_text_joins_spans() {
        let line = Line::new(vec![
            Span::new("Ann surrendered", TextStyle::BAD),
            Span::plain(" and "),
            Span::new("Bob won", TextStyle::GOOD),
        ]);
        assert_eq!(line.text(), "Ann surrendered and Bob won");
    }

    #[test]
    fn screen_text_and_contains() {
        let mut screen = Screen::new();
        screen.push_plain("one").blank().push_plain("two");
        assert_eq!(screen.text(), "one\n\ntwo");
        assert!(screen.contains("two"));
        assert!(!screen.contains("three"));
        assert_eq!(screen.lines().len(), 3);
    }
}
