// file: src/render/style.rs
// description: terminal style descriptors applied through the colored crate
// reference: https://docs.rs/colored

use colored::{Color, Colorize};

/// Foreground, background and emphasis attributes for one piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            italic: false,
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }

    pub fn apply(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }

        let mut styled = text.normal();
        if let Some(fg) = self.fg {
            styled = styled.color(fg);
        }
        if let Some(bg) = self.bg {
            styled = styled.on_color(bg);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.italic {
            styled = styled.italic();
        }
        styled.to_string()
    }

    /// Dictionary name header line.
    pub fn header() -> Self {
        Self::plain().bg(Color::BrightBlack)
    }

    /// Word type of the first definition in a group.
    pub fn lead_word_type() -> Self {
        Self::plain().bold().italic()
    }

    /// Text of the first definition in a group.
    pub fn lead_text() -> Self {
        Self::plain().fg(Color::Cyan)
    }

    pub fn word_type() -> Self {
        Self::plain().italic()
    }

    /// Banner printed above each looked-up word.
    pub fn banner() -> Self {
        Self::plain().fg(Color::White).bg(Color::Red)
    }
}
