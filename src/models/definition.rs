// file: src/models/definition.rs
// description: definition and sourced definition value types
// reference: wordnik definitions module structure

use crate::render::TextStyle;

/// A single definition of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    word_type: String,
    text: String,
}

impl Definition {
    pub fn new(word_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            word_type: word_type.into(),
            text: text.into(),
        }
    }

    /// Part of speech, e.g. "noun" or "intransitive verb". May be empty.
    pub fn word_type(&self) -> &str {
        &self.word_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Two tab-separated cells, with an italic word type when styled.
    pub fn render(&self, styled: bool) -> String {
        if styled {
            self.render_with(TextStyle::word_type(), TextStyle::plain())
        } else {
            format!("{}\t{}", self.word_type, self.text)
        }
    }

    pub fn render_with(&self, word_type: TextStyle, text: TextStyle) -> String {
        format!("{}\t{}", word_type.apply(&self.word_type), text.apply(&self.text))
    }
}

/// A definition together with the dictionary it came from and its position
/// in that dictionary's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedDefinition {
    pub dictionary: String,
    pub rank: usize,
    pub definition: Definition,
}

impl SourcedDefinition {
    pub fn new(dictionary: impl Into<String>, rank: usize, definition: Definition) -> Self {
        Self {
            dictionary: dictionary.into(),
            rank,
            definition,
        }
    }
}
