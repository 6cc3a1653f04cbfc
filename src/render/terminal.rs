// file: src/render/terminal.rs
// description: formats grouped definitions into aligned terminal text blocks
// reference: one header line per dictionary followed by word type / text columns

use crate::models::GroupedDefinitions;
use crate::render::align::TabAligner;
use crate::render::style::TextStyle;

/// Renders every dictionary group of one word as a single aligned block.
/// Each group is a header line, one line per definition and a blank line.
pub fn render(grouped: &GroupedDefinitions, styled: bool) -> String {
    let mut block = String::new();

    for (dictionary, definitions) in grouped.iter() {
        if styled {
            block.push_str(&TextStyle::header().apply(dictionary));
        } else {
            block.push_str(dictionary);
        }
        block.push('\n');

        for (position, definition) in definitions.iter().enumerate() {
            let line = match (styled, position) {
                (true, 0) => {
                    definition.render_with(TextStyle::lead_word_type(), TextStyle::lead_text())
                }
                _ => definition.render(styled),
            };
            block.push_str(&line);
            block.push('\n');
        }

        block.push('\n');
    }

    TabAligner::default().align(&block)
}

/// The looked-up word, printed above its definitions.
pub fn render_banner(word: &str, styled: bool) -> String {
    if styled {
        TextStyle::banner().apply(word)
    } else {
        word.to_string()
    }
}
