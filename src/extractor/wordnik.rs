// file: src/extractor/wordnik.rs
// description: extraction of sourced definitions from a wordnik word page
// reference: wordnik definitions module markup (h3 source headings paired with ul lists)

use crate::error::{LookupError, Result};
use crate::extractor::patterns::{ABBREVIATION, ACTIVE_DEFINITIONS, HEADING, ITALIC, ITEM, LIST};
use crate::models::{Definition, SourcedDefinition};
use scraper::{ElementRef, Html, Node};
use tracing::{debug, warn};

const SOURCE_PREFIX: &str = "from ";

pub struct DefinitionExtractor {
    strict: bool,
}

impl DefinitionExtractor {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// When strict, a page without an active definitions module is an error
    /// instead of an empty result.
    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    pub fn extract_from_html(&self, html: &str) -> Result<Vec<SourcedDefinition>> {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    pub fn extract(&self, document: &Html) -> Result<Vec<SourcedDefinition>> {
        let Some(module) = document.select(&ACTIVE_DEFINITIONS).next() else {
            if self.strict {
                return Err(LookupError::DefinitionsNotFound);
            }
            debug!("No active definitions module in document");
            return Ok(Vec::new());
        };

        let headings: Vec<ElementRef> = module.select(&HEADING).collect();
        let mut definitions = Vec::new();

        for (list_index, list) in module.select(&LIST).enumerate() {
            let items: Vec<ElementRef> = list.select(&ITEM).collect();
            if items.is_empty() {
                continue;
            }

            let heading = headings.get(list_index).ok_or_else(|| {
                warn!(
                    "Definition list {} has no heading ({} headings found)",
                    list_index,
                    headings.len()
                );
                LookupError::MissingHeading { list_index }
            })?;

            let dictionary = first_text_node(heading)
                .and_then(normalize_dictionary_name)
                .ok_or(LookupError::EmptyDictionaryName { list_index })?;

            for (item_index, item) in items.into_iter().enumerate() {
                let word_type = item_word_type(&item);
                let full_text = collapse_whitespace(&item.text().collect::<String>());
                let text = capitalize_first(strip_word_type(&full_text, &word_type).trim())
                    .ok_or(LookupError::EmptyDefinitionText {
                        list_index,
                        item_index,
                    })?;

                definitions.push(SourcedDefinition::new(
                    dictionary.clone(),
                    item_index,
                    Definition::new(word_type, text),
                ));
            }
        }

        debug!("Extracted {} definitions", definitions.len());
        Ok(definitions)
    }
}

impl Default for DefinitionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// The item's abbreviation plus the italic label that directly follows it,
/// e.g. "noun Slang". An italic further into the definition body is not a
/// label. Without an abbreviation only a leading italic counts.
fn item_word_type(item: &ElementRef) -> String {
    let abbreviation = item.select(&ABBREVIATION).next();

    let label = match &abbreviation {
        Some(abbreviation) => abbreviation
            .next_siblings()
            .find(|node| !is_blank_text(node.value()))
            .and_then(ElementRef::wrap),
        None => item
            .children()
            .find(|node| !is_blank_text(node.value()))
            .and_then(ElementRef::wrap),
    }
    .filter(|element| ITALIC.matches(element));

    let parts: Vec<String> = abbreviation
        .into_iter()
        .chain(label)
        .map(|element| element.text().collect())
        .collect();

    collapse_whitespace(&parts.join(" "))
}

fn is_blank_text(node: &Node) -> bool {
    node.as_text().is_some_and(|text| text.trim().is_empty())
}

/// Joins every run of whitespace, newlines and tabs included, into one space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_text_node<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .find(|text| !text.trim().is_empty())
}

/// "from The Century Dictionary." becomes "The Century Dictionary".
pub fn normalize_dictionary_name(raw: &str) -> Option<String> {
    let raw = raw.trim_start();
    let name = collapse_whitespace(raw.strip_prefix(SOURCE_PREFIX).unwrap_or(raw));
    let name = capitalize_first(&name)?;
    let name = name.strip_suffix('.').map(str::to_string).unwrap_or(name);

    if name.is_empty() { None } else { Some(name) }
}

/// Removes the leading word type from a definition's raw text, once.
/// The word type parts may be separated by arbitrary whitespace in the
/// markup. Only the leading run of parts that the text actually starts
/// with is removed.
pub fn strip_word_type<'a>(text: &'a str, word_type: &str) -> &'a str {
    let text = text.trim_start();
    if word_type.is_empty() {
        return text;
    }
    if let Some(rest) = text.strip_prefix(word_type) {
        return rest;
    }

    let mut rest = text;
    for part in word_type.split_whitespace() {
        match rest.trim_start().strip_prefix(part) {
            Some(remaining) => rest = remaining,
            None => break,
        }
    }
    rest
}

/// Upper-cases the first character and leaves the rest untouched.
/// Returns None for an empty string.
pub fn capitalize_first(text: &str) -> Option<String> {
    let mut chars = text.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
<html><body>
<div class="word-module module-definitions" id="define">
  <div class="guts active">
    <h3 class="source">from The American Heritage® Dictionary of the English Language, 5th Edition.</h3>
    <ul>
      <li><abbr title="partOfSpeech">noun</abbr> A domesticated carnivorous mammal.</li>
      <li><abbr title="partOfSpeech">noun</abbr> <i>Slang</i> an unattractive person.</li>
    </ul>
    <h3 class="source">from Merriam-Webster's Dictionary.</h3>
    <ul>
      <li><abbr title="partOfSpeech">intransitive verb</abbr> to follow closely.</li>
      <li><abbr title="partOfSpeech">noun</abbr>
          <i>Informal</i>   a fellow.</li>
    </ul>
  </div>
  <div class="guts">
    <h3 class="source">from Hidden Dictionary.</h3>
    <ul><li><abbr>noun</abbr> Should not appear.</li></ul>
  </div>
</div>
</body></html>"#;

    #[test]
    fn test_sample_document() {
        let defs = DefinitionExtractor::new().extract_from_html(SAMPLE).unwrap();

        assert_eq!(defs.len(), 4);

        let heritage: Vec<&SourcedDefinition> = defs
            .iter()
            .filter(|d| d.dictionary.starts_with("The American Heritage"))
            .collect();
        let webster: Vec<&SourcedDefinition> = defs
            .iter()
            .filter(|d| d.dictionary == "Merriam-Webster's Dictionary")
            .collect();

        assert_eq!(heritage.iter().map(|d| d.rank).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(webster.iter().map(|d| d.rank).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(
            heritage[0].dictionary,
            "The American Heritage® Dictionary of the English Language, 5th Edition"
        );
    }

    #[test]
    fn test_word_type_and_text() {
        let defs = DefinitionExtractor::new().extract_from_html(SAMPLE).unwrap();

        assert_eq!(defs[0].definition.word_type(), "noun");
        assert_eq!(defs[0].definition.text(), "A domesticated carnivorous mammal.");

        assert_eq!(defs[1].definition.word_type(), "noun Slang");
        assert_eq!(defs[1].definition.text(), "An unattractive person.");

        assert_eq!(defs[2].definition.word_type(), "intransitive verb");
        assert_eq!(defs[2].definition.text(), "To follow closely.");

        assert_eq!(defs[3].definition.word_type(), "noun Informal");
        assert_eq!(defs[3].definition.text(), "A fellow.");
    }

    #[test]
    fn test_missing_module_is_empty_by_default() {
        let html = "<html><body><p>No entries</p></body></html>";
        let defs = DefinitionExtractor::new().extract_from_html(html).unwrap();
        assert!(defs.is_empty());
    }

    #[test]
    fn test_missing_module_in_strict_mode() {
        let html = "<html><body><p>No entries</p></body></html>";
        let err = DefinitionExtractor::with_strict(true)
            .extract_from_html(html)
            .unwrap_err();
        assert!(matches!(err, LookupError::DefinitionsNotFound));
    }

    #[test]
    fn test_list_without_heading() {
        let html = r#"<div class="word-module module-definitions" id="define">
              <div class="guts active">
                <ul><li><abbr>noun</abbr> Orphan.</li></ul>
              </div></div>"#;
        let err = DefinitionExtractor::new().extract_from_html(html).unwrap_err();
        assert!(matches!(err, LookupError::MissingHeading { list_index: 0 }));
    }

    #[test]
    fn test_empty_heading_is_error() {
        let html = r#"<div class="word-module module-definitions" id="define">
              <div class="guts active">
                <h3>from .</h3>
                <ul><li><abbr>noun</abbr> Something.</li></ul>
              </div></div>"#;
        let err = DefinitionExtractor::new().extract_from_html(html).unwrap_err();
        assert!(matches!(err, LookupError::EmptyDictionaryName { list_index: 0 }));
    }

    #[test]
    fn test_item_with_only_word_type_is_error() {
        let html = r#"<div class="word-module module-definitions" id="define">
              <div class="guts active">
                <h3>from GNU.</h3>
                <ul>
                  <li><abbr>noun</abbr> Fine.</li>
                  <li><abbr>noun</abbr></li>
                </ul>
              </div></div>"#;
        let err = DefinitionExtractor::new().extract_from_html(html).unwrap_err();
        assert!(matches!(
            err,
            LookupError::EmptyDefinitionText {
                list_index: 0,
                item_index: 1
            }
        ));
    }

    fn single_item(item: &str) -> String {
        format!(
            r#"<div class="word-module module-definitions" id="define">
                 <div class="guts active">
                   <h3>from GNU.</h3>
                   <ul><li>{item}</li></ul>
                 </div></div>"#
        )
    }

    #[test]
    fn test_markup_whitespace_is_collapsed() {
        let html = single_item(
            "<abbr>noun</abbr> a domesticated\n      carnivorous\tmammal",
        );
        let defs = DefinitionExtractor::new().extract_from_html(&html).unwrap();

        assert_eq!(defs[0].definition.text(), "A domesticated carnivorous mammal");
        assert!(!defs[0].definition.text().contains(['\n', '\t']));
    }

    #[test]
    fn test_italic_inside_body_is_not_word_type() {
        let html = single_item(
            "<abbr>noun</abbr> A domesticated mammal, <i>Canis familiaris</i>.",
        );
        let defs = DefinitionExtractor::new().extract_from_html(&html).unwrap();

        assert_eq!(defs[0].definition.word_type(), "noun");
        assert_eq!(
            defs[0].definition.text(),
            "A domesticated mammal, Canis familiaris."
        );
    }

    #[test]
    fn test_leading_italic_without_abbreviation() {
        let html = single_item("<i>Archaic</i> a knight's attendant.");
        let defs = DefinitionExtractor::new().extract_from_html(&html).unwrap();

        assert_eq!(defs[0].definition.word_type(), "Archaic");
        assert_eq!(defs[0].definition.text(), "A knight's attendant.");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a\n\t b  "), "a b");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_normalize_dictionary_name() {
        assert_eq!(
            normalize_dictionary_name("from Merriam-Webster's Dictionary.").as_deref(),
            Some("Merriam-Webster's Dictionary")
        );
        assert_eq!(
            normalize_dictionary_name("from wiktionary, Creative Commons").as_deref(),
            Some("Wiktionary, Creative Commons")
        );
        assert_eq!(normalize_dictionary_name("from "), None);
        assert_eq!(normalize_dictionary_name(""), None);
    }

    #[test]
    fn test_strip_word_type() {
        assert_eq!(
            strip_word_type("noun A domesticated carnivorous mammal", "noun").trim(),
            "A domesticated carnivorous mammal"
        );
        assert_eq!(
            strip_word_type("adj.\n   Archaic   old", "adj. Archaic").trim(),
            "old"
        );
        // strips only once
        assert_eq!(strip_word_type("noun noun phrase", "noun").trim(), "noun phrase");
        // only the leading parts that match are removed
        assert_eq!(
            strip_word_type("noun A mammal, Canis familiaris.", "noun Canis familiaris").trim(),
            "A mammal, Canis familiaris."
        );
        assert_eq!(strip_word_type("Plain text", "verb"), "Plain text");
        assert_eq!(strip_word_type("  Plain text", ""), "Plain text");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("élan").as_deref(), Some("Élan"));
        assert_eq!(capitalize_first("already").as_deref(), Some("Already"));
        assert_eq!(capitalize_first("mIxed").as_deref(), Some("MIxed"));
        assert_eq!(capitalize_first(""), None);
    }
}
