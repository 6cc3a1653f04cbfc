// file: src/extractor/patterns.rs
// description: compiled css selectors for definition extraction
// reference: https://docs.rs/scraper

use lazy_static::lazy_static;
use scraper::Selector;

lazy_static! {
    // Definitions module that is currently shown on the page
    pub static ref ACTIVE_DEFINITIONS: Selector = Selector::parse(
        ".word-module.module-definitions#define .guts.active"
    ).expect("ACTIVE_DEFINITIONS selector is valid");

    // One heading per source dictionary, paired by index with LIST
    pub static ref HEADING: Selector = Selector::parse("h3")
        .expect("HEADING selector is valid");

    pub static ref LIST: Selector = Selector::parse("ul")
        .expect("LIST selector is valid");

    pub static ref ITEM: Selector = Selector::parse("li")
        .expect("ITEM selector is valid");

    // Word type parts
    pub static ref ABBREVIATION: Selector = Selector::parse("abbr")
        .expect("ABBREVIATION selector is valid");

    pub static ref ITALIC: Selector = Selector::parse("i")
        .expect("ITALIC selector is valid");
}
