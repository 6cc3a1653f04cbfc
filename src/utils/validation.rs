// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{LookupError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(LookupError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_word(word: &str) -> Result<()> {
        if word.trim().is_empty() {
            return Err(LookupError::Validation("Word is empty".to_string()));
        }
        Ok(())
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(LookupError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }
}
