//! Missing-value pattern.

use regex::Regex;

use crate::error::EtlResult;

/// A compiled marker for missing values in raw text cells.
///
/// The token is wrapped as `\s*<token>\s*` and searched for anywhere in a cell, so a cell is
/// missing when it *contains* the token.
#[derive(Debug, Clone)]
pub struct MissingPattern {
    token: String,
    regex: Regex,
}

impl MissingPattern {
    /// Build a pattern from a regular-expression fragment (e.g. `-` or `n/?a`).
    pub fn new(fragment: &str) -> EtlResult<Self> {
        let regex = Regex::new(&format!(r"\s*{fragment}\s*"))?;
        Ok(Self {
            token: fragment.to_owned(),
            regex,
        })
    }

    /// Build a pattern that matches `token` literally, escaping any regex metacharacters.
    pub fn literal(token: &str) -> EtlResult<Self> {
        let mut pattern = Self::new(&regex::escape(token))?;
        pattern.token = token.to_owned();
        Ok(pattern)
    }

    /// The token this pattern was built from.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether `text` contains a missing-value marker.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
