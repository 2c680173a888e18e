use regex::{Captures, Regex};
use tracing::debug;

use crate::error::Result;
use crate::escape::escape_regex;
use crate::replacements::Replacements;

/// Replaces every `%TOKEN%` in `content` whose name appears in `replacements`.
///
/// Tokens are matched in one pass over `content`: a value that itself contains
/// `%OTHER%` is not substituted again, whatever the key order. Values are
/// inserted verbatim, so `$&` or `$$` in a value are not expanded.
pub fn substitute(content: &str, replacements: &Replacements) -> Result<String> {
    match TokenMatcher::compile(replacements)? {
        Some(matcher) => Ok(matcher.apply(content).text),
        None => Ok(content.to_owned()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    pub text: String,
    pub replaced: usize,
}

/// All tokens of a mapping compiled into one alternation.
///
/// Matching is a single pass over the input, so replacement values are never
/// scanned for further tokens and the result does not depend on key order.
#[derive(Debug, Clone)]
pub struct TokenMatcher<'a> {
    pattern: Regex,
    replacements: &'a Replacements,
}

impl<'a> TokenMatcher<'a> {
    /// Returns `None` for an empty mapping.
    pub fn compile(replacements: &'a Replacements) -> Result<Option<Self>> {
        if replacements.is_empty() {
            return Ok(None);
        }
        let alternatives = replacements
            .tokens()
            .map(escape_regex)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("%({alternatives})%"))?;
        Ok(Some(Self {
            pattern,
            replacements,
        }))
    }

    pub fn apply(&self, content: &str) -> Substituted {
        let mut replaced = 0;
        let text = self
            .pattern
            .replace_all(content, |caps: &Captures<'_>| {
                replaced += 1;
                self.replacements
                    .get(&caps[1])
                    .unwrap_or(&caps[0])
                    .to_owned()
            })
            .into_owned();
        debug!(tokens = self.replacements.len(), replaced, "substituted template tokens");
        Substituted { text, replaced }
    }
}
