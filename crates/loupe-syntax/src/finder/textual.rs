//! Regular-expression matching over raw document text.

use loupe_core::{Document, EngineConfig, OffsetConverter, Range};
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::error::SyntaxError;
use crate::fragment::{Fragment, FragmentProvider, NamedCapture};

/// A [`FragmentProvider`] reporting every match of a regular expression.
///
/// Matches run left to right without overlapping. An empty match is never
/// reported at the offset where the previous match ended, and the scan
/// steps one character past every empty match, so empty-matching patterns
/// such as `x*` terminate. Named groups that participate in a match become
/// captures, in the order the groups appear in the pattern.
#[derive(Debug, Clone)]
pub struct RegexPatternFinder {
    regex: Regex,
    config: EngineConfig,
}

impl RegexPatternFinder {
    /// Compiles `pattern` with the default [`EngineConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::InvalidRegex`] when the pattern does not
    /// compile.
    pub fn new(pattern: &str) -> Result<Self, SyntaxError> {
        Self::with_config(pattern, EngineConfig::default())
    }

    /// Compiles `pattern` with explicit limits.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::InvalidRegex`] when the pattern does not
    /// compile.
    pub fn with_config(pattern: &str, config: EngineConfig) -> Result<Self, SyntaxError> {
        let regex = Regex::new(pattern)
            .map_err(|error| SyntaxError::invalid_regex(pattern, error.to_string()))?;
        Ok(Self { regex, config })
    }

    /// Returns the pattern source.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the matches in `document`, in document order.
    #[must_use]
    pub fn apply_in_document(&self, document: &Document) -> Vec<Fragment> {
        let fragments = self.apply_in_text(document.content(), document.offset_converter());
        debug!(
            version = document.version(),
            fragments = fragments.len(),
            "regex pass complete"
        );
        fragments
    }

    /// Returns the matches in `text`, whose positions `converter` maps.
    ///
    /// Empty text yields no matches without running the expression.
    #[must_use]
    pub fn apply_in_text(&self, text: &str, converter: &OffsetConverter) -> Vec<Fragment> {
        let limit = self.config.max_fragments_per_pass();
        let mut fragments = Vec::new();
        if text.is_empty() {
            return fragments;
        }
        let mut cursor = 0;
        let mut previous_end = None;

        while cursor <= text.len() {
            let Some(captures) = self.regex.captures_at(text, cursor) else {
                break;
            };
            let Some(whole) = captures.get(0) else {
                break;
            };
            if whole.is_empty() && previous_end == Some(whole.start()) {
                cursor = step_past(text, whole.start());
                continue;
            }
            if fragments.len() >= limit {
                warn!(
                    limit,
                    pattern = self.pattern(),
                    "regex match limit reached; remaining matches dropped"
                );
                break;
            }

            fragments.push(self.fragment(&captures, converter));
            previous_end = Some(whole.end());
            cursor = if whole.is_empty() {
                step_past(text, whole.end())
            } else {
                whole.end()
            };
        }
        fragments
    }

    fn fragment(&self, captures: &Captures<'_>, converter: &OffsetConverter) -> Fragment {
        let named = self
            .regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                let group = captures.name(name)?;
                Some(NamedCapture::new(
                    name,
                    group.as_str(),
                    span(converter, group.start(), group.end()),
                ))
            })
            .collect();
        let (range, text) = captures.get(0).map_or_else(
            || (Range::default(), ""),
            |whole| (span(converter, whole.start(), whole.end()), whole.as_str()),
        );
        Fragment::from_text_match(range, text, named)
    }
}

/// Returns the offset one character after `offset`, or one past the end.
fn step_past(text: &str, offset: usize) -> usize {
    text.get(offset..)
        .and_then(|rest| rest.chars().next())
        .map_or(offset + 1, |next| offset + next.len_utf8())
}

fn span(converter: &OffsetConverter, start: usize, end: usize) -> Range {
    Range::new(converter.position_at(start), converter.position_at(end))
}

impl FragmentProvider for RegexPatternFinder {
    fn provide_fragments_for_document(&self, document: &Document) -> Vec<Fragment> {
        self.apply_in_document(document)
    }
}
