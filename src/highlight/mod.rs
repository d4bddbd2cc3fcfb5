//! Keyword highlighting as a pure text transformation.
//!
//! [`Highlighter::apply`] wraps every non-overlapping keyword occurrence in
//! a configurable marker pair; [`Highlighter::clear`] strips the markers
//! back out, restoring the exact pre-apply text. The rendering layer the
//! markup is handed to is the only place with side effects.

use regex::RegexBuilder;

use crate::error::{NavigatorError, Result};
use crate::search::CaseMatching;

/// Default opening marker, the inline markup the navigator panel renders.
pub const DEFAULT_MARKER_OPEN: &str = r#"<span class="highlight">"#;

/// Default closing marker.
pub const DEFAULT_MARKER_CLOSE: &str = "</span>";

/// The marker pair wrapped around each matched substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMarker {
    /// Text inserted before a match.
    pub open: String,
    /// Text inserted after a match.
    pub close: String,
}

impl Default for HighlightMarker {
    fn default() -> Self {
        Self {
            open: DEFAULT_MARKER_OPEN.to_string(),
            close: DEFAULT_MARKER_CLOSE.to_string(),
        }
    }
}

/// Applies and removes highlight markers around keyword occurrences.
#[derive(Debug, Clone)]
pub struct Highlighter {
    marker: HighlightMarker,
    case: CaseMatching,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a highlighter with the default marker and case policy.
    ///
    /// Highlighting defaults to case-insensitive matching, independently of
    /// the search engine's policy; both are explicit configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marker: HighlightMarker::default(),
            case: CaseMatching::Insensitive,
        }
    }

    /// Use a custom marker pair.
    #[must_use]
    pub fn with_marker(mut self, marker: HighlightMarker) -> Self {
        self.marker = marker;
        self
    }

    /// Use a specific case policy for matching.
    #[must_use]
    pub fn with_case(mut self, case: CaseMatching) -> Self {
        self.case = case;
        self
    }

    /// Wrap every non-overlapping occurrence of `keyword` in the marker.
    ///
    /// Scanning is leftmost, non-overlapping, and preserves the matched
    /// text's original case inside the marker. An empty keyword returns the
    /// text unchanged. The keyword is matched literally; regex syntax in it
    /// has no effect.
    pub fn apply(&self, text: &str, keyword: &str) -> Result<String> {
        if keyword.is_empty() {
            return Ok(text.to_string());
        }

        let pattern = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(self.case == CaseMatching::Insensitive)
            .build()
            .map_err(|e| NavigatorError::InvalidKeyword {
                message: e.to_string(),
            })?;

        let marked = pattern.replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{}{}{}", self.marker.open, &caps[0], self.marker.close)
        });
        Ok(marked.into_owned())
    }

    /// Strip all marker pairs, restoring the pre-apply text.
    ///
    /// For any `text` and `keyword` free of marker syntax,
    /// `clear(apply(text, keyword))` returns `text` exactly. An unpaired
    /// opening marker is left verbatim rather than guessed at.
    #[must_use]
    pub fn clear(&self, marked: &str) -> String {
        let mut plain = String::with_capacity(marked.len());
        let mut rest = marked;

        while let Some(start) = rest.find(&self.marker.open) {
            let after_open = &rest[start + self.marker.open.len()..];
            let Some(end) = after_open.find(&self.marker.close) else {
                break;
            };
            plain.push_str(&rest[..start]);
            plain.push_str(&after_open[..end]);
            rest = &after_open[end + self.marker.close.len()..];
        }

        plain.push_str(rest);
        plain
    }
}
