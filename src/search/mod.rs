//! Keyword search over the message list.
//!
//! Pure functions of the keyword and the index: no side effects, no
//! mutation, safe to invoke on every keystroke. Results are a snapshot of
//! the store at call time; a list that grows afterwards is simply observed
//! by the next invocation.

use regex::{Regex, RegexBuilder};
use tracing::{debug, instrument, warn};

use crate::error::{NavigatorError, Result};
use crate::index::{MessageIndex, MessageStore};
use crate::model::SearchResult;

/// When a search fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Results update on every keystroke.
    #[default]
    Incremental,
    /// Results update only on an explicit request.
    OnDemand,
}

/// How keyword containment treats letter case.
///
/// Search and highlight carry independent policies, so case handling is an
/// explicit choice at each stage rather than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMatching {
    /// `keyword` must appear exactly as typed.
    #[default]
    Sensitive,
    /// ASCII-and-Unicode case-insensitive containment.
    Insensitive,
}

impl CaseMatching {
    /// Compile `needle` once for repeated containment checks.
    ///
    /// The keyword is escaped, so the user types literal text and never
    /// accidental regex syntax.
    pub fn matcher(self, needle: &str) -> Result<KeywordMatcher<'_>> {
        match self {
            Self::Sensitive => Ok(KeywordMatcher::Literal(needle)),
            Self::Insensitive => RegexBuilder::new(&regex::escape(needle))
                .case_insensitive(true)
                .build()
                .map(KeywordMatcher::Pattern)
                .map_err(|e| NavigatorError::InvalidKeyword {
                    message: e.to_string(),
                }),
        }
    }

    /// One-off containment check; compiles the keyword on every call, so
    /// prefer [`matcher`](Self::matcher) when scanning a message list.
    #[must_use]
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        self.matcher(needle).is_ok_and(|m| m.is_match(haystack))
    }
}

/// A keyword compiled for repeated containment checks.
#[derive(Debug)]
pub enum KeywordMatcher<'k> {
    /// Exact substring containment.
    Literal(&'k str),
    /// Case-insensitive pattern over the escaped keyword.
    Pattern(Regex),
}

impl KeywordMatcher<'_> {
    /// Check whether `haystack` contains the keyword.
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            Self::Literal(needle) => haystack.contains(needle),
            Self::Pattern(re) => re.is_match(haystack),
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Keystroke-driven or on-demand.
    pub mode: SearchMode,
    /// Case policy for containment.
    pub case: CaseMatching,
}

/// Keyword search engine over a [`MessageIndex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine {
    options: SearchOptions,
}

impl SearchEngine {
    /// Create an engine with the given options.
    #[must_use]
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Search the message list for `keyword`.
    ///
    /// Returns matches in ascending floor order, each with a bounded text
    /// preview. An empty or whitespace-only keyword yields an empty vec,
    /// which callers interpret as "clear results" rather than a failure.
    #[instrument(skip(self, index), fields(len = index.len()))]
    pub fn search<S: MessageStore + ?Sized>(
        &self,
        keyword: &str,
        index: &MessageIndex<'_, S>,
    ) -> Vec<SearchResult> {
        if keyword.trim().is_empty() {
            return Vec::new();
        }

        let Ok(matcher) = self.options.case.matcher(keyword) else {
            warn!("Keyword failed to compile, returning no results");
            return Vec::new();
        };

        let results: Vec<SearchResult> = index
            .iter()
            .filter(|msg| matcher.is_match(&msg.text))
            .map(|msg| SearchResult {
                floor: msg.floor,
                preview: msg.preview(),
            })
            .collect();

        debug!(matches = results.len(), "Keyword search completed");
        results
    }

    /// Lowest floor matching `keyword`, if any.
    ///
    /// Convenience for the legacy auto-scroll mode, which jumps straight to
    /// the earliest hit instead of presenting a result list.
    #[must_use]
    pub fn first_match<S: MessageStore + ?Sized>(
        &self,
        keyword: &str,
        index: &MessageIndex<'_, S>,
    ) -> Option<usize> {
        if keyword.trim().is_empty() {
            return None;
        }
        let matcher = self.options.case.matcher(keyword).ok()?;
        index
            .iter()
            .find(|msg| matcher.is_match(&msg.text))
            .map(|msg| msg.floor)
    }

    /// Like [`search`](Self::search), but an empty result set for a
    /// non-empty keyword is reported as [`NavigatorError::NoMatch`].
    pub fn search_or_no_match<S: MessageStore + ?Sized>(
        &self,
        keyword: &str,
        index: &MessageIndex<'_, S>,
    ) -> Result<Vec<SearchResult>> {
        let results = self.search(keyword, index);
        if results.is_empty() && !keyword.trim().is_empty() {
            return Err(NavigatorError::no_match(keyword));
        }
        Ok(results)
    }
}
