//! Event dispatch between the host UI and the navigation core.
//!
//! The panel translates discrete UI events (keystrokes, button clicks,
//! popup input) into calls on the pure core, and core results into
//! collaborator side effects: a scroll request, a toast, marked-up text for
//! the renderer. All decision logic lives in the core modules; the panel
//! holds no rendering state and is fully testable with mock collaborators.
//!
//! Every operation takes a fresh store reference, so a chat that grew since
//! the previous event is observed at its current length.

use tracing::{debug, instrument};

use crate::error::{NavigatorError, Result};
use crate::highlight::Highlighter;
use crate::index::{MessageIndex, MessageStore};
use crate::model::{NavigationTarget, SearchResult};
use crate::navigation::NavigationController;
use crate::search::{SearchEngine, SearchMode, SearchOptions};
use crate::settings::{Settings, SettingsStore};

/// What the host's scroll collaborator did with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The element was found and smooth-scrolled into view.
    Scrolled,
    /// The floor is valid but its element is not currently rendered.
    NotLoaded,
}

/// Scroll-to-element side effect provided by the host renderer.
pub trait ScrollSink {
    /// Scroll the element for a validated floor into view.
    fn scroll_to(&mut self, target: NavigationTarget) -> ScrollOutcome;
}

/// User-facing error toasts provided by the host.
pub trait Notifier {
    /// Surface a non-fatal, user-visible condition.
    fn notify(&mut self, error: &NavigatorError);
}

/// The navigator panel: UI events in, core calls and side effects out.
#[derive(Debug)]
pub struct Panel<C, N, P> {
    scroll: C,
    notifier: N,
    settings: P,
    highlighter: Highlighter,
    nav: NavigationController,
}

impl<C, N, P> Panel<C, N, P>
where
    C: ScrollSink,
    N: Notifier,
    P: SettingsStore,
{
    /// Create a panel wired to the host's collaborators.
    pub fn new(scroll: C, notifier: N, settings: P) -> Self {
        Self {
            scroll,
            notifier,
            settings,
            highlighter: Highlighter::new(),
            nav: NavigationController::new(),
        }
    }

    /// Use a custom highlighter (marker or case policy).
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Current settings, re-read from the injected store.
    pub fn settings(&self) -> Settings {
        self.settings.get()
    }

    /// Replace the settings, writing through the injected store.
    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        self.settings.set(settings)
    }

    /// Handle a keystroke in the search box.
    ///
    /// In incremental mode this runs a search and returns the new result
    /// list; an empty or blank keyword returns an empty list, which the
    /// host renders as cleared results. In on-demand mode keystrokes do
    /// nothing until [`search_request`](Self::search_request).
    #[instrument(skip(self, store), fields(len = store.len()))]
    pub fn keyword_input<S: MessageStore + ?Sized>(
        &mut self,
        keyword: &str,
        store: &S,
    ) -> Vec<SearchResult> {
        if !self.settings.get().incremental_search {
            return Vec::new();
        }
        let index = MessageIndex::new(store);
        self.engine(SearchMode::Incremental).search(keyword, &index)
    }

    /// Handle an explicit search request (the confirm button).
    ///
    /// A non-empty keyword with no hits is surfaced as
    /// [`NavigatorError::NoMatch`] through the notifier and returned.
    #[instrument(skip(self, store), fields(len = store.len()))]
    pub fn search_request<S: MessageStore + ?Sized>(
        &mut self,
        keyword: &str,
        store: &S,
    ) -> Result<Vec<SearchResult>> {
        let index = MessageIndex::new(store);
        let result = self
            .engine(SearchMode::OnDemand)
            .search_or_no_match(keyword, &index);
        self.report(result)
    }

    /// Handle the user picking a result from the list.
    ///
    /// Validates the floor, scrolls to it, and when highlighting is enabled
    /// returns the message text with the keyword marked up for the
    /// renderer. `None` means highlighting is disabled.
    #[instrument(skip(self, store))]
    pub fn select_result<S: MessageStore + ?Sized>(
        &mut self,
        keyword: &str,
        floor: usize,
        store: &S,
    ) -> Result<Option<String>> {
        let index = MessageIndex::new(store);
        let result = self
            .nav
            .jump_to(&index, floor)
            .and_then(|target| self.scroll(target))
            .and_then(|target| self.highlight_at(keyword, target.floor, &index));
        self.report(result)
    }

    /// Legacy behavior: jump straight to the earliest matching message.
    ///
    /// Earlier navigator versions auto-scrolled on search instead of
    /// presenting a result list. Kept as an explicit opt-in for hosts that
    /// still want it.
    #[instrument(skip(self, store), fields(len = store.len()))]
    pub fn auto_scroll_first_match<S: MessageStore + ?Sized>(
        &mut self,
        keyword: &str,
        store: &S,
    ) -> Result<Option<String>> {
        let index = MessageIndex::new(store);
        let result = self
            .engine(SearchMode::OnDemand)
            .first_match(keyword, &index)
            .ok_or_else(|| NavigatorError::no_match(keyword))
            .and_then(|floor| self.scroll(NavigationTarget { floor }))
            .and_then(|target| self.highlight_at(keyword, target.floor, &index));
        self.report(result)
    }

    /// Scroll to the first message ever (the "up" button).
    pub fn scroll_to_first<S: MessageStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> Result<NavigationTarget> {
        let index = MessageIndex::new(store);
        let result = self.nav.first(&index).and_then(|t| self.scroll(t));
        self.report(result)
    }

    /// Scroll to the last message (the "down" button).
    pub fn scroll_to_last<S: MessageStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> Result<NavigationTarget> {
        let index = MessageIndex::new(store);
        let result = self.nav.last(&index).and_then(|t| self.scroll(t));
        self.report(result)
    }

    /// Scroll to the earliest message the host currently has rendered.
    pub fn scroll_to_first_loaded<S: MessageStore + ?Sized>(
        &mut self,
        store: &S,
        loaded: &[usize],
    ) -> Result<NavigationTarget> {
        let index = MessageIndex::new(store);
        let result = self
            .nav
            .first_loaded(&index, loaded)
            .and_then(|t| self.scroll(t));
        self.report(result)
    }

    /// Handle the jump popup's confirmed floor input.
    #[instrument(skip(self, store), fields(len = store.len()))]
    pub fn jump_to_floor<S: MessageStore + ?Sized>(
        &mut self,
        floor: usize,
        store: &S,
    ) -> Result<NavigationTarget> {
        let index = MessageIndex::new(store);
        let result = self.nav.jump_to(&index, floor).and_then(|t| self.scroll(t));
        self.report(result)
    }

    /// Live preview line for the jump popup while the user types.
    ///
    /// `Floor N: <bounded preview>` for valid floors; out-of-range input
    /// is returned as an error for the popup to display inline (it is not
    /// toasted, since the user is still typing).
    pub fn floor_preview<S: MessageStore + ?Sized>(&self, floor: usize, store: &S) -> Result<String> {
        let index = MessageIndex::new(store);
        let message = index.at(floor)?;
        Ok(format!("Floor {}: {}", message.floor, message.preview()))
    }

    fn engine(&self, mode: SearchMode) -> SearchEngine {
        SearchEngine::new(SearchOptions {
            mode,
            ..SearchOptions::default()
        })
    }

    fn scroll(&mut self, target: NavigationTarget) -> Result<NavigationTarget> {
        match self.scroll.scroll_to(target) {
            ScrollOutcome::Scrolled => Ok(target),
            ScrollOutcome::NotLoaded => {
                debug!(floor = target.floor, "Scroll target not rendered");
                Err(NavigatorError::NotLoaded {
                    floor: target.floor,
                })
            }
        }
    }

    fn highlight_at<S: MessageStore + ?Sized>(
        &self,
        keyword: &str,
        floor: usize,
        index: &MessageIndex<'_, S>,
    ) -> Result<Option<String>> {
        if !self.settings.get().highlight_enabled {
            return Ok(None);
        }
        let message = index.at(floor)?;
        self.highlighter.apply(&message.text, keyword).map(Some)
    }

    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if err.is_user_visible() {
                self.notifier.notify(err);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::settings::InMemorySettings;

    /// Scroll sink that records requests and can simulate unrendered floors.
    #[derive(Debug, Default)]
    struct RecordingScroll {
        calls: Vec<usize>,
        unloaded: Vec<usize>,
    }

    impl ScrollSink for &mut RecordingScroll {
        fn scroll_to(&mut self, target: NavigationTarget) -> ScrollOutcome {
            self.calls.push(target.floor);
            if self.unloaded.contains(&target.floor) {
                ScrollOutcome::NotLoaded
            } else {
                ScrollOutcome::Scrolled
            }
        }
    }

    /// Notifier that records toast messages.
    #[derive(Debug, Default)]
    struct RecordingNotifier {
        toasts: Vec<String>,
    }

    impl Notifier for &mut RecordingNotifier {
        fn notify(&mut self, error: &NavigatorError) {
            self.toasts.push(error.to_string());
        }
    }

    fn panel<'a>(
        scroll: &'a mut RecordingScroll,
        notifier: &'a mut RecordingNotifier,
        settings: Settings,
    ) -> Panel<&'a mut RecordingScroll, &'a mut RecordingNotifier, InMemorySettings> {
        Panel::new(scroll, notifier, InMemorySettings::new(settings))
    }

    #[test]
    fn test_keyword_input_searches_in_incremental_mode() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        let mut panel = panel(&mut scroll, &mut notifier, Settings::default());

        let chat = vec!["hello world", "foo", "hello again"];
        let results = panel.keyword_input("hello", &chat);

        let floors: Vec<usize> = results.iter().map(|r| r.floor).collect();
        assert_eq!(floors, vec![0, 2]);
    }

    #[test]
    fn test_keyword_input_is_noop_in_on_demand_mode() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        let settings = Settings {
            incremental_search: false,
            ..Settings::default()
        };
        let mut panel = panel(&mut scroll, &mut notifier, settings);

        let chat = vec!["hello world"];
        assert!(panel.keyword_input("hello", &chat).is_empty());
    }

    #[test]
    fn test_search_request_notifies_no_match() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        {
            let mut panel = panel(&mut scroll, &mut notifier, Settings::default());
            let chat = vec!["hello world"];
            let err = panel.search_request("zzz", &chat).unwrap_err();
            assert!(matches!(err, NavigatorError::NoMatch { .. }));
        }
        assert_eq!(notifier.toasts, vec!["No messages match \"zzz\""]);
    }

    #[test]
    fn test_select_result_scrolls_and_highlights() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        {
            let mut panel = panel(&mut scroll, &mut notifier, Settings::default());
            let chat = vec!["hello world", "foo"];
            let markup = panel.select_result("world", 0, &chat).unwrap();
            assert_eq!(
                markup.as_deref(),
                Some(r#"hello <span class="highlight">world</span>"#)
            );
        }
        assert_eq!(scroll.calls, vec![0]);
        assert!(notifier.toasts.is_empty());
    }

    #[test]
    fn test_select_result_without_highlighting() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        let settings = Settings {
            highlight_enabled: false,
            ..Settings::default()
        };
        {
            let mut panel = panel(&mut scroll, &mut notifier, settings);
            let chat = vec!["hello world"];
            assert_eq!(panel.select_result("world", 0, &chat).unwrap(), None);
        }
        assert_eq!(scroll.calls, vec![0]);
    }

    #[test]
    fn test_select_result_rejects_out_of_range_without_scrolling() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        {
            let mut panel = panel(&mut scroll, &mut notifier, Settings::default());
            let chat = vec!["hello world"];
            let err = panel.select_result("hello", 5, &chat).unwrap_err();
            assert!(matches!(err, NavigatorError::OutOfRange { floor: 5, len: 1 }));
        }
        assert!(scroll.calls.is_empty());
        assert_eq!(notifier.toasts.len(), 1);
    }

    #[test]
    fn test_unrendered_floor_is_reported_not_swallowed() {
        let mut scroll = RecordingScroll {
            unloaded: vec![1],
            ..RecordingScroll::default()
        };
        let mut notifier = RecordingNotifier::default();
        {
            let mut panel = panel(&mut scroll, &mut notifier, Settings::default());
            let chat = vec!["a", "b"];
            let err = panel.jump_to_floor(1, &chat).unwrap_err();
            assert!(matches!(err, NavigatorError::NotLoaded { floor: 1 }));
        }
        assert_eq!(notifier.toasts, vec!["Message 1 is not loaded"]);
    }

    #[test]
    fn test_auto_scroll_first_match_legacy_mode() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        {
            let mut panel = panel(&mut scroll, &mut notifier, Settings::default());
            let chat = vec!["foo", "needle here", "needle again"];
            let markup = panel.auto_scroll_first_match("needle", &chat).unwrap();
            assert!(markup.unwrap().contains(r#"<span class="highlight">needle</span>"#));
        }
        assert_eq!(scroll.calls, vec![1]);
    }

    #[test]
    fn test_navigation_buttons() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        {
            let mut panel = panel(&mut scroll, &mut notifier, Settings::default());
            let chat = vec!["a", "b", "c", "d"];

            assert_eq!(panel.scroll_to_first(&chat).unwrap().floor, 0);
            assert_eq!(panel.scroll_to_last(&chat).unwrap().floor, 3);
            assert_eq!(
                panel.scroll_to_first_loaded(&chat, &[3, 1, 2]).unwrap().floor,
                1
            );
        }
        assert_eq!(scroll.calls, vec![0, 3, 1]);
    }

    #[test]
    fn test_empty_chat_notifies_and_returns_error() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        {
            let mut panel = panel(&mut scroll, &mut notifier, Settings::default());
            let chat: Vec<&str> = Vec::new();

            assert!(matches!(
                panel.scroll_to_first(&chat).unwrap_err(),
                NavigatorError::EmptyChat
            ));
            assert!(matches!(
                panel.scroll_to_first_loaded(&chat, &[]).unwrap_err(),
                NavigatorError::NothingLoaded
            ));
        }
        assert!(scroll.calls.is_empty());
        assert_eq!(notifier.toasts.len(), 2);
    }

    #[test]
    fn test_floor_preview_formats_line() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        let panel = panel(&mut scroll, &mut notifier, Settings::default());

        let long = "x".repeat(80);
        let chat = vec!["short", long.as_str()];
        assert_eq!(panel.floor_preview(0, &chat).unwrap(), "Floor 0: short");

        let long = panel.floor_preview(1, &chat).unwrap();
        assert!(long.starts_with("Floor 1: "));
        assert!(long.ends_with("..."));

        assert!(panel.floor_preview(9, &chat).is_err());
    }

    #[test]
    fn test_update_settings_takes_effect_on_next_event() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        let mut panel = panel(&mut scroll, &mut notifier, Settings::default());

        let chat = vec!["hello world"];
        assert_eq!(panel.keyword_input("hello", &chat).len(), 1);

        panel
            .update_settings(Settings {
                incremental_search: false,
                ..Settings::default()
            })
            .unwrap();

        assert!(panel.keyword_input("hello", &chat).is_empty());
    }

    #[test]
    fn test_store_growth_is_observed_per_event() {
        let mut scroll = RecordingScroll::default();
        let mut notifier = RecordingNotifier::default();
        let mut panel = panel(&mut scroll, &mut notifier, Settings::default());

        let mut chat = vec!["hello".to_string()];
        assert_eq!(panel.keyword_input("hello", &chat).len(), 1);

        chat.push("hello again".to_string());
        assert_eq!(panel.keyword_input("hello", &chat).len(), 2);
    }
}
