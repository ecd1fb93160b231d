//! Reader navigation controller
//!
//! The [`Navigator`] owns the session state and the active view. It never
//! performs I/O itself: navigation actions return a [`Request`] for the
//! dispatcher to execute, and the dispatcher hands back an [`Outcome`] which
//! is fed to [`Navigator::apply`].
//!
//! Every request carries the epoch it was issued under. Issuing a new request
//! bumps the epoch, so an outcome that arrives after a newer navigation
//! action no longer matches and is dropped.

use super::error::{NavError, Result};
use super::session::{Pagination, SessionState, View};
use super::theme::ThemeMode;
use crate::api::{ApiError, Book, BookMetadata, Chapter, ChapterContent};
use crate::prefs::PreferenceStore;

/// Epoch a request was issued under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// What a request loads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Library,
    Chapters,
    Content,
}

/// A load the navigator wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Fetch the book list
    Library { token: RequestToken },
    /// Fetch a book's chapter list and metadata
    Chapters { token: RequestToken, book: String },
    /// Fetch one chapter's content
    Content {
        token: RequestToken,
        book: String,
        chapter: u32,
    },
}

impl Request {
    #[must_use]
    pub const fn token(&self) -> RequestToken {
        match self {
            Self::Library { token }
            | Self::Chapters { token, .. }
            | Self::Content { token, .. } => *token,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self {
            Self::Library { .. } => RequestKind::Library,
            Self::Chapters { .. } => RequestKind::Chapters,
            Self::Content { .. } => RequestKind::Content,
        }
    }
}

/// Chapter list plus best-effort metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub chapters: Vec<Chapter>,
    pub metadata: Option<BookMetadata>,
}

/// Result of executing a [`Request`]
#[derive(Debug)]
pub enum Outcome {
    Library {
        token: RequestToken,
        result: std::result::Result<Vec<Book>, ApiError>,
    },
    Chapters {
        token: RequestToken,
        book: String,
        result: std::result::Result<BookDetails, ApiError>,
    },
    Content {
        token: RequestToken,
        chapter: u32,
        result: std::result::Result<ChapterContent, ApiError>,
    },
}

impl Outcome {
    #[must_use]
    pub const fn token(&self) -> RequestToken {
        match self {
            Self::Library { token, .. }
            | Self::Chapters { token, .. }
            | Self::Content { token, .. } => *token,
        }
    }
}

/// The chapter currently shown in the reading view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingPage {
    pub chapter: u32,
    pub title: String,
    pub body: String,
}

/// Navigation state machine
#[derive(Debug, Default)]
pub struct Navigator {
    session: SessionState,
    view: View,
    theme: ThemeMode,
    epoch: RequestToken,
    in_flight: Option<RequestKind>,
    library: Vec<Book>,
    chapters: Vec<Chapter>,
    metadata: Option<BookMetadata>,
    page: Option<ReadingPage>,
    pagination: Pagination,
    alert: Option<String>,
    view_switches: u64,
    reveal_request: Option<u32>,
}

impl Navigator {
    /// Create a navigator on the home view
    #[must_use]
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Resolve the starting theme from the store and the platform
    ///
    /// Nothing is written to the store here; only explicit toggles persist.
    #[must_use]
    pub fn initial_theme(store: &dyn PreferenceStore, platform: Option<ThemeMode>) -> ThemeMode {
        let persisted = store.theme().unwrap_or_else(|e| {
            tracing::warn!("Failed to read theme preference: {e}");
            None
        });
        ThemeMode::resolve(persisted, platform)
    }

    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Books listed on the home view
    #[must_use]
    pub fn library(&self) -> &[Book] {
        &self.library
    }

    /// Chapters of the active book, in server order
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Metadata of the active book, if the server provided any
    #[must_use]
    pub const fn metadata(&self) -> Option<&BookMetadata> {
        self.metadata.as_ref()
    }

    /// The chapter shown in the reading view
    #[must_use]
    pub const fn page(&self) -> Option<&ReadingPage> {
        self.page.as_ref()
    }

    /// Prev/next enablement as of the last successful content load
    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Pending blocking alert message
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Kind of the request still awaited, if any
    #[must_use]
    pub const fn loading(&self) -> Option<RequestKind> {
        self.in_flight
    }

    /// Stop waiting on the request issued under `token`
    ///
    /// Used when a request could not be started. Does nothing if a newer
    /// request has been issued since.
    pub fn abandon(&mut self, token: RequestToken) {
        if token == self.epoch {
            tracing::debug!(token = token.value(), "abandoning request");
            self.in_flight = None;
        }
    }

    /// Current request epoch
    #[must_use]
    pub const fn epoch(&self) -> RequestToken {
        self.epoch
    }

    /// Counter bumped on every view switch; observers reset scroll when it moves
    #[must_use]
    pub const fn view_switches(&self) -> u64 {
        self.view_switches
    }

    /// Book identifier of the `index`-th library entry
    #[must_use]
    pub fn book_at(&self, index: usize) -> Option<&str> {
        self.library.get(index).map(|b| b.book_name.as_str())
    }

    /// Chapter number of the `index`-th chapter-list entry
    #[must_use]
    pub fn chapter_at(&self, index: usize) -> Option<u32> {
        self.chapters.get(index).map(|c| c.chapter_num)
    }

    /// Make `view` the only active view and scroll it to the top
    pub const fn switch_view(&mut self, view: View) {
        self.view = view;
        self.view_switches += 1;
    }

    pub const fn show_home(&mut self) {
        self.switch_view(View::Home);
    }

    /// Return to the chapter list and ask for the current chapter to be revealed
    pub fn show_chapters(&mut self) {
        self.switch_view(View::ChapterList);
        self.reveal_request = Some(self.session.current_chapter());
    }

    /// Take the pending chapter-list reveal request
    pub fn take_reveal_request(&mut self) -> Option<u32> {
        self.reveal_request.take()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    fn issue(&mut self, kind: RequestKind) -> RequestToken {
        self.epoch = self.epoch.next();
        self.in_flight = Some(kind);
        self.epoch
    }

    /// Request the book list
    pub fn load_library(&mut self) -> Request {
        let token = self.issue(RequestKind::Library);
        tracing::debug!(token = token.value(), "loading library");
        Request::Library { token }
    }

    /// Select `book` and request its chapters and metadata
    ///
    /// The active book changes immediately so its name can be shown while
    /// the request is pending.
    pub fn load_chapters(&mut self, book: &str) -> Request {
        self.session.select_book(book);
        let token = self.issue(RequestKind::Chapters);
        tracing::debug!(token = token.value(), book, "loading chapters");
        Request::Chapters {
            token,
            book: book.to_string(),
        }
    }

    /// Point the session at `chapter` and request its content
    ///
    /// The pointer moves before the content arrives; a failed load leaves it
    /// on the requested chapter.
    ///
    /// # Errors
    ///
    /// Returns `NavError::NoActiveBook` if no book is selected and
    /// `NavError::ChapterOutOfRange` if `chapter` is not in the loaded list.
    pub fn load_content(&mut self, chapter: u32) -> Result<Request> {
        if !self.session.has_active_book() {
            return Err(NavError::NoActiveBook);
        }
        self.session.set_current_chapter(chapter)?;
        let token = self.issue(RequestKind::Content);
        tracing::debug!(token = token.value(), chapter, "loading content");
        Ok(Request::Content {
            token,
            book: self.session.active_book().to_string(),
            chapter,
        })
    }

    /// Request the previous chapter, if there is one
    pub fn prev_chapter(&mut self) -> Option<Request> {
        if !self.session.can_go_prev() {
            return None;
        }
        self.load_content(self.session.current_chapter() - 1).ok()
    }

    /// Request the next chapter, if there is one
    pub fn next_chapter(&mut self) -> Option<Request> {
        if !self.session.can_go_next() {
            return None;
        }
        self.load_content(self.session.current_chapter() + 1).ok()
    }

    /// Flip the theme and persist the explicit choice
    ///
    /// The in-memory mode flips even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns `NavError::Preferences` if the store cannot be written.
    pub fn toggle_theme(&mut self, store: &mut dyn PreferenceStore) -> Result<ThemeMode> {
        self.theme = self.theme.toggled();
        store.set_theme(self.theme)?;
        Ok(self.theme)
    }

    /// Apply the outcome of a request
    ///
    /// Returns `true` when state changed. Outcomes from superseded requests
    /// are discarded.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        let token = outcome.token();
        if token != self.epoch {
            tracing::debug!(
                token = token.value(),
                epoch = self.epoch.value(),
                "discarding stale response"
            );
            return false;
        }
        self.in_flight = None;

        match outcome {
            Outcome::Library { result, .. } => match result {
                Ok(books) => {
                    tracing::info!(count = books.len(), "library loaded");
                    self.library = books;
                    true
                }
                Err(e) => {
                    tracing::error!("Failed to load library: {e}");
                    false
                }
            },
            Outcome::Chapters { book, result, .. } => match result {
                Ok(details) => {
                    let total = u32::try_from(details.chapters.len()).unwrap_or(u32::MAX);
                    tracing::info!(book = %book, total, "chapters loaded");
                    self.session.set_total_chapters(total);
                    self.chapters = details.chapters;
                    self.metadata = details.metadata;
                    self.switch_view(View::ChapterList);
                    true
                }
                Err(e) => {
                    let err = NavError::ChaptersNotFound(e.to_string());
                    tracing::warn!(book = %book, "{err}");
                    self.alert = Some(err.to_string());
                    true
                }
            },
            Outcome::Content {
                chapter, result, ..
            } => match result {
                Ok(content) => {
                    self.page = Some(ReadingPage {
                        chapter,
                        title: content.title,
                        body: content.content,
                    });
                    self.pagination = self.session.pagination();
                    self.switch_view(View::Reading);
                    true
                }
                Err(e) => {
                    tracing::debug!(chapter, "content load failed: {e}");
                    false
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;
    use crate::testing::{books, chapters};

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            body: "missing".to_string(),
        }
    }

    fn content(title: &str) -> ChapterContent {
        ChapterContent {
            title: title.to_string(),
            content: format!("{title} body"),
        }
    }

    /// Navigator with `count` chapters of "Book" loaded
    fn loaded(count: u32) -> Navigator {
        let mut nav = Navigator::new(ThemeMode::Light);
        let request = nav.load_chapters("Book");
        assert!(nav.apply(Outcome::Chapters {
            token: request.token(),
            book: "Book".to_string(),
            result: Ok(BookDetails {
                chapters: chapters(count),
                metadata: None,
            }),
        }));
        nav
    }

    fn read(nav: &mut Navigator, chapter: u32) {
        let request = nav.load_content(chapter).unwrap();
        assert!(nav.apply(Outcome::Content {
            token: request.token(),
            chapter,
            result: Ok(content(&format!("Chapter {chapter}"))),
        }));
    }

    #[test]
    fn test_starts_on_home() {
        let nav = Navigator::new(ThemeMode::Dark);
        assert_eq!(nav.view(), View::Home);
        assert_eq!(nav.theme(), ThemeMode::Dark);
        assert!(nav.loading().is_none());
    }

    #[test]
    fn test_switch_view_bumps_counter() {
        let mut nav = Navigator::default();
        for view in View::ALL {
            let before = nav.view_switches();
            nav.switch_view(view);
            assert_eq!(nav.view(), view);
            assert_eq!(nav.view_switches(), before + 1);
        }
    }

    #[test]
    fn test_library_success_and_failure() {
        let mut nav = Navigator::default();
        let request = nav.load_library();
        assert_eq!(nav.loading(), Some(RequestKind::Library));

        assert!(nav.apply(Outcome::Library {
            token: request.token(),
            result: Ok(books(&["A", "B"])),
        }));
        assert_eq!(nav.book_at(1), Some("B"));
        assert!(nav.loading().is_none());

        let request = nav.load_library();
        assert!(!nav.apply(Outcome::Library {
            token: request.token(),
            result: Err(not_found()),
        }));
        assert_eq!(nav.view(), View::Home);
        assert!(nav.alert().is_none());
        assert_eq!(nav.library().len(), 2);
    }

    #[test]
    fn test_chapters_success_switches_view() {
        let nav = loaded(5);
        assert_eq!(nav.view(), View::ChapterList);
        assert_eq!(nav.session().active_book(), "Book");
        assert_eq!(nav.session().total_chapters(), 5);
        assert_eq!(nav.chapter_at(4), Some(5));
    }

    #[test]
    fn test_active_book_is_set_before_response() {
        let mut nav = Navigator::default();
        let _ = nav.load_chapters("Pending");
        assert_eq!(nav.session().active_book(), "Pending");
        assert_eq!(nav.view(), View::Home);
    }

    #[test]
    fn test_chapters_failure_raises_alert_and_keeps_view() {
        let mut nav = Navigator::default();
        let request = nav.load_chapters("Missing");
        nav.apply(Outcome::Chapters {
            token: request.token(),
            book: "Missing".to_string(),
            result: Err(not_found()),
        });

        assert_eq!(nav.view(), View::Home);
        let alert = nav.alert().unwrap();
        assert!(alert.starts_with("Chapters not found"));

        nav.dismiss_alert();
        assert!(nav.alert().is_none());
    }

    #[test]
    fn test_content_success_switches_to_reading() {
        let mut nav = loaded(5);
        read(&mut nav, 1);

        assert_eq!(nav.view(), View::Reading);
        let page = nav.page().unwrap();
        assert_eq!(page.chapter, 1);
        assert_eq!(page.title, "Chapter 1");
        assert_eq!(
            nav.pagination(),
            Pagination {
                prev_enabled: false,
                next_enabled: true
            }
        );

        read(&mut nav, 5);
        assert_eq!(
            nav.pagination(),
            Pagination {
                prev_enabled: true,
                next_enabled: false
            }
        );
    }

    #[test]
    fn test_content_failure_leaves_page_untouched() {
        let mut nav = loaded(5);
        read(&mut nav, 2);
        let before = nav.page().cloned();
        let switches = nav.view_switches();

        let request = nav.load_content(3).unwrap();
        assert!(!nav.apply(Outcome::Content {
            token: request.token(),
            chapter: 3,
            result: Err(not_found()),
        }));

        assert_eq!(nav.page().cloned(), before);
        assert_eq!(nav.view(), View::Reading);
        assert_eq!(nav.view_switches(), switches);
        assert!(nav.alert().is_none());
        // The pointer was moved eagerly and stays on the failed chapter
        assert_eq!(nav.session().current_chapter(), 3);
        assert_eq!(
            nav.pagination(),
            Pagination {
                prev_enabled: true,
                next_enabled: true
            }
        );
    }

    #[test]
    fn test_load_content_validates_range() {
        let mut nav = loaded(3);
        assert!(matches!(
            nav.load_content(4),
            Err(NavError::ChapterOutOfRange { chapter: 4, total: 3 })
        ));
        assert!(matches!(
            Navigator::default().load_content(1),
            Err(NavError::NoActiveBook)
        ));
    }

    #[test]
    fn test_prev_is_noop_on_first_chapter() {
        let mut nav = loaded(5);
        read(&mut nav, 1);
        let epoch = nav.epoch();

        assert!(nav.prev_chapter().is_none());
        assert_eq!(nav.epoch(), epoch);
        assert_eq!(nav.session().current_chapter(), 1);
    }

    #[test]
    fn test_next_is_noop_on_last_chapter() {
        let mut nav = loaded(5);
        read(&mut nav, 5);

        assert!(nav.next_chapter().is_none());
        assert_eq!(nav.session().current_chapter(), 5);
    }

    #[test]
    fn test_prev_and_next_delegate() {
        let mut nav = loaded(5);
        read(&mut nav, 3);

        match nav.next_chapter() {
            Some(Request::Content { chapter, book, .. }) => {
                assert_eq!(chapter, 4);
                assert_eq!(book, "Book");
            }
            other => panic!("unexpected request: {other:?}"),
        }
        match nav.prev_chapter() {
            Some(Request::Content { chapter, .. }) => assert_eq!(chapter, 3),
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_stale_chapters_response_is_discarded() {
        let mut nav = Navigator::default();
        let first = nav.load_chapters("First");
        let second = nav.load_chapters("Second");

        assert!(!nav.apply(Outcome::Chapters {
            token: first.token(),
            book: "First".to_string(),
            result: Ok(BookDetails {
                chapters: chapters(9),
                metadata: None,
            }),
        }));
        assert_eq!(nav.view(), View::Home);
        assert_eq!(nav.session().total_chapters(), 0);
        assert_eq!(nav.loading(), Some(RequestKind::Chapters));

        assert!(nav.apply(Outcome::Chapters {
            token: second.token(),
            book: "Second".to_string(),
            result: Ok(BookDetails {
                chapters: chapters(2),
                metadata: None,
            }),
        }));
        assert_eq!(nav.session().total_chapters(), 2);
        assert_eq!(nav.session().active_book(), "Second");
    }

    #[test]
    fn test_stale_content_response_is_discarded() {
        let mut nav = loaded(5);
        let slow = nav.load_content(2).unwrap();
        let fast = nav.load_content(4).unwrap();

        assert!(nav.apply(Outcome::Content {
            token: fast.token(),
            chapter: 4,
            result: Ok(content("Four")),
        }));
        assert!(!nav.apply(Outcome::Content {
            token: slow.token(),
            chapter: 2,
            result: Ok(content("Two")),
        }));

        assert_eq!(nav.page().unwrap().title, "Four");
        assert_eq!(nav.session().current_chapter(), 4);
    }

    #[test]
    fn test_stale_failure_raises_no_alert() {
        let mut nav = Navigator::default();
        let first = nav.load_chapters("Broken");
        let _ = nav.load_chapters("Fine");

        nav.apply(Outcome::Chapters {
            token: first.token(),
            book: "Broken".to_string(),
            result: Err(not_found()),
        });
        assert!(nav.alert().is_none());
    }

    #[test]
    fn test_show_chapters_requests_reveal_of_current_chapter() {
        let mut nav = loaded(10);
        read(&mut nav, 7);

        nav.show_chapters();
        assert_eq!(nav.view(), View::ChapterList);
        assert_eq!(nav.take_reveal_request(), Some(7));
        assert_eq!(nav.take_reveal_request(), None);
    }

    #[test]
    fn test_new_book_replaces_metadata() {
        let mut nav = Navigator::default();
        let request = nav.load_chapters("A");
        nav.apply(Outcome::Chapters {
            token: request.token(),
            book: "A".to_string(),
            result: Ok(BookDetails {
                chapters: chapters(1),
                metadata: Some(BookMetadata::default()),
            }),
        });
        assert!(nav.metadata().is_some());

        let request = nav.load_chapters("B");
        nav.apply(Outcome::Chapters {
            token: request.token(),
            book: "B".to_string(),
            result: Ok(BookDetails {
                chapters: chapters(1),
                metadata: None,
            }),
        });
        assert!(nav.metadata().is_none());
    }

    #[test]
    fn test_initial_theme_does_not_persist_platform_choice() {
        let prefs = MemoryPreferences::default();
        let mode = Navigator::initial_theme(&prefs, Some(ThemeMode::Dark));

        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.affordance().text, "Light mode");
        assert_eq!(prefs.writes(), 0);
        assert_eq!(prefs.theme().unwrap(), None);
    }

    #[test]
    fn test_toggle_twice_restores_persisted_value() {
        let mut prefs = MemoryPreferences::new(Some(ThemeMode::Light));
        let mut nav = Navigator::new(Navigator::initial_theme(&prefs, Some(ThemeMode::Dark)));
        let original = nav.theme().affordance();
        assert_eq!(nav.theme(), ThemeMode::Light);

        assert_eq!(nav.toggle_theme(&mut prefs).unwrap(), ThemeMode::Dark);
        assert_eq!(prefs.theme().unwrap(), Some(ThemeMode::Dark));

        assert_eq!(nav.toggle_theme(&mut prefs).unwrap(), ThemeMode::Light);
        assert_eq!(prefs.theme().unwrap(), Some(ThemeMode::Light));
        assert_eq!(nav.theme().affordance(), original);
    }

    #[test]
    fn test_abandon_clears_loading_for_current_request_only() {
        let mut nav = Navigator::new(ThemeMode::Light);
        let stale = nav.load_library().token();
        let current = nav.load_chapters("Book").token();

        nav.abandon(stale);
        assert_eq!(nav.loading(), Some(RequestKind::Chapters));

        nav.abandon(current);
        assert_eq!(nav.loading(), None);
        assert_eq!(nav.view(), View::Home);
    }
}
