//! The interactive reader
//!
//! [`ReaderApp`] glues the navigator to the terminal: key presses become
//! navigator calls, the resulting requests go to the dispatcher, and
//! outcomes are applied back on the UI thread between frames.

use super::events::{Action, poll_action};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{
    AlertDialog, BookInfo, HelpBar, HelpOverlay, ItemList, ListRow, ReadingPane, StatusBar,
};
use crate::api::BookApi;
use crate::prefs::PreferenceStore;
use crate::reader::{Dispatcher, Navigator, Request, RequestToken, ThemeMode, View};
use crate::ui::error::Result;
use crate::ui::output::MessageLevel;
use crate::ui::text::sanitize_line;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(16);
const BOOK_INFO_HEIGHT: u16 = 7;
/// Border plus the book name, used when the server has no metadata
const BOOK_NAME_HEIGHT: u16 = 3;

/// Terminal reader application
pub struct ReaderApp {
    navigator: Navigator,
    dispatcher: Dispatcher,
    prefs: Box<dyn PreferenceStore>,
    state: AppState,
}

impl ReaderApp {
    /// Create the app with its theme resolved from `prefs` and `platform`
    #[must_use]
    pub fn new(
        api: Arc<dyn BookApi>,
        prefs: Box<dyn PreferenceStore>,
        platform: Option<ThemeMode>,
        message_ttl: Duration,
    ) -> Self {
        let theme = Navigator::initial_theme(prefs.as_ref(), platform);
        tracing::info!(theme = theme.as_str(), "starting reader");
        Self {
            navigator: Navigator::new(theme),
            dispatcher: Dispatcher::new(api),
            prefs,
            state: AppState::new(message_ttl),
        }
    }

    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Kick off the initial library load
    pub fn start(&mut self) {
        let request = self.navigator.load_library();
        self.submit(request);
    }

    fn submit(&mut self, request: Request) {
        let token = request.token();
        if let Err(e) = self.dispatcher.submit(request) {
            self.abandon(token, &e);
        }
    }

    /// Give up on a request that could not be started
    fn abandon(&mut self, token: RequestToken, err: &io::Error) {
        self.navigator.abandon(token);
        self.state
            .add_message(MessageLevel::Error, format!("Could not start request: {err}"));
    }

    /// Perform one user action
    pub fn handle_action(&mut self, action: Action) {
        let height = self.state.visible_height;
        let view = self.navigator.view();

        match action {
            Action::Quit => self.state.should_exit = true,
            Action::ShowHelp => self.state.mode = Mode::Help,
            Action::CloseHelp => self.state.mode = Mode::Normal,
            Action::DismissAlert => self.navigator.dismiss_alert(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Reload => self.start(),
            Action::Up => match view {
                View::Home => self.state.library.up(height),
                View::ChapterList => self.state.chapters.up(height),
                View::Reading => self.scroll_reading(-1),
            },
            Action::Down => match view {
                View::Home => self.state.library.down(height),
                View::ChapterList => self.state.chapters.down(height),
                View::Reading => self.scroll_reading(1),
            },
            Action::PageUp => match view {
                View::Home => self.state.library.page_up(height),
                View::ChapterList => self.state.chapters.page_up(height),
                View::Reading => self.scroll_reading(-isize::try_from(height).unwrap_or(1)),
            },
            Action::PageDown => match view {
                View::Home => self.state.library.page_down(height),
                View::ChapterList => self.state.chapters.page_down(height),
                View::Reading => self.scroll_reading(isize::try_from(height).unwrap_or(1)),
            },
            Action::Top => match view {
                View::Home => self.state.library.jump_to_start(height),
                View::ChapterList => self.state.chapters.jump_to_start(height),
                View::Reading => self.state.reading_scroll = 0,
            },
            Action::Bottom => match view {
                View::Home => self.state.library.jump_to_end(height),
                View::ChapterList => self.state.chapters.jump_to_end(height),
                View::Reading => self.scroll_reading(isize::MAX),
            },
            Action::Open => self.open_selected(),
            Action::Back => match view {
                View::Reading => self.navigator.show_chapters(),
                View::ChapterList => self.navigator.show_home(),
                View::Home => {}
            },
            Action::PrevChapter => {
                if let Some(request) = self.navigator.prev_chapter() {
                    self.submit(request);
                }
            }
            Action::NextChapter => {
                if let Some(request) = self.navigator.next_chapter() {
                    self.submit(request);
                }
            }
            Action::Ignored => {}
        }
    }

    fn open_selected(&mut self) {
        match self.navigator.view() {
            View::Home => {
                let Some(book) = self.navigator.book_at(self.state.library.cursor) else {
                    return;
                };
                let book = book.to_string();
                let request = self.navigator.load_chapters(&book);
                self.submit(request);
            }
            View::ChapterList => {
                let Some(chapter) = self.navigator.chapter_at(self.state.chapters.cursor) else {
                    return;
                };
                match self.navigator.load_content(chapter) {
                    Ok(request) => self.submit(request),
                    Err(e) => {
                        tracing::warn!("Cannot open chapter {chapter}: {e}");
                        self.state.add_message(MessageLevel::Warning, e.to_string());
                    }
                }
            }
            View::Reading => {}
        }
    }

    fn toggle_theme(&mut self) {
        match self.navigator.toggle_theme(self.prefs.as_mut()) {
            Ok(mode) => tracing::info!(theme = mode.as_str(), "theme toggled"),
            Err(e) => {
                tracing::warn!("Failed to save theme preference: {e}");
                self.state.add_message(
                    MessageLevel::Warning,
                    format!("Theme not saved: {e}"),
                );
            }
        }
    }

    fn scroll_reading(&mut self, delta: isize) {
        let max = self.state.reading_max_scroll;
        self.state.scroll_reading(delta, max);
    }

    /// Apply every outcome that has arrived
    ///
    /// Returns `true` if any of them changed state.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        for outcome in self.dispatcher.drain() {
            changed |= self.navigator.apply(outcome);
        }
        if changed {
            self.sync_lists();
        }
        changed
    }

    /// Wait up to `timeout` for one outcome, then apply everything pending
    ///
    /// Returns `true` if state changed.
    pub fn pump_wait(&mut self, timeout: Duration) -> bool {
        let mut changed = self
            .dispatcher
            .recv_timeout(timeout)
            .is_some_and(|outcome| self.navigator.apply(outcome));
        changed |= self.pump();
        if changed {
            self.sync_lists();
        }
        changed
    }

    fn sync_lists(&mut self) {
        self.state.library.set_len(self.navigator.library().len());
        self.state.chapters.set_len(self.navigator.chapters().len());
    }

    /// Advance timers and deferred scrolling to `now`
    pub fn tick(&mut self, now: Instant) {
        self.state.sync_view_switches(self.navigator.view_switches());
        if let Some(chapter) = self.navigator.take_reveal_request() {
            self.state.reveal.request(chapter);
        }

        if let Some(chapter) = self.state.reveal.advance(now) {
            match self
                .navigator
                .chapters()
                .iter()
                .position(|c| c.chapter_num == chapter)
            {
                Some(index) => {
                    let height = self.state.visible_height;
                    self.state.chapters.center_on(index, height);
                }
                None => self.state.reveal.cancel(),
            }
        }
        self.state.chapters.step_scroll();
        self.state.cleanup_messages();
    }

    /// Record that a frame has been drawn
    pub const fn frame_rendered(&mut self, now: Instant) {
        self.state.reveal.frame_rendered(now);
    }

    fn location(&self) -> String {
        let session = self.navigator.session();
        match self.navigator.view() {
            View::Home => format!("{} books", self.navigator.library().len()),
            View::ChapterList => format!(
                "{} · {} chapters",
                sanitize_line(session.active_book()),
                session.total_chapters()
            ),
            View::Reading => format!(
                "{} · chapter {}/{}",
                sanitize_line(session.active_book()),
                session.current_chapter(),
                session.total_chapters()
            ),
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let theme = Theme::for_mode(self.navigator.theme());
        let area = frame.area();
        frame.render_widget(Block::default().style(theme.base_style()), area);

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Content
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        self.render_content(frame, &theme, main_layout[0]);

        let messages: Vec<_> = self.state.active_messages();
        let location = self.location();
        let status_bar = StatusBar::new(
            &messages,
            &theme,
            &location,
            self.navigator.theme().affordance(),
        )
        .loading(self.navigator.loading());
        frame.render_widget(status_bar, main_layout[1]);

        let hints = HelpBar::hints_for(self.navigator.view());
        frame.render_widget(HelpBar::new(&hints, &theme), main_layout[2]);

        if self.state.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(&theme), area);
        }
        if let Some(message) = self.navigator.alert() {
            let message = sanitize_line(message);
            frame.render_widget(AlertDialog::new(&message, &theme), area);
        }
    }

    fn render_content(&mut self, frame: &mut Frame, theme: &Theme, area: Rect) {
        match self.navigator.view() {
            View::Home => {
                self.state.visible_height = area.height.saturating_sub(2) as usize;
                let rows: Vec<ListRow> = self
                    .navigator
                    .library()
                    .iter()
                    .map(|book| {
                        ListRow::new(sanitize_line(&book.book_name))
                            .with_detail(book.author.as_deref().map(sanitize_line))
                    })
                    .collect();
                let list = ItemList::new(&rows, &self.state.library, theme)
                    .title(format!(" Books ({}) ", rows.len()))
                    .empty_text("No books yet");
                frame.render_widget(list, area);
            }
            View::ChapterList => {
                let info_height = if self.navigator.metadata().is_some() {
                    BOOK_INFO_HEIGHT
                } else {
                    BOOK_NAME_HEIGHT
                };
                let chunks =
                    Layout::vertical([Constraint::Length(info_height), Constraint::Min(3)])
                        .split(area);
                self.state.visible_height = chunks[1].height.saturating_sub(2) as usize;

                let info = BookInfo::new(
                    self.navigator.session().active_book(),
                    self.navigator.metadata(),
                    theme,
                );
                frame.render_widget(info, chunks[0]);

                let flashed = self
                    .state
                    .reveal
                    .highlighted_chapter(Instant::now())
                    .and_then(|chapter| {
                        self.navigator
                            .chapters()
                            .iter()
                            .position(|c| c.chapter_num == chapter)
                    });
                let rows: Vec<ListRow> = self
                    .navigator
                    .chapters()
                    .iter()
                    .map(|c| {
                        ListRow::new(format!("{:>4}. {}", c.chapter_num, sanitize_line(&c.title)))
                    })
                    .collect();
                let list = ItemList::new(&rows, &self.state.chapters, theme)
                    .title(format!(" Chapters ({}) ", rows.len()))
                    .flashed(flashed)
                    .empty_text("No chapters");
                frame.render_widget(list, chunks[1]);
            }
            View::Reading => {
                self.state.visible_height = ReadingPane::text_area(area).height as usize;
                let pane = ReadingPane::new(
                    self.navigator.page(),
                    self.navigator.pagination(),
                    theme,
                );
                let max_scroll = pane.max_scroll(area);
                self.state.reading_max_scroll = max_scroll;
                self.state.reading_scroll = self.state.reading_scroll.min(max_scroll);
                frame.render_widget(pane.scroll(self.state.reading_scroll), area);
            }
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the reader until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError::IoError` if the terminal cannot be driven.
    pub fn run(mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal);
        let cleanup = Self::cleanup_terminal();
        result.and(cleanup)
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        self.start();

        while !self.state.should_exit {
            self.pump();
            self.tick(Instant::now());

            terminal.draw(|frame| self.render(frame))?;
            self.frame_rendered(Instant::now());

            let action = poll_action(
                self.navigator.view(),
                self.state.mode,
                self.navigator.alert().is_some(),
                POLL_INTERVAL,
            )?;
            self.handle_action(action);
        }

        tracing::info!("reader closed");
        Ok(())
    }
}
