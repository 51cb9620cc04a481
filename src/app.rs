use crate::config::Config;
use crate::models::{
    Catalog, DraftField, FilterState, Language, Location, Route, Snippet, SnippetDraft,
    SubmitAction, ValidationErrors, embed_markup,
};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);
/// Width of the overlay's ` [x] ` title
pub const CLOSE_MARKER_WIDTH: u16 = 5;

/// Where keyboard input goes on the listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFocus {
    #[default]
    Cards,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormTab {
    #[default]
    Edit,
    Preview,
}

/// The single open detail overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
    pub snippet_id: String,
    pub code_expanded: bool,
    pub scroll: usize,
}

impl DetailOverlay {
    fn new(snippet_id: String) -> Self {
        Self {
            snippet_id,
            code_expanded: true,
            scroll: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddForm {
    pub draft: SnippetDraft,
    pub errors: ValidationErrors,
    pub focused: DraftField,
    pub tab: FormTab,
    /// Set once a submission was accepted; the redirect timer is running.
    pub redirect_pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            shown_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTIFICATION_TTL
    }
}

/// Every state transition the gallery knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    FocusSearch,
    LeaveSearch,
    SearchInput(char),
    SearchBackspace,
    SetQuery(String),
    SelectLanguage(Option<Language>),
    NextLanguage,
    PreviousLanguage,
    CursorDown,
    CursorUp,
    OpenHighlighted,
    Open(String),
    CloseDetail,
    ToggleCode,
    ScrollCode(isize),
    Copy,
    Download,
    Embed,
    Click { column: u16, row: u16 },
    Navigate(Route),
    FormFocusNext,
    FormFocusPrevious,
    FormInput(char),
    FormNewline,
    FormBackspace,
    FormLanguageNext,
    FormLanguagePrevious,
    ToggleFormTab,
    Submit(SubmitAction),
    RedirectElapsed,
    Notify(Notification),
    Tick(Instant),
    ToggleHelp,
    Quit,
}

/// Side effects requested by a transition, run outside the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CopyToClipboard { text: String, success: &'static str },
    Download(Snippet),
    ScheduleRedirect(Duration),
    Quit,
}

/// Main Application State Container
///
/// Holds the catalog and every piece of view state. All changes go through
/// [`App::update`]; the visible list is recomputed from the filter on each read.
#[derive(Debug)]
pub struct App {
    pub catalog: Catalog,
    pub route: Route,
    pub filter: FilterState,
    pub list_focus: ListFocus,
    pub cursor: usize,
    pub detail: Option<DetailOverlay>,
    pub form: AddForm,
    pub notification: Option<Notification>,
    pub show_help: bool,
    pub base_url: String,
    pub redirect_delay: Duration,
    /// Content area of the detail overlay as last drawn
    pub overlay_area: Option<Rect>,
    /// Card rectangles as last drawn, for mouse hit-testing
    pub card_areas: Vec<(Rect, String)>,
    /// Rows of code visible in the overlay as last drawn
    pub code_height: Option<usize>,
}

impl App {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog,
            route: Route::Listing,
            filter: FilterState::default(),
            list_focus: ListFocus::Cards,
            cursor: 0,
            detail: None,
            form: AddForm::default(),
            notification: None,
            show_help: false,
            base_url: config.base_url.clone(),
            redirect_delay: config.redirect_delay(),
            overlay_area: None,
            card_areas: Vec::new(),
            code_height: None,
        }
    }

    /// Restore route and filter from a location string.
    pub fn with_location(mut self, location: &str) -> Self {
        let location = Location::parse(&self.base_url, location);
        self.route = location.route;
        self.filter = location.filter;
        self
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn render(&mut self, frame: &mut Frame) {
        crate::ui::render(frame, self);
    }

    pub fn visible_snippets(&self) -> Vec<&Snippet> {
        self.filter.apply(self.catalog.snippets())
    }

    /// The card under the cursor, if the listing is not empty
    pub fn highlighted(&self) -> Option<&Snippet> {
        let visible = self.visible_snippets();
        let index = self.cursor.min(visible.len().saturating_sub(1));
        visible.get(index).copied()
    }

    pub fn selected_snippet(&self) -> Option<&Snippet> {
        self.detail
            .as_ref()
            .and_then(|detail| self.catalog.get(&detail.snippet_id))
    }

    /// Current address-bar equivalent
    pub fn location(&self) -> Location {
        let filter = match self.route {
            Route::Listing => self.filter.clone(),
            Route::AddSnippet => FilterState::default(),
        };
        Location::new(&self.base_url, self.route, filter)
    }

    /// When the current notification should disappear
    pub fn notification_deadline(&self) -> Option<Instant> {
        self.notification
            .as_ref()
            .map(|n| n.shown_at + NOTIFICATION_TTL)
    }

    pub fn update(&mut self, message: Message) -> Option<Command> {
        tracing::trace!(?message, "dispatch");
        match message {
            Message::FocusSearch => {
                self.list_focus = ListFocus::Search;
                None
            }
            Message::LeaveSearch => {
                self.list_focus = ListFocus::Cards;
                None
            }
            Message::SearchInput(c) => {
                let mut query = self.filter.query.clone();
                query.push(c);
                self.set_filter(self.filter.clone().with_query(query));
                None
            }
            Message::SearchBackspace => {
                let mut query = self.filter.query.clone();
                query.pop();
                self.set_filter(self.filter.clone().with_query(query));
                None
            }
            Message::SetQuery(query) => {
                self.set_filter(self.filter.clone().with_query(query));
                None
            }
            Message::SelectLanguage(language) => {
                self.set_filter(self.filter.clone().with_language(language));
                None
            }
            Message::NextLanguage => {
                let language = Language::cycle_next(self.filter.language);
                self.set_filter(self.filter.clone().with_language(language));
                None
            }
            Message::PreviousLanguage => {
                let language = Language::cycle_previous(self.filter.language);
                self.set_filter(self.filter.clone().with_language(language));
                None
            }
            Message::CursorDown => {
                let len = self.visible_snippets().len();
                if len > 0 {
                    self.cursor = (self.cursor.min(len - 1) + 1) % len;
                }
                None
            }
            Message::CursorUp => {
                let len = self.visible_snippets().len();
                if len > 0 {
                    let current = self.cursor.min(len - 1);
                    self.cursor = if current == 0 { len - 1 } else { current - 1 };
                }
                None
            }
            Message::OpenHighlighted => {
                if let Some(id) = self.highlighted().map(|s| s.id.clone()) {
                    self.open_snippet(id);
                }
                None
            }
            Message::Open(id) => {
                self.open_snippet(id);
                None
            }
            Message::CloseDetail => {
                self.close_detail();
                None
            }
            Message::ToggleCode => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.code_expanded = !detail.code_expanded;
                }
                None
            }
            Message::ScrollCode(delta) => {
                // last offset that still fills the view
                let visible = self.code_height.unwrap_or(1).max(1);
                let max = self
                    .selected_snippet()
                    .map(|s| s.get_line_count().saturating_sub(visible))
                    .unwrap_or(0);
                if let Some(detail) = self.detail.as_mut() {
                    detail.scroll = detail.scroll.saturating_add_signed(delta).min(max);
                }
                None
            }
            Message::Copy => self.action_target().map(|snippet| Command::CopyToClipboard {
                text: snippet.code.clone(),
                success: "Code copied to clipboard!",
            }),
            Message::Download => self.action_target().cloned().map(Command::Download),
            Message::Embed => self.selected_snippet().map(|_| Command::CopyToClipboard {
                text: embed_markup(&self.location().to_string()),
                success: "Embed code copied!",
            }),
            Message::Click { column, row } => {
                self.handle_click(Position::new(column, row));
                None
            }
            Message::Navigate(route) => {
                self.navigate(route);
                None
            }
            Message::FormFocusNext => {
                self.form.focused = self.form.focused.next();
                None
            }
            Message::FormFocusPrevious => {
                self.form.focused = self.form.focused.previous();
                None
            }
            Message::FormInput(c) => {
                if let Some(text) = self.form.draft.text_mut(self.form.focused) {
                    text.push(c);
                }
                None
            }
            Message::FormNewline => {
                let field = self.form.focused;
                if field.is_multiline() {
                    if let Some(text) = self.form.draft.text_mut(field) {
                        text.push('\n');
                    }
                } else {
                    self.form.focused = field.next();
                }
                None
            }
            Message::FormBackspace => {
                if let Some(text) = self.form.draft.text_mut(self.form.focused) {
                    text.pop();
                }
                None
            }
            Message::FormLanguageNext => {
                self.form.draft.language = Some(match self.form.draft.language {
                    Some(lang) => Language::ALL[(lang.position() + 1) % Language::ALL.len()],
                    None => Language::ALL[0],
                });
                None
            }
            Message::FormLanguagePrevious => {
                let len = Language::ALL.len();
                self.form.draft.language = Some(match self.form.draft.language {
                    Some(lang) => Language::ALL[(lang.position() + len - 1) % len],
                    None => Language::ALL[len - 1],
                });
                None
            }
            Message::ToggleFormTab => {
                self.form.tab = match self.form.tab {
                    FormTab::Edit => FormTab::Preview,
                    FormTab::Preview => FormTab::Edit,
                };
                None
            }
            Message::Submit(action) => self.submit(action),
            Message::RedirectElapsed => {
                if self.route == Route::AddSnippet && self.form.redirect_pending {
                    tracing::info!("redirecting to listing after submission");
                    self.navigate(Route::Listing);
                }
                None
            }
            Message::Notify(notification) => {
                self.notification = Some(notification);
                None
            }
            Message::Tick(now) => {
                if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
                    self.notification = None;
                }
                None
            }
            Message::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            Message::Quit => Some(Command::Quit),
        }
    }

    fn set_filter(&mut self, filter: FilterState) {
        if filter != self.filter {
            tracing::debug!(query = %filter.query, language = ?filter.language, "filter changed");
            self.filter = filter;
            self.cursor = 0;
        }
    }

    /// Opening replaces any current selection.
    fn open_snippet(&mut self, id: String) {
        if self.catalog.get(&id).is_none() {
            tracing::warn!(%id, "ignoring open for unknown snippet");
            return;
        }
        if let Some(index) = self.visible_snippets().iter().position(|s| s.id == id) {
            self.cursor = index;
        }
        tracing::debug!(%id, "opening detail overlay");
        self.detail = Some(DetailOverlay::new(id));
    }

    fn close_detail(&mut self) {
        if self.detail.take().is_some() {
            self.overlay_area = None;
            self.code_height = None;
        }
    }

    /// Snippet copy/download act on: the open overlay, else the highlighted card.
    fn action_target(&self) -> Option<&Snippet> {
        match self.route {
            Route::Listing => self.selected_snippet().or_else(|| self.highlighted()),
            Route::AddSnippet => None,
        }
    }

    fn handle_click(&mut self, position: Position) {
        if self.show_help {
            return;
        }
        if self.detail.is_some() {
            if self
                .overlay_area
                .is_some_and(|area| !area.contains(position) || on_close_button(area, position))
            {
                self.close_detail();
            }
            return;
        }

        if self.route == Route::Listing {
            let hit = self
                .card_areas
                .iter()
                .find(|(area, _)| area.contains(position))
                .map(|(_, id)| id.clone());
            if let Some(id) = hit {
                self.open_snippet(id);
            }
        }
    }

    /// Entering the form starts a fresh draft; returning to the listing lands on
    /// a bare `/` with no filter.
    fn navigate(&mut self, route: Route) {
        tracing::info!(from = self.route.path(), to = route.path(), "navigate");
        self.close_detail();
        self.show_help = false;
        self.list_focus = ListFocus::Cards;
        self.card_areas.clear();

        match route {
            Route::AddSnippet => self.form = AddForm::default(),
            Route::Listing => {
                self.filter = FilterState::cleared();
                self.cursor = 0;
                self.form.redirect_pending = false;
            }
        }
        self.route = route;
    }

    fn submit(&mut self, action: SubmitAction) -> Option<Command> {
        if self.route != Route::AddSnippet || self.form.redirect_pending {
            return None;
        }

        self.form.errors = self.form.draft.validate();
        if !self.form.errors.is_empty() {
            tracing::info!(errors = self.form.errors.len(), "draft rejected");
            self.notification = Some(Notification::error(
                "Please fix the errors before submitting",
            ));
            return None;
        }

        tracing::info!(
            ?action,
            title = %self.form.draft.title,
            tags = ?self.form.draft.tag_list(),
            "draft accepted (not persisted)"
        );
        self.notification = Some(Notification::success(action.success_message()));
        self.form.redirect_pending = true;
        Some(Command::ScheduleRedirect(self.redirect_delay))
    }
}

/// The ` [x] ` marker drawn at the right end of the overlay's top border.
fn on_close_button(area: Rect, position: Position) -> bool {
    position.y == area.y
        && position.x < area.right().saturating_sub(1)
        && position.x >= area.right().saturating_sub(1 + CLOSE_MARKER_WIDTH)
}
