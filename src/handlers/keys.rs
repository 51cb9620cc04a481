//! Keyboard Input Handling Module
//!
//! Translates terminal key events into [`Message`]s. Nothing here touches state;
//! the returned message is dispatched through [`App::update`].

use crate::app::{App, ListFocus, Message};
use crate::models::{DraftField, Route, SubmitAction};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main keyboard event dispatcher
/// Routes by what currently owns the keyboard: the help overlay, the detail
/// overlay, the search box, the listing, or the add-snippet form.
pub fn handle_key_events(key: KeyEvent, app: &App) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    if app.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Message::ToggleHelp),
            _ => None,
        };
    }

    match app.route {
        Route::Listing if app.detail.is_some() => handle_detail_keys(key),
        Route::Listing if app.list_focus == ListFocus::Search => handle_search_keys(key),
        Route::Listing => handle_listing_keys(key),
        Route::AddSnippet => handle_form_keys(key, app),
    }
}

fn handle_listing_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Message::Quit),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Char('/') => Some(Message::FocusSearch),
        KeyCode::Tab | KeyCode::Char(']') => Some(Message::NextLanguage),
        KeyCode::BackTab | KeyCode::Char('[') => Some(Message::PreviousLanguage),
        KeyCode::Char('0') => Some(Message::SelectLanguage(None)),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::CursorDown),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::CursorUp),
        KeyCode::Enter | KeyCode::Char('v') => Some(Message::OpenHighlighted),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Message::Copy),
        KeyCode::Char('d') => Some(Message::Download),
        KeyCode::Char('a') | KeyCode::Char('n') => Some(Message::Navigate(Route::AddSnippet)),
        _ => None,
    }
}

fn handle_search_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(Message::LeaveSearch),
        KeyCode::Backspace => Some(Message::SearchBackspace),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::SetQuery(String::new()))
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::SearchInput(c))
        }
        _ => None,
    }
}

fn handle_detail_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => Some(Message::CloseDetail),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Message::Copy),
        KeyCode::Char('d') => Some(Message::Download),
        KeyCode::Char('e') => Some(Message::Embed),
        KeyCode::Char(' ') => Some(Message::ToggleCode),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollCode(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollCode(-1)),
        KeyCode::PageDown => Some(Message::ScrollCode(10)),
        KeyCode::PageUp => Some(Message::ScrollCode(-10)),
        _ => None,
    }
}

fn handle_form_keys(key: KeyEvent, app: &App) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('p') => Some(Message::ToggleFormTab),
            KeyCode::Char('r') => Some(Message::Submit(SubmitAction::PullRequest)),
            KeyCode::Char('s') => Some(Message::Submit(SubmitAction::Commit)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Message::Navigate(Route::Listing)),
        KeyCode::Tab => Some(Message::FormFocusNext),
        KeyCode::BackTab => Some(Message::FormFocusPrevious),
        KeyCode::Right | KeyCode::Char(' ') if app.form.focused == DraftField::Language => {
            Some(Message::FormLanguageNext)
        }
        KeyCode::Left if app.form.focused == DraftField::Language => {
            Some(Message::FormLanguagePrevious)
        }
        KeyCode::Enter => Some(Message::FormNewline),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(c) => Some(Message::FormInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Catalog;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(Catalog::builtin().unwrap(), &Config::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn escape_closes_the_overlay() {
        let mut app = app();
        app.update(Message::Open("1".into()));
        assert_eq!(
            handle_key_events(press(KeyCode::Esc), &app),
            Some(Message::CloseDetail)
        );
        assert_eq!(
            handle_key_events(press(KeyCode::Char('e')), &app),
            Some(Message::Embed)
        );
    }

    #[test]
    fn search_mode_captures_letters() {
        let mut app = app();
        assert_eq!(
            handle_key_events(press(KeyCode::Char('q')), &app),
            Some(Message::Quit)
        );
        app.update(Message::FocusSearch);
        assert_eq!(
            handle_key_events(press(KeyCode::Char('q')), &app),
            Some(Message::SearchInput('q'))
        );
        assert_eq!(
            handle_key_events(ctrl('u'), &app),
            Some(Message::SetQuery(String::new()))
        );
    }

    #[test]
    fn form_shortcuts_submit() {
        let mut app = app();
        app.update(Message::Navigate(Route::AddSnippet));
        assert_eq!(
            handle_key_events(ctrl('r'), &app),
            Some(Message::Submit(SubmitAction::PullRequest))
        );
        assert_eq!(
            handle_key_events(ctrl('s'), &app),
            Some(Message::Submit(SubmitAction::Commit))
        );
        assert_eq!(
            handle_key_events(press(KeyCode::Char(' ')), &app),
            Some(Message::FormInput(' '))
        );

        app.update(Message::FormFocusNext);
        app.update(Message::FormFocusNext);
        assert_eq!(
            handle_key_events(press(KeyCode::Char(' ')), &app),
            Some(Message::FormLanguageNext)
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = app();
        app.update(Message::Navigate(Route::AddSnippet));
        assert_eq!(handle_key_events(ctrl('c'), &app), Some(Message::Quit));
    }
}
