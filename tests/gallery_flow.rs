use pretty_assertions::assert_eq;
use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
};
use snipshelf::{
    app::{App, Command, Message, Notification, NotificationKind},
    clipboard::MemoryClipboard,
    config::Config,
    handlers::{effects::Effects, keys::handle_key_events},
    models::{Catalog, DraftField, Language, Route, SubmitAction},
};
use std::time::Duration;

fn app() -> App {
    App::new(Catalog::builtin().unwrap(), &Config::default())
}

fn press(app: &mut App, code: KeyCode) -> Option<Command> {
    let message = handle_key_events(KeyEvent::new(code, KeyModifiers::NONE), app)?;
    app.update(message)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn draw(app: &mut App) -> String {
    draw_sized(app, 120, 40)
}

fn draw_sized(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn visible_titles(app: &App) -> Vec<String> {
    app.visible_snippets()
        .into_iter()
        .map(|s| s.title.clone())
        .collect()
}

#[test]
fn typing_a_search_narrows_the_listing() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "python");
    assert_eq!(visible_titles(&app), vec!["Python Email Validator"]);
    assert_eq!(app.location().to_string(), "http://localhost:8080/?q=python");

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('0'));
    assert_eq!(app.visible_snippets().len(), 1);
}

#[test]
fn language_cycling_combines_with_search() {
    let mut app = app().with_location("/?q=react");
    assert_eq!(app.visible_snippets().len(), 2);

    // All -> JavaScript -> TypeScript
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.filter.language, Some(Language::TypeScript));
    assert_eq!(
        visible_titles(&app),
        vec!["React Custom Hook - useLocalStorage"]
    );
    assert_eq!(
        app.location().to_string(),
        "http://localhost:8080/?q=react&lang=TypeScript"
    );
}

#[test]
fn nothing_matches_shows_empty_state() {
    let mut app = app().with_location("/?q=nonexistent-zzz");
    assert!(app.visible_snippets().is_empty());
    assert!(draw(&mut app).contains("No snippets found matching your criteria"));
}

#[test]
fn overlay_opens_replaces_and_closes() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selected_snippet().map(|s| s.id.as_str()), Some("1"));

    app.update(Message::Open("3".into()));
    assert_eq!(app.selected_snippet().map(|s| s.id.as_str()), Some("3"));

    press(&mut app, KeyCode::Esc);
    assert!(app.detail.is_none());
    // Esc again is harmless
    press(&mut app, KeyCode::Esc);
    assert!(app.detail.is_none());
}

#[test]
fn clicking_outside_the_overlay_dismisses_it() {
    let mut app = app();
    draw(&mut app);
    let (card, id) = app.card_areas[0].clone();
    app.update(Message::Click {
        column: card.x + 2,
        row: card.y + 2,
    });
    assert_eq!(app.selected_snippet().map(|s| s.id.clone()), Some(id));

    let screen = draw(&mut app);
    assert!(screen.contains("Copy Code"));

    app.update(Message::Click { column: 60, row: 20 });
    assert!(app.detail.is_some(), "click inside keeps the overlay");

    app.update(Message::Click { column: 0, row: 0 });
    assert!(app.detail.is_none());
}

#[test]
fn clicking_the_close_marker_dismisses_the_overlay() {
    let mut app = app();
    app.update(Message::Open("4".into()));
    draw(&mut app);
    let area = app.overlay_area.unwrap();
    app.update(Message::Click {
        column: area.right() - 3,
        row: area.y,
    });
    assert!(app.detail.is_none());
}

#[test]
fn copy_download_and_embed_from_the_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let mut effects = Effects::new(MemoryClipboard::default(), dir.path().to_path_buf());
    let mut app = app().with_location("/?q=sql");
    press(&mut app, KeyCode::Enter);

    let command = press(&mut app, KeyCode::Char('c')).unwrap();
    let notice = effects.run(command).unwrap();
    app.update(notice);
    let snippet = app.selected_snippet().unwrap().clone();
    assert_eq!(effects.clipboard().last(), Some(snippet.code.as_str()));
    assert_eq!(
        app.notification.as_ref().map(|n| n.message.as_str()),
        Some("Code copied to clipboard!")
    );

    let command = press(&mut app, KeyCode::Char('d')).unwrap();
    let notice = effects.run(command).unwrap();
    app.update(notice);
    let saved = std::fs::read_to_string(dir.path().join("sql-find-duplicates.SQL")).unwrap();
    assert_eq!(saved, snippet.code);

    let command = press(&mut app, KeyCode::Char('e')).unwrap();
    effects.run(command);
    assert_eq!(
        effects.clipboard().last(),
        Some(r#"<iframe src="http://localhost:8080/?q=sql" width="100%" height="400"></iframe>"#)
    );
}

#[test]
fn empty_submission_reports_all_four_errors() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.route, Route::AddSnippet);

    let command = app.update(Message::Submit(SubmitAction::PullRequest));
    assert!(command.is_none());
    assert_eq!(
        app.form.errors.keys().copied().collect::<Vec<_>>(),
        vec![
            DraftField::Title,
            DraftField::Description,
            DraftField::Language,
            DraftField::Code,
        ]
    );
    assert_eq!(
        app.notification.as_ref().map(|n| n.kind),
        Some(NotificationKind::Error)
    );
    assert!(draw(&mut app).contains("Title is required"));
}

#[test]
fn valid_submission_redirects_after_the_delay() {
    let config = Config {
        redirect_delay_ms: 10,
        ..Config::default()
    };
    let dir = tempfile::tempdir().unwrap();
    let mut effects = Effects::new(MemoryClipboard::default(), dir.path().to_path_buf());
    let mut app = App::new(Catalog::builtin().unwrap(), &config).with_location("/add");
    assert_eq!(app.route, Route::AddSnippet);

    type_text(&mut app, "Retry helper");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Retries a future");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "async, retry");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "retry(fn)");

    let message = handle_key_events(
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        &app,
    )
    .unwrap();
    let command = app.update(message).unwrap();
    assert!(app.form.errors.is_empty());
    assert_eq!(command, Command::ScheduleRedirect(Duration::from_millis(10)));
    assert_eq!(app.route, Route::AddSnippet);

    assert!(effects.run(command).is_none());
    let elapsed = effects.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(elapsed, Message::RedirectElapsed);
    app.update(elapsed);
    assert_eq!(app.route, Route::Listing);
    assert_eq!(app.location().to_string(), "http://localhost:8080/");
}

#[test]
fn help_overlay_swallows_keys_until_closed() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(draw(&mut app).contains("Keyboard Shortcuts"));

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.route, Route::Listing);

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help);
}

#[test]
fn tiny_terminals_render_with_a_pending_notification() {
    for (width, height) in [(40, 2), (40, 1), (3, 4), (120, 3)] {
        let mut app = app();
        app.update(Message::Notify(Notification::success("Code copied to clipboard!")));
        draw_sized(&mut app, width, height);

        app.update(Message::Open("1".into()));
        app.update(Message::ToggleHelp);
        draw_sized(&mut app, width, height);
    }
}

#[test]
fn scrolling_back_up_from_the_end_moves_the_code() {
    let mut app = app();
    app.update(Message::Open("1".into()));
    draw_sized(&mut app, 120, 24);
    for _ in 0..100 {
        app.update(Message::ScrollCode(1));
    }
    let at_end = draw_sized(&mut app, 120, 24);

    app.update(Message::ScrollCode(-1));
    assert_ne!(draw_sized(&mut app, 120, 24), at_end);
}
