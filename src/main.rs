//! snipshelf - Code Snippet Gallery
//!
//! Starts the interactive gallery, or runs a one-shot CLI command when a
//! subcommand is given.

use clap::Parser;
use color_eyre::{Result, eyre::eyre};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use snipshelf::{
    app::{App, Command, Message},
    cli::{self, Cli},
    clipboard::{ClipboardSink, SystemClipboard},
    config::Config,
    handlers::{self, effects::Effects},
    logging,
    models::{Catalog, FilterState},
};
use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = Cli::parse();

    let config = Config::load(args.config.as_deref())?;
    logging::init(&config.log_file).map_err(|e| eyre!("{e:#}"))?;
    let catalog = Catalog::load(config.catalog.as_deref())?;

    if let Some(action) = args.action {
        return cli::execute(action, &config, &catalog).map_err(|e| eyre!("{e:#}"));
    }

    let mut app = App::new(catalog, &config);
    app = match args.location.as_deref() {
        Some(location) => app.with_location(location),
        None => app.with_filter(FilterState::new(args.q.unwrap_or_default(), args.lang)),
    };
    let mut effects = Effects::new(SystemClipboard, config.download_dir.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut effects);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    tracing::info!("exiting");
    Ok(ExitCode::SUCCESS)
}

/// Draw, wait for input, dispatch; until a `Quit` command comes back.
fn run<B: Backend, C: ClipboardSink>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    effects: &mut Effects<C>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let mut pending = Vec::new();
        if event::poll(poll_timeout(app, effects, Instant::now()))? {
            let message = match event::read()? {
                Event::Key(key) => handlers::keys::handle_key_events(key, app),
                Event::Mouse(mouse) => handlers::mouse::handle_mouse_event(mouse),
                _ => None,
            };
            pending.extend(message);
        }
        pending.extend(effects.drain());
        pending.push(Message::Tick(Instant::now()));

        if dispatch(app, effects, pending) {
            return Ok(());
        }
    }
}

/// Wait no longer than the next redirect or notification expiry.
fn poll_timeout<C: ClipboardSink>(app: &App, effects: &Effects<C>, now: Instant) -> Duration {
    [app.notification_deadline(), effects.next_deadline()]
        .into_iter()
        .flatten()
        .map(|due| due.saturating_duration_since(now))
        .fold(POLL_INTERVAL, Duration::min)
}

/// Feed messages through `update`, running any commands they produce.
/// Returns true once the app asked to quit.
fn dispatch<C: ClipboardSink>(app: &mut App, effects: &mut Effects<C>, messages: Vec<Message>) -> bool {
    for message in messages {
        let mut next = Some(message);
        while let Some(message) = next.take() {
            match app.update(message) {
                Some(Command::Quit) => return true,
                Some(command) => next = effects.run(command),
                None => {}
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipshelf::{
        app::Notification,
        clipboard::MemoryClipboard,
        models::{Catalog, Route},
    };

    #[test]
    fn poll_wakes_for_the_redirect_deadline() {
        let config = Config {
            redirect_delay_ms: 40,
            ..Config::default()
        };
        let mut app = App::new(Catalog::builtin().unwrap(), &config);
        let mut effects = Effects::new(MemoryClipboard::default(), config.download_dir.clone());
        assert_eq!(poll_timeout(&app, &effects, Instant::now()), POLL_INTERVAL);

        app.update(Message::Navigate(Route::AddSnippet));
        effects.run(Command::ScheduleRedirect(config.redirect_delay()));
        assert!(poll_timeout(&app, &effects, Instant::now()) <= Duration::from_millis(40));
    }

    #[test]
    fn poll_wakes_for_an_expiring_notification() {
        let mut app = App::new(Catalog::builtin().unwrap(), &Config::default());
        let effects = Effects::new(MemoryClipboard::default(), ".".into());
        let notification = Notification::success("Snippet downloaded!");
        let almost_expired = notification.shown_at + Duration::from_millis(3_900);
        app.update(Message::Notify(notification));

        assert_eq!(
            poll_timeout(&app, &effects, almost_expired),
            Duration::from_millis(100)
        );
    }
}
