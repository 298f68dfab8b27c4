use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;
use tracing::{error, info};

use pals::app::App;
use pals::cli::{parse_args, run_cli_command, VERSION};
use pals::host::TerminalHost;
use pals::startup::{init_logging, AppConfig};
use pals::terminal::{setup_panic_hook, TerminalManager, Tui};
use pals::ui;
use pals::views::ErrorPage;

/// Redraw cadence for the loading spinner.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Informational flags exit here, before any initialization
    run_cli_command(parse_args(std::env::args()));

    color_eyre::install()?;

    let config = AppConfig::from_env();
    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Without a session proof there is nothing to show: fail before the
    // terminal is touched.
    let host = match TerminalHost::detect(&config) {
        Ok(host) => host,
        Err(e) => {
            error!("Host detection failed: {}", e);
            eprintln!("pals: {}", e);
            std::process::exit(1);
        }
    };

    info!(api = %config.api_url, "Starting pals {}", VERSION);

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config, host))
}

/// What the user picked on the diagnostic page.
enum Recovery {
    Restart,
    Quit,
}

/// Run sessions until the user quits. A session that fails ends on the
/// diagnostic page, from which a fresh session can be started.
async fn run(config: AppConfig, host: TerminalHost) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut first_host = Some(host);

    loop {
        let host = match first_host.take() {
            Some(host) => host,
            None => TerminalHost::detect(&config)?,
        };
        let mut app = App::with_config(&config, Box::new(host));
        app.start();

        let report = match run_app(manager.terminal(), &mut app).await {
            Ok(()) => break,
            Err(report) => report,
        };
        drop(app);

        error!("Session failed: {:?}", report);
        // A panic hook may have given the terminal back already.
        manager.resume()?;
        let page = diagnostic_page(&report);
        match show_diagnostic(manager.terminal(), &page).await? {
            Recovery::Restart => info!("Restarting session"),
            Recovery::Quit => break,
        }
    }

    manager.restore();
    info!("Goodbye");
    Ok(())
}

fn diagnostic_page(report: &color_eyre::Report) -> ErrorPage {
    let detail = report
        .chain()
        .skip(1)
        .enumerate()
        .map(|(i, cause)| format!("{:>3}: {}", i, cause))
        .collect::<Vec<_>>();
    let page = ErrorPage::new("Something went wrong", report.to_string())
        .with_hint("Press r to start over or q to quit.");
    if detail.is_empty() {
        page
    } else {
        page.with_detail(format!("Caused by:\n{}", detail.join("\n")))
    }
}

async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app
        .take_message_rx()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    loop {
        if let Some(failure) = app.take_failure() {
            return Err(eyre!(failure));
        }
        if app.needs_redraw {
            let drawn = panic::catch_unwind(AssertUnwindSafe(|| {
                terminal.draw(|f| ui::render(f, &*app)).map(|_| ())
            }));
            match drawn {
                Ok(result) => result?,
                Err(_) => return Err(eyre!("drawing the screen panicked")),
            }
            app.needs_redraw = false;
        }
        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            Some(msg) = message_rx.recv() => app.handle_message(msg),

            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                Some(Ok(Event::Resize(..))) => app.mark_dirty(),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Err(eyre!("terminal event stream closed")),
            },
        }
    }
}

async fn show_diagnostic(terminal: &mut Tui, page: &ErrorPage) -> Result<Recovery> {
    let mut event_stream = EventStream::new();
    let mut selected = 0;

    loop {
        terminal.draw(|f| ui::render_diagnostic(f, page, selected))?;

        let key = match event_stream.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => key,
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(e.into()),
            None => return Ok(Recovery::Quit),
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Recovery::Quit)
            }
            KeyCode::Char('r') => return Ok(Recovery::Restart),
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Recovery::Quit),
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => selected = 0,
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => selected = 1,
            KeyCode::Enter if selected == 0 => return Ok(Recovery::Restart),
            KeyCode::Enter => return Ok(Recovery::Quit),
            _ => {}
        }
    }
}
