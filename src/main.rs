use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use toastbox::config::{self, ConfigResult, ToastPosition};
use toastbox::{App, ToastProvider, ToastRequest};

/// Toast notifications and confirmation dialogs for the terminal
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive demo of toast notifications and confirmation dialogs"
)]
struct Args {
    /// Corner the toast stack is anchored to (overrides the config file)
    #[arg(long, value_enum)]
    position: Option<ToastPosition>,

    /// Default toast lifetime in milliseconds, 0 keeps toasts until closed
    #[arg(long)]
    duration: Option<u64>,
}

fn main() -> Result<()> {
    // Writes to /tmp/toastbox-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/toastbox-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== TOASTBOX DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let mut config_result = config::load_config();
    if let Some(position) = args.position {
        config_result.config.toast.position = position;
    }
    if let Some(duration) = args.duration {
        config_result.config.toast.duration_ms = duration;
    }

    let terminal = init_terminal()?;
    let result = run(terminal, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== TOASTBOX DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, config_result: ConfigResult) -> Result<()> {
    let provider = ToastProvider::new(&config_result.config);
    let mut app = App::new(provider.notifier());

    if let Some(warning) = config_result.warning {
        app.notify(ToastRequest::warning("Config").message(warning));
    }

    loop {
        terminal.draw(|frame| app.render(frame, &provider))?;

        app.handle_events(&provider)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
