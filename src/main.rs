pub mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use focusboard::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    dashboard::Dashboard,
    logging,
    runtime::{self, AppEvent, EventChannel, FixedTicker, Runner},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};

/// terminal focus dashboard with a live synthetic eeg trace and pomodoro timer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal productivity dashboard: a live synthetic EEG-like trace with point metrics, a pomodoro focus timer, and weekly productivity panels."
)]
pub struct Cli {
    /// length of a focus session in minutes
    #[clap(short = 'm', long)]
    focus_minutes: Option<u32>,

    /// milliseconds between synthetic signal samples
    #[clap(long)]
    signal_interval_ms: Option<u64>,

    /// number of samples kept on the live chart
    #[clap(long)]
    history: Option<usize>,

    /// seed for the synthetic signal and the mock panels
    #[clap(long)]
    seed: Option<u64>,

    /// read settings from this file instead of the default location
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// write the effective settings back to the config file
    #[clap(long)]
    save_config: bool,

    /// log filter, e.g. `debug` or `focusboard=trace` (overrides RUST_LOG)
    #[clap(long)]
    log_level: Option<String>,
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Flags win over values from the config file
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(m) = self.focus_minutes {
            cfg.focus_minutes = m;
        }
        if let Some(ms) = self.signal_interval_ms {
            cfg.signal_interval_ms = ms;
        }
        if let Some(n) = self.history {
            cfg.history = n;
        }
        cfg
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    Dashboard,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub dashboard: Dashboard,
    pub state: AppState,
}

impl App {
    pub fn new(config: Config, seed: Option<u64>) -> Self {
        Self {
            dashboard: Dashboard::new(&config, seed),
            config,
            state: AppState::Dashboard,
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> io::Result<Flow> {
        if key.kind == KeyEventKind::Release {
            return Ok(Flow::Continue);
        }
        // ctrl+c to quit
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Flow::Quit);
        }

        match self.state {
            AppState::Dashboard => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return Ok(Flow::Quit),
                KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Enter => {
                    self.dashboard.focus.toggle()?;
                }
                KeyCode::Char('r') => self.dashboard.focus.reset(),
                KeyCode::Char('?') | KeyCode::Char('h') => self.state = AppState::Help,
                _ => {}
            },
            AppState::Help => match key.code {
                KeyCode::Char('q') => return Ok(Flow::Quit),
                KeyCode::Esc
                | KeyCode::Char('?')
                | KeyCode::Char('h')
                | KeyCode::Char('b')
                | KeyCode::Backspace => self.state = AppState::Dashboard,
                _ => {}
            },
        }
        Ok(Flow::Continue)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let log_path = AppDirs::log_path();
    if let Err(e) = logging::init_file_logger(&log_path, cli.log_level.as_deref()) {
        eprintln!("logging disabled ({}): {e}", log_path.display());
    }

    let store = cli.config_store();
    let config = cli.apply(store.load());
    config.validate()?;
    if cli.save_config {
        store.save(&config)?;
        log::info!("saved settings to {}", store.path().display());
    }
    log::info!("starting focusboard v{} with {:?}", env!("CARGO_PKG_VERSION"), config);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, cli.seed);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("focusboard exited with error: {e}");
    }
    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let channel = EventChannel::new();
    runtime::spawn_terminal_reader(channel.sender())?;
    app.dashboard.mount(channel.sender())?;

    let runner = Runner::new(channel, FixedTicker::from_millis(app.config.frame_ms));
    terminal.draw(|f| ui(app, f))?;

    loop {
        let redraw = match runner.step() {
            Some(AppEvent::Key(key)) => match app.on_key(key)? {
                Flow::Quit => break,
                Flow::Continue => true,
            },
            Some(AppEvent::Resize) => true,
            Some(tick) => app.dashboard.handle(&tick),
            None => false,
        };

        if redraw {
            terminal.draw(|f| ui(app, f))?;
        }
    }

    app.dashboard.unmount();
    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    ui::screen::current_screen(&app.state).render(app, f);
}
