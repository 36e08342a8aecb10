use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dodo::build_info;
use dodo::game::tick;
use dodo::ui::render_game_scene;
use dodo::{Action, GameConfig, InputState, Session};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// How long a pickup or level notice stays in the status bar.
const NOTICE_DURATION: Duration = Duration::from_millis(1500);

#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    log: Option<PathBuf>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line("dodo"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Dodo - a terminal platformer\n");
                println!("Usage: dodo [options]\n");
                println!("Options:");
                println!("  --config FILE  Load world/physics/timing settings from JSON");
                println!("  --log FILE     Write logs to FILE (filter with DODO_LOG)");
                println!("  --version      Show version information");
                println!("  --help         Show this help message");
                println!("\nControls: Left/Right move, Up/Space jump, R restart, Q quit");
                std::process::exit(0);
            }
            flag @ ("--config" | "--log") => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("{} requires a file path", flag);
                    std::process::exit(1);
                };
                if flag == "--config" {
                    parsed.config = Some(PathBuf::from(value));
                } else {
                    parsed.log = Some(PathBuf::from(value));
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'dodo --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    parsed
}

/// The terminal owns stdout, so logs only go anywhere when a file is given.
fn init_logging(path: Option<&PathBuf>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env("DODO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn key_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left | KeyCode::Char('a') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(Action::MoveRight),
        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('w') => Some(Action::Jump),
        _ => None,
    }
}

enum KeyOutcome {
    Continue,
    Quit,
}

fn handle_key(key: KeyEvent, session: &mut Session, input: &mut InputState) -> KeyOutcome {
    if key.kind == KeyEventKind::Release {
        if let Some(action) = key_action(key.code) {
            input.release(action);
        }
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return KeyOutcome::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyOutcome::Quit
        }
        KeyCode::Char('r') | KeyCode::Char('R') if session.game.is_over() => {
            match session.restart() {
                Ok(()) => input.clear(),
                Err(err) => tracing::error!(%err, "restart failed"),
            }
        }
        code => {
            if let Some(action) = key_action(code) {
                input.press(action);
            }
        }
    }
    KeyOutcome::Continue
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
) -> io::Result<()> {
    let mut input = InputState::new(session.config.timing.input_hold_ticks);
    let mut events = Vec::new();
    let poll_interval = Duration::from_millis(session.config.timing.tick_ms.max(1));
    let mut last_tick = Instant::now();
    let mut notice: Option<(String, Instant)> = None;

    loop {
        if notice
            .as_ref()
            .is_some_and(|(_, shown)| shown.elapsed() >= NOTICE_DURATION)
        {
            notice = None;
        }

        let scene = session.game.scene();
        let best = session.best_score();
        let notice_text = notice.as_ref().map(|(text, _)| text.as_str());
        terminal.draw(|frame| {
            let area = frame.size();
            render_game_scene(frame, area, &scene, best, notice_text);
        })?;

        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if let KeyOutcome::Quit = handle_key(key, session, &mut input) {
                    return Ok(());
                }
            }
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_tick).as_millis() as u64;
        last_tick = now;

        if tick(&mut session.game, &mut input, elapsed_ms, &mut events) {
            // Latest event wins the status line
            if let Some(text) = events.drain(..).filter_map(|e| e.notice()).last() {
                notice = Some((text, now));
            }
        }
    }
}

fn main() -> io::Result<()> {
    let args = parse_args();
    init_logging(args.log.as_ref())?;

    let config = match GameConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut session);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        games = session.games_played(),
        best = session.best_score(),
        "session ended"
    );
    result
}
