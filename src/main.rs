use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{error, info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use taleplade::app::App;
use taleplade::audio::Player;
use taleplade::audio::recording::RecordingPlayer;
use taleplade::audio::rodio_player::RodioPlayer;
use taleplade::config::Config;
use taleplade::event::{AppEvent, EventHandler};
use taleplade::remote::ApiClient;
use taleplade::remote::cache::DiskCache;
use taleplade::ui;
use taleplade::ui::components::nav_bar::NavBar;
use taleplade::ui::components::tile_grid::TileGrid;
use taleplade::ui::layout::BoardLayout;
use taleplade::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "taleplade", version, about = "Word board that speaks the tiles you tap")]
struct Cli {
    #[arg(short, long, help = "Base URL of the board backend")]
    server: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Tiles per grid row")]
    columns: Option<u16>,

    #[arg(long, help = "Label language (da, en)")]
    language: Option<String>,

    #[arg(long, help = "Log file (defaults to the user data directory)")]
    log_file: Option<PathBuf>,

    #[arg(short, long, help = "Log at debug level")]
    debug: bool,

    #[arg(long, help = "Log sounds instead of playing them")]
    silent: bool,
}

fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taleplade")
        .join("taleplade.log")
}

/// The terminal belongs to the board, so log records go to a file.
fn init_logging(cli: &Cli) {
    let level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(log_file) => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .init();
        }
        Err(e) => {
            eprintln!("Warning: failed to open {} for logging: {e}", path.display());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    info!("taleplade {} starting", taleplade::VERSION);

    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("ignoring unreadable config {}: {e}", Config::config_path().display());
        Config::default()
    });
    if let Some(server) = cli.server.clone() {
        config.server_url = server;
    }
    if let Some(theme) = cli.theme.clone() {
        config.theme = theme;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(language) = cli.language.clone() {
        config.language = language;
    }
    config.validate();
    taleplade::set_language(&config.language);

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!(
            "theme {:?} not found (bundled: {}), using default",
            config.theme,
            Theme::available_themes().join(", ")
        );
        Theme::default()
    });

    let cache = if config.speech_cache {
        DiskCache::new(
            PathBuf::from(&config.speech_cache_dir),
            config.speech_cache_max_bytes(),
        )
    } else {
        None
    };
    let timeout = config.fetch_timeout_secs.map(Duration::from_secs);
    let api = ApiClient::new(&config.server_url, timeout)?.with_audio_cache(cache);

    let player: Rc<dyn Player> = if cli.silent {
        Rc::new(RecordingPlayer::default())
    } else {
        Rc::new(RodioPlayer::new(api.clone(), config.volume_ratio()))
    };
    let mut app = App::new(config, theme, api, player);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = app
        .start_loading(events.sender())
        .map_err(anyhow::Error::from)
        .and_then(|()| run_app(&mut terminal, &mut app, &events));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        error!("fatal: {err:?}");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key)?,
            AppEvent::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height))?;
            }
            AppEvent::Tick => app.tick(),
            AppEvent::Resize(_, _) => {}
            AppEvent::TilesLoaded(tiles) => app.on_tiles_loaded(tiles)?,
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> taleplade::Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => app.next_page()?,
        KeyCode::BackTab => app.previous_page()?,
        KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
            let index = (ch as usize) - ('1' as usize);
            // Only keys that name an existing page switch.
            if index < app.page_count() {
                app.switch_page(index)?;
            }
        }
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => app.tap_cursor()?,
        _ => {}
    }
    Ok(())
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) -> taleplade::Result<()> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(area, mouse.column, mouse.row)?,
        MouseEventKind::ScrollDown => app.move_cursor(0, 1),
        MouseEventKind::ScrollUp => app.move_cursor(0, -1),
        _ => {}
    }
    Ok(())
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().fg(colors.fg()).bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = BoardLayout::new(area);
    let title = ui::text::title();

    match app.board() {
        Some(loaded) => {
            frame.render_widget(NavBar::new(&loaded.view.nav, &title, &app.theme), layout.nav);
            if let Some((_, grid)) = loaded.view.visible() {
                let empty = ui::text::empty_page();
                let tiles = TileGrid::new(grid, app.config.columns, loaded.cursor, &app.theme)
                    .empty_text(&empty);
                frame.render_widget(tiles, layout.grid);
            }
        }
        None => frame.render_widget(NavBar::new(&[], &title, &app.theme), layout.nav),
    }

    let hints = ui::text::footer_hints();
    let hint_refs: Vec<&str> = hints.iter().map(String::as_str).collect();
    let footer_text = ui::layout::pack_hint_lines(&hint_refs, usize::from(layout.footer.width))
        .into_iter()
        .next()
        .unwrap_or_default();
    let footer = Paragraph::new(Line::from(Span::styled(
        footer_text,
        Style::default().fg(colors.text_muted()),
    )));
    frame.render_widget(footer, layout.footer);

    if app.loading.is_shown() {
        let message = ui::text::loading();
        frame.render_widget(app.loading.widget(&message, &app.theme), area);
    }
}
