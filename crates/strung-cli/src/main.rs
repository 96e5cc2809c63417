//! strung - TUI and CLI for string art pattern generation
//!
//! Usage:
//!   strung                           Launch the interactive pattern player
//!   strung render -p <pattern>       Render a pattern to SVG or JSON
//!   strung patterns                  List available patterns
//!   strung benchmark                 Benchmark string generation
//!   strung harness                   Verify pattern invariants

mod cli;

use std::env;
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use image::{DynamicImage, RgbaImage};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use ratatui_image::{
    picker::{Picker, ProtocolType},
    protocol::StatefulProtocol,
    StatefulImage,
};
use resvg::usvg;
use tiny_skia::Pixmap;

use strung::{DrawState, PatternInstance, PatternRegistry, Renderer, SvgRenderer};

use cli::common::canvas_for;
use cli::{cmd_benchmark, cmd_harness, cmd_render};

/// Pixel height of the rendered preview; width follows the pattern's
/// aspect ratio.
const IMAGE_HEIGHT: u32 = 1200;

/// Canvas height in SVG units for the preview surface.
const CANVAS_HEIGHT: f64 = 1000.0;

/// Rasterize the current SVG surface with resvg.
fn render_to_image(svg: &str) -> DynamicImage {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).expect("Failed to parse generated SVG");

    let tree_size = tree.size();
    let scale = IMAGE_HEIGHT as f32 / tree_size.height();
    let width = (tree_size.width() * scale).round().max(1.0) as u32;

    let mut pixmap = Pixmap::new(width, IMAGE_HEIGHT).expect("Failed to create pixmap");

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let rgba = RgbaImage::from_raw(width, IMAGE_HEIGHT, pixmap.take())
        .expect("Failed to create image");

    DynamicImage::ImageRgba8(rgba)
}

/// Application state for the TUI pattern player.
struct App {
    /// Pattern registry backing the list.
    registry: PatternRegistry,
    /// Registered pattern ids, in list order.
    ids: Vec<&'static str>,
    /// Current pattern selection
    pattern_state: ListState,
    /// The instance being played
    instance: PatternInstance,
    /// Retained drawing surface the instance renders into
    renderer: SvgRenderer,
    /// Animation running?
    playing: bool,
    /// Strings drawn per animation tick
    speed: usize,
    /// Time spent on the last draw call
    draw_time_ms: f64,
    /// Should exit
    should_quit: bool,
    /// Image picker for terminal protocol detection
    picker: Picker,
    /// Current rendered image protocol state
    image_state: Option<Box<dyn StatefulProtocol>>,
    /// Flag to indicate image needs re-rendering
    needs_image_update: bool,
}

impl App {
    fn new() -> Result<Self, String> {
        let registry = PatternRegistry::with_builtins();
        let ids = registry.ids();
        if ids.is_empty() {
            return Err("No patterns registered".to_string());
        }

        let mut pattern_state = ListState::default();
        pattern_state.select(Some(0));

        // Initialize image picker - force Sixel protocol
        let mut picker = Picker::from_termios().unwrap_or_else(|_| Picker::new((8, 16)));
        picker.protocol_type = ProtocolType::Sixel;

        let instance = registry
            .create(ids[0])
            .map_err(|e| e.to_string())?;
        let renderer = SvgRenderer::new(instance.size());

        let mut app = App {
            registry,
            ids,
            pattern_state,
            instance,
            renderer,
            playing: false,
            speed: 5,
            draw_time_ms: 0.0,
            should_quit: false,
            picker,
            image_state: None,
            needs_image_update: true,
        };

        app.load_selected();
        Ok(app)
    }

    fn selected_id(&self) -> &'static str {
        self.ids[self.pattern_state.selected().unwrap_or(0)]
    }

    /// Build a fresh instance and surface for the selected pattern.
    fn load_selected(&mut self) {
        let id = self.selected_id();
        let instance = match self.registry.create(id) {
            Ok(instance) => instance,
            Err(_) => return,
        };
        self.instance = instance;

        let size = canvas_for(&self.instance, CANVAS_HEIGHT);
        self.instance.set_size(size);
        self.renderer = SvgRenderer::new(size);
        self.renderer.set_background("#ffffff");

        let start = Instant::now();
        self.instance.init_draw(&mut self.renderer);
        self.draw_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        self.playing = false;
        self.update_instruction();
        self.needs_image_update = true;
    }

    fn update_instruction(&mut self) {
        let position = self.instance.position();
        let total = self.instance.step_count();
        self.renderer
            .show_instruction(&format!("string {} of {}", position, total));
    }

    fn seek(&mut self, target: usize) {
        let start = Instant::now();
        self.instance.goto(&mut self.renderer, target);
        self.draw_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.update_instruction();
        self.needs_image_update = true;
    }

    fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let target = self.instance.position() + self.speed;
        self.seek(target);
        if self.instance.state() == DrawState::Complete {
            self.playing = false;
        }
    }

    fn step_forward(&mut self) {
        self.seek(self.instance.position() + 1);
    }

    fn step_back(&mut self) {
        self.seek(self.instance.position().saturating_sub(1));
    }

    fn update_image(&mut self) {
        if self.needs_image_update {
            let img = render_to_image(&self.renderer.to_svg_string());
            self.image_state = Some(self.picker.new_resize_protocol(img));
            self.needs_image_update = false;
        }
    }

    fn next_pattern(&mut self) {
        let i = match self.pattern_state.selected() {
            Some(i) => (i + 1) % self.ids.len(),
            None => 0,
        };
        self.pattern_state.select(Some(i));
        self.load_selected();
    }

    fn prev_pattern(&mut self) {
        let i = match self.pattern_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.ids.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.pattern_state.select(Some(i));
        self.load_selected();
    }

    fn adjust_speed(&mut self, delta: isize) {
        let speed = self.speed as isize + delta;
        self.speed = speed.clamp(1, 100) as usize;
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Check for CLI subcommands
    if args.len() >= 2 {
        match args[1].as_str() {
            "render" => {
                cmd_render(&args[2..]);
                return;
            }
            "benchmark" => {
                cmd_benchmark(&args[2..]);
                return;
            }
            "patterns" => {
                cmd_patterns();
                return;
            }
            "harness" => {
                cmd_harness(&args[2..]);
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = run_tui() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_patterns() {
    let registry = PatternRegistry::with_builtins();
    println!("Available patterns:");
    for id in registry.ids() {
        match registry.create(id) {
            Ok(instance) => {
                let options: Vec<&str> = instance
                    .config()
                    .schema()
                    .iter()
                    .map(|spec| spec.key)
                    .collect();
                println!(
                    "  {:<10} {:<10} options: {}",
                    id,
                    instance.display_name(),
                    options.join(", ")
                );
            }
            Err(e) => println!("  {:<10} error: {}", id, e),
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [command]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  (none)      Launch the interactive pattern player");
    eprintln!("  render      Render a pattern to SVG or JSON");
    eprintln!("  patterns    List available patterns");
    eprintln!("  benchmark   Benchmark string generation");
    eprintln!("  harness     Verify pattern invariants");
    eprintln!("  help        Show this help");
}

fn run_tui() -> Result<(), String> {
    // Initialize terminal
    enable_raw_mode().map_err(|e| e.to_string())?;
    stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| e.to_string())?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| e.to_string())?;

    let mut app = App::new()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(|e| e.to_string())?;
    stdout()
        .execute(LeaveAlternateScreen)
        .map_err(|e| e.to_string())?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        app.tick();
        app.update_image();

        terminal
            .draw(|frame| ui(frame, app))
            .map_err(|_| "Draw error".to_string())?;

        if event::poll(Duration::from_millis(50)).map_err(|e| e.to_string())? {
            if let Event::Key(key) = event::read().map_err(|e| e.to_string())? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.prev_pattern();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.next_pattern();
                        }
                        KeyCode::Char(' ') => {
                            app.playing = !app.playing;
                        }
                        KeyCode::Right | KeyCode::Char('l') => {
                            app.playing = false;
                            app.step_forward();
                        }
                        KeyCode::Left | KeyCode::Char('h') => {
                            app.playing = false;
                            app.step_back();
                        }
                        KeyCode::Char('0') | KeyCode::Char('g') => {
                            app.playing = false;
                            app.seek(0);
                        }
                        KeyCode::Char('e') => {
                            app.playing = false;
                            let end = app.instance.step_count();
                            app.seek(end);
                        }
                        KeyCode::Char('[') => {
                            app.adjust_speed(-1);
                        }
                        KeyCode::Char(']') => {
                            app.adjust_speed(1);
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(4)])
        .split(frame.area());

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(40)])
        .split(main_layout[0]);

    // Split left sidebar into pattern list and stats
    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(9)])
        .split(top_layout[0]);

    // Pattern list
    let items: Vec<ListItem> = app.ids.iter().map(|id| ListItem::new(*id)).collect();
    let list = List::new(items)
        .block(Block::default().title("Patterns").borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, sidebar_layout[0], &mut app.pattern_state);

    // Stats panel
    let state_label = match app.instance.state() {
        DrawState::Uninitialized => "uninitialized",
        DrawState::Initialized => "ready",
        DrawState::Generating => {
            if app.playing {
                "playing"
            } else {
                "paused"
            }
        }
        DrawState::Complete => "complete",
    };
    let stats = Paragraph::new(format!(
        "{}\nstring {}/{}\nnails: {}\nstate: {}\nspeed: {}/tick\ndraw: {:.2}ms",
        app.instance.display_name(),
        app.instance.position(),
        app.instance.step_count(),
        app.instance.nail_count(),
        state_label,
        app.speed,
        app.draw_time_ms,
    ))
    .block(Block::default().title("Status").borders(Borders::ALL));
    frame.render_widget(stats, sidebar_layout[1]);

    // Pattern preview
    let image_block = Block::default().title("Preview").borders(Borders::ALL);
    let image_area = image_block.inner(top_layout[1]);
    frame.render_widget(image_block, top_layout[1]);
    if let Some(image_state) = &mut app.image_state {
        frame.render_stateful_widget(StatefulImage::new(None), image_area, image_state);
    }

    // Help bar
    let help = Paragraph::new(
        "↑/↓ pattern   space play/pause   ←/→ step   0 start   e end   [/] speed   q quit",
    )
    .block(Block::default().title("Keys").borders(Borders::ALL));
    frame.render_widget(help, main_layout[1]);
}
