mod logging;
mod view;

use std::{
    io,
    time::{Duration, Instant},
};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pixtile_config::Config;
use pixtile_core::{GRID_ROWS, GridLayout, LCG_MODULUS, Lcg, Palette};
use pixtile_patterns::{
    BLOCK_SIZE, FrameQueue, Gallery, GalleryOptions, Registry, WarpedBackground,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};
use tracing::{debug, info, warn};

use crate::view::SurfaceView;

/// Terminal rows taken by the warped banner.
const BANNER_ROWS: u16 = 8;

/// Blank cells between neighbouring tiles.
const TILE_GAP: u16 = 1;

/// Tile width bounds in cells. Tiles are square, so height is half of this.
const MIN_TILE_COLS: u16 = 6;
const MAX_TILE_COLS: u16 = 32;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let log_path = logging::init()?;
    let config = Config::load().wrap_err("failed to load configuration")?;
    if let Some(path) = log_path {
        info!(path = %path.display(), ?config, "starting pixtile");
    }

    let terminal = ratatui::init();
    let width = terminal.size().map(|size| size.width).unwrap_or(80);
    let result = App::new(config, width).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    queue: FrameQueue,
    gallery: Gallery,
    banner: WarpedBackground,
    /// First tile column on screen.
    scroll: usize,
    /// One-off message shown in the status line.
    notice: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal `width` cells wide.
    pub fn new(config: Config, width: u16) -> Self {
        let palette = config.palette();
        let banner = WarpedBackground::new(banner_width(width))
            .with_colors(palette.primary(), palette.background());
        Self {
            running: false,
            gallery: Gallery::new(Registry::builtin(), palette),
            banner,
            config,
            queue: FrameQueue::new(),
            scroll: 0,
            notice: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.mount();
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.advance_frame();
        }
        self.unmount();
        Ok(())
    }

    fn gallery_options(&self) -> GalleryOptions {
        GalleryOptions {
            randomize: self.config.randomize,
            seed: self.config.seed,
        }
    }

    fn mount(&mut self) {
        let options = self.gallery_options();
        self.gallery.set_options(options, &mut self.queue);
        if self.config.show_background {
            self.banner.mount(&mut self.queue);
        }
    }

    fn unmount(&mut self) {
        self.gallery.unmount(&mut self.queue);
        self.banner.unmount(&mut self.queue);
        debug!(pending = self.queue.pending(), "unmounted");
    }

    /// Deliver one presented frame to every pending animation.
    fn advance_frame(&mut self) {
        for handle in self.queue.advance() {
            if !self.gallery.on_frame(handle, &mut self.queue) {
                self.banner.on_frame(handle, &mut self.queue);
            }
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let palette = self.gallery.palette().clone();
        let area = frame.area();
        frame.render_widget(Block::new().style(Style::new().bg(palette.background().into())), area);

        let banner_rows = if self.banner.is_mounted() { BANNER_ROWS } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Length(banner_rows), // Warped banner
            Constraint::Length(1),           // Spacing
            Constraint::Fill(1),             // Tile grid
            Constraint::Length(1),           // Status
            Constraint::Length(1),           // Help text
        ])
        .split(area);

        if self.banner.is_mounted() {
            let viewport = u32::from(chunks[0].width) * BLOCK_SIZE;
            let banner = SurfaceView::new(self.banner.surface())
                .crop(viewport, self.banner.surface().height());
            frame.render_widget(banner, chunks[0]);
        }

        self.render_grid(frame, chunks[2], &palette);
        self.render_status(frame, chunks[3], &palette);

        let accent: Color = palette.primary().into();
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "r".bold().fg(accent),
            " shuffle  ".dark_gray(),
            "n".bold().fg(accent),
            " new seed  ".dark_gray(),
            "s".bold().fg(accent),
            " speed  ".dark_gray(),
            "b".bold().fg(accent),
            " banner  ".dark_gray(),
            "w".bold().fg(accent),
            " save  ".dark_gray(),
            "←/→".bold().fg(accent),
            " scroll".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[4]);
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let layout = self.gallery.layout();
        if layout.is_empty() {
            let empty = Paragraph::new("no patterns")
                .style(Style::new().fg(palette.primary().into()))
                .centered();
            frame.render_widget(empty, area);
            return;
        }

        let (tile_cols, tile_rows) = tile_cells(area, layout);
        let shown = visible_columns(area.width, tile_cols).min(layout.columns);
        self.scroll = self.scroll.min(layout.columns - shown);

        for instance in self.gallery.instances() {
            let Some((row, col)) = layout.cell(instance.id) else {
                continue;
            };
            if col < self.scroll || col >= self.scroll + shown {
                continue;
            }
            let x = area.x + (col - self.scroll) as u16 * (tile_cols + TILE_GAP);
            let y = area.y + row as u16 * (tile_rows + TILE_GAP);
            let tile = Rect::new(x, y, tile_cols, tile_rows);
            if tile.intersection(area) != tile {
                continue;
            }
            if let Some(surface) = self.gallery.surface(instance.id) {
                frame.render_widget(SurfaceView::new(surface), tile);
            }
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let seed = match (self.config.randomize, self.config.seed) {
            (false, _) => "-".to_string(),
            (true, Some(seed)) => seed.to_string(),
            (true, None) => "clock".to_string(),
        };
        let mode = if self.config.randomize { "shuffled" } else { "in order" };
        let mut text = format!(
            "{} · {} patterns · {} animating · {mode} · seed {seed} · {}",
            self.first_visible_name().unwrap_or("-"),
            self.gallery.instances().len(),
            self.gallery.animating(),
            self.config.speed.label(),
        );
        if let Some(notice) = &self.notice {
            text.push_str(" · ");
            text.push_str(notice);
        }
        let status = Paragraph::new(text)
            .style(Style::new().fg(palette.primary().into()))
            .centered();
        frame.render_widget(status, area);
    }

    /// Name of the top-left tile on screen.
    fn first_visible_name(&self) -> Option<&'static str> {
        self.gallery
            .instances()
            .get(self.scroll)
            .map(|instance| instance.spec.name())
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        self.pump_events(|timeout| {
            if event::poll(timeout)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
    }

    /// Handle input until one frame interval has passed, so a held key
    /// cannot make the animation run faster.
    fn pump_events<F>(&mut self, mut next_event: F) -> color_eyre::Result<()>
    where
        F: FnMut(Duration) -> io::Result<Option<Event>>,
    {
        let deadline = Instant::now() + self.frame_interval();
        while self.running {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            let Some(event) = next_event(remaining)? else {
                break;
            };
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, _) => self.on_resize(width),
                _ => {}
            }
        }
        Ok(())
    }

    fn frame_interval(&self) -> Duration {
        self.config.speed.frame_interval()
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('r')) => self.toggle_randomize(),
            (_, KeyCode::Char('n')) => self.new_seed(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char('b')) => self.toggle_banner(),
            (_, KeyCode::Char('w')) => self.save_config(),
            (_, KeyCode::Left | KeyCode::Char('h')) => self.scroll = self.scroll.saturating_sub(1),
            (_, KeyCode::Right | KeyCode::Char('l')) => {
                let last = self.gallery.layout().columns.saturating_sub(1);
                self.scroll = (self.scroll + 1).min(last);
            }
            _ => {}
        }
    }

    /// Re-measure the banner for the new terminal width.
    fn on_resize(&mut self, width: u16) {
        self.banner.resize(banner_width(width));
    }

    fn toggle_randomize(&mut self) {
        self.config.randomize = !self.config.randomize;
        self.rebuild();
    }

    /// Shuffle with a fresh seed taken from the clock.
    fn new_seed(&mut self) {
        let seed = Lcg::from_entropy().next_index(LCG_MODULUS as usize) as u64;
        self.config.randomize = true;
        self.config.seed = Some(seed);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let options = self.gallery_options();
        self.gallery.rebuild(options, &mut self.queue);
        self.notice = None;
    }

    fn cycle_speed(&mut self) {
        self.config.speed = self.config.speed.next();
    }

    fn toggle_banner(&mut self) {
        self.config.show_background = !self.config.show_background;
        if self.config.show_background {
            self.banner.mount(&mut self.queue);
        } else {
            self.banner.unmount(&mut self.queue);
        }
    }

    fn save_config(&mut self) {
        self.notice = Some(match self.config.save() {
            Ok(path) => format!("saved {}", path.display()),
            Err(err) => {
                warn!(%err, "failed to save config");
                format!("save failed: {err}")
            }
        });
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Logical banner width for a terminal `width` cells wide: one block per cell.
fn banner_width(width: u16) -> u32 {
    u32::from(width) * BLOCK_SIZE
}

/// Tile size in cells `(columns, rows)` so the whole grid fits `area` where
/// possible. Half-block cells make one column one pixel wide and one row two
/// pixels tall, so square tiles are twice as wide as they are tall.
fn tile_cells(area: Rect, layout: GridLayout) -> (u16, u16) {
    let columns = layout.columns.max(1) as u16;
    let by_width = (area.width / columns).saturating_sub(TILE_GAP);
    let by_height = (area.height / GRID_ROWS as u16).saturating_sub(TILE_GAP) * 2;
    let cols = by_width.min(by_height).clamp(MIN_TILE_COLS, MAX_TILE_COLS);
    (cols, cols / 2)
}

/// How many tile columns fit across `width` cells.
fn visible_columns(width: u16, tile_cols: u16) -> usize {
    usize::from((width + TILE_GAP) / (tile_cols + TILE_GAP)).max(1)
}
