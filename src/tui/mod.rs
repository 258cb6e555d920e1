//! Ratatui-based terminal viewer.
//!
//! The dashboard is painted once per terminal width into an off-screen
//! canvas; the viewer shows a scrollable window over it plus a key-help
//! footer. Keys only move the viewport: the view itself never changes.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::error::AppError;
use crate::view::View;

pub mod canvas;
pub mod text;

/// Start the viewer on the current terminal.
pub fn run(view: View) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::terminal(format!("Failed to initialize terminal: {e}")))?;

    let mut viewer = Viewer::new(view);
    viewer.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::terminal(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    Scroll(i32),
    Top,
    Bottom,
    None,
}

pub struct Viewer {
    view: View,
    canvas: Option<Buffer>,
    scroll: u16,
    /// Rows available for the canvas in the last drawn frame.
    page: u16,
}

impl Viewer {
    pub fn new(view: View) -> Self {
        Self {
            view,
            canvas: None,
            scroll: 0,
            page: 0,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::terminal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::terminal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::terminal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply a key press. Returns `true` when the viewer should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let page = i32::from(self.page.max(1));
        let action = match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => Action::Scroll(1),
            KeyCode::Up | KeyCode::Char('k') => Action::Scroll(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => Action::Scroll(page),
            KeyCode::PageUp => Action::Scroll(-page),
            KeyCode::Home | KeyCode::Char('g') => Action::Top,
            KeyCode::End | KeyCode::Char('G') => Action::Bottom,
            _ => Action::None,
        };

        match action {
            Action::Quit => return true,
            Action::Scroll(delta) => {
                let next = i32::from(self.scroll) + delta;
                self.scroll = u16::try_from(next.max(0)).unwrap_or(u16::MAX).min(self.max_scroll());
            }
            Action::Top => self.scroll = 0,
            Action::Bottom => self.scroll = self.max_scroll(),
            Action::None => {}
        }
        false
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn content_height(&self) -> u16 {
        self.canvas.as_ref().map(|c| c.area.height).unwrap_or(0)
    }

    fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(self.page)
    }

    /// Repaint the canvas only when the width changed.
    fn ensure_canvas(&mut self, width: u16) {
        let stale = self.canvas.as_ref().map(|c| c.area.width != width).unwrap_or(true);
        if stale {
            let canvas = canvas::paint(&self.view, width);
            log::debug!("painted canvas {}x{}", canvas.area.width, canvas.area.height);
            self.canvas = Some(canvas);
        }
    }

    pub fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());

        let body = chunks[0];
        self.ensure_canvas(body.width);
        self.page = body.height;
        self.scroll = self.scroll.min(self.max_scroll());

        if let Some(canvas) = &self.canvas {
            blit(canvas, frame.buffer_mut(), body, self.scroll);
        }
        self.draw_footer(frame, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ j/k scroll  PgUp/PgDn page  Home/End jump  q quit";
        let total = self.content_height();
        let last = self.scroll.saturating_add(self.page).min(total);
        let position = format!("lines {}-{last} of {total}", self.scroll.saturating_add(1).min(total));
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(position, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Copy the canvas window starting at row `offset` into `area` of `dst`.
fn blit(src: &Buffer, dst: &mut Buffer, area: Rect, offset: u16) {
    let width = area.width.min(src.area.width);
    for row in 0..area.height {
        let sy = offset.saturating_add(row);
        if sy >= src.area.height {
            break;
        }
        for col in 0..width {
            dst[(area.x + col, area.y + row)] = src[(col, sy)].clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
        canvas::rows(terminal.backend().buffer())
    }

    fn drawn(width: u16, height: u16) -> (Viewer, Terminal<TestBackend>) {
        let mut viewer = Viewer::new(crate::view::render());
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| viewer.draw(f)).unwrap();
        (viewer, terminal)
    }

    #[test]
    fn first_frame_shows_header_and_footer() {
        let (_, terminal) = drawn(120, 40);
        let rows = screen(&terminal);
        assert!(rows.iter().any(|r| r.contains("Social Engineering & Adversarial Obfuscation")));
        assert!(rows.iter().any(|r| r.contains("q quit")));
    }

    #[test]
    fn scrolling_is_clamped_to_content() {
        let (mut viewer, _) = drawn(120, 20);
        assert_eq!(viewer.scroll(), 0);

        assert!(!viewer.handle_key(KeyCode::Up));
        assert_eq!(viewer.scroll(), 0);

        viewer.handle_key(KeyCode::Down);
        assert_eq!(viewer.scroll(), 1);

        viewer.handle_key(KeyCode::End);
        let bottom = viewer.scroll();
        assert_eq!(bottom, viewer.max_scroll());
        viewer.handle_key(KeyCode::Down);
        assert_eq!(viewer.scroll(), bottom);

        viewer.handle_key(KeyCode::Home);
        assert_eq!(viewer.scroll(), 0);
    }

    #[test]
    fn scrolled_frame_reaches_tech_stack() {
        let (mut viewer, mut terminal) = drawn(120, 20);
        viewer.handle_key(KeyCode::End);
        terminal.draw(|f| viewer.draw(f)).unwrap();
        let rows = screen(&terminal);
        assert!(rows.iter().any(|r| r.contains("Character-level modeling")));
    }

    #[test]
    fn quit_keys_exit() {
        let mut viewer = Viewer::new(crate::view::render());
        assert!(viewer.handle_key(KeyCode::Char('q')));
        assert!(viewer.handle_key(KeyCode::Esc));
        assert!(!viewer.handle_key(KeyCode::Char('x')));
    }

    #[test]
    fn canvas_is_repainted_on_resize() {
        let (mut viewer, _) = drawn(120, 30);
        assert_eq!(viewer.canvas.as_ref().unwrap().area.width, 120);

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| viewer.draw(f)).unwrap();
        assert_eq!(viewer.canvas.as_ref().unwrap().area.width, 80);
    }
}
