//! Application core — event loop and action dispatch.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use storelight_core::{BackendStatus, CatalogService, LiveBackend};

use crate::action::Action;
use crate::badge;
use crate::event::{Event, EventReader};
use crate::probe_bridge::spawn_probe_bridge;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    /// Whether the app should keep running.
    running: bool,
    /// Current backend status, initially Checking.
    status: BackendStatus,
    /// Probe inputs, consumed when the bridge is spawned.
    probe_parts: Option<(LiveBackend, CatalogService)>,
    /// Cancels the probe bridge on shutdown.
    cancel: CancellationToken,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(backend: LiveBackend, catalog: CatalogService) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            status: BackendStatus::checking(),
            probe_parts: Some((backend, catalog)),
            cancel: CancellationToken::new(),
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        // One probe per run, started at mount time.
        if let Some((backend, catalog)) = self.probe_parts.take() {
            spawn_probe_bridge(backend, catalog, self.action_tx.clone(), self.cancel.clone());
        }

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = Self::map_key(key) {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                let render = matches!(action, Action::Render);
                self.process_action(action);

                if render {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.cancel.cancel();
        events.stop();
        info!("event loop ended");
        Ok(())
    }

    /// Map a key event to an action.
    fn map_key(key: KeyEvent) -> Option<Action> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc) => Some(Action::Quit),
            _ => None,
        }
    }

    /// Process a single action.
    fn process_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.running = false;
            }
            Action::StatusResolved(status) => {
                // The cell guarantees a single resolution; mirror it here.
                if !self.status.is_resolved() {
                    self.status = status;
                }
            }
            // Resize is absorbed by the next draw; Tick drives nothing yet.
            Action::Resize(..) | Action::Tick | Action::Render => {}
        }
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::vertical([
            Constraint::Min(1),    // Badge panel
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        self.render_badge_panel(frame, layout[0]);
        Self::render_status_bar(frame, layout[1]);
    }

    /// Render the centered badge panel.
    fn render_badge_panel(&self, frame: &mut Frame, area: Rect) {
        let panel_height = 5u16.min(area.height);
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(panel_height),
            Constraint::Fill(1),
        ])
        .split(area);

        let panel_width = 48u16.min(area.width);
        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(panel_width),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);
        let panel = horizontal[1];

        let block = Block::default()
            .title(" Backend Status ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let lines = vec![
            Line::from(""),
            badge::badge_line(&self.status).alignment(Alignment::Center),
            Line::from(Span::styled("storefront catalog", theme::dim_text()))
                .alignment(Alignment::Center),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Render the bottom status bar with key hints.
    fn render_status_bar(frame: &mut Frame, area: Rect) {
        let hints = Line::from(Span::styled(" q quit", theme::key_hint()));
        frame.render_widget(Paragraph::new(hints), area);
    }
}
