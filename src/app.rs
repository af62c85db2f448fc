use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::prelude::*;
use ratatui::widgets::*;
use tokio::sync::mpsc;

use crate::components::Component;
use crate::components::header::Header;
use crate::components::help::HelpOverlay;
use crate::components::history_view::HistoryView;
use crate::components::mood_view::MoodView;
use crate::components::status_bar::StatusBar;
use crate::components::welcome::Welcome;
use crate::data::MoodService;
use crate::data::wallet::WalletState;
use crate::events::{AppEvent, View};
use crate::theme::THEME;
use crate::utils;

pub struct App {
    // Navigation
    view_stack: Vec<View>,
    current_view: View,

    // Components
    header: Header,
    mood_view: MoodView,
    history_view: HistoryView,
    welcome: Welcome,
    status_bar: StatusBar,
    help: HelpOverlay,

    // Data
    service: Arc<MoodService>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,

    // State
    wallet: WalletState,
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    pub fn with_service(
        service: Arc<MoodService>,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        tick_rate_ms: u64,
    ) -> Self {
        Self {
            view_stack: Vec::new(),
            current_view: View::Mood,
            header: Header::new(),
            mood_view: MoodView::new(),
            history_view: HistoryView::new(),
            welcome: Welcome::new(),
            status_bar: StatusBar::new(),
            help: HelpOverlay::new(),
            service,
            event_rx,
            wallet: WalletState::Disconnected,
            should_quit: false,
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn set_chain_info(&mut self, name: String, symbol: String, explorer_url: Option<String>) {
        self.header.chain_name = name.clone();
        self.header.native_symbol = symbol;
        self.welcome.chain_name = name;
        self.mood_view.explorer_url = explorer_url;
    }

    pub fn set_wallet(&mut self, wallet: WalletState) {
        self.header.wallet = wallet.clone();
        self.wallet = wallet;
    }

    pub async fn run(&mut self, mut terminal: ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        // Initial data load
        self.service.fetch_mood();
        self.service.fetch_balance();
        self.service.load_history();

        let mut interval = tokio::time::interval(self.tick_rate);
        let mut events = EventStream::new();

        while !self.should_quit {
            tokio::select! {
                _ = interval.tick() => {
                    terminal.draw(|frame| self.render(frame))?;
                }
                Some(Ok(event)) = events.next() => {
                    self.handle_terminal_event(event);
                }
                Some(app_event) = self.event_rx.recv() => {
                    self.handle_app_event(app_event);
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Fill background
        frame.render_widget(
            Block::default().style(Style::default().bg(THEME.bg)),
            area,
        );

        // Layout: header (1) | content (fill) | status bar (1)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        // Header
        self.header.render(frame, chunks[0]);

        // Main content based on current view. Without a wallet the mood tab
        // shows the connect card instead of the editor.
        match self.current_view {
            View::Mood => {
                if self.wallet.is_connected() {
                    self.mood_view.render(frame, chunks[1]);
                } else {
                    self.welcome.render(frame, chunks[1]);
                }
            }
            View::History => self.history_view.render(frame, chunks[1]),
        }

        // Status bar
        self.status_bar.render(frame, chunks[2]);

        // Overlay (rendered on top)
        self.help.render(frame, area);
    }

    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only handle key press events (not release/repeat) for cross-platform compat
            if key.kind != KeyEventKind::Press {
                return;
            }

            // Help overlay consumes all keys when visible
            if self.help.handle_key(key) {
                return;
            }

            // The mood editor consumes keys while editing
            if self.current_view == View::Mood
                && self.wallet.is_connected()
                && self.mood_view.editing
            {
                if let Some(app_event) = self.mood_view.handle_key(key) {
                    self.handle_app_event(app_event);
                }
                return;
            }

            // Global keys
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('?') => {
                    self.help.toggle();
                    return;
                }
                // Tab switching with number keys
                KeyCode::Char('1') => {
                    self.navigate_to(View::Mood);
                    return;
                }
                KeyCode::Char('2') => {
                    self.navigate_to(View::History);
                    return;
                }
                KeyCode::Esc => {
                    self.go_back();
                    return;
                }
                _ => {}
            }

            // Delegate to current view's component
            let app_event = match self.current_view {
                View::Mood => {
                    if self.wallet.is_connected() {
                        self.mood_view.handle_key(key)
                    } else {
                        None
                    }
                }
                View::History => self.history_view.handle_key(key),
            };

            if let Some(event) = app_event {
                self.handle_app_event(event);
            }
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Connected(chain_id) => {
                self.header.chain_id = chain_id;
                self.header.connected = true;
                self.status_bar.connected = true;
                self.status_bar.chain_id = chain_id;
            }
            AppEvent::MoodLoaded(mood) => {
                self.status_bar.loading = false;
                self.mood_view.mood_loading = false;
                self.mood_view.mood = mood.clone();
                self.welcome.mood = mood;
            }
            AppEvent::BalanceLoaded(balance) => {
                self.header.balance = Some(balance);
            }
            AppEvent::HistoryLoaded(entries) => {
                self.history_view.set_entries(entries);
            }
            AppEvent::SubmitMood(text) => {
                // At most one write in flight; submitting while busy is a no-op
                if self.mood_view.status.is_busy() {
                    return;
                }
                self.mood_view.status.begin_submit();
                self.status_bar.error_message = None;
                self.status_bar.info_message = None;
                self.service.submit_mood(text);
            }
            AppEvent::MoodSubmitted(hash) => {
                self.mood_view.status.mark_submitted(hash);
                // The write call resolved; the draft is done with
                self.mood_view.draft.clear();
            }
            AppEvent::MoodConfirmed { hash: _, block_number } => {
                self.mood_view.status.mark_confirmed();
                if let Some(number) = block_number {
                    self.status_bar.info_message =
                        Some(format!("Confirmed in block #{}", utils::format_number(number)));
                }
            }
            AppEvent::MoodFailed(message) => {
                self.mood_view.status.mark_failed(message);
                self.status_bar.loading = false;
            }
            AppEvent::RefreshMood => {
                self.mood_view.mood_loading = true;
                self.status_bar.loading = true;
                self.service.fetch_mood();
            }
            AppEvent::ExportHistory => {
                self.service.export_history();
            }
            AppEvent::ExportComplete(message) => {
                self.status_bar.info_message = Some(message);
            }
            AppEvent::Back => {
                self.go_back();
            }
            AppEvent::Error(message) => {
                self.status_bar.error_message = Some(message);
                self.status_bar.loading = false;
                self.mood_view.mood_loading = false;
            }
        }
    }

    fn navigate_to(&mut self, view: View) {
        match view {
            View::Mood => self.header.current_tab = 0,
            View::History => self.header.current_tab = 1,
        }

        // Clear transient messages on navigation
        self.status_bar.error_message = None;
        self.status_bar.info_message = None;

        if view == self.current_view {
            return;
        }

        // Push current view to stack
        let old_view = std::mem::replace(&mut self.current_view, view);
        self.view_stack.push(old_view);

        if view == View::History {
            self.service.load_history();
        }
    }

    fn go_back(&mut self) {
        if let Some(prev_view) = self.view_stack.pop() {
            self.current_view = prev_view;
            match self.current_view {
                View::Mood => self.header.current_tab = 0,
                View::History => self.header.current_tab = 1,
            }
            self.status_bar.error_message = None;
        }
    }
}
