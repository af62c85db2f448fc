use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::components::Component;
use crate::data::types::MoodRecord;
use crate::events::AppEvent;
use crate::theme::THEME;
use crate::utils;

pub struct HistoryView {
    pub entries: Vec<MoodRecord>,
    pub selected: usize,
    table_state: TableState,
    scroll_state: ScrollbarState,
}

impl HistoryView {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: 0,
            table_state: TableState::default().with_selected(0),
            scroll_state: ScrollbarState::default(),
        }
    }

    pub fn set_entries(&mut self, entries: Vec<MoodRecord>) {
        self.entries = entries;
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
        self.table_state.select(Some(self.selected));
    }

    fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = if self.selected + 1 >= self.entries.len() {
            self.selected
        } else {
            self.selected + 1
        };
        self.selected = next;
        self.table_state.select(Some(next));
        self.scroll_state = self.scroll_state.position(next);
    }

    fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let prev = self.selected.saturating_sub(1);
        self.selected = prev;
        self.table_state.select(Some(prev));
        self.scroll_state = self.scroll_state.position(prev);
    }

    fn select_first(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = 0;
        self.table_state.select(Some(0));
        self.scroll_state = self.scroll_state.position(0);
    }

    fn select_last(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        self.selected = last;
        self.table_state.select(Some(last));
        self.scroll_state = self.scroll_state.position(last);
    }
}

impl Component for HistoryView {
    fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_prev();
                None
            }
            KeyCode::Char('g') => {
                self.select_first();
                None
            }
            KeyCode::Char('G') => {
                self.select_last();
                None
            }
            KeyCode::Char('x') => {
                if self.entries.is_empty() {
                    None
                } else {
                    Some(AppEvent::ExportHistory)
                }
            }
            KeyCode::Esc | KeyCode::Backspace => Some(AppEvent::Back),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let outer_block = Block::default()
            .title(format!(" Mood History ({}) ", self.entries.len()))
            .borders(Borders::ALL)
            .border_style(THEME.border_focused_style());

        let inner = outer_block.inner(area);
        frame.render_widget(outer_block, area);

        if self.entries.is_empty() {
            let text = Paragraph::new(
                "No confirmed mood updates yet.\n\nSubmit one from the Mood tab and it will show up here.",
            )
            .style(THEME.muted_style())
            .alignment(Alignment::Center);
            frame.render_widget(text, inner);
            return;
        }

        let header = Row::new(vec![
            Cell::from("#"),
            Cell::from("Mood"),
            Cell::from("Tx Hash"),
            Cell::from("Chain"),
            Cell::from("When"),
        ])
        .style(THEME.table_header_style())
        .bottom_margin(0);

        let rows: Vec<Row> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Row::new(vec![
                    Cell::from(format!("{}", i + 1)),
                    Cell::from(entry.mood.clone()).style(THEME.mood_style()),
                    Cell::from(utils::truncate_hash(&entry.tx_hash)).style(THEME.hash_style()),
                    Cell::from(entry.chain_id.to_string()).style(THEME.muted_style()),
                    Cell::from(utils::format_time_ago(entry.submitted_at))
                        .style(THEME.muted_style()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Min(24),
            Constraint::Length(16),
            Constraint::Length(7),
            Constraint::Length(12),
        ];

        self.scroll_state = self.scroll_state.content_length(self.entries.len());

        let table_block = Block::default().borders(Borders::NONE);
        let table = Table::new(rows, widths)
            .header(header)
            .block(table_block)
            .row_highlight_style(THEME.selected_style())
            .highlight_symbol(" > ");

        frame.render_stateful_widget(table, inner, &mut self.table_state);

        // Scrollbar
        if self.entries.len() > inner.height as usize {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("^"))
                .end_symbol(Some("v"));

            let scrollbar_area = Rect {
                x: area.x + area.width.saturating_sub(1),
                y: area.y + 1,
                width: 1,
                height: area.height.saturating_sub(2),
            };

            frame.render_stateful_widget(scrollbar, scrollbar_area, &mut self.scroll_state);
        }
    }
}
