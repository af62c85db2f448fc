use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::components::Component;
use crate::data::types::{TxPhase, TxStatus};
use crate::events::AppEvent;
use crate::theme::THEME;
use crate::utils;

/// Longest accepted mood, in characters. Input past this is dropped at entry.
pub const MAX_MOOD_LEN: usize = 256;

/// Ephemeral draft for the mood editor. Never persisted.
#[derive(Debug, Default)]
pub struct MoodDraft {
    text: String,
}

impl MoodDraft {
    pub fn push_char(&mut self, c: char) {
        if self.char_count() < MAX_MOOD_LEN {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Valid when the trimmed text is non-empty and within the length
    /// bound. The bound holds by construction since entry truncates.
    pub fn is_valid(&self) -> bool {
        !self.trimmed().is_empty() && self.char_count() <= MAX_MOOD_LEN
    }
}

pub struct MoodView {
    pub mood: Option<String>,
    pub mood_loading: bool,
    pub status: TxStatus,
    pub draft: MoodDraft,
    pub editing: bool,
    pub explorer_url: Option<String>,
}

impl MoodView {
    pub fn new() -> Self {
        Self {
            mood: None,
            mood_loading: true,
            status: TxStatus::default(),
            draft: MoodDraft::default(),
            editing: false,
            explorer_url: None,
        }
    }

    fn render_mood_panel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Current On-Chain Mood ")
            .borders(Borders::ALL)
            .border_style(THEME.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "The latest mood stored in the smart contract.",
                THEME.muted_style(),
            )),
            Line::from(""),
        ];

        if self.mood_loading {
            lines.push(Line::from(Span::styled("Loading...", THEME.muted_style())));
        } else {
            match &self.mood {
                Some(mood) => {
                    lines.push(Line::from(Span::styled(
                        format!("\u{201c}{mood}\u{201d}"),
                        THEME.mood_style(),
                    )));
                }
                None => {
                    lines.push(Line::from(Span::styled(
                        "No mood set yet.",
                        THEME.muted_style(),
                    )));
                }
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn render_status_panel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Transaction Status ")
            .borders(Borders::ALL)
            .border_style(THEME.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();

        match self.status.phase() {
            TxPhase::Submitting | TxPhase::Confirming => {
                lines.push(Line::from(Span::styled(
                    "A transaction is currently being processed...",
                    THEME.accent_style(),
                )));
            }
            _ => {
                lines.push(Line::from(Span::styled(
                    "No active transaction. You can safely update your mood.",
                    THEME.muted_style(),
                )));
            }
        }

        if self.status.is_confirmed {
            lines.push(Line::from(Span::styled(
                "\u{2713} Last transaction confirmed and mood updated on-chain.",
                THEME.success_style(),
            )));
        }

        if let Some(hash) = self.status.hash {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Last Tx: ", THEME.muted_style()),
                Span::styled(utils::truncate_hash(&hash), THEME.hash_style()),
            ]));
            if let Some(ref explorer) = self.explorer_url {
                lines.push(Line::from(Span::styled(
                    format!("{explorer}/tx/{hash:#x}"),
                    THEME.muted_style(),
                )));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.editing {
            THEME.border_focused_style()
        } else {
            THEME.border_style()
        };
        let block = Block::default()
            .title(format!(
                " Update Your Mood ({}/{MAX_MOOD_LEN}) ",
                self.draft.char_count()
            ))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();

        if self.draft.is_empty() && !self.editing {
            lines.push(Line::from(Span::styled(
                "How are you feeling today? (stored publicly on-chain)",
                THEME.muted_style(),
            )));
        } else {
            let cursor = if self.editing { "_" } else { "" };
            lines.push(Line::from(Span::styled(
                format!("{}{cursor}", self.draft.as_str()),
                Style::default().fg(THEME.text),
            )));
        }

        if !self.draft.is_valid() && self.draft.char_count() > 0 {
            lines.push(Line::from(Span::styled(
                format!("Please enter a non-empty mood within {MAX_MOOD_LEN} characters."),
                THEME.error_style(),
            )));
        }

        lines.push(Line::from(""));
        let hint = if self.editing {
            "[Enter] Update mood on-chain  [Esc] Stop editing"
        } else if self.status.is_busy() {
            "Updating mood..."
        } else {
            "[i] Edit  [c] Clear  [r] Refresh"
        };
        lines.push(Line::from(Span::styled(hint, THEME.muted_style())));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn render_error_panel(&self, frame: &mut Frame, area: Rect) {
        let Some(ref error) = self.status.error else {
            return;
        };
        if area.height < 3 {
            return;
        }

        let block = Block::default()
            .title(" Transaction Error ")
            .borders(Borders::ALL)
            .border_style(THEME.error_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Surface the message verbatim; resubmitting is the only recovery
        let paragraph = Paragraph::new(error.as_str())
            .style(THEME.error_style())
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}

impl Component for MoodView {
    fn handle_key(&mut self, key: KeyEvent) -> Option<AppEvent> {
        if self.editing {
            match key.code {
                KeyCode::Esc => {
                    self.editing = false;
                    None
                }
                KeyCode::Enter => {
                    if self.status.is_busy() || !self.draft.is_valid() {
                        return None;
                    }
                    self.editing = false;
                    Some(AppEvent::SubmitMood(self.draft.trimmed().to_string()))
                }
                KeyCode::Backspace => {
                    self.draft.backspace();
                    None
                }
                KeyCode::Char(c) => {
                    self.draft.push_char(c);
                    None
                }
                _ => None,
            }
        } else {
            match key.code {
                KeyCode::Char('i') | KeyCode::Char('e') => {
                    if !self.status.is_busy() {
                        self.editing = true;
                    }
                    None
                }
                KeyCode::Char('c') => {
                    // Clearing while busy is a no-op
                    if !self.status.is_busy() {
                        self.draft.clear();
                    }
                    None
                }
                KeyCode::Char('r') => Some(AppEvent::RefreshMood),
                _ => None,
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(area);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        self.render_mood_panel(frame, panels[0]);
        self.render_status_panel(frame, panels[1]);
        self.render_editor(frame, chunks[1]);
        self.render_error_panel(frame, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::B256;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(text: &str) -> MoodDraft {
        let mut draft = MoodDraft::default();
        for c in text.chars() {
            draft.push_char(c);
        }
        draft
    }

    #[test]
    fn test_empty_draft_invalid() {
        let draft = MoodDraft::default();
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_short_draft_valid() {
        let draft = typed("happy");
        assert!(draft.is_valid());
        assert_eq!(draft.char_count(), 5);
    }

    #[test]
    fn test_max_length_draft_valid() {
        let draft = typed(&"a".repeat(256));
        assert_eq!(draft.char_count(), 256);
        assert!(draft.is_valid());
    }

    #[test]
    fn test_entry_truncates_past_bound() {
        let draft = typed(&"a".repeat(300));
        assert_eq!(draft.char_count(), 256);
        assert!(draft.is_valid());
    }

    #[test]
    fn test_whitespace_only_invalid() {
        let draft = typed("   ");
        assert!(!draft.is_valid());
        assert_eq!(draft.char_count(), 3);
    }

    #[test]
    fn test_multibyte_chars_counted_not_bytes() {
        let draft = typed(&"\u{00e9}".repeat(256));
        assert_eq!(draft.char_count(), 256);
        assert!(draft.is_valid());
    }

    #[test]
    fn test_submit_emits_trimmed_text() {
        let mut view = MoodView::new();
        view.editing = true;
        for c in "  happy  ".chars() {
            view.draft.push_char(c);
        }

        let event = view.handle_key(key(KeyCode::Enter));
        match event {
            Some(AppEvent::SubmitMood(text)) => assert_eq!(text, "happy"),
            other => panic!("expected SubmitMood, got {other:?}"),
        }
        assert!(!view.editing);
    }

    #[test]
    fn test_submit_while_busy_is_noop() {
        let mut view = MoodView::new();
        view.editing = true;
        view.draft.push_char('x');
        view.status.begin_submit();

        assert!(view.handle_key(key(KeyCode::Enter)).is_none());
        assert!(view.editing);
    }

    #[test]
    fn test_submit_invalid_draft_is_noop() {
        let mut view = MoodView::new();
        view.editing = true;
        assert!(view.handle_key(key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_clear_while_busy_is_noop() {
        let mut view = MoodView::new();
        view.draft.push_char('x');
        view.status.mark_submitted(B256::ZERO);

        assert!(view.handle_key(key(KeyCode::Char('c'))).is_none());
        assert_eq!(view.draft.as_str(), "x");
    }

    #[test]
    fn test_clear_while_idle_empties_draft() {
        let mut view = MoodView::new();
        view.draft.push_char('x');

        assert!(view.handle_key(key(KeyCode::Char('c'))).is_none());
        assert!(view.draft.is_empty());
    }

    #[test]
    fn test_edit_blocked_while_busy() {
        let mut view = MoodView::new();
        view.status.begin_submit();

        assert!(view.handle_key(key(KeyCode::Char('i'))).is_none());
        assert!(!view.editing);
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut view = MoodView::new();
        view.editing = true;
        view.handle_key(key(KeyCode::Char('h')));
        view.handle_key(key(KeyCode::Char('i')));
        assert_eq!(view.draft.as_str(), "hi");

        view.handle_key(key(KeyCode::Backspace));
        assert_eq!(view.draft.as_str(), "h");
    }
}
