use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::theme::THEME;

pub struct HelpOverlay {
    pub visible: bool,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Returns true if it consumed the event
    pub fn handle_key(&mut self, _key: KeyEvent) -> bool {
        if self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let popup_width = area.width * 60 / 100;
        let popup_height = area.height * 70 / 100;
        let x = area.x + (area.width - popup_width) / 2;
        let y = area.y + (area.height - popup_height) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(THEME.border_focused_style())
            .style(Style::default().bg(THEME.surface));

        let help_text = vec![
            Line::from(Span::styled(
                "Mood",
                Style::default()
                    .fg(THEME.text_accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("  i / e    ", Style::default().fg(THEME.text_accent)),
                Span::styled("Edit the mood draft", Style::default().fg(THEME.text)),
            ]),
            Line::from(vec![
                Span::styled("  Enter    ", Style::default().fg(THEME.text_accent)),
                Span::styled(
                    "Submit the draft on-chain (while editing)",
                    Style::default().fg(THEME.text),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Esc      ", Style::default().fg(THEME.text_accent)),
                Span::styled("Stop editing", Style::default().fg(THEME.text)),
            ]),
            Line::from(vec![
                Span::styled("  c        ", Style::default().fg(THEME.text_accent)),
                Span::styled("Clear the draft", Style::default().fg(THEME.text)),
            ]),
            Line::from(vec![
                Span::styled("  r        ", Style::default().fg(THEME.text_accent)),
                Span::styled("Refresh the stored mood", Style::default().fg(THEME.text)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "History",
                Style::default()
                    .fg(THEME.text_accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    "  \u{2191}/k \u{2193}/j  ",
                    Style::default().fg(THEME.text_accent),
                ),
                Span::styled("Move selection", Style::default().fg(THEME.text)),
            ]),
            Line::from(vec![
                Span::styled("  g / G    ", Style::default().fg(THEME.text_accent)),
                Span::styled("Go to top / bottom", Style::default().fg(THEME.text)),
            ]),
            Line::from(vec![
                Span::styled("  x        ", Style::default().fg(THEME.text_accent)),
                Span::styled("Export history to CSV", Style::default().fg(THEME.text)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Views",
                Style::default()
                    .fg(THEME.text_accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("  1        ", Style::default().fg(THEME.text_accent)),
                Span::styled("Mood", Style::default().fg(THEME.text)),
            ]),
            Line::from(vec![
                Span::styled("  2        ", Style::default().fg(THEME.text_accent)),
                Span::styled("History", Style::default().fg(THEME.text)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Other",
                Style::default()
                    .fg(THEME.text_accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("  ?        ", Style::default().fg(THEME.text_accent)),
                Span::styled("Toggle this help", Style::default().fg(THEME.text)),
            ]),
            Line::from(vec![
                Span::styled("  q        ", Style::default().fg(THEME.text_accent)),
                Span::styled("Quit", Style::default().fg(THEME.text)),
            ]),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
    }
}
