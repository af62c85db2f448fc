use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::theme::THEME;

/// Shown on the mood tab when no wallet is configured, mirroring the
/// connect-your-wallet card of the web front-end this replaces.
pub struct Welcome {
    pub chain_name: String,
    pub mood: Option<String>,
}

impl Welcome {
    pub fn new() -> Self {
        Self {
            chain_name: "Flare Coston2".to_string(),
            mood: None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(64);
        let height = area.height.min(14);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let card = Rect::new(x, y, width, height);

        let block = Block::default()
            .title(" On-Chain Mood Tracker ")
            .borders(Borders::ALL)
            .border_style(THEME.border_focused_style());
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "Connect a wallet to read and update your mood on {}.",
                    self.chain_name
                ),
                Style::default().fg(THEME.text),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  - View the globally stored on-chain mood",
                THEME.muted_style(),
            )),
            Line::from(Span::styled(
                "  - Update your mood via a blockchain transaction",
                THEME.muted_style(),
            )),
            Line::from(Span::styled(
                "  - See live transaction and confirmation status",
                THEME.muted_style(),
            )),
            Line::from(""),
        ];

        if let Some(ref mood) = self.mood {
            lines.push(Line::from(vec![
                Span::styled("Current mood: ", THEME.muted_style()),
                Span::styled(format!("\u{201c}{mood}\u{201d}"), THEME.mood_style()),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Restart with --private-key <hex> (or set MOOD_PRIVATE_KEY)",
            THEME.warning_style(),
        )));
        lines.push(Line::from(Span::styled(
            "to enable mood updates.",
            THEME.warning_style(),
        )));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}
