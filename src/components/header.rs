use alloy::primitives::U256;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::data::wallet::WalletState;
use crate::theme::THEME;
use crate::utils;

pub struct Header {
    pub chain_id: u64,
    pub current_tab: usize,
    pub connected: bool,
    pub chain_name: String,
    pub native_symbol: String,
    pub wallet: WalletState,
    pub balance: Option<U256>,
}

const TABS: &[&str] = &["Mood [1]", "History [2]"];

impl Header {
    pub fn new() -> Self {
        Self {
            chain_id: 0,
            current_tab: 0,
            connected: false,
            chain_name: String::new(),
            native_symbol: "C2FLR".to_string(),
            wallet: WalletState::Disconnected,
            balance: None,
        }
    }

    fn display_chain_name(&self) -> &str {
        if !self.chain_name.is_empty() {
            return &self.chain_name;
        }
        match self.chain_id {
            14 => "Flare",
            16 => "Coston",
            19 => "Songbird",
            114 => "Coston2",
            _ => "Unknown",
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // Background for the entire header bar
        let header_block = Block::default().style(THEME.header_style());
        frame.render_widget(header_block, area);

        // Split the header into three sections: left (title), center (tabs), right (chain + wallet)
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Min(0),
                Constraint::Length(50),
            ])
            .split(area);

        // Left: App title
        let title = Paragraph::new(Span::styled(
            " mood-tui",
            Style::default()
                .fg(THEME.text_accent)
                .add_modifier(Modifier::BOLD),
        ))
        .style(THEME.header_style());
        frame.render_widget(title, chunks[0]);

        // Center: Tab navigation
        let tab_titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
        let tabs = Tabs::new(tab_titles)
            .select(self.current_tab)
            .style(THEME.muted_style())
            .highlight_style(THEME.accent_style().add_modifier(Modifier::BOLD))
            .divider(Span::raw(" | "));
        frame.render_widget(tabs, chunks[1]);

        // Right: chain, wallet, and balance
        let mut spans = vec![Span::styled(
            self.display_chain_name(),
            Style::default().fg(THEME.text),
        )];
        spans.push(Span::styled(" | ", THEME.muted_style()));
        spans.push(Span::styled(
            self.wallet.display_name(),
            THEME.address_style(),
        ));
        if let Some(balance) = self.balance {
            spans.push(Span::styled(" | ", THEME.muted_style()));
            spans.push(Span::styled(
                utils::format_native(balance, &self.native_symbol),
                THEME.accent_style(),
            ));
        }
        let network_paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .style(THEME.header_style());
        frame.render_widget(network_paragraph, chunks[2]);
    }
}
