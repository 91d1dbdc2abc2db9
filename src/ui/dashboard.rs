use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::format::{format_change, format_price, format_signed_price, format_volume};
use crate::model::asset::MarketAsset;
use crate::model::bot::BotStatus;
use crate::model::portfolio::BotSettings;
use crate::model::signal::{SignalKind, TradeSignal};

const CONFIDENCE_BAR_WIDTH: usize = 20;

fn signal_color(kind: SignalKind) -> Color {
    match kind {
        SignalKind::Buy => Color::Green,
        SignalKind::Sell => Color::Red,
    }
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// `width` cells, filled in proportion to `confidence` (0..=100).
pub fn confidence_bar(confidence: u8, width: usize) -> String {
    let filled = (usize::from(confidence.min(100)) * width + 50) / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

pub struct HeaderBar {
    pub bot: BotStatus,
    pub tick_count: u64,
}

impl Widget for HeaderBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let title = Line::from(vec![
            Span::styled(
                " CryptoTrader AI ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "Automated trading system",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("  ticks: {}", self.tick_count),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let (dot_color, button_color) = if self.bot.is_active() {
            (Color::Green, Color::Red)
        } else {
            (Color::DarkGray, Color::Green)
        };
        let status = Line::from(vec![
            Span::styled("● ", Style::default().fg(dot_color)),
            Span::styled(
                self.bot.badge_label(),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", self.bot.action_label()),
                Style::default()
                    .fg(button_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(status.width() as u16),
            ])
            .split(inner);

        Paragraph::new(title).render(halves[0], buf);
        Paragraph::new(status)
            .alignment(Alignment::Right)
            .render(halves[1], buf);
    }
}

/// One of the three summary cards across the top.
pub struct SummaryCard<'a> {
    title: &'a str,
    headline: String,
    headline_color: Color,
    detail: Line<'a>,
}

impl<'a> SummaryCard<'a> {
    pub fn new(title: &'a str, headline: String, detail: Line<'a>) -> Self {
        Self {
            title,
            headline,
            headline_color: Color::White,
            detail,
        }
    }

    pub fn headline_color(mut self, color: Color) -> Self {
        self.headline_color = color;
        self
    }
}

impl Widget for SummaryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                self.headline,
                Style::default()
                    .fg(self.headline_color)
                    .add_modifier(Modifier::BOLD),
            )),
            self.detail,
        ];

        Paragraph::new(lines)
            .block(panel_block(self.title))
            .render(area, buf);
    }
}

pub fn portfolio_detail(total_profit: f64, profit_percent: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled("▲ ", Style::default().fg(Color::Green)),
        Span::styled(
            format_signed_price(total_profit),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!(" ({}%)", profit_percent),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

pub struct MarketPanel<'a> {
    assets: &'a [MarketAsset],
}

impl<'a> MarketPanel<'a> {
    pub fn new(assets: &'a [MarketAsset]) -> Self {
        Self { assets }
    }
}

impl Widget for MarketPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["", "Asset", "Symbol", "Price", "24h", "Volume 24h"])
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);

        let rows = self.assets.iter().map(|asset| {
            let change_color = if asset.is_up() { Color::Green } else { Color::Red };
            Row::new(vec![
                Cell::from(format!("({})", asset.initial())).style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(asset.name.clone())
                    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Cell::from(asset.symbol.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(format_price(asset.price))
                    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Cell::from(format_change(asset.change_24h))
                    .style(Style::default().fg(change_color)),
                Cell::from(format_volume(asset.volume)).style(Style::default().fg(Color::White)),
            ])
        });

        let widths = [
            Constraint::Length(3),
            Constraint::Length(14),
            Constraint::Length(6),
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Length(12),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(panel_block(" Market Prices "))
            .render(area, buf);
    }
}

pub struct SignalsPanel<'a> {
    signals: &'a [TradeSignal],
}

impl<'a> SignalsPanel<'a> {
    pub fn new(signals: &'a [TradeSignal]) -> Self {
        Self { signals }
    }
}

impl Widget for SignalsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(self.signals.len() * 4);
        for signal in self.signals {
            let color = signal_color(signal.kind);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}]", signal.kind),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    signal.asset.as_str(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", signal.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Price: ", Style::default().fg(Color::DarkGray)),
                Span::styled(format_price(signal.price), Style::default().fg(Color::White)),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    confidence_bar(signal.confidence, CONFIDENCE_BAR_WIDTH),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!(" {}%", signal.confidence),
                    Style::default().fg(Color::White),
                ),
            ]));
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            "✦ More signals",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .block(panel_block(" AI Signals "))
            .render(area, buf);
    }
}

pub struct SettingsPanel<'a> {
    settings: &'a BotSettings,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(settings: &'a BotSettings) -> Self {
        Self { settings }
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(" Trading Bot Settings ");
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(inner);

        let fields = [
            ("Strategy", self.settings.strategy.clone()),
            ("Max trade", format_price(self.settings.max_trade)),
            ("Stop Loss", format!("{}%", self.settings.stop_loss_percent)),
        ];
        for ((label, value), column) in fields.into_iter().zip(columns.iter()) {
            let lines = vec![
                Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
                Line::from(Span::styled(
                    value,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
            ];
            Paragraph::new(lines).render(*column, buf);
        }
    }
}

pub struct LogPanel<'a> {
    messages: &'a [String],
}

impl<'a> LogPanel<'a> {
    pub fn new(messages: &'a [String]) -> Self {
        Self { messages }
    }
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(" System Log ");
        let visible = block.inner(area).height as usize;
        let start = self.messages.len().saturating_sub(visible);
        let lines: Vec<Line> = self.messages[start..]
            .iter()
            .map(|msg| Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Gray))))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct KeybindBar;

impl Widget for KeybindBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(" [Q]", Style::default().fg(Color::Yellow)),
            Span::styled("uit  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[B]", Style::default().fg(Color::Yellow)),
            Span::styled("ot start/stop  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Space]", Style::default().fg(Color::Yellow)),
            Span::styled(" toggle  ", Style::default().fg(Color::DarkGray)),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_bar_fills_proportionally() {
        assert_eq!(confidence_bar(0, 10), "░".repeat(10));
        assert_eq!(confidence_bar(100, 10), "█".repeat(10));
        assert_eq!(confidence_bar(87, 10), format!("{}{}", "█".repeat(9), "░"));
        assert_eq!(confidence_bar(255, 4).chars().count(), 4);
    }
}
