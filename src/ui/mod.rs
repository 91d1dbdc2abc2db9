pub mod dashboard;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::event::AppEvent;
use crate::format::{format_price, format_signed_price};
use crate::model::asset::{seed_assets, MarketAsset};
use crate::model::bot::BotStatus;
use crate::model::portfolio::{BotSettings, PortfolioSummary, TradeActivity};
use crate::model::signal::{seed_signals, TradeSignal};
use crate::ticker::{jitter_assets, JitterParams, RandomSource};

use dashboard::{
    portfolio_detail, HeaderBar, KeybindBar, LogPanel, MarketPanel, SettingsPanel,
    SignalsPanel, SummaryCard,
};

const MAX_LOG_MESSAGES: usize = 200;

/// All dashboard state. Only `assets` changes on ticks and only `bot`
/// changes on user input; the rest is fixed at construction.
pub struct AppState {
    pub assets: Vec<MarketAsset>,
    pub portfolio: PortfolioSummary,
    pub activity: TradeActivity,
    pub signals: Vec<TradeSignal>,
    pub settings: BotSettings,
    pub bot: BotStatus,
    pub tick_count: u64,
    pub log_messages: Vec<String>,
    jitter: JitterParams,
    rng: Box<dyn RandomSource>,
}

impl AppState {
    pub fn new(jitter: JitterParams, rng: Box<dyn RandomSource>) -> Self {
        Self {
            assets: seed_assets(),
            portfolio: PortfolioSummary::default(),
            activity: TradeActivity::default(),
            signals: seed_signals(),
            settings: BotSettings::default(),
            bot: BotStatus::default(),
            tick_count: 0,
            log_messages: Vec::new(),
            jitter,
            rng,
        }
    }

    pub fn push_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_MESSAGES {
            self.log_messages.remove(0);
        }
    }

    pub fn toggle_bot(&mut self) {
        self.bot.toggle();
        tracing::info!(status = %self.bot, "Bot toggled");
        self.push_log(format!("Bot {}", self.bot));
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::PriceTick => {
                self.assets = jitter_assets(&self.assets, &mut *self.rng, &self.jitter);
                self.tick_count += 1;
                tracing::debug!(tick = self.tick_count, "Market list refreshed");
            }
            AppEvent::LogMessage(msg) => {
                self.push_log(msg);
            }
        }
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Length(4),  // summary cards
            Constraint::Min(14),    // market + signals
            Constraint::Length(4),  // settings
            Constraint::Length(5),  // system log
            Constraint::Length(1),  // keybinds
        ])
        .split(frame.area());

    frame.render_widget(
        HeaderBar {
            bot: state.bot,
            tick_count: state.tick_count,
        },
        outer[0],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(outer[1]);

    frame.render_widget(
        SummaryCard::new(
            " Total Balance ",
            format_price(state.portfolio.total_value),
            portfolio_detail(state.portfolio.total_profit, state.portfolio.profit_percent),
        ),
        cards[0],
    );
    frame.render_widget(
        SummaryCard::new(
            " Active Trades ",
            state.activity.active_trades.to_string(),
            Line::from(Span::styled(
                format!(
                    "{} buys / {} sells",
                    state.activity.buys, state.activity.sells
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ),
        cards[1],
    );
    frame.render_widget(
        SummaryCard::new(
            " 24h Profit ",
            format_signed_price(state.activity.daily_profit),
            Line::from(Span::styled(
                format!("+{}% of portfolio", state.activity.daily_profit_percent),
                Style::default().fg(Color::DarkGray),
            )),
        )
        .headline_color(Color::Green),
        cards[2],
    );

    let main_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(outer[2]);

    frame.render_widget(MarketPanel::new(&state.assets), main_area[0]);
    frame.render_widget(SignalsPanel::new(&state.signals), main_area[1]);
    frame.render_widget(SettingsPanel::new(&state.settings), outer[3]);
    frame.render_widget(LogPanel::new(&state.log_messages), outer[4]);
    frame.render_widget(KeybindBar, outer[5]);
}
