#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_profit: f64,
    pub profit_percent: f64,
}

impl Default for PortfolioSummary {
    fn default() -> Self {
        Self {
            total_value: 125_840.50,
            total_profit: 15_234.20,
            profit_percent: 13.76,
        }
    }
}

/// Open trade counts and the trailing 24h result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeActivity {
    pub active_trades: u32,
    pub buys: u32,
    pub sells: u32,
    pub daily_profit: f64,
    pub daily_profit_percent: f64,
}

impl Default for TradeActivity {
    fn default() -> Self {
        Self {
            active_trades: 12,
            buys: 8,
            sells: 4,
            daily_profit: 2_845.60,
            daily_profit_percent: 2.31,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BotSettings {
    pub strategy: String,
    pub max_trade: f64,
    pub stop_loss_percent: f64,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            strategy: "Aggressive".to_string(),
            max_trade: 5_000.0,
            stop_loss_percent: -2.5,
        }
    }
}
