#[derive(Debug, Clone, PartialEq)]
pub struct MarketAsset {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    /// Signed percentage, e.g. `3.24` for +3.24%.
    pub change_24h: f64,
    pub volume: f64,
}

impl MarketAsset {
    pub fn new(symbol: &str, name: &str, price: f64, change_24h: f64, volume: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change_24h,
            volume,
        }
    }

    /// First character of the symbol, used as the row avatar.
    pub fn initial(&self) -> char {
        self.symbol.chars().next().unwrap_or('?')
    }

    pub fn is_up(&self) -> bool {
        self.change_24h >= 0.0
    }
}

/// The fixed market list shown at startup.
pub fn seed_assets() -> Vec<MarketAsset> {
    vec![
        MarketAsset::new("BTC", "Bitcoin", 67_234.50, 3.24, 28_500_000_000.0),
        MarketAsset::new("ETH", "Ethereum", 3_456.78, -1.45, 15_200_000_000.0),
        MarketAsset::new("BNB", "Binance Coin", 445.23, 2.15, 1_200_000_000.0),
        MarketAsset::new("SOL", "Solana", 156.89, 5.67, 2_400_000_000.0),
    ]
}
