use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Buy,
    Sell,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Buy => write!(f, "BUY"),
            SignalKind::Sell => write!(f, "SELL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeSignal {
    pub kind: SignalKind,
    pub asset: String,
    pub price: f64,
    /// Percentage in `0..=100`.
    pub confidence: u8,
    pub timestamp: String,
}

impl TradeSignal {
    pub fn new(kind: SignalKind, asset: &str, price: f64, confidence: u8, timestamp: &str) -> Self {
        Self {
            kind,
            asset: asset.to_string(),
            price,
            confidence: confidence.min(100),
            timestamp: timestamp.to_string(),
        }
    }
}

pub fn seed_signals() -> Vec<TradeSignal> {
    vec![
        TradeSignal::new(SignalKind::Buy, "BTC", 66_800.0, 87, "2 min ago"),
        TradeSignal::new(SignalKind::Sell, "ETH", 3_480.0, 92, "5 min ago"),
        TradeSignal::new(SignalKind::Buy, "SOL", 155.0, 78, "12 min ago"),
    ]
}
