#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One firing of the price ticker.
    PriceTick,
    LogMessage(String),
}
