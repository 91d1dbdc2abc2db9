use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::event::AppEvent;
use crate::model::asset::MarketAsset;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

#[derive(Debug)]
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for RngSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterParams {
    /// Full width of the multiplicative price band around 1.0.
    pub price_jitter: f64,
    /// Full width of the additive band applied to the 24h change, in points.
    pub change_jitter: f64,
}

impl Default for JitterParams {
    fn default() -> Self {
        Self {
            price_jitter: 0.002,
            change_jitter: 0.5,
        }
    }
}

/// Derive the next market list. Draws one value for the price and then one
/// for the change of each asset, in list order. Nothing is clamped.
pub fn jitter_assets(
    assets: &[MarketAsset],
    rng: &mut dyn RandomSource,
    params: &JitterParams,
) -> Vec<MarketAsset> {
    assets
        .iter()
        .map(|asset| {
            let price_draw = rng.next_unit();
            let change_draw = rng.next_unit();
            MarketAsset {
                price: asset.price * (1.0 + (price_draw - 0.5) * params.price_jitter),
                change_24h: asset.change_24h + (change_draw - 0.5) * params.change_jitter,
                ..asset.clone()
            }
        })
        .collect()
}

/// Owns the background task that emits [`AppEvent::PriceTick`].
///
/// The first tick fires one full period after spawn. The task is aborted
/// exactly once, by [`PriceTicker::stop`] or on drop.
#[derive(Debug)]
pub struct PriceTicker {
    handle: Option<JoinHandle<()>>,
    period: Duration,
}

impl PriceTicker {
    pub fn spawn(period: Duration, tx: mpsc::Sender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::PriceTick).await.is_err() {
                    tracing::debug!("Price tick receiver closed, ticker exiting");
                    break;
                }
                tracing::trace!("Price tick emitted");
            }
        });
        tracing::info!(period_ms = period.as_millis() as u64, "Price ticker started");
        Self {
            handle: Some(handle),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::info!("Price ticker stopped");
        }
    }
}

impl Drop for PriceTicker {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl RandomSource for Constant {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn midpoint_draws_leave_assets_unchanged() {
        let assets = vec![MarketAsset::new("BTC", "Bitcoin", 100.0, 1.0, 5.0)];
        let next = jitter_assets(&assets, &mut Constant(0.5), &JitterParams::default());
        assert_eq!(next, assets);
    }

    #[test]
    fn seeded_source_is_reproducible_and_in_unit_range() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        for _ in 0..100 {
            let x = a.next_unit();
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x, b.next_unit());
        }
    }
}
