//! Effects - side effects declared by the reducer
//!
//! The reducer never touches the network. It returns effects alongside the
//! "state changed" flag, and the runtime hands them to [`handle_effect`],
//! which spawns one keyed task per weather track.

use shoresquad_core::WeatherClient;
use tracing::warn;

use crate::action::Action;
use crate::tasks::{TaskKey, TaskManager};

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchCurrent,
    FetchForecast,
}

/// Result of dispatching an action: change flag plus effects to run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchResult {
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    #[inline]
    pub fn unchanged() -> Self {
        Self::default()
    }

    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    #[inline]
    pub fn changed_if(changed: bool) -> Self {
        Self {
            changed,
            effects: vec![],
        }
    }

    #[inline]
    pub fn changed_with_many(effects: Vec<Effect>) -> Self {
        Self {
            changed: true,
            effects,
        }
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// Spawn the fetch for an effect. A newer fetch for the same track aborts
/// the one still in flight.
pub fn handle_effect(effect: Effect, tasks: &mut TaskManager, client: &WeatherClient) {
    let client = client.clone();
    match effect {
        Effect::FetchCurrent => {
            tasks.spawn(TaskKey::Current, async move {
                match client.fetch_current().await {
                    Ok(snapshot) => Action::WeatherCurrentDidLoad(snapshot),
                    Err(e) => {
                        warn!(error = %e, "current conditions fetch failed");
                        Action::WeatherCurrentDidError(e.to_string())
                    }
                }
            });
        }
        Effect::FetchForecast => {
            tasks.spawn(TaskKey::Forecast, async move {
                match client.fetch_forecast().await {
                    Ok(days) => Action::WeatherForecastDidLoad(days),
                    Err(e) => {
                        warn!(error = %e, "forecast fetch failed");
                        Action::WeatherForecastDidError(e.to_string())
                    }
                }
            });
        }
    }
}
