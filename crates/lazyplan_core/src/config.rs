//! Session configuration.
//!
//! # Responsibility
//! - Hold the knobs a caller may set when starting a planning session.
//! - Resolve those knobs from environment variables with safe fallbacks.
//!
//! # Invariants
//! - `SessionConfig::default()` reproduces the reference behavior.
//! - Unknown environment values never fail; they fall back to defaults.

use log::warn;

/// Environment variable selecting [`PromotionPolicy`].
pub const PROMOTION_POLICY_ENV: &str = "LAZYPLAN_PROMOTION_POLICY";
/// Environment variable enabling demo goal seeding.
pub const SAMPLE_GOALS_ENV: &str = "LAZYPLAN_SAMPLE_GOALS";

/// How inbox items emit tasks when toggled actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromotionPolicy {
    /// Every false -> true toggle emits one new task.
    #[default]
    EveryToggle,
    /// An item emits at most one task over its lifetime.
    Once,
}

impl PromotionPolicy {
    /// Parses `every_toggle|once` (case-insensitive, `-` accepted for `_`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "every_toggle" => Some(Self::EveryToggle),
            "once" => Some(Self::Once),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EveryToggle => "every_toggle",
            Self::Once => "once",
        }
    }
}

/// Startup options for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub promotion_policy: PromotionPolicy,
    /// Seed the goal list with the demo goals.
    pub seed_sample_goals: bool,
}

impl SessionConfig {
    /// Reads configuration from process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through a key lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(PROMOTION_POLICY_ENV) {
            match PromotionPolicy::parse(&raw) {
                Some(policy) => config.promotion_policy = policy,
                None => warn!(
                    "event=config_load module=config status=fallback key={} default={}",
                    PROMOTION_POLICY_ENV,
                    config.promotion_policy.as_str()
                ),
            }
        }

        if let Some(raw) = lookup(SAMPLE_GOALS_ENV) {
            match parse_flag(&raw) {
                Some(flag) => config.seed_sample_goals = flag,
                None => warn!(
                    "event=config_load module=config status=fallback key={} default={}",
                    SAMPLE_GOALS_ENV, config.seed_sample_goals
                ),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
