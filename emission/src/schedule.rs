//! The emission curve and its audit summary.

use qnet_types::ProtocolParams;
use serde::{Deserialize, Serialize};

use crate::error::EmissionError;

/// The reward curve for one network configuration.
///
/// `reward(height)` decays logarithmically from `initial_reward` down to
/// `min_reward`, reaching the floor well before the cutoff height and
/// paying exactly `min_reward` for every block past it.
#[derive(Clone, Debug)]
pub struct EmissionSchedule {
    initial_reward: u64,
    total_blocks: u64,
    min_reward: u64,
    total_supply: u64,
}

impl EmissionSchedule {
    /// Steepening multiplier applied to the log-ratio reduction.
    const DECAY_STEEPNESS: f64 = 1.1;

    /// Cap on the reduction, keeping the pre-cutoff reward strictly
    /// positive before the floor applies.
    const MAX_REDUCTION: f64 = 0.999;

    /// Number of years the emission window spans.
    const EMISSION_YEARS: u64 = 10;

    pub fn new(params: &ProtocolParams) -> Self {
        Self {
            initial_reward: params.initial_reward,
            total_blocks: params.emission_total_blocks,
            min_reward: params.min_reward,
            total_supply: params.total_supply,
        }
    }

    pub fn initial_reward(&self) -> u64 {
        self.initial_reward
    }

    pub fn min_reward(&self) -> u64 {
        self.min_reward
    }

    pub fn total_blocks(&self) -> u64 {
        self.total_blocks
    }

    /// The reward paid for the block at `height`.
    ///
    /// Monotonic non-increasing over `[0, total_blocks]` and bounded in
    /// `[min_reward, initial_reward]` for every height. Deterministic from
    /// `height` alone.
    pub fn reward_at(&self, height: u64) -> u64 {
        if height > self.total_blocks {
            return self.min_reward;
        }
        let reduction =
            ((height + 1) as f64).ln() / ((self.total_blocks + 1) as f64).ln();
        let adjusted = (reduction * Self::DECAY_STEEPNESS).min(Self::MAX_REDUCTION);
        let reward = (self.initial_reward as f64 * (1.0 - adjusted)) as u64;
        reward.max(self.min_reward)
    }

    /// Boundary-input variant of [`reward_at`](Self::reward_at) for heights
    /// arriving from outside the core (RPC-shaped integers).
    pub fn reward_at_checked(&self, height: i64) -> Result<u64, EmissionError> {
        if height < 0 {
            return Err(EmissionError::InvalidHeight(height));
        }
        Ok(self.reward_at(height as u64))
    }

    /// Total emission over the full window `[0, total_blocks)`.
    ///
    /// Strictly less than `total_supply`.
    pub fn cumulative_emission(&self) -> u64 {
        (0..self.total_blocks).map(|h| self.reward_at(h)).sum()
    }

    fn blocks_per_year(&self) -> u64 {
        self.total_blocks / Self::EMISSION_YEARS
    }

    /// Aggregate per-year emission report.
    ///
    /// Used for auditing and reporting only — never consensus-critical.
    /// Years past the emission window keep paying the floor reward.
    pub fn emission_schedule(&self, years: u32) -> EmissionScheduleSummary {
        let blocks_per_year = self.blocks_per_year();
        let mut rows = Vec::with_capacity(years as usize);
        let mut cumulative = 0u64;
        for year in 0..years {
            let start = year as u64 * blocks_per_year;
            let emitted: u64 = (start..start + blocks_per_year)
                .map(|h| self.reward_at(h))
                .sum();
            cumulative += emitted;
            rows.push(YearlyEmission {
                year: year + 1,
                emitted,
                cumulative,
                percent_of_supply: percent_of(cumulative, self.total_supply),
            });
        }
        EmissionScheduleSummary {
            total_emitted: cumulative,
            percent_of_supply: percent_of(cumulative, self.total_supply),
            years: rows,
        }
    }
}

/// Default is the QNet mainnet curve.
impl Default for EmissionSchedule {
    fn default() -> Self {
        Self::new(&ProtocolParams::default())
    }
}

fn percent_of(amount: u64, supply: u64) -> f64 {
    amount as f64 / supply as f64 * 100.0
}

/// One year's row in the emission audit report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct YearlyEmission {
    /// 1-based year index.
    pub year: u32,
    /// Coins emitted during this year.
    pub emitted: u64,
    /// Running total through the end of this year.
    pub cumulative: u64,
    /// Running total as a percentage of the supply cap.
    pub percent_of_supply: f64,
}

/// Aggregate emission report across a span of years.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmissionScheduleSummary {
    pub years: Vec<YearlyEmission>,
    pub total_emitted: u64,
    pub percent_of_supply: f64,
}

impl EmissionScheduleSummary {
    /// Serialize the report for audit output.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(self)
            .expect("EmissionScheduleSummary is always serializable")
    }
}
