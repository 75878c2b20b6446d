//! Run parameters and configuration.
//!
//! Configurations are serde-serializable so a run can be reproduced from a
//! JSON file. Validation happens at construction; the engine assumes a
//! well-formed config.

use crate::errors::ConfigError;
use crate::pcr::falloff::{DEFAULT_FALL_OFF_NOISE, DEFAULT_FALL_OFF_PIVOT};
use serde::{Deserialize, Serialize};

/// Default number of thermal cycles.
pub const DEFAULT_NUM_CYCLES: usize = 20;

/// When the fall-off rate is sampled.
///
/// The per-cycle model draws one rate at the start of each cycle and shares
/// it across every strand; the per-event model draws a fresh rate for every
/// elongation, so fall-off is independent across strands and cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallOffSampling {
    /// One shared rate per cycle
    PerCycle,
    /// One rate per elongation event
    PerEvent,
}

/// Fall-off sampling parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallOffConfig {
    /// Pivot of the sampling window. `None` derives the pivot from the
    /// distance between the primer binding sites on the initial segment.
    pivot: Option<i64>,
    /// Half-width of the sampling window; must be positive and non-zero
    noise: i64,
    /// Sampling policy
    sampling: FallOffSampling,
}

impl FallOffConfig {
    /// Create a fall-off configuration. Rejects `noise <= 0`, which would
    /// make the sampling window empty or inverted.
    pub fn new(
        pivot: Option<i64>,
        noise: i64,
        sampling: FallOffSampling,
    ) -> Result<Self, ConfigError> {
        if noise <= 0 {
            return Err(ConfigError::InvalidParameter(format!(
                "fall-off noise must be positive and non-zero, got {noise}"
            )));
        }
        Ok(Self {
            pivot,
            noise,
            sampling,
        })
    }

    /// Per-event sampling with the default processivity window.
    pub fn per_event() -> Self {
        Self {
            pivot: Some(DEFAULT_FALL_OFF_PIVOT),
            noise: DEFAULT_FALL_OFF_NOISE,
            sampling: FallOffSampling::PerEvent,
        }
    }

    /// Per-cycle sampling with the pivot anchored to the primer distance.
    pub fn per_cycle() -> Self {
        Self {
            pivot: None,
            noise: DEFAULT_FALL_OFF_NOISE,
            sampling: FallOffSampling::PerCycle,
        }
    }

    /// Get the configured pivot, if any.
    pub fn pivot(&self) -> Option<i64> {
        self.pivot
    }

    /// Get the noise half-width.
    pub fn noise(&self) -> i64 {
        self.noise
    }

    /// Get the sampling policy.
    pub fn sampling(&self) -> FallOffSampling {
        self.sampling
    }
}

impl Default for FallOffConfig {
    fn default() -> Self {
        Self::per_event()
    }
}

/// High-level amplification parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcrConfig {
    /// Number of cycles to run; no early termination
    pub num_cycles: usize,
    /// Fall-off sampling parameters
    pub fall_off: FallOffConfig,
    /// Optional RNG seed for reproducibility. Runs without a seed draw
    /// from entropy and are not reproducible.
    pub seed: Option<u64>,
}

impl PcrConfig {
    /// Create a new amplification configuration.
    pub fn new(num_cycles: usize, fall_off: FallOffConfig, seed: Option<u64>) -> Self {
        Self {
            num_cycles,
            fall_off,
            seed,
        }
    }
}

impl Default for PcrConfig {
    fn default() -> Self {
        Self {
            num_cycles: DEFAULT_NUM_CYCLES,
            fall_off: FallOffConfig::default(),
            seed: None,
        }
    }
}
