//! Amplification machinery: fragments, fall-off sampling, configuration,
//! and the cycle engine.

pub mod config;
pub mod engine;
pub mod falloff;
pub mod fragment;

pub use config::{FallOffConfig, FallOffSampling, PcrConfig, DEFAULT_NUM_CYCLES};
pub use engine::{denature, Amplification};
pub use falloff::{
    distance_between_primers, generate_fall_off_rate, DEFAULT_FALL_OFF_NOISE,
    DEFAULT_FALL_OFF_PIVOT,
};
pub use fragment::{Fragment, Population, PrimerPair};
