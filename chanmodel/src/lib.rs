//! # Channel Model Boundary
//!
//! `chanmodel` provides the typed configuration objects a 3GPP-style
//! channel simulation is assembled from: propagation scenarios,
//! antenna arrays, the simulated frequency band and the fading
//! generator layered on a scenario. Each object can snapshot itself
//! into a run directory with [`Save`], and a [`ChannelPerformance`]
//! engine consumes them through [`PathRequest`].

pub mod antenna;
pub mod band;
mod error;
pub mod fading;
pub mod performance;
mod save;
pub mod scenario;

pub use crate::{
    antenna::{AntennaArray, AntennaElement},
    band::FrequencyBand,
    error::ChanError,
    fading::Fading,
    performance::{ChannelPerformance, ManifestPerformance, PathMode, PathRequest, Trajectory},
    save::Save,
    scenario::{ForceLos, Grid, Scenario, ScenarioKind},
};
