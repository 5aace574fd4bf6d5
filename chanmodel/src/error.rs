use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChanError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("unrecognized scenario mode: {0}")]
    UnknownScenario(String),

    #[error("invalid line-of-sight override '{0}', expected one of 0 (NLOS), 1 (LOS), 2 (scenario)")]
    ForceLos(String),

    #[error("invalid grid, {0}")]
    Grid(&'static str),

    #[error("invalid frequency band, {0}")]
    Band(&'static str),

    #[error("invalid antenna array '{0}', needs at least one element")]
    Antenna(String),

    #[error("trajectory has {positions} positions and {timings} timings")]
    Trajectory { positions: usize, timings: usize },

    #[error("trajectory is empty")]
    EmptyTrajectory,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("writing {1:?}, {0}")]
    Json(#[source] serde_json::Error, PathBuf),
}
