use chanmodel::ChanError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("at least one mobile station is required")]
    NoStations,

    #[error("{0} must be at least 1")]
    NoAntennas(&'static str),

    #[error("{0}")]
    Model(#[from] ChanError),

    #[error("--pms not (auto-)defined with {stations} mobile stations")]
    MissingTrajectories { stations: usize },

    #[error("number of ms paths ({got}) does not match set number of ms units ({expected})")]
    TrajectoryCount { expected: usize, got: usize },

    #[error("number of ms path timings ({got}) does not match set number of ms units ({expected})")]
    TimingCount { expected: usize, got: usize },

    #[error("ms index({index}) has a positioning length ({positions}) and a timing length ({timings})")]
    TimingLength {
        index: usize,
        positions: usize,
        timings: usize,
    },
}

#[derive(Error, Debug)]
pub enum OutDirError {
    #[error("run name '{0}' must end in an underscore-separated numeric suffix, e.g. 'name_0000'")]
    Suffix(String),

    #[error("run name '{0}' has a numeric suffix too large to increment")]
    SuffixRange(String),

    #[error("no free run directory after {attempts} attempts starting at {start:?}")]
    Exhausted { attempts: u32, start: PathBuf },

    #[error("creating {1:?}, {0}")]
    Io(#[source] std::io::Error, PathBuf),
}
