use crate::{
    antenna::AntennaArray,
    band::FrequencyBand,
    error::ChanError,
    fading::Fading,
    save::{write_json, Save},
    scenario::ForceLos,
};
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Timed sequence of positions one mobile station moves through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    /// (x, y, z) meters.
    pub waypoints: Vec<[f64; 3]>,

    /// Time at each waypoint (seconds).
    pub times_s: Vec<f64>,
}

impl Trajectory {
    pub fn new(waypoints: Vec<[f64; 3]>, times_s: Vec<f64>) -> Result<Self, ChanError> {
        if waypoints.len() != times_s.len() {
            return Err(ChanError::Trajectory {
                positions: waypoints.len(),
                timings: times_s.len(),
            });
        }
        if waypoints.is_empty() {
            return Err(ChanError::EmptyTrajectory);
        }
        Ok(Self { waypoints, times_s })
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Seconds between the first and last waypoint.
    pub fn duration_s(&self) -> f64 {
        match (self.times_s.first(), self.times_s.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }
}

/// How the engine evaluates a path request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathMode(pub u8);

impl Default for PathMode {
    /// Per-station time-series evaluation along each trajectory.
    fn default() -> Self {
        Self(2)
    }
}

/// Everything a [`ChannelPerformance`] engine needs to evaluate the
/// link between a base station and a set of moving stations.
#[derive(Debug, Clone, Copy)]
pub struct PathRequest<'a> {
    pub fading: &'a Fading<'a>,
    pub freq_band: &'a FrequencyBand,
    pub antenna_tx: &'a AntennaArray,
    pub antenna_rx: &'a AntennaArray,
    /// One entry per mobile station.
    pub trajectories: &'a [Trajectory],
    pub force_los: ForceLos,
    /// Run directory results are written into.
    pub path: &'a Path,
    pub mode: PathMode,
}

/// A channel performance engine.
pub trait ChannelPerformance {
    fn compute_path(&mut self, req: &PathRequest<'_>) -> Result<(), ChanError>;
}

/// Engine that records each path request as `path_request.json` in
/// the run directory, for evaluation by an out-of-process channel
/// solver.
#[derive(Debug, Default)]
pub struct ManifestPerformance {
    written: Vec<PathBuf>,
}

pub const MANIFEST_NAME: &str = "path_request.json";

impl ManifestPerformance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Manifests written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChannelPerformance for ManifestPerformance {
    fn compute_path(&mut self, req: &PathRequest<'_>) -> Result<(), ChanError> {
        #[derive(Serialize)]
        struct Manifest<'a> {
            scenario: String,
            fading: String,
            freq_band: String,
            antenna_tx: String,
            antenna_rx: String,
            force_los: ForceLos,
            mode: PathMode,
            stations: &'a [Trajectory],
        }

        for (idx, trajectory) in req.trajectories.iter().enumerate() {
            info!(
                "ms {idx}: {} waypoints over {}s",
                trajectory.len(),
                trajectory.duration_s()
            );
        }

        let manifest = Manifest {
            scenario: req.fading.scenario.snapshot_name(),
            fading: req.fading.snapshot_name(),
            freq_band: req.freq_band.snapshot_name(),
            antenna_tx: req.antenna_tx.snapshot_name(),
            antenna_rx: req.antenna_rx.snapshot_name(),
            force_los: req.force_los,
            mode: req.mode,
            stations: req.trajectories,
        };
        let path = req.path.join(MANIFEST_NAME);
        write_json(&path, &manifest)?;
        self.written.push(path);
        Ok(())
    }
}
