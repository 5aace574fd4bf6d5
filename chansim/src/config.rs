//! Validated simulation configuration.

use crate::{
    error::ConfigError,
    options::{Cli, Timings, Waypoints},
};
use chanmodel::{ForceLos, FrequencyBand, Grid, ScenarioKind, Trajectory};
use std::path::PathBuf;

/// Run name suffix appended when the caller didn't supply one.
pub const DEFAULT_SUFFIX: &str = "_0000";

#[derive(Debug, Clone, PartialEq)]
pub struct BaseStationConfig {
    pub position: [f64; 3],
    pub antennas: usize,
    pub gain_db: f64,
    pub tx_power_dbm: f64,
    pub noise_figure_db: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MobileStationConfig {
    /// One trajectory per station.
    pub trajectories: Vec<Trajectory>,
    pub antennas: usize,
    pub gain_db: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub grid: Grid,
    pub los: ForceLos,
    pub bs: BaseStationConfig,
    pub ms: MobileStationConfig,
    /// Simulated band, transmit PSD already computed from the base
    /// station power.
    pub band: FrequencyBand,
    pub mode: ScenarioKind,
    /// Base output directory.
    pub path: PathBuf,
    /// Run directory name, always carrying an `_NNNN` style suffix.
    pub name: String,
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, ConfigError> {
        let Cli {
            xmin,
            xmax,
            ymin,
            ymax,
            nelem,
            los,
            pbs,
            nbs,
            gbs,
            bsdb,
            bsnf,
            n_ms,
            pms,
            tms,
            nms_antennas,
            gms,
            path,
            name,
            mode,
            fc,
            nprb,
            scs,
            nf,
        } = cli;

        let trajectories = station_trajectories(n_ms, pms, tms)?;
        if nbs == 0 {
            return Err(ConfigError::NoAntennas("--nbs"));
        }
        if nms_antennas == 0 {
            return Err(ConfigError::NoAntennas("--nms"));
        }
        let grid = Grid::new(xmin, xmax, ymin, ymax, nelem)?;
        let mut band = FrequencyBand::from_numerology(fc, nprb, scs, bsnf, nf)?;
        band.compute_tx_psd(bsdb)?;

        Ok(Self {
            grid,
            los,
            bs: BaseStationConfig {
                position: pbs.0,
                antennas: nbs,
                gain_db: gbs,
                tx_power_dbm: bsdb,
                noise_figure_db: bsnf,
            },
            ms: MobileStationConfig {
                trajectories,
                antennas: nms_antennas,
                gain_db: gms,
            },
            band,
            mode,
            path,
            name: with_default_suffix(name),
        })
    }
}

/// Pairs up per-station waypoints and timings, substituting the
/// default single-station trajectory when none are given.
fn station_trajectories(
    n_ms: usize,
    pms: Vec<Waypoints>,
    tms: Vec<Timings>,
) -> Result<Vec<Trajectory>, ConfigError> {
    if n_ms == 0 {
        return Err(ConfigError::NoStations);
    }

    let (pms, tms): (Vec<Vec<[f64; 3]>>, Vec<Vec<f64>>) = if pms.is_empty() {
        if n_ms != 1 {
            return Err(ConfigError::MissingTrajectories { stations: n_ms });
        }
        let tms = if tms.is_empty() {
            vec![vec![0.0, 0.01]]
        } else {
            tms.into_iter().map(|t| t.0).collect()
        };
        (vec![vec![[10.0, 10.0, 2.0], [20.0, 10.0, 2.0]]], tms)
    } else {
        (
            pms.into_iter().map(|p| p.0).collect(),
            tms.into_iter().map(|t| t.0).collect(),
        )
    };

    if pms.len() != n_ms {
        return Err(ConfigError::TrajectoryCount {
            expected: n_ms,
            got: pms.len(),
        });
    }
    if tms.len() != n_ms {
        return Err(ConfigError::TimingCount {
            expected: n_ms,
            got: tms.len(),
        });
    }

    pms.into_iter()
        .zip(tms)
        .enumerate()
        .map(|(index, (waypoints, times))| {
            let (positions, timings) = (waypoints.len(), times.len());
            Trajectory::new(waypoints, times).map_err(|_| ConfigError::TimingLength {
                index,
                positions,
                timings,
            })
        })
        .collect()
}

/// Appends [`DEFAULT_SUFFIX`] to names without any underscore.
fn with_default_suffix(mut name: String) -> String {
    if !name.contains('_') {
        name.push_str(DEFAULT_SUFFIX);
    }
    name
}
