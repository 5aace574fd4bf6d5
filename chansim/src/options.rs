use anyhow::{anyhow, Error as AnyError};
use chanmodel::{ForceLos, ScenarioKind};
use clap::Parser;
use std::{path::PathBuf, str::FromStr};

/// Configure and launch a 3GPP channel simulation.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Minimum X-position (meters).
    #[arg(long, default_value_t = -100.0, allow_negative_numbers = true, help_heading = "PositionGrid")]
    pub xmin: f64,

    /// Maximum X-position (meters).
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true, help_heading = "PositionGrid")]
    pub xmax: f64,

    /// Minimum Y-position (meters).
    #[arg(long, default_value_t = -100.0, allow_negative_numbers = true, help_heading = "PositionGrid")]
    pub ymin: f64,

    /// Maximum Y-position (meters).
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true, help_heading = "PositionGrid")]
    pub ymax: f64,

    /// Number of grid elements.
    #[arg(long, default_value_t = 25, help_heading = "PositionGrid")]
    pub nelem: usize,

    /// Line of sight handling {0: NLOS, 1: LOS, 2: scenario}.
    #[arg(long, default_value_t = ForceLos::Scenario, help_heading = "PositionGrid")]
    pub los: ForceLos,

    /// Position of the base station "x,y,z" (meters).
    #[arg(long, default_value = "0,0,20", allow_hyphen_values = true, help_heading = "BaseStation")]
    pub pbs: Position,

    /// Number of base station antennas.
    #[arg(long, default_value_t = 2, help_heading = "BaseStation")]
    pub nbs: usize,

    /// Gain of base station antennas (dB).
    #[arg(long, default_value_t = 8.0, help_heading = "BaseStation")]
    pub gbs: f64,

    /// Base station transmit power (dBm).
    #[arg(long, default_value_t = 30.0, allow_negative_numbers = true, help_heading = "BaseStation")]
    pub bsdb: f64,

    /// Base station noise figure (dB).
    #[arg(long, default_value_t = 5.0, help_heading = "BaseStation")]
    pub bsnf: f64,

    /// Number of mobile stations.
    #[arg(long = "Nms", default_value_t = 1, help_heading = "MobileStation")]
    pub n_ms: usize,

    /// Path of one mobile station "x0,y0,z0:x1,y1,z1:..." (meters),
    /// repeat once per station [default: 10,10,2:20,10,2].
    #[arg(long, allow_hyphen_values = true, help_heading = "MobileStation")]
    pub pms: Vec<Waypoints>,

    /// Timing of one mobile station "t0,t1,..." (seconds), repeat once
    /// per station [default: 0,0.01].
    #[arg(long, help_heading = "MobileStation")]
    pub tms: Vec<Timings>,

    /// Number of mobile station antennas.
    #[arg(long = "nms", default_value_t = 2, help_heading = "MobileStation")]
    pub nms_antennas: usize,

    /// Gain of mobile station antennas (dB).
    #[arg(long, default_value_t = 8.0, help_heading = "MobileStation")]
    pub gms: f64,

    /// Base path to save results to.
    #[arg(long, default_value = "./data", help_heading = "Scenario")]
    pub path: PathBuf,

    /// Named folder within the base path to save to.
    #[arg(long, default_value = "test", help_heading = "Scenario")]
    pub name: String,

    /// Scenario conditions {ISP, UMI, UMA}, case-insensitive.
    #[arg(long, default_value_t = ScenarioKind::InDoor, help_heading = "Scenario")]
    pub mode: ScenarioKind,

    /// Carrier frequency (GHz).
    #[arg(long, default_value_t = 30.0, help_heading = "Scenario")]
    pub fc: f64,

    /// Number of resource blocks.
    #[arg(long, default_value_t = 51, help_heading = "Scenario")]
    pub nprb: u32,

    /// Subcarrier spacing (kHz).
    #[arg(long, default_value_t = 30.0, help_heading = "Scenario")]
    pub scs: f64,

    /// Assumed noise floor (dBm/Hz).
    #[arg(long, default_value_t = -174.0, allow_negative_numbers = true, help_heading = "Scenario")]
    pub nf: f64,
}

/// A point "x,y,z" in meters.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Position(pub [f64; 3]);

impl FromStr for Position {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let coords = s
            .split(',')
            .map(|item| f64::from_str(item.trim()))
            .collect::<Result<Vec<f64>, _>>()?;
        let xyz: [f64; 3] = coords
            .try_into()
            .map_err(|v: Vec<f64>| anyhow!("expected x,y,z but got {} values in '{s}'", v.len()))?;
        Ok(Self(xyz))
    }
}

/// Colon separated sequence of positions, "x0,y0,z0:x1,y1,z1:...".
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoints(pub Vec<[f64; 3]>);

impl FromStr for Waypoints {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        s.split(':')
            .map(|item| Position::from_str(item.trim()).map(|p| p.0))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Comma separated timestamps in seconds, "t0,t1,...".
#[derive(Clone, Debug, PartialEq)]
pub struct Timings(pub Vec<f64>);

impl FromStr for Timings {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let times = s
            .split(',')
            .map(|item| f64::from_str(item.trim()))
            .collect::<Result<Vec<f64>, _>>()?;
        Ok(Self(times))
    }
}
