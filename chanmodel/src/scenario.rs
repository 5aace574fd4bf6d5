use crate::error::ChanError;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// 3GPP propagation environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Indoor hotspot (office).
    InDoor,
    /// Urban micro, street canyon.
    UrbanMicro,
    /// Urban macro.
    UrbanMacro,
}

impl FromStr for ScenarioKind {
    type Err = ChanError;

    fn from_str(s: &str) -> Result<Self, ChanError> {
        match s.to_ascii_lowercase().as_str() {
            "isp" => Ok(Self::InDoor),
            "umi" => Ok(Self::UrbanMicro),
            "uma" => Ok(Self::UrbanMacro),
            _ => Err(ChanError::UnknownScenario(s.to_owned())),
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::InDoor => "ISP",
            Self::UrbanMicro => "UMI",
            Self::UrbanMacro => "UMA",
        };
        f.write_str(tag)
    }
}

/// Line-of-sight override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceLos {
    /// Always obstructed.
    Nlos = 0,
    /// Always unobstructed.
    Los = 1,
    /// Let the scenario's LOS probability decide.
    #[default]
    Scenario = 2,
}

impl FromStr for ForceLos {
    type Err = ChanError;

    fn from_str(s: &str) -> Result<Self, ChanError> {
        match s.trim() {
            "0" => Ok(Self::Nlos),
            "1" => Ok(Self::Los),
            "2" => Ok(Self::Scenario),
            other => Err(ChanError::ForceLos(other.to_owned())),
        }
    }
}

impl fmt::Display for ForceLos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as i32)
    }
}

/// Planar region the scenario evaluates, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Grid {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    /// Number of grid elements per axis.
    pub nelem: usize,
}

impl Grid {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, nelem: usize) -> Result<Self, ChanError> {
        if ![xmin, xmax, ymin, ymax].iter().all(|v| v.is_finite()) {
            return Err(ChanError::Grid("bounds must be finite"));
        }
        if xmin >= xmax {
            return Err(ChanError::Grid("xmin must be less than xmax"));
        }
        if ymin >= ymax {
            return Err(ChanError::Grid("ymin must be less than ymax"));
        }
        if nelem == 0 {
            return Err(ChanError::Grid("nelem must be positive"));
        }
        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
            nelem,
        })
    }
}

/// A propagation environment around a single base station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub kind: ScenarioKind,

    /// Carrier frequency (GHz).
    pub fc_ghz: f64,

    pub grid: Grid,

    /// Base station position, (x, y, z) meters.
    pub bs_position: [f64; 3],

    /// Base station transmit power (dBm).
    pub bs_power_dbm: f64,

    /// Generate a shadowing map along with path loss.
    pub shadowing: bool,

    pub force_los: ForceLos,
}

impl Scenario {
    pub fn builder() -> ScenarioBuilder {
        ScenarioBuilder {
            kind: None,
            fc_ghz: None,
            grid: None,
            bs_position: None,
            bs_power_dbm: None,
            shadowing: true,
            force_los: ForceLos::default(),
        }
    }

    /// 3GPP indoor hotspot.
    pub fn indoor(
        fc_ghz: f64,
        grid: Grid,
        bs_position: [f64; 3],
        bs_power_dbm: f64,
        shadowing: bool,
        force_los: ForceLos,
    ) -> Self {
        Self {
            kind: ScenarioKind::InDoor,
            fc_ghz,
            grid,
            bs_position,
            bs_power_dbm,
            shadowing,
            force_los,
        }
    }

    /// 3GPP urban micro.
    pub fn umi(
        fc_ghz: f64,
        grid: Grid,
        bs_position: [f64; 3],
        bs_power_dbm: f64,
        shadowing: bool,
        force_los: ForceLos,
    ) -> Self {
        Self {
            kind: ScenarioKind::UrbanMicro,
            ..Self::indoor(fc_ghz, grid, bs_position, bs_power_dbm, shadowing, force_los)
        }
    }

    /// 3GPP urban macro.
    pub fn uma(
        fc_ghz: f64,
        grid: Grid,
        bs_position: [f64; 3],
        bs_power_dbm: f64,
        shadowing: bool,
        force_los: ForceLos,
    ) -> Self {
        Self {
            kind: ScenarioKind::UrbanMacro,
            ..Self::indoor(fc_ghz, grid, bs_position, bs_power_dbm, shadowing, force_los)
        }
    }
}

pub struct ScenarioBuilder {
    /// Propagation environment (required).
    kind: Option<ScenarioKind>,

    /// Carrier frequency, GHz (required).
    fc_ghz: Option<f64>,

    /// Evaluation region (required).
    grid: Option<Grid>,

    /// Base station position (required).
    bs_position: Option<[f64; 3]>,

    /// Base station transmit power, dBm (required).
    bs_power_dbm: Option<f64>,

    /// Compute shadowing (defaults to true).
    shadowing: bool,

    /// Line-of-sight override (defaults to [`ForceLos::Scenario`]).
    force_los: ForceLos,
}

impl ScenarioBuilder {
    #[must_use]
    pub fn kind(mut self, kind: ScenarioKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Carrier frequency (GHz, required).
    #[must_use]
    pub fn fc_ghz(mut self, fc_ghz: f64) -> Self {
        self.fc_ghz = Some(fc_ghz);
        self
    }

    #[must_use]
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Base station position (meters, required).
    #[must_use]
    pub fn bs_position(mut self, position: [f64; 3]) -> Self {
        self.bs_position = Some(position);
        self
    }

    /// Base station transmit power (dBm, required).
    #[must_use]
    pub fn bs_power_dbm(mut self, dbm: f64) -> Self {
        self.bs_power_dbm = Some(dbm);
        self
    }

    #[must_use]
    pub fn shadowing(mut self, shadowing: bool) -> Self {
        self.shadowing = shadowing;
        self
    }

    #[must_use]
    pub fn force_los(mut self, force_los: ForceLos) -> Self {
        self.force_los = force_los;
        self
    }

    pub fn build(&self) -> Result<Scenario, ChanError> {
        let kind = self.kind.ok_or(ChanError::Builder("kind"))?;
        let fc_ghz = self.fc_ghz.ok_or(ChanError::Builder("fc_ghz"))?;
        let grid = self.grid.ok_or(ChanError::Builder("grid"))?;
        let bs_position = self.bs_position.ok_or(ChanError::Builder("bs_position"))?;
        let bs_power_dbm = self.bs_power_dbm.ok_or(ChanError::Builder("bs_power_dbm"))?;

        let ctor: fn(f64, Grid, [f64; 3], f64, bool, ForceLos) -> Scenario = match kind {
            ScenarioKind::InDoor => Scenario::indoor,
            ScenarioKind::UrbanMicro => Scenario::umi,
            ScenarioKind::UrbanMacro => Scenario::uma,
        };
        Ok(ctor(
            fc_ghz,
            grid,
            bs_position,
            bs_power_dbm,
            self.shadowing,
            self.force_los,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{ChanError, ForceLos, Grid, Scenario, ScenarioKind};

    fn grid() -> Grid {
        Grid::new(-100.0, 100.0, -100.0, 100.0, 25).unwrap()
    }

    #[test]
    fn test_kind_is_case_insensitive() {
        assert_eq!("ISP".parse::<ScenarioKind>().unwrap(), ScenarioKind::InDoor);
        assert_eq!("isp".parse::<ScenarioKind>().unwrap(), ScenarioKind::InDoor);
        assert_eq!("Umi".parse::<ScenarioKind>().unwrap(), ScenarioKind::UrbanMicro);
        assert_eq!("uMA".parse::<ScenarioKind>().unwrap(), ScenarioKind::UrbanMacro);
    }

    #[test]
    fn test_unknown_kind_names_token() {
        let err = "FOO".parse::<ScenarioKind>().unwrap_err();
        assert!(matches!(err, ChanError::UnknownScenario(ref tok) if tok == "FOO"));
        assert!(err.to_string().contains("FOO"));
    }

    #[test]
    fn test_force_los() {
        assert_eq!("0".parse::<ForceLos>().unwrap(), ForceLos::Nlos);
        assert_eq!("1".parse::<ForceLos>().unwrap(), ForceLos::Los);
        assert_eq!("2".parse::<ForceLos>().unwrap(), ForceLos::Scenario);
        assert!("3".parse::<ForceLos>().is_err());
        assert!("los".parse::<ForceLos>().is_err());
        assert_eq!(ForceLos::default().to_string(), "2");
    }

    #[test]
    fn test_grid_bounds() {
        assert!(Grid::new(10.0, -10.0, 0.0, 1.0, 4).is_err());
        assert!(Grid::new(0.0, 1.0, 1.0, 1.0, 4).is_err());
        assert!(Grid::new(0.0, 1.0, 0.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_grid_rejects_non_finite() {
        for (xmin, xmax, ymin, ymax) in [
            (f64::NAN, 1.0, 0.0, 1.0),
            (0.0, f64::NAN, 0.0, 1.0),
            (0.0, 1.0, f64::NEG_INFINITY, 1.0),
            (0.0, 1.0, 0.0, f64::INFINITY),
        ] {
            assert!(matches!(
                Grid::new(xmin, xmax, ymin, ymax, 4),
                Err(ChanError::Grid("bounds must be finite"))
            ));
        }
    }

    #[test]
    fn test_builder_dispatch() {
        for kind in [
            ScenarioKind::InDoor,
            ScenarioKind::UrbanMicro,
            ScenarioKind::UrbanMacro,
        ] {
            let scenario = Scenario::builder()
                .kind(kind)
                .fc_ghz(30.0)
                .grid(grid())
                .bs_position([0.0, 0.0, 20.0])
                .bs_power_dbm(30.0)
                .build()
                .unwrap();
            assert_eq!(scenario.kind, kind);
            assert!(scenario.shadowing);
            assert_eq!(scenario.force_los, ForceLos::Scenario);
        }
    }

    #[test]
    fn test_builder_missing_param() {
        let err = Scenario::builder()
            .kind(ScenarioKind::UrbanMacro)
            .grid(grid())
            .bs_position([0.0, 0.0, 20.0])
            .bs_power_dbm(30.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ChanError::Builder("fc_ghz")));
    }
}
