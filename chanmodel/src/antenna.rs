use crate::error::ChanError;
use serde::Serialize;

/// Radiation pattern of a single antenna element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum AntennaElement {
    /// 3GPP TR 38.901 three-dimensional sector element.
    ThreeGpp3D { gain_db: f64 },
    /// Uniform gain in every direction.
    Isotropic { gain_db: f64 },
}

impl AntennaElement {
    pub fn gain_db(&self) -> f64 {
        match *self {
            Self::ThreeGpp3D { gain_db } | Self::Isotropic { gain_db } => gain_db,
        }
    }
}

/// Uniform planar array of identical elements, 3GPP style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AntennaArray {
    /// Label, also used as the snapshot file stem.
    pub name: String,

    /// Horizontal element spacing (wavelengths).
    pub h_spacing_wl: f64,

    /// Vertical element spacing (wavelengths).
    pub v_spacing_wl: f64,

    pub rows: usize,
    pub cols: usize,

    pub bearing_deg: f64,
    pub downtilt_deg: f64,
    pub slant_deg: f64,

    pub element: AntennaElement,

    /// Number of polarizations per element position.
    pub polarizations: usize,
}

impl AntennaArray {
    /// Returns a single row of `n` elements spaced half a wavelength
    /// apart with no mechanical tilt.
    pub fn uniform_linear(
        name: impl Into<String>,
        n: usize,
        element: AntennaElement,
    ) -> Result<Self, ChanError> {
        let name = name.into();
        if n == 0 {
            return Err(ChanError::Antenna(name));
        }
        Ok(Self {
            name,
            h_spacing_wl: 0.5,
            v_spacing_wl: 0.5,
            rows: 1,
            cols: n,
            bearing_deg: 0.0,
            downtilt_deg: 0.0,
            slant_deg: 0.0,
            element,
            polarizations: 1,
        })
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols * self.polarizations
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
