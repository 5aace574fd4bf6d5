use crate::error::ChanError;
use serde::Serialize;

/// Subcarriers in one resource block.
pub const SUBCARRIERS_PER_PRB: f64 = 12.0;

/// The simulated slice of spectrum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyBand {
    /// Center frequency (GHz).
    pub fc_ghz: f64,

    pub number_prbs: u32,

    /// Bandwidth of a single resource block (Hz).
    pub bw_prb_hz: f64,

    /// Receiver noise figure (dB).
    pub noise_figure_db: f64,

    /// Thermal noise density (dBm/Hz).
    pub thermal_noise_dbm_hz: f64,

    /// Flat transmit power spectral density (dBm/Hz), set by
    /// [`FrequencyBand::compute_tx_psd`].
    pub tx_psd_dbm_hz: Option<f64>,
}

impl FrequencyBand {
    pub fn new(
        fc_ghz: f64,
        number_prbs: u32,
        bw_prb_hz: f64,
        noise_figure_db: f64,
        thermal_noise_dbm_hz: f64,
    ) -> Result<Self, ChanError> {
        if !(fc_ghz.is_finite() && fc_ghz > 0.0) {
            return Err(ChanError::Band("center frequency must be finite and positive"));
        }
        if number_prbs == 0 {
            return Err(ChanError::Band("needs at least one resource block"));
        }
        if !(bw_prb_hz.is_finite() && bw_prb_hz > 0.0) {
            return Err(ChanError::Band("resource block bandwidth must be finite and positive"));
        }
        if !(noise_figure_db.is_finite() && thermal_noise_dbm_hz.is_finite()) {
            return Err(ChanError::Band("noise parameters must be finite"));
        }
        Ok(Self {
            fc_ghz,
            number_prbs,
            bw_prb_hz,
            noise_figure_db,
            thermal_noise_dbm_hz,
            tx_psd_dbm_hz: None,
        })
    }

    /// Returns a band whose resource blocks are twelve subcarriers of
    /// `scs_khz` each.
    pub fn from_numerology(
        fc_ghz: f64,
        number_prbs: u32,
        scs_khz: f64,
        noise_figure_db: f64,
        thermal_noise_dbm_hz: f64,
    ) -> Result<Self, ChanError> {
        let bw_prb_hz = scs_khz * SUBCARRIERS_PER_PRB * 1e3;
        Self::new(
            fc_ghz,
            number_prbs,
            bw_prb_hz,
            noise_figure_db,
            thermal_noise_dbm_hz,
        )
    }

    /// Total occupied bandwidth (Hz).
    pub fn bandwidth_hz(&self) -> f64 {
        f64::from(self.number_prbs) * self.bw_prb_hz
    }

    /// Spreads `tx_power_dbm` evenly over the band and records the
    /// resulting density.
    pub fn compute_tx_psd(&mut self, tx_power_dbm: f64) -> Result<f64, ChanError> {
        let psd = tx_power_dbm - 10.0 * self.bandwidth_hz().log10();
        if !psd.is_finite() {
            return Err(ChanError::Band("transmit power must be finite"));
        }
        self.tx_psd_dbm_hz = Some(psd);
        Ok(psd)
    }
}
