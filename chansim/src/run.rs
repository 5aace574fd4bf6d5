use crate::{
    config::{BaseStationConfig, Config, MobileStationConfig},
    outdir,
};
use anyhow::Result;
use chanmodel::{
    AntennaArray, AntennaElement, ChannelPerformance, Fading, PathMode, PathRequest, Save,
    Scenario,
};
use log::debug;
use std::path::PathBuf;

/// Label of the base station array snapshot.
const BS_ARRAY_NAME: &str = "antennaRx";

/// Label of the mobile station array snapshot.
const MS_ARRAY_NAME: &str = "antennaTx";

/// Allocates the run directory, snapshots every configuration object
/// into it, then hands the stations' trajectories to `engine`.
///
/// Every object is built before the directory is claimed, so a
/// rejected configuration leaves nothing on disk.
///
/// Returns the run directory.
pub fn execute<P>(config: &Config, engine: &mut P) -> Result<PathBuf>
where
    P: ChannelPerformance,
{
    let (bs_array, ms_array) = antennas(&config.bs, &config.ms)?;
    let scenario = scenario(config)?;
    let freq_band = &config.band;
    debug!(
        "tx psd {:?} dBm/Hz over {} Hz, bs noise figure {} dB",
        freq_band.tx_psd_dbm_hz,
        freq_band.bandwidth_hz(),
        config.bs.noise_figure_db
    );
    let fading = Fading::three_gpp(&scenario);

    let run_dir = outdir::resolve(&config.path, &config.name)?;

    let saved = [
        scenario.save(&run_dir)?,
        bs_array.save(&run_dir)?,
        ms_array.save(&run_dir)?,
        freq_band.save(&run_dir)?,
        fading.save(&run_dir)?,
    ];
    debug!("saved {saved:?}");

    engine.compute_path(&PathRequest {
        fading: &fading,
        freq_band,
        antenna_tx: &bs_array,
        antenna_rx: &ms_array,
        trajectories: &config.ms.trajectories,
        force_los: config.los,
        path: &run_dir,
        mode: PathMode::default(),
    })?;

    Ok(run_dir)
}

fn antennas(
    bs: &BaseStationConfig,
    ms: &MobileStationConfig,
) -> Result<(AntennaArray, AntennaArray)> {
    let bs_element = AntennaElement::ThreeGpp3D { gain_db: bs.gain_db };
    let ms_element = AntennaElement::Isotropic { gain_db: ms.gain_db };
    let bs_array = AntennaArray::uniform_linear(BS_ARRAY_NAME, bs.antennas, bs_element)?;
    let ms_array = AntennaArray::uniform_linear(MS_ARRAY_NAME, ms.antennas, ms_element)?;
    Ok((bs_array, ms_array))
}

fn scenario(config: &Config) -> Result<Scenario> {
    let scenario = Scenario::builder()
        .kind(config.mode)
        .fc_ghz(config.band.fc_ghz)
        .grid(config.grid)
        .bs_position(config.bs.position)
        .bs_power_dbm(config.bs.tx_power_dbm)
        .shadowing(true)
        .force_los(config.los)
        .build()?;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::execute;
    use crate::{config::Config, options::Cli};
    use chanmodel::{
        ChanError, ChannelPerformance, ForceLos, ManifestPerformance, PathMode, PathRequest,
        ScenarioKind, Trajectory,
    };
    use clap::Parser;
    use serde_json::Value;
    use std::{fs, path::PathBuf};

    /// Captures the parts of each request that outlive the call.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Recorded>,
    }

    struct Recorded {
        path: PathBuf,
        trajectories: Vec<Trajectory>,
        force_los: ForceLos,
        mode: PathMode,
        scenario: ScenarioKind,
        tx_name: String,
        rx_name: String,
        tx_psd: Option<f64>,
        saved: Vec<String>,
    }

    impl ChannelPerformance for Recorder {
        fn compute_path(&mut self, req: &PathRequest<'_>) -> Result<(), ChanError> {
            let mut saved: Vec<String> = fs::read_dir(req.path)?
                .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
                .collect::<Result<_, _>>()?;
            saved.sort();
            self.calls.push(Recorded {
                path: req.path.to_path_buf(),
                trajectories: req.trajectories.to_vec(),
                force_los: req.force_los,
                mode: req.mode,
                scenario: req.fading.scenario.kind,
                tx_name: req.antenna_tx.name.clone(),
                rx_name: req.antenna_rx.name.clone(),
                tx_psd: req.freq_band.tx_psd_dbm_hz,
                saved,
            });
            Ok(())
        }
    }

    fn config(base: &std::path::Path, args: &[&str]) -> Config {
        let base = base.to_str().unwrap();
        let cli = Cli::try_parse_from(
            ["chansim", "--path", base]
                .into_iter()
                .chain(args.iter().copied()),
        )
        .unwrap();
        Config::try_from(cli).unwrap()
    }

    #[test]
    fn test_execute_saves_then_computes() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path(), &["--mode", "umi", "--los", "1", "--name", "run"]);
        let mut recorder = Recorder::default();
        let run_dir = execute(&config, &mut recorder).unwrap();

        assert_eq!(run_dir, tmp.path().join("run_0000"));
        assert_eq!(recorder.calls.len(), 1);
        let call = &recorder.calls[0];
        assert_eq!(call.path, run_dir);
        assert_eq!(call.force_los, ForceLos::Los);
        assert_eq!(call.mode, PathMode(2));
        assert_eq!(call.scenario, ScenarioKind::UrbanMicro);
        assert_eq!(call.tx_name, "antennaRx");
        assert_eq!(call.rx_name, "antennaTx");
        assert!(call.tx_psd.is_some());
        assert_eq!(call.trajectories, config.ms.trajectories);
        assert_eq!(
            call.saved,
            [
                "antennaRx.json",
                "antennaTx.json",
                "fading.json",
                "freq_band.json",
                "scenario.json"
            ]
        );
    }

    #[test]
    fn test_second_run_gets_next_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path(), &["--name", "run"]);
        let mut recorder = Recorder::default();
        let first = execute(&config, &mut recorder).unwrap();
        let second = execute(&config, &mut recorder).unwrap();
        assert_eq!(first, tmp.path().join("run_0000"));
        assert_eq!(second, tmp.path().join("run_0001"));
    }

    #[test]
    fn test_bad_run_name_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path(), &["--name", "my_run"]);
        let err = execute(&config, &mut Recorder::default()).unwrap_err();
        assert!(err.to_string().contains("my_run"));
        assert!(fs::read_dir(tmp.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_bad_grid_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "chansim",
            "--path",
            tmp.path().to_str().unwrap(),
            "--xmin",
            "10",
            "--xmax",
            "-10",
        ])
        .unwrap();
        assert!(Config::try_from(cli).is_err());
        assert!(fs::read_dir(tmp.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_failed_build_leaves_no_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = config(tmp.path(), &[]);
        config.bs.antennas = 0;
        let mut recorder = Recorder::default();
        let err = execute(&config, &mut recorder).unwrap_err();
        assert!(err.to_string().contains("antennaRx"));
        assert!(recorder.calls.is_empty());
        assert!(fs::read_dir(tmp.path()).unwrap().next().is_none());

        config.bs.antennas = 2;
        let run_dir = execute(&config, &mut recorder).unwrap();
        assert_eq!(run_dir, tmp.path().join("test_0000"));
    }

    #[test]
    fn test_manifest_engine() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(
            tmp.path(),
            &[
                "--mode", "UMA", "--Nms", "2", "--pms", "0,0,1.5:10,0,1.5", "--tms", "0,1",
                "--pms", "5,5,1.5", "--tms", "0",
            ],
        );
        let mut engine = ManifestPerformance::new();
        let run_dir = execute(&config, &mut engine).unwrap();
        assert_eq!(run_dir, tmp.path().join("test_0000"));

        let manifest: Value =
            serde_json::from_reader(fs::File::open(run_dir.join("path_request.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["stations"].as_array().unwrap().len(), 2);
        assert_eq!(manifest["scenario"], "scenario.json");

        let scenario: Value =
            serde_json::from_reader(fs::File::open(run_dir.join("scenario.json")).unwrap())
                .unwrap();
        assert_eq!(scenario["kind"], "urban_macro");
        assert_eq!(scenario["shadowing"], true);
    }
}
