use crate::{
    antenna::AntennaArray, band::FrequencyBand, error::ChanError, fading::Fading,
    scenario::Scenario,
};
use log::debug;
use serde::Serialize;
use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// A configuration object that can snapshot itself into a run
/// directory.
pub trait Save: Serialize {
    /// File name, without extension, of this object's snapshot.
    fn snapshot_stem(&self) -> Cow<'_, str>;

    /// Returns the snapshot's file name within a run directory.
    fn snapshot_name(&self) -> String {
        format!("{}.json", self.snapshot_stem())
    }

    /// Writes a JSON snapshot into `dir`, which must already exist,
    /// and returns its path.
    fn save(&self, dir: &Path) -> Result<PathBuf, ChanError> {
        let path = dir.join(self.snapshot_name());
        debug!("saving {path:?}");
        write_json(&path, self)?;
        Ok(path)
    }
}

/// Writes `value` to `path` as pretty-printed JSON, replacing any
/// existing file.
pub(crate) fn write_json<T>(path: &Path, value: &T) -> Result<(), ChanError>
where
    T: Serialize + ?Sized,
{
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| ChanError::Json(e, path.to_path_buf()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

impl Save for Scenario {
    fn snapshot_stem(&self) -> Cow<'_, str> {
        Cow::Borrowed("scenario")
    }
}

impl Save for AntennaArray {
    fn snapshot_stem(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }
}

impl Save for FrequencyBand {
    fn snapshot_stem(&self) -> Cow<'_, str> {
        Cow::Borrowed("freq_band")
    }
}

impl Save for Fading<'_> {
    fn snapshot_stem(&self) -> Cow<'_, str> {
        Cow::Borrowed("fading")
    }
}
