//! Collision-free run directory allocation.
//!
//! A run directory is named `<stem>_<NNNN>`. When the requested
//! directory already exists the numeric suffix is bumped until an
//! unused name is found. Each candidate is claimed with a single
//! `create_dir` call, so two concurrent runs can never end up sharing
//! a directory.

use crate::error::OutDirError;
use log::{debug, info};
use std::{
    fmt, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Upper bound on directories probed before giving up.
pub const MAX_ATTEMPTS: u32 = 10_000;

/// A run name split into its stem and numeric collision counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunName {
    stem: String,
    /// Suffix exactly as it will be rendered.
    digits: String,
    counter: u64,
}

impl RunName {
    /// Splits `name` on its last underscore. Everything after it must
    /// be a decimal number that fits in a `u64`.
    pub fn parse(name: &str) -> Result<Self, OutDirError> {
        let bad_suffix = || OutDirError::Suffix(name.to_owned());
        let (stem, digits) = name.rsplit_once('_').ok_or_else(bad_suffix)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad_suffix());
        }
        let counter = digits
            .parse()
            .map_err(|_| OutDirError::SuffixRange(name.to_owned()))?;
        Ok(Self {
            stem: stem.to_owned(),
            digits: digits.to_owned(),
            counter,
        })
    }

    /// Returns the following name, zero padded to at least four
    /// digits.
    fn next(&self) -> Option<Self> {
        let counter = self.counter.checked_add(1)?;
        Some(Self {
            stem: self.stem.clone(),
            digits: format!("{counter:04}"),
            counter,
        })
    }
}

impl fmt::Display for RunName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.stem, self.digits)
    }
}

/// Creates and returns a fresh run directory `base/name`, bumping the
/// name's numeric suffix past any existing entries.
///
/// `base` is created, including parents, if it doesn't exist.
pub fn resolve(base: &Path, name: &str) -> Result<PathBuf, OutDirError> {
    resolve_within(base, name, MAX_ATTEMPTS)
}

fn resolve_within(base: &Path, name: &str, attempts: u32) -> Result<PathBuf, OutDirError> {
    let mut run = RunName::parse(name)?;
    fs::create_dir_all(base).map_err(|e| OutDirError::Io(e, base.to_path_buf()))?;

    let start = base.join(run.to_string());
    for _ in 0..attempts {
        let candidate = base.join(run.to_string());
        match fs::create_dir(&candidate) {
            Ok(()) => {
                info!("simulation path: {}", candidate.display());
                return Ok(candidate);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("{candidate:?} exists");
                match run.next() {
                    Some(next) => run = next,
                    None => break,
                }
            }
            Err(e) => return Err(OutDirError::Io(e, candidate)),
        }
    }
    Err(OutDirError::Exhausted { attempts, start })
}
