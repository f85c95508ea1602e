use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tickgrid_types::{InstrumentId, TickgridError};

use crate::layout::{DatasetLayout, InstrumentSelection};

/// Files found for one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSource {
    /// Period name (e.g. `Period1`).
    pub name: String,
    /// Directory holding the instrument folders.
    pub dir: PathBuf,
    /// Input file per instrument that exists.
    pub files: BTreeMap<InstrumentId, PathBuf>,
    /// Expected input file per instrument that does not exist.
    pub missing: BTreeMap<InstrumentId, PathBuf>,
}

fn sorted_subdirs(dir: &Path) -> Result<Vec<(String, PathBuf)>, TickgridError> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| TickgridError::io(dir, e))? {
        let entry = entry.map_err(|e| TickgridError::io(dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            out.push((name.to_string(), path));
        }
    }
    out.sort();
    Ok(out)
}

fn instruments_in(
    dir: &Path,
    selection: &InstrumentSelection,
) -> Result<Vec<InstrumentId>, TickgridError> {
    match selection {
        InstrumentSelection::Fixed(ids) => Ok(ids.clone()),
        InstrumentSelection::Scan => Ok(sorted_subdirs(dir)?
            .into_iter()
            .map(|(name, _)| InstrumentId::from(name))
            .collect()),
    }
}

/// List every period under `layout.base`, sorted by name.
///
/// An entry counts as a period when its name starts with the period prefix
/// and its (possibly nested) period directory exists.
///
/// # Errors
/// Returns `Io` if the base directory, or a period directory being scanned,
/// cannot be read.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tickgrid_csv::discover_periods",
        skip_all,
        fields(base = %layout.base.display()),
    )
)]
pub fn discover_periods(layout: &DatasetLayout) -> Result<Vec<PeriodSource>, TickgridError> {
    let mut periods = Vec::new();
    for (name, _) in sorted_subdirs(&layout.base)? {
        if !name.starts_with(&layout.period_prefix) {
            continue;
        }
        let dir = layout.period_dir(&name);
        if !dir.is_dir() {
            #[cfg(feature = "tracing")]
            tracing::warn!(period = %name, dir = %dir.display(), "period directory not found");
            continue;
        }

        let mut files = BTreeMap::new();
        let mut missing = BTreeMap::new();
        for id in instruments_in(&dir, &layout.instruments)? {
            let path = DatasetLayout::trade_file(&dir, &id);
            if path.is_file() {
                files.insert(id, path);
            } else {
                #[cfg(feature = "tracing")]
                tracing::warn!(period = %name, instrument = %id, "input file not found");
                missing.insert(id, path);
            }
        }
        periods.push(PeriodSource {
            name,
            dir,
            files,
            missing,
        });
    }
    #[cfg(feature = "tracing")]
    tracing::info!(periods = periods.len(), "discovered periods");
    Ok(periods)
}
