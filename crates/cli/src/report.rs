use anyhow::{Context, Result};
use mapcolor::{Color, Layout};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Inputs that determine a run's output.
#[derive(Clone, Debug, Serialize)]
pub struct RunParams {
    pub input: String,
    pub seed: u64,
    pub amount: i64,
    pub symmetric: bool,
}

#[derive(Serialize)]
struct RegionRow<'a> {
    label: &'a str,
    neighbors: Vec<&'a str>,
    color: Option<Color>,
}

/// JSON document with the code revision, params, per-region result, and outputs.
pub fn build(layout: &Layout, params: &RunParams, outputs: &[&Path]) -> Value {
    let regions: Vec<RegionRow> = layout
        .regions()
        .iter()
        .map(|r| RegionRow {
            label: r.label(),
            neighbors: layout.neighbor_labels(r.id()),
            color: r.color(),
        })
        .collect();
    json!({
        "code_rev": code_rev(),
        "version": mapcolor::VERSION,
        "params": params,
        "regions": regions,
        "conflicts": layout.conflicts().len(),
        "outputs": outputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>(),
    })
}

/// Write `doc` to `path`, creating parent directories.
pub fn write(path: &Path, doc: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "report");
    Ok(())
}

fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
