//! `buildmatrix list`: print the targets of each configured build.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use buildmatrix_targets::{list, matrix, BuildConfig, BuildSpec, CONFIG_FILE};

use crate::Format;

/// Targets computed for one build.
#[derive(Debug, PartialEq, Eq)]
pub struct BuildTargets {
    pub id: String,
    pub targets: Vec<String>,
}

pub fn run(cwd: &Path, build: Option<&str>, go_version: Option<&str>, format: Format) -> Result<()> {
    let (config, project_dir) = require_config(BuildConfig::find_and_load(cwd)?, cwd)?;
    let results = collect(&config, &project_dir, build, go_version)?;
    print!("{}", render(&results, format)?);
    Ok(())
}

fn require_config(
    found: Option<(BuildConfig, PathBuf)>,
    cwd: &Path,
) -> Result<(BuildConfig, PathBuf)> {
    match found {
        Some(found) => Ok(found),
        None => bail!(
            "no {CONFIG_FILE} found in {} or any parent directory; run 'buildmatrix init'",
            cwd.display()
        ),
    }
}

/// Compute targets for the selected build, or for all of them.
///
/// With `go_version` set the toolchain is not run.
pub fn collect(
    config: &BuildConfig,
    project_dir: &Path,
    build: Option<&str>,
    go_version: Option<&str>,
) -> Result<Vec<BuildTargets>> {
    let specs: Vec<&BuildSpec> = match build {
        Some(id) => vec![config.build(id)?],
        None => config.builds.iter().collect(),
    };

    let mut results = Vec::with_capacity(specs.len());
    for spec in specs {
        let spec = resolve_dir(spec, project_dir);
        let id = spec.id.clone().unwrap_or_default();
        let targets = match go_version {
            Some(version) => matrix(&spec, version_output(version).as_bytes()),
            None => list(&spec),
        }
        .with_context(|| format!("build '{id}'"))?;
        tracing::info!(build = %id, count = targets.len(), "computed targets");
        results.push(BuildTargets { id, targets });
    }
    Ok(results)
}

/// Relative build directories are relative to the config file. An empty
/// `dir` stays unset.
fn resolve_dir(spec: &BuildSpec, project_dir: &Path) -> BuildSpec {
    let mut spec = spec.clone();
    spec.dir = spec
        .dir
        .take()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| {
            if dir.is_relative() {
                project_dir.join(dir)
            } else {
                dir
            }
        });
    spec
}

/// Accept both `go1.18.0` and a bare `1.18.0`.
pub fn version_output(version: &str) -> String {
    if version.contains("go") {
        version.to_string()
    } else {
        format!("go{version}")
    }
}

pub fn render(results: &[BuildTargets], format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let map: serde_json::Map<String, serde_json::Value> = results
                .iter()
                .map(|r| (r.id.clone(), serde_json::json!(r.targets)))
                .collect();
            Ok(serde_json::to_string_pretty(&map)? + "\n")
        }
        Format::Text if results.len() == 1 => {
            Ok(results[0].targets.iter().map(|t| format!("{t}\n")).collect())
        }
        Format::Text => {
            let mut out = String::new();
            for r in results {
                out.push_str(&format!("{}:\n", r.id));
                for t in &r.targets {
                    out.push_str(&format!("  {t}\n"));
                }
            }
            Ok(out)
        }
    }
}
