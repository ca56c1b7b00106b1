//! Build declarations and the `buildmatrix.toml` config file.
//!
//! A config file holds one or more `[[builds]]` tables:
//!
//! ```toml
//! [[builds]]
//! id = "cli"
//! goos = ["linux", "darwin"]
//! goarch = ["amd64", "arm"]
//! goarm = ["6", "7"]
//!
//! [[builds.ignore]]
//! goos = "darwin"
//! goarch = "arm"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};

/// Config file name searched for by [`BuildConfig::find_and_load`].
pub const CONFIG_FILE: &str = "buildmatrix.toml";

/// Declarative description of one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSpec {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub goos: Vec<String>,
    #[serde(default)]
    pub goarch: Vec<String>,
    #[serde(default)]
    pub goarm: Vec<String>,
    #[serde(default)]
    pub gomips: Vec<String>,
    #[serde(default)]
    pub ignore: Vec<IgnoreRule>,
    /// Toolchain binary queried for its version.
    #[serde(default = "default_gobinary")]
    pub gobinary: String,
    /// Working directory for the toolchain.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_gobinary() -> String {
    "go".to_string()
}

impl Default for BuildSpec {
    fn default() -> Self {
        Self {
            id: None,
            goos: Vec::new(),
            goarch: Vec::new(),
            goarm: Vec::new(),
            gomips: Vec::new(),
            ignore: Vec::new(),
            gobinary: default_gobinary(),
            dir: None,
        }
    }
}

/// A partially specified target. Unset (or empty) fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goarch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goarm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gomips: Option<String>,
}

/// Top-level structure of `buildmatrix.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub builds: Vec<BuildSpec>,
}

impl BuildConfig {
    /// Parse a config from a TOML string, assigning ids to anonymous builds.
    ///
    /// Build ids must be unique, including the assigned ones.
    pub fn parse(toml_str: &str) -> Result<Self> {
        let mut config: BuildConfig = toml::from_str(toml_str)?;
        for (n, build) in config.builds.iter_mut().enumerate() {
            if build.id.is_none() {
                build.id = Some(if n == 0 {
                    "default".to_string()
                } else {
                    format!("build-{n}")
                });
            }
        }
        let mut seen = HashSet::new();
        for id in config.builds.iter().filter_map(|b| b.id.as_deref()) {
            if !seen.insert(id) {
                return Err(TargetError::DuplicateBuild(id.to_string()));
            }
        }
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TargetError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Search upward from `start_dir` for `buildmatrix.toml`, returning the
    /// parsed config and the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "found build config");
                return Ok(Some((Self::load(&candidate)?, dir)));
            }
            if !dir.pop() {
                return Ok(None);
            }
        }
    }

    /// Look up a build by id.
    pub fn build(&self, id: &str) -> Result<&BuildSpec> {
        self.builds
            .iter()
            .find(|b| b.id.as_deref() == Some(id))
            .ok_or_else(|| TargetError::UnknownBuild(id.to_string()))
    }

    /// Template written by `buildmatrix init`.
    pub fn template() -> &'static str {
        r#"[[builds]]
id = "default"
goos = ["linux", "darwin", "windows"]
goarch = ["amd64", "arm64", "arm"]
goarm = ["6", "7"]
gobinary = "go"

[[builds.ignore]]
goos = "darwin"
goarch = "arm"
"#
    }
}
