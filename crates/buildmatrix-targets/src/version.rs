//! Toolchain version extraction.
//!
//! The toolchain reports its version as free-form text, e.g.
//! `go version go1.18.0 linux/amd64` or `go version devel go1.22-4f9ad2c ...`.
//! Only the major and minor components matter for platform gating.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TargetError};

static GO_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"go(\d+)\.(\d+)").unwrap());

/// A toolchain release, ordered by `(major, minor)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToolchainVersion {
    pub major: u32,
    pub minor: u32,
}

impl ToolchainVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Extract the version from raw version-query output.
    ///
    /// The first `go<major>.<minor>` token wins; patch, pre-release suffixes and
    /// any trailing text are ignored.
    pub fn parse(output: &[u8]) -> Result<Self> {
        let text = String::from_utf8_lossy(output);
        let version = GO_VERSION.captures_iter(&text).find_map(|caps| {
            let major = caps[1].parse().ok()?;
            let minor = caps[2].parse().ok()?;
            Some(ToolchainVersion::new(major, minor))
        });
        match version {
            Some(version) => {
                tracing::debug!(%version, "parsed toolchain version");
                Ok(version)
            }
            None => Err(TargetError::VersionParse {
                output: text.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "go{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_output() {
        let v = ToolchainVersion::parse(b"go version go1.18.0 linux/amd64\n").unwrap();
        assert_eq!(v, ToolchainVersion::new(1, 18));
        let v = ToolchainVersion::parse(b"go version go1.16.2").unwrap();
        assert_eq!(v, ToolchainVersion::new(1, 16));
    }

    #[test]
    fn two_component_and_prerelease() {
        assert_eq!(
            ToolchainVersion::parse(b"go version go1.21 darwin/arm64").unwrap(),
            ToolchainVersion::new(1, 21)
        );
        assert_eq!(
            ToolchainVersion::parse(b"go version go1.21rc2 linux/amd64").unwrap(),
            ToolchainVersion::new(1, 21)
        );
    }

    #[test]
    fn devel_output() {
        let v = ToolchainVersion::parse(b"go version devel go1.22-4f9ad2c Tue Oct 3 linux/amd64")
            .unwrap();
        assert_eq!(v, ToolchainVersion::new(1, 22));
    }

    #[test]
    fn no_token_is_parse_error() {
        let err = ToolchainVersion::parse(b"command not found: go\n").unwrap_err();
        assert!(matches!(err, TargetError::VersionParse { .. }));
        assert_eq!(err.to_string(), "unable to parse go version: command not found: go");

        assert!(ToolchainVersion::parse(b"").is_err());
        assert!(ToolchainVersion::parse(b"go version go1 linux").is_err());
        // a component too large for u32 is skipped, not truncated
        assert_eq!(
            ToolchainVersion::parse(b"go99999999999.1 then go1.20.3").unwrap(),
            ToolchainVersion::new(1, 20)
        );
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(ToolchainVersion::new(1, 9) < ToolchainVersion::new(1, 18));
        assert!(ToolchainVersion::new(1, 18) < ToolchainVersion::new(2, 0));
        assert!(ToolchainVersion::new(1, 18) >= ToolchainVersion::new(1, 18));
    }

    #[test]
    fn display() {
        assert_eq!(ToolchainVersion::new(1, 18).to_string(), "go1.18");
    }
}
