//! Target matrix construction.
//!
//! Traversal order is part of the contract: goos outer, goarch inner, variant
//! innermost, each in declaration order. Nothing is sorted.

use crate::catalog;
use crate::error::{Result, TargetError};
use crate::ignore::excluded;
use crate::spec::BuildSpec;
use crate::target::Target;
use crate::variant::Variants;
use crate::version::ToolchainVersion;

/// Compute the targets of `spec` for a toolchain at `version`.
///
/// All declarations are validated before anything is expanded, so the first
/// unknown value in declaration order is reported no matter where it appears.
pub fn build(spec: &BuildSpec, version: ToolchainVersion) -> Result<Vec<Target>> {
    if let Some(os) = spec.goos.iter().find(|os| !catalog::is_known_os(os)) {
        return Err(TargetError::InvalidGoos(os.clone()));
    }
    if let Some(arch) = spec.goarch.iter().find(|arch| !catalog::is_known_arch(arch)) {
        return Err(TargetError::InvalidGoarch(arch.clone()));
    }
    let variants = Variants::parse(&spec.goarm, &spec.gomips)?;

    let mut targets = Vec::new();
    for os in &spec.goos {
        for arch in &spec.goarch {
            if !catalog::valid(os, arch, version) {
                tracing::debug!(%os, %arch, %version, "skipped invalid combination");
                continue;
            }
            for target in variants.expand(os, arch) {
                if excluded(&target, &spec.ignore) {
                    tracing::debug!(%target, "skipped ignored build");
                    continue;
                }
                targets.push(target);
            }
        }
    }
    Ok(targets)
}

/// Compute canonical target identifiers from raw version-query output.
pub fn matrix(spec: &BuildSpec, version_output: &[u8]) -> Result<Vec<String>> {
    let version = ToolchainVersion::parse(version_output)?;
    Ok(build(spec, version)?
        .iter()
        .map(Target::to_string)
        .collect())
}
