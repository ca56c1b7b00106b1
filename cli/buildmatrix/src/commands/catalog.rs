//! `buildmatrix catalog`: platform support listing.

use anyhow::Result;
use buildmatrix_targets::{catalog, ToolchainVersion};

use super::list::version_output;

pub fn run(go_version: Option<&str>) -> Result<()> {
    print!("{}", render(go_version)?);
    Ok(())
}

/// Render every valid `os/arch` pair, one per line.
pub fn render(go_version: Option<&str>) -> Result<String> {
    let version = match go_version {
        Some(v) => ToolchainVersion::parse(version_output(v).as_bytes())?,
        None => catalog::newest_gate(),
    };
    let mut out = format!("Platforms supported by {version}:\n");
    for (os, arch) in catalog::platforms(version) {
        out.push_str(&format!("  {os}/{arch}\n"));
    }
    Ok(out)
}
