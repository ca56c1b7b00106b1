//! `buildmatrix init`: create a template config.

use std::path::Path;

use anyhow::{bail, Context, Result};
use buildmatrix_targets::{BuildConfig, CONFIG_FILE};

/// Write a template `buildmatrix.toml` into `dir`.
pub fn run(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    std::fs::write(&path, BuildConfig::template())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_loadable_template() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();
        let config = BuildConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.builds.len(), 1);
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "# mine\n").unwrap();
        assert!(run(dir.path()).is_err());
        let content = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(content, "# mine\n");
    }
}
