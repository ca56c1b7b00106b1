//! Entry point: check the environment, ask the toolchain for its version, and
//! build the matrix.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::error::{Result, TargetError};
use crate::matrix::matrix;
use crate::spec::BuildSpec;

/// What a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    /// Exists but is not a directory.
    Other,
    Missing,
}

/// Inspects paths on behalf of the lister.
pub trait PathInspector {
    fn inspect(&self, path: &Path) -> PathKind;
}

/// Produces the raw output of `<binary> version`.
pub trait VersionProbe {
    fn probe(&self, binary: &str, dir: Option<&Path>) -> io::Result<Vec<u8>>;
}

/// Inspects the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filesystem;

impl PathInspector for Filesystem {
    fn inspect(&self, path: &Path) -> PathKind {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => PathKind::Directory,
            Ok(_) => PathKind::Other,
            Err(_) => PathKind::Missing,
        }
    }
}

/// Runs the toolchain binary as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProbe;

impl VersionProbe for CommandProbe {
    fn probe(&self, binary: &str, dir: Option<&Path>) -> io::Result<Vec<u8>> {
        let mut cmd = Command::new(binary);
        cmd.arg("version");
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        tracing::trace!(?cmd, "probing toolchain version");
        let output = cmd.output()?;
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        if !output.status.success() {
            let text = String::from_utf8_lossy(&combined);
            return Err(io::Error::other(format!("{}: {}", output.status, text.trim())));
        }
        Ok(combined)
    }
}

/// Computes target lists using pluggable collaborators.
#[derive(Debug, Clone, Default)]
pub struct Lister<P = CommandProbe, I = Filesystem> {
    probe: P,
    inspector: I,
}

impl<P: VersionProbe, I: PathInspector> Lister<P, I> {
    pub fn new(probe: P, inspector: I) -> Self {
        Self { probe, inspector }
    }

    /// List the canonical target identifiers for `spec`.
    ///
    /// An empty `dir` counts as unset.
    pub fn list(&self, spec: &BuildSpec) -> Result<Vec<String>> {
        let dir = spec
            .dir
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty());
        if let Some(dir) = dir {
            if self.inspector.inspect(dir) != PathKind::Directory {
                return Err(TargetError::InvalidDir {
                    dir: dir.to_path_buf(),
                });
            }
        }
        let output = self
            .probe
            .probe(&spec.gobinary, dir)
            .map_err(|error| TargetError::VersionProbe {
                binary: spec.gobinary.clone(),
                error,
            })?;
        matrix(spec, &output)
    }
}

/// List targets using the real toolchain and filesystem.
pub fn list(spec: &BuildSpec) -> Result<Vec<String>> {
    Lister::<CommandProbe, Filesystem>::default().list(spec)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use super::*;

    #[derive(Default)]
    struct FakeProbe {
        output: &'static str,
        calls: RefCell<Vec<(String, Option<PathBuf>)>>,
    }

    impl VersionProbe for FakeProbe {
        fn probe(&self, binary: &str, dir: Option<&Path>) -> io::Result<Vec<u8>> {
            self.calls
                .borrow_mut()
                .push((binary.to_string(), dir.map(Path::to_path_buf)));
            if binary == "nope" {
                return Err(io::Error::new(io::ErrorKind::NotFound, "executable file not found"));
            }
            Ok(self.output.as_bytes().to_vec())
        }
    }

    fn probe(output: &'static str) -> FakeProbe {
        FakeProbe {
            output,
            ..FakeProbe::default()
        }
    }

    fn linux_amd64() -> BuildSpec {
        BuildSpec {
            goos: vec!["linux".into()],
            goarch: vec!["amd64".into()],
            ..BuildSpec::default()
        }
    }

    #[test]
    fn success() {
        let lister = Lister::new(probe("go version go1.18.0 linux/amd64\n"), Filesystem);
        assert_eq!(lister.list(&linux_amd64()).unwrap(), ["linux_amd64"]);
        assert_eq!(
            *lister.probe.calls.borrow(),
            vec![("go".to_string(), None)]
        );
    }

    #[test]
    fn success_with_dir() {
        let dir = tempfile::tempdir().unwrap();
        let spec = BuildSpec {
            dir: Some(dir.path().to_path_buf()),
            ..linux_amd64()
        };
        let lister = Lister::new(probe("go version go1.18.0"), Filesystem);
        assert_eq!(lister.list(&spec).unwrap(), ["linux_amd64"]);
        // the probe runs inside the declared directory
        assert_eq!(
            lister.probe.calls.borrow()[0].1.as_deref(),
            Some(dir.path())
        );
    }

    #[test]
    fn empty_dir_is_unset() {
        let spec = BuildSpec {
            dir: Some(PathBuf::new()),
            ..linux_amd64()
        };
        let lister = Lister::new(probe("go version go1.18.0"), Filesystem);
        assert_eq!(lister.list(&spec).unwrap(), ["linux_amd64"]);
        assert_eq!(
            *lister.probe.calls.borrow(),
            vec![("go".to_string(), None)]
        );
    }

    #[test]
    fn error_with_file_as_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("targets.go");
        std::fs::write(&file, "package main\n").unwrap();
        let spec = BuildSpec {
            dir: Some(file.clone()),
            ..linux_amd64()
        };
        let lister = Lister::new(probe("go version go1.18.0"), Filesystem);
        let err = lister.list(&spec).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "invalid builds.dir property, it should be a directory: {}",
                file.display()
            )
        );
        // environment is checked before the toolchain is touched
        assert!(lister.probe.calls.borrow().is_empty());
    }

    #[test]
    fn error_with_missing_dir() {
        let spec = BuildSpec {
            dir: Some(PathBuf::from("/nonexistent/buildmatrix")),
            ..linux_amd64()
        };
        let err = list(&spec).unwrap_err();
        assert!(matches!(err, TargetError::InvalidDir { .. }));
    }

    #[test]
    fn probe_failure() {
        let spec = BuildSpec {
            gobinary: "nope".into(),
            ..linux_amd64()
        };
        let lister = Lister::new(probe(""), Filesystem);
        let err = lister.list(&spec).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unable to determine version of go binary (nope): executable file not found"
        );
    }

    #[test]
    fn missing_binary_on_system() {
        let spec = BuildSpec {
            gobinary: "buildmatrix-no-such-go-binary".into(),
            ..linux_amd64()
        };
        let err = list(&spec).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("unable to determine version of go binary (buildmatrix-no-such-go-binary):"));
    }

    #[test]
    fn unparsable_probe_output() {
        let lister = Lister::new(probe("something unexpected"), Filesystem);
        let err = lister.list(&linux_amd64()).unwrap_err();
        assert!(matches!(err, TargetError::VersionParse { .. }));
    }

    #[test]
    fn validation_errors_propagate() {
        let spec = BuildSpec {
            goos: vec!["invalid".into()],
            ..linux_amd64()
        };
        let lister = Lister::new(probe("go version go1.18.0"), Filesystem);
        assert_eq!(
            lister.list(&spec).unwrap_err().to_string(),
            "invalid goos: invalid"
        );
    }

    #[test]
    fn filesystem_inspector() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, "").unwrap();
        assert_eq!(Filesystem.inspect(dir.path()), PathKind::Directory);
        assert_eq!(Filesystem.inspect(&file), PathKind::Other);
        assert_eq!(Filesystem.inspect(&dir.path().join("missing")), PathKind::Missing);
    }
}
