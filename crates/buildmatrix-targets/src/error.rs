//! Error types for target matrix operations.

use std::path::PathBuf;

/// Broad classification of a [`TargetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The build spec names something the catalog does not know.
    ConfigValidation,
    /// The caller's environment is misconfigured (directory, toolchain binary).
    Environment,
    /// The toolchain reported a version we cannot read.
    Parse,
}

/// Errors that can occur while computing a target matrix.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// Operating system not present in the platform catalog.
    #[error("invalid goos: {0}")]
    InvalidGoos(String),

    /// Architecture not present in the platform catalog.
    #[error("invalid goarch: {0}")]
    InvalidGoarch(String),

    /// ARM revision outside the supported set.
    #[error("invalid goarm: {0}")]
    InvalidGoarm(String),

    /// MIPS float mode outside the supported set.
    #[error("invalid gomips: {0}")]
    InvalidGomips(String),

    /// Target identifier that does not have the `os_arch[_variant]` shape.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// Declared working directory is missing or not a directory.
    #[error("invalid builds.dir property, it should be a directory: {}", dir.display())]
    InvalidDir {
        /// The offending directory.
        dir: PathBuf,
    },

    /// The toolchain version query could not be run, or failed.
    #[error("unable to determine version of go binary ({binary}): {error}")]
    VersionProbe {
        /// Configured toolchain binary.
        binary: String,
        /// Underlying invocation failure, already part of the message.
        error: std::io::Error,
    },

    /// No version token in the toolchain output.
    #[error("unable to parse go version: {output}")]
    VersionParse {
        /// The (trimmed) output that was inspected.
        output: String,
    },

    /// Config file not found.
    #[error("config file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// No build with the requested id in the config file.
    #[error("no build with id '{0}'")]
    UnknownBuild(String),

    /// Two builds in the config file share an id.
    #[error("duplicate build id '{0}'")]
    DuplicateBuild(String),

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TargetError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TargetError::InvalidGoos(_)
            | TargetError::InvalidGoarch(_)
            | TargetError::InvalidGoarm(_)
            | TargetError::InvalidGomips(_)
            | TargetError::InvalidTarget(_)
            | TargetError::UnknownBuild(_)
            | TargetError::DuplicateBuild(_)
            | TargetError::Toml(_) => ErrorKind::ConfigValidation,
            TargetError::InvalidDir { .. }
            | TargetError::VersionProbe { .. }
            | TargetError::NotFound { .. }
            | TargetError::Io(_) => ErrorKind::Environment,
            TargetError::VersionParse { .. } => ErrorKind::Parse,
        }
    }
}

/// Result type for target matrix operations.
pub type Result<T> = std::result::Result<T, TargetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages() {
        assert_eq!(
            TargetError::InvalidGoos("invalid".into()).to_string(),
            "invalid goos: invalid"
        );
        assert_eq!(
            TargetError::InvalidGomips("x".into()).to_string(),
            "invalid gomips: x"
        );
        assert_eq!(
            TargetError::InvalidGoarm("5".into()).kind(),
            ErrorKind::ConfigValidation
        );
        let err = TargetError::DuplicateBuild("default".into());
        assert_eq!(err.to_string(), "duplicate build id 'default'");
        assert_eq!(err.kind(), ErrorKind::ConfigValidation);
    }

    #[test]
    fn environment_messages() {
        let err = TargetError::InvalidDir {
            dir: PathBuf::from("targets.go"),
        };
        assert_eq!(
            err.to_string(),
            "invalid builds.dir property, it should be a directory: targets.go"
        );
        assert_eq!(err.kind(), ErrorKind::Environment);

        let err = TargetError::VersionProbe {
            binary: "nope".into(),
            error: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "unable to determine version of go binary (nope): not found"
        );
    }

    #[test]
    fn parse_kind() {
        let err = TargetError::VersionParse {
            output: "hello".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
