//! Cross-compilation target matrix for Go release builds.
//!
//! Given a [`BuildSpec`] (candidate `goos`, `goarch`, ARM revisions, MIPS
//! float modes and ignore rules) this crate decides exactly which targets get
//! compiled:
//! - **Catalog:** which `os/arch` pairs the toolchain supports, gated by version
//! - **Variants:** ARM revision and MIPS float mode fan-out
//! - **Ignore rules:** wildcard exclusions applied per expanded target
//!
//! [`list`] probes the configured toolchain for its version; [`matrix`] takes
//! the version output directly.

pub mod catalog;
pub mod error;
pub mod ignore;
pub mod list;
pub mod matrix;
pub mod spec;
pub mod target;
pub mod variant;
pub mod version;

pub use error::{ErrorKind, Result, TargetError};
pub use list::{list, CommandProbe, Filesystem, Lister, PathInspector, PathKind, VersionProbe};
pub use matrix::{build, matrix};
pub use spec::{BuildConfig, BuildSpec, IgnoreRule, CONFIG_FILE};
pub use target::{GoArm, GoMips, Target, Variant};
pub use version::ToolchainVersion;
