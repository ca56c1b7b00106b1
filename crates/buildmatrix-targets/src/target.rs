//! Concrete build targets and their sub-variants.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TargetError};

/// ARM revision (`GOARM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoArm {
    V6,
    V7,
}

impl GoArm {
    pub fn as_str(self) -> &'static str {
        match self {
            GoArm::V6 => "6",
            GoArm::V7 => "7",
        }
    }
}

impl FromStr for GoArm {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "6" => Ok(GoArm::V6),
            "7" => Ok(GoArm::V7),
            _ => Err(TargetError::InvalidGoarm(s.to_string())),
        }
    }
}

/// MIPS floating point ABI (`GOMIPS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoMips {
    Hardfloat,
    Softfloat,
}

impl GoMips {
    pub fn as_str(self) -> &'static str {
        match self {
            GoMips::Hardfloat => "hardfloat",
            GoMips::Softfloat => "softfloat",
        }
    }
}

impl FromStr for GoMips {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hardfloat" => Ok(GoMips::Hardfloat),
            "softfloat" => Ok(GoMips::Softfloat),
            _ => Err(TargetError::InvalidGomips(s.to_string())),
        }
    }
}

/// Which sub-variant list an architecture draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchFamily {
    Arm,
    Mips,
    Plain,
}

impl ArchFamily {
    pub fn of(arch: &str) -> Self {
        match arch {
            "arm" => ArchFamily::Arm,
            "mips" | "mipsle" | "mips64" | "mips64le" => ArchFamily::Mips,
            _ => ArchFamily::Plain,
        }
    }
}

/// Sub-variant carried by a target. A target has at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Arm(GoArm),
    Mips(GoMips),
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Arm(arm) => arm.as_str(),
            Variant::Mips(mips) => mips.as_str(),
        }
    }
}

/// A single `(goos, goarch[, variant])` build.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    pub os: String,
    pub arch: String,
    pub variant: Option<Variant>,
}

impl Target {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
            variant: None,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// ARM revision, if this is an arm target with one.
    pub fn arm(&self) -> Option<&'static str> {
        match self.variant {
            Some(Variant::Arm(arm)) => Some(arm.as_str()),
            _ => None,
        }
    }

    /// MIPS float mode, if this is a mips-family target with one.
    pub fn mips(&self) -> Option<&'static str> {
        match self.variant {
            Some(Variant::Mips(mips)) => Some(mips.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.os, self.arch)?;
        if let Some(variant) = self.variant {
            write!(f, "_{}", variant.as_str())?;
        }
        Ok(())
    }
}

/// Parse a canonical identifier such as `linux_arm_7` or `darwin_arm64`.
///
/// Only the shape and the variant are checked here; catalog membership is not.
impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('_').collect();
        let (os, arch, variant) = match parts.as_slice() {
            [os, arch] => (*os, *arch, None),
            [os, arch, variant] => (*os, *arch, Some(*variant)),
            _ => return Err(TargetError::InvalidTarget(s.to_string())),
        };
        if os.is_empty() || arch.is_empty() {
            return Err(TargetError::InvalidTarget(s.to_string()));
        }
        let target = Target::new(os, arch);
        let Some(variant) = variant else {
            return Ok(target);
        };
        match ArchFamily::of(arch) {
            ArchFamily::Arm => Ok(target.with_variant(Variant::Arm(variant.parse()?))),
            ArchFamily::Mips => Ok(target.with_variant(Variant::Mips(variant.parse()?))),
            ArchFamily::Plain => Err(TargetError::InvalidTarget(s.to_string())),
        }
    }
}
