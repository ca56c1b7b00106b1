//! Sub-variant expansion.
//!
//! `arm` fans out over the declared ARM revisions and the mips family over the
//! declared float modes. Every other arch yields a single target.

use std::str::FromStr;

use crate::error::{Result, TargetError};
use crate::target::{ArchFamily, GoArm, GoMips, Target, Variant};

/// Validated sub-variant lists, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variants {
    pub goarm: Vec<GoArm>,
    pub gomips: Vec<GoMips>,
}

impl Variants {
    /// Validate raw declarations. The first unknown value is reported.
    pub fn parse(goarm: &[String], gomips: &[String]) -> Result<Self> {
        Ok(Self {
            goarm: parse_all(goarm)?,
            gomips: parse_all(gomips)?,
        })
    }

    /// Expand a catalog-valid pair into concrete targets.
    pub fn expand(&self, os: &str, arch: &str) -> Vec<Target> {
        match ArchFamily::of(arch) {
            ArchFamily::Arm => fan_out(os, arch, &self.goarm, |arm| Variant::Arm(*arm)),
            ArchFamily::Mips => fan_out(os, arch, &self.gomips, |mips| Variant::Mips(*mips)),
            ArchFamily::Plain => vec![Target::new(os, arch)],
        }
    }
}

fn parse_all<T>(values: &[String]) -> Result<Vec<T>>
where
    T: FromStr<Err = TargetError>,
{
    values.iter().map(|v| v.parse()).collect()
}

fn fan_out<T>(os: &str, arch: &str, values: &[T], variant: impl Fn(&T) -> Variant) -> Vec<Target> {
    if values.is_empty() {
        return vec![Target::new(os, arch)];
    }
    values
        .iter()
        .map(|v| Target::new(os, arch).with_variant(variant(v)))
        .collect()
}
