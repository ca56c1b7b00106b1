//! Static platform catalog.
//!
//! Lists every `(goos, goarch)` pair the toolchain can build for. Most pairs
//! are always available; newer ports carry the first toolchain release that
//! supports them.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::version::ToolchainVersion;

/// When a platform pair is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Always,
    /// Available from this toolchain release onwards.
    Since(ToolchainVersion),
}

impl Availability {
    pub fn allows(self, version: ToolchainVersion) -> bool {
        match self {
            Availability::Always => true,
            Availability::Since(min) => version >= min,
        }
    }
}

use Availability::{Always, Since};

const PLATFORMS: &[(&str, &str, Availability)] = &[
    ("aix", "ppc64", Always),
    ("android", "386", Always),
    ("android", "amd64", Always),
    ("android", "arm", Always),
    ("android", "arm64", Always),
    ("darwin", "amd64", Always),
    ("darwin", "arm64", Always),
    ("dragonfly", "amd64", Always),
    ("freebsd", "386", Always),
    ("freebsd", "amd64", Always),
    ("freebsd", "arm", Always),
    ("freebsd", "arm64", Always),
    ("illumos", "amd64", Always),
    ("linux", "386", Always),
    ("linux", "amd64", Always),
    ("linux", "arm", Always),
    ("linux", "arm64", Always),
    ("linux", "mips", Always),
    ("linux", "mipsle", Always),
    ("linux", "mips64", Always),
    ("linux", "mips64le", Always),
    ("linux", "ppc64", Always),
    ("linux", "ppc64le", Always),
    ("linux", "s390x", Always),
    ("linux", "riscv64", Always),
    ("netbsd", "386", Always),
    ("netbsd", "amd64", Always),
    ("netbsd", "arm", Always),
    ("openbsd", "386", Always),
    ("openbsd", "amd64", Always),
    ("openbsd", "arm", Always),
    ("openbsd", "arm64", Always),
    ("plan9", "386", Always),
    ("plan9", "amd64", Always),
    ("plan9", "arm", Always),
    ("solaris", "amd64", Always),
    ("windows", "386", Always),
    ("windows", "amd64", Always),
    ("windows", "arm", Always),
    ("windows", "arm64", Since(ToolchainVersion::new(1, 18))),
    ("js", "wasm", Always),
];

type Index = HashMap<&'static str, HashMap<&'static str, Availability>>;

static INDEX: Lazy<Index> = Lazy::new(|| {
    let mut index = Index::new();
    for &(os, arch, availability) in PLATFORMS {
        index.entry(os).or_default().insert(arch, availability);
    }
    index
});

static KNOWN_OS: Lazy<Vec<&'static str>> =
    Lazy::new(|| first_appearance(PLATFORMS.iter().map(|p| p.0)));

static KNOWN_ARCH: Lazy<Vec<&'static str>> =
    Lazy::new(|| first_appearance(PLATFORMS.iter().map(|p| p.1)));

fn first_appearance(names: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for name in names {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

/// Whether `os/arch` can be built with the given toolchain.
pub fn valid(os: &str, arch: &str, version: ToolchainVersion) -> bool {
    INDEX
        .get(os)
        .and_then(|arches| arches.get(arch))
        .is_some_and(|availability| availability.allows(version))
}

/// Whether `os` appears anywhere in the catalog.
pub fn is_known_os(os: &str) -> bool {
    KNOWN_OS.iter().any(|&known| known == os)
}

/// Whether `arch` appears anywhere in the catalog.
pub fn is_known_arch(arch: &str) -> bool {
    KNOWN_ARCH.iter().any(|&known| known == arch)
}

/// Operating systems in the catalog, in first-appearance order.
pub fn known_os() -> &'static [&'static str] {
    &KNOWN_OS
}

/// Architectures in the catalog, in first-appearance order.
pub fn known_arch() -> &'static [&'static str] {
    &KNOWN_ARCH
}

/// Every pair valid at `version`, in table order.
pub fn platforms(version: ToolchainVersion) -> Vec<(&'static str, &'static str)> {
    PLATFORMS
        .iter()
        .filter(|(_, _, availability)| availability.allows(version))
        .map(|&(os, arch, _)| (os, arch))
        .collect()
}

/// The newest toolchain release any gate in the catalog asks for.
pub fn newest_gate() -> ToolchainVersion {
    PLATFORMS
        .iter()
        .filter_map(|(_, _, availability)| match availability {
            Since(min) => Some(*min),
            Always => None,
        })
        .max()
        .unwrap_or(ToolchainVersion::new(1, 0))
}
