//! Wildcard exclusion rules.

use crate::spec::IgnoreRule;
use crate::target::Target;

impl IgnoreRule {
    /// Every field the rule sets must equal the target's field.
    pub fn matches(&self, target: &Target) -> bool {
        field_matches(self.goos.as_deref(), Some(target.os.as_str()))
            && field_matches(self.goarch.as_deref(), Some(target.arch.as_str()))
            && field_matches(self.goarm.as_deref(), target.arm())
            && field_matches(self.gomips.as_deref(), target.mips())
    }
}

fn field_matches(rule: Option<&str>, value: Option<&str>) -> bool {
    match rule {
        None | Some("") => true,
        Some(wanted) => value == Some(wanted),
    }
}

/// Whether any rule excludes `target`.
pub fn excluded(target: &Target, rules: &[IgnoreRule]) -> bool {
    rules.iter().any(|rule| rule.matches(target))
}
