//! ID prefix constants and formatting helpers.
//!
//! Every row gets an ID of the form `<prefix>-<8 hex chars>`, e.g.
//! `exp-a3f8b2c1`. The store generates the hex part; these constants keep
//! the prefixes in one place.

pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_MEMBER: &str = "mbr";
pub const PREFIX_EXPERIMENT: &str = "exp";
pub const PREFIX_VARIANT: &str = "var";
pub const PREFIX_NOTE: &str = "nte";

/// Check whether `id` carries the given prefix (`"exp-..."`).
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.len() > prefix.len() + 1
        && id.as_bytes()[prefix.len()] == b'-'
        && id.starts_with(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_check() {
        assert!(has_prefix("exp-a3f8b2c1", PREFIX_EXPERIMENT));
        assert!(!has_prefix("var-a3f8b2c1", PREFIX_EXPERIMENT));
        assert!(!has_prefix("exp", PREFIX_EXPERIMENT));
        assert!(!has_prefix("exp-", PREFIX_EXPERIMENT));
    }
}
