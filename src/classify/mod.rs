//! The classification core: decides whether a single path is a
//! license-related artifact worth preserving.
//!
//! Classification looks only at path components (filename, parent directory,
//! extension, ancestor directory names) and never at file content. The
//! decision is a pure function of a [`PathDescriptor`] and a [`RuleSet`],
//! evaluated as an ordered chain of named rules where the first match wins.

mod descriptor;
mod rules;
mod ruleset;

pub use descriptor::PathDescriptor;
pub use rules::{rule_names, Rule, RULES};
pub use ruleset::RuleSet;

use log::trace;

/// The outcome of classifying a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The file is license-related and should be copied to the output tree.
    Keep,
    /// The file is not license-related and is ignored.
    Drop,
}

/// Classifies a path descriptor against the rule chain.
///
/// Rules are evaluated in a fixed order from most authoritative to most
/// speculative; the first rule that produces a decision short-circuits the
/// rest. A path that matches no rule is dropped.
///
/// This function performs no I/O and has no hidden state: the same
/// descriptor and rule set always yield the same decision.
///
/// # Examples
///
/// ```
/// use licsweep::classify::{classify, Decision, PathDescriptor, RuleSet};
/// use std::path::Path;
///
/// let rules = RuleSet::default();
///
/// let keep = PathDescriptor::new(Path::new("LICENSE"));
/// assert_eq!(classify(&keep, &rules), Decision::Keep);
///
/// // A file literally named LICENSE under a test tree is still dropped.
/// let drop = PathDescriptor::new(Path::new("test/LICENSE"));
/// assert_eq!(classify(&drop, &rules), Decision::Drop);
/// ```
pub fn classify(descriptor: &PathDescriptor, rules: &RuleSet) -> Decision {
    for rule in RULES {
        if let Some(decision) = (rule.check)(descriptor, rules) {
            trace!(
                "rule '{}' decided {:?} for '{}'",
                rule.name,
                decision,
                descriptor.filename()
            );
            return decision;
        }
    }
    trace!("no rule matched '{}', dropping", descriptor.filename());
    Decision::Drop
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn decide(path: &str) -> Decision {
        let rules = RuleSet::default();
        classify(&PathDescriptor::new(Path::new(path)), &rules)
    }

    #[test]
    fn test_classify_is_deterministic() {
        let rules = RuleSet::default();
        let descriptor = PathDescriptor::new(Path::new("third_party/zlib/LICENSE"));
        let first = classify(&descriptor, &rules);
        let second = classify(&descriptor, &rules);
        assert_eq!(first, second);
        assert_eq!(first, Decision::Keep);
    }

    #[test]
    fn test_whitelist_dominates_extension_blacklist() {
        // 'licenserule.json' has a blacklisted .json extension, but the
        // absolute whitelist is checked first.
        assert_eq!(decide("qtbase/licenserule.json"), Decision::Keep);
        assert_eq!(decide("other_rules.json"), Decision::Drop);
    }

    #[test]
    fn test_ignored_ancestor_dominates_everything() {
        assert_eq!(decide("foo/test/LICENSE"), Decision::Drop);
        assert_eq!(decide("docs/COPYING"), Decision::Drop);
        assert_eq!(decide("a/b/examples/c/NOTICE"), Decision::Drop);
        // Bare whitelist names are also subject to the ancestor rule.
        assert_eq!(decide("tools/patents"), Decision::Drop);
    }

    #[test]
    fn test_extension_dominates_fuzzy_match() {
        assert_eq!(decide("license.py"), Decision::Drop);
        assert_eq!(decide("LICENSE.txt"), Decision::Keep);
    }

    #[test]
    fn test_default_is_drop() {
        assert_eq!(decide("src/renderer.cpp"), Decision::Drop);
        assert_eq!(decide("README"), Decision::Drop);
        assert_eq!(decide("some_random_file"), Decision::Drop);
    }

    #[test]
    fn test_empty_components_fall_through() {
        // No extension, no parent: rules simply fail to match.
        assert_eq!(decide("x"), Decision::Drop);
        assert_eq!(decide("notice"), Decision::Keep); // whitelist, no extension
    }
}
