// src/classify/rules.rs

//! The ordered rule chain behind [`classify`](super::classify).
//!
//! Each rule is a small pure function over a [`PathDescriptor`] and the
//! [`RuleSet`] configuration, returning `Some(decision)` when it fires and
//! `None` to pass the path on to the next rule. The chain order is load
//! bearing: rules are layered from most authoritative (ancestor-directory
//! rejection) to most speculative (fuzzy substring matches), and several
//! later rules are only reachable because an earlier rule did not fire.

use super::{Decision, PathDescriptor, RuleSet};

/// Exact canonical license/copying/notice filenames (case-insensitive),
/// with and without common extensions, plus project-specific variants
/// encountered in Qt/Chromium trees.
const CANONICAL_NAMES: &[&str] = &[
    "license",
    "license.txt",
    "license.md",
    "license.rst",
    "copying",
    "copying.txt",
    "copying.md",
    "copyright",
    "copyright.txt",
    "licensing",
    "licensing.txt",
    "notice.txt",
    "patents.txt",
    "license.webview",
    "license.fdlibm",
    "license.v8",
    "license.chromium",
    "license.chromium_os",
    "license-mit",
    "license-apache",
    "license-zlib",
    "license-bsd",
];

/// Substrings that mark an "exception" filename as test/spec noise rather
/// than a legal exception grant. Tuned empirically against a real corpus;
/// kept literal on purpose.
const EXCEPTION_NEGATIVE_WORDS: &[&str] = &["test", "spec", "mode", "common", "flaky"];

/// Source/markup extension tokens that mark an "exception" filename as
/// code. Matched with the dot attached; matching `h` or `py` bare would
/// reject nearly every filename.
const EXCEPTION_NEGATIVE_EXTENSIONS: &[&str] = &["cpp", "java", "py", "dom", "mojom", "h"];

/// Substrings naming known license-exception families.
const EXCEPTION_POSITIVE_KEYWORDS: &[&str] = &["gpl", "llvm", "gcc", "classpath"];

/// Filename prefixes that identify dedicated exception files.
const EXCEPTION_NAME_PREFIXES: &[&str] = &["class-path-exception", "license-exception"];

/// Filename prefix of module-license build markers (zero-content
/// placeholders like `MODULE_LICENSE_APACHE2`, not real license text).
const MODULE_LICENSE_PREFIX: &str = "module_license";

/// Parent directory that holds one license text per file.
const LICENSES_DIR: &str = "licenses";

/// Metadata file found inside `licenses/` directories; not a license.
const OWNERS_FILE: &str = "owners";

/// A named classification rule.
pub struct Rule {
    /// Short identifier used in trace logging.
    pub name: &'static str,
    /// Returns `Some` to decide, `None` to defer to the next rule.
    pub check: fn(&PathDescriptor, &RuleSet) -> Option<Decision>,
}

/// The rule chain, in evaluation order. First match wins.
pub const RULES: &[Rule] = &[
    Rule {
        name: "ignored-ancestor",
        check: ignored_ancestor,
    },
    Rule {
        name: "module-license-marker",
        check: module_license_marker,
    },
    Rule {
        name: "always-keep",
        check: always_keep,
    },
    Rule {
        name: "blacklisted-extension",
        check: blacklisted_extension,
    },
    Rule {
        name: "std-header-exception",
        check: std_header_exception,
    },
    Rule {
        name: "canonical-name",
        check: canonical_name,
    },
    Rule {
        name: "licenses-directory",
        check: licenses_directory,
    },
    Rule {
        name: "fuzzy-name",
        check: fuzzy_name,
    },
    Rule {
        name: "exception-grant",
        check: exception_grant,
    },
];

/// The rule names in evaluation order. Useful for diagnostics.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|r| r.name).collect()
}

/// Rule 1: any ignored directory name among the ancestors disqualifies the
/// file, before any filename rule gets a say.
fn ignored_ancestor(d: &PathDescriptor, rules: &RuleSet) -> Option<Decision> {
    d.ancestor_dirs()
        .iter()
        .any(|dir| rules.is_ignored_dir(dir))
        .then_some(Decision::Drop)
}

/// Rule 2: `MODULE_LICENSE_*` build markers are empty placeholders.
fn module_license_marker(d: &PathDescriptor, _rules: &RuleSet) -> Option<Decision> {
    d.filename()
        .starts_with(MODULE_LICENSE_PREFIX)
        .then_some(Decision::Drop)
}

/// Rule 3: the absolute whitelist, overriding the extension blacklist.
fn always_keep(d: &PathDescriptor, rules: &RuleSet) -> Option<Decision> {
    rules
        .always_keep
        .contains(d.filename())
        .then_some(Decision::Keep)
}

/// Rule 4: extension blacklist, including the ends-with fallback for
/// compound or unusual suffix forms.
fn blacklisted_extension(d: &PathDescriptor, rules: &RuleSet) -> Option<Decision> {
    rules
        .has_ignored_extension(d.filename(), d.suffix())
        .then_some(Decision::Drop)
}

/// Rule 5: a file named exactly `exception` under a standard-library
/// header directory is the C++ `<exception>` header, not a legal grant.
/// The parent check is substring containment (`include`, `std`), so names
/// like `includes` or `libstdc++` match too.
fn std_header_exception(d: &PathDescriptor, _rules: &RuleSet) -> Option<Decision> {
    (d.filename() == "exception"
        && (d.parent_dir().contains("include") || d.parent_dir().contains("std")))
    .then_some(Decision::Drop)
}

/// Rule 6: exact canonical license/copying/notice filenames.
fn canonical_name(d: &PathDescriptor, _rules: &RuleSet) -> Option<Decision> {
    CANONICAL_NAMES
        .contains(&d.filename())
        .then_some(Decision::Keep)
}

/// Rule 7: everything directly inside a `licenses/` directory is a license
/// text, except the `OWNERS` metadata file.
fn licenses_directory(d: &PathDescriptor, _rules: &RuleSet) -> Option<Decision> {
    if d.parent_dir() != LICENSES_DIR {
        return None;
    }
    if d.filename() == OWNERS_FILE {
        Some(Decision::Drop)
    } else {
        Some(Decision::Keep)
    }
}

/// Rule 8: fuzzy prefix/substring matches on `license`/`copying`. Weaker
/// evidence than the exact rules, so the extension blacklist is re-checked
/// before keeping.
fn fuzzy_name(d: &PathDescriptor, rules: &RuleSet) -> Option<Decision> {
    let vetted = |d: &PathDescriptor| {
        if rules.ignored_exts.contains(d.suffix()) {
            Decision::Drop
        } else {
            Decision::Keep
        }
    };

    if d.filename().starts_with("license") || d.filename().starts_with("copying") {
        return Some(vetted(d));
    }
    if d.filename().contains("license") {
        return Some(vetted(d));
    }
    None
}

/// Rule 9: the strict sub-policy for filenames containing `exception`.
/// Negative keywords reject first; then the name must either contain a
/// known exception-family keyword or carry a dedicated exception prefix.
fn exception_grant(d: &PathDescriptor, _rules: &RuleSet) -> Option<Decision> {
    let filename = d.filename();
    if !filename.contains("exception") {
        return None;
    }

    let negative = EXCEPTION_NEGATIVE_WORDS
        .iter()
        .any(|kw| filename.contains(kw))
        || EXCEPTION_NEGATIVE_EXTENSIONS
            .iter()
            .any(|ext| filename.contains(&format!(".{ext}")));
    if negative {
        return Some(Decision::Drop);
    }

    let positive = EXCEPTION_POSITIVE_KEYWORDS
        .iter()
        .any(|kw| filename.contains(kw))
        || EXCEPTION_NAME_PREFIXES
            .iter()
            .any(|prefix| filename.starts_with(prefix));

    if positive {
        Some(Decision::Keep)
    } else {
        Some(Decision::Drop)
    }
}
