// src/classify/ruleset.rs

use std::collections::HashSet;

/// Filenames that are license-related regardless of every other rule.
/// Highest-precedence filename rule; beats the extension blacklist.
const ALWAYS_KEEP_FILENAMES: &[&str] = &[
    "licenserule.json",     // Qt attribution rule definitions (metadata worth keeping)
    "license_template.txt", // license text template
    "patents",              // patent grant
    "notice",               // notice text
    "third_party_licenses", // aggregated third-party licenses
    "credits",              // acknowledgements
    "authors",              // author list
    "copyright",            // copyright statement
];

/// Directory-name tokens that disqualify any file beneath them.
/// A license file inside a test or docs subtree is not a distribution
/// artifact and must not be collected.
const IGNORED_DIRECTORY_NAMES: &[&str] = &[
    // Test suites and fixtures
    "test",
    "tests",
    "testing",
    "unittest",
    "unittests",
    "testdata",
    "fixtures",
    "snapshots",
    "test_dir",
    "test_dir_invalid_metadata",
    "mock",
    "mocks",
    "fuzz",
    "fuzzers",
    "bench",
    "benchmark",
    "benchmarks",
    // Build tooling and scripts, not shipped with the software
    "build",
    "buildtools",
    "cmake",
    "mkspecs",
    "tools",
    "devtools",
    "gn",
    "gyp",
    "generator",
    "templates",
    "scripts",
    "infra",
    // Large bundled test/telemetry tooling
    "catapult",
    "telemetry",
    // Documentation
    "doc",
    "docs",
    "documentation",
    "man",
    // Examples and vendored dependencies
    "examples",
    "example",
    "demo",
    "demos",
    "node_modules",
    // Redundant language-binding source trees (avoids collecting the same
    // component once per binding, e.g. material_color_utilities)
    "java",
    "dart",
    "swift",
    "typescript",
    "kotlin",
];

/// Suffixes of files that are never license text: source code, binaries,
/// build and config files, archives. Stored with the leading dot.
const IGNORED_EXTENSIONS: &[&str] = &[
    // Binary / media
    ".png", ".jpg", ".gif", ".ico", ".svg", ".exe", ".dll", ".so", ".a", ".o", ".obj", ".pyc",
    ".class", ".bin", ".dex",
    // Source code
    ".cpp", ".c", ".h", ".hpp", ".cc", ".cxx", ".m", ".mm", ".java", ".cs", ".py", ".js", ".ts",
    ".sh", ".bat", ".pl", ".go", ".rs", ".php", ".kt", ".swift",
    // Web frontend
    ".html", ".css", ".scss", ".less",
    // Build and configuration
    ".cmake", ".pro", ".pri", ".qbs", ".gn", ".gni", ".ninja", ".mk", ".cfg", ".conf", ".yapf",
    ".pyl", ".gradle", ".build", ".vanilla", ".prf", ".mojom", ".idl", ".inc", ".ipp", ".exp",
    ".abilist", ".in", ".qrc", ".ini", ".qdoc", ".exclude", ".json", ".yaml", ".yml", ".toml",
    ".xml", ".data",
    // Version control and patches
    ".patch", ".diff", ".gitignore", ".gitattributes", ".sha1", ".dummy", ".cipd",
    // Archives
    ".zip", ".tar", ".gz", ".7z", ".rar",
];

/// The three read-only configuration sets the classifier consults.
///
/// Built once at process start and passed explicitly into
/// [`classify`](super::classify); the classifier has no global lookup, so
/// tests can inject variant rule sets.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Exact filenames kept regardless of other rules.
    pub always_keep: HashSet<String>,
    /// Directory names whose subtrees are excluded entirely.
    pub ignored_dirs: HashSet<String>,
    /// Filename suffixes (leading dot) treated as non-license artifacts.
    pub ignored_exts: HashSet<String>,
}

impl RuleSet {
    /// True if `dir_name` (already lowercased) names an ignored directory.
    pub fn is_ignored_dir(&self, dir_name: &str) -> bool {
        self.ignored_dirs.contains(dir_name)
    }

    /// True if the suffix itself is blacklisted, or if the filename ends
    /// with any blacklisted extension string. The ends-with fallback
    /// catches compound names whose strict suffix is empty or unusual.
    pub fn has_ignored_extension(&self, filename: &str, suffix: &str) -> bool {
        self.ignored_exts.contains(suffix)
            || self.ignored_exts.iter().any(|ext| filename.ends_with(ext))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        let to_set = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();
        Self {
            always_keep: to_set(ALWAYS_KEEP_FILENAMES),
            ignored_dirs: to_set(IGNORED_DIRECTORY_NAMES),
            ignored_exts: to_set(IGNORED_EXTENSIONS),
        }
    }
}
