// src/classify/descriptor.rs

use std::path::Path;

/// The path components a classification decision is allowed to look at.
///
/// Built once per candidate file from its path relative to the scan root.
/// All components are lowercased so rule checks are case-insensitive.
/// The descriptor is immutable and carries no handle to the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathDescriptor {
    filename: String,
    parent_dir: String,
    suffix: String,
    ancestor_dirs: Vec<String>,
}

impl PathDescriptor {
    /// Decomposes a relative path into its classification components.
    ///
    /// The `suffix` follows `Path::extension`-adjacent but stricter rules:
    /// it is the substring from the last `.` in the filename (dot included),
    /// unless that dot is the first or last character, in which case the
    /// suffix is empty. So `LICENSE.txt` has suffix `.txt`, while
    /// `.gitignore` and `trailing.` have no suffix.
    pub fn new(relative_path: &Path) -> Self {
        let filename = relative_path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let parent = relative_path.parent();
        let parent_dir = parent
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let ancestor_dirs = parent
            .map(|p| {
                p.components()
                    .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
                    .collect()
            })
            .unwrap_or_default();

        let suffix = match filename.rfind('.') {
            Some(idx) if idx > 0 && idx < filename.len() - 1 => filename[idx..].to_string(),
            _ => String::new(),
        };

        Self {
            filename,
            parent_dir,
            suffix,
            ancestor_dirs,
        }
    }

    /// The final path segment, lowercased.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The name of the immediate containing directory, lowercased.
    /// Empty for files directly under the scan root.
    pub fn parent_dir(&self) -> &str {
        &self.parent_dir
    }

    /// The filename suffix including the leading dot, lowercased.
    /// Empty when the filename has no usable suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Every directory-name segment between the scan root and the file,
    /// lowercased, in root-to-file order.
    pub fn ancestor_dirs(&self) -> &[String] {
        &self.ancestor_dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_descriptor_components() {
        let d = PathDescriptor::new(Path::new("Third_Party/Zlib/LICENSE.TXT"));
        assert_eq!(d.filename(), "license.txt");
        assert_eq!(d.parent_dir(), "zlib");
        assert_eq!(d.suffix(), ".txt");
        assert_eq!(d.ancestor_dirs(), ["third_party", "zlib"]);
    }

    #[test]
    fn test_descriptor_root_file() {
        let d = PathDescriptor::new(Path::new("COPYING"));
        assert_eq!(d.filename(), "copying");
        assert_eq!(d.parent_dir(), "");
        assert_eq!(d.suffix(), "");
        assert!(d.ancestor_dirs().is_empty());
    }

    #[test]
    fn test_suffix_of_hidden_file_is_empty() {
        // A leading dot does not start a suffix.
        let d = PathDescriptor::new(Path::new(".gitignore"));
        assert_eq!(d.suffix(), "");
        assert_eq!(d.filename(), ".gitignore");
    }

    #[test]
    fn test_suffix_takes_last_dot_only() {
        let d = PathDescriptor::new(Path::new("archive.tar.gz"));
        assert_eq!(d.suffix(), ".gz");
    }

    #[test]
    fn test_suffix_trailing_dot_is_empty() {
        let d = PathDescriptor::new(Path::new("odd."));
        assert_eq!(d.suffix(), "");
    }

    #[test]
    fn test_descriptor_is_case_insensitive() {
        let lower = PathDescriptor::new(Path::new("test/license"));
        let upper = PathDescriptor::new(Path::new("TEST/LICENSE"));
        assert_eq!(lower, upper);
    }
}
