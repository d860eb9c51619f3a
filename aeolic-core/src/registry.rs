//! Template registry — an immutable name → source mapping.
//!
//! # Sources
//!
//! ```text
//! templates/
//!   alert.tmpl        → "alert"                (NamingPolicy::StripSuffix)
//!   deploy.tmpl       → "templates/deploy.tmpl" (NamingPolicy::FullPath)
//!   README.md         (ignored, no suffix match)
//! ```
//!
//! A registry is either loaded from a directory with [`load_dir`] or built
//! in memory from `(name, source)` pairs (embedded templates). It is never
//! mutated after construction.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{load_io_err, LoadError};
use crate::types::{NamingPolicy, TemplateName};

/// File suffix recognised by [`load_dir`] when the caller has no preference.
pub const DEFAULT_SUFFIX: &str = ".tmpl";

// ---------------------------------------------------------------------------
// 1. Registry
// ---------------------------------------------------------------------------

/// Read-only mapping from template name to raw template source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: BTreeMap<TemplateName, String>,
}

impl TemplateRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw source of the template registered as `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &TemplateName> {
        self.templates.keys()
    }

    /// `(name, source)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&TemplateName, &str)> {
        self.templates.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<N, S> FromIterator<(N, S)> for TemplateRegistry
where
    N: Into<TemplateName>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(name, source)| (name.into(), source.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Directory loader
// ---------------------------------------------------------------------------

/// Load every file in `dir` whose name ends with `suffix`.
///
/// Only the top level of `dir` is scanned. Entries are visited in sorted
/// order. The first unreadable entry aborts the whole load; no partial
/// registry is ever returned.
///
/// Returns `LoadError::NotFound` if `dir` does not exist; any other failure
/// to stat it (permissions, a file in the path) is `LoadError::Io`.
pub fn load_dir(
    dir: &Path,
    suffix: &str,
    naming: NamingPolicy,
) -> Result<TemplateRegistry, LoadError> {
    match std::fs::metadata(dir) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound { path: dir.to_path_buf() });
        }
        Err(e) => return Err(load_io_err(dir, e)),
    }

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| load_io_err(dir, e))? {
        entries.push(entry.map_err(|e| load_io_err(dir, e))?);
    }
    entries.sort_by_key(|e| e.file_name());

    let mut templates = BTreeMap::new();
    for entry in entries {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let Some(stem) = file_name.strip_suffix(suffix) else {
            continue;
        };
        let path = entry.path();
        let meta = std::fs::metadata(&path).map_err(|e| load_io_err(&path, e))?;
        if !meta.is_file() {
            continue;
        }

        let name = match naming {
            NamingPolicy::StripSuffix => stem.to_owned(),
            NamingPolicy::FullPath => path.to_string_lossy().into_owned(),
        };
        if name.is_empty() {
            tracing::debug!(path = %path.display(), "skipping template with empty name");
            continue;
        }

        let source = std::fs::read_to_string(&path).map_err(|e| load_io_err(&path, e))?;
        tracing::debug!(template = %name, path = %path.display(), "loaded template");
        templates.insert(TemplateName::from(name), source);
    }

    Ok(TemplateRegistry { templates })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) {
        std::fs::write(dir.path().join(name), body).expect("write template");
    }

    #[test]
    fn from_iter_builds_lookup() {
        let reg: TemplateRegistry = [("basic", "{{ hello }}")].into_iter().collect();
        assert_eq!(reg.get("basic"), Some("{{ hello }}"));
        assert!(reg.get("missing").is_none());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn load_strips_suffix_and_ignores_other_files() {
        let dir = TempDir::new().expect("tempdir");
        write(&dir, "alert.tmpl", "alert body");
        write(&dir, "notes.md", "not a template");

        let reg = load_dir(dir.path(), DEFAULT_SUFFIX, NamingPolicy::StripSuffix).expect("load");
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("alert"), Some("alert body"));
    }

    #[test]
    fn load_full_path_names() {
        let dir = TempDir::new().expect("tempdir");
        write(&dir, "alert.tmpl", "alert body");

        let reg = load_dir(dir.path(), DEFAULT_SUFFIX, NamingPolicy::FullPath).expect("load");
        let expected = dir.path().join("alert.tmpl").to_string_lossy().into_owned();
        assert_eq!(reg.get(&expected), Some("alert body"));
        assert!(reg.get("alert").is_none());
    }

    #[test]
    fn load_skips_directories_with_matching_suffix() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::create_dir(dir.path().join("nested.tmpl")).expect("mkdir");
        let reg = load_dir(dir.path(), DEFAULT_SUFFIX, NamingPolicy::StripSuffix).expect("load");
        assert!(reg.is_empty());
    }

    #[test]
    fn load_missing_dir_returns_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let err = load_dir(&dir.path().join("nope"), DEFAULT_SUFFIX, NamingPolicy::StripSuffix)
            .unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn load_through_a_file_is_io_not_not_found() {
        let dir = TempDir::new().expect("tempdir");
        write(&dir, "plain.txt", "x");
        let below_file = dir.path().join("plain.txt").join("sub");
        let err = load_dir(&below_file, DEFAULT_SUFFIX, NamingPolicy::StripSuffix).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got: {err:?}");
    }

    #[test]
    fn load_aborts_on_unreadable_entry() {
        let dir = TempDir::new().expect("tempdir");
        write(&dir, "good.tmpl", "ok");
        std::fs::write(dir.path().join("bad.tmpl"), [0xff, 0xfe, 0x00]).expect("write");

        let err = load_dir(dir.path(), DEFAULT_SUFFIX, NamingPolicy::StripSuffix).unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with("bad.tmpl")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
