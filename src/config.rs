use std::{
    path::PathBuf,
    iter::FromIterator,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Ordered include search path as emitted by the compiler
///
/// Order reflects search precedence. Entries are kept verbatim: no
/// deduplication, sorting or normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludePathList {
    paths: Vec<String>,
}

impl IncludePathList {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|path| path.as_str())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.paths
    }

    pub fn to_paths(&self) -> Vec<PathBuf> {
        self.paths.iter().map(PathBuf::from).collect()
    }
}

impl FromIterator<String> for IncludePathList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for IncludePathList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}

impl IntoIterator for IncludePathList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl Display for IncludePathList {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for path in &self.paths {
            writeln!(f, "{}", path)?;
        }
        Ok(())
    }
}

/// Search path state read by file-path resolution
///
/// Owned by the caller and handed to [`extract_include_paths`](crate::extract_include_paths),
/// which only writes it after a complete successful parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPathConfig {
    include_paths: Option<IncludePathList>,
}

impl SearchPathConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently configured paths, `None` until the first successful extraction
    pub fn include_paths(&self) -> Option<&IncludePathList> {
        self.include_paths.as_ref()
    }

    pub fn set_include_paths(&mut self, paths: IncludePathList) {
        self.include_paths = Some(paths);
    }
}
