use std::path::{Path, PathBuf};

/// Files corrected when no explicit list is given, in processing order.
pub const DEFAULT_TARGETS: [&str; 2] = ["complete_schema.sql", "seed.sql"];

/// A file to correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Name as given by the caller; used in status lines.
    pub name: String,
    /// Path actually read and written.
    pub path: PathBuf,
}

impl Target {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Build the ordered target list.
///
/// - Empty `files` falls back to [`DEFAULT_TARGETS`].
/// - `dir` is joined onto each entry; absolute entries stay as they are.
pub fn resolve_targets(dir: Option<&Path>, files: &[PathBuf]) -> Vec<Target> {
    let names: Vec<PathBuf> = if files.is_empty() {
        DEFAULT_TARGETS.iter().map(PathBuf::from).collect()
    } else {
        files.to_vec()
    };

    names
        .into_iter()
        .map(|file| {
            let path = match dir {
                Some(d) => d.join(&file),
                None => file.clone(),
            };
            Target::new(file.display().to_string(), path)
        })
        .collect()
}
