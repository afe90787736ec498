//! Checks for file names that come from reports and the review service.

use std::path::{Component, Path, PathBuf};

/// `path` without `.` components, if it names something below its base.
///
/// Returns `None` for absolute paths, `..` components and empty paths.
pub fn clean_relative(path: &Path) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (!clean.as_os_str().is_empty()).then_some(clean)
}
