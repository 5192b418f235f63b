use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use walkdir::WalkDir;

fn has_py_extension(path: &Path) -> bool {
    path.extension() == Some(std::ffi::OsStr::new("py"))
}

/// Resolve the CLI path argument into the list of files to check.
///
/// A file argument is taken as-is when it has the `.py` extension; a
/// directory is walked recursively. The result is sorted by path so
/// directory mode always processes files in the same order.
pub fn discover_python_files(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to access path: {}", path.display()))?;

    if metadata.is_file() {
        if !has_py_extension(path) {
            bail!("Not a Python file: {}", path.display());
        }
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_py_extension(entry.path()))
        .map(|entry| entry.path().to_path_buf())
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_directory_is_sorted_and_filtered() {
        let directory = tempfile::TempDir::new().unwrap();
        let directory = directory.path();
        fs::write(directory.join("b.py"), "x=1\n").unwrap();
        fs::write(directory.join("a.py"), "x=1\n").unwrap();
        fs::write(directory.join("notes.txt"), "").unwrap();

        let files = discover_python_files(directory).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_single_file() {
        let directory = tempfile::TempDir::new().unwrap();
        let file = directory.path().join("only.py");
        fs::write(&file, "x=1\n").unwrap();
        assert_eq!(discover_python_files(&file).unwrap(), vec![file]);
    }

    #[test]
    fn test_rejects_other_extensions() {
        let directory = tempfile::TempDir::new().unwrap();
        let file = directory.path().join("only.txt");
        fs::write(&file, "").unwrap();
        assert!(discover_python_files(&file).is_err());
    }

    #[test]
    fn test_missing_path_is_an_error() {
        assert!(discover_python_files(Path::new("no/such/path")).is_err());
    }
}
