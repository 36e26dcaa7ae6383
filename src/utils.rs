use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Checks if a directory entry is hidden (starts with '.').
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// True for `.jpg` and `.jpeg` paths, ignoring case.
pub fn is_jpeg<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// Recursively lists the JPEG files under `dir`, sorted by path.
///
/// Hidden files and directories are skipped unless `include_hidden` is set.
/// The root itself is always walked. I/O errors met during traversal are
/// returned rather than skipped.
pub fn list_jpeg_files(dir: &Path, include_hidden: bool) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => (entry.file_type().is_file() && is_jpeg(entry.path()))
                .then(|| Ok(entry.into_path())),
            Err(e) => Some(Err(e)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    files.sort();
    Ok(files)
}

/// Expands `paths` into JPEG files: directories are walked, files are kept
/// as given so that unsupported ones surface as per-file errors later.
pub fn expand_paths(paths: &[PathBuf], include_hidden: bool) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(list_jpeg_files(path, include_hidden)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_jpeg_ignores_case() {
        assert!(is_jpeg("photo.jpg"));
        assert!(is_jpeg("photo.JPEG"));
        assert!(is_jpeg(Path::new("dir/IMG_7103.Jpg")));
        assert!(!is_jpeg("photo.png"));
        assert!(!is_jpeg("jpg"));
    }

    #[test]
    fn test_lists_only_visible_jpegs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("trip")).unwrap();
        fs::create_dir(root.join(".cache")).unwrap();
        for name in ["b.jpg", "a.JPEG", "notes.txt", "trip/c.jpg", ".cache/d.jpg", ".e.jpg"] {
            fs::write(root.join(name), b"").unwrap();
        }

        let files = list_jpeg_files(root, false).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.JPEG"),
                PathBuf::from("b.jpg"),
                PathBuf::from("trip/c.jpg"),
            ]
        );

        let all = list_jpeg_files(root, true).unwrap();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_expand_keeps_plain_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x.jpg"), b"").unwrap();
        let loose = PathBuf::from("elsewhere.png");

        let files = expand_paths(&[dir.path().to_path_buf(), loose.clone()], false).unwrap();
        assert_eq!(files, vec![dir.path().join("x.jpg"), loose]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_jpeg_files(&dir.path().join("nope"), false).is_err());
    }
}
