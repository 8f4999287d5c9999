use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Read-only view of one directory on disk.
///
/// Request-supplied paths are resolved relative to the base directory and may
/// not climb out of it.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    base_dir: PathBuf,
}

impl StaticFiles {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self { base_dir: base.into() }
    }

    fn map_path(&self, rel_path: &str) -> Option<PathBuf> {
        let mut pb = self.base_dir.clone();
        for comp in Path::new(rel_path.trim_start_matches('/')).components() {
            match comp {
                Component::Normal(s) => pb.push(s),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(pb)
    }

    fn resolve(&self, rel_path: &str) -> io::Result<PathBuf> {
        self.map_path(rel_path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "invalid path"))
    }

    /// Whether `rel_path` names an existing file or directory.
    #[must_use]
    pub fn exists(&self, rel_path: &str) -> bool {
        self.map_path(rel_path).is_some_and(|p| p.exists())
    }

    /// Read a whole file.
    pub fn read(&self, rel_path: &str) -> io::Result<Vec<u8>> {
        let path = self.resolve(rel_path)?;
        if !path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} (No such file or directory)", path.display()),
            ));
        }
        fs::read(&path)
    }

    /// Read a whole file as text, replacing invalid UTF-8.
    pub fn read_to_string(&self, rel_path: &str) -> io::Result<String> {
        self.read(rel_path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Names of the entries directly inside the base directory, sorted.
    pub fn list(&self) -> io::Result<Vec<String>> {
        let mut names = fs::read_dir(&self.base_dir)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, StaticFiles) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hello.txt"), "Hello\n").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let sf = StaticFiles::new(dir.path());
        (dir, sf)
    }

    #[test]
    fn test_map_path_prevents_traversal() {
        let sf = StaticFiles::new("www");
        assert!(sf.map_path("../Cargo.toml").is_none());
        assert!(sf.map_path("a/../../Cargo.toml").is_none());
        assert_eq!(sf.map_path("/a/./b"), Some(PathBuf::from("www/a/b")));
    }

    #[test]
    fn test_read_plain_file() {
        let (_dir, sf) = fixture();
        assert_eq!(sf.read_to_string("hello.txt").unwrap(), "Hello\n");
    }

    #[test]
    fn test_read_missing_or_directory_fails() {
        let (_dir, sf) = fixture();
        assert_eq!(
            sf.read("nope.txt").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        assert!(sf.read("sub").is_err());
        assert!(sf.read("../hello.txt").is_err());
    }

    #[test]
    fn test_exists_includes_directories() {
        let (_dir, sf) = fixture();
        assert!(sf.exists("hello.txt"));
        assert!(sf.exists("sub"));
        assert!(!sf.exists("missing"));
        assert!(!sf.exists("../hello.txt"));
    }

    #[test]
    fn test_list_is_sorted() {
        let (_dir, sf) = fixture();
        assert_eq!(sf.list().unwrap(), vec!["hello.txt", "sub"]);
    }
}
