use miette::IntoDiagnostic;
use std::path::Path;
use tokio::fs::{self, File};

/// Creates `dest`, creating any missing parent directories first.
pub async fn create_file(dest: &Path) -> miette::Result<File> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.into_diagnostic()?;
        }
    }
    File::create(dest).await.into_diagnostic()
}

/// Output path for a page route: `about` becomes `about/index.html`.
pub fn page_path(destination: &Path, route: &str) -> std::path::PathBuf {
    let route = route.trim_matches('/');
    if route.is_empty() {
        destination.join("index.html")
    } else {
        destination.join(route).join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_page_path() {
        let dest = PathBuf::from("/tmp/site");
        assert_eq!(page_path(&dest, "about"), dest.join("about/index.html"));
        assert_eq!(page_path(&dest, "/about/"), dest.join("about/index.html"));
        assert_eq!(page_path(&dest, ""), dest.join("index.html"));
    }

    #[tokio::test]
    async fn test_create_file_makes_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c.html");
        create_file(&path).await.unwrap();
        assert!(path.exists());
    }
}
