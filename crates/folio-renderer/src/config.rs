//! Site configuration.
//!
//! Built once at startup and handed to the renderer explicitly. Read from a KDL
//! file shaped like:
//!
//! ```kdl
//! site {
//!     title "My Blog"
//!     description "Notes and projects"
//!     author "default"
//! }
//! support {
//!     kofi "https://ko-fi.com/someone"
//!     wechat "/static/images/wechat-qr.png"
//! }
//! ```

use kdl::KdlDocument;
use smol_str::SmolStr;
use std::future::Future;
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;
use crate::theme::Theme;

pub const DEFAULT_AUTHOR_SLUG: &str = "default";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: SmolStr,
    pub description: Option<String>,
    /// Slug of the author shown on the about page.
    pub author_slug: SmolStr,
    pub support: SupportLinks,
    pub theme: Theme,
}

/// Where visitors can send support. Each configured channel gets a badge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupportLinks {
    pub kofi: Option<Url>,
    /// Path of the WeChat payment QR image.
    pub wechat: Option<String>,
}

impl SupportLinks {
    pub fn is_empty(&self) -> bool {
        self.kofi.is_none() && self.wechat.is_none()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: SmolStr::new_static("Folio"),
            description: None,
            author_slug: SmolStr::new_static(DEFAULT_AUTHOR_SLUG),
            support: SupportLinks::default(),
            theme: Theme::default(),
        }
    }
}

impl SiteConfig {
    /// Loads the configuration from the provided loader.
    pub async fn load(loader: &impl Loader) -> Result<Self, ConfigError> {
        loader.load().await
    }

    pub fn from_kdl(text: &str) -> Result<Self, ConfigError> {
        let doc: KdlDocument = text.parse()?;
        let mut config = SiteConfig::default();

        if let Some(site) = doc.get("site").and_then(|node| node.children()) {
            if let Some(title) = string_arg(site, "title")? {
                config.title = title.into();
            }
            config.description = string_arg(site, "description")?;
            if let Some(author) = string_arg(site, "author")? {
                if author.trim().is_empty() {
                    return Err(ConfigError::Invalid {
                        reason: "site.author must not be empty".into(),
                    });
                }
                config.author_slug = author.into();
            }
        }

        if let Some(support) = doc.get("support").and_then(|node| node.children()) {
            if let Some(kofi) = string_arg(support, "kofi")? {
                let url = Url::parse(&kofi).map_err(|e| ConfigError::Invalid {
                    reason: format!("support.kofi is not a valid URL ({e}): {kofi}"),
                })?;
                config.support.kofi = Some(url);
            }
            config.support.wechat = string_arg(support, "wechat")?;
        }

        Ok(config)
    }
}

/// First argument of the child node `name`, which must be a string if present.
fn string_arg(doc: &KdlDocument, name: &str) -> Result<Option<String>, ConfigError> {
    let Some(node) = doc.get(name) else {
        return Ok(None);
    };
    let Some(entry) = node.entries().first() else {
        return Ok(None);
    };
    entry
        .value()
        .as_string()
        .map(|value| Some(value.to_owned()))
        .ok_or_else(|| ConfigError::Invalid {
            reason: format!("`{name}` expects a string value"),
        })
}

/// The trait for loading configuration data.
pub trait Loader {
    /// Loads the configuration data.
    fn load(&self) -> impl Future<Output = Result<SiteConfig, ConfigError>> + Send;
}

/// A [`Loader`] that reads a configuration file from disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a new [`FileStore`] with the given path.
    ///
    /// The format is picked from the file extension. Only `.kdl` is supported.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Loader for FileStore {
    async fn load(&self) -> Result<SiteConfig, ConfigError> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("kdl") => {
                let text = tokio::fs::read_to_string(&self.path)
                    .await
                    .map_err(|source| ConfigError::Io {
                        path: self.path.clone(),
                        source,
                    })?;
                tracing::debug!(path = %self.path.display(), "loaded site config");
                SiteConfig::from_kdl(&text)
            }
            _ => Err(ConfigError::UnsupportedFormat {
                path: self.path.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = SiteConfig::from_kdl(
            r#"
site {
    title "Notes"
    description "Things I wrote down"
    author "jane"
}
support {
    kofi "https://ko-fi.com/jane"
    wechat "/static/images/wechat.png"
}
"#,
        )
        .unwrap();
        assert_eq!(config.title, "Notes");
        assert_eq!(config.description.as_deref(), Some("Things I wrote down"));
        assert_eq!(config.author_slug, "jane");
        assert_eq!(
            config.support.kofi.as_ref().map(Url::as_str),
            Some("https://ko-fi.com/jane")
        );
        assert_eq!(config.support.wechat.as_deref(), Some("/static/images/wechat.png"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_kdl("").unwrap();
        assert_eq!(config.title, "Folio");
        assert_eq!(config.author_slug, DEFAULT_AUTHOR_SLUG);
        assert!(config.support.is_empty());
    }

    #[test]
    fn test_invalid_kofi_url() {
        let err = SiteConfig::from_kdl("support {\n    kofi \"not a url\"\n}\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_non_string_value() {
        let err = SiteConfig::from_kdl("site {\n    title 42\n}\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_kdl() {
        let err = SiteConfig::from_kdl("site {").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let code = miette::Diagnostic::code(&err).map(|code| code.to_string());
        assert_eq!(code.as_deref(), Some("folio::config::parse"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn test_file_store_rejects_other_formats() {
        let err = SiteConfig::load(&FileStore::new("site.json")).await.unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_file_store_reads_kdl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.kdl");
        tokio::fs::write(&path, "site {\n    title \"From disk\"\n}\n")
            .await
            .unwrap();
        let config = SiteConfig::load(&FileStore::new(&path)).await.unwrap();
        assert_eq!(config.title, "From disk");
    }
}
