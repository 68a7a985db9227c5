use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ContentError {
    #[error("no author with slug `{slug}` in the content collection")]
    #[diagnostic(
        code(folio::content::author_not_found),
        help("add a matching markdown file under `authors/` or change `site.author` in the config")
    )]
    AuthorNotFound { slug: String },

    #[error("supporter #{index} has an unparseable date: `{date}`")]
    #[diagnostic(
        code(folio::content::invalid_date),
        help("use `YYYY-MM-DD` or an RFC 3339 timestamp")
    )]
    InvalidDate { date: String, index: usize },

    #[error("invalid author record in {}: {reason}", path.display())]
    #[diagnostic(code(folio::content::invalid_author))]
    InvalidAuthor { path: PathBuf, reason: String },

    #[error("failed to read {}", path.display())]
    #[diagnostic(code(folio::content::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse supporters file {}", path.display())]
    #[diagnostic(code(folio::content::json))]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to parse site config")]
    #[diagnostic(code(folio::config::parse))]
    Parse(#[from] kdl::KdlError),

    #[error("invalid site configuration: {reason}")]
    #[diagnostic(code(folio::config::invalid))]
    Invalid { reason: String },

    #[error("unsupported config format: {}", path.display())]
    #[diagnostic(code(folio::config::format), help("site configuration is read from `.kdl` files"))]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to read config file {}", path.display())]
    #[diagnostic(code(folio::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
