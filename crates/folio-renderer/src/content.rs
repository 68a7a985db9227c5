//! Content provider: the source of author and supporter records.
//!
//! [`DirectoryProvider`] reads a content directory laid out as:
//!
//! ```text
//! content/
//! ├── authors/
//! │   └── default.md      # YAML front matter + markdown body
//! └── supporters.json     # optional, array of supporter records
//! ```

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::Frontmatter;
use crate::error::ContentError;
use crate::types::{Author, Supporter, SupporterRecord};

/// Everything the pages need, fully materialized before rendering starts.
#[derive(Debug, Clone, Default)]
pub struct Content {
    authors: Vec<Author>,
    supporters: Vec<Supporter>,
}

impl Content {
    pub fn new(authors: Vec<Author>, supporters: Vec<Supporter>) -> Self {
        Self {
            authors,
            supporters,
        }
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn author(&self, slug: &str) -> Option<&Author> {
        self.authors.iter().find(|author| author.slug == slug)
    }

    /// Like [`Content::author`], but a missing author is a configuration error.
    pub fn require_author(&self, slug: &str) -> Result<&Author, ContentError> {
        self.author(slug).ok_or_else(|| ContentError::AuthorNotFound {
            slug: slug.to_string(),
        })
    }

    /// Supporters in source order.
    pub fn supporters(&self) -> &[Supporter] {
        &self.supporters
    }
}

pub trait ContentProvider {
    fn load(&self) -> impl Future<Output = Result<Content, ContentError>> + Send;
}

impl ContentProvider for Content {
    async fn load(&self) -> Result<Content, ContentError> {
        Ok(self.clone())
    }
}

pub const AUTHORS_DIR: &str = "authors";
pub const SUPPORTERS_FILE: &str = "supporters.json";

pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    async fn load_authors(&self) -> Result<Vec<Author>, ContentError> {
        let dir = self.root.join(AUTHORS_DIR);
        let io_err = |source| ContentError::Io {
            path: dir.clone(),
            source,
        };
        let mut entries = tokio::fs::read_dir(&dir).await.map_err(io_err)?;

        let mut authors = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                tracing::warn!(path = %path.display(), "skipping non-markdown file in authors directory");
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|stem| stem.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping author file with a non UTF-8 name");
                continue;
            };
            let source = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| ContentError::Io {
                    path: path.clone(),
                    source,
                })?;
            let author = parse_author(slug, &source, &path)?;
            tracing::debug!(slug = %author.slug, path = %path.display(), "loaded author");
            authors.push(author);
        }
        // read_dir order is platform dependent
        authors.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(authors)
    }

    async fn load_supporters(&self) -> Result<Vec<Supporter>, ContentError> {
        let path = self.root.join(SUPPORTERS_FILE);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no supporters file");
                return Ok(Vec::new());
            }
            Err(source) => return Err(ContentError::Io { path, source }),
        };
        parse_supporters(&text).map_err(|err| match err {
            ParseSupportersError::Json(source) => ContentError::Json { path, source },
            ParseSupportersError::Content(err) => err,
        })
    }
}

impl ContentProvider for DirectoryProvider {
    async fn load(&self) -> Result<Content, ContentError> {
        let authors = self.load_authors().await?;
        let supporters = self.load_supporters().await?;
        tracing::debug!(
            root = %self.root.display(),
            authors = authors.len(),
            supporters = supporters.len(),
            "content loaded"
        );
        Ok(Content::new(authors, supporters))
    }
}

enum ParseSupportersError {
    Json(serde_json::Error),
    Content(ContentError),
}

fn parse_supporters(text: &str) -> Result<Vec<Supporter>, ParseSupportersError> {
    let records: Vec<SupporterRecord> =
        serde_json::from_str(text).map_err(ParseSupportersError::Json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| Supporter::from_record(record, index))
        .collect::<Result<_, _>>()
        .map_err(ParseSupportersError::Content)
}

pub fn markdown_options() -> Options {
    Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
        | Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Parses an author file: YAML front matter for the profile fields, markdown for the body.
pub fn parse_author(slug: &str, source: &str, path: &Path) -> Result<Author, ContentError> {
    let mut metadata = String::new();
    let mut in_metadata = false;
    let mut body = Vec::new();

    for event in Parser::new_ext(source, markdown_options()) {
        match event {
            Event::Start(Tag::MetadataBlock(_)) => in_metadata = true,
            Event::End(TagEnd::MetadataBlock(_)) => in_metadata = false,
            Event::Text(text) if in_metadata => metadata.push_str(&text),
            event => body.push(event),
        }
    }

    let frontmatter = Frontmatter::parse(&metadata).map_err(|err| ContentError::InvalidAuthor {
        path: path.to_path_buf(),
        reason: format!("malformed front matter: {err}"),
    })?;
    let name = frontmatter
        .get_str("name")
        .ok_or_else(|| ContentError::InvalidAuthor {
            path: path.to_path_buf(),
            reason: "front matter has no `name`".into(),
        })?;

    let mut author = Author::new(slug, name);
    author.avatar = frontmatter.get_str("avatar");
    author.occupation = frontmatter.get_str("occupation");
    author.company = frontmatter.get_str("company");
    author.email = frontmatter.get_str("email");
    author.twitter = frontmatter.get_str("twitter");
    author.github = frontmatter.get_str("github");
    author.linkedin = frontmatter.get_str("linkedin");
    author.bluesky = frontmatter.get_str("bluesky");
    pulldown_cmark::html::push_html(&mut author.body_html, body.into_iter());
    Ok(author)
}
