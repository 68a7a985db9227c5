//! Static site output.
//!
//! Renders the about page from a [`SiteConfig`] and loaded [`Content`], and writes
//! it (plus the stylesheet, when linked) under a destination directory. The output
//! works with any static host.

use miette::IntoDiagnostic;
use pulldown_cmark_escape::FmtWriter;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use crate::author::AuthorLayout;
use crate::config::SiteConfig;
use crate::content::{Content, ContentProvider};
use crate::css::generate_base_css;
use crate::document::{
    BASE_CSS_PATH, CssMode, PageMeta, write_document_footer, write_document_head,
};
use crate::supporters::write_support_section;
use crate::utils::{create_file, page_path};
use crate::writer::HtmlWriter;

pub const ABOUT_ROUTE: &str = "about";
pub const ABOUT_TITLE: &str = "About";

/// Renders the complete about page document.
///
/// Fails only when the configured author is not in `content`.
pub fn render_about_page(
    config: &SiteConfig,
    content: &Content,
    css_mode: CssMode,
) -> miette::Result<String> {
    let author = content.require_author(&config.author_slug)?;
    let meta = PageMeta {
        title: ABOUT_TITLE,
        site_title: &config.title,
        description: config.description.as_deref(),
    };

    let mut output = String::new();
    let mut w = HtmlWriter::new(FmtWriter(&mut output));
    write_document_head(&mut w, &meta, &config.theme, css_mode).into_diagnostic()?;
    AuthorLayout::new(author)
        .with_heading(ABOUT_TITLE)
        .write(&mut w, |w| {
            write_support_section(w, &config.support, content.supporters())
        })
        .into_diagnostic()?;
    write_document_footer(&mut w).into_diagnostic()?;
    Ok(output)
}

pub async fn write_page(output_path: impl AsRef<Path>, html: &str) -> miette::Result<()> {
    let mut output_file = create_file(output_path.as_ref()).await?;
    output_file
        .write_all(html.as_bytes())
        .await
        .into_diagnostic()?;
    output_file.flush().await.into_diagnostic()?;
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Every file written, in write order.
    pub written: Vec<PathBuf>,
    pub supporters: usize,
}

pub struct SiteBuilder<P> {
    config: SiteConfig,
    provider: P,
    css_mode: CssMode,
}

impl<P> SiteBuilder<P>
where
    P: ContentProvider,
{
    pub fn new(config: SiteConfig, provider: P) -> Self {
        Self {
            config,
            provider,
            css_mode: CssMode::default(),
        }
    }

    pub fn css_mode(mut self, css_mode: CssMode) -> Self {
        self.css_mode = css_mode;
        self
    }

    /// Loads content and writes the site into `destination`.
    ///
    /// Nothing is written if loading or rendering fails.
    pub async fn build(&self, destination: impl AsRef<Path>) -> miette::Result<BuildSummary> {
        let destination = destination.as_ref();
        let content = self.provider.load().await?;
        let about = render_about_page(&self.config, &content, self.css_mode)?;

        let mut summary = BuildSummary {
            written: Vec::new(),
            supporters: content.supporters().len(),
        };

        let about_path = page_path(destination, ABOUT_ROUTE);
        write_page(&about_path, &about).await?;
        tracing::debug!(path = %about_path.display(), "wrote page");
        summary.written.push(about_path);

        if self.css_mode == CssMode::Linked {
            let css_path = destination.join(BASE_CSS_PATH.trim_start_matches('/'));
            write_page(&css_path, &generate_base_css(&self.config.theme)).await?;
            tracing::debug!(path = %css_path.display(), "wrote stylesheet");
            summary.written.push(css_path);
        }

        tracing::info!(
            destination = %destination.display(),
            files = summary.written.len(),
            supporters = summary.supporters,
            "site built"
        );
        Ok(summary)
    }
}
