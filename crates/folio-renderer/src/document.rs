use pulldown_cmark_escape::StrWrite;

use crate::css::generate_base_css;
use crate::theme::Theme;
use crate::writer::HtmlWriter;

pub const BASE_CSS_PATH: &str = "/css/base.css";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CssMode {
    /// Link to `/css/base.css`, written alongside the pages.
    #[default]
    Linked,
    Inline,
}

/// Page-level metadata for the document head.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub site_title: &'a str,
    pub description: Option<&'a str>,
}

impl PageMeta<'_> {
    pub fn full_title(&self) -> String {
        format!("{} | {}", self.title, self.site_title)
    }
}

pub fn write_document_head<W: StrWrite>(
    w: &mut HtmlWriter<W>,
    meta: &PageMeta<'_>,
    theme: &Theme,
    css_mode: CssMode,
) -> Result<(), W::Error> {
    let title = meta.full_title();

    w.write("<!DOCTYPE html>\n")?;
    w.write("<html lang=\"en\">\n")?;
    w.write("<head>\n")?;
    w.write("  <meta charset=\"utf-8\">\n")?;
    w.write("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n")?;

    // Title
    w.write("  <title>")?;
    w.write_text(&title)?;
    w.write("</title>\n")?;

    // OpenGraph
    w.write("  <meta property=\"og:title\" content=\"")?;
    w.write_attr(&title)?;
    w.write("\">\n")?;
    w.write("  <meta property=\"og:type\" content=\"website\">\n")?;
    if let Some(description) = meta.description {
        w.write("  <meta name=\"description\" content=\"")?;
        w.write_attr(description)?;
        w.write("\">\n")?;
        w.write("  <meta property=\"og:description\" content=\"")?;
        w.write_attr(description)?;
        w.write("\">\n")?;
    }

    // CSS
    match css_mode {
        CssMode::Linked => {
            w.write("  <link rel=\"stylesheet\" href=\"")?;
            w.write(BASE_CSS_PATH)?;
            w.write("\">\n")?;
        }
        CssMode::Inline => {
            w.write("  <style>\n")?;
            w.write(&generate_base_css(theme))?;
            w.write("  </style>\n")?;
        }
    }

    w.write("</head>\n")?;
    w.write("<body>\n")?;
    w.write("<main>\n")
}

pub fn write_document_footer<W: StrWrite>(w: &mut HtmlWriter<W>) -> Result<(), W::Error> {
    w.write_line("</main>")?;
    w.write("</body>\n")?;
    w.write("</html>\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark_escape::FmtWriter;

    fn head(meta: &PageMeta<'_>, css_mode: CssMode) -> String {
        let mut out = String::new();
        let mut w = HtmlWriter::new(FmtWriter(&mut out));
        write_document_head(&mut w, meta, &Theme::default(), css_mode).unwrap();
        out
    }

    #[test]
    fn test_linked_head() {
        let meta = PageMeta {
            title: "About",
            site_title: "Notes & Things",
            description: Some("A \"small\" site"),
        };
        let html = head(&meta, CssMode::Linked);
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>About | Notes &amp; Things</title>"));
        assert!(html.contains("content=\"A &quot;small&quot; site\""));
        assert!(html.contains("href=\"/css/base.css\""));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_inline_head() {
        let meta = PageMeta {
            title: "About",
            site_title: "Site",
            description: None,
        };
        let html = head(&meta, CssMode::Inline);
        assert!(html.contains("<style>"));
        assert!(html.contains("--color-base"));
        assert!(!html.contains("name=\"description\""));
    }

    #[test]
    fn test_footer_closes_document() {
        let mut out = String::new();
        let mut w = HtmlWriter::new(FmtWriter(&mut out));
        w.write("<p>x</p>").unwrap();
        write_document_footer(&mut w).unwrap();
        assert_eq!(out, "<p>x</p>\n</main>\n</body>\n</html>\n");
    }
}
