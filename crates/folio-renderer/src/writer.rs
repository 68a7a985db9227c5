use pulldown_cmark_escape::{StrWrite, escape_href, escape_html, escape_html_body_text};

/// Thin wrapper over a [`StrWrite`] sink that every page fragment renders through.
pub struct HtmlWriter<W> {
    /// Writer to write to.
    writer: W,

    /// Whether or not the last write wrote a newline.
    end_newline: bool,
}

impl<W> HtmlWriter<W>
where
    W: StrWrite,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            end_newline: true,
        }
    }

    /// Writes a new line.
    #[inline]
    pub fn write_newline(&mut self) -> Result<(), W::Error> {
        self.end_newline = true;
        self.writer.write_str("\n")
    }

    /// Writes a buffer of trusted markup, and tracks whether or not a newline was written.
    #[inline]
    pub fn write(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)?;

        if !s.is_empty() {
            self.end_newline = s.ends_with('\n');
        }
        Ok(())
    }

    /// Writes a line of markup, starting a fresh line first if needed.
    pub fn write_line(&mut self, s: &str) -> Result<(), W::Error> {
        if !self.end_newline {
            self.write_newline()?;
        }
        self.write(s)?;
        self.write_newline()
    }

    /// Writes untrusted text as element content.
    pub fn write_text(&mut self, text: &str) -> Result<(), W::Error> {
        escape_html_body_text(&mut self.writer, text)?;
        if !text.is_empty() {
            self.end_newline = text.ends_with('\n');
        }
        Ok(())
    }

    /// Writes untrusted text inside a double-quoted attribute value.
    pub fn write_attr(&mut self, value: &str) -> Result<(), W::Error> {
        escape_html(&mut self.writer, value)?;
        self.end_newline = false;
        Ok(())
    }

    /// Writes a URL inside a double-quoted `href`/`src` attribute.
    pub fn write_url(&mut self, url: &str) -> Result<(), W::Error> {
        escape_href(&mut self.writer, url)?;
        self.end_newline = false;
        Ok(())
    }

    pub fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) -> Result<(), W::Error> {
        self.writer.write_fmt(args)?;
        self.end_newline = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark_escape::FmtWriter;

    #[test]
    fn test_text_is_escaped() {
        let mut out = String::new();
        let mut w = HtmlWriter::new(FmtWriter(&mut out));
        w.write("<p>").unwrap();
        w.write_text("<script>&").unwrap();
        w.write("</p>").unwrap();
        assert_eq!(out, "<p>&lt;script&gt;&amp;</p>");
    }

    #[test]
    fn test_attr_escapes_quotes() {
        let mut out = String::new();
        let mut w = HtmlWriter::new(FmtWriter(&mut out));
        w.write_attr(r#"a "quoted" value"#).unwrap();
        assert_eq!(out, "a &quot;quoted&quot; value");
    }

    #[test]
    fn test_write_line_starts_fresh_line() {
        let mut out = String::new();
        let mut w = HtmlWriter::new(FmtWriter(&mut out));
        w.write("<div>").unwrap();
        w.write_line("<ul>").unwrap();
        w.write_line("</ul>").unwrap();
        assert_eq!(out, "<div>\n<ul>\n</ul>\n");
    }
}
