//! Author layout: page heading, profile card, then whatever content the page
//! projects into it.

use pulldown_cmark_escape::StrWrite;

use crate::types::Author;
use crate::writer::HtmlWriter;

pub struct AuthorLayout<'a> {
    author: &'a Author,
    heading: &'a str,
}

impl<'a> AuthorLayout<'a> {
    pub fn new(author: &'a Author) -> Self {
        Self {
            author,
            heading: "About",
        }
    }

    pub fn with_heading(mut self, heading: &'a str) -> Self {
        self.heading = heading;
        self
    }

    /// Renders the layout. `children` writes the content area, after the
    /// author's own markdown body.
    pub fn write<W, F>(&self, w: &mut HtmlWriter<W>, children: F) -> Result<(), W::Error>
    where
        W: StrWrite,
        F: FnOnce(&mut HtmlWriter<W>) -> Result<(), W::Error>,
    {
        let author = self.author;

        w.write_line("<div class=\"author-layout\">")?;
        w.write("<div class=\"page-header\"><h1>")?;
        w.write_text(self.heading)?;
        w.write("</h1></div>")?;
        w.write_newline()?;

        w.write_line("<div class=\"author\">")?;
        self.write_card(w)?;

        w.write_line("<div class=\"author-body\">")?;
        w.write(&author.body_html)?;
        children(w)?;
        w.write_line("</div>")?;

        w.write_line("</div>")?;
        w.write_line("</div>")
    }

    fn write_card<W: StrWrite>(&self, w: &mut HtmlWriter<W>) -> Result<(), W::Error> {
        let author = self.author;
        w.write_line("<div class=\"author-card\">")?;
        if let Some(avatar) = &author.avatar {
            w.write("<img class=\"author-avatar\" src=\"")?;
            w.write_url(avatar)?;
            w.write("\" alt=\"avatar\" width=\"192\" height=\"192\" />")?;
            w.write_newline()?;
        }
        w.write("<h3 class=\"author-name\">")?;
        w.write_text(&author.name)?;
        w.write("</h3>")?;
        w.write_newline()?;
        if let Some(occupation) = &author.occupation {
            w.write("<div class=\"author-occupation\">")?;
            w.write_text(occupation)?;
            w.write("</div>")?;
            w.write_newline()?;
        }
        if let Some(company) = &author.company {
            w.write("<div class=\"author-company\">")?;
            w.write_text(company)?;
            w.write("</div>")?;
            w.write_newline()?;
        }
        self.write_social_links(w)?;
        w.write_line("</div>")
    }

    fn write_social_links<W: StrWrite>(&self, w: &mut HtmlWriter<W>) -> Result<(), W::Error> {
        let author = self.author;
        let email = author.email.as_ref().map(|email| format!("mailto:{email}"));
        let links = [
            ("mail", "Email", email.as_deref()),
            ("github", "GitHub", author.github.as_deref()),
            ("linkedin", "LinkedIn", author.linkedin.as_deref()),
            ("x", "X", author.twitter.as_deref()),
            ("bluesky", "Bluesky", author.bluesky.as_deref()),
        ];
        if links.iter().all(|(_, _, href)| href.is_none()) {
            return Ok(());
        }

        w.write_line("<ul class=\"social-links\">")?;
        for (kind, label, href) in links {
            let Some(href) = href else { continue };
            write!(w, "<li><a class=\"social-link social-{kind}\" href=\"")?;
            w.write_url(href)?;
            w.write("\" target=\"_blank\" rel=\"noopener noreferrer\">")?;
            w.write(label)?;
            w.write("</a></li>")?;
            w.write_newline()?;
        }
        w.write_line("</ul>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark_escape::FmtWriter;

    fn render(author: &Author) -> String {
        let mut out = String::new();
        let mut w = HtmlWriter::new(FmtWriter(&mut out));
        AuthorLayout::new(author)
            .write(&mut w, |w| w.write_line("<p>child</p>"))
            .unwrap();
        out
    }

    #[test]
    fn test_minimal_author() {
        let author = Author::new("default", "Jane Doe");
        let html = render(&author);
        assert!(html.contains("<h1>About</h1>"));
        assert!(html.contains("<h3 class=\"author-name\">Jane Doe</h3>"));
        assert!(!html.contains("author-avatar"));
        assert!(!html.contains("social-links"));
        assert!(html.contains("<p>child</p>"));
    }

    #[test]
    fn test_full_profile() {
        let mut author = Author::new("default", "Jane Doe");
        author.avatar = Some("/static/images/avatar.png".into());
        author.occupation = Some("Engineer".into());
        author.company = Some("Acme & Co".into());
        author.email = Some("jane@example.com".into());
        author.github = Some("https://github.com/jane".into());
        author.twitter = Some("https://x.com/jane".into());
        author.body_html = "<p>Bio</p>\n".into();
        let html = render(&author);

        assert!(html.contains("src=\"/static/images/avatar.png\""));
        assert!(html.contains("<div class=\"author-occupation\">Engineer</div>"));
        assert!(html.contains("Acme &amp; Co"));
        assert!(html.contains("href=\"mailto:jane@example.com\""));
        assert!(html.contains("href=\"https://github.com/jane\""));
        assert!(html.contains("class=\"social-link social-x\""));
        assert!(!html.contains("social-linkedin"));
        // body comes before projected children
        assert!(html.find("<p>Bio</p>").unwrap() < html.find("<p>child</p>").unwrap());
    }

    #[test]
    fn test_custom_heading() {
        let author = Author::new("default", "Jane");
        let mut out = String::new();
        let mut w = HtmlWriter::new(FmtWriter(&mut out));
        AuthorLayout::new(&author)
            .with_heading("Who am I")
            .write(&mut w, |_| Ok(()))
            .unwrap();
        assert!(out.contains("<h1>Who am I</h1>"));
    }
}
