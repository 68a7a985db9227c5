//! Builds a site from a content directory on disk, the way the CLI does.

use folio_renderer::config::{FileStore, SiteConfig};
use folio_renderer::content::DirectoryProvider;
use folio_renderer::document::CssMode;
use folio_renderer::{ContentError, SiteBuilder};
use std::path::Path;

const AUTHOR: &str = r#"---
name: Jane Doe
avatar: /static/images/avatar.png
occupation: Software Engineer
company: Acme
email: jane@example.com
github: https://github.com/jane
---

I write about *Rust* and static sites.
"#;

const SUPPORTERS: &str = r#"[
    {"date": "2023-01-01", "name": "Bob", "amount": 5, "currency": "USD", "via": "Ko-fi"},
    {"date": "2022-05-05", "amount": 3, "currency": "CNY", "message": "nice"},
    {"date": "2024-07-14", "name": "Carol", "amount": 0.5, "currency": "SOL"},
    {"date": "2024-07-14", "name": "Dave", "amount": 20}
]"#;

const CONFIG: &str = r#"
site {
    title "Jane Doe"
    description "Notes on Rust"
}
support {
    kofi "https://ko-fi.com/janedoe"
    wechat "/static/images/wechat.png"
}
"#;

async fn write_content(root: &Path) {
    tokio::fs::create_dir_all(root.join("authors")).await.unwrap();
    tokio::fs::write(root.join("authors/default.md"), AUTHOR).await.unwrap();
    tokio::fs::write(root.join("supporters.json"), SUPPORTERS).await.unwrap();
    tokio::fs::write(root.join("site.kdl"), CONFIG).await.unwrap();
}

#[tokio::test]
async fn test_build_about_page_from_directory() {
    let content = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_content(content.path()).await;

    let config = SiteConfig::load(&FileStore::new(content.path().join("site.kdl")))
        .await
        .unwrap();
    let summary = SiteBuilder::new(config, DirectoryProvider::new(content.path()))
        .build(output.path())
        .await
        .unwrap();
    assert_eq!(summary.supporters, 4);

    let html = tokio::fs::read_to_string(output.path().join("about/index.html"))
        .await
        .unwrap();

    assert!(html.contains("<title>About | Jane Doe</title>"));
    assert!(html.contains("<meta name=\"description\" content=\"Notes on Rust\">"));
    assert!(html.contains("<em>Rust</em>"));
    assert!(html.contains("href=\"https://ko-fi.com/janedoe\""));
    assert!(html.contains("<p>Support me via WeChat</p>"));

    // oldest first, ties in source order
    let order: Vec<usize> = ["¥3", "$5", "Carol", "Dave"]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));

    assert_eq!(html.matches("<li><span class=\"supporter-date\">").count(), 4);
    assert!(html.contains("currency-sol"));
    assert!(html.contains("</svg>0.5</span>"));
    // Dave gave an amount without a currency
    let dave = &html[html.find("Dave").unwrap()..];
    let dave = &dave[..dave.find("</li>").unwrap()];
    assert!(!dave.contains("supporter-amount"));
    assert!(dave.contains("via Other"));

    let css = tokio::fs::read_to_string(output.path().join("css/base.css"))
        .await
        .unwrap();
    assert!(css.contains(".supporter-anonymous"));
}

#[tokio::test]
async fn test_inline_css_build() {
    let content = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_content(content.path()).await;

    SiteBuilder::new(SiteConfig::default(), DirectoryProvider::new(content.path()))
        .css_mode(CssMode::Inline)
        .build(output.path())
        .await
        .unwrap();

    let html = tokio::fs::read_to_string(output.path().join("about/index.html"))
        .await
        .unwrap();
    assert!(html.contains("<style>"));
    assert!(html.contains("<title>About | Folio</title>"));
    assert!(!output.path().join("css").exists());
}

#[tokio::test]
async fn test_unknown_author_slug_aborts_build() {
    let content = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_content(content.path()).await;

    let config = SiteConfig {
        author_slug: "ghost".into(),
        ..SiteConfig::default()
    };
    let report = SiteBuilder::new(config, DirectoryProvider::new(content.path()))
        .build(output.path())
        .await
        .unwrap_err();
    assert!(matches!(
        report.downcast_ref::<ContentError>(),
        Some(ContentError::AuthorNotFound { .. })
    ));
    assert!(!output.path().join("about").exists());
}

#[tokio::test]
async fn test_bad_supporter_date_aborts_build() {
    let content = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_content(content.path()).await;
    tokio::fs::write(
        content.path().join("supporters.json"),
        r#"[{"date": "last tuesday", "name": "Eve"}]"#,
    )
    .await
    .unwrap();

    let report = SiteBuilder::new(SiteConfig::default(), DirectoryProvider::new(content.path()))
        .build(output.path())
        .await
        .unwrap_err();
    assert!(matches!(
        report.downcast_ref::<ContentError>(),
        Some(ContentError::InvalidDate { index: 0, .. })
    ));
}
