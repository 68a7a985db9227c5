//! Folio renderer
//!
//! Renders the about page of a personal site: the author's profile, rendered
//! through the author layout, followed by the support section listing everyone
//! who chipped in. Content comes from a [`content::ContentProvider`]; the site
//! configuration is passed in explicitly.
//!

use yaml_rust2::{ScanError, Yaml, YamlLoader};

pub mod author;
pub mod config;
pub mod content;
pub mod css;
pub mod document;
pub mod error;
pub mod icons;
pub mod site;
pub mod supporters;
pub mod theme;
pub mod types;
pub mod utils;
pub mod writer;

pub use config::{SiteConfig, SupportLinks};
pub use content::{Content, ContentProvider, DirectoryProvider};
pub use error::{ConfigError, ContentError};
pub use site::{BuildSummary, SiteBuilder, render_about_page};
pub use supporters::SupporterList;
pub use types::{Author, Currency, SupportDate, Supporter, SupporterRecord};

#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    yaml: Vec<Yaml>,
}

impl Frontmatter {
    pub fn parse(text: &str) -> Result<Self, ScanError> {
        let yaml = YamlLoader::load_from_str(text)?;
        Ok(Self { yaml })
    }

    pub fn contents(&self) -> &[Yaml] {
        &self.yaml
    }

    /// String value of a top-level key in the first document.
    pub fn get_str(&self, key: &str) -> Option<String> {
        let doc = self.yaml.first()?;
        match &doc[key] {
            Yaml::String(value) => Some(value.clone()),
            Yaml::Integer(value) => Some(value.to_string()),
            Yaml::Real(value) => Some(value.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmatter_lookup() {
        let frontmatter = Frontmatter::parse("name: Jane\nyear: 1990\ntags: [a, b]\n").unwrap();
        assert_eq!(frontmatter.get_str("name").as_deref(), Some("Jane"));
        assert_eq!(frontmatter.get_str("year").as_deref(), Some("1990"));
        assert_eq!(frontmatter.get_str("tags"), None);
        assert_eq!(frontmatter.get_str("missing"), None);
    }

    #[test]
    fn test_bad_yaml_is_an_error() {
        assert!(Frontmatter::parse("name: [unclosed").is_err());
    }

    #[test]
    fn test_empty_frontmatter_has_no_keys() {
        let frontmatter = Frontmatter::parse("").unwrap();
        assert!(frontmatter.contents().is_empty());
        assert_eq!(frontmatter.get_str("name"), None);
    }
}
