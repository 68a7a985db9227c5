//! Supporter list: ordering and per-entry display rules.
//!
//! [`SupporterList`] turns the raw records into display-ready entries, oldest
//! first. [`write_support_section`] renders them, together with the badges for
//! the configured support channels.

use pulldown_cmark_escape::StrWrite;

use crate::config::SupportLinks;
use crate::icons;
use crate::types::{Currency, Supporter};
use crate::writer::HtmlWriter;

pub const ANONYMOUS_LABEL: &str = "Anonymous";
pub const DEFAULT_VIA: &str = "Other";
pub const SUPPORTERS_HEADING: &str = "Thank you for your support:";

pub const KOFI_BADGE_SRC: &str = "/static/images/support-kofi.webp";
pub const KOFI_LABEL: &str = "Support me via Ko-fi";
pub const WECHAT_LABEL: &str = "Support me via WeChat";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayName<'a> {
    Named(&'a str),
    Anonymous,
}

/// What goes in front of the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySymbol<'a> {
    Text(&'static str),
    /// Inline SVG markup.
    Glyph(&'static str),
    /// Currency outside the supported set, shown by its code.
    Code(&'a str),
}

pub fn currency_symbol(currency: &Currency) -> CurrencySymbol<'_> {
    match currency {
        Currency::Cny => CurrencySymbol::Text("¥"),
        Currency::Usd => CurrencySymbol::Text("$"),
        Currency::Sol => CurrencySymbol::Glyph(icons::SOLANA),
        Currency::Other(code) => CurrencySymbol::Code(code),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount<'a> {
    pub value: f64,
    pub currency: &'a Currency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupporterEntry<'a> {
    pub date: &'a str,
    pub name: DisplayName<'a>,
    /// Only set when the record has both an amount and a currency.
    pub amount: Option<Amount<'a>>,
    pub via: &'a str,
    pub message: Option<&'a str>,
}

impl<'a> From<&'a Supporter> for SupporterEntry<'a> {
    fn from(supporter: &'a Supporter) -> Self {
        let amount = match (supporter.amount, supporter.currency.as_ref()) {
            (Some(value), Some(currency)) => Some(Amount { value, currency }),
            _ => None,
        };
        Self {
            date: supporter.date.as_str(),
            name: supporter
                .name
                .as_deref()
                .map_or(DisplayName::Anonymous, DisplayName::Named),
            amount,
            via: supporter.via.as_deref().unwrap_or(DEFAULT_VIA),
            message: supporter.message.as_deref(),
        }
    }
}

/// Supporters ordered by date, oldest first. Entries with the same date keep
/// their source order.
#[derive(Debug, Clone, PartialEq)]
pub struct SupporterList<'a> {
    entries: Vec<SupporterEntry<'a>>,
}

impl<'a> SupporterList<'a> {
    pub fn new(supporters: &'a [Supporter]) -> Self {
        let mut sorted: Vec<&Supporter> = supporters.iter().collect();
        // stable
        sorted.sort_by_key(|supporter| supporter.date.instant());
        Self {
            entries: sorted.into_iter().map(SupporterEntry::from).collect(),
        }
    }

    pub fn entries(&self) -> &[SupporterEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn write_amount<W: StrWrite>(
    w: &mut HtmlWriter<W>,
    amount: &Amount<'_>,
) -> Result<(), W::Error> {
    match currency_symbol(amount.currency) {
        CurrencySymbol::Text(symbol) => w.write(symbol)?,
        CurrencySymbol::Glyph(svg) => w.write(svg)?,
        CurrencySymbol::Code(code) => {
            w.write_text(code)?;
            w.write(" ")?;
        }
    }
    write!(w, "{}", amount.value)
}

pub fn write_entry<W: StrWrite>(
    w: &mut HtmlWriter<W>,
    entry: &SupporterEntry<'_>,
) -> Result<(), W::Error> {
    w.write("<li><span class=\"supporter-date\">")?;
    w.write_text(entry.date)?;
    w.write("</span>")?;

    match entry.name {
        DisplayName::Named(name) => {
            w.write("<span class=\"supporter-name\">")?;
            w.write_text(name)?;
            w.write("</span>")?;
        }
        DisplayName::Anonymous => {
            w.write("<span class=\"supporter-anonymous\">")?;
            w.write(icons::EYE_CLOSED)?;
            w.write(ANONYMOUS_LABEL)?;
            w.write("</span>")?;
        }
    }

    if let Some(amount) = &entry.amount {
        w.write("<span class=\"supporter-amount\">")?;
        write_amount(w, amount)?;
        w.write("</span>")?;
    }

    w.write("<span class=\"supporter-via\">via ")?;
    w.write_text(entry.via)?;
    w.write("</span>")?;

    if let Some(message) = entry.message {
        w.write("<span class=\"supporter-message\">\"")?;
        w.write_text(message)?;
        w.write("\"</span>")?;
    }

    w.write("</li>")?;
    w.write_newline()
}

/// Heading and list. Writes nothing at all for an empty list.
pub fn write_supporter_list<W: StrWrite>(
    w: &mut HtmlWriter<W>,
    list: &SupporterList<'_>,
) -> Result<(), W::Error> {
    if list.is_empty() {
        return Ok(());
    }
    w.write_line("<div class=\"supporters\">")?;
    w.write("<h3>")?;
    w.write(SUPPORTERS_HEADING)?;
    w.write("</h3>")?;
    w.write_newline()?;
    w.write_line("<ul>")?;
    for entry in list.entries() {
        write_entry(w, entry)?;
    }
    w.write_line("</ul>")?;
    w.write_line("</div>")
}

fn write_support_channels<W: StrWrite>(
    w: &mut HtmlWriter<W>,
    links: &SupportLinks,
) -> Result<(), W::Error> {
    if links.is_empty() {
        return Ok(());
    }
    w.write_line("<div class=\"support-channels\">")?;
    if let Some(kofi) = &links.kofi {
        w.write("<a class=\"support-channel\" href=\"")?;
        w.write_url(kofi.as_str())?;
        w.write("\" target=\"_blank\" rel=\"noopener\">")?;
        w.write("<img src=\"")?;
        w.write(KOFI_BADGE_SRC)?;
        w.write("\" alt=\"")?;
        w.write(KOFI_LABEL)?;
        w.write("\" width=\"297\" height=\"60\" style=\"height: 60px\" />")?;
        w.write("<p>")?;
        w.write(KOFI_LABEL)?;
        w.write("</p></a>")?;
        w.write_newline()?;
    }
    if let Some(wechat) = &links.wechat {
        w.write("<div class=\"support-channel\"><img src=\"")?;
        w.write_url(wechat)?;
        w.write("\" alt=\"")?;
        w.write(WECHAT_LABEL)?;
        w.write("\" width=\"200\" height=\"200\" style=\"height: 200px\" />")?;
        w.write("<p>")?;
        w.write(WECHAT_LABEL)?;
        w.write("</p></div>")?;
        w.write_newline()?;
    }
    w.write_line("</div>")
}

/// The whole support block: channel badges, then the supporter list.
pub fn write_support_section<W: StrWrite>(
    w: &mut HtmlWriter<W>,
    links: &SupportLinks,
    supporters: &[Supporter],
) -> Result<(), W::Error> {
    let list = SupporterList::new(supporters);
    if links.is_empty() && list.is_empty() {
        return Ok(());
    }
    w.write_line("<section class=\"support-me\">")?;
    write_support_channels(w, links)?;
    write_supporter_list(w, &list)?;
    w.write_line("</section>")
}
