use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;
use smol_str::SmolStr;

use crate::error::ContentError;

/// Calendar date of a supporter entry.
///
/// Keeps the text exactly as written in the data file for display, alongside
/// the UTC instant used for ordering. Only constructed through [`SupportDate::parse`],
/// so every value has a valid instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportDate {
    text: SmolStr,
    instant: DateTime<Utc>,
}

impl SupportDate {
    /// Accepts `YYYY-MM-DD` (midnight UTC), RFC 3339 timestamps, and
    /// `YYYY-MM-DDTHH:MM:SS` without an offset (read as UTC).
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let instant = if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            date.and_time(NaiveTime::MIN).and_utc()
        } else if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
            timestamp.with_timezone(&Utc)
        } else {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                .ok()?
                .and_utc()
        };
        Some(Self {
            text: SmolStr::new(text),
            instant,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl std::fmt::Display for SupportDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Currency of a monetary contribution.
///
/// The supported set is closed; anything else is kept verbatim in `Other` and
/// displayed by its code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "SmolStr")]
pub enum Currency {
    Cny,
    Usd,
    Sol,
    Other(SmolStr),
}

impl Currency {
    pub fn code(&self) -> &str {
        match self {
            Currency::Cny => "CNY",
            Currency::Usd => "USD",
            Currency::Sol => "SOL",
            Currency::Other(code) => code,
        }
    }
}

impl From<SmolStr> for Currency {
    fn from(code: SmolStr) -> Self {
        match code.as_str() {
            "CNY" => Currency::Cny,
            "USD" => Currency::Usd,
            "SOL" => Currency::Sol,
            _ => Currency::Other(code),
        }
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        SmolStr::new(code).into()
    }
}

/// A supporter entry as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SupporterRecord {
    pub date: String,
    #[serde(default)]
    pub name: Option<SmolStr>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub via: Option<SmolStr>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One person's financial support, validated at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Supporter {
    pub date: SupportDate,
    pub name: Option<SmolStr>,
    pub amount: Option<f64>,
    pub currency: Option<Currency>,
    pub via: Option<SmolStr>,
    pub message: Option<String>,
}

impl Supporter {
    pub fn new(date: SupportDate) -> Self {
        Self {
            date,
            name: None,
            amount: None,
            currency: None,
            via: None,
            message: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_amount(mut self, amount: f64, currency: impl Into<Currency>) -> Self {
        self.amount = Some(amount);
        self.currency = Some(currency.into());
        self
    }

    pub fn with_via(mut self, via: impl Into<SmolStr>) -> Self {
        self.via = Some(via.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Validates a raw record. `index` is its position in the source file and
    /// only used for error reporting. Blank `name`, `via` and `message` values
    /// count as absent.
    pub fn from_record(record: SupporterRecord, index: usize) -> Result<Self, ContentError> {
        let date = SupportDate::parse(&record.date).ok_or_else(|| ContentError::InvalidDate {
            date: record.date.clone(),
            index,
        })?;
        Ok(Self {
            date,
            name: record.name.filter(|name| !name.trim().is_empty()),
            amount: record.amount,
            currency: record.currency,
            via: record.via.filter(|via| !via.trim().is_empty()),
            message: record.message.filter(|message| !message.trim().is_empty()),
        })
    }
}

/// Author profile, projected into the author layout as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub slug: SmolStr,
    pub name: SmolStr,
    pub avatar: Option<String>,
    pub occupation: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub bluesky: Option<String>,
    /// Markdown body, already rendered to HTML.
    pub body_html: String,
}

impl Author {
    pub fn new(slug: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            avatar: None,
            occupation: None,
            company: None,
            email: None,
            twitter: None,
            github: None,
            linkedin: None,
            bluesky: None,
            body_html: String::new(),
        }
    }
}
