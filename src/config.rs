//! Paginator configuration.
//!
//! Hosts either use the builder on [`Paginator`](crate::paginator::Paginator)
//! or deserialize a [`PaginatorConfig`] from page data.

use crate::error::{Error, Result};
use crate::indicator::Type;
use crate::matcher::MatchMode;
use serde::Deserialize;
use std::str::FromStr;

/// Items per page used when nothing else is configured.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Paginator settings.
///
/// ```
/// use console_paginator::config::PaginatorConfig;
/// use console_paginator::indicator::Type;
///
/// let config: PaginatorConfig =
///     serde_json::from_str(r#"{"id": "restore", "per_page": 25, "indicator": "label"}"#).unwrap();
/// assert_eq!(config.per_page, 25);
/// assert_eq!(config.indicator, Type::Label);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Identifier used to derive page control ids.
    pub id: String,
    /// Items per page. Must be positive.
    pub per_page: usize,
    /// How the page indicator is displayed.
    pub indicator: Type,
    /// How filter queries match item labels.
    pub match_mode: MatchMode,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            id: "paginator".to_string(),
            per_page: DEFAULT_PER_PAGE,
            indicator: Type::default(),
            match_mode: MatchMode::default(),
        }
    }
}

impl PaginatorConfig {
    /// Checks the settings without building anything.
    pub fn validate(&self) -> Result<()> {
        PerPage::new(self.per_page).map(|_| ())
    }
}

/// A positive page size.
///
/// Parses the `per-page` attribute strings the admin templates emit.
///
/// ```
/// use console_paginator::config::PerPage;
///
/// let per_page: PerPage = " 25 ".parse().unwrap();
/// assert_eq!(per_page.get(), 25);
/// assert!("0".parse::<PerPage>().is_err());
/// assert!("many".parse::<PerPage>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PerPage(usize);

impl PerPage {
    /// Wraps `n`, rejecting zero.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidConfiguration { per_page: n });
        }
        Ok(Self(n))
    }

    /// The page size.
    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for PerPage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let n: usize = s.trim().parse().map_err(|_| Error::InvalidPerPage {
            value: s.to_string(),
        })?;
        Self::new(n)
    }
}

impl Default for PerPage {
    fn default() -> Self {
        Self(DEFAULT_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaginatorConfig::default();
        assert_eq!(config.id, "paginator");
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
        assert_eq!(config.indicator, Type::Arabic);
        assert_eq!(config.match_mode, MatchMode::Substring);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PaginatorConfig = serde_json::from_str(r#"{"match_mode": "fuzzy"}"#).unwrap();
        assert_eq!(config.match_mode, MatchMode::Fuzzy);
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_zero_per_page_rejected() {
        let config = PaginatorConfig {
            per_page: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::InvalidConfiguration { per_page: 0 })
        );
    }

    #[test]
    fn test_negative_attribute_is_parse_error() {
        assert_eq!(
            "-5".parse::<PerPage>(),
            Err(Error::InvalidPerPage {
                value: "-5".to_string()
            })
        );
    }
}
