//! Locale resolution for the few strings the paginator and its controllers show.
//!
//! Consumers receive a [`Catalog`] instead of embedding string tables, so
//! hosts can plug in their own translations. [`BuiltinCatalog`] ships the
//! Finnish, English and Swedish strings the admin screens use.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Finnish.
    Fi,
    /// English.
    #[default]
    En,
    /// Swedish.
    Sv,
}

impl Locale {
    /// Resolves a page `lang` attribute such as `"fi"` or `"sv-FI"`.
    ///
    /// Anything unrecognised falls back to English.
    ///
    /// ```
    /// use console_paginator::locale::Locale;
    ///
    /// assert_eq!(Locale::from_lang("sv-FI"), Locale::Sv);
    /// assert_eq!(Locale::from_lang("de"), Locale::En);
    /// ```
    pub fn from_lang(lang: &str) -> Self {
        let primary = lang
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "fi" => Locale::Fi,
            "sv" => Locale::Sv,
            _ => Locale::En,
        }
    }

    /// The two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Fi => "fi",
            Locale::En => "en",
            Locale::Sv => "sv",
        }
    }
}

impl FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_lang(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Keys for every translatable string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    /// Prefix of the page label, e.g. "Page".
    Page,
    /// Shown instead of page controls when a filter matches nothing.
    NoResults,
    /// Select-all button.
    SelectAll,
    /// Select-all button once everything is selected.
    DeselectAll,
    /// Button that clears `n` selections.
    RemoveAllSelected(usize),
    /// Validation error for an inverted date range.
    StartAfterEnd,
}

/// Resolves [`Text`] keys into display strings.
pub trait Catalog {
    /// Returns the string for `text` in `locale`.
    fn text(&self, locale: Locale, text: Text) -> String;
}

/// Builtin translations for `fi`, `en` and `sv`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

static STRINGS: Lazy<HashMap<(Locale, &'static str), &'static str>> = Lazy::new(|| {
    let rows: &[(Locale, &str, &str)] = &[
        (Locale::Fi, "page", "Sivu"),
        (Locale::En, "page", "Page"),
        (Locale::Sv, "page", "Sida"),
        (Locale::Fi, "no_results", "Ei tuloksia"),
        (Locale::En, "no_results", "No results"),
        (Locale::Sv, "no_results", "Inga resultat"),
        (Locale::Fi, "select_all", "Valitse kaikki"),
        (Locale::En, "select_all", "Select all"),
        (Locale::Sv, "select_all", "Välj alla"),
        (Locale::Fi, "deselect_all", "Poista valinnat"),
        (Locale::En, "deselect_all", "Deselect all"),
        (Locale::Sv, "deselect_all", "Avmarkera alla"),
        (Locale::Fi, "remove_all", "Poista kaikki {count} valintaa"),
        (Locale::En, "remove_all", "Remove all {count} selected"),
        (Locale::Sv, "remove_all", "Avmarkera alla {count}"),
        (
            Locale::Fi,
            "start_after_end",
            "Alkupäivä ei voi olla suurempi kuin loppupäivä.",
        ),
        (
            Locale::En,
            "start_after_end",
            "Start date cannot be greater than end date.",
        ),
        (
            Locale::Sv,
            "start_after_end",
            "Startdatum kan inte vara större än slutdatum.",
        ),
    ];
    rows.iter()
        .map(|(locale, key, value)| ((*locale, *key), *value))
        .collect()
});

impl Catalog for BuiltinCatalog {
    fn text(&self, locale: Locale, text: Text) -> String {
        let (key, count) = match text {
            Text::Page => ("page", None),
            Text::NoResults => ("no_results", None),
            Text::SelectAll => ("select_all", None),
            Text::DeselectAll => ("deselect_all", None),
            Text::RemoveAllSelected(n) => ("remove_all", Some(n)),
            Text::StartAfterEnd => ("start_after_end", None),
        };
        let template = STRINGS
            .get(&(locale, key))
            .or_else(|| STRINGS.get(&(Locale::En, key)))
            .copied()
            .unwrap_or(key);
        match count {
            Some(n) => template.replace("{count}", &n.to_string()),
            None => template.to_string(),
        }
    }
}
