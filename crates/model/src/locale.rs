// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Locale identifiers and their currency formatting conventions.

use std::{
    fmt::{Debug, Display},
    str::FromStr,
    sync::OnceLock,
};

use currency_field_core::{correctness::FAILED, formatting::Grouping};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::enums::SymbolPosition;

/// Environment variables consulted, in order, to resolve the host locale.
pub const HOST_LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Error returned when parsing a [`Locale`] from a string fails.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseLocaleError {
    #[error("empty locale identifier")]
    Empty,
    #[error("malformed locale identifier '{0}'")]
    Malformed(String),
}

fn locale_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // language, optional region, optional codeset, optional modifier
        Regex::new(r"^([A-Za-z]{2,3})(?:[_-]([A-Za-z]{2}|[0-9]{3}))?(?:\.[\w-]+)?(?:@[\w=;-]+)?$")
            .expect("valid regex")
    })
}

/// A language and optional region, e.g. `pt_BR`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    language: Ustr,
    region: Option<Ustr>,
}

impl Locale {
    /// Parses a locale identifier such as `pt_BR`, `pt-BR`, `pt_BR.UTF-8` or `de`.
    ///
    /// The `C` and `POSIX` locales resolve to `en_US`.
    ///
    /// # Errors
    ///
    /// Returns an error if `identifier` is not a well-formed locale identifier.
    pub fn new_checked<T: AsRef<str>>(identifier: T) -> Result<Self, ParseLocaleError> {
        let identifier = identifier.as_ref().trim();
        if identifier.is_empty() {
            return Err(ParseLocaleError::Empty);
        }

        let base = identifier.split(['.', '@']).next().unwrap_or_default();
        if base == "C" || base == "POSIX" {
            return Ok(Self::en_us());
        }

        let captures = locale_regex()
            .captures(identifier)
            .ok_or_else(|| ParseLocaleError::Malformed(identifier.to_string()))?;

        let language = Ustr::from(&captures[1].to_ascii_lowercase());
        let region = captures
            .get(2)
            .map(|m| Ustr::from(&m.as_str().to_ascii_uppercase()));

        Ok(Self { language, region })
    }

    /// Parses a locale identifier.
    ///
    /// # Panics
    ///
    /// Panics if `identifier` is malformed.
    #[must_use]
    pub fn new<T: AsRef<str>>(identifier: T) -> Self {
        Self::new_checked(identifier).expect(FAILED)
    }

    #[must_use]
    pub fn en_us() -> Self {
        Self {
            language: Ustr::from("en"),
            region: Some(Ustr::from("US")),
        }
    }

    #[must_use]
    pub fn pt_br() -> Self {
        Self {
            language: Ustr::from("pt"),
            region: Some(Ustr::from("BR")),
        }
    }

    /// Resolves the host default locale from the process environment.
    ///
    /// Falls back to `en_US` when no variable holds a usable identifier.
    #[must_use]
    pub fn host_default() -> Self {
        Self::resolve_host(|key| std::env::var(key).ok())
    }

    /// Resolves the host locale using `lookup` to read each of [`HOST_LOCALE_ENV_VARS`].
    #[must_use]
    pub fn resolve_host<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in HOST_LOCALE_ENV_VARS {
            let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            match Self::new_checked(&value) {
                Ok(locale) => return locale,
                Err(e) => log::warn!("Ignoring {key}={value}: {e}"),
            }
        }

        Self::en_us()
    }

    #[must_use]
    pub fn language(&self) -> Ustr {
        self.language
    }

    #[must_use]
    pub fn region(&self) -> Option<Ustr> {
        self.region
    }

    /// Returns the canonical identifier, e.g. `pt_BR`.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self.region {
            Some(region) => format!("{}_{region}", self.language),
            None => self.language.to_string(),
        }
    }

    /// Returns the currency formatting conventions for this locale.
    ///
    /// Lookup falls back from the exact identifier to the language default and finally to
    /// `en_US`.
    #[must_use]
    pub fn conventions(&self) -> &'static LocaleConventions {
        let identifier = self.identifier();
        LOCALE_CONVENTIONS
            .iter()
            .find(|c| c.identifier == identifier)
            .or_else(|| {
                LOCALE_CONVENTIONS
                    .iter()
                    .find(|c| c.language_default && c.language() == self.language.as_str())
            })
            .unwrap_or(&LOCALE_CONVENTIONS[0])
    }
}

impl Default for Locale {
    /// Creates the host default [`Locale`].
    fn default() -> Self {
        Self::host_default()
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_checked(s)
    }
}

impl Debug for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", stringify!(Locale), self.identifier())
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.identifier())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let identifier = String::deserialize(deserializer)?;
        Self::new_checked(&identifier).map_err(serde::de::Error::custom)
    }
}

/// How a locale writes currency amounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleConventions {
    /// Canonical identifier, e.g. `de_DE`.
    pub identifier: &'static str,
    /// Whether this entry answers for its language when no exact match exists.
    pub language_default: bool,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping: Grouping,
    /// Where the currency symbol goes.
    pub symbol_position: SymbolPosition,
    /// Whether a space separates the symbol from the amount.
    pub symbol_spacing: bool,
    pub minus_sign: char,
    /// Currency pattern in the CLDR notation (`¤` is the symbol).
    pub currency_pattern: &'static str,
}

impl LocaleConventions {
    /// Returns the language part of the identifier.
    #[must_use]
    pub fn language(&self) -> &'static str {
        self.identifier
            .split('_')
            .next()
            .unwrap_or(self.identifier)
    }
}

const fn conventions(
    identifier: &'static str,
    language_default: bool,
    decimal_separator: char,
    grouping_separator: char,
    grouping: Grouping,
    symbol_position: SymbolPosition,
    symbol_spacing: bool,
    currency_pattern: &'static str,
) -> LocaleConventions {
    LocaleConventions {
        identifier,
        language_default,
        decimal_separator,
        grouping_separator,
        grouping,
        symbol_position,
        symbol_spacing,
        minus_sign: '-',
        currency_pattern,
    }
}

use Grouping::{Indian, Thousands};
use SymbolPosition::{Prefix, Suffix};

// The first entry is the ultimate fallback.
#[rustfmt::skip]
static LOCALE_CONVENTIONS: [LocaleConventions; 19] = [
    conventions("en_US", true,  '.', ',',        Thousands, Prefix, false, "¤#,##0.00"),
    conventions("en_GB", false, '.', ',',        Thousands, Prefix, false, "¤#,##0.00"),
    conventions("en_IN", false, '.', ',',        Indian,    Prefix, false, "¤#,##,##0.00"),
    conventions("hi_IN", true,  '.', ',',        Indian,    Prefix, false, "¤#,##,##0.00"),
    conventions("pt_BR", true,  ',', '.',        Thousands, Prefix, true,  "¤ #,##0.00"),
    conventions("pt_PT", false, ',', '\u{a0}',   Thousands, Suffix, true,  "#,##0.00 ¤"),
    conventions("es_ES", true,  ',', '.',        Thousands, Suffix, true,  "#,##0.00 ¤"),
    conventions("es_MX", false, '.', ',',        Thousands, Prefix, false, "¤#,##0.00"),
    conventions("fr_FR", true,  ',', '\u{202f}', Thousands, Suffix, true,  "#,##0.00 ¤"),
    conventions("fr_CA", false, ',', '\u{a0}',   Thousands, Suffix, true,  "#,##0.00 ¤"),
    conventions("de_DE", true,  ',', '.',        Thousands, Suffix, true,  "#,##0.00 ¤"),
    conventions("de_AT", false, ',', '\u{a0}',   Thousands, Prefix, true,  "¤ #,##0.00"),
    conventions("de_CH", false, '.', '\'',       Thousands, Prefix, true,  "¤ #,##0.00"),
    conventions("it_IT", true,  ',', '.',        Thousands, Suffix, true,  "#,##0.00 ¤"),
    conventions("nl_NL", true,  ',', '.',        Thousands, Prefix, true,  "¤ #,##0.00"),
    conventions("ja_JP", true,  '.', ',',        Thousands, Prefix, false, "¤#,##0.00"),
    conventions("zh_CN", true,  '.', ',',        Thousands, Prefix, false, "¤#,##0.00"),
    conventions("ko_KR", true,  '.', ',',        Thousands, Prefix, false, "¤#,##0.00"),
    conventions("ar_EG", true,  '.', ',',        Thousands, Suffix, true,  "#,##0.00 ¤"),
];

/// Returns every locale with built-in conventions.
#[must_use]
pub fn supported_locales() -> Vec<Locale> {
    LOCALE_CONVENTIONS
        .iter()
        .map(|c| Locale::new(c.identifier))
        .collect()
}
