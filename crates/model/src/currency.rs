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

//! Represents an ISO 4217 currency with its display symbols.

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    str::FromStr,
    sync::OnceLock,
};

use ahash::AHashMap;
use currency_field_core::correctness::{FAILED, check_ascii_uppercase_len};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::locale::Locale;

/// Error returned when parsing a [`Currency`] from a string fails.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid currency code '{0}': expected three uppercase ASCII letters")]
pub struct ParseCurrencyError(pub String);

/// An ISO 4217 currency.
///
/// Currencies outside the built-in registry are still valid: they display their code as the
/// symbol and default to two minor-unit digits.
#[derive(Clone, Copy)]
pub struct Currency {
    /// The ISO 4217 alphabetic code.
    pub code: Ustr,
    /// The number of minor-unit digits.
    pub precision: u8,
    /// The English name.
    pub name: Ustr,
    /// The symbol used within the currency's home regions.
    pub symbol: Ustr,
    /// The symbol used everywhere else, disambiguated where needed (e.g. `US$`).
    pub intl_symbol: Ustr,
    regions: &'static [&'static str],
}

struct CurrencyDef {
    code: &'static str,
    precision: u8,
    name: &'static str,
    symbol: &'static str,
    intl_symbol: &'static str,
    regions: &'static [&'static str],
}

const EURO_REGIONS: &[&str] = &[
    "AT", "BE", "CY", "DE", "EE", "ES", "FI", "FR", "GR", "HR", "IE", "IT", "LT", "LU", "LV", "MT",
    "NL", "PT", "SI", "SK",
];

#[rustfmt::skip]
const CURRENCY_DEFS: &[CurrencyDef] = &[
    CurrencyDef { code: "ARS", precision: 2, name: "Argentine peso", symbol: "$", intl_symbol: "ARS", regions: &["AR"] },
    CurrencyDef { code: "AUD", precision: 2, name: "Australian dollar", symbol: "$", intl_symbol: "A$", regions: &["AU"] },
    CurrencyDef { code: "BRL", precision: 2, name: "Brazilian real", symbol: "R$", intl_symbol: "R$", regions: &["BR"] },
    CurrencyDef { code: "CAD", precision: 2, name: "Canadian dollar", symbol: "$", intl_symbol: "CA$", regions: &["CA"] },
    CurrencyDef { code: "CHF", precision: 2, name: "Swiss franc", symbol: "CHF", intl_symbol: "CHF", regions: &["CH", "LI"] },
    CurrencyDef { code: "CLP", precision: 0, name: "Chilean peso", symbol: "$", intl_symbol: "CLP", regions: &["CL"] },
    CurrencyDef { code: "CNY", precision: 2, name: "Chinese yuan", symbol: "¥", intl_symbol: "CN¥", regions: &["CN"] },
    CurrencyDef { code: "COP", precision: 2, name: "Colombian peso", symbol: "$", intl_symbol: "COP", regions: &["CO"] },
    CurrencyDef { code: "EUR", precision: 2, name: "Euro", symbol: "€", intl_symbol: "€", regions: EURO_REGIONS },
    CurrencyDef { code: "GBP", precision: 2, name: "British pound", symbol: "£", intl_symbol: "£", regions: &["GB"] },
    CurrencyDef { code: "INR", precision: 2, name: "Indian rupee", symbol: "₹", intl_symbol: "₹", regions: &["IN"] },
    CurrencyDef { code: "JPY", precision: 0, name: "Japanese yen", symbol: "¥", intl_symbol: "JP¥", regions: &["JP"] },
    CurrencyDef { code: "KWD", precision: 3, name: "Kuwaiti dinar", symbol: "KWD", intl_symbol: "KWD", regions: &["KW"] },
    CurrencyDef { code: "MXN", precision: 2, name: "Mexican peso", symbol: "$", intl_symbol: "MX$", regions: &["MX"] },
    CurrencyDef { code: "PYG", precision: 0, name: "Paraguayan guarani", symbol: "₲", intl_symbol: "PYG", regions: &["PY"] },
    CurrencyDef { code: "USD", precision: 2, name: "United States dollar", symbol: "$", intl_symbol: "US$", regions: &["US", "EC", "SV", "PR"] },
    CurrencyDef { code: "UYU", precision: 2, name: "Uruguayan peso", symbol: "$", intl_symbol: "UYU", regions: &["UY"] },
];

fn currency_registry() -> &'static AHashMap<Ustr, Currency> {
    static REGISTRY: OnceLock<AHashMap<Ustr, Currency>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        CURRENCY_DEFS
            .iter()
            .map(|def| {
                let currency = Currency {
                    code: Ustr::from(def.code),
                    precision: def.precision,
                    name: Ustr::from(def.name),
                    symbol: Ustr::from(def.symbol),
                    intl_symbol: Ustr::from(def.intl_symbol),
                    regions: def.regions,
                };
                (currency.code, currency)
            })
            .collect()
    })
}

impl Currency {
    /// Creates a new [`Currency`] instance from an ISO 4217 code.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is not exactly three uppercase ASCII letters.
    pub fn new_checked<T: AsRef<str>>(code: T) -> anyhow::Result<Self> {
        let code = code.as_ref();
        check_ascii_uppercase_len(code, 3, stringify!(code))?;

        let code = Ustr::from(code);
        if let Some(currency) = currency_registry().get(&code) {
            return Ok(*currency);
        }

        log::debug!("Currency {code} not in registry, displaying its code as symbol");
        Ok(Self {
            code,
            precision: 2,
            name: code,
            symbol: code,
            intl_symbol: code,
            regions: &[],
        })
    }

    /// Creates a new [`Currency`] instance from an ISO 4217 code.
    ///
    /// # Panics
    ///
    /// Panics if `code` is not a valid currency code.
    #[must_use]
    pub fn new<T: AsRef<str>>(code: T) -> Self {
        Self::new_checked(code).expect(FAILED)
    }

    /// Returns whether the currency is defined in the built-in registry.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        currency_registry().contains_key(&self.code)
    }

    /// Returns whether `region` (ISO 3166 alpha-2) uses this currency domestically.
    #[must_use]
    pub fn is_home_region(&self, region: &str) -> bool {
        self.regions.contains(&region)
    }

    /// Returns the symbol displayed for this currency under `locale`.
    ///
    /// The local symbol is used inside the currency's home regions, the disambiguated
    /// international symbol elsewhere.
    #[must_use]
    pub fn symbol_for(&self, locale: &Locale) -> &'static str {
        match locale.region() {
            Some(region) if self.is_home_region(region.as_str()) => self.symbol.as_str(),
            _ => self.intl_symbol.as_str(),
        }
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn BRL() -> Self {
        Self::new("BRL")
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn USD() -> Self {
        Self::new("USD")
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn EUR() -> Self {
        Self::new("EUR")
    }

    #[allow(non_snake_case)]
    #[must_use]
    pub fn JPY() -> Self {
        Self::new("JPY")
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Default for Currency {
    /// Creates a new default [`Currency`] instance (BRL).
    fn default() -> Self {
        Self::BRL()
    }
}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_checked(s).map_err(|_| ParseCurrencyError(s.to_string()))
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code='{}', precision={}, name='{}', symbol='{}')",
            stringify!(Currency),
            self.code,
            self.precision,
            self.name,
            self.symbol,
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_str(&code).map_err(serde::de::Error::custom)
    }
}
