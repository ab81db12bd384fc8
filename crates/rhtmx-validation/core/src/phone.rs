//! Phone number predicates by country
//!
//! Numbers are matched as typed: digits only, optionally prefixed by the
//! `+` country code. No separators are stripped.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Countries with dedicated phone formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Argentina,
    Chile,
    Colombia,
    Haiti,
    Mexico,
    Peru,
    Venezuela,
}

impl Country {
    pub const ALL: [Country; 7] = [
        Country::Argentina,
        Country::Chile,
        Country::Colombia,
        Country::Haiti,
        Country::Mexico,
        Country::Peru,
        Country::Venezuela,
    ];

    /// ISO 3166-1 alpha-2 code
    pub fn code(&self) -> &'static str {
        match self {
            Country::Argentina => "ar",
            Country::Chile => "cl",
            Country::Colombia => "co",
            Country::Haiti => "ht",
            Country::Mexico => "mx",
            Country::Peru => "pe",
            Country::Venezuela => "ve",
        }
    }

    /// Regex source for a number kind in this country
    fn pattern(&self, kind: PhoneKind) -> &'static str {
        use Country::*;
        use PhoneKind::*;
        match (self, kind) {
            (Argentina, Mobile) => r"^11\d{8}$",
            (Argentina, Landline) => r"^[23]\d{9}$",
            (Argentina, MobileWithCountryCode) => r"^\+54911\d{8}$",
            (Argentina, LandlineWithCountryCode) => r"^\+54[23]\d{9}$",

            (Chile, Mobile) => r"^9\d{8}$",
            (Chile, Landline) => r"^[2-8]\d{8}$",
            (Chile, MobileWithCountryCode) => r"^\+569\d{8}$",
            (Chile, LandlineWithCountryCode) => r"^\+56[2-8]\d{7}$",

            (Colombia, Mobile) => r"^3\d{9}$",
            (Colombia, Landline) => r"^[2-8]\d{6}$",
            (Colombia, MobileWithCountryCode) => r"^\+573\d{9}$",
            (Colombia, LandlineWithCountryCode) => r"^\+57[1-8]\d{7}$",

            (Haiti, Mobile) => r"^3\d{7}$",
            (Haiti, Landline) => r"^2\d{7}$",
            (Haiti, MobileWithCountryCode) => r"^\+5093\d{7}$",
            (Haiti, LandlineWithCountryCode) => r"^\+5092\d{7}$",

            (Mexico, Mobile) => r"^55\d{8}$",
            (Mexico, Landline) => r"^[2-9]\d{9}$",
            (Mexico, MobileWithCountryCode) => r"^\+5255\d{8}$",
            (Mexico, LandlineWithCountryCode) => r"^\+52[2-9]\d{9}$",

            (Peru, Mobile) => r"^9\d{8}$",
            (Peru, Landline) => r"^[1-8]\d{6,7}$",
            (Peru, MobileWithCountryCode) => r"^\+519\d{8}$",
            (Peru, LandlineWithCountryCode) => r"^\+51[1-8]\d{6,7}$",

            (Venezuela, Mobile) => r"^(0412|0414|0416|0424|0426)\d{7}$",
            (Venezuela, Landline) => r"^(0212|02[4-7]\d)\d{7}$",
            (Venezuela, MobileWithCountryCode) => r"^\+58(412|414|416|424|426)\d{7}$",
            (Venezuela, LandlineWithCountryCode) => r"^\+58(212|2[4-7]\d)\d{7}$",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported country code '{}'", s))
    }
}

/// Number kinds recognised per country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneKind {
    Mobile,
    Landline,
    MobileWithCountryCode,
    LandlineWithCountryCode,
}

impl PhoneKind {
    pub const ALL: [PhoneKind; 4] = [
        PhoneKind::Mobile,
        PhoneKind::Landline,
        PhoneKind::MobileWithCountryCode,
        PhoneKind::LandlineWithCountryCode,
    ];
}

impl FromStr for PhoneKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(PhoneKind::Mobile),
            "landline" => Ok(PhoneKind::Landline),
            "mobile-intl" => Ok(PhoneKind::MobileWithCountryCode),
            "landline-intl" => Ok(PhoneKind::LandlineWithCountryCode),
            other => Err(format!("unsupported phone kind '{}'", other)),
        }
    }
}

static PATTERNS: Lazy<HashMap<(Country, PhoneKind), Regex>> = Lazy::new(|| {
    Country::ALL
        .into_iter()
        .flat_map(|c| PhoneKind::ALL.into_iter().map(move |k| (c, k)))
        .map(|(c, k)| {
            let re = Regex::new(c.pattern(k)).expect("phone regex is valid");
            ((c, k), re)
        })
        .collect()
});

static GENERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{7,15}$").expect("regex is valid"));

static GENERIC_WITH_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d{1,3}[0-9]{7,15}$").expect("regex is valid"));

/// Checks a number against the format of `country`
pub fn is_valid_phone(value: &str, country: Country, kind: PhoneKind) -> bool {
    PATTERNS
        .get(&(country, kind))
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// 7 to 15 digits, any country
pub fn generic(value: &str) -> bool {
    GENERIC.is_match(value)
}

/// `+` and a 1-3 digit country code followed by 7 to 15 digits
pub fn generic_with_country_code(value: &str) -> bool {
    GENERIC_WITH_CODE.is_match(value)
}

pub fn mobile(value: &str, country: Country) -> bool {
    is_valid_phone(value, country, PhoneKind::Mobile)
}

pub fn landline(value: &str, country: Country) -> bool {
    is_valid_phone(value, country, PhoneKind::Landline)
}

pub fn mobile_with_country_code(value: &str, country: Country) -> bool {
    is_valid_phone(value, country, PhoneKind::MobileWithCountryCode)
}

pub fn landline_with_country_code(value: &str, country: Country) -> bool {
    is_valid_phone(value, country, PhoneKind::LandlineWithCountryCode)
}
