//! Locale format resolution.
//!
//! A locale identifier maps onto a [`LocaleFormatRule`] through a flat static
//! table. Unknown identifiers never fail from the caller's point of view:
//! [`resolve`] falls back to a day-first rule with English month names.

use crate::CalendarDate;
use crate::consts::DEFAULT_SEPARATOR;
use crate::prelude::*;
use crate::types::{Month, Weekday, Year};
use serde::{Deserialize, Serialize};

/// One numeric component of a short date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// Display and parse order of the three date fields.
///
/// Always a permutation of day, month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[FieldKind; 3]", into = "[FieldKind; 3]")]
pub struct FieldOrder([FieldKind; 3]);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldOrderError {
    #[error("field order must name day, month and year exactly once, got {0:?}")]
    NotAPermutation([FieldKind; 3]),
}

impl FieldOrder {
    /// Day, month, year
    pub const DMY: Self = Self([FieldKind::Day, FieldKind::Month, FieldKind::Year]);
    /// Month, day, year
    pub const MDY: Self = Self([FieldKind::Month, FieldKind::Day, FieldKind::Year]);
    /// Year, month, day
    pub const YMD: Self = Self([FieldKind::Year, FieldKind::Month, FieldKind::Day]);

    /// # Errors
    /// Returns `FieldOrderError::NotAPermutation` if any field repeats.
    pub fn new(fields: [FieldKind; 3]) -> Result<Self, FieldOrderError> {
        let [a, b, c] = fields;
        if a == b || b == c || a == c {
            return Err(FieldOrderError::NotAPermutation(fields));
        }
        Ok(Self(fields))
    }

    pub const fn fields(&self) -> &[FieldKind; 3] {
        &self.0
    }
}

impl TryFrom<[FieldKind; 3]> for FieldOrder {
    type Error = FieldOrderError;

    fn try_from(fields: [FieldKind; 3]) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

impl From<FieldOrder> for [FieldKind; 3] {
    fn from(order: FieldOrder) -> Self {
        order.0
    }
}

/// Zero-padding policy for the day and month fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    /// `1/5/2023`
    Natural,
    /// `01/05/2023`
    TwoDigit,
}

impl Padding {
    pub fn render(self, value: u8) -> String {
        match self {
            Self::Natural => value.to_string(),
            Self::TwoDigit => format!("{value:02}"),
        }
    }
}

/// Everything the date input needs to know about a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LocaleFormatRule {
    /// Canonical tag of the table entry, `"und"` for the fallback rule
    pub locale: &'static str,
    pub order: FieldOrder,
    pub separator: char,
    pub padding: Padding,
    /// Full month names, January first
    pub month_names: &'static [&'static str; 12],
    /// Calendar header pattern with `{month}` and `{year}` placeholders
    pub header_template: &'static str,
    /// Leftmost column of the month grid
    pub first_weekday: Weekday,
}

impl LocaleFormatRule {
    pub const fn month_name(&self, month: Month) -> &'static str {
        self.month_names[month.index0()]
    }

    /// Calendar header for a month, e.g. `janeiro de 2023`.
    pub fn header(&self, year: Year, month: Month) -> String {
        self.header_template
            .replace("{month}", self.month_name(month))
            .replace("{year}", &year.to_string())
    }

    pub fn format_date(&self, date: CalendarDate) -> String {
        crate::format::format(Some(date), self)
    }

    /// Input hint such as `DD/MM/YYYY`.
    pub fn placeholder(&self) -> String {
        let separator = self.separator.to_string();
        self.order
            .fields()
            .iter()
            .map(|kind| match kind {
                FieldKind::Day => "DD",
                FieldKind::Month => "MM",
                FieldKind::Year => "YYYY",
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

/// Locale lookup found no table entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized locale {0:?}")]
pub struct LocaleUnrecognized(pub String);

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const PORTUGUESE_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const ITALIAN_MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

const JAPANESE_MONTHS: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
    "12月",
];

const MONTH_YEAR: &str = "{month} {year}";
const MONTH_DE_YEAR: &str = "{month} de {year}";

/// Used for every locale the table does not know.
pub const DEFAULT_RULE: LocaleFormatRule = LocaleFormatRule {
    locale: "und",
    order: FieldOrder::DMY,
    separator: DEFAULT_SEPARATOR,
    padding: Padding::TwoDigit,
    month_names: &ENGLISH_MONTHS,
    header_template: MONTH_YEAR,
    first_weekday: Weekday::Monday,
};

const fn entry(
    locale: &'static str,
    order: FieldOrder,
    separator: char,
    padding: Padding,
    month_names: &'static [&'static str; 12],
    header_template: &'static str,
    first_weekday: Weekday,
) -> LocaleFormatRule {
    LocaleFormatRule {
        locale,
        order,
        separator,
        padding,
        month_names,
        header_template,
        first_weekday,
    }
}

// Language-only lookups take the first entry of each language.
#[rustfmt::skip]
static LOCALE_TABLE: [LocaleFormatRule; 9] = [
    entry("en-US", FieldOrder::MDY, '/', Padding::Natural, &ENGLISH_MONTHS, MONTH_YEAR, Weekday::Sunday),
    entry("en-GB", FieldOrder::DMY, '/', Padding::TwoDigit, &ENGLISH_MONTHS, MONTH_YEAR, Weekday::Monday),
    entry("pt-BR", FieldOrder::DMY, '/', Padding::TwoDigit, &PORTUGUESE_MONTHS, MONTH_DE_YEAR, Weekday::Sunday),
    entry("pt-PT", FieldOrder::DMY, '/', Padding::TwoDigit, &PORTUGUESE_MONTHS, MONTH_DE_YEAR, Weekday::Monday),
    entry("es-ES", FieldOrder::DMY, '/', Padding::Natural, &SPANISH_MONTHS, MONTH_DE_YEAR, Weekday::Monday),
    entry("fr-FR", FieldOrder::DMY, '/', Padding::TwoDigit, &FRENCH_MONTHS, MONTH_YEAR, Weekday::Monday),
    entry("de-DE", FieldOrder::DMY, '.', Padding::Natural, &GERMAN_MONTHS, MONTH_YEAR, Weekday::Monday),
    entry("it-IT", FieldOrder::DMY, '/', Padding::Natural, &ITALIAN_MONTHS, MONTH_YEAR, Weekday::Monday),
    entry("ja-JP", FieldOrder::YMD, '/', Padding::Natural, &JAPANESE_MONTHS, "{year}年{month}", Weekday::Sunday),
];

/// Strips encoding and modifier suffixes and POSIX underscores: `pt_BR.UTF-8` becomes `pt-BR`.
fn normalize(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw).trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.replace('_', "-"))
}

fn language(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Finds the table rule for a locale: exact tag first, then primary language.
///
/// # Errors
/// Returns `LocaleUnrecognized` when neither matches.
pub fn lookup(locale: &str) -> Result<LocaleFormatRule, LocaleUnrecognized> {
    let unrecognized = || LocaleUnrecognized(locale.to_owned());
    let tag = normalize(locale).ok_or_else(unrecognized)?;

    LOCALE_TABLE
        .iter()
        .find(|rule| rule.locale.eq_ignore_ascii_case(&tag))
        .or_else(|| {
            let wanted = language(&tag);
            LOCALE_TABLE
                .iter()
                .find(|rule| language(rule.locale).eq_ignore_ascii_case(wanted))
        })
        .copied()
        .ok_or_else(unrecognized)
}

/// Resolves a locale to its format rule, falling back to [`DEFAULT_RULE`].
pub fn resolve(locale: &str) -> LocaleFormatRule {
    lookup(locale).unwrap_or_else(|err| {
        log::debug!("{err}, using default date format");
        DEFAULT_RULE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first_and_month_first() {
        let pt = resolve("pt-BR");
        assert_eq!(pt.order, FieldOrder::DMY);
        assert_eq!(pt.separator, '/');
        assert_eq!(pt.padding, Padding::TwoDigit);

        let us = resolve("en-US");
        assert_eq!(us.order, FieldOrder::MDY);
        assert_eq!(us.separator, '/');
        assert_eq!(us.padding, Padding::Natural);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for locale in ["pt-BR", "en-US", "ja-JP", "nope", ""] {
            assert_eq!(resolve(locale), resolve(locale), "locale {locale:?}");
        }
    }

    #[test]
    fn test_unknown_locale_falls_back_to_day_first_english() {
        for locale in ["xx-YY", "", "   ", "klingon"] {
            let rule = resolve(locale);
            assert_eq!(rule, DEFAULT_RULE);
            assert_eq!(rule.order, FieldOrder::DMY);
            assert_eq!(rule.month_names[0], "January");
        }
        assert_eq!(
            lookup("xx-YY"),
            Err(LocaleUnrecognized("xx-YY".to_owned()))
        );
    }

    #[test]
    fn test_lookup_normalizes_tags() {
        assert_eq!(lookup("pt_BR.UTF-8").map(|r| r.locale), Ok("pt-BR"));
        assert_eq!(lookup("PT-br").map(|r| r.locale), Ok("pt-BR"));
        assert_eq!(lookup(" en-GB ").map(|r| r.locale), Ok("en-GB"));
        assert_eq!(lookup("de_DE@euro").map(|r| r.locale), Ok("de-DE"));
    }

    #[test]
    fn test_lookup_falls_back_to_language() {
        assert_eq!(lookup("pt").map(|r| r.locale), Ok("pt-BR"));
        assert_eq!(lookup("en").map(|r| r.locale), Ok("en-US"));
        assert_eq!(lookup("en-AU").map(|r| r.locale), Ok("en-US"));
        assert_eq!(lookup("es-MX").map(|r| r.locale), Ok("es-ES"));
    }

    #[test]
    fn test_table_orders_are_permutations() {
        for rule in &LOCALE_TABLE {
            assert!(FieldOrder::new(*rule.order.fields()).is_ok(), "{}", rule.locale);
        }
    }

    #[test]
    fn test_field_order_rejects_repeats() {
        assert!(FieldOrder::new([FieldKind::Day, FieldKind::Month, FieldKind::Year]).is_ok());
        assert!(matches!(
            FieldOrder::new([FieldKind::Day, FieldKind::Day, FieldKind::Year]),
            Err(FieldOrderError::NotAPermutation(_))
        ));
        assert!(FieldOrder::new([FieldKind::Year, FieldKind::Month, FieldKind::Year]).is_err());
    }

    #[test]
    fn test_field_order_serde() {
        let json = serde_json::to_string(&FieldOrder::MDY).unwrap();
        assert_eq!(json, r#"["month","day","year"]"#);
        let parsed: FieldOrder = serde_json::from_str(r#"["year","month","day"]"#).unwrap();
        assert_eq!(parsed, FieldOrder::YMD);
        assert!(serde_json::from_str::<FieldOrder>(r#"["day","day","year"]"#).is_err());
    }

    #[test]
    fn test_headers() {
        let year = Year::new(2023).unwrap();
        let january = Month::new(1).unwrap();
        let march = Month::new(3).unwrap();
        assert_eq!(resolve("pt-BR").header(year, january), "janeiro de 2023");
        assert_eq!(resolve("en-US").header(year, january), "January 2023");
        assert_eq!(resolve("es-ES").header(year, march), "marzo de 2023");
        assert_eq!(resolve("de-DE").header(year, march), "März 2023");
        assert_eq!(resolve("ja-JP").header(year, march), "2023年3月");
        assert_eq!(resolve("zz").header(year, march), "March 2023");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(resolve("pt-BR").placeholder(), "DD/MM/YYYY");
        assert_eq!(resolve("en-US").placeholder(), "MM/DD/YYYY");
        assert_eq!(resolve("de-DE").placeholder(), "DD.MM.YYYY");
    }

    #[test]
    fn test_rule_serializes() {
        let json = serde_json::to_value(resolve("pt-BR")).unwrap();
        assert_eq!(json["locale"], "pt-BR");
        assert_eq!(json["order"], serde_json::json!(["day", "month", "year"]));
        assert_eq!(json["padding"], "two_digit");
        assert_eq!(json["month_names"][0], "janeiro");
        assert_eq!(json["first_weekday"], "sunday");
    }
}
