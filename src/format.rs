//! Text directions of the date input: committed value to display text and back.

use crate::consts::{ALTERNATE_SEPARATORS, FIELD_COUNT, YEAR_DIGITS};
use crate::locale::{FieldKind, FieldOrder, LocaleFormatRule};
use crate::types::{Month, Year};
use crate::{CalendarDate, ParseError};

/// Renders `value` as short numeric text in the rule's field order.
///
/// An absent value renders as the empty string. Day and month follow the
/// rule's padding; the year is always its natural decimal form.
pub fn format(value: Option<CalendarDate>, rule: &LocaleFormatRule) -> String {
    let Some(date) = value else {
        return String::new();
    };

    let separator = rule.separator.to_string();
    rule.order
        .fields()
        .iter()
        .map(|kind| match kind {
            FieldKind::Day => rule.padding.render(date.day()),
            FieldKind::Month => rule.padding.render(date.month()),
            FieldKind::Year => date.year().to_string(),
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Parses typed text into a date, assigning fields strictly by the rule's order.
///
/// The rule's own separator is accepted along with `/`, `-` and `.`.
///
/// # Errors
/// Returns `ParseError` for empty input, a field count other than three,
/// non-numeric tokens, or any component outside its calendar range.
pub fn parse(text: &str, rule: &LocaleFormatRule) -> Result<CalendarDate, ParseError> {
    parse_ordered(text, rule.order, &separators(rule))
}

/// Whether typed text already carries a full-width year, so that a parse of
/// it is not just a prefix of the date being typed (`15/01/202`).
pub fn year_complete(text: &str, rule: &LocaleFormatRule) -> bool {
    let Ok(tokens) = split_fields(text, &separators(rule)) else {
        return false;
    };
    rule.order
        .fields()
        .iter()
        .zip(&tokens)
        .any(|(kind, token)| *kind == FieldKind::Year && token.len() >= YEAR_DIGITS)
}

fn separators(rule: &LocaleFormatRule) -> Vec<char> {
    let mut separators = ALTERNATE_SEPARATORS.to_vec();
    if !separators.contains(&rule.separator) {
        separators.push(rule.separator);
    }
    separators
}

fn split_fields<'a>(text: &'a str, separators: &[char]) -> Result<Vec<&'a str>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let tokens: Vec<&str> = trimmed
        .split(|c| separators.contains(&c))
        .map(str::trim)
        .collect();
    if tokens.len() != FIELD_COUNT {
        return Err(ParseError::FieldCount {
            expected: FIELD_COUNT,
            found: tokens.len(),
        });
    }
    Ok(tokens)
}

pub(crate) fn parse_ordered(
    text: &str,
    order: FieldOrder,
    separators: &[char],
) -> Result<CalendarDate, ParseError> {
    let tokens = split_fields(text, separators)?;

    let (mut year, mut month, mut day) = (0, 0, 0);
    for (kind, token) in order.fields().iter().zip(&tokens) {
        let value = parse_number(token)?;
        match kind {
            FieldKind::Day => day = value,
            FieldKind::Month => month = value,
            FieldKind::Year => year = value,
        }
    }

    let year = u16::try_from(year)
        .map_err(|_| ParseError::InvalidYear(year))
        .and_then(Year::new)?;
    let month = u8::try_from(month)
        .map_err(|_| ParseError::InvalidMonth(month))
        .and_then(Month::new)?;
    let day = u8::try_from(day).map_err(|_| ParseError::InvalidDay {
        year: year.get(),
        month: month.get(),
        day,
    })?;
    CalendarDate::from_parts(year, month, day)
}

/// Digits only: signs, blanks and overflow are format errors.
fn parse_number(token: &str) -> Result<u32, ParseError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(token.to_owned()));
    }
    token
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidFormat(token.to_owned()))
}
