//! The date input component engine.
//!
//! [`DateInput`] keeps three representations consistent: the committed value
//! (owned by the host, mirrored here), the text shown in the field, and the
//! month shown by the calendar popover. The host is only ever notified with a
//! calendar-valid date, either from a successful parse of the typed text or
//! from a day picked in the popover.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::CalendarDate;
use crate::calendar::{MonthGrid, MonthView};
use crate::format::{format, parse, year_complete};
use crate::locale::{LocaleFormatRule, resolve};

/// Host-supplied properties of a date input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DateInputProps {
    #[serde(default)]
    pub value: Option<NaiveDate>,
    pub locale: String,
}

type OnChange = Box<dyn FnMut(NaiveDate)>;

pub struct DateInput {
    rule: LocaleFormatRule,
    value: Option<CalendarDate>,
    display: String,
    view: Option<MonthView>,
    on_change: OnChange,
}

impl std::fmt::Debug for DateInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateInput")
            .field("rule", &self.rule)
            .field("value", &self.value)
            .field("display", &self.display)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

/// Native dates outside the supported year range are treated as absent.
fn accept_native(value: Option<NaiveDate>) -> Option<CalendarDate> {
    let native = value?;
    CalendarDate::try_from(native)
        .inspect_err(|err| log::warn!("ignoring date value {native}: {err}"))
        .ok()
}

impl DateInput {
    pub fn new(props: DateInputProps, on_change: impl FnMut(NaiveDate) + 'static) -> Self {
        let rule = resolve(&props.locale);
        let value = accept_native(props.value);
        Self {
            rule,
            value,
            display: format(value, &rule),
            view: None,
            on_change: Box::new(on_change),
        }
    }

    pub const fn value(&self) -> Option<CalendarDate> {
        self.value
    }

    /// Text currently shown in the field, possibly an unfinished edit.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub const fn rule(&self) -> &LocaleFormatRule {
        &self.rule
    }

    pub fn placeholder(&self) -> String {
        self.rule.placeholder()
    }

    /// The host pushed a committed value.
    ///
    /// The displayed text is replaced only when the value actually changes, so
    /// echoing back a date this input just reported leaves the user's text alone.
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        let value = accept_native(value);
        if value != self.value {
            self.value = value;
            self.display = format(value, &self.rule);
        }
    }

    /// The host switched locales: re-resolve the rule and re-render the text.
    pub fn set_locale(&mut self, locale: &str) {
        let rule = resolve(locale);
        if rule != self.rule {
            self.rule = rule;
            self.display = format(self.value, &self.rule);
        }
    }

    /// The user edited the field.
    ///
    /// Returns the newly committed date when the text has a four-digit year
    /// and parses into a date other than the current value. Shorter years
    /// are only committed on [`blur`](Self::blur), so prefixes such as
    /// `15/01/202` never reach the host. Unparseable text stays on display
    /// and nothing is reported.
    pub fn edit(&mut self, text: &str) -> Option<CalendarDate> {
        text.clone_into(&mut self.display);
        if !year_complete(text, &self.rule) {
            return None;
        }
        match parse(text, &self.rule) {
            Ok(date) if Some(date) == self.value => None,
            Ok(date) => {
                self.commit(date);
                Some(date)
            }
            Err(err) => {
                log::debug!("date text {text:?} not committed: {err}");
                None
            }
        }
    }

    /// The field lost focus: unparseable text gives way to the committed value,
    /// parseable text is normalized to the locale's format.
    pub fn blur(&mut self) {
        if let Ok(date) = parse(&self.display, &self.rule) {
            if Some(date) != self.value {
                self.commit(date);
            }
        }
        self.display = format(self.value, &self.rule);
    }

    /// Opens the popover on the committed value's month, or today's.
    pub fn open_calendar(&mut self) {
        let anchor = match self.value {
            Some(date) => date,
            None => match CalendarDate::today() {
                Ok(today) => today,
                Err(err) => {
                    log::warn!("cannot open calendar: {err}");
                    return;
                }
            },
        };
        self.open_calendar_at(anchor);
    }

    /// Opens the popover on the committed value's month, falling back to `today`'s.
    pub fn open_calendar_at(&mut self, today: CalendarDate) {
        let anchor = self.value.unwrap_or(today);
        self.view = Some(MonthView::containing(anchor));
    }

    pub fn close_calendar(&mut self) {
        self.view = None;
    }

    pub const fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub const fn view(&self) -> Option<MonthView> {
        self.view
    }

    pub fn next_month(&mut self) {
        self.view = self.view.map(MonthView::next);
    }

    pub fn prev_month(&mut self) {
        self.view = self.view.map(MonthView::prev);
    }

    /// Grid of the displayed month, rebuilt on every call.
    pub fn grid(&self) -> Option<MonthGrid> {
        self.view.map(|view| view.grid(&self.rule))
    }

    /// The user picked `day` in the popover.
    ///
    /// The date comes from the displayed month alone, whatever text is in the
    /// field. Commits, re-renders the text and closes the popover.
    pub fn select_day(&mut self, day: u8) -> Option<CalendarDate> {
        let view = self.view?;
        match view.select(day) {
            Ok(date) => {
                self.commit(date);
                self.display = format(self.value, &self.rule);
                self.view = None;
                Some(date)
            }
            Err(err) => {
                log::debug!("day {day} not selectable: {err}");
                None
            }
        }
    }

    fn commit(&mut self, date: CalendarDate) {
        log::trace!("committing date {date}");
        self.value = Some(date);
        (self.on_change)(date.to_naive_date());
    }
}
