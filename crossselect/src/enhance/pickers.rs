//! Date and time picker bindings.
//!
//! Inputs classed `datepicker`, `datetimepicker` or `timepicker` are tagged
//! with the picker kind and its display formats. The formats use the
//! picker's own tokens (`yy-mm-dd`, `hh:mm:ss`); [`PickerKind::format`] and
//! [`PickerKind::parse`] convert values in those formats.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crossdom::{find_element_mut, select_all, Element, Selector};

/// Four-digit year, month, day.
pub const DATE_FORMAT: &str = "yy-mm-dd";
/// 24-hour time with seconds.
pub const TIME_FORMAT: &str = "hh:mm:ss";

const CHRONO_DATE: &str = "%Y-%m-%d";
const CHRONO_TIME: &str = "%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Date,
    DateTime,
    Time,
}

/// A value entered through a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl PickerKind {
    pub const ALL: [PickerKind; 3] = [PickerKind::Date, PickerKind::DateTime, PickerKind::Time];

    /// Class an input carries to get this picker.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Date => "datepicker",
            Self::DateTime => "datetimepicker",
            Self::Time => "timepicker",
        }
    }

    pub const fn date_format(self) -> Option<&'static str> {
        match self {
            Self::Date | Self::DateTime => Some(DATE_FORMAT),
            Self::Time => None,
        }
    }

    pub const fn time_format(self) -> Option<&'static str> {
        match self {
            Self::DateTime | Self::Time => Some(TIME_FORMAT),
            Self::Date => None,
        }
    }

    /// Format a value for an input of this kind. Returns None when the value
    /// is the wrong shape (a bare time for a date picker, say).
    pub fn format(self, value: &PickerValue) -> Option<String> {
        match (self, value) {
            (Self::Date, PickerValue::Date(d)) => Some(d.format(CHRONO_DATE).to_string()),
            (Self::Date, PickerValue::DateTime(dt)) => Some(dt.format(CHRONO_DATE).to_string()),
            (Self::DateTime, PickerValue::DateTime(dt)) => {
                Some(dt.format(&format!("{CHRONO_DATE} {CHRONO_TIME}")).to_string())
            }
            (Self::Time, PickerValue::Time(t)) => Some(t.format(CHRONO_TIME).to_string()),
            (Self::Time, PickerValue::DateTime(dt)) => Some(dt.format(CHRONO_TIME).to_string()),
            _ => None,
        }
    }

    /// Parse text entered in an input of this kind.
    pub fn parse(self, text: &str) -> Option<PickerValue> {
        let text = text.trim();
        match self {
            Self::Date => NaiveDate::parse_from_str(text, CHRONO_DATE)
                .ok()
                .map(PickerValue::Date),
            Self::DateTime => {
                NaiveDateTime::parse_from_str(text, &format!("{CHRONO_DATE} {CHRONO_TIME}"))
                    .ok()
                    .map(PickerValue::DateTime)
            }
            Self::Time => NaiveTime::parse_from_str(text, CHRONO_TIME)
                .ok()
                .map(PickerValue::Time),
        }
    }

    fn data_value(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
        }
    }
}

/// Tag every picker input under `root`. Returns how many were bound.
pub fn bind_pickers(root: &mut Element) -> usize {
    let mut bound = 0;
    for kind in PickerKind::ALL {
        let Some(selector) = Selector::parse(&format!("input.{}", kind.class())) else {
            continue;
        };
        for id in select_all(root, &selector) {
            let Some(input) = find_element_mut(root, &id) else {
                continue;
            };
            input.set_attr("data-picker", kind.data_value());
            if let Some(date) = kind.date_format() {
                input.set_attr("data-date-format", date);
            }
            if let Some(time) = kind.time_format() {
                input.set_attr("data-time-format", time);
                input.set_attr("data-show-second", "true");
            }
            bound += 1;
        }
    }
    log::debug!("[pickers] bound {} inputs", bound);
    bound
}
