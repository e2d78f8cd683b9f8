//! Weekday model and day-name normalization.
//!
//! Course requirements and tutor availability are authored by different
//! people (forms, spreadsheet import), so the same day shows up as
//! `"Miércoles"`, `"miercoles"` or `"MIERCOLES"`. Labels are compared through
//! [`day_key`], never byte-for-byte.

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalization key for a day label: trimmed, lower-cased, diacritics
/// stripped.
///
/// Two labels with the same key denote the same day.
///
/// ```
/// use tutor_schedule::models::day_key;
///
/// assert_eq!(day_key(" Miércoles "), "miercoles");
/// assert_eq!(day_key("SÁBADO"), day_key("sabado"));
/// ```
pub fn day_key(label: &str) -> String {
    fold(label.trim())
}

/// Lower-cases and strips combining marks (NFD decomposition).
pub(crate) fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// One of the seven calendar weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekDay {
    /// All weekdays, Monday first.
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    /// Canonical label used by the academy's forms.
    pub fn name(self) -> &'static str {
        match self {
            WeekDay::Monday => "Lunes",
            WeekDay::Tuesday => "Martes",
            WeekDay::Wednesday => "Miércoles",
            WeekDay::Thursday => "Jueves",
            WeekDay::Friday => "Viernes",
            WeekDay::Saturday => "Sábado",
            WeekDay::Sunday => "Domingo",
        }
    }

    /// Recognizes a day label in Spanish or English, full or three-letter,
    /// regardless of case and accents.
    pub fn from_label(label: &str) -> Option<WeekDay> {
        let day = match day_key(label).as_str() {
            "lunes" | "lun" | "monday" | "mon" => WeekDay::Monday,
            "martes" | "mar" | "tuesday" | "tue" => WeekDay::Tuesday,
            "miercoles" | "mie" | "wednesday" | "wed" => WeekDay::Wednesday,
            "jueves" | "jue" | "thursday" | "thu" => WeekDay::Thursday,
            "viernes" | "vie" | "friday" | "fri" => WeekDay::Friday,
            "sabado" | "sab" | "saturday" | "sat" => WeekDay::Saturday,
            "domingo" | "dom" | "sunday" | "sun" => WeekDay::Sunday,
            _ => return None,
        };
        Some(day)
    }

    /// Position in the week, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
