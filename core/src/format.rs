use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::Amount;

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Digit set and grouping separator used when displaying numbers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberLocale {
    /// Extended Arabic-Indic digits grouped with `٬`, as `fa-IR` renders them.
    #[default]
    Persian,
    English,
}

impl NumberLocale {
    pub const ALL: [NumberLocale; 2] = [Self::Persian, Self::English];

    pub const fn group_separator(self) -> char {
        match self {
            Self::Persian => '\u{066C}',
            Self::English => ',',
        }
    }

    pub const fn digit(self, value: u8) -> char {
        let value = value % 10;
        match self {
            Self::Persian => PERSIAN_DIGITS[value as usize],
            Self::English => (b'0' + value) as char,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Persian => "فارسی",
            Self::English => "English",
        }
    }
}

/// Renders the magnitude of `amount` with digit grouping, the sign is dropped.
pub fn format_amount(amount: Amount, locale: NumberLocale) -> String {
    format_grouped(amount.unsigned_abs(), locale)
}

/// Renders a plain count (tile numbers, totals) in the locale's digits.
pub fn format_count(count: usize, locale: NumberLocale) -> String {
    format_grouped(count as u64, locale)
}

fn format_grouped(value: u64, locale: NumberLocale) -> String {
    let mut digits = [0u8; 20];
    let mut len = 0;
    let mut rest = value;
    loop {
        digits[len] = (rest % 10) as u8;
        len += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    let mut out = String::with_capacity(len * 3);
    for position in (0..len).rev() {
        out.push(locale.digit(digits[position]));
        if position > 0 && position % 3 == 0 {
            out.push(locale.group_separator());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_grouping() {
        assert_eq!(format_amount(0, NumberLocale::English), "0");
        assert_eq!(format_amount(999, NumberLocale::English), "999");
        assert_eq!(format_amount(1_000, NumberLocale::English), "1,000");
        assert_eq!(format_amount(20_000_000, NumberLocale::English), "20,000,000");
    }

    #[test]
    fn sign_is_not_rendered() {
        assert_eq!(format_amount(-500_000, NumberLocale::English), "500,000");
        assert_eq!(
            format_amount(Amount::MIN, NumberLocale::English),
            "9,223,372,036,854,775,808"
        );
    }

    #[test]
    fn persian_digits_and_separator() {
        assert_eq!(format_amount(20_000_000, NumberLocale::Persian), "۲۰٬۰۰۰٬۰۰۰");
        assert_eq!(format_amount(-1_500, NumberLocale::Persian), "۱٬۵۰۰");
        assert_eq!(format_count(12, NumberLocale::Persian), "۱۲");
    }
}
