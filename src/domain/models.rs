use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Classification of a single character for comparison purposes.
///
/// `Letter` follows Unicode general category Letter; `Digit` is restricted
/// to ASCII decimal digits; everything else is `Other` and not comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharCategory {
    Letter,
    Digit,
    Other,
}

impl CharCategory {
    pub fn of(c: char) -> Self {
        if c.is_alphabetic() {
            CharCategory::Letter
        } else if c.is_ascii_digit() {
            CharCategory::Digit
        } else {
            CharCategory::Other
        }
    }

    /// Header label for human-readable output ("Letters" / "Numbers").
    pub fn plural_label(&self) -> &'static str {
        match self {
            CharCategory::Letter => "Letters",
            CharCategory::Digit => "Numbers",
            CharCategory::Other => "Others",
        }
    }
}

impl fmt::Display for CharCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CharCategory::Letter => "letter",
            CharCategory::Digit => "number",
            CharCategory::Other => "neither a letter nor a digit",
        };
        f.write_str(s)
    }
}

#[derive(Serialize)]
pub struct CompareReport {
    pub first: char,
    pub second: char,
    pub category: CharCategory,
    /// -1, 0, or 1 as scripts expect.
    pub result: i8,
    pub verdict: String,
}

impl CompareReport {
    pub fn new(first: char, second: char, ordering: Ordering) -> Self {
        let verdict = match ordering {
            Ordering::Less => format!("'{first}' comes before '{second}'"),
            Ordering::Equal => "the values are the same".to_string(),
            Ordering::Greater => format!("'{first}' comes after '{second}'"),
        };
        Self {
            first,
            second,
            category: CharCategory::of(first),
            result: match ordering {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            },
            verdict,
        }
    }
}

#[derive(Serialize)]
pub struct ValidateReport {
    pub first: char,
    pub second: char,
    pub first_category: CharCategory,
    pub second_category: CharCategory,
}
