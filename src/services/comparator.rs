use crate::domain::models::CharCategory;
use std::cmp::Ordering;
use thiserror::Error;

/// Why a pair of characters cannot be ordered.
///
/// Both variants carry the offending input so callers can build their own
/// messages instead of parsing ours.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("cannot compare a letter with a number: '{first}' is a {first_category}, '{second}' is a {second_category}")]
    CrossCategoryMismatch {
        first: char,
        second: char,
        first_category: CharCategory,
        second_category: CharCategory,
    },
    #[error("'{0}' is neither a letter nor a digit")]
    NotAlphanumeric(char),
}

/// Folds the fixed set of Latin accented letters to their base letter.
///
/// Only the enumerated forms below are folded (acute, grave, diaeresis and
/// circumflex over a/e/i/o/u, plus tilde-n). Anything else passes through
/// unchanged; this is deliberately not general Unicode normalization.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'Á' | 'À' | 'Ä' | 'Â' => 'a',
        'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'Ó' | 'Ò' | 'Ö' | 'Ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
        'ñ' | 'Ñ' => 'n',
        _ => c,
    }
}

fn fold_case(c: char) -> char {
    // Full lowercasing can expand to multiple chars; the first one is the
    // ordering key for every single-char input we accept.
    c.to_lowercase().next().unwrap_or(c)
}

/// Checks that `first` and `second` are comparable: each one a letter or an
/// ASCII digit, and both of the same category.
///
/// When both characters are invalid, only the first one (left to right) is
/// named in the error.
pub fn validate(first: char, second: char) -> Result<(), ValidationError> {
    let first_category = CharCategory::of(first);
    let second_category = CharCategory::of(second);

    if matches!(
        (first_category, second_category),
        (CharCategory::Letter, CharCategory::Digit) | (CharCategory::Digit, CharCategory::Letter)
    ) {
        return Err(ValidationError::CrossCategoryMismatch {
            first,
            second,
            first_category,
            second_category,
        });
    }
    if first_category == CharCategory::Other {
        return Err(ValidationError::NotAlphanumeric(first));
    }
    if second_category == CharCategory::Other {
        return Err(ValidationError::NotAlphanumeric(second));
    }
    Ok(())
}

/// Three-way ordering of two characters after accent and case folding.
///
/// Validates the pair first and propagates any [`ValidationError`]. On
/// success the folded code points are compared directly; for ASCII digits
/// that coincides with numeric order.
pub fn compare(first: char, second: char) -> Result<Ordering, ValidationError> {
    validate(first, second)?;

    let a = fold_case(fold_accent(first));
    let b = fold_case(fold_accent(second));
    Ok(a.cmp(&b))
}
