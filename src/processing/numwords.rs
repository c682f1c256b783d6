//! English number-word parsing ("fifteen", "one hundred and three").

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{EtlError, EtlResult};

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [(&str, i64); 8] = [
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALES: [(&str, i64); 5] = [
    ("hundred", 100),
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
];

/// word -> (scale, increment)
static VOCABULARY: Lazy<HashMap<&'static str, (i64, i64)>> = Lazy::new(|| {
    let mut words = HashMap::with_capacity(UNITS.len() + TENS.len() + SCALES.len() + 1);
    words.insert("and", (1, 0));
    for (n, word) in (0_i64..).zip(UNITS) {
        words.insert(word, (1, n));
    }
    for (word, n) in TENS {
        words.insert(word, (1, n));
    }
    for (word, scale) in SCALES {
        words.insert(word, (scale, 0));
    }
    words
});

/// Parse a whitespace-separated English number phrase into an integer.
///
/// Each word updates `current = current * scale + increment`; scale words above "hundred" flush
/// `current` into the running total. Words are matched case-insensitively. An empty phrase is 0.
pub fn words_to_number(phrase: &str) -> EtlResult<i64> {
    let overflow = || EtlError::NumberOverflow {
        phrase: phrase.to_owned(),
    };

    let mut current: i64 = 0;
    let mut result: i64 = 0;
    for word in phrase.split_whitespace() {
        let &(scale, increment) = VOCABULARY
            .get(word.to_ascii_lowercase().as_str())
            .ok_or_else(|| EtlError::UnrecognizedToken {
                word: word.to_owned(),
            })?;

        current = current
            .checked_mul(scale)
            .and_then(|c| c.checked_add(increment))
            .ok_or_else(overflow)?;
        if scale > 100 {
            result = result.checked_add(current).ok_or_else(overflow)?;
            current = 0;
        }
    }
    result.checked_add(current).ok_or_else(overflow)
}
