// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::metadata::PhoneNumberDesc;

use super::{
    errors::ValidationError,
    helper_constants::{
        MAX_LENGTH_E164, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_GENERIC_NSN, PLUS_CHARS, PLUS_SIGN,
    },
};

/// Keeps the decimal digits of `phone_number`, mapping every Unicode decimal
/// digit to its ASCII counterpart.
pub(super) fn normalize_digits_only(phone_number: &str) -> String {
    let normalized = dec_from_char::normalize_decimals(phone_number);
    normalized.chars().filter(char::is_ascii_digit).collect()
}

/// Keeps the digits of `phone_number` and a `+` when it comes before the
/// first digit. Everything else is dropped.
pub(super) fn normalize_diallable_chars_only(phone_number: &str) -> String {
    let normalized = dec_from_char::normalize_decimals(phone_number);
    let mut result = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        if c.is_ascii_digit() {
            result.push(c);
        } else if result.is_empty() && PLUS_CHARS.contains(c) {
            result.push_str(PLUS_SIGN);
        }
    }
    result
}

/// Checks the length of a national significant number against the
/// possible lengths of its description.
pub(super) fn test_number_length(
    phone_number: &str,
    desc: &PhoneNumberDesc,
) -> Result<(), ValidationError> {
    let possible_lengths = desc.possible_lengths;
    // A description without lengths has no valid numbers at all.
    let (Some(&minimum_length), Some(&maximum_length)) =
        (possible_lengths.first(), possible_lengths.last())
    else {
        return Err(ValidationError::InvalidLength);
    };

    let actual_length = phone_number.len();
    if minimum_length == actual_length {
        return Ok(());
    } else if minimum_length > actual_length {
        return Err(ValidationError::TooShort);
    } else if maximum_length < actual_length {
        return Err(ValidationError::TooLong);
    }
    // We skip the first element; we've already checked it.
    return if possible_lengths[1..].contains(&actual_length) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength)
    };
}

/// Length check for regions known only by their calling code: the whole
/// number has to fit E.164.
pub(super) fn test_generic_number_length(
    phone_number: &str,
    country_calling_code: u16,
) -> Result<(), ValidationError> {
    let mut buf = itoa::Buffer::new();
    let code_length = buf.format(country_calling_code).len();
    let maximum_length = MAX_LENGTH_E164.saturating_sub(code_length).min(MAX_LENGTH_FOR_NSN);

    let actual_length = phone_number.len();
    if actual_length < MIN_LENGTH_FOR_GENERIC_NSN {
        Err(ValidationError::TooShort)
    } else if actual_length > maximum_length {
        Err(ValidationError::TooLong)
    } else {
        Ok(())
    }
}

/// Renders `+<code>` followed by the national part, separated by a space
/// when `formatted_number` is not empty.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: &str,
    separator: &str,
    formatted_number: &mut String,
) {
    let new_str = if formatted_number.is_empty() {
        fast_cat::concat_str!(PLUS_SIGN, country_calling_code)
    } else {
        fast_cat::concat_str!(PLUS_SIGN, country_calling_code, separator, &formatted_number)
    };
    *formatted_number = new_str;
}

/// Splits `digits` over groups of `(min, max)` digits. Every group takes as
/// many digits as it can while leaving the minimum for the groups after
/// it; digits beyond the last maximum stay in the last group. Short input
/// fills the groups in order, leaving the trailing ones empty.
pub(super) fn split_into_groups<'a>(digits: &'a str, groups: &[(usize, usize)]) -> Vec<&'a str> {
    let mut result = Vec::with_capacity(groups.len());
    let mut rest = digits;
    let mut min_after = groups.iter().map(|(min, _)| min).sum::<usize>();

    for (index, &(min, max)) in groups.iter().enumerate() {
        min_after -= min;
        let take = if index + 1 == groups.len() {
            rest.len()
        } else if rest.len() >= min + min_after {
            max.min(rest.len() - min_after)
        } else {
            min.min(rest.len())
        };
        let (group, tail) = rest.split_at(take);
        result.push(group);
        rest = tail;
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::metadata::PhoneNumberDesc;

    use super::*;

    #[test]
    fn keeps_only_digits() {
        assert_eq!(normalize_digits_only("+91 (987) 65-43210"), "919876543210");
        assert_eq!(normalize_digits_only("\u{0661}\u{0662}3"), "123");
        assert_eq!(normalize_digits_only(""), "");
    }

    #[test]
    fn keeps_only_leading_plus() {
        assert_eq!(normalize_diallable_chars_only(" +1 (650) 253-0000"), "+16502530000");
        assert_eq!(normalize_diallable_chars_only("\u{FF0B}44 20"), "+4420");
        assert_eq!(normalize_diallable_chars_only("12+34"), "1234");
        assert_eq!(normalize_diallable_chars_only("++12"), "+12");
        assert_eq!(normalize_diallable_chars_only("abc"), "");
    }

    #[test]
    fn number_length_outcomes() {
        let desc = PhoneNumberDesc { national_number_pattern: r"\d+", possible_lengths: &[7, 9, 10] };
        assert_eq!(test_number_length("1234567", &desc), Ok(()));
        assert_eq!(test_number_length("1234567890", &desc), Ok(()));
        assert_eq!(test_number_length("123456", &desc), Err(ValidationError::TooShort));
        assert_eq!(test_number_length("12345678", &desc), Err(ValidationError::InvalidLength));
        assert_eq!(test_number_length("12345678901", &desc), Err(ValidationError::TooLong));

        let empty = PhoneNumberDesc { national_number_pattern: "", possible_lengths: &[] };
        assert_eq!(test_number_length("1234567", &empty), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn generic_length_respects_e164() {
        assert_eq!(test_generic_number_length("123", 376), Err(ValidationError::TooShort));
        assert_eq!(test_generic_number_length("123456", 376), Ok(()));
        assert_eq!(test_generic_number_length("123456789012", 376), Ok(()));
        assert_eq!(test_generic_number_length("1234567890123", 376), Err(ValidationError::TooLong));
    }

    #[test]
    fn prefixes_calling_code() {
        let mut formatted = "98765 43210".to_owned();
        prefix_number_with_country_calling_code("91", " ", &mut formatted);
        assert_eq!(formatted, "+91 98765 43210");

        let mut empty = String::new();
        prefix_number_with_country_calling_code("91", " ", &mut empty);
        assert_eq!(empty, "+91");
    }

    #[test]
    fn splits_digits_over_groups() {
        let fixed = [(3, 3), (3, 3), (4, 4)];
        assert_eq!(split_into_groups("6502530000", &fixed), vec!["650", "253", "0000"]);
        assert_eq!(split_into_groups("65025", &fixed), vec!["650", "25", ""]);
        assert_eq!(split_into_groups("65", &fixed), vec!["65", "", ""]);
        assert_eq!(split_into_groups("650253000012", &fixed), vec!["650", "253", "000012"]);

        let ranged = [(2, 2), (3, 4), (4, 4)];
        assert_eq!(split_into_groups("1123456789", &ranged), vec!["11", "2345", "6789"]);
        assert_eq!(split_into_groups("112345678", &ranged), vec!["11", "234", "5678"]);
        assert_eq!(split_into_groups("1123456", &ranged), vec!["11", "234", "56"]);
    }
}
