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


use log::error;
use super::regex_util::{RegexFullMatch, RegexConsume};

use crate::{interfaces, metadata::PhoneNumberDesc, regexp_cache::{InvalidRegexError, RegexCache}};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(128) }
    }

    fn match_number(
        &self, phone_number: &str,
        number_pattern: &str,
        allow_prefix_match: bool
    ) -> Result<bool, InvalidRegexError> {
        // Alternations are tried leftmost-first, so a short alternative could
        // stop a longer one from matching the whole number; anchor them all.
        let anchored = fast_cat::concat_str!("^(?:", number_pattern, ")");
        let regexp = self.cache.get_regex(&anchored)?;

        if allow_prefix_match {
            Ok(regexp.matches_start(phone_number))
        } else {
            let anchored_full = fast_cat::concat_str!(&anchored, "$");
            Ok(self.cache.get_regex(&anchored_full)?.full_match(phone_number))
        }
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self, number: &str,
        number_desc: &PhoneNumberDesc,
        allow_prefix_match: bool
    ) -> bool {
        let national_number_pattern = number_desc.national_number_pattern;
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        if national_number_pattern.is_empty() {
            return false;
        }
        match self.match_number(number, national_number_pattern, allow_prefix_match) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", national_number_pattern, err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{interfaces::MatcherApi, metadata::PhoneNumberDesc};

    use super::RegexBasedMatcher;

    const GB_DESC: PhoneNumberDesc = PhoneNumberDesc {
        national_number_pattern: r"[1-3]\d{8,9}|7\d{9}",
        possible_lengths: &[9, 10],
    };

    #[test]
    fn matches_whole_number_against_any_alternative() {
        let matcher = RegexBasedMatcher::new();
        assert!(matcher.match_national_number("7400123456", &GB_DESC, false));
        assert!(matcher.match_national_number("2012345678", &GB_DESC, false));
        assert!(!matcher.match_national_number("740012345", &GB_DESC, false));
        assert!(!matcher.match_national_number("5400123456", &GB_DESC, false));
    }

    #[test]
    fn prefix_match_accepts_partial_numbers() {
        let matcher = RegexBasedMatcher::new();
        assert!(matcher.match_national_number("74001", &GB_DESC, true));
        assert!(!matcher.match_national_number("54001", &GB_DESC, true));
    }

    #[test]
    fn empty_pattern_never_matches() {
        let matcher = RegexBasedMatcher::new();
        let desc = PhoneNumberDesc { national_number_pattern: "", possible_lengths: &[] };
        assert!(!matcher.match_national_number("", &desc, true));
    }
}
