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

use log::trace;
use regex::NoExpand;

use crate::{
    metadata::{NumberFormat, NumberingPlan},
    regex_util::{RegexConsume, RegexFullMatch},
};

use super::{
    errors::InternalLogicError, helper_constants::MIN_LEADING_DIGITS_LENGTH,
    helper_functions::split_into_groups, resolver_regexps::ResolverRegExps,
};

/// Formats a national significant number that may still be incomplete,
/// using the grouping rules of a numbering plan.
pub(super) struct AsYouTypeFormatter<'a> {
    reg_exps: &'a ResolverRegExps,
}

impl<'a> AsYouTypeFormatter<'a> {
    pub fn new(reg_exps: &'a ResolverRegExps) -> Self {
        Self { reg_exps }
    }

    /// `national_prefix` is the prefix the user typed before the national
    /// number, if any. International output (`international == true`) never
    /// carries a national prefix.
    pub fn format_national_number(
        &self,
        national_number: &str,
        plan: &NumberingPlan,
        national_prefix: Option<&str>,
        international: bool,
    ) -> Result<String, InternalLogicError> {
        let national_prefix = national_prefix.filter(|_| !international);
        if national_number.is_empty() {
            return Ok(national_prefix.unwrap_or_default().to_owned());
        }

        let Some(formatting_pattern) =
            self.choose_formatting_pattern(plan.formats_for(international), national_number)?
        else {
            trace!("No formatting rule for '{national_number}', leaving it as typed");
            let rule = plan.national_prefix_formatting_rule;
            return Ok(self.attach_national_prefix_to_digits(
                national_number,
                rule,
                national_prefix,
            ));
        };
        let rule = formatting_pattern.national_prefix_formatting_rule;

        // Nothing to group until the first group is complete.
        let first_group_min = formatting_pattern.groups.first().map_or(0, |(min, _)| *min);
        if national_number.len() <= first_group_min {
            return Ok(self.attach_national_prefix_to_digits(
                national_number,
                rule,
                national_prefix,
            ));
        }

        let groups = split_into_groups(national_number, formatting_pattern.groups);
        let template = formatting_pattern.format;
        trace!("Formatting '{national_number}' with template '{template}'");

        let formatted = match (national_prefix, rule) {
            (Some(_), Some(rule)) => {
                let template = self.reg_exps.first_group_capturing_pattern.replace(template, rule);
                self.render_template(&template, &groups)
            }
            (Some(prefix), None) => {
                let rendered = self.render_template(template, &groups);
                fast_cat::concat_str!(prefix, " ", &rendered)
            }
            (None, _) => self.render_template(template, &groups),
        };
        Ok(formatted)
    }

    /// Among the rules whose leading digits match, prefers one whose
    /// pattern matches the whole number, then the first one that can still
    /// hold it. When every matching rule is too short, the first matching
    /// one is used and the extra digits end up in its last group.
    fn choose_formatting_pattern<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Result<Option<&'b NumberFormat>, InternalLogicError> {
        let mut fitting = None;
        let mut overflowing = None;
        for format in available_formats {
            if !self.leading_digits_match(format, national_number)? {
                continue;
            }
            let anchored = fast_cat::concat_str!("^(?:", format.pattern, ")$");
            if self.reg_exps.regexp_cache.get_regex(&anchored)?.full_match(national_number) {
                return Ok(Some(format));
            }
            if national_number.len() <= format.max_digits() {
                fitting.get_or_insert(format);
            } else {
                overflowing.get_or_insert(format);
            }
        }
        Ok(fitting.or(overflowing))
    }

    /// Leading-digit patterns grow more specific with the number of digits
    /// they look at; the one for the digits typed so far decides.
    fn leading_digits_match(
        &self,
        format: &NumberFormat,
        national_number: &str,
    ) -> Result<bool, InternalLogicError> {
        let patterns = format.leading_digits_pattern;
        if patterns.is_empty() {
            return Ok(true);
        }
        let index = national_number
            .len()
            .saturating_sub(MIN_LEADING_DIGITS_LENGTH)
            .min(patterns.len() - 1);
        let regex = self.reg_exps.regexp_cache.get_regex(patterns[index])?;
        Ok(regex.matches_start(national_number))
    }

    fn attach_national_prefix_to_digits(
        &self,
        digits: &str,
        rule: Option<&str>,
        national_prefix: Option<&str>,
    ) -> String {
        match (national_prefix, rule) {
            (None, _) => digits.to_owned(),
            (Some(_), Some(rule)) => self
                .reg_exps
                .first_group_capturing_pattern
                .replace(rule, NoExpand(digits))
                .into_owned(),
            (Some(prefix), None) => fast_cat::concat_str!(prefix, " ", digits),
        }
    }

    /// Fills the `$N` placeholders of `template` with `groups`. Output stops
    /// before the first empty group, so separators never dangle.
    fn render_template(&self, template: &str, groups: &[&str]) -> String {
        let digit_count = groups.iter().map(|group| group.len()).sum::<usize>();
        let mut formatted = String::with_capacity(template.len() + digit_count);
        let mut last_end = 0;
        for captures in self.reg_exps.group_placeholder_pattern.captures_iter(template) {
            let (Some(placeholder), Some(index)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let group = index
                .as_str()
                .parse::<usize>()
                .ok()
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| groups.get(index))
                .copied()
                .unwrap_or_default();
            if group.is_empty() {
                return formatted;
            }
            formatted.push_str(&template[last_end..placeholder.start()]);
            formatted.push_str(group);
            last_end = placeholder.end();
        }
        formatted.push_str(&template[last_end..]);
        formatted
    }
}

#[cfg(test)]
mod tests {
    use crate::metadata::numbering_plan;

    use super::{super::resolver_regexps::ResolverRegExps, AsYouTypeFormatter};

    fn format(number: &str, region: &str, prefix: Option<&str>, international: bool) -> String {
        let reg_exps = ResolverRegExps::new();
        let plan = numbering_plan(region).unwrap();
        AsYouTypeFormatter::new(&reg_exps)
            .format_national_number(number, plan, prefix, international)
            .unwrap()
    }

    #[test]
    fn groups_grow_while_typing() {
        let typed = ["6", "65", "650", "6502", "650253", "6502530", "65025300", "6502530000"];
        let expected = [
            "6", "65", "650", "650-2", "650-253", "650-2530", "(650) 253-00", "(650) 253-0000",
        ];
        for (typed, expected) in typed.iter().zip(expected) {
            assert_eq!(format(typed, "US", None, false), expected);
        }
    }

    #[test]
    fn international_rules_are_preferred_after_calling_code() {
        assert_eq!(format("6502530000", "US", None, true), "650-253-0000");
        assert_eq!(format("6502530000", "US", Some("1"), true), "650-253-0000");
        assert_eq!(format("501234567", "UA", Some("0"), true), "50 123 4567");
    }

    #[test]
    fn national_prefix_rules() {
        assert_eq!(format("2070313000", "GB", Some("0"), false), "020 7031 3000");
        assert_eq!(format("9123456789", "RU", Some("8"), false), "8 (912) 345-67-89");
        assert_eq!(format("6502530000", "US", Some("1"), false), "1 (650) 253-0000");
        assert_eq!(format("501234567", "UA", Some("0"), false), "050 123 4567");
        assert_eq!(format("", "GB", Some("0"), false), "0");
        assert_eq!(format("20", "GB", Some("0"), false), "020");
        assert_eq!(format("912", "RU", Some("8"), false), "8 912");
    }

    #[test]
    fn overflow_goes_to_last_group() {
        assert_eq!(format("987654321012", "IN", None, false), "98765 4321012");
    }

    #[test]
    fn leading_digits_pick_the_rule() {
        assert_eq!(format("9876543210", "IN", None, false), "98765 43210");
        assert_eq!(format("1123456789", "IN", None, false), "11 2345 6789");
        assert_eq!(format("15123456789", "DE", None, false), "1512 3456789");
        assert_eq!(format("3012345678", "DE", None, false), "30 12345678");
        assert_eq!(format("6641234567", "AT", None, false), "664 1234567");
    }

    #[test]
    fn complete_numbers_use_the_rule_matching_them_whole() {
        // Seven digits match the local rule, ten the area code one.
        assert_eq!(format("6502530", "US", None, false), "650-2530");
        assert_eq!(format("6502530000", "US", None, false), "(650) 253-0000");
    }
}
