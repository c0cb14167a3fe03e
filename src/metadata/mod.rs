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

//! Compiled-in region data: every selectable territory with its calling
//! code, and the numbering plan of each of them.

mod numbering_plans;
mod territories;

pub use numbering_plans::numbering_plan;
pub use territories::{MAIN_REGIONS_FOR_SHARED_CODES, TERRITORIES};

/// One selectable territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Territory {
    /// ISO 3166-1 alpha-2 identifier, e.g. `IN`.
    pub id: &'static str,
    /// English display name.
    pub name: &'static str,
    pub calling_code: u16,
}

impl Territory {
    pub const fn new(id: &'static str, name: &'static str, calling_code: u16) -> Self {
        Self { id, name, calling_code }
    }
}

/// Describes which national significant numbers are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumberDesc {
    pub national_number_pattern: &'static str,
    /// Sorted ascending.
    pub possible_lengths: &'static [usize],
}

/// A grouping rule for national significant numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Pattern a complete national number matches, one capture per group.
    pub pattern: &'static str,
    /// `(min, max)` digit count of every capture of `pattern`, in order.
    pub groups: &'static [(usize, usize)],
    /// Template with `$1`, `$2`... standing for the groups.
    pub format: &'static str,
    /// Patterns the beginning of the number must match for this rule to
    /// apply, from least to most specific. Empty means any number.
    pub leading_digits_pattern: &'static [&'static str],
    /// How the national prefix attaches to the first group: `$1` is
    /// replaced by the first group template. `None` separates the prefix
    /// from the formatted number with a space.
    pub national_prefix_formatting_rule: Option<&'static str>,
}

impl NumberFormat {
    pub fn max_digits(&self) -> usize {
        self.groups.iter().map(|(_, max)| max).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingPlan {
    pub general_desc: PhoneNumberDesc,
    /// Digits dialled before the national significant number inside the
    /// country, e.g. `0` in the United Kingdom.
    pub national_prefix: Option<&'static str>,
    /// Rule used for a typed national prefix before any grouping rule
    /// applies.
    pub national_prefix_formatting_rule: Option<&'static str>,
    pub number_format: &'static [NumberFormat],
    /// Rules used after `+<calling code>`. Empty means `number_format`
    /// applies there too.
    pub intl_number_format: &'static [NumberFormat],
    /// National significant number used for input placeholders.
    pub example_number: &'static str,
}

impl NumberingPlan {
    pub fn formats_for(&self, international: bool) -> &'static [NumberFormat] {
        if international && !self.intl_number_format.is_empty() {
            self.intl_number_format
        } else {
            self.number_format
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use regex::Regex;

    use super::{MAIN_REGIONS_FOR_SHARED_CODES, TERRITORIES, numbering_plan};

    #[test]
    fn territory_ids_are_unique_and_sorted() {
        let ids = TERRITORIES.iter().map(|t| t.id).collect::<Vec<_>>();
        let unique = ids.iter().collect::<HashSet<_>>();
        assert_eq!(ids.len(), unique.len());

        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(ids.iter().all(|id| id.len() == 2 && id.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn main_regions_exist() {
        for id in MAIN_REGIONS_FOR_SHARED_CODES {
            assert!(TERRITORIES.iter().any(|t| t.id == *id), "missing {id}");
        }
    }

    #[test]
    fn every_territory_has_a_plan() {
        let missing = TERRITORIES
            .iter()
            .filter(|t| numbering_plan(t.id).is_none())
            .map(|t| t.id)
            .collect::<Vec<_>>();
        assert!(missing.is_empty(), "no numbering plan for {missing:?}");
    }

    #[test]
    fn example_numbers_have_possible_lengths() {
        for territory in TERRITORIES {
            let Some(plan) = numbering_plan(territory.id) else {
                continue;
            };
            let lengths = plan.general_desc.possible_lengths;
            assert!(
                lengths.contains(&plan.example_number.len()),
                "{}: example {} has impossible length",
                territory.id,
                plan.example_number
            );
            assert!(lengths.windows(2).all(|w| w[0] < w[1]), "{} lengths unsorted", territory.id);
        }
    }

    #[test]
    fn format_groups_follow_their_pattern() {
        for territory in TERRITORIES {
            let Some(plan) = numbering_plan(territory.id) else {
                continue;
            };
            for format in plan.number_format.iter().chain(plan.intl_number_format) {
                let pattern = Regex::new(format.pattern).unwrap();
                assert_eq!(pattern.captures_len() - 1, format.groups.len(), "{}", format.pattern);
                assert!(format.groups.iter().all(|(min, max)| min <= max));
                for leading_digits in format.leading_digits_pattern {
                    let compiled = Regex::new(leading_digits);
                    assert!(compiled.is_ok(), "{}: {leading_digits}", territory.id);
                }
            }
        }
    }
}
