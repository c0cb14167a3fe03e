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


use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::helper_constants::{
    FIRST_GROUP_PATTERN, GROUP_PLACEHOLDER_PATTERN, PASTED_NUMBER_PATTERN,
};

pub(super) struct ResolverRegExps {
    /// Compiled leading-digit and grouping patterns of the numbering plans.
    pub regexp_cache: RegexCache,

    /// Tolerant reading of pasted text: an optional `+` with a 1-4 digit
    /// calling code, then the number with spaces, dashes, dots or
    /// parentheses between digits.
    pub pasted_number_pattern: Regex,

    /// The first group placeholder of a format template, replaced by the
    /// national prefix formatting rule when a national prefix was typed.
    pub first_group_capturing_pattern: Regex,

    /// Any group placeholder of a format template; the digit is captured.
    pub group_placeholder_pattern: Regex,
}

impl ResolverRegExps {
    pub fn new() -> Self {
        Self {
            regexp_cache: RegexCache::with_capacity(128),
            pasted_number_pattern: Regex::new(PASTED_NUMBER_PATTERN).unwrap(),
            first_group_capturing_pattern: Regex::new(FIRST_GROUP_PATTERN).unwrap(),
            group_placeholder_pattern: Regex::new(GROUP_PLACEHOLDER_PATTERN).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn check_regexps_are_compiling() {
        super::ResolverRegExps::new();
    }
}
