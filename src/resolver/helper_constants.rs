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

// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
/// E.164 caps the whole number, calling code included, at 15 digits.
pub const MAX_LENGTH_E164: usize = 15;
/// Shortest national number accepted for regions without a numbering plan.
pub const MIN_LENGTH_FOR_GENERIC_NSN: usize = 4;

pub const PLUS_CHARS: &'static str = "+\u{FF0B}";
pub const PLUS_SIGN: &'static str = "+";

/// Leading `+` and up to four digits, then digits with spaces and dashes.
/// Four digits is one more than any real calling code; such codes still get
/// routed to the custom region. Only the code digits and the number are
/// captured.
pub const PASTED_NUMBER_PATTERN: &'static str = r"^(?:[+＋](\d{1,4}))?[\s\-.()]*([\d\s\-.()]*\d)";

/// Capturing the first group placeholder of a format template.
pub const FIRST_GROUP_PATTERN: &'static str = r"(\$\d)";

/// Any group placeholder of a format template, capturing its digit.
pub const GROUP_PLACEHOLDER_PATTERN: &'static str = r"\$(\d)";

/// Leading-digit patterns start narrowing rules from the third digit on.
pub const MIN_LEADING_DIGITS_LENGTH: usize = 3;

/// Longest message the deep link builder accepts, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 1000;
/// Shortest phone number, in digits, the deep link builder accepts.
pub const MIN_DEEP_LINK_PHONE_DIGITS: usize = 7;
