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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Region auto-detection failed or was dropped. Never fatal: the selected
/// region stays what it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotDetected {
    #[error("Geolocation request failed: {0}")]
    Request(String),
    #[error("Geolocation response carried no region code")]
    MalformedResponse,
    #[error("Detected region {0} is not supported")]
    UnsupportedRegion(String),
    /// The user picked a region before the lookup finished.
    #[error("Detected region discarded, a region was already selected")]
    Superseded,
}

/// A region id or calling code missing from the territory table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported region or calling code: {0}")]
pub struct UnsupportedRegion(pub String);

/// Why a number failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("The number is empty")]
    Empty,
    /// The region or the number's country calling code is unknown.
    #[error("The number has an invalid country calling code")]
    InvalidCountryCode,
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than the shortest valid numbers for this region,
    /// shorter than the longest valid numbers for this region, and does not
    /// itself have a number length that matches valid numbers for this region.
    #[error("\
    The number is longer than the shortest valid numbers for this region,\
    shorter than the longest valid numbers for this region, and does not\
    itself have a number length that matches valid numbers for this region\
    ")]
    InvalidLength,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
    #[error("Number not matched a valid number pattern")]
    NotMatchedPattern,
}

#[derive(Debug, PartialEq, Error)]
pub enum DeepLinkError {
    #[error("Phone number must have at least {min} digits, got {actual}")]
    InvalidPhone { min: usize, actual: usize },
    #[error("Message is too long ({actual} characters, max is {max})")]
    MessageTooLong { max: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, PartialEq, Error)]
pub(crate) enum InternalLogicError {
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
}
