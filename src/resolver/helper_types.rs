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

use super::enums::Region;

/// One entry of the region picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub region: Region,
    pub display_name: &'static str,
    /// Digits only; empty for the custom entry until a code is entered.
    pub calling_code: String,
    pub flag_asset_ref: String,
}

impl CountryEntry {
    /// Calling code as shown to the user, e.g. `+91`.
    pub fn display_calling_code(&self) -> String {
        fast_cat::concat_str!("+", &self.calling_code)
    }
}

/// What `parse_pasted_text` found in pasted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastedNumber {
    /// Calling code written after a `+`, digits only. May be a code no
    /// territory uses.
    pub detected_calling_code: Option<String>,
    /// The rest of the number, digits only.
    pub local_digits: String,
}
