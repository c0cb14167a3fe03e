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

/// Per-session selection state. Owned and mutated only by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverState {
    selected_region: Region,
    /// Set once the user picks a region; a detection result arriving later
    /// must not replace that choice.
    user_override: bool,
}

impl ResolverState {
    pub(crate) fn new(selected_region: Region) -> Self {
        Self { selected_region, user_override: false }
    }

    pub fn selected_region(&self) -> &Region {
        &self.selected_region
    }

    pub fn user_override(&self) -> bool {
        self.user_override
    }

    /// Explicit selection by the user.
    pub(crate) fn select(&mut self, region: Region) {
        self.selected_region = region;
        self.user_override = true;
    }

    /// Selection coming from auto-detection. Returns `false` without
    /// touching the state when the user already chose a region.
    pub(crate) fn apply_detected(&mut self, region: Region) -> bool {
        if self.user_override {
            return false;
        }
        self.selected_region = region;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Region, ResolverState};

    #[test]
    fn detection_applies_until_user_selects() {
        let mut state = ResolverState::new(Region::Known("IN"));
        assert!(state.apply_detected(Region::Known("US")));
        assert_eq!(state.selected_region(), &Region::Known("US"));
        assert!(!state.user_override());

        state.select(Region::Known("GB"));
        assert!(!state.apply_detected(Region::Known("FR")));
        assert_eq!(state.selected_region(), &Region::Known("GB"));
        assert!(state.user_override());
    }
}
