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

//! Resolver settings. Every field has a default, so an empty JSON object
//! is a valid config.

use serde::Deserialize;

use crate::resolver::errors::ConfigError;

const FLAG_CODE_PLACEHOLDER: &str = "{code}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Region selected before detection or user choice. Falls back to the
    /// first table entry when it is not in the table.
    pub fallback_region: String,
    /// JSON endpoint answering with the caller's region.
    pub geolocation_endpoint: String,
    /// Field of the geolocation response holding the two-letter region id.
    pub region_field: String,
    /// Flag image URL; `{code}` is replaced by the lowercase region id.
    pub flag_url_template: String,
    /// Flag shown for the custom region.
    pub custom_flag_asset: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_region: "IN".to_owned(),
            geolocation_endpoint: "https://ipapi.co/json/".to_owned(),
            region_field: "country_code".to_owned(),
            flag_url_template: "https://flagcdn.com/24x18/{code}.png".to_owned(),
            custom_flag_asset: "assets/custom-flag.svg".to_owned(),
        }
    }
}

impl ResolverConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn flag_url(&self, region_id: &str) -> String {
        self.flag_url_template
            .replace(FLAG_CODE_PLACEHOLDER, &region_id.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::ResolverConfig;

    #[test]
    fn missing_fields_take_defaults() {
        let config = ResolverConfig::from_json(r#"{"fallback_region": "GB"}"#).unwrap();
        assert_eq!(config.fallback_region, "GB");
        assert_eq!(config.region_field, "country_code");
        assert_eq!(ResolverConfig::from_json("{}").unwrap(), ResolverConfig::default());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(ResolverConfig::from_json("{fallback_region:").is_err());
        assert!(ResolverConfig::from_json(r#"{"fallback_region": 7}"#).is_err());
    }

    #[test]
    fn builds_flag_urls() {
        let config = ResolverConfig::default();
        assert_eq!(config.flag_url("IN"), "https://flagcdn.com/24x18/in.png");
    }
}
