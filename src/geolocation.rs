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

//! One-shot lookup of the caller's region.

use async_trait::async_trait;
use log::debug;

use crate::resolver::errors::NotDetected;

/// Source of the caller's region id. The resolver only applies the answer;
/// how it is obtained is up to the implementation.
#[async_trait]
pub trait RegionLocator: Send + Sync {
    /// Two-letter region id, in any letter case.
    async fn locate(&self) -> Result<String, NotDetected>;
}

/// Reads the region id stored under `region_field` in a JSON `body`.
pub fn region_from_response(body: &str, region_field: &str) -> Result<String, NotDetected> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| NotDetected::MalformedResponse)?;
    let region = value
        .get(region_field)
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|region| !region.is_empty())
        .ok_or(NotDetected::MalformedResponse)?;
    debug!("Geolocation answered with region {region}");
    Ok(region.to_ascii_uppercase())
}

/// Always answers with the same outcome. Handy for tests and for callers
/// that know the region from elsewhere.
pub struct FixedRegionLocator(pub Result<String, NotDetected>);

#[async_trait]
impl RegionLocator for FixedRegionLocator {
    async fn locate(&self) -> Result<String, NotDetected> {
        self.0.clone()
    }
}

#[cfg(feature = "geolocation")]
pub use http::HttpRegionLocator;

#[cfg(feature = "geolocation")]
mod http {
    use async_trait::async_trait;
    use log::warn;

    use super::{RegionLocator, region_from_response};
    use crate::{config::ResolverConfig, resolver::errors::NotDetected};

    /// Asks an ipapi-style JSON endpoint where the caller is.
    pub struct HttpRegionLocator {
        client: reqwest::Client,
        endpoint: String,
        region_field: String,
    }

    impl HttpRegionLocator {
        pub fn new(config: &ResolverConfig) -> Self {
            Self::with_client(reqwest::Client::new(), config)
        }

        pub fn with_client(client: reqwest::Client, config: &ResolverConfig) -> Self {
            Self {
                client,
                endpoint: config.geolocation_endpoint.clone(),
                region_field: config.region_field.clone(),
            }
        }
    }

    #[async_trait]
    impl RegionLocator for HttpRegionLocator {
        async fn locate(&self) -> Result<String, NotDetected> {
            let response = self
                .client
                .get(&self.endpoint)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|err| {
                    warn!("Geolocation request to {} failed: {err}", self.endpoint);
                    NotDetected::Request(err.to_string())
                })?;
            let body = response
                .text()
                .await
                .map_err(|err| NotDetected::Request(err.to_string()))?;
            region_from_response(&body, &self.region_field)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NotDetected, region_from_response};

    #[test]
    fn reads_region_field() {
        let body = r#"{"ip": "1.2.3.4", "country_code": "gb", "country_name": "United Kingdom"}"#;
        assert_eq!(region_from_response(body, "country_code"), Ok("GB".to_owned()));
        assert_eq!(region_from_response(r#"{"cc": "DE"}"#, "cc"), Ok("DE".to_owned()));
    }

    #[test]
    fn malformed_responses() {
        for body in ["", "not json", "[]", r#"{"country_code": 42}"#, r#"{"country_code": " "}"#, r#"{}"#] {
            assert_eq!(
                region_from_response(body, "country_code"),
                Err(NotDetected::MalformedResponse),
                "{body}"
            );
        }
    }
}
