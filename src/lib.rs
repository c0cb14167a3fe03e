mod interfaces;
mod metadata;
mod resolver;
mod regexp_cache;
mod regex_based_matcher;
pub mod config;
pub mod deep_link;
pub mod geolocation;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

pub use config::ResolverConfig;
pub use deep_link::build_deep_link;
pub use geolocation::{FixedRegionLocator, RegionLocator, region_from_response};
#[cfg(feature = "geolocation")]
pub use geolocation::HttpRegionLocator;
pub use metadata::{NumberFormat, NumberingPlan, PhoneNumberDesc, TERRITORIES, Territory, numbering_plan};
pub use resolver::{
    CountryEntry, DeepLinkKind, PastedNumber, PhoneResolver, Region, ResolverState,
    errors::{ConfigError, DeepLinkError, NotDetected, UnsupportedRegion, ValidationError},
};

#[cfg(test)]
mod tests;
