mod as_you_type_tests;
mod deep_link_tests;
mod detection_tests;
mod paste_tests;
mod region_code;
mod resolver_tests;

use std::sync::Once;

use crate::{PhoneResolver, ResolverConfig};

static ONCE: Once = Once::new();

fn init_logging() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}

fn get_resolver() -> PhoneResolver {
    init_logging();
    PhoneResolver::new()
}

fn get_resolver_with_config(json: &str) -> PhoneResolver {
    init_logging();
    PhoneResolver::with_config(ResolverConfig::from_json(json).expect("Config should be valid"))
}
