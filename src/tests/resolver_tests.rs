use std::collections::HashSet;

use crate::{
    DeepLinkKind, PhoneResolver, Region, ResolverConfig, TERRITORIES, UnsupportedRegion,
    ValidationError, numbering_plan,
};

use super::{get_resolver, get_resolver_with_config, init_logging, region_code::RegionCode};

#[test]
fn load_regions_lists_every_region_once() {
    let resolver = get_resolver();
    let entries = resolver.load_regions();
    assert_eq!(entries.len(), TERRITORIES.len() + 1);

    let ids = entries.iter().map(|entry| entry.region.id()).collect::<Vec<_>>();
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    assert_eq!(entries.iter().filter(|entry| entry.region.is_custom()).count(), 1);
    assert!(entries.last().unwrap().region.is_custom());

    let known = &ids[..ids.len() - 1];
    assert!(known.windows(2).all(|pair| pair[0] < pair[1]));

    let india = entries
        .iter()
        .find(|entry| entry.region == Region::Known(RegionCode::r#in()))
        .unwrap();
    assert_eq!(india.display_name, "India");
    assert_eq!(india.calling_code, "91");
    assert_eq!(india.display_calling_code(), "+91");
    assert_eq!(india.flag_asset_ref, "https://flagcdn.com/24x18/in.png");
}

#[test]
fn custom_entry_carries_the_typed_code() {
    let mut resolver = get_resolver();
    let custom = resolver.load_regions().pop().unwrap();
    assert_eq!(custom.display_name, "Custom");
    assert_eq!(custom.calling_code, "");
    assert_eq!(custom.flag_asset_ref, resolver.config().custom_flag_asset);

    resolver.set_custom_calling_code("+ 999");
    assert_eq!(resolver.selected_region(), &Region::Custom(Some("999".to_owned())));
    let custom = resolver.load_regions().pop().unwrap();
    assert_eq!(custom.calling_code, "999");
    assert_eq!(custom.display_calling_code(), "+999");

    resolver.set_custom_calling_code("");
    assert_eq!(resolver.selected_region(), &Region::Custom(None));
}

#[test]
fn empty_table_degrades_to_passthrough() {
    init_logging();
    let resolver = PhoneResolver::with_territories(&[], ResolverConfig::default());
    let entries = resolver.load_regions();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].region.is_custom());
    assert_eq!(resolver.selected_region(), &Region::Custom(None));

    let region = resolver.selected_region().clone();
    assert_eq!(resolver.format_as_you_type("+1 650 253 0000", &region), "+16502530000");
    assert_eq!(resolver.format_as_you_type("98765 43210", &region), "9876543210");
    assert!(!resolver.validate("+16502530000", &region));
    assert_eq!(resolver.normalize("650 253 0000", "+1"), "+16502530000");
}

#[test]
fn initial_region_comes_from_config() {
    assert_eq!(get_resolver().selected_region(), &Region::Known(RegionCode::r#in()));
    assert!(!get_resolver().state().user_override());

    let resolver = get_resolver_with_config(r#"{"fallback_region": "gb"}"#);
    assert_eq!(resolver.selected_region(), &Region::Known(RegionCode::gb()));

    let resolver = get_resolver_with_config(r#"{"fallback_region": "XX"}"#);
    assert_eq!(resolver.selected_region(), &Region::Known(TERRITORIES[0].id));
}

#[test]
fn select_region() {
    let mut resolver = get_resolver();
    assert_eq!(
        resolver.select_region(Region::Known("XX")),
        Err(UnsupportedRegion("XX".to_owned()))
    );
    assert_eq!(resolver.selected_region(), &Region::Known(RegionCode::r#in()));
    assert!(!resolver.state().user_override());

    resolver.select_region(Region::Known(RegionCode::gb())).unwrap();
    assert_eq!(resolver.selected_region(), &Region::Known(RegionCode::gb()));
    assert!(resolver.state().user_override());

    resolver.select_region(Region::Custom(Some("+1-684".to_owned()))).unwrap();
    assert_eq!(resolver.selected_region(), &Region::Custom(Some("1684".to_owned())));
}

#[test]
fn region_for_id() {
    let resolver = get_resolver();
    assert_eq!(resolver.region_for_id(" gb"), Ok(Region::Known(RegionCode::gb())));
    assert_eq!(resolver.region_for_id("custom"), Ok(Region::Custom(None)));
    assert_eq!(resolver.region_for_id("xx"), Err(UnsupportedRegion("XX".to_owned())));
}

#[test]
fn resolve_calling_code_prefers_main_region() {
    let resolver = get_resolver();
    assert_eq!(resolver.resolve_calling_code("+1").unwrap().id, RegionCode::us());
    assert_eq!(resolver.resolve_calling_code("7").unwrap().id, RegionCode::ru());
    assert_eq!(resolver.resolve_calling_code("44").unwrap().id, RegionCode::gb());
    assert_eq!(resolver.resolve_calling_code("+91").unwrap().id, RegionCode::r#in());
    assert!(resolver.resolve_calling_code("999").is_err());
    assert!(resolver.resolve_calling_code("").is_err());
    assert!(resolver.resolve_calling_code("+00044").is_err());

    assert_eq!(resolver.get_region_code_for_country_code(7), RegionCode::ru());
    assert_eq!(resolver.get_region_code_for_country_code(999), RegionCode::zz());
}

#[test]
fn calling_code_for() {
    let resolver = get_resolver();
    assert_eq!(resolver.calling_code_for(&Region::Known(RegionCode::r#in())), "+91");
    assert_eq!(resolver.calling_code_for(&Region::Known(RegionCode::kz())), "+7");
    assert_eq!(resolver.calling_code_for(&Region::Custom(Some("999".to_owned()))), "+999");
    assert_eq!(resolver.calling_code_for(&Region::Custom(None)), "+");
    assert_eq!(resolver.calling_code_for(&Region::Known("XX")), "+");
}

#[test]
fn search_regions() {
    let resolver = get_resolver();
    let names = |query: &str| {
        resolver
            .search_regions(query)
            .into_iter()
            .map(|entry| entry.display_name)
            .collect::<Vec<_>>()
    };

    let found = names("ind");
    assert!(found.contains(&"India"));
    assert!(found.contains(&"Indonesia"));
    assert!(!found.contains(&"Custom"));

    assert!(names("+91").contains(&"India"));
    assert!(names("  UNITED KINGDOM ").contains(&"United Kingdom"));
    assert!(names("cus").contains(&"Custom"));
    assert!(names("zzzz").is_empty());
    assert_eq!(resolver.search_regions("").len(), TERRITORIES.len() + 1);
}

#[test]
fn example_numbers() {
    let resolver = get_resolver();
    assert_eq!(
        resolver.example_number(&Region::Known(RegionCode::r#in())).as_deref(),
        Some("81234 56789")
    );
    assert_eq!(
        resolver.example_number(&Region::Known(RegionCode::us())).as_deref(),
        Some("(201) 555-0123")
    );
    assert_eq!(
        resolver.example_number(&Region::Known(RegionCode::ad())).as_deref(),
        Some("312 345")
    );
    assert_eq!(resolver.example_number(&Region::Custom(None)), None);
    assert_eq!(resolver.example_number(&Region::Custom(Some("999".to_owned()))), None);
}

#[test]
fn validate_national_numbers() {
    let resolver = get_resolver();
    let india = Region::Known(RegionCode::r#in());
    assert!(resolver.validate("98765 43210", &india));
    assert!(resolver.validate("098765-43210", &india));
    assert!(resolver.validate("11 2345 6789", &india));
    assert_eq!(
        resolver.validate_with_reason("0000000000", &india),
        Err(ValidationError::NotMatchedPattern)
    );
    assert_eq!(resolver.validate_with_reason("12345", &india), Err(ValidationError::TooShort));
    assert_eq!(
        resolver.validate_with_reason("98765432101234", &india),
        Err(ValidationError::TooLong)
    );

    let gb = Region::Known(RegionCode::gb());
    assert!(resolver.validate("07400 123456", &gb));
    assert!(resolver.validate("020 7031 3000", &gb));
    assert_eq!(
        resolver.validate_with_reason("6400123456", &gb),
        Err(ValidationError::NotMatchedPattern)
    );

    let us = Region::Known(RegionCode::us());
    assert!(resolver.validate("(650) 253-0000", &us));
    assert!(resolver.validate("1 650 253 0000", &us));
    assert!(!resolver.validate("(150) 253-0000", &us));
}

#[test]
fn validate_international_numbers() {
    let resolver = get_resolver();
    let india = Region::Known(RegionCode::r#in());
    assert!(resolver.validate("+44 7400 123456", &india));
    assert!(resolver.validate("+1 650 253 0000", &india));
    assert!(resolver.validate("+7 912 345-67-89", &Region::Known(RegionCode::kz())));
    assert_eq!(
        resolver.validate_with_reason("+999 12345", &india),
        Err(ValidationError::InvalidCountryCode)
    );
}

#[test]
fn validate_follows_the_plan_of_every_region() {
    let resolver = get_resolver();
    let andorra = Region::Known(RegionCode::ad());
    assert!(resolver.validate("312 345", &andorra));
    assert_eq!(resolver.validate_with_reason("1234", &andorra), Err(ValidationError::TooShort));
    assert_eq!(
        resolver.validate_with_reason("99999999999", &andorra),
        Err(ValidationError::TooLong)
    );
    assert_eq!(
        resolver.validate_with_reason("0312345", &andorra),
        Err(ValidationError::InvalidLength)
    );

    let luxembourg = Region::Known(RegionCode::lu());
    assert!(resolver.validate("628 123 456", &luxembourg));
    assert_eq!(
        resolver.validate_with_reason("0000", &luxembourg),
        Err(ValidationError::NotMatchedPattern)
    );

    let ukraine = Region::Known(RegionCode::ua());
    assert!(resolver.validate("050 123 4567", &ukraine));
    assert_eq!(resolver.validate_with_reason("1234", &ukraine), Err(ValidationError::TooShort));
    assert_eq!(
        resolver.validate_with_reason("020 123 4567", &ukraine),
        Err(ValidationError::NotMatchedPattern)
    );

    let germany = Region::Known(RegionCode::de());
    assert!(resolver.validate("030 1234567", &germany));
    assert!(resolver.validate("0151 23456789", &germany));
    assert!(resolver.validate("0664 1234567", &Region::Known(RegionCode::at())));
}

#[test]
fn national_prefix_and_example_agree_for_every_region() {
    let resolver = get_resolver();
    for territory in TERRITORIES {
        let plan = numbering_plan(territory.id).unwrap();
        let region = Region::Known(territory.id);
        let calling_code = resolver.calling_code_for(&region);
        let expected = format!("{calling_code}{}", plan.example_number);

        assert!(resolver.validate(plan.example_number, &region), "{}", territory.id);
        assert_eq!(resolver.normalize(plan.example_number, &calling_code), expected);

        let Some(national_prefix) = plan.national_prefix else {
            continue;
        };
        let dialled = format!("{national_prefix}{}", plan.example_number);
        assert!(resolver.validate(&dialled, &region), "{}: {dialled}", territory.id);
        assert_eq!(resolver.normalize(&dialled, &calling_code), expected, "{}", territory.id);
    }
}

#[test]
fn validate_is_false_for_unknown_regions_and_empty_input() {
    let resolver = get_resolver();
    assert!(!resolver.validate("98765 43210", &Region::Known("XX")));
    assert!(!resolver.validate("98765 43210", &Region::Custom(None)));
    assert!(!resolver.validate("98765 43210", &Region::Custom(Some("999".to_owned()))));
    assert!(resolver.validate("98765 43210", &Region::Custom(Some("91".to_owned()))));

    let india = Region::Known(RegionCode::r#in());
    assert_eq!(resolver.validate_with_reason("", &india), Err(ValidationError::Empty));
    assert_eq!(resolver.validate_with_reason("+", &india), Err(ValidationError::Empty));
    assert_eq!(resolver.validate_with_reason("call me", &india), Err(ValidationError::Empty));
}

#[test]
fn normalize() {
    let resolver = get_resolver();
    let normalized = resolver.normalize("1234567890", "+1");
    assert!(normalized.starts_with("+1"));
    assert_eq!(normalized, "+11234567890");

    assert_eq!(resolver.normalize("98765 43210", "+91"), "+919876543210");
    assert_eq!(resolver.normalize("098765 43210", "+91"), "+919876543210");
    assert_eq!(resolver.normalize("91 98765 43210", "91"), "+919876543210");
    assert_eq!(resolver.normalize("07400 123456", "+44"), "+447400123456");
    assert_eq!(resolver.normalize("8 (912) 345-67-89", "+7"), "+79123456789");
    assert_eq!(resolver.normalize("030 1234567", "+49"), "+49301234567");
    assert_eq!(resolver.normalize("0151 23456789", "+49"), "+4915123456789");
    assert_eq!(resolver.normalize("0664 1234567", "+43"), "+436641234567");
    assert_eq!(resolver.normalize("06 20 123 4567", "+36"), "+36201234567");
    assert_eq!(resolver.normalize("0 50 123 4567", "+380"), "+380501234567");
    assert_eq!(resolver.normalize("12345", "+999"), "+99912345");
    assert_eq!(resolver.normalize("12-345", ""), "12345");
    assert_eq!(resolver.normalize("", "+91"), "+91");
}

#[test]
fn deep_link_uses_selected_region() {
    let mut resolver = get_resolver();
    assert_eq!(
        resolver.deep_link("98765 43210", "Hi there", DeepLinkKind::Api).unwrap(),
        "https://api.whatsapp.com/send?phone=919876543210&text=Hi%20there"
    );

    resolver.set_custom_calling_code("999");
    assert_eq!(
        resolver.deep_link("1234 5678", "", DeepLinkKind::WaMe).unwrap(),
        "https://wa.me/99912345678?text="
    );
}
