use crate::{Region, TERRITORIES};

use super::{get_resolver, region_code::RegionCode};

#[test]
fn empty_input_gives_empty_output_for_every_region() {
    let resolver = get_resolver();
    for entry in resolver.load_regions() {
        assert_eq!(resolver.format_as_you_type("", &entry.region), "", "{}", entry.region);
        assert_eq!(resolver.format_as_you_type(" -()", &entry.region), "", "{}", entry.region);
    }
}

#[test]
fn formats_while_typing() {
    let resolver = get_resolver();
    let india = Region::Known(RegionCode::r#in());
    let steps = [
        ("9", "9"),
        ("98765", "98765"),
        ("987654", "98765 4"),
        ("98765 432", "98765 432"),
        ("9876543210", "98765 43210"),
    ];
    for (typed, expected) in steps {
        assert_eq!(resolver.format_as_you_type(typed, &india), expected);
    }

    let us = Region::Known(RegionCode::us());
    assert_eq!(resolver.format_as_you_type("650253", &us), "650-253");
    assert_eq!(resolver.format_as_you_type("65025300", &us), "(650) 253-00");
    assert_eq!(resolver.format_as_you_type("650-253-0000", &us), "(650) 253-0000");
    assert_eq!(resolver.format_as_you_type("16502530000", &us), "1 (650) 253-0000");
}

#[test]
fn national_prefix_is_kept() {
    let resolver = get_resolver();
    let gb = Region::Known(RegionCode::gb());
    assert_eq!(resolver.format_as_you_type("0", &gb), "0");
    assert_eq!(resolver.format_as_you_type("07400", &gb), "07400");
    assert_eq!(resolver.format_as_you_type("07400123456", &gb), "07400 123456");
    assert_eq!(resolver.format_as_you_type("02070313000", &gb), "020 7031 3000");

    let ru = Region::Known(RegionCode::ru());
    assert_eq!(resolver.format_as_you_type("89123456789", &ru), "8 (912) 345-67-89");
}

#[test]
fn international_input_uses_the_code_owner() {
    let resolver = get_resolver();
    let india = Region::Known(RegionCode::r#in());
    assert_eq!(resolver.format_as_you_type("+", &india), "+");
    assert_eq!(resolver.format_as_you_type("+1", &india), "+1");
    assert_eq!(resolver.format_as_you_type("+1650", &india), "+1 650");
    assert_eq!(resolver.format_as_you_type("+16502530000", &india), "+1 650-253-0000");
    assert_eq!(resolver.format_as_you_type("+91 9876543210", &india), "+91 98765 43210");
    assert_eq!(resolver.format_as_you_type("+7 9123456789", &india), "+7 912 345-67-89");
    assert_eq!(resolver.format_as_you_type("+376 312345", &india), "+376 312 345");
    assert_eq!(resolver.format_as_you_type("+380501234567", &india), "+380 50 123 4567");
    assert_eq!(resolver.format_as_you_type("+999 123", &india), "+999123");
}

#[test]
fn overflow_and_unknown_rules() {
    let resolver = get_resolver();
    let india = Region::Known(RegionCode::r#in());
    assert_eq!(resolver.format_as_you_type("9876543210987", &india), "98765 43210987");
    assert_eq!(
        resolver.format_as_you_type("123456789012345678", &india),
        "123456789012345678"
    );

    assert_eq!(resolver.format_as_you_type("12-34", &Region::Known("XX")), "1234");
    assert_eq!(resolver.format_as_you_type("12-34", &Region::Custom(None)), "1234");
}

#[test]
fn every_region_groups_its_numbers() {
    let resolver = get_resolver();
    let ukraine = Region::Known(RegionCode::ua());
    assert_eq!(resolver.format_as_you_type("0501234567", &ukraine), "050 123 4567");
    assert_eq!(resolver.format_as_you_type("050123", &ukraine), "050 123");

    let andorra = Region::Known(RegionCode::ad());
    assert_eq!(resolver.format_as_you_type("312345", &andorra), "312 345");

    let germany = Region::Known(RegionCode::de());
    assert_eq!(resolver.format_as_you_type("0301234567", &germany), "030 1234567");
    assert_eq!(resolver.format_as_you_type("015123456789", &germany), "01512 3456789");

    let austria = Region::Known(RegionCode::at());
    assert_eq!(resolver.format_as_you_type("06641234567", &austria), "0664 1234567");

    let hungary = Region::Known(RegionCode::hu());
    assert_eq!(resolver.format_as_you_type("06201234567", &hungary), "06 20 123 4567");
}

#[test]
fn custom_region_borrows_rules_of_its_code() {
    let resolver = get_resolver();
    let custom = Region::Custom(Some("44".to_owned()));
    assert_eq!(resolver.format_as_you_type("7400123456", &custom), "7400 123456");
    let unknown = Region::Custom(Some("999".to_owned()));
    assert_eq!(resolver.format_as_you_type("7400 123456", &unknown), "7400123456");
}

#[test]
fn unicode_digits_are_mapped() {
    let resolver = get_resolver();
    let india = Region::Known(RegionCode::r#in());
    assert_eq!(
        resolver.format_as_you_type("\u{FF19}\u{FF18}\u{FF17}\u{FF16}\u{FF15}\u{FF14}", &india),
        "98765 4"
    );
    assert_eq!(resolver.format_as_you_type("\u{FF0B}91", &india), "+91");
}

#[test]
fn formatting_is_idempotent_on_valid_numbers() {
    let resolver = get_resolver();
    for territory in TERRITORIES {
        let region = Region::Known(territory.id);
        let Some(example) = resolver.example_number(&region) else {
            continue;
        };
        assert!(resolver.validate(&example, &region), "{}: {example}", territory.id);
        assert_eq!(resolver.format_as_you_type(&example, &region), example, "{}", territory.id);

        let international = resolver.format_as_you_type(
            &resolver.normalize(&example, &resolver.calling_code_for(&region)),
            &region,
        );
        assert!(resolver.validate(&international, &region), "{}: {international}", territory.id);
        assert_eq!(resolver.format_as_you_type(&international, &region), international);
    }

    let typed = [
        ("020 7031 3000", RegionCode::gb()),
        ("8 (912) 345-67-89", RegionCode::ru()),
        ("1 (650) 253-0000", RegionCode::us()),
        ("+91 98765 43210", RegionCode::r#in()),
    ];
    for (number, region_id) in typed {
        let region = Region::Known(region_id);
        assert_eq!(resolver.format_as_you_type(number, &region), number);
    }
}
