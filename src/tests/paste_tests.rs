use crate::{PastedNumber, Region};

use super::{get_resolver, region_code::RegionCode};

fn pasted(code: Option<&str>, local_digits: &str) -> Option<PastedNumber> {
    Some(PastedNumber {
        detected_calling_code: code.map(str::to_owned),
        local_digits: local_digits.to_owned(),
    })
}

#[test]
fn parses_code_and_number() {
    let resolver = get_resolver();
    assert_eq!(resolver.parse_pasted_text("+91 98765 43210"), pasted(Some("91"), "9876543210"));
    assert_eq!(resolver.parse_pasted_text("  +44 20-7031-3000 "), pasted(Some("44"), "2070313000"));
    assert_eq!(resolver.parse_pasted_text("+1 (650) 253-0000"), pasted(Some("1"), "6502530000"));
    assert_eq!(resolver.parse_pasted_text("+999 12345"), pasted(Some("999"), "12345"));
    assert_eq!(resolver.parse_pasted_text("98765 43210"), pasted(None, "9876543210"));
}

#[test]
fn splits_glued_calling_code() {
    let resolver = get_resolver();
    assert_eq!(resolver.parse_pasted_text("+919876543210"), pasted(Some("91"), "9876543210"));
    assert_eq!(resolver.parse_pasted_text("+16502530000"), pasted(Some("1"), "6502530000"));
    assert_eq!(resolver.parse_pasted_text("+37612345"), pasted(Some("376"), "12345"));
    // No real code starts these digits; the greedy reading stays.
    assert_eq!(resolver.parse_pasted_text("+99912345"), pasted(Some("9991"), "2345"));
}

#[test]
fn maps_unicode_digits() {
    let resolver = get_resolver();
    assert_eq!(
        resolver.parse_pasted_text("\u{FF0B}\u{FF19}\u{FF11} 98765 43210"),
        pasted(Some("91"), "9876543210")
    );
}

#[test]
fn no_digits_no_number() {
    let resolver = get_resolver();
    assert_eq!(resolver.parse_pasted_text(""), None);
    assert_eq!(resolver.parse_pasted_text("hello"), None);
    assert_eq!(resolver.parse_pasted_text("+"), None);
    assert_eq!(resolver.parse_pasted_text("- ( )"), None);
}

#[test]
fn routes_to_the_owning_region() {
    let mut resolver = get_resolver();
    let number = resolver.parse_pasted_text("+44 20 7031 3000").unwrap();
    assert_eq!(resolver.route_pasted(&number), Region::Known(RegionCode::gb()));
    assert_eq!(resolver.selected_region(), &Region::Known(RegionCode::gb()));
    assert!(resolver.state().user_override());
}

#[test]
fn unknown_code_routes_to_custom() {
    let mut resolver = get_resolver();
    let number = resolver.parse_pasted_text("+999 12345").unwrap();
    assert_eq!(number.detected_calling_code.as_deref(), Some("999"));
    let region = resolver.route_pasted(&number);
    assert_eq!(region, Region::Custom(Some("999".to_owned())));
    assert_eq!(resolver.selected_region(), &region);
    assert_eq!(resolver.calling_code_for(&region), "+999");
}

#[test]
fn keeps_region_sharing_the_code() {
    let mut resolver = get_resolver();
    resolver.select_region(Region::Known(RegionCode::ca())).unwrap();
    let number = resolver.parse_pasted_text("+1 416 555 0123").unwrap();
    assert_eq!(resolver.route_pasted(&number), Region::Known(RegionCode::ca()));

    let number = resolver.parse_pasted_text("416 555 0123").unwrap();
    assert_eq!(resolver.route_pasted(&number), Region::Known(RegionCode::ca()));
}
