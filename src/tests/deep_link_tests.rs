use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::{DeepLinkError, DeepLinkKind, build_deep_link};

#[test]
fn builds_every_link_kind() {
    let phone = "+91 98765 43210";
    let message = "Hello & bye";
    let expected = [
        (DeepLinkKind::Api, "https://api.whatsapp.com/send?phone=919876543210&text=Hello%20%26%20bye"),
        (DeepLinkKind::Web, "https://web.whatsapp.com/send?phone=919876543210&text=Hello%20%26%20bye"),
        (DeepLinkKind::WaMe, "https://wa.me/919876543210?text=Hello%20%26%20bye"),
        (DeepLinkKind::App, "whatsapp://send?phone=919876543210&text=Hello%20%26%20bye"),
    ];
    for (kind, link) in expected {
        assert_eq!(build_deep_link(phone, message, kind).unwrap(), link);
    }
}

#[test]
fn encodes_unicode_messages() {
    assert_eq!(
        build_deep_link("919876543210", "\u{1F44B} ok?", DeepLinkKind::WaMe).unwrap(),
        "https://wa.me/919876543210?text=%F0%9F%91%8B%20ok%3F"
    );
}

#[test]
fn rejects_short_phones() {
    assert_eq!(
        build_deep_link("+1 234-56", "hi", DeepLinkKind::Api),
        Err(DeepLinkError::InvalidPhone { min: 7, actual: 6 })
    );
    assert!(build_deep_link("1234567", "hi", DeepLinkKind::Api).is_ok());
}

#[test]
fn rejects_long_messages() {
    let message = "\u{00E9}".repeat(1000);
    assert!(build_deep_link("919876543210", &message, DeepLinkKind::Api).is_ok());

    let message = "a".repeat(1001);
    assert_eq!(
        build_deep_link("919876543210", &message, DeepLinkKind::Api),
        Err(DeepLinkError::MessageTooLong { max: 1000, actual: 1001 })
    );
}

#[test]
fn link_kind_names() {
    assert_eq!(DeepLinkKind::iter().count(), 4);
    assert_eq!(DeepLinkKind::default(), DeepLinkKind::Api);
    assert_eq!(DeepLinkKind::WaMe.to_string(), "wame");
    assert_eq!(DeepLinkKind::from_str("business"), Ok(DeepLinkKind::WaMe));
    assert_eq!(DeepLinkKind::from_str("Mobile"), Ok(DeepLinkKind::App));
    assert_eq!(DeepLinkKind::from_str("WEB"), Ok(DeepLinkKind::Web));
    assert!(DeepLinkKind::from_str("sms").is_err());
}
