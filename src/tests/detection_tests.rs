use crate::{FixedRegionLocator, NotDetected, Region, RegionLocator};

use super::{get_resolver, region_code::RegionCode};

fn locator(region: &str) -> FixedRegionLocator {
    FixedRegionLocator(Ok(region.to_owned()))
}

#[tokio::test]
async fn detection_selects_region() {
    let mut resolver = get_resolver();
    assert_eq!(resolver.detect_region(&locator("us")).await, Ok(RegionCode::us()));
    assert_eq!(resolver.selected_region(), &Region::Known(RegionCode::us()));
    assert!(!resolver.state().user_override());

    // A second detection may still move the region while the user has not chosen.
    assert_eq!(resolver.detect_region(&locator("GB")).await, Ok(RegionCode::gb()));
}

#[tokio::test]
async fn late_detection_does_not_override_user_choice() {
    let mut resolver = get_resolver();
    let late_answer = locator("US");
    let outcome = late_answer.locate().await;

    resolver.select_region(Region::Known(RegionCode::gb())).unwrap();
    assert_eq!(resolver.apply_detection(outcome), Err(NotDetected::Superseded));
    assert_eq!(resolver.selected_region(), &Region::Known(RegionCode::gb()));

    assert_eq!(
        resolver.detect_region(&locator("US")).await,
        Err(NotDetected::Superseded)
    );
    assert_eq!(resolver.selected_region(), &Region::Known(RegionCode::gb()));
}

#[tokio::test]
async fn failures_leave_state_unchanged() {
    let mut resolver = get_resolver();
    let failing = FixedRegionLocator(Err(NotDetected::Request("connection refused".to_owned())));
    assert_eq!(
        resolver.detect_region(&failing).await,
        Err(NotDetected::Request("connection refused".to_owned()))
    );
    assert_eq!(
        resolver.detect_region(&FixedRegionLocator(Err(NotDetected::MalformedResponse))).await,
        Err(NotDetected::MalformedResponse)
    );
    assert_eq!(
        resolver.detect_region(&locator("XX")).await,
        Err(NotDetected::UnsupportedRegion("XX".to_owned()))
    );
    assert_eq!(
        resolver.detect_region(&locator("custom")).await,
        Err(NotDetected::UnsupportedRegion("CUSTOM".to_owned()))
    );
    assert_eq!(resolver.selected_region(), &Region::Known(RegionCode::r#in()));
}

#[tokio::test]
async fn works_through_trait_objects() {
    let mut resolver = get_resolver();
    let locator: Box<dyn RegionLocator> = Box::new(locator("de"));
    assert_eq!(resolver.detect_region(locator.as_ref()).await, Ok(RegionCode::de()));
}
