pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ad() -> &'static str {
        "AD"
    }

    pub fn at() -> &'static str {
        "AT"
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn hu() -> &'static str {
        "HU"
    }

    pub fn r#in() -> &'static str {
        "IN"
    }

    pub fn kz() -> &'static str {
        "KZ"
    }

    pub fn lu() -> &'static str {
        "LU"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    pub fn ua() -> &'static str {
        "UA"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
