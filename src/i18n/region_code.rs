pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Region code standing for a caller-supplied calling code.
    pub fn custom() -> &'static str {
        return "CUSTOM";
    }

    /// Canonical spelling of a region code coming from outside: trimmed
    /// and uppercase.
    pub fn canonicalize(region_code: &str) -> String {
        region_code.trim().to_ascii_uppercase()
    }

    pub fn is_custom(region_code: &str) -> bool {
        Self::canonicalize(region_code) == Self::custom()
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCode;

    #[test]
    fn canonical_region_codes() {
        assert_eq!(RegionCode::canonicalize(" gb "), "GB");
        assert!(RegionCode::is_custom("custom"));
        assert!(!RegionCode::is_custom("CU"));
    }
}
