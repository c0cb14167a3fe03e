// Copyright (C) 2009 The Libphonenumber Authors
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

use std::collections::{HashMap, VecDeque};

use log::{debug, error, trace, warn};

use super::{
    as_you_type::AsYouTypeFormatter,
    enums::{DeepLinkKind, Region},
    errors::{DeepLinkError, InternalLogicError, NotDetected, UnsupportedRegion, ValidationError},
    helper_constants::{MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, PLUS_SIGN},
    helper_functions::{
        normalize_diallable_chars_only, normalize_digits_only,
        prefix_number_with_country_calling_code, test_generic_number_length, test_number_length,
    },
    helper_types::{CountryEntry, PastedNumber},
    resolver_regexps::ResolverRegExps,
    state::ResolverState,
};
use crate::{
    config::ResolverConfig,
    deep_link::build_deep_link,
    geolocation::RegionLocator,
    i18n::RegionCode,
    interfaces::MatcherApi,
    metadata::{MAIN_REGIONS_FOR_SHARED_CODES, TERRITORIES, Territory, numbering_plan},
    regex_based_matcher::RegexBasedMatcher,
    regex_util::RegexConsume,
};

const CUSTOM_DISPLAY_NAME: &str = "Custom";

pub struct PhoneResolver {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions.
    reg_exps: ResolverRegExps,

    config: ResolverConfig,

    /// Every selectable territory.
    territories: &'static [Territory],

    /// A mapping from a region id to its territory.
    region_to_territory_map: HashMap<&'static str, &'static Territory>,

    /// A mapping from a country calling code to the regions using it, main
    /// region first. NANPA regions share the country calling code 1 and
    /// Russia and Kazakhstan share 7; under this map 1 leads with "US" and 7
    /// with "RU". Sorted by calling code for binary search.
    country_calling_code_to_region_code_map: Vec<(u16, Vec<&'static str>)>,

    state: ResolverState,
}

impl Default for PhoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneResolver {
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self::with_territories(TERRITORIES, config)
    }

    /// Resolver over a custom territory table. An empty table leaves only
    /// the custom region, and every formatting operation passes input
    /// through.
    pub fn with_territories(territories: &'static [Territory], config: ResolverConfig) -> Self {
        let mut instance = Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: ResolverRegExps::new(),
            config,
            territories,
            region_to_territory_map: HashMap::with_capacity(territories.len()),
            country_calling_code_to_region_code_map: Default::default(),
            state: ResolverState::new(Region::Custom(None)),
        };

        // Storing data in a temporary map to make it easier to find other
        // regions that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<u16, VecDeque<&'static str>>::new();
        for territory in territories {
            instance.region_to_territory_map.insert(territory.id, territory);

            let main_country_for_code = MAIN_REGIONS_FOR_SHARED_CODES.contains(&territory.id);
            if let Some(regions) = country_calling_code_to_region_map.get_mut(&territory.calling_code) {
                if main_country_for_code {
                    regions.push_front(territory.id);
                } else {
                    regions.push_back(territory.id);
                }
            } else {
                // For most country calling codes, there will be only one region code.
                country_calling_code_to_region_map
                    .insert(territory.calling_code, VecDeque::from([territory.id]));
            }
        }
        instance.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map
                .into_iter()
                .map(|(code, regions)| (code, Vec::from(regions))),
        );
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(code, _)| *code);

        let fallback = RegionCode::canonicalize(&instance.config.fallback_region);
        let initial_region = match instance.territory(&fallback).or(territories.first()) {
            Some(territory) => Region::Known(territory.id),
            None => Region::Custom(None),
        };
        if initial_region.id() != fallback {
            warn!("Fallback region {fallback} is not in the table, starting with {initial_region}");
        }
        instance.state = ResolverState::new(initial_region);
        instance
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn state(&self) -> &ResolverState {
        &self.state
    }

    pub fn selected_region(&self) -> &Region {
        self.state.selected_region()
    }

    /// Every table region in region-id order, then the custom entry.
    pub fn load_regions(&self) -> Vec<CountryEntry> {
        let mut entries = Vec::with_capacity(self.territories.len() + 1);
        let mut buf = itoa::Buffer::new();
        entries.extend(self.territories.iter().map(|territory| CountryEntry {
            region: Region::Known(territory.id),
            display_name: territory.name,
            calling_code: buf.format(territory.calling_code).to_owned(),
            flag_asset_ref: self.config.flag_url(territory.id),
        }));
        entries.sort_by_key(|entry| entry.region.id().to_owned());
        entries.push(self.custom_entry());
        entries
    }

    fn custom_entry(&self) -> CountryEntry {
        let calling_code = self.selected_region().custom_calling_code().unwrap_or_default();
        CountryEntry {
            region: Region::Custom(Some(calling_code.to_owned()).filter(|code| !code.is_empty())),
            display_name: CUSTOM_DISPLAY_NAME,
            calling_code: calling_code.to_owned(),
            flag_asset_ref: self.config.custom_flag_asset.clone(),
        }
    }

    /// Case-insensitive search over display names and `+code`. The custom
    /// entry matches every prefix of "custom".
    pub fn search_regions(&self, query: &str) -> Vec<CountryEntry> {
        let query = query.trim().to_lowercase();
        self.load_regions()
            .into_iter()
            .filter(|entry| {
                if entry.region.is_custom() {
                    return CUSTOM_DISPLAY_NAME.to_lowercase().starts_with(&query);
                }
                entry.display_name.to_lowercase().contains(&query)
                    || entry.display_calling_code().contains(&query)
            })
            .collect()
    }

    fn territory(&self, region_id: &str) -> Option<&'static Territory> {
        self.region_to_territory_map.get(region_id).copied()
    }

    /// Parses a region id typed by the user or stored by the UI.
    pub fn region_for_id(&self, region_id: &str) -> Result<Region, UnsupportedRegion> {
        if RegionCode::is_custom(region_id) {
            return Ok(Region::Custom(None));
        }
        let region_id = RegionCode::canonicalize(region_id);
        self.territory(&region_id)
            .map(|territory| Region::Known(territory.id))
            .ok_or(UnsupportedRegion(region_id))
    }

    // Returns the region codes that match the specific country calling
    // code, main region first. Empty when no region uses the code.
    fn get_region_codes_for_country_calling_code(&self, country_calling_code: u16) -> &[&'static str] {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
            .unwrap_or_default()
    }

    /// Main region for a calling code, or `ZZ` when no region uses it.
    pub fn get_region_code_for_country_code(&self, country_calling_code: u16) -> &'static str {
        self.get_region_codes_for_country_calling_code(country_calling_code)
            .first()
            .copied()
            .unwrap_or(RegionCode::get_unknown())
    }

    /// Reverse lookup of a calling code (`+` and separators allowed),
    /// preferring the main region of a shared code.
    pub fn resolve_calling_code(&self, calling_code: &str) -> Result<&'static Territory, UnsupportedRegion> {
        let digits = normalize_digits_only(calling_code);
        digits
            .parse::<u16>()
            .ok()
            .filter(|_| digits.len() <= MAX_LENGTH_COUNTRY_CODE)
            .and_then(|code| self.get_region_codes_for_country_calling_code(code).first())
            .and_then(|region_id| self.territory(region_id))
            .ok_or(UnsupportedRegion(digits))
    }

    /// `+`-rendered calling code of `region`; just `+` for a custom region
    /// without a code yet.
    pub fn calling_code_for(&self, region: &Region) -> String {
        match region {
            Region::Known(region_id) => match self.territory(region_id) {
                Some(territory) => {
                    let mut buf = itoa::Buffer::new();
                    let calling_code = buf.format(territory.calling_code);
                    fast_cat::concat_str!(PLUS_SIGN, calling_code)
                }
                None => PLUS_SIGN.to_owned(),
            },
            Region::Custom(Some(code)) => fast_cat::concat_str!(PLUS_SIGN, code),
            Region::Custom(None) => PLUS_SIGN.to_owned(),
        }
    }

    /// Territory whose rules apply to numbers typed for `region`.
    fn territory_for_region(&self, region: &Region) -> Option<&'static Territory> {
        match region {
            Region::Known(region_id) => self.territory(region_id),
            Region::Custom(Some(code)) => self.resolve_calling_code(code).ok(),
            Region::Custom(None) => None,
        }
    }

    /// Explicit choice by the user. Wins over any detection still in flight.
    pub fn select_region(&mut self, region: Region) -> Result<(), UnsupportedRegion> {
        let region = match region {
            Region::Known(region_id) => match self.territory(region_id) {
                Some(territory) => Region::Known(territory.id),
                None => {
                    warn!("Attempt to select unsupported region {region_id}");
                    return Err(UnsupportedRegion(region_id.to_owned()));
                }
            },
            Region::Custom(code) => Region::Custom(
                code.map(|code| normalize_digits_only(&code))
                    .filter(|code| !code.is_empty()),
            ),
        };
        debug!("Region {region} selected");
        self.state.select(region);
        Ok(())
    }

    /// Switches to the custom region carrying `calling_code`, stored as
    /// digits only.
    pub fn set_custom_calling_code(&mut self, calling_code: &str) {
        let digits = normalize_digits_only(calling_code);
        let region = Region::Custom(Some(digits).filter(|code| !code.is_empty()));
        debug!("Custom calling code set, region is now {region}");
        self.state.select(region);
    }

    /// Applies the outcome of a region lookup. The state is left unchanged
    /// on failure, for unsupported regions, and when the user already chose
    /// a region.
    pub fn apply_detection(&mut self, outcome: Result<String, NotDetected>) -> Result<&'static str, NotDetected> {
        let detected = outcome.map_err(|err| {
            warn!("Region detection failed: {err}");
            err
        })?;
        let detected = RegionCode::canonicalize(&detected);
        let Some(territory) = self.territory(&detected) else {
            warn!("Detected region {detected} is not supported");
            return Err(NotDetected::UnsupportedRegion(detected));
        };
        if !self.state.apply_detected(Region::Known(territory.id)) {
            debug!("Discarding detected region {}, user already chose {}", territory.id, self.selected_region());
            return Err(NotDetected::Superseded);
        }
        debug!("Region {} detected", territory.id);
        Ok(territory.id)
    }

    /// Looks the caller's region up through `locator` and applies it.
    pub async fn detect_region<L>(&mut self, locator: &L) -> Result<&'static str, NotDetected>
    where
        L: RegionLocator + ?Sized,
    {
        let outcome = locator.locate().await;
        self.apply_detection(outcome)
    }

    /// Formats partial input for display while the user types. Keeps only
    /// digits and a leading `+`; whatever the rules of `region` cannot
    /// group is returned in that stripped form.
    pub fn format_as_you_type(&self, raw: &str, region: &Region) -> String {
        let stripped = normalize_diallable_chars_only(raw);
        if stripped.is_empty() {
            return stripped;
        }
        let Some(territory) = self.territory_for_region(region) else {
            trace!("No rules for region {region}, passing '{stripped}' through");
            return stripped;
        };

        let formatted = match stripped.strip_prefix(PLUS_SIGN) {
            Some(digits) => self.format_international(digits),
            None => self.format_national(&stripped, territory),
        };
        match formatted {
            Ok(Some(formatted)) => formatted,
            Ok(None) => stripped,
            Err(err) => {
                error!("Could not format '{stripped}': {err}");
                stripped
            }
        }
    }

    fn format_national(&self, digits: &str, territory: &Territory) -> Result<Option<String>, InternalLogicError> {
        let Some(plan) = numbering_plan(territory.id) else {
            return Ok(None);
        };
        let (national_prefix, national_number) = match plan
            .national_prefix
            .and_then(|prefix| digits.strip_prefix(prefix).map(|rest| (prefix, rest)))
        {
            Some((prefix, rest)) => (Some(prefix), rest),
            None => (None, digits),
        };
        if national_number.len() > MAX_LENGTH_FOR_NSN {
            return Ok(None);
        }
        AsYouTypeFormatter::new(&self.reg_exps)
            .format_national_number(national_number, plan, national_prefix, false)
            .map(Some)
    }

    fn format_international(&self, digits: &str) -> Result<Option<String>, InternalLogicError> {
        let Some((territory, country_code_length)) = self.extract_country_code(digits) else {
            return Ok(None);
        };
        let (country_calling_code, national_number) = digits.split_at(country_code_length);
        if national_number.len() > MAX_LENGTH_FOR_NSN {
            return Ok(None);
        }
        let mut formatted = match numbering_plan(territory.id) {
            Some(plan) => AsYouTypeFormatter::new(&self.reg_exps)
                .format_national_number(national_number, plan, None, true)?,
            None => national_number.to_owned(),
        };
        prefix_number_with_country_calling_code(country_calling_code, " ", &mut formatted);
        Ok(Some(formatted))
    }

    /// Finds the calling code `digits` starts with. Calling codes are
    /// prefix-free, so the first hit is the only one. Returns the main
    /// region for the code and the code length.
    fn extract_country_code(&self, digits: &str) -> Option<(&'static Territory, usize)> {
        (1..=MAX_LENGTH_COUNTRY_CODE.min(digits.len())).find_map(|length| {
            let code = digits[..length].parse::<u16>().ok()?;
            let region_id = self.get_region_codes_for_country_calling_code(code).first()?;
            self.territory(region_id).map(|territory| (territory, length))
        })
    }

    /// Formatted example number for an input placeholder. `None` when the
    /// region has no numbering plan.
    pub fn example_number(&self, region: &Region) -> Option<String> {
        let territory = self.territory_for_region(region)?;
        let plan = numbering_plan(territory.id)?;
        Some(self.format_as_you_type(plan.example_number, region))
    }

    pub fn validate(&self, number: &str, region: &Region) -> bool {
        self.validate_with_reason(number, region).is_ok()
    }

    /// Like `validate`, telling why a number was rejected.
    pub fn validate_with_reason(&self, number: &str, region: &Region) -> Result<(), ValidationError> {
        let stripped = normalize_diallable_chars_only(number);
        if stripped.is_empty() || stripped == PLUS_SIGN {
            return Err(ValidationError::Empty);
        }
        let territory = self
            .territory_for_region(region)
            .ok_or(ValidationError::InvalidCountryCode)?;

        if let Some(digits) = stripped.strip_prefix(PLUS_SIGN) {
            let (main_territory, country_code_length) = self
                .extract_country_code(digits)
                .ok_or(ValidationError::InvalidCountryCode)?;
            let national_number = &digits[country_code_length..];
            let mut first_error = None;
            for region_id in self.get_region_codes_for_country_calling_code(main_territory.calling_code) {
                let Some(candidate) = self.territory(region_id) else {
                    continue;
                };
                match self.validate_national_significant_number(national_number, candidate) {
                    Ok(()) => return Ok(()),
                    Err(err) => {
                        first_error.get_or_insert(err);
                    }
                }
            }
            return Err(first_error.unwrap_or(ValidationError::InvalidCountryCode));
        }

        let national_number = self.extract_national_number(&stripped, None, &[territory]);
        self.validate_national_significant_number(national_number, territory)
    }

    fn validate_national_significant_number(
        &self,
        national_number: &str,
        territory: &Territory,
    ) -> Result<(), ValidationError> {
        let Some(plan) = numbering_plan(territory.id) else {
            return test_generic_number_length(national_number, territory.calling_code);
        };
        test_number_length(national_number, &plan.general_desc)?;
        if self.matcher_api.match_national_number(national_number, &plan.general_desc, false) {
            Ok(())
        } else {
            Err(ValidationError::NotMatchedPattern)
        }
    }

    fn test_possible_length(&self, national_number: &str, territory: &Territory) -> Result<(), ValidationError> {
        match numbering_plan(territory.id) {
            Some(plan) => test_number_length(national_number, &plan.general_desc),
            None => test_generic_number_length(national_number, territory.calling_code),
        }
    }

    /// Builds `+<code><national number>` from whatever the user typed.
    /// Never fails: with an unknown code the digits are appended as they
    /// are, and without a code the digits alone are returned.
    pub fn normalize(&self, raw: &str, calling_code: &str) -> String {
        let digits = normalize_digits_only(raw);
        let country_calling_code = normalize_digits_only(calling_code);
        if country_calling_code.is_empty() {
            return digits;
        }
        let national_number = match self.resolve_calling_code(&country_calling_code) {
            Ok(territory) => {
                let candidates = self
                    .get_region_codes_for_country_calling_code(territory.calling_code)
                    .iter()
                    .filter_map(|region_id| self.territory(region_id))
                    .collect::<Vec<_>>();
                self.extract_national_number(&digits, Some(&country_calling_code), &candidates)
            }
            Err(err) => {
                debug!("{err}, keeping digits as typed");
                digits.as_str()
            }
        };
        fast_cat::concat_str!(PLUS_SIGN, &country_calling_code, national_number)
    }

    /// Finds the national significant number in `digits`, typed for one of
    /// `territories`. A leading national prefix is dropped when the rest is
    /// a valid number. A repeated calling code is dropped when the digits
    /// are not valid with it and are without it. When no reading is valid,
    /// the first one with a possible length wins, the digits as typed
    /// first.
    fn extract_national_number<'a>(
        &self,
        digits: &'a str,
        country_calling_code: Option<&str>,
        territories: &[&'static Territory],
    ) -> &'a str {
        let without_national_prefix = territories
            .iter()
            .filter_map(|territory| {
                let prefix = numbering_plan(territory.id)?.national_prefix?;
                digits.strip_prefix(prefix).map(|rest| (rest, *territory))
            })
            .collect::<Vec<_>>();
        let without_calling_code = country_calling_code
            .and_then(|code| digits.strip_prefix(code))
            .filter(|rest| !rest.is_empty());

        let is_valid = |number: &str| {
            territories.iter().any(|territory| {
                self.validate_national_significant_number(number, territory).is_ok()
            })
        };
        let is_possible = |number: &str| {
            territories
                .iter()
                .any(|territory| self.test_possible_length(number, territory).is_ok())
        };

        let valid_without_prefix = without_national_prefix.iter().find(|(rest, territory)| {
            self.validate_national_significant_number(rest, territory).is_ok()
        });
        if let Some(&(rest, _)) = valid_without_prefix {
            return rest;
        }
        if is_valid(digits) {
            return digits;
        }
        if let Some(rest) = without_calling_code.filter(|rest| is_valid(*rest)) {
            return rest;
        }
        if is_possible(digits) {
            return digits;
        }
        without_national_prefix
            .iter()
            .map(|(rest, _)| *rest)
            .chain(without_calling_code)
            .find(|rest| is_possible(*rest))
            .unwrap_or(digits)
    }

    /// Reads a phone number out of pasted text. A calling code after `+`
    /// is reported even if no territory uses it. `None` only when the text
    /// has no digits where a number could start.
    pub fn parse_pasted_text(&self, text: &str) -> Option<PastedNumber> {
        let normalized = dec_from_char::normalize_decimals(text);
        let captures = self
            .reg_exps
            .pasted_number_pattern
            .captures_start(normalized.trim())?;
        let number = captures.get(2)?;
        let mut local_digits = normalize_digits_only(number.as_str());
        let mut detected_calling_code = captures.get(1).map(|code| code.as_str().to_owned());

        // "+919876543210": the pattern took four digits greedily, so split
        // at the calling code that really exists, if any.
        if let Some(code) = captures.get(1).filter(|code| code.end() == number.start()) {
            let all_digits = fast_cat::concat_str!(code.as_str(), &local_digits);
            if let Some((_, length)) = self.extract_country_code(&all_digits) {
                let (code, rest) = all_digits.split_at(length);
                trace!("Glued calling code in pasted text resolved to +{code}");
                detected_calling_code = Some(code.to_owned());
                local_digits = rest.to_owned();
            }
        }
        Some(PastedNumber { detected_calling_code, local_digits })
    }

    /// Selects the region a pasted number belongs to and returns it. The
    /// current region is kept when it already uses the pasted code; a code
    /// no territory uses selects the custom region.
    pub fn route_pasted(&mut self, pasted: &PastedNumber) -> Region {
        let Some(code) = pasted.detected_calling_code.as_deref() else {
            return self.selected_region().clone();
        };
        if self.calling_code_for(self.selected_region()).strip_prefix(PLUS_SIGN) == Some(code) {
            return self.selected_region().clone();
        }
        let region = match self.resolve_calling_code(code) {
            Ok(territory) => Region::Known(territory.id),
            Err(err) => {
                debug!("{err}, routing pasted number to the custom region");
                Region::Custom(Some(code.to_owned()))
            }
        };
        debug!("Pasted number routed to region {region}");
        self.state.select(region.clone());
        region
    }

    /// Deep link for `raw_number` typed in the currently selected region.
    pub fn deep_link(&self, raw_number: &str, message: &str, kind: DeepLinkKind) -> Result<String, DeepLinkError> {
        let calling_code = self.calling_code_for(self.selected_region());
        let phone = self.normalize(raw_number, &calling_code);
        build_deep_link(&phone, message, kind)
    }
}
