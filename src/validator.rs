// Copyright (C) 2017 1aim GmbH
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

//! Possible-length checks, full validity, and number-type classification.

use crate::country;
use crate::metadata::{Metadata, Store};
use crate::phone_number::{PhoneNumber, Type};

/// Generic possible-length window used for country codes that don't map to
/// any known territory (e.g. one reserved but unassigned in our store).
const GENERIC_MIN_LENGTH: usize = 2;
const GENERIC_MAX_LENGTH: usize = 16;

/// The reason a number is or isn't possible, per §4.4.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Validation {
    IsPossible,
    InvalidCountryCode,
    TooShort,
    TooLong,
}

impl Validation {
    pub fn is_possible(&self) -> bool {
        matches!(self, Validation::IsPossible)
    }
}

/// Look up the territory metadata that governs `code`, preferring the main
/// territory when several regions share a calling code.
pub fn metadata_for<'a>(store: &'a Store, code: &country::Code) -> Option<&'a Metadata> {
    store.by_code(code.value()).and_then(|m| m.into_iter().next())
}

/// §4.4 `is_possible_number_with_reason`.
pub fn is_possible_number_with_reason(store: &Store, number: &PhoneNumber) -> Validation {
    if number.code().value() == 0 {
        return Validation::InvalidCountryCode;
    }

    let national = national_digits(number);
    let length = national.len();

    match metadata_for(store, number.code()).and_then(|m| m.descriptors().general()) {
        Some(general) => {
            if general.is_possible(&national) {
                Validation::IsPossible
            } else if length < shortest_possible_length(general, &national) {
                Validation::TooShort
            } else {
                Validation::TooLong
            }
        }
        None => {
            if length < GENERIC_MIN_LENGTH {
                Validation::TooShort
            } else if length > GENERIC_MAX_LENGTH {
                Validation::TooLong
            } else {
                Validation::IsPossible
            }
        }
    }
}

/// Best-effort lower bound for the possible-length pattern, used only to
/// decide between `TooShort` and `TooLong` once we already know the full
/// possible-length pattern didn't match. We probe by growing a candidate
/// NSN one digit at a time: the shortest digit count for which *some*
/// digit string matches.
///
/// A probe of all zeros would under-count against a pattern that
/// constrains the leading digit (e.g. `[1-9]\d{m,n}`, which real
/// territory metadata sometimes does even though nothing in
/// `builtin.rs`'s table currently does) — `0000` never matches `[1-9]...`
/// regardless of length, so the all-zeros probe would walk past the true
/// shortest length and return `GENERIC_MAX_LENGTH` instead. Leading the
/// probe with `1` instead keeps it a match for both an unconstrained
/// `\d{m,n}` class and a `[1-9]\d{m,n}` one.
fn shortest_possible_length(general: &crate::metadata::Descriptor, national: &str) -> usize {
    for len in GENERIC_MIN_LENGTH..=national.len().max(GENERIC_MIN_LENGTH) {
        let probe = format!("1{}", "0".repeat(len - 1));
        if general.is_possible(&probe) {
            return len;
        }
    }
    GENERIC_MAX_LENGTH
}

pub fn is_possible_number(store: &Store, number: &PhoneNumber) -> bool {
    is_possible_number_with_reason(store, number).is_possible()
}

/// §4.4 `is_valid_number`: the NSN must fully match the region's general
/// national-number pattern.
pub fn is_valid_number(store: &Store, number: &PhoneNumber) -> bool {
    let national = national_digits(number);

    metadata_for(store, number.code())
        .and_then(|m| m.descriptors().general())
        .map(|general| general.is_match(&national))
        .unwrap_or(false)
}

/// §4.4 `is_valid_number_for_region`: additionally requires that `region`'s
/// own calling code is the one the number carries, so NANPA sub-regions
/// reject each other's numbers even though they share a calling code.
pub fn is_valid_number_for_region(store: &Store, number: &PhoneNumber, region: &str) -> bool {
    let Some(meta) = store.by_id(region) else { return false };

    if meta.country_code() != number.code().value() {
        return false;
    }

    let national = national_digits(number);

    meta.descriptors()
        .general()
        .map(|general| general.is_match(&national))
        .unwrap_or(false)
}

/// §4.4 `get_number_type`: typed descriptors are tried in priority order;
/// fixed-line and mobile sharing a pattern collapse to
/// [`Type::FixedLineOrMobile`](crate::phone_number::Type::FixedLineOrMobile).
pub fn get_number_type(store: &Store, number: &PhoneNumber) -> Type {
    let Some(meta) = metadata_for(store, number.code()) else { return Type::Unknown };

    let national = national_digits(number);
    let descriptors = meta.descriptors();

    let Some(general) = descriptors.general() else { return Type::Unknown };
    if !general.is_match(&national) {
        return Type::Unknown;
    }

    const PRIORITY: [(fn(&crate::metadata::Descriptors) -> Option<&crate::metadata::Descriptor>, Type); 7] = [
        (crate::metadata::Descriptors::premium_rate, Type::PremiumRate),
        (crate::metadata::Descriptors::toll_free, Type::TollFree),
        (crate::metadata::Descriptors::shared_cost, Type::SharedCost),
        (crate::metadata::Descriptors::voip, Type::Voip),
        (crate::metadata::Descriptors::personal_number, Type::PersonalNumber),
        (crate::metadata::Descriptors::pager, Type::Pager),
        (crate::metadata::Descriptors::uan, Type::Uan),
    ];

    for (accessor, kind) in PRIORITY {
        if accessor(descriptors).map(|d| d.is_match(&national)).unwrap_or(false) {
            return kind;
        }
    }

    let fixed_matches = descriptors.fixed_line().map(|d| d.is_match(&national)).unwrap_or(false);
    let mobile_matches = descriptors.mobile().map(|d| d.is_match(&national)).unwrap_or(false);

    let same_pattern = descriptors.fixed_line().map(|d| d.national_number_pattern().as_str())
        == descriptors.mobile().map(|d| d.national_number_pattern().as_str());

    match (fixed_matches, mobile_matches) {
        (true, true) => Type::FixedLineOrMobile,
        (true, false) if same_pattern => Type::FixedLineOrMobile,
        (true, false) => Type::FixedLine,
        (false, true) => Type::Mobile,
        (false, false) => Type::Unknown,
    }
}

/// The NSN as a digit string, with the Italian significant leading zero
/// re-prepended if the number carries one.
pub(crate) fn national_digits(number: &PhoneNumber) -> String {
    if number.italian_leading_zero() {
        format!("0{}", number.national().value())
    } else {
        number.national().value().to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::country;
    use crate::national_number::NationalNumber;
    use crate::metadata::DATABASE;

    fn number(code: u16, national: u64) -> PhoneNumber {
        PhoneNumber::new(country::Code::new(code), NationalNumber::new(national))
    }

    #[test]
    fn invalid_country_code_is_not_possible() {
        let n = number(0, 123456);
        assert_eq!(
            Validation::InvalidCountryCode,
            is_possible_number_with_reason(&DATABASE, &n)
        );
    }

    #[test]
    fn valid_us_number_is_possible_and_valid() {
        let n = number(1, 2015550123);
        assert_eq!(Validation::IsPossible, is_possible_number_with_reason(&DATABASE, &n));
        assert!(is_valid_number(&DATABASE, &n));
    }

    #[test]
    fn us_toll_free_classified() {
        let n = number(1, 8005550123);
        assert_eq!(Type::TollFree, get_number_type(&DATABASE, &n));
    }

    #[test]
    fn us_fixed_or_mobile_when_patterns_match_both() {
        let n = number(1, 2015550123);
        assert_eq!(Type::FixedLineOrMobile, get_number_type(&DATABASE, &n));
    }

    #[test]
    fn gb_mobile_classified_distinctly() {
        let n = number(44, 7912345678);
        assert_eq!(Type::Mobile, get_number_type(&DATABASE, &n));
    }

    #[test]
    fn unknown_number_type_for_unclassifiable_nsn() {
        let n = number(44, 1);
        assert_eq!(Type::Unknown, get_number_type(&DATABASE, &n));
    }

    #[test]
    fn nz_is_valid_for_its_own_region_only() {
        let n = number(64, 33316005);
        assert!(is_valid_number_for_region(&DATABASE, &n, "NZ"));
        assert!(!is_valid_number_for_region(&DATABASE, &n, "US"));
    }
}
