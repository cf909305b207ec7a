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

//! Phone number parsing, validation and formatting driven by per-territory
//! metadata.
//!
//! The kernel is stateless after [`metadata::Store`] construction: every
//! operation here is a pure function of `(input, metadata)`, so a single
//! `Store` (including the built-in [`metadata::DATABASE`]) may be shared
//! across threads without locking. The metadata source itself — parsing an
//! on-disk blob into [`metadata::Metadata`] values — and the geocoding of a
//! `PhoneNumber` into a human-readable area description are external
//! collaborators; this crate only consumes already-parsed metadata.
//!
//! ```
//! use phonekit::{country, PhoneNumberFormat};
//!
//! let number = phonekit::parse("033316005", country::NZ).unwrap();
//! assert_eq!(64, number.code().value());
//! assert_eq!("+64 3-331 6005", number.format_as(PhoneNumberFormat::International));
//! ```

#[macro_use]
extern crate lazy_static;

mod consts;

pub mod country;
pub use country::Id as Region;

mod country_code;

pub mod error;
pub use error::Parse;

mod extension;
pub use extension::Extension;

pub mod formatter;
pub use formatter::PhoneNumberFormat;

pub mod matcher;
pub use matcher::MatchType;

pub mod metadata;
pub use metadata::{Metadata, Store, DATABASE};

mod national_number;
pub use national_number::NationalNumber;

mod normalize;

mod parser;

mod phone_number;
pub use phone_number::{PhoneNumber, Type as PhoneNumberType};

mod token_stripper;

pub mod validator;
pub use validator::Validation as ValidationResult;

/// Parse `raw` against the built-in metadata, using `default_region` (an
/// ISO 3166-1 alpha-2 region id, e.g. `country::US`, or the literal `"ZZ"`
/// when none applies) when the input has no explicit `+`.
pub fn parse(raw: &str, default_region: impl AsRef<str>) -> Result<PhoneNumber, Parse> {
    parse_with(&DATABASE, raw, default_region)
}

/// As [`parse`], but against caller-supplied metadata rather than the
/// built-in [`DATABASE`].
pub fn parse_with(
    store: &Store,
    raw: &str,
    default_region: impl AsRef<str>,
) -> Result<PhoneNumber, Parse> {
    parser::parse(store, raw, default_region.as_ref())
}

/// As [`parse`], but the returned number also retains the exact input
/// string and the source its country code was derived from.
pub fn parse_and_keep_raw(
    raw: &str,
    default_region: impl AsRef<str>,
) -> Result<PhoneNumber, Parse> {
    parse_and_keep_raw_with(&DATABASE, raw, default_region)
}

pub fn parse_and_keep_raw_with(
    store: &Store,
    raw: &str,
    default_region: impl AsRef<str>,
) -> Result<PhoneNumber, Parse> {
    parser::parse_and_keep_raw(store, raw, default_region.as_ref())
}

/// Render `number` in the requested format using the built-in metadata.
pub fn format(number: &PhoneNumber, mode: PhoneNumberFormat) -> String {
    format_with(&DATABASE, number, mode)
}

pub fn format_with(store: &Store, number: &PhoneNumber, mode: PhoneNumberFormat) -> String {
    formatter::format(store, number, mode)
}

/// As [`format`], but with a caller-supplied list of format rules in
/// place of the territory's own.
pub fn format_by_pattern(
    number: &PhoneNumber,
    mode: PhoneNumberFormat,
    user_formats: &[metadata::Format],
) -> String {
    formatter::format_by_pattern(&DATABASE, number, mode, user_formats)
}

/// Format `number` the way someone dialing it from `calling_from_region`
/// would have to.
pub fn format_out_of_country_calling_number(number: &PhoneNumber, calling_from_region: &str) -> String {
    formatter::format_out_of_country_calling_number(&DATABASE, number, calling_from_region)
}

/// Whether `number`'s length is consistent with its territory (or a
/// generic window, for calling codes with no known territory).
pub fn is_possible_number(number: &PhoneNumber) -> bool {
    validator::is_possible_number(&DATABASE, number)
}

pub fn is_possible_number_with_reason(number: &PhoneNumber) -> ValidationResult {
    validator::is_possible_number_with_reason(&DATABASE, number)
}

/// Whether `number`'s national significant number fully matches its
/// territory's general pattern.
pub fn is_valid_number(number: &PhoneNumber) -> bool {
    validator::is_valid_number(&DATABASE, number)
}

/// As [`is_valid_number`], but additionally requires that `region` itself
/// (not merely a region sharing its calling code) is the number's
/// territory.
pub fn is_valid_number_for_region(number: &PhoneNumber, region: &str) -> bool {
    validator::is_valid_number_for_region(&DATABASE, number, region)
}

pub fn get_number_type(number: &PhoneNumber) -> PhoneNumberType {
    validator::get_number_type(&DATABASE, number)
}

/// The region id governing `number`'s territory, if any (the main
/// territory when several share a calling code).
pub fn get_region_code_for_number(number: &PhoneNumber) -> Option<&'static str> {
    validator::metadata_for(&DATABASE, number.code()).map(Metadata::id)
}

/// The main region id registered for `code`, if any.
pub fn get_region_code_for_country_code(code: u16) -> Option<&'static str> {
    DATABASE.region(code).and_then(|regions| regions.into_iter().next())
}

/// The calling code registered for `region`, if any.
pub fn get_country_code_for_region(region: &str) -> Option<u16> {
    DATABASE.country_code(region)
}

/// Every region sharing the North American Numbering Plan's calling code.
pub fn get_nanpa_countries() -> Vec<&'static str> {
    DATABASE.nanpa_regions()
}

/// An example number for `region`, built from its general descriptor.
pub fn get_example_number(region: &str) -> Option<PhoneNumber> {
    let meta = DATABASE.by_id(region)?;
    let example = meta.descriptors().general()?.example()?;
    parser::parse(&DATABASE, example, region).ok()
}

/// An example number for `region` of the given [`PhoneNumberType`].
pub fn get_example_number_for_type(region: &str, kind: PhoneNumberType) -> Option<PhoneNumber> {
    let meta = DATABASE.by_id(region)?;
    let example = meta.descriptors().get(kind)?.example()?;
    parser::parse(&DATABASE, example, region).ok()
}

/// Compare `a` and `b` for equivalence against the built-in metadata. See
/// [`matcher::is_number_match`] for the full level semantics.
pub fn is_number_match<'a>(
    a: impl Into<matcher::Candidate<'a>>,
    b: impl Into<matcher::Candidate<'a>>,
) -> MatchType {
    matcher::is_number_match(&DATABASE, a, b)
}

impl PhoneNumber {
    /// Render this number in the requested format using the built-in
    /// metadata. See [`PhoneNumber::format`] for the INTERNATIONAL-only
    /// shorthand.
    pub fn format_as(&self, mode: PhoneNumberFormat) -> String {
        formatter::format(&DATABASE, self, mode)
    }

    /// As [`PhoneNumber::format_as`], but against caller-supplied
    /// metadata.
    pub fn format_as_with(&self, store: &Store, mode: PhoneNumberFormat) -> String {
        formatter::format(store, self, mode)
    }

    /// Whether this number is possible against the built-in metadata.
    pub fn is_possible(&self) -> bool {
        validator::is_possible_number(&DATABASE, self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_format_round_trip_e164() {
        let n = parse("033316005", country::NZ.as_ref()).unwrap();
        let reassembled = parse(&format(&n, PhoneNumberFormat::E164), "ZZ").unwrap();
        assert_eq!(n, reassembled);
    }

    #[test]
    fn scenario_table_gb_too_short_after_idd() {
        assert_eq!(Parse::TooShortAfterIdd, parse("0044", "GB").unwrap_err());
    }

    #[test]
    fn scenario_table_nsn_match() {
        assert_eq!(
            MatchType::NsnMatch,
            is_number_match("+1 (650) 333-6000", "650 333 6000")
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let s = normalize::normalize("034-I-am-HUNGRY");
        assert_eq!(s, normalize::normalize(&s));
    }
}
