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

//! The top-level parse pipeline (§4.7): normalize, strip extension,
//! resolve the country code, strip the national prefix, and assemble the
//! resulting `PhoneNumber`.

use crate::consts::{MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN};
use crate::country;
use crate::country_code;
use crate::error::Parse;
use crate::extension::Extension;
use crate::metadata::{Metadata, Store};
use crate::national_number::NationalNumber;
use crate::normalize;
use crate::phone_number::PhoneNumber;
use crate::token_stripper;

/// Raw input longer than this can never be a phone number; rejected
/// before any regex work is attempted.
const MAX_INPUT_LENGTH: usize = 250;

/// Parse `raw` against `default_region`'s metadata.
pub fn parse(store: &Store, raw: &str, default_region: &str) -> Result<PhoneNumber, Parse> {
    run(store, raw, store.by_id(default_region), true, false)
}

/// As [`parse`], but the returned `PhoneNumber` also carries the exact
/// input string and the source the country code was derived from.
pub fn parse_and_keep_raw(
    store: &Store,
    raw: &str,
    default_region: &str,
) -> Result<PhoneNumber, Parse> {
    run(store, raw, store.by_id(default_region), true, true)
}

/// Lenient resolution used by the matcher (§4.6): no default region is
/// consulted, and a number whose country code can't be determined
/// resolves to country code `0` rather than failing outright.
pub(crate) fn parse_for_match(store: &Store, raw: &str) -> Result<PhoneNumber, Parse> {
    run(store, raw, None, false, false)
}

fn run(
    store: &Store,
    raw: &str,
    default_meta: Option<&Metadata>,
    enforce_region: bool,
    keep_raw: bool,
) -> Result<PhoneNumber, Parse> {
    if raw.chars().count() > MAX_INPUT_LENGTH {
        return Err(Parse::TooLong);
    }

    let possible = normalize::extract_possible_number(raw);
    if possible.is_empty() || !normalize::is_viable(&possible) {
        return Err(Parse::NotANumber);
    }

    let mut working = possible;
    let ext = token_stripper::strip_extension(&mut working);

    if enforce_region && default_meta.is_none() && !working.starts_with('+') {
        return Err(Parse::InvalidCountryCode);
    }

    let (mut code, source, mut nsn) =
        country_code::maybe_extract_country_code(store, &working, default_meta)?;

    let region_meta = if code != 0 {
        store.by_code(code).and_then(|v| v.into_iter().next())
    } else {
        default_meta
    };

    if let Some(meta) = region_meta {
        token_stripper::maybe_strip_national_prefix(&mut nsn, meta);
    }

    if code == 0 {
        code = default_meta.map(Metadata::country_code).unwrap_or(0);
    }

    if nsn.chars().count() < MIN_LENGTH_FOR_NSN {
        return Err(Parse::TooShortNsn);
    }

    if nsn.chars().count() > MAX_LENGTH_FOR_NSN {
        return Err(Parse::TooLong);
    }

    let italian_leading_zero = code == 39 && nsn.starts_with('0');

    let national: u64 = nsn.parse().map_err(|_| Parse::NotANumber)?;

    let mut number = PhoneNumber::new(
        country::Code::with_source(code, source),
        NationalNumber::new(national),
    )
    .with_italian_leading_zero(italian_leading_zero)
    .with_extension(ext.map(Extension::from));

    if keep_raw {
        number = number.with_raw_input(raw);
    }

    Ok(number)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::metadata::DATABASE;

    #[test]
    fn nz_national_dialing_recovers_country_code() {
        let n = parse(&DATABASE, "033316005", "NZ").unwrap();
        assert_eq!(64, n.code().value());
        assert_eq!(33316005, n.national().value());
        assert!(n.extension().is_none());
    }

    #[test]
    fn plus_prefixed_number_with_extension() {
        let n = parse(&DATABASE, "+64 3 331 6005 ext 3456", "ZZ").unwrap();
        assert_eq!(64, n.code().value());
        assert_eq!(33316005, n.national().value());
        assert_eq!("3456", n.extension().unwrap().as_ref());
    }

    #[test]
    fn idd_prefixed_number_from_us() {
        let n = parse(&DATABASE, "011 1-650-253-0000", "US").unwrap();
        assert_eq!(1, n.code().value());
        assert_eq!(6502530000, n.national().value());
    }

    #[test]
    fn italian_leading_zero_preserved() {
        let n = parse(&DATABASE, "+39 02 3661 8300", "ZZ").unwrap();
        assert!(n.italian_leading_zero());
        assert_eq!(39, n.code().value());
        assert_eq!(236618300, n.national().value());
    }

    #[test]
    fn not_a_number_for_letters() {
        assert_eq!(Parse::NotANumber, parse(&DATABASE, "I want a Pizza", "US").unwrap_err());
    }

    #[test]
    fn too_short_after_idd() {
        assert_eq!(Parse::TooShortAfterIdd, parse(&DATABASE, "0044", "GB").unwrap_err());
    }

    #[test]
    fn no_default_region_and_no_plus_is_invalid_country_code() {
        assert_eq!(
            Parse::InvalidCountryCode,
            parse(&DATABASE, "331 6005", "ZZ").unwrap_err()
        );
    }

    #[test]
    fn keep_raw_preserves_input() {
        let n = parse_and_keep_raw(&DATABASE, "+64 3 331 6005", "ZZ").unwrap();
        assert_eq!(Some("+64 3 331 6005"), n.raw_input());
    }
}
