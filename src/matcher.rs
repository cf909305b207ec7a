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

//! Fuzzy equivalence between two numbers (§4.6). Total: every pair of
//! inputs resolves to a [`MatchType`], parse failures included.

use crate::consts::MIN_PREFIX_LENGTH_FOR_SHORT_NSN_MATCH;
use crate::country::Source;
use crate::metadata::Store;
use crate::parser;
use crate::phone_number::PhoneNumber;
use crate::validator;

/// Result of comparing two numbers, most to least exact.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MatchType {
    /// One or both operands did not parse as a viable number.
    NotANumber,

    NoMatch,

    /// One NSN is a trailing-digit suffix of the other, overlapping by at
    /// least [`MIN_PREFIX_LENGTH_FOR_SHORT_NSN_MATCH`] digits.
    ShortNsnMatch,

    /// Same national significant number; country codes agree, or at
    /// least one side's code wasn't derived from an explicit `+`.
    NsnMatch,

    /// Same country code, NSN, Italian-leading-zero flag and extension.
    ExactMatch,
}

/// Either a ready-made `PhoneNumber` or a raw string to be parsed before
/// comparison. Strings are parsed leniently: a leading `+` is enough to
/// resolve a country code, and parse failure folds into
/// [`MatchType::NotANumber`] rather than propagating an error.
pub enum Candidate<'a> {
    Number(&'a PhoneNumber),
    Raw(&'a str),
}

impl<'a> From<&'a PhoneNumber> for Candidate<'a> {
    fn from(value: &'a PhoneNumber) -> Self {
        Candidate::Number(value)
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Candidate::Raw(value)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Candidate::Raw(value.as_str())
    }
}

impl<'a> Candidate<'a> {
    fn resolve(&self, store: &Store) -> Option<PhoneNumber> {
        match self {
            Candidate::Number(n) => Some((*n).clone()),
            Candidate::Raw(s) => parser::parse_for_match(store, s).ok(),
        }
    }
}

/// Compare `a` and `b` for equivalence against `store`'s metadata. Never
/// mutates its inputs: resolved numbers are cloned before comparison.
pub fn is_number_match<'a>(
    store: &Store,
    a: impl Into<Candidate<'a>>,
    b: impl Into<Candidate<'a>>,
) -> MatchType {
    let a = a.into().resolve(store);
    let b = b.into().resolve(store);

    match (a, b) {
        (Some(a), Some(b)) => compare(&a, &b),
        _ => MatchType::NotANumber,
    }
}

fn compare(a: &PhoneNumber, b: &PhoneNumber) -> MatchType {
    let ext_a = a.extension().map(|e| e.as_ref()).filter(|e| !e.is_empty());
    let ext_b = b.extension().map(|e| e.as_ref()).filter(|e| !e.is_empty());

    if !extensions_compatible(ext_a, ext_b) {
        return MatchType::NoMatch;
    }

    let nsn_a = validator::national_digits(a);
    let nsn_b = validator::national_digits(b);

    if a.code().value() == b.code().value()
        && nsn_a == nsn_b
        && a.italian_leading_zero() == b.italian_leading_zero()
        && ext_a == ext_b
    {
        return MatchType::ExactMatch;
    }

    if nsn_a == nsn_b && country_codes_compatible(a, b) {
        return MatchType::NsnMatch;
    }

    if short_nsn_suffix_match(&nsn_a, &nsn_b) {
        return MatchType::ShortNsnMatch;
    }

    MatchType::NoMatch
}

/// Extensions only disagree when both are set and differ; an unset
/// extension on either side is always compatible.
fn extensions_compatible(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

/// Differing country codes are acceptable for NSN_MATCH only when at
/// least one side wasn't derived from an explicit leading `+` — that side
/// may simply have had no way to know its real calling code.
fn country_codes_compatible(a: &PhoneNumber, b: &PhoneNumber) -> bool {
    if a.code().value() == b.code().value() {
        return true;
    }

    a.code().source() != Source::Plus || b.code().source() != Source::Plus
}

fn short_nsn_suffix_match(a: &str, b: &str) -> bool {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if shorter.len() < MIN_PREFIX_LENGTH_FOR_SHORT_NSN_MATCH {
        return false;
    }

    longer.ends_with(shorter)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::metadata::DATABASE;

    #[test]
    fn exact_match_ignores_empty_vs_absent_extension() {
        let a = parser::parse(&DATABASE, "+1 6503336000", "ZZ").unwrap();
        let b = a.clone();
        assert_eq!(MatchType::ExactMatch, is_number_match(&DATABASE, &a, &b));
    }

    #[test]
    fn nsn_match_across_plus_and_bare_national_form() {
        assert_eq!(
            MatchType::NsnMatch,
            is_number_match(&DATABASE, "+1 (650) 333-6000", "650 333 6000")
        );
    }

    #[test]
    fn short_nsn_match_on_suffix_overlap() {
        assert_eq!(
            MatchType::ShortNsnMatch,
            is_number_match(&DATABASE, "3 331-6005", "331 6005")
        );
    }

    #[test]
    fn not_a_number_folds_parse_failures() {
        assert_eq!(
            MatchType::NotANumber,
            is_number_match(&DATABASE, "I want a Pizza", "+64 3 331 6005")
        );
    }

    #[test]
    fn totality_self_match_is_exact() {
        let a = parser::parse(&DATABASE, "+64 3 331 6005", "ZZ").unwrap();
        assert_eq!(MatchType::ExactMatch, is_number_match(&DATABASE, &a, &a));
    }

    #[test]
    fn no_match_for_different_numbers() {
        assert_eq!(
            MatchType::NoMatch,
            is_number_match(&DATABASE, "+64 3 331 6005", "+64 3 331 6006")
        );
    }
}
