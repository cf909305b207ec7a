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

use crate::country;
use crate::extension::Extension;
use crate::formatter;
use crate::metadata::{Metadata, Store, DATABASE};
use crate::national_number::NationalNumber;
use crate::validator;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A parsed phone number: country calling code, national significant number
/// and the handful of flags needed to format and validate it again.
///
/// Equality and hashing only consider the fields that make two numbers the
/// same number: `code`, `national`, `italian_leading_zero` and `extension`
/// (an empty extension is equivalent to none). `raw_input` and
/// `country_code_source` are bookkeeping kept for callers who asked
/// `parse_and_keep_raw` for them; they never affect identity.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PhoneNumber {
    pub(crate) code: country::Code,
    pub(crate) national: NationalNumber,

    /// True when the national significant number has a significant leading
    /// zero that `national`, being a plain integer, cannot represent (e.g.
    /// Italian fixed lines). The formatter must re-prepend it.
    pub(crate) italian_leading_zero: bool,

    pub(crate) extension: Option<Extension>,

    /// The exact string the caller passed to `parse_and_keep_raw`, if any.
    pub(crate) raw_input: Option<String>,
}

/// Wrapper to make it easier to access information about the country of a
/// phone number.
pub struct Country<'a>(&'a PhoneNumber);

/// The phone number type, as classified from its national significant
/// number against a territory's typed descriptors.
#[derive(Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Fixed line numbers.
    FixedLine,

    /// Mobile numbers.
    Mobile,

    /// In some regions (e.g. the USA), it is impossible to distinguish
    /// between fixed-line and mobile numbers by looking at the phone number
    /// itself.
    FixedLineOrMobile,

    /// Freephone lines.
    TollFree,

    /// Premium rate lines.
    PremiumRate,

    /// The cost of this call is shared between the caller and the
    /// recipient, and is hence typically less than
    /// [`PremiumRate`](Self::PremiumRate) calls.
    SharedCost,

    /// A personal number is associated with a particular person, and may be
    /// routed to either a [`Mobile`](Self::Mobile) or
    /// [`FixedLine`](Self::FixedLine) number.
    PersonalNumber,

    /// Voice over IP numbers. This includes TSoIP (Telephony Service over
    /// IP).
    Voip,

    /// A pager number.
    Pager,

    /// Used for "Universal Access Numbers" or "Company Numbers". They may
    /// be further routed to specific offices, but allow one number to be
    /// used for a company.
    Uan,

    /// The number does not fit any of the known patterns for its region.
    Unknown,
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        // `code.source()` is bookkeeping about how the calling code was
        // derived (see `country::Source`), not part of the number's
        // identity — two numbers with the same calling code are the same
        // number regardless of whether one was read off a leading `+` and
        // the other inferred from a default region.
        self.code.value() == other.code.value()
            && self.national == other.national
            && self.italian_leading_zero == other.italian_leading_zero
            && self.extension_digits() == other.extension_digits()
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.value().hash(state);
        self.national.hash(state);
        self.italian_leading_zero.hash(state);
        self.extension_digits().hash(state);
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", formatter::format(&DATABASE, self, formatter::PhoneNumberFormat::International))
    }
}

impl PhoneNumber {
    pub(crate) fn new(code: country::Code, national: NationalNumber) -> Self {
        PhoneNumber {
            code,
            national,
            italian_leading_zero: false,
            extension: None,
            raw_input: None,
        }
    }

    pub(crate) fn with_italian_leading_zero(mut self, value: bool) -> Self {
        self.italian_leading_zero = value;
        self
    }

    pub(crate) fn with_extension(mut self, extension: Option<Extension>) -> Self {
        self.extension = extension;
        self
    }

    pub(crate) fn with_raw_input(mut self, raw: impl Into<String>) -> Self {
        self.raw_input = Some(raw.into());
        self
    }

    /// Get information about the country for the phone number.
    pub fn country(&self) -> Country<'_> {
        Country(self)
    }

    /// The country calling code, e.g. 64 for New Zealand. A value of 0
    /// would mean the number could not be resolved to any territory;
    /// `parse` never returns such a number (it fails with
    /// [`InvalidCountryCode`](crate::error::Parse::InvalidCountryCode)
    /// instead).
    pub fn code(&self) -> &country::Code {
        &self.code
    }

    /// The national significant number.
    pub fn national(&self) -> &NationalNumber {
        &self.national
    }

    /// Whether the national significant number has a leading zero that the
    /// numeric `national` field cannot represent.
    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    pub fn extension(&self) -> Option<&Extension> {
        self.extension.as_ref()
    }

    /// The exact input string given to `parse_and_keep_raw`, if it was
    /// asked to retain it.
    pub fn raw_input(&self) -> Option<&str> {
        self.raw_input.as_deref()
    }

    fn extension_digits(&self) -> &str {
        self.extension
            .as_ref()
            .map(|e| e.as_ref())
            .filter(|e| !e.is_empty())
            .unwrap_or("")
    }

    /// Render this number in its default (INTERNATIONAL) format using the
    /// built-in metadata.
    pub fn format(&self) -> String {
        formatter::format(&DATABASE, self, formatter::PhoneNumberFormat::International)
    }

    /// Get the metadata that applies to this phone number from the given
    /// store.
    pub fn metadata<'a>(&self, store: &'a Store) -> Option<&'a Metadata> {
        validator::metadata_for(store, &self.code)
    }

    /// Check if the phone number is valid against the built-in metadata.
    pub fn is_valid(&self) -> bool {
        validator::is_valid_number(&DATABASE, self)
    }

    /// Check if the phone number is valid against the given store.
    pub fn is_valid_with(&self, store: &Store) -> bool {
        validator::is_valid_number(store, self)
    }

    /// Determine the [`Type`] of the phone number against the built-in
    /// metadata.
    pub fn number_type(&self) -> Type {
        validator::get_number_type(&DATABASE, self)
    }

    /// Determine the [`Type`] of the phone number against the given store.
    pub fn number_type_with(&self, store: &Store) -> Type {
        validator::get_number_type(store, self)
    }
}

impl<'a> Country<'a> {
    pub fn code(&self) -> u16 {
        self.0.code.value()
    }

    pub fn id(&self) -> Option<country::Id> {
        self.0.metadata(&DATABASE).and_then(|m| m.id().parse().ok())
    }
}

#[cfg(test)]
mod test {
    use crate::country;
    use crate::national_number::NationalNumber;
    use crate::phone_number::{PhoneNumber, Type};

    fn number(code: u16, national: u64) -> PhoneNumber {
        PhoneNumber::new(country::Code::new(code), NationalNumber::new(national))
    }

    #[test]
    fn empty_and_absent_extension_are_equal() {
        let a = number(64, 33316005);
        let b = number(64, 33316005).with_extension(Some("".into()));

        assert_eq!(a, b);
    }

    #[test]
    fn different_extensions_are_not_equal() {
        let a = number(64, 33316005).with_extension(Some("123".into()));
        let b = number(64, 33316005).with_extension(Some("456".into()));

        assert_ne!(a, b);
    }

    #[test]
    fn italian_leading_zero_affects_equality() {
        let a = number(39, 236618300).with_italian_leading_zero(true);
        let b = number(39, 236618300).with_italian_leading_zero(false);

        assert_ne!(a, b);
    }

    #[test]
    fn type_is_unknown_with_no_metadata() {
        let n = number(9999, 123);
        assert_eq!(Type::Unknown, n.number_type());
    }
}
