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

use thiserror::Error;

/// The full taxonomy of ways a raw string can fail to become a `PhoneNumber`.
///
/// This is returned as a single tagged value rather than via panics or
/// several distinct error types: every parse failure is a deterministic
/// classification of the input, never a bug to retry.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum Parse {
    /// The string did not look like a phone number at all (too few digits,
    /// or it started with characters that can never begin one).
    #[error("not a number")]
    NotANumber,

    /// No region could be inferred for the number and none was supplied, or
    /// the calling code extracted does not belong to any known territory.
    #[error("invalid country code")]
    InvalidCountryCode,

    /// The string started with an international dialing prefix, but after
    /// stripping it, fewer digits remained than any valid number (country
    /// code included) could have.
    #[error("the number is too short after the international prefix")]
    TooShortAfterIdd,

    /// After the country code and national prefix were removed, the
    /// remaining national significant number was shorter than two digits.
    #[error("the number is too short to be a national significant number")]
    TooShortNsn,

    /// The national significant number had more digits than any valid
    /// number could have.
    #[error("the number is too long")]
    TooLong,
}
