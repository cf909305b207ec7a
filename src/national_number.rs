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

use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// The national (significant) number, as defined in ITU-T Recommendation
/// E.164, without any leading zero.
///
/// Stored as an integer, so a significant leading zero (see
/// [`PhoneNumber::italian_leading_zero`](crate::PhoneNumber::italian_leading_zero))
/// cannot live here and is tracked separately on the owning `PhoneNumber`.
#[derive(Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Hash, Debug)]
pub struct NationalNumber(pub(crate) u64);

impl NationalNumber {
    pub fn new(value: u64) -> Self {
        NationalNumber(value)
    }

    /// The numeric value, with no leading zeros.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NationalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NationalNumber {
    fn from(value: u64) -> Self {
        NationalNumber(value)
    }
}
