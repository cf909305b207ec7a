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

use regex_cache::CachedRegex;

/// A pair of regexes describing one class of number (the general
/// description, or one particular `Type` such as mobile or toll-free).
///
/// A descriptor whose patterns were literally `"NA"` in the source metadata
/// is not applicable to the territory; callers represent that by leaving the
/// typed descriptor `None` rather than by constructing one of these.
#[derive(Clone, Debug)]
pub struct Descriptor {
    /// Full-match pattern a valid national significant number must satisfy.
    pub(crate) national_number: CachedRegex,

    /// Superset length-only pattern, used to prune numbers that could not
    /// possibly belong to this class before the more expensive full pattern
    /// is tried.
    pub(crate) possible_number: CachedRegex,

    /// An example national significant number for this class, with no
    /// formatting applied.
    pub(crate) example: Option<String>,
}

impl Descriptor {
    pub fn new(national_number: CachedRegex, possible_number: CachedRegex) -> Self {
        Descriptor {
            national_number,
            possible_number,
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// The national-number pattern, full-match semantics.
    pub fn national_number_pattern(&self) -> &CachedRegex {
        &self.national_number
    }

    /// The possible-number (length-only) pattern.
    pub fn possible_number_pattern(&self) -> &CachedRegex {
        &self.possible_number
    }

    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    /// Whether `value` fully matches the national-number pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.national_number
            .find(value)
            .map(|m| m.start() == 0 && m.end() == value.len())
            .unwrap_or(false)
    }

    /// Whether `value`'s length is consistent with a number of this class.
    pub fn is_possible(&self, value: &str) -> bool {
        self.possible_number
            .find(value)
            .map(|m| m.start() == 0 && m.end() == value.len())
            .unwrap_or(false)
    }
}
