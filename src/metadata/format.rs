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

/// Description of a single number-format rule.
#[derive(Clone, Debug)]
pub struct Format {
    /// A regex that must fully match the national (significant) number for
    /// this rule to be selected. For example "(20)(\d{4})(\d{4})" matches
    /// the NSN for Google London, "2070313000".
    pub(crate) pattern: CachedRegex,

    /// How the groups captured by `pattern` should be assembled, e.g.
    /// "$1 $2 $3" would render "20 7031 3000".
    pub(crate) format: String,

    /// Matched against the first few digits of the NSN before the (more
    /// expensive) full `pattern` is tried; narrows down which format rule
    /// applies when a territory has several with overlapping patterns. Empty
    /// when only one formatting rule exists for the territory.
    pub(crate) leading_digits_pattern: Vec<CachedRegex>,

    /// Template substituted for `$NP$FG` in the NATIONAL rendering, e.g.
    /// "($NP$FG)". Absent means the national prefix is not reattached when
    /// formatting NATIONAL. Overrides the territory-wide rule of the same
    /// name when present.
    pub(crate) national_prefix_formatting_rule: Option<String>,
}

impl Format {
    pub fn new(pattern: CachedRegex, format: impl Into<String>) -> Self {
        Format {
            pattern,
            format: format.into(),
            leading_digits_pattern: Vec::new(),
            national_prefix_formatting_rule: None,
        }
    }

    pub fn with_leading_digits_pattern(mut self, pattern: CachedRegex) -> Self {
        self.leading_digits_pattern.push(pattern);
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.national_prefix_formatting_rule = Some(rule.into());
        self
    }

    pub fn pattern(&self) -> &CachedRegex {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn leading_digits_pattern(&self) -> &[CachedRegex] {
        &self.leading_digits_pattern
    }

    pub fn national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule.as_deref()
    }

    /// Whether this rule fully matches `nsn`, respecting its leading-digits
    /// pattern (if any) as a cheap pre-filter.
    pub fn matches(&self, nsn: &str) -> bool {
        let leading_ok = self.leading_digits_pattern.is_empty()
            || self
                .leading_digits_pattern
                .last()
                .unwrap()
                .find(nsn)
                .map(|m| m.start() == 0)
                .unwrap_or(false);

        leading_ok
            && self
                .pattern
                .find(nsn)
                .map(|m| m.start() == 0 && m.end() == nsn.len())
                .unwrap_or(false)
    }
}
