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

use crate::{
    metadata::{Descriptor, Format},
    phone_number::Type,
};
use regex_cache::CachedRegex;

/// Everything the kernel needs to know about one territory (a region such as
/// `US`, `DE`, `AR`, or the non-geographic `001` entity used for e.g. +800
/// numbers).
#[derive(Clone, Debug)]
pub struct Metadata {
    pub(crate) id: String,
    pub(crate) country_code: u16,

    pub(crate) descriptors: Descriptors,

    pub(crate) international_prefix: Option<CachedRegex>,
    pub(crate) preferred_international_prefix: Option<String>,

    pub(crate) national_prefix: Option<String>,
    pub(crate) national_prefix_for_parsing: Option<CachedRegex>,
    pub(crate) national_prefix_transform_rule: Option<String>,
    pub(crate) national_prefix_formatting_rule: Option<String>,

    pub(crate) preferred_extension_prefix: Option<String>,

    pub(crate) formats: Vec<Format>,
    pub(crate) international_formats: Vec<Format>,

    pub(crate) main_country_for_code: bool,
}

/// Descriptors for the various typed classes of phone number, plus the
/// territory-wide general description.
#[derive(Clone, Debug, Default)]
pub struct Descriptors {
    pub(crate) general: Option<Descriptor>,
    pub(crate) fixed_line: Option<Descriptor>,
    pub(crate) mobile: Option<Descriptor>,
    pub(crate) toll_free: Option<Descriptor>,
    pub(crate) premium_rate: Option<Descriptor>,
    pub(crate) shared_cost: Option<Descriptor>,
    pub(crate) personal_number: Option<Descriptor>,
    pub(crate) voip: Option<Descriptor>,
    pub(crate) pager: Option<Descriptor>,
    pub(crate) uan: Option<Descriptor>,
}

impl Metadata {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The country calling code dialed from overseas to reach this
    /// territory, e.g. 64 for New Zealand.
    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    pub fn descriptors(&self) -> &Descriptors {
        &self.descriptors
    }

    /// IDD (international direct dialing prefix) pattern, e.g. `00` or
    /// `00[39]`. Absent for territories reached only via `+`.
    pub fn international_prefix(&self) -> Option<&CachedRegex> {
        self.international_prefix.as_ref()
    }

    pub fn preferred_international_prefix(&self) -> Option<&str> {
        self.preferred_international_prefix.as_deref()
    }

    /// The trunk prefix dialed before the NSN when calling domestically,
    /// e.g. `0`. Never part of the stored national number.
    pub fn national_prefix(&self) -> Option<&str> {
        self.national_prefix.as_deref()
    }

    /// Regex used to recognize and strip the national prefix (and any
    /// carrier selection code) when parsing. Falls back to a literal match
    /// of `national_prefix` when absent.
    pub fn national_prefix_for_parsing(&self) -> Option<&CachedRegex> {
        self.national_prefix_for_parsing.as_ref()
    }

    /// Substitution template (`$1`..`$9`) applied instead of plain removal
    /// when `national_prefix_for_parsing` matches. Used for rewriting rules
    /// like Argentina's mobile carrier-code insertion.
    pub fn national_prefix_transform_rule(&self) -> Option<&str> {
        self.national_prefix_transform_rule.as_deref()
    }

    /// Territory-wide `$NP`/`$FG` template applied in NATIONAL formatting,
    /// unless an individual `Format` overrides it.
    pub fn national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule.as_deref()
    }

    pub fn preferred_extension_prefix(&self) -> Option<&str> {
        self.preferred_extension_prefix.as_deref()
    }

    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    pub fn international_formats(&self) -> &[Format] {
        &self.international_formats
    }

    pub fn is_main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }
}

impl Descriptors {
    pub fn get(&self, kind: Type) -> Option<&Descriptor> {
        match kind {
            Type::Unknown | Type::FixedLineOrMobile => None,
            Type::FixedLine => self.fixed_line.as_ref(),
            Type::Mobile => self.mobile.as_ref(),
            Type::TollFree => self.toll_free.as_ref(),
            Type::PremiumRate => self.premium_rate.as_ref(),
            Type::SharedCost => self.shared_cost.as_ref(),
            Type::PersonalNumber => self.personal_number.as_ref(),
            Type::Voip => self.voip.as_ref(),
            Type::Pager => self.pager.as_ref(),
            Type::Uan => self.uan.as_ref(),
        }
    }

    pub fn general(&self) -> Option<&Descriptor> {
        self.general.as_ref()
    }

    pub fn fixed_line(&self) -> Option<&Descriptor> {
        self.fixed_line.as_ref()
    }

    pub fn mobile(&self) -> Option<&Descriptor> {
        self.mobile.as_ref()
    }

    pub fn toll_free(&self) -> Option<&Descriptor> {
        self.toll_free.as_ref()
    }

    pub fn premium_rate(&self) -> Option<&Descriptor> {
        self.premium_rate.as_ref()
    }

    pub fn shared_cost(&self) -> Option<&Descriptor> {
        self.shared_cost.as_ref()
    }

    pub fn personal_number(&self) -> Option<&Descriptor> {
        self.personal_number.as_ref()
    }

    pub fn voip(&self) -> Option<&Descriptor> {
        self.voip.as_ref()
    }

    pub fn pager(&self) -> Option<&Descriptor> {
        self.pager.as_ref()
    }

    pub fn uan(&self) -> Option<&Descriptor> {
        self.uan.as_ref()
    }
}

/// A builder for `Metadata`, used by `builtin` and by any caller assembling
/// territory descriptions from their own already-parsed source.
#[derive(Default)]
pub struct Builder {
    inner: Metadata,
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            id: String::new(),
            country_code: 0,
            descriptors: Descriptors::default(),
            international_prefix: None,
            preferred_international_prefix: None,
            national_prefix: None,
            national_prefix_for_parsing: None,
            national_prefix_transform_rule: None,
            national_prefix_formatting_rule: None,
            preferred_extension_prefix: None,
            formats: Vec::new(),
            international_formats: Vec::new(),
            main_country_for_code: false,
        }
    }
}

impl Builder {
    pub fn new(id: impl Into<String>, country_code: u16) -> Self {
        Builder {
            inner: Metadata {
                id: id.into(),
                country_code,
                ..Metadata::default()
            },
        }
    }

    pub fn general(mut self, desc: Descriptor) -> Self {
        self.inner.descriptors.general = Some(desc);
        self
    }

    pub fn fixed_line(mut self, desc: Descriptor) -> Self {
        self.inner.descriptors.fixed_line = Some(desc);
        self
    }

    pub fn mobile(mut self, desc: Descriptor) -> Self {
        self.inner.descriptors.mobile = Some(desc);
        self
    }

    pub fn toll_free(mut self, desc: Descriptor) -> Self {
        self.inner.descriptors.toll_free = Some(desc);
        self
    }

    pub fn premium_rate(mut self, desc: Descriptor) -> Self {
        self.inner.descriptors.premium_rate = Some(desc);
        self
    }

    pub fn shared_cost(mut self, desc: Descriptor) -> Self {
        self.inner.descriptors.shared_cost = Some(desc);
        self
    }

    pub fn personal_number(mut self, desc: Descriptor) -> Self {
        self.inner.descriptors.personal_number = Some(desc);
        self
    }

    pub fn voip(mut self, desc: Descriptor) -> Self {
        self.inner.descriptors.voip = Some(desc);
        self
    }

    pub fn pager(mut self, desc: Descriptor) -> Self {
        self.inner.descriptors.pager = Some(desc);
        self
    }

    pub fn uan(mut self, desc: Descriptor) -> Self {
        self.inner.descriptors.uan = Some(desc);
        self
    }

    pub fn international_prefix(mut self, pattern: CachedRegex) -> Self {
        self.inner.international_prefix = Some(pattern);
        self
    }

    pub fn preferred_international_prefix(mut self, value: impl Into<String>) -> Self {
        self.inner.preferred_international_prefix = Some(value.into());
        self
    }

    pub fn national_prefix(mut self, value: impl Into<String>) -> Self {
        self.inner.national_prefix = Some(value.into());
        self
    }

    pub fn national_prefix_for_parsing(mut self, pattern: CachedRegex) -> Self {
        self.inner.national_prefix_for_parsing = Some(pattern);
        self
    }

    pub fn national_prefix_transform_rule(mut self, rule: impl Into<String>) -> Self {
        self.inner.national_prefix_transform_rule = Some(rule.into());
        self
    }

    pub fn national_prefix_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.inner.national_prefix_formatting_rule = Some(rule.into());
        self
    }

    pub fn preferred_extension_prefix(mut self, value: impl Into<String>) -> Self {
        self.inner.preferred_extension_prefix = Some(value.into());
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.inner.formats.push(format);
        self
    }

    pub fn international_format(mut self, format: Format) -> Self {
        self.inner.international_formats.push(format);
        self
    }

    pub fn main_country_for_code(mut self, value: bool) -> Self {
        self.inner.main_country_for_code = value;
        self
    }

    pub fn build(self) -> Metadata {
        self.inner
    }
}
