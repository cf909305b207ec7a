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

//! Regex-driven removal of the tokens that sit around a national
//! significant number: extensions, the international prefix / leading
//! `+`, and the national (trunk) prefix.

use crate::consts;
use crate::country::Source;
use crate::metadata::Metadata;
use crate::normalize;
use regex_cache::CachedRegex;

/// Find and remove a trailing extension. The original whisperfish/
/// libphonenumber behaviour is preserved: when more than one extension
/// marker is present (`x508/x1234`), the first one found wins and
/// everything from it onward is dropped.
pub fn strip_extension(buf: &mut String) -> Option<String> {
    let captures = consts::EXTN_PATTERN.captures(buf)?;
    let whole = captures.get(0)?;

    let digits = (1..captures.len())
        .find_map(|i| captures.get(i))
        .map(|m| m.as_str().to_owned())?;

    buf.truncate(whole.start());

    Some(digits)
}

/// Outcome of stripping the international prefix / leading `+`, telling
/// the caller how the country code (if any) was ultimately derived.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Prefix {
    FromPlus,
    FromIdd,
    FromDefaultCountry,
}

impl From<Prefix> for Source {
    fn from(value: Prefix) -> Source {
        match value {
            Prefix::FromPlus => Source::Plus,
            Prefix::FromIdd => Source::Idd,
            Prefix::FromDefaultCountry => Source::Default,
        }
    }
}

/// Strip a leading `+` or, failing that, a matching IDD prefix.
///
/// `buf` is normalized as a side effect (digits only, letters mapped via
/// the keypad) either way: a leading `+` is checked for on the raw input
/// (normalizing first would destroy it), but the remainder is always
/// normalized before this function returns.
pub fn maybe_strip_international_prefix_and_normalize(
    buf: &mut String,
    idd: Option<&CachedRegex>,
) -> Prefix {
    if let Some(rest) = buf.strip_prefix(consts::PLUS_SIGN) {
        *buf = normalize::normalize(rest);
        return Prefix::FromPlus;
    }

    *buf = normalize::normalize(buf);

    let matched = idd.and_then(|re| re.find(buf)).filter(|m| m.start() == 0);

    if let Some(m) = matched {
        if !buf[m.end()..].starts_with('0') {
            *buf = buf[m.end()..].to_owned();
            return Prefix::FromIdd;
        }
    }

    Prefix::FromDefaultCountry
}

/// Strip the national (trunk) prefix from `buf` using `meta`'s parsing
/// rule, applying the transform template when one is present. The
/// national-rule validation guard (§4.2) ensures a stripping attempt that
/// would leave an NSN failing the general pattern is rolled back.
pub fn maybe_strip_national_prefix(buf: &mut String, meta: &Metadata) {
    let Some(parsing) = meta.national_prefix_for_parsing() else {
        if let Some(prefix) = meta.national_prefix() {
            if let Some(rest) = buf.strip_prefix(prefix) {
                *buf = rest.to_owned();
            }
        }
        return;
    };

    let Some(m) = parsing.find(buf) else { return };
    if m.start() != 0 {
        return;
    }

    let general = meta.descriptors().general();
    let was_viable = general.map(|d| d.is_match(buf)).unwrap_or(false);

    match meta.national_prefix_transform_rule() {
        Some(transform) => {
            let transformed = parsing.replace(buf, transform).into_owned();

            if was_viable && !general.map(|d| d.is_match(&transformed)).unwrap_or(false) {
                return;
            }

            *buf = transformed;
        }
        None => {
            let remainder = &buf[m.end()..];

            if was_viable && !general.map(|d| d.is_match(remainder)).unwrap_or(false) {
                return;
            }

            *buf = remainder.to_owned();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::metadata::DATABASE;

    #[test]
    fn strips_extension_after_first_marker() {
        let mut buf = "6505551234 x508/x1234".to_owned();
        let ext = strip_extension(&mut buf);

        assert_eq!(Some("508".to_owned()), ext);
        assert_eq!("6505551234", buf.trim_end());
    }

    #[test]
    fn no_extension_present() {
        let mut buf = "6505551234".to_owned();
        assert_eq!(None, strip_extension(&mut buf));
    }

    #[test]
    fn strips_plus() {
        let mut buf = "+6433316005".to_owned();
        let source = maybe_strip_international_prefix_and_normalize(&mut buf, None);

        assert_eq!(Prefix::FromPlus, source);
        assert_eq!("6433316005", buf);
    }

    #[test]
    fn strips_matching_idd() {
        let us = DATABASE.by_id("US").unwrap();
        let mut buf = "0111650253000".to_owned();
        let source =
            maybe_strip_international_prefix_and_normalize(&mut buf, us.international_prefix());

        assert_eq!(Prefix::FromIdd, source);
        assert_eq!("1650253000", buf);
    }

    #[test]
    fn national_prefix_guard_rejects_bad_strip() {
        let nz = DATABASE.by_id("NZ").unwrap();
        // "0" is the literal national prefix, but "0" alone leaves a
        // one-digit NSN that fails the general pattern, so it must not be
        // stripped.
        let mut buf = "0".to_owned();
        maybe_strip_national_prefix(&mut buf, nz);
        assert_eq!("0", buf);
    }

    #[test]
    fn national_prefix_strips_when_result_is_viable() {
        let nz = DATABASE.by_id("NZ").unwrap();
        let mut buf = "033316005".to_owned();
        maybe_strip_national_prefix(&mut buf, nz);
        assert_eq!("33316005", buf);
    }
}
