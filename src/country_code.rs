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

//! Inference of the country calling code from a possibly-`+`-prefixed
//! number, given the default region's metadata.

use crate::consts::MAX_LENGTH_FOR_COUNTRY_CODE;
use crate::country::Source;
use crate::error::Parse;
use crate::metadata::{Metadata, Store};
use crate::token_stripper::{self, Prefix};

/// The shortest national significant number we're willing to accept right
/// after stripping an international prefix. Below this, the input is
/// almost certainly truncated.
const MIN_LENGTH_AFTER_IDD: usize = 6;

/// Infer the country calling code for `buf`, consuming the portion of the
/// string that encodes it.
///
/// Returns the extracted code (`0` when none could be determined and the
/// caller is expected to fall back to the default region), the source the
/// code was derived from, and the remaining buffer.
pub fn maybe_extract_country_code(
    store: &Store,
    buf: &str,
    default_meta: Option<&Metadata>,
) -> Result<(u16, Source, String), Parse> {
    let mut working = buf.to_owned();
    let idd = default_meta.and_then(Metadata::international_prefix);
    let prefix = token_stripper::maybe_strip_international_prefix_and_normalize(&mut working, idd);

    if prefix != Prefix::FromDefaultCountry {
        for len in 1..=MAX_LENGTH_FOR_COUNTRY_CODE {
            if working.len() < len {
                break;
            }

            let (code, rest) = working.split_at(len);

            let Ok(code) = code.parse::<u16>() else { continue };

            if store.region(code).is_none() {
                continue;
            }

            if rest.len() < MIN_LENGTH_AFTER_IDD {
                return Err(Parse::TooShortAfterIdd);
            }

            return Ok((code, prefix.into(), rest.to_owned()));
        }

        return Err(Parse::InvalidCountryCode);
    }

    if let Some(meta) = default_meta {
        if let Some(candidate) = accept_default_region_candidate(meta, &working) {
            return Ok(candidate);
        }
    }

    Ok((0, Source::Default, working))
}

/// Step 4 of §4.3: the default region's own country code is a candidate
/// only when stripping it both yields a valid NSN and the *unstripped*
/// buffer did not already look like a complete national number on its
/// own (otherwise e.g. a Swiss number dialled within Switzerland would
/// have its leading digits misread as a country code).
fn accept_default_region_candidate(meta: &Metadata, buf: &str) -> Option<(u16, Source, String)> {
    let candidate = meta.country_code().to_string();
    let rest = buf.strip_prefix(&candidate)?;

    let general = meta.descriptors().general()?;

    if general.is_match(buf) {
        return None;
    }

    if !general.is_match(rest) || !general.is_possible(rest) {
        return None;
    }

    Some((meta.country_code(), Source::Number, rest.to_owned()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::metadata::DATABASE;

    #[test]
    fn no_default_region_returns_unknown_code() {
        let (code, source, nsn) =
            maybe_extract_country_code(&DATABASE, "6433316005", None).unwrap();
        assert_eq!(0, code);
        assert_eq!(Source::Default, source);
        assert_eq!("6433316005", nsn);
    }

    #[test]
    fn accepts_default_region_candidate_with_country_code_prefix() {
        let (code, source, nsn) =
            maybe_extract_country_code(&DATABASE, "6433316005", DATABASE.by_id("NZ")).unwrap();
        assert_eq!(64, code);
        assert_eq!(Source::Number, source);
        assert_eq!("33316005", nsn);
    }

    #[test]
    fn too_short_after_idd() {
        let gb = DATABASE.by_id("GB");
        let err = maybe_extract_country_code(&DATABASE, "0044", gb).unwrap_err();
        assert_eq!(Parse::TooShortAfterIdd, err);
    }

    #[test]
    fn unknown_country_code_after_idd() {
        let us = DATABASE.by_id("US");
        let err = maybe_extract_country_code(&DATABASE, "011999123456789", us).unwrap_err();
        assert_eq!(Parse::InvalidCountryCode, err);
    }
}
