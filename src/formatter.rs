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

//! Rule selection and template expansion that turns a `PhoneNumber` back
//! into text.

use crate::consts;
use crate::extension::Extension;
use crate::metadata::{Format as FormatRule, Metadata, Store};
use crate::phone_number::PhoneNumber;
use crate::validator;
use regex_cache::CachedRegex;

/// Output shape requested from [`format`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PhoneNumberFormat {
    /// `+64331600 5`-style, no spacing, no territory rules.
    E164,

    /// `+64 3-331 6005`: country code plus territory-formatted NSN.
    International,

    /// `(03) 331 6005`: territory-formatted NSN with national prefix
    /// reattached, no country code.
    National,

    /// `tel:+64-3-331-6005` per RFC 3966.
    Rfc3966,
}

/// Render `number` using `store`'s metadata.
pub fn format(store: &Store, number: &PhoneNumber, mode: PhoneNumberFormat) -> String {
    format_inner(store, number, mode, None)
}

/// As [`format`], but with a caller-supplied list of format rules instead
/// of the territory's own. Selection rules (leading-digits + full match)
/// are unchanged; only the candidate list differs.
pub fn format_by_pattern(
    store: &Store,
    number: &PhoneNumber,
    mode: PhoneNumberFormat,
    user_formats: &[FormatRule],
) -> String {
    format_inner(store, number, mode, Some(user_formats))
}

/// Format `number` the way someone dialing it from `calling_from_region`
/// would need to: domestically if the two share a territory, otherwise
/// via `calling_from_region`'s own international dialing prefix.
pub fn format_out_of_country_calling_number(
    store: &Store,
    number: &PhoneNumber,
    calling_from_region: &str,
) -> String {
    let code = number.code().value();

    if let Some(meta) = validator::metadata_for(store, number.code()) {
        if meta.id() == calling_from_region {
            return format(store, number, PhoneNumberFormat::National);
        }
    }

    let Some(calling_meta) = store.by_id(calling_from_region) else {
        return format(store, number, PhoneNumberFormat::E164);
    };

    let idd_prefix = calling_meta
        .preferred_international_prefix()
        .map(str::to_owned)
        .or_else(|| calling_meta.international_prefix().and_then(first_literal_alternative));

    let Some(idd_prefix) = idd_prefix else {
        return format(store, number, PhoneNumberFormat::E164);
    };

    let international = format(store, number, PhoneNumberFormat::International);
    let without_plus_cc = international
        .strip_prefix(&format!("+{} ", code))
        .unwrap_or(&international);

    format!("{} {} {}", idd_prefix, code, without_plus_cc)
}

fn format_inner(
    store: &Store,
    number: &PhoneNumber,
    mode: PhoneNumberFormat,
    override_formats: Option<&[FormatRule]>,
) -> String {
    let national = validator::national_digits(number);
    let code = number.code().value();

    let Some(meta) = validator::metadata_for(store, number.code()) else {
        return fallback(code, &national, mode, number.extension());
    };

    let formats: &[FormatRule] = override_formats.unwrap_or_else(|| {
        if mode == PhoneNumberFormat::International && !meta.international_formats().is_empty() {
            meta.international_formats()
        } else {
            meta.formats()
        }
    });

    let rule = formats.iter().find(|f| f.matches(&national));

    let body = match rule {
        Some(rule) => apply_rule(&national, meta, rule, mode),
        None => national.clone(),
    };

    match mode {
        PhoneNumberFormat::E164 => format!("+{}{}", code, national),

        PhoneNumberFormat::International => {
            let mut out = format!("+{} {}", code, body);
            append_extension(&mut out, meta.preferred_extension_prefix(), number.extension());
            out
        }

        PhoneNumberFormat::National => {
            let mut out = body;
            append_extension(&mut out, meta.preferred_extension_prefix(), number.extension());
            out
        }

        PhoneNumberFormat::Rfc3966 => {
            let mut out = format!(
                "tel:+{}-{}",
                code,
                consts::SEPARATOR_PATTERN.replace_all(&body, "-")
            );

            if let Some(ext) = number.extension().filter(|e| !e.is_empty()) {
                out.push_str(";ext=");
                out.push_str(ext);
            }

            out
        }
    }
}

/// Apply a selected format rule's `$1..$n` template to `national`, folding
/// in the `$NP`/`$FG` national-prefix-formatting template when one is in
/// play (NATIONAL mode only; INTERNATIONAL and E164 never reattach the
/// trunk prefix).
///
/// The `$NP`/`$FG` substitution happens in two passes so the two
/// templating languages don't collide: first we resolve `$NP` and `$FG`
/// against a *literal* `$1`-shaped placeholder (escaped as `$$1` so this
/// pass's own regex replacement doesn't eagerly expand it), splice that
/// into the format string in place of its first `$n` token, and only then
/// run the real `$1..$n` substitution against the NSN's captured groups.
fn apply_rule(national: &str, meta: &Metadata, rule: &FormatRule, mode: PhoneNumberFormat) -> String {
    let np_rule = if mode == PhoneNumberFormat::National {
        rule.national_prefix_formatting_rule()
            .or_else(|| meta.national_prefix_formatting_rule())
    } else {
        None
    };

    match np_rule {
        Some(np_rule) if !np_rule.is_empty() => {
            let first = consts::FIRST_GROUP
                .captures(rule.format())
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .unwrap_or("$1");

            let substituted = np_rule.replace(*consts::NP, meta.national_prefix().unwrap_or(""));
            let substituted = substituted.replace(*consts::FG, &format!("${}", first));
            let template = consts::FIRST_GROUP.replace(rule.format(), substituted.as_str());

            rule.pattern().replace(national, template.as_ref()).into_owned()
        }
        _ => rule.pattern().replace(national, rule.format()).into_owned(),
    }
}

fn append_extension(out: &mut String, prefix: Option<&str>, ext: Option<&Extension>) {
    if let Some(ext) = ext.filter(|e| !e.is_empty()) {
        out.push_str(prefix.unwrap_or(*consts::DEFAULT_EXTN_PREFIX));
        out.push_str(ext);
    }
}

/// §4.5 step 2: when the country code doesn't map to any metadata at all,
/// every mode degrades to the bare `+CC NSN` shape.
fn fallback(code: u16, national: &str, mode: PhoneNumberFormat, ext: Option<&Extension>) -> String {
    let mut out = match mode {
        PhoneNumberFormat::E164 => return format!("+{}{}", code, national),
        PhoneNumberFormat::National => national.to_owned(),
        PhoneNumberFormat::International => format!("+{} {}", code, national),
        PhoneNumberFormat::Rfc3966 => format!("tel:+{}-{}", code, national),
    };

    append_extension(&mut out, None, ext);
    out
}

/// Best-effort literal prefix recovered from an IDD regex's first
/// alternative, used when a territory has no explicit
/// `preferred_international_prefix` (e.g. Brazil's
/// `00(?:1[45]|2[1-35]|...)` yields `"0014"`).
fn first_literal_alternative(idd: &CachedRegex) -> Option<String> {
    let mut out = String::new();
    let mut chars = idd.as_str().chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '0'..='9' => out.push(c),
            '[' => {
                if let Some(&inner) = chars.peek() {
                    out.push(inner);
                }
                for c2 in chars.by_ref() {
                    if c2 == ']' {
                        break;
                    }
                }
            }
            '(' | '?' | ':' => continue,
            _ => break,
        }
    }

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::country;
    use crate::national_number::NationalNumber;
    use crate::metadata::DATABASE;

    fn number(code: u16, national: u64) -> PhoneNumber {
        PhoneNumber::new(country::Code::new(code), NationalNumber::new(national))
    }

    #[test]
    fn nz_national_reattaches_prefix() {
        let n = number(64, 33316005);
        assert_eq!("(03)-331 6005", format(&DATABASE, &n, PhoneNumberFormat::National));
    }

    #[test]
    fn nz_international_has_no_prefix() {
        let n = number(64, 33316005);
        assert_eq!("+64 3-331 6005", format(&DATABASE, &n, PhoneNumberFormat::International));
    }

    #[test]
    fn e164_ignores_territory_rules() {
        let n = number(64, 33316005);
        assert_eq!("+6433316005", format(&DATABASE, &n, PhoneNumberFormat::E164));
    }

    #[test]
    fn italian_leading_zero_rendered_in_e164() {
        let n = number(39, 236618300).with_italian_leading_zero(true);
        assert_eq!("+390236618300", format(&DATABASE, &n, PhoneNumberFormat::E164));
    }

    #[test]
    fn de_has_no_national_prefix_formatting_rule() {
        let n = number(49, 1234);
        assert_eq!("1234", format(&DATABASE, &n, PhoneNumberFormat::National));
    }

    #[test]
    fn unmetered_country_code_falls_back_to_plus_cc_nsn() {
        let n = number(9999, 123456);
        assert_eq!("+9999 123456", format(&DATABASE, &n, PhoneNumberFormat::International));
    }

    #[test]
    fn extension_appended_with_territory_prefix() {
        let n = number(64, 33316005).with_extension(Some("3456".into()));
        assert_eq!(
            "+64 3-331 6005 ext. 3456",
            format(&DATABASE, &n, PhoneNumberFormat::International)
        );
    }

    #[test]
    fn argentina_mobile_uses_domestic_15_form_out_of_country_within_region() {
        let n = number(54, 91187654321);
        assert_eq!(
            "011 15 8765-4321",
            format_out_of_country_calling_number(&DATABASE, &n, "AR")
        );
    }
}
