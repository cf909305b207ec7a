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

//! Character-level canonicalization of raw, human-entered input.

use crate::consts;

/// Map every character to its digit meaning: ASCII and Unicode decimal
/// digits pass through their value (via [`consts::unicode_digit_value`],
/// which covers the full-width and other-script `Nd` digit runs, not just
/// ASCII `0`-`9`), letters map through the standard phone keypad (`ABC` ->
/// `2`, ..., `WXYZ` -> `9`), everything else is dropped.
///
/// Used where alphabetic characters carry semantic intent, such as the
/// national part of a number before country-code extraction.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter_map(|c| consts::unicode_digit_value(c).or_else(|| consts::ALPHA_MAPPINGS.get(&c).copied()))
        .collect()
}

/// As [`normalize`], but letters are dropped instead of mapped. Used once
/// a string is known to contain no alphabetic placeholders.
pub fn normalize_digits_only(s: &str) -> String {
    s.chars().filter_map(consts::unicode_digit_value).collect()
}

/// Cheap pre-filter: does `s` look anything like a phone number? Requires
/// at least two digits, a plausible starting character, and a restricted
/// punctuation set throughout.
pub fn is_viable(s: &str) -> bool {
    if s.len() < 2 {
        return false;
    }

    if !consts::VALID_START_CHAR.find(s).map(|m| m.start() == 0).unwrap_or(false) {
        return false;
    }

    let digits = s.chars().filter(|c| c.is_ascii_digit()).count();

    digits >= 2
}

/// Strip everything before the first character that could start a phone
/// number, truncate at the first character that cannot be part of one
/// (letters are let through here, since this runs before extension and
/// country-code extraction), and drop a second number glued on by `x...`
/// style extension collisions. Returns `""` if nothing usable remains.
pub fn extract_possible_number(value: &str) -> String {
    let start = match consts::VALID_START_CHAR.find(value) {
        Some(m) => m.start(),
        None => return String::new(),
    };

    let mut result = &value[start..];

    if let Some(trailing) = consts::UNWANTED_END_CHARS.find(result) {
        result = &result[..trailing.start()];
    }

    if let Some(extra) = consts::SECOND_NUMBER_START.find(result) {
        result = &result[..extra.start()];
    }

    result.to_owned()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_strips_symbols() {
        assert_eq!("034562", normalize("034-56&+#2"));
    }

    #[test]
    fn normalize_maps_letters() {
        assert_eq!("034426486479", normalize("034-I-am-HUNGRY"));
    }

    #[test]
    fn normalize_handles_wide_digits() {
        assert_eq!("420", normalize("\u{FF14}2\u{FF10}"));
    }

    #[test]
    fn extract_strips_leading_junk() {
        assert_eq!("0800-345-600", extract_possible_number("Tel:0800-345-600"));
    }

    #[test]
    fn extract_keeps_leading_alpha_placeholder() {
        assert_eq!("0800 FOR PIZZA", extract_possible_number("Tel:0800 FOR PIZZA"));
    }

    #[test]
    fn extract_keeps_plus() {
        assert_eq!("+800-345-600", extract_possible_number("Tel:+800-345-600"));
    }

    #[test]
    fn extract_empty_when_not_viable() {
        assert_eq!("", extract_possible_number("Num-...."));
    }

    #[test]
    fn extract_strips_leading_bracket() {
        assert_eq!("650) 253-0000", extract_possible_number("(650) 253-0000"));
    }

    #[test]
    fn extract_strips_trailing_junk() {
        assert_eq!("650) 253-0000", extract_possible_number("(650) 253-0000..- .."));
    }

    #[test]
    fn not_viable_when_too_few_digits() {
        assert!(!is_viable("+"));
        assert!(is_viable("+64123"));
    }
}
