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

#![allow(unused)]

use fnv::FnvHashMap;
use regex::{Regex, RegexBuilder};

/// The minimum length of the National Significant Number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;

/// The maximum length of the National Significant Number.
pub const MAX_LENGTH_FOR_NSN: usize = 16;

/// The maximum length of the country calling code.
pub const MAX_LENGTH_FOR_COUNTRY_CODE: usize = 3;

/// The length of the shortest prefix a possible number may have stripped
/// and still be meaningfully compared by the matcher.
pub const MIN_PREFIX_LENGTH_FOR_SHORT_NSN_MATCH: usize = 7;

/// Region-code for the unknown region.
pub const UNKNOWN_REGION: &str = "ZZ";

pub const NANPA_COUNTRY_CODE: u16 = 1;

pub const PLUS_SIGN: char = '+';
pub const STAR_SIGN: char = '*';
pub const SHARP_SIGN: char = '#';

pub const RFC3966_EXTN_PREFIX: &str = ";ext=";

lazy_static! {
    /// Only upper-case variants of alpha characters are stored.
    pub static ref ALPHA_MAPPINGS: FnvHashMap<char, char> = {
        let mut map = FnvHashMap::default();
        map.insert('A', '2'); map.insert('B', '2'); map.insert('C', '2');
        map.insert('D', '3'); map.insert('E', '3'); map.insert('F', '3');
        map.insert('G', '4'); map.insert('H', '4'); map.insert('I', '4');
        map.insert('J', '5'); map.insert('K', '5'); map.insert('L', '5');
        map.insert('M', '6'); map.insert('N', '6'); map.insert('O', '6');
        map.insert('P', '7'); map.insert('Q', '7'); map.insert('R', '7'); map.insert('S', '7');
        map.insert('T', '8'); map.insert('U', '8'); map.insert('V', '8');
        map.insert('W', '9'); map.insert('X', '9'); map.insert('Y', '9'); map.insert('Z', '9');

        let lower: Vec<(char, char)> = map
            .iter()
            .map(|(&k, &v)| (k.to_ascii_lowercase(), v))
            .collect();
        map.extend(lower);

        map
    };
}

/// The ASCII digit value of any Unicode decimal digit (the full-width
/// Arabic numerals and the various other-script `Nd`-category digit-zero
/// runs), or `None` for a character that isn't one.
///
/// ASCII digits pass straight through. The non-ASCII arms are the digit
/// classes `\p{Nd}` actually contains in practice (Arabic-Indic,
/// Extended Arabic-Indic, Devanagari, Bengali, Gurmukhi, Gujarati, Oriya,
/// Tamil, Telugu, Kannada, Malayalam, Thai, Lao, full-width).
pub fn unicode_digit_value(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }

    Some(match c {
        '٠' | '۰' | '߀' | '०' | '০' | '੦' | '૦' | '୦' | '௦' | '౦' | '೦' | '൦' | '๐' | '໐' | '０' => '0',
        '١' | '۱' | '߁' | '१' | '১' | '੧' | '૧' | '୧' | '௧' | '౧' | '೧' | '൧' | '๑' | '໑' | '１' => '1',
        '٢' | '۲' | '߂' | '२' | '২' | '੨' | '૨' | '୨' | '௨' | '౨' | '೨' | '൨' | '๒' | '໒' | '２' => '2',
        '٣' | '۳' | '߃' | '३' | '৩' | '੩' | '૩' | '୩' | '௩' | '౩' | '೩' | '൩' | '๓' | '໓' | '３' => '3',
        '٤' | '۴' | '߄' | '४' | '৪' | '੪' | '૪' | '୪' | '௪' | '౪' | '೪' | '൪' | '๔' | '໔' | '４' => '4',
        '٥' | '۵' | '߅' | '५' | '৫' | '੫' | '૫' | '୫' | '௫' | '౫' | '೫' | '൫' | '๕' | '໕' | '５' => '5',
        '٦' | '۶' | '߆' | '६' | '৬' | '੬' | '૬' | '୬' | '௬' | '౬' | '೬' | '൬' | '๖' | '໖' | '６' => '6',
        '٧' | '۷' | '߇' | '७' | '৭' | '੭' | '૭' | '୭' | '௭' | '౭' | '೭' | '൭' | '๗' | '໗' | '７' => '7',
        '٨' | '۸' | '߈' | '८' | '৮' | '੮' | '૮' | '୮' | '௮' | '౮' | '೮' | '൮' | '๘' | '໘' | '８' => '8',
        '٩' | '۹' | '߉' | '९' | '৯' | '੯' | '૯' | '୯' | '௯' | '౯' | '೯' | '൯' | '๙' | '໙' | '９' => '9',
        _ => return None,
    })
}

lazy_static! {

    /// Regular expression of acceptable punctuation found in phone numbers.
    /// This excludes punctuation found as a leading character only.
    ///
    /// This consists of dash characters, white space characters, full stops,
    /// slashes, square brackets, parentheses and tildes. It also includes the
    /// letter 'x' as that is found as a placeholder for carrier information in
    /// some phone numbers. Full-width variants are also present.
    pub static ref VALID_PUNCTUATION: String =
        String::from(r"-x\x{2010}-\x{2015}\x{2212}\x{30FC}\x{FF0D}-\x{FF0F} \x{00A0}\x{00AD}\x{200B}\x{2060}\x{3000}()\x{FF08}\x{FF09}\x{FF3B}\x{FF3D}.\[\]/~\x{2053}\x{223C}\x{FF5E}");

    /// Pattern for digits, ASCII and the Unicode decimal-digit categories.
    pub static ref DIGITS: String = String::from(r"\p{Nd}");

    /// Plus characters, ASCII and full-width.
    pub static ref PLUS_CHARS: String = String::from(r"\+\x{FF0B}");

    pub static ref PLUS_CHARS_PATTERN: Regex =
        Regex::new(&format!("[{}]+", *PLUS_CHARS)).unwrap();

    pub static ref SEPARATOR_PATTERN: Regex =
        Regex::new(&format!("[{}]+", *VALID_PUNCTUATION)).unwrap();

    /// Regular expression of acceptable characters that may start a phone number
    /// for the purposes of parsing. This allows us to strip away meaningless
    /// prefixes to phone numbers that may be mistakenly given to us. This
    /// consists of digits, the plus symbol and Arabic-Indic digits. This does
    /// not contain alpha characters, although they may be used later in the
    /// number.
    pub static ref VALID_START_CHAR: Regex =
        Regex::new(&format!("[{}{}]", *PLUS_CHARS, *DIGITS)).unwrap();

    /// Regular expression of characters typically used to start a second phone
    /// number for the purposes of parsing, such as for:
    /// (530) 583-6985 x302/x2303 -> the second extension here makes this
    /// actually two phone numbers. We remove the second extension so that the
    /// first number is parsed correctly.
    pub static ref SECOND_NUMBER_START: Regex =
        Regex::new(r"[\\/] *x").unwrap();

    /// Regular expression of trailing characters that we want to remove. We
    /// remove all characters that are not alpha or numerical characters. The
    /// hash character is retained here, as it may signify the previous block was
    /// an extension.
    pub static ref UNWANTED_END_CHARS: Regex =
        Regex::new(r"[[\P{N}&&\P{L}]&&[^#]]+$").unwrap();

    /// Default extension prefix to use when formatting, unless a region
    /// specifies its own preferred prefix.
    pub static ref DEFAULT_EXTN_PREFIX: &'static str = " ext. ";

    /// Pattern to capture digits used in an extension. Places a maximum length
    /// of 7 for an extension.
    pub static ref CAPTURING_EXTN_DIGITS: String = format!("({}{{1,7}})", *DIGITS);

    /// Regexp of all possible ways to write extensions, for use when parsing.
    /// This will be run as a case-insensitive regexp match. Wide character
    /// versions are also provided after each ASCII version.
    pub static ref EXTN_PATTERNS_FOR_PARSING: String =
        format!(r"{rfc3966_extn_prefix}{capturing_extn_digits}|[ \x{{00A0}}\t,]*(?:e?xt(?:ensi(?:o\x{{0301}}?|\x{{00F3}}))?n?|\x{{FF45}}?\x{{FF58}}\x{{FF54}}\x{{FF4E}}?|[{symbols}]|int|anexo|\x{{FF49}}\x{{FF4E}}\x{{FF54}})[:\.\x{{FF0E}}]?[ \x{{00A0}}\t,-]*{capturing_extn_digits}#?|[- ]+({digits}{{1,5}})#",
            rfc3966_extn_prefix = RFC3966_EXTN_PREFIX,
            capturing_extn_digits = *CAPTURING_EXTN_DIGITS,
            symbols = r",;x\x{FF58}#\x{FF03}~\x{FF5E}",
            digits = *DIGITS);

    /// Regexp of all known extension prefixes used by different regions,
    /// anchored at the end of the string, for use when parsing. Run
    /// case-insensitively.
    pub static ref EXTN_PATTERN: Regex =
        RegexBuilder::new(&format!(r"(?:{})$", *EXTN_PATTERNS_FOR_PARSING))
            .case_insensitive(true)
            .build()
            .unwrap();

    /// The FIRST_GROUP pattern was originally set to `$1`, but there are some
    /// countries for which the first group is not used in the national pattern
    /// (e.g. Argentina) so the `$1` group does not match correctly. We use
    /// `\d` instead so that whichever group is actually used by the pattern is
    /// matched.
    pub static ref FIRST_GROUP: Regex = Regex::new(r"(\$\d)").unwrap();
    pub static ref NP: &'static str = "$NP";
    pub static ref FG: &'static str = "$FG";
}
