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

//! A small, hand-written territory table.
//!
//! Real deployments load metadata from an external source (see the module
//! documentation); this table exists so the crate is self-contained for
//! its own tests and doctests, and covers just enough territories (NANPA,
//! a handful of European regions, Argentina, Brazil, Japan) to exercise
//! every branch of the parser, validator, formatter and matcher.

use super::metadata::Builder;
use super::{Descriptor, Format, Store};

fn descriptor(store: &Store, national: &str, possible: &str) -> Descriptor {
    Descriptor::new(store.regex(national), store.regex(possible))
}

fn build(store: &mut Store) {
    // United States: the main NANPA territory.
    let us = Builder::new("US", 1)
        .main_country_for_code(true)
        .international_prefix(store.regex("011"))
        .national_prefix("1")
        .national_prefix_for_parsing(store.regex("1"))
        .general(descriptor(store, r"[2-9]\d{9}", r"\d{10}").with_example("2015550123"))
        .fixed_line(descriptor(store, r"[2-9]\d{9}", r"\d{10}").with_example("2015550123"))
        .mobile(descriptor(store, r"[2-9]\d{9}", r"\d{10}").with_example("2015550123"))
        .toll_free(
            descriptor(store, r"8(?:00|33|44|55|66|77|88)\d{7}", r"\d{10}")
                .with_example("8005550123"),
        )
        .format(
            Format::new(store.regex(r"(\d{3})(\d{3})(\d{4})"), "$1-$2-$3"),
        )
        .build();
    store.insert(us);

    // New Zealand.
    let nz = Builder::new("NZ", 64)
        .national_prefix("0")
        .national_prefix_for_parsing(store.regex("0"))
        .general(descriptor(store, r"\d{7,9}", r"\d{7,10}").with_example("31234567"))
        .fixed_line(descriptor(store, r"\d{7,9}", r"\d{7,10}").with_example("31234567"))
        .mobile(descriptor(store, r"2\d{7,9}", r"\d{8,11}").with_example("211234567"))
        .format(
            Format::new(store.regex(r"(\d)(\d{3})(\d{4})"), "$1-$2 $3")
                .with_national_prefix_formatting_rule("($NP$FG)"),
        )
        .build();
    store.insert(nz);

    // United Kingdom.
    let gb = Builder::new("GB", 44)
        .international_prefix(store.regex("00"))
        .national_prefix("0")
        .national_prefix_for_parsing(store.regex("0"))
        .general(descriptor(store, r"\d{9,10}", r"\d{9,10}").with_example("1212345678"))
        .fixed_line(descriptor(store, r"\d{9,10}", r"\d{9,10}").with_example("1212345678"))
        .mobile(descriptor(store, r"7\d{9}", r"\d{10}").with_example("7400123456"))
        .format(
            Format::new(store.regex(r"(\d{2})(\d{4})(\d{4})"), "$1 $2 $3")
                .with_national_prefix_formatting_rule("0$FG"),
        )
        .build();
    store.insert(gb);

    // Germany.
    let de = Builder::new("DE", 49)
        .international_prefix(store.regex("00"))
        .national_prefix("0")
        .national_prefix_for_parsing(store.regex("0"))
        .general(descriptor(store, r"\d{2,11}", r"\d{2,11}").with_example("30123456"))
        .fixed_line(descriptor(store, r"\d{2,11}", r"\d{2,11}").with_example("30123456"))
        .mobile(descriptor(store, r"1\d{9,10}", r"\d{10,11}").with_example("15123456789"))
        .format(Format::new(store.regex(r"(\d+)"), "$1"))
        .build();
    store.insert(de);

    // Italy: national numbers keep their leading zero.
    let it = Builder::new("IT", 39)
        .international_prefix(store.regex("00"))
        .general(descriptor(store, r"\d{6,11}", r"\d{6,11}").with_example("0236618300"))
        .fixed_line(descriptor(store, r"0\d{5,10}", r"\d{6,11}").with_example("0236618300"))
        .mobile(descriptor(store, r"3\d{8,9}", r"\d{9,10}").with_example("3123456789"))
        .format(Format::new(store.regex(r"(\d{2})(\d{7})"), "$1 $2"))
        .build();
    store.insert(it);

    // Argentina: mobile numbers carry a "9" marker in the stored NSN that
    // is stripped and replaced with "15" when dialed domestically.
    let ar = Builder::new("AR", 54)
        .international_prefix(store.regex("00"))
        .national_prefix("0")
        .national_prefix_for_parsing(store.regex(r"0?(?:(11|2\d{3}|3\d{3})?15)?"))
        .national_prefix_transform_rule("9$1")
        .general(descriptor(store, r"9?\d{10}", r"\d{10,11}").with_example("91187654321"))
        .fixed_line(descriptor(store, r"\d{10}", r"\d{10}").with_example("1123456789"))
        .mobile(descriptor(store, r"9\d{10}", r"\d{11}").with_example("91187654321"))
        .format(
            Format::new(store.regex(r"9(\d{2})(\d{4})(\d{4})"), "$1 15 $2-$3")
                .with_national_prefix_formatting_rule("$NP$FG"),
        )
        .format(
            Format::new(store.regex(r"(\d{2})(\d{4})(\d{4})"), "$1 $2-$3")
                .with_national_prefix_formatting_rule("$NP$FG"),
        )
        .build();
    store.insert(ar);

    // Brazil.
    let br = Builder::new("BR", 55)
        .international_prefix(store.regex(
            "00(?:1[45]|2[1-35]|31|4[13]|5[1-5]|6[1-467]|7[1347])",
        ))
        .national_prefix("0")
        .national_prefix_for_parsing(store.regex("0"))
        .general(descriptor(store, r"\d{10,11}", r"\d{10,11}").with_example("1123456789"))
        .fixed_line(descriptor(store, r"\d{10}", r"\d{10}").with_example("1123456789"))
        .mobile(descriptor(store, r"\d{11}", r"\d{11}").with_example("11912345678"))
        .format(
            Format::new(store.regex(r"(\d{2})(\d{4,5})(\d{4})"), "$1 $2-$3")
                .with_national_prefix_formatting_rule("($NP$FG)"),
        )
        .build();
    store.insert(br);

    // Japan.
    let jp = Builder::new("JP", 81)
        .international_prefix(store.regex("010"))
        .national_prefix("0")
        .national_prefix_for_parsing(store.regex("0"))
        .general(descriptor(store, r"\d{9,10}", r"\d{9,10}").with_example("312345678"))
        .fixed_line(descriptor(store, r"\d{9,10}", r"\d{9,10}").with_example("312345678"))
        .mobile(descriptor(store, r"[7-9]0\d{8}", r"\d{10}").with_example("7012345678"))
        .format(Format::new(store.regex(r"(\d+)"), "$1"))
        .build();
    store.insert(jp);
}

lazy_static! {
    /// The built-in sample territory store, used whenever a caller does
    /// not supply their own `Store`.
    pub static ref DATABASE: Store = {
        let mut store = Store::new();
        build(&mut store);
        store
    };
}

#[cfg(test)]
mod test {
    use super::DATABASE;

    #[test]
    fn contains_expected_regions() {
        for region in ["US", "NZ", "GB", "DE", "IT", "AR", "BR", "JP"] {
            assert!(DATABASE.by_id(region).is_some(), "missing {region}");
        }
    }

    #[test]
    fn nanpa_includes_us() {
        assert!(DATABASE.is_nanpa_region("US"));
    }
}
