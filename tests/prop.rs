use phonekit::country;
use proptest::prelude::*;

proptest! {
    #[test]
    fn doesnt_crash(s in "\\PC*") {
        let _ = phonekit::parse(&s, "ZZ");
    }

    #[test]
    fn parse_german_phonenumbers(s in "\\+49[0-9]{6,10}") {
        let parsed = phonekit::parse(&s, "ZZ").expect("valid German number");
        prop_assert_eq!(parsed.country().id(), Some(country::DE));
    }
}
