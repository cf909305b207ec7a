use std::env;

use phonekit::PhoneNumberFormat;

fn main() {
    let mut args = env::args().skip(1).collect::<Vec<_>>();

    if args.is_empty() {
        panic!("usage: inspect [default-region] <number>");
    }

    let number = args.pop().unwrap();
    let region = args.pop().unwrap_or_else(|| "ZZ".to_owned());

    let number = phonekit::parse(&number, &region).expect("could not parse number");
    let valid = phonekit::is_valid_number(&number);

    if valid {
        println!("\x1b[32m{:#?}\x1b[0m", number);
        println!();
        println!(
            "International: {}",
            phonekit::format(&number, PhoneNumberFormat::International)
        );
        println!(
            "     National: {}",
            phonekit::format(&number, PhoneNumberFormat::National)
        );
        println!(
            "      RFC3966: {}",
            phonekit::format(&number, PhoneNumberFormat::Rfc3966)
        );
        println!(
            "        E.164: {}",
            phonekit::format(&number, PhoneNumberFormat::E164)
        );
        println!("         Type: {:?}", phonekit::get_number_type(&number));
    } else {
        println!("\x1b[31m{:#?}\x1b[0m", number);
    }
}
