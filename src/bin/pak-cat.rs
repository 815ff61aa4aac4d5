use std::io::{self, Write};

use clap::{App, Arg};
use pakfile::Package;

fn main() {
    let matches = App::new("Pak-Cat")
        .version("0.1.0")
        .about("Prints the contents of a file in a package")
        .arg(
            Arg::new("package")
                .value_name("PACKAGE")
                .help("The package to read")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("name")
                .value_name("NAME")
                .help("The entry to print")
                .takes_value(true)
                .required(true),
        )
        .get_matches();

    let mut package = Package::open(matches.value_of("package").unwrap()).unwrap();

    io::stdout()
        .write_all(&package.read(matches.value_of("name").unwrap()).unwrap())
        .unwrap();
}
