use clap::{App, Arg};
use pakfile::{FileAdd, Package};

fn main() {
    let matches = App::new("Pak-Add")
        .version("0.1.0")
        .about("Appends files to an existing package")
        .arg(
            Arg::new("package")
                .value_name("PACKAGE")
                .help("The package to grow")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("The files to append")
                .takes_value(true)
                .multiple_values(true)
                .required(true),
        )
        .get_matches();

    let mut package = Package::open(matches.value_of("package").unwrap()).unwrap();
    for input in matches.values_of("input").unwrap() {
        package.append(FileAdd::Name(input.into())).unwrap();
    }
    package.close().unwrap();
}
