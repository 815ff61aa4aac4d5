use clap::{App, Arg};
use pakfile::Package;

fn main() {
    let matches = App::new("Pak-Ls")
        .version("0.1.0")
        .about("Lists the entries in a package")
        .arg(
            Arg::new("package")
                .value_name("PACKAGE")
                .help("The package to list")
                .takes_value(true)
                .required(true),
        )
        .get_matches();

    let package = Package::open(matches.value_of("package").unwrap()).unwrap();
    for entry in package.entries() {
        println!("{:>12} {}", entry.length, entry.name);
    }
}
