use std::path::Path;

use clap::{App, Arg};
use pakfile::Package;

fn main() {
    let matches = App::new("Pak-Extract")
        .version("0.1.0")
        .about("Extracts files from a package")
        .arg(
            Arg::new("package")
                .value_name("PACKAGE")
                .help("The package to extract from")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("dest")
                .value_name("DEST")
                .help("The directory to extract into")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("name")
                .value_name("NAME")
                .help("Extract only the named entry")
                .takes_value(true),
        )
        .get_matches();

    let mut package = Package::open(matches.value_of("package").unwrap()).unwrap();
    let dest = Path::new(matches.value_of("dest").unwrap());
    match matches.value_of("name") {
        Some(name) => {
            std::fs::create_dir_all(dest).unwrap();
            package.extract(name, dest.join(name)).unwrap();
        }
        None => package.extract_all(dest).unwrap(),
    }
}
