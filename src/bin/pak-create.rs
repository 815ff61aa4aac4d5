use clap::{App, Arg};
use pakfile::PackageBuilder;
use walkdir::WalkDir;

fn main() {
    let matches = App::new("Pak-Create")
        .version("0.1.0")
        .about("Builds a package from a set of files")
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help("The package file to generate")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("The files or directories to pack")
                .takes_value(true)
                .multiple_values(true)
                .required(true),
        )
        .get_matches();

    let mut builder = PackageBuilder::new();
    for input in matches.values_of("input").unwrap() {
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.unwrap();
            if entry.file_type().is_file() {
                builder.add_file(entry.path()).unwrap();
            }
        }
    }

    let package = builder.build(matches.value_of("output").unwrap()).unwrap();
    println!("packed {} files", package.entries().len());
}
