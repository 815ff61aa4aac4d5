use std::{fs, io::Cursor, path::PathBuf};

use pakfile::{layout, Package, PackageBuilder, PackageError};
use pretty_assertions::assert_eq;

mod common;
use common::Fixture;

#[test]
fn read_entry() {
    let f = Fixture::blank("test.pak");
    let mut builder = PackageBuilder::new();
    builder.add_file(f.source("a.txt", b"hello")).unwrap();
    builder.add_file(f.source("b.txt", b"bye")).unwrap();
    let mut package = builder.build(PathBuf::from(&f)).unwrap();

    assert_eq!(package.read("a.txt").unwrap(), b"hello");
    assert_eq!(package.read("b.txt").unwrap(), b"bye");
}

#[test]
fn extract_entry_to_disk() {
    let f = Fixture::blank("test.pak");
    let mut builder = PackageBuilder::new();
    builder.add_file(f.source("a.txt", b"hello")).unwrap();
    let mut package = builder.build(PathBuf::from(&f)).unwrap();

    let out = f.dir("out").join("a.txt");
    package.extract("a.txt", &out).unwrap();
    assert_eq!(fs::read(out).unwrap(), b"hello");
}

#[test]
fn extract_all_roundtrip() {
    let f = Fixture::blank("test.pak");
    let mut builder = PackageBuilder::new();
    builder.add_file(f.source("a.txt", b"hello")).unwrap();
    builder.add_file(f.source("b.txt", b"bye")).unwrap();
    builder.add_bytes("c.bin", vec![0, 1, 2, 255]).unwrap();
    let mut package = builder.build(PathBuf::from(&f)).unwrap();

    let out = f.dir("out");
    package.extract_all(&out).unwrap();
    assert_eq!(fs::read(out.join("a.txt")).unwrap(), b"hello");
    assert_eq!(fs::read(out.join("b.txt")).unwrap(), b"bye");
    assert_eq!(fs::read(out.join("c.bin")).unwrap(), [0, 1, 2, 255]);
}

#[test]
fn read_missing_entry() {
    let f = Fixture::blank("test.pak");
    let mut builder = PackageBuilder::new();
    builder.add_file(f.source("a.txt", b"hello")).unwrap();
    let mut package = builder.build(PathBuf::from(&f)).unwrap();

    let err = package.read("nope.txt").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackageError>(),
        Some(PackageError::NotFound(_))
    ));
}

#[test]
fn read_empty_name() {
    let f = Fixture::blank("test.pak");
    let mut package = PackageBuilder::new().build(PathBuf::from(&f)).unwrap();
    let err = package.read("").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackageError>(),
        Some(PackageError::InvalidArgument(_))
    ));
}

#[test]
fn duplicate_name_is_ambiguous() {
    let f = Fixture::blank("test.pak");
    let mut builder = PackageBuilder::new();
    builder.add_bytes("dup.txt", b"one".to_vec()).unwrap();
    builder.add_bytes("dup.txt", b"two".to_vec()).unwrap();
    let mut package = builder.build(PathBuf::from(&f)).unwrap();

    // Both entries are representable; only lookup by name fails.
    assert_eq!(package.entries().len(), 2);
    let err = package.read("dup.txt").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackageError>(),
        Some(PackageError::AmbiguousName(_))
    ));
}

#[test]
fn open_file_smaller_than_header() {
    let err = Package::load(Box::new(Cursor::new(vec![0, 0]))).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackageError>(),
        Some(PackageError::Malformed(_))
    ));
}

#[test]
fn open_table_past_end_of_file() {
    // Count claims two descriptors but the file ends mid-table.
    let mut bytes = vec![0, 0, 0, 2];
    bytes.extend_from_slice(&[0u8; 10]);
    let err = Package::load(Box::new(Cursor::new(bytes))).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackageError>(),
        Some(PackageError::Malformed(_))
    ));
}

#[test]
fn open_negative_count() {
    let mut bytes = vec![0xFF, 0xFF, 0xFF, 0xFF];
    bytes.extend_from_slice(&[0u8; 64]);
    let err = Package::load(Box::new(Cursor::new(bytes))).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackageError>(),
        Some(PackageError::Malformed(_))
    ));
}

#[test]
fn open_offset_before_data_region() {
    // One descriptor whose offset points into the table itself.
    let mut bytes = vec![0, 0, 0, 1];
    bytes.extend_from_slice(&[0u8; layout::NAME_FIELD]);
    bytes.extend_from_slice(&2u64.to_be_bytes());
    let err = Package::load(Box::new(Cursor::new(bytes))).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackageError>(),
        Some(PackageError::Malformed(_))
    ));
}

#[test]
fn open_descending_offsets() {
    let data_start = layout::data_region_start(2);
    let mut bytes = vec![0, 0, 0, 2];
    bytes.extend_from_slice(&[0u8; layout::NAME_FIELD]);
    bytes.extend_from_slice(&(data_start + 4).to_be_bytes());
    bytes.extend_from_slice(&[0u8; layout::NAME_FIELD]);
    bytes.extend_from_slice(&data_start.to_be_bytes());
    bytes.extend_from_slice(&[0u8; 8]);
    let err = Package::load(Box::new(Cursor::new(bytes))).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackageError>(),
        Some(PackageError::Malformed(_))
    ));
}

#[test]
fn in_memory_package_roundtrip() {
    let mut bytes = vec![0, 0, 0, 1];
    let data_start = layout::data_region_start(1);
    bytes.extend_from_slice(b"a\0.\0t\0x\0t\0");
    bytes.extend_from_slice(&[0u8; layout::NAME_FIELD - 10]);
    bytes.extend_from_slice(&data_start.to_be_bytes());
    bytes.extend_from_slice(b"hello");

    let mut package = Package::load(Box::new(Cursor::new(bytes))).unwrap();
    assert_eq!(package.entries().len(), 1);
    assert_eq!(package.entries()[0].name, "a.txt");
    assert_eq!(package.read("a.txt").unwrap(), b"hello");
}
