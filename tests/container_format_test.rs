//! Integration tests for the .sm2117 ZIP container format
//!
//! These tests verify:
//! 1. MimeType compliance (first entry, uncompressed)
//! 2. Groups as directory entries, datasets as stored Parquet entries
//! 3. Each table is readable by a plain Parquet reader

use std::fs::File;
use std::io::{Cursor, Read, Write};

use bytes::Bytes;
use num_complex::Complex64;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use sm2117::dataset::{write_iq_dataset, WriteOptions};
use sm2117::format::Recordings;
use sm2117::metadata::RecordingMetadata;
use sm2117::schema::{KEY_ATTRIBUTES, KEY_FORMAT_VERSION, SM2117_FORMAT_VERSION, SM2117_MIMETYPE};
use sm2117::store::{read_container, StoreError};
use tempfile::tempdir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

fn write_sample(path: &std::path::Path) {
    let recordings = Recordings::from(vec![Complex64::new(0.5, -0.5); 16]);
    let options = WriteOptions::new()
        .sampling_frequency(2e6)
        .group(["site", "roof"])
        .dataset_name("Capture");
    write_iq_dataset(path, &recordings, &RecordingMetadata::new(), &options).unwrap();
}

#[test]
fn test_mimetype_first_and_stored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey.sm2117");
    write_sample(&path);

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let mut first = archive.by_index(0).unwrap();
    assert_eq!(first.name(), "mimetype");
    assert_eq!(first.compression(), CompressionMethod::Stored);

    let mut content = String::new();
    first.read_to_string(&mut content).unwrap();
    assert_eq!(content, SM2117_MIMETYPE);
}

#[test]
fn test_group_and_table_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey.sm2117");
    write_sample(&path);

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    assert!(names.contains(&"site/".to_string()));
    assert!(names.contains(&"site/roof/".to_string()));
    assert!(names.contains(&"site/roof/Capture.parquet".to_string()));

    let table = archive.by_name("site/roof/Capture.parquet").unwrap();
    assert_eq!(table.compression(), CompressionMethod::Stored);
}

#[test]
fn test_table_is_plain_parquet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey.sm2117");
    write_sample(&path);

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let mut entry = archive.by_name("site/roof/Capture.parquet").unwrap();
    let mut buffer = Vec::new();
    entry.read_to_end(&mut buffer).unwrap();

    let builder = ParquetRecordBatchReaderBuilder::try_new(Bytes::from(buffer)).unwrap();
    let kv = builder
        .metadata()
        .file_metadata()
        .key_value_metadata()
        .cloned()
        .unwrap_or_default();
    let lookup = |key: &str| {
        kv.iter()
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.value.clone())
    };
    assert_eq!(lookup(KEY_FORMAT_VERSION).as_deref(), Some(SM2117_FORMAT_VERSION));
    assert!(lookup(KEY_ATTRIBUTES).unwrap().contains("Sampling frequency (Hz)"));

    let fields: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    assert_eq!(fields, vec!["Channel_0"]);

    let rows: usize = builder
        .build()
        .unwrap()
        .map(|batch| batch.unwrap().num_rows())
        .sum();
    assert_eq!(rows, 16);
}

#[test]
fn test_foreign_mimetype_rejected() {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("mimetype", SimpleFileOptions::default()).unwrap();
    zip.write_all(b"application/vnd.other").unwrap();
    let cursor = zip.finish().unwrap();

    let result = read_container(Cursor::new(cursor.into_inner()));
    assert!(matches!(result, Err(StoreError::InvalidFormat(_))));
}

#[test]
fn test_garbage_is_an_error() {
    let result = read_container(Cursor::new(b"not a zip archive".to_vec()));
    assert!(result.is_err());
}
