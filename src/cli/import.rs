use anyhow::{bail, Context, Result};
use log::info;
use ndarray::Array3;
use num_complex::Complex64;
use std::path::{Path, PathBuf};

use sm2117::dataset::{container_path, write_iq_dataset, WriteOptions};
use sm2117::format::Recordings;
use sm2117::metadata::{AttributeMap, RecordingMetadata};
use sm2117::path::{ChannelSuffixes, GroupPath};
use sm2117::store::WriteMode;

use super::config::Config;

pub struct ImportArgs {
    pub input: PathBuf,
    pub target: PathBuf,
    pub config: Option<PathBuf>,
    pub sampling_frequency: Option<f64>,
    pub group: Option<String>,
    pub name: Option<String>,
    pub suffixes: Vec<String>,
    pub overwrite: bool,
}

/// Import a CSV of (I, Q) column pairs
pub fn run(args: ImportArgs) -> Result<()> {
    if !args.input.exists() {
        bail!("Input file does not exist: {}", args.input.display());
    }

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let rows = read_csv(&args.input)?;
    let recordings = build_recordings(&rows)?;

    let mut options = WriteOptions::new();
    if let Some(hz) = args.sampling_frequency {
        options = options.sampling_frequency(hz);
    }
    options.group = match (&args.group, config.write.group.clone()) {
        (Some(group), _) => GroupPath::parse(group),
        (None, Some(spec)) => GroupPath::from(spec),
        (None, None) => GroupPath::root(),
    };
    options.dataset_name = args.name.clone().or(config.write.dataset_name.clone());
    options.channel_suffixes = if args.suffixes.is_empty() {
        config.channel_suffixes().unwrap_or_default()
    } else {
        ChannelSuffixes::List(args.suffixes.clone())
    };
    options.mode = if args.overwrite || config.write.overwrite.unwrap_or(false) {
        WriteMode::Overwrite
    } else {
        WriteMode::Append
    };

    let metadata = RecordingMetadata::from(config.metadata_map()?);
    let attributes: AttributeMap = write_iq_dataset(&args.target, &recordings, &metadata, &options)
        .with_context(|| format!("Failed to import {}", args.input.display()))?;

    info!(
        "Imported {} rows into {} ({} attributes)",
        rows.len(),
        container_path(&args.target).display(),
        attributes.len()
    );
    Ok(())
}

/// Read numeric rows; a first row that is not numeric is taken as a header.
pub fn read_csv(path: &Path) -> Result<Vec<Vec<f64>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.context("Failed to read CSV record")?;
        let parsed: std::result::Result<Vec<f64>, _> =
            record.iter().map(|field| field.parse::<f64>()).collect();
        match parsed {
            Ok(values) => rows.push(values),
            Err(_) if index == 0 => continue,
            Err(e) => bail!("Line {}: {}", index + 1, e),
        }
    }
    Ok(rows)
}

/// One channel becomes a complex vector; several become a
/// `(channels, samples, 2)` time-first array.
pub fn build_recordings(rows: &[Vec<f64>]) -> Result<Recordings> {
    let columns = match rows.first() {
        Some(first) => first.len(),
        None => bail!("CSV file contains no samples"),
    };
    if columns == 0 || columns % 2 != 0 {
        bail!("Expected an even number of columns (I, Q per channel), found {}", columns);
    }
    if let Some(row) = rows.iter().position(|r| r.len() != columns) {
        bail!("Row {} has {} columns, expected {}", row + 1, rows[row].len(), columns);
    }

    let channels = columns / 2;
    if channels == 1 {
        let samples: Vec<Complex64> = rows.iter().map(|r| Complex64::new(r[0], r[1])).collect();
        return Ok(Recordings::from(samples));
    }

    let array = Array3::from_shape_fn((channels, rows.len(), 2), |(c, t, k)| rows[t][2 * c + k]);
    Ok(Recordings::from(array))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm2117::format::RecordingFormat;
    use std::io::Write;

    #[test]
    fn test_read_csv_skips_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "i,q").unwrap();
        writeln!(file, "1.0, 2.0").unwrap();
        writeln!(file, "3,4").unwrap();

        let rows = read_csv(file.path()).unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_build_single_channel() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let recordings = build_recordings(&rows).unwrap();
        assert_eq!(recordings.format(), RecordingFormat::SingleComplex);
        assert_eq!(recordings.shape(), &[2]);
    }

    #[test]
    fn test_build_multiple_channels() {
        let rows = vec![vec![1.0, 2.0, 5.0, 6.0]; 3];
        let recordings = build_recordings(&rows).unwrap();
        assert_eq!(recordings.format(), RecordingFormat::MultipleTimeFirst);
        assert_eq!(recordings.shape(), &[2, 3, 2]);
    }

    #[test]
    fn test_build_rejects_odd_columns() {
        assert!(build_recordings(&[vec![1.0, 2.0, 3.0]]).is_err());
        assert!(build_recordings(&[]).is_err());
    }
}
