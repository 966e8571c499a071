use anyhow::{Context, Result};
use log::info;
use ndarray::Array3;
use std::f64::consts::PI;
use std::path::PathBuf;

use sm2117::dataset::{container_path, write_iq_dataset, WriteOptions};
use sm2117::format::Recordings;
use sm2117::metadata::RecordingMetadata;
use sm2117::store::WriteMode;

const SAMPLING_FREQUENCY: f64 = 1e6;
const CARRIER_FREQUENCY: f64 = 433.92e6;
// Timestamps are bounded to 2025-12-31
const CAPTURE_TIME: &str = "2025-06-01T12:00:00Z";

/// Generate a synthetic two-channel recording
pub fn run(target: PathBuf, samples: usize) -> Result<()> {
    info!("Generating {} samples per channel...", samples);
    let recordings = generate_tones(samples);

    let metadata = RecordingMetadata::new()
        .carrier_frequency(CARRIER_FREQUENCY)
        .device("synthetic two-tone generator")
        .comment("Channel_0 at +10 kHz, Channel_1 at -25 kHz")
        .timestamp(CAPTURE_TIME)
        .with("generator", format!("sm2117 {}", env!("CARGO_PKG_VERSION")));

    let options = WriteOptions::new()
        .sampling_frequency(SAMPLING_FREQUENCY)
        .dataset_name("Demo")
        .mode(WriteMode::Overwrite);

    write_iq_dataset(&target, &recordings, &metadata, &options)
        .context("Failed to write demo recording")?;

    let path = container_path(&target);
    let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    info!("Wrote {} ({} bytes)", path.display(), file_size);
    Ok(())
}

/// Two complex tones in the `(channels, 2, samples)` IQ-first layout
fn generate_tones(samples: usize) -> Recordings {
    let offsets = [10e3, -25e3];
    let tones = Array3::from_shape_fn((offsets.len(), 2, samples), |(c, k, t)| {
        let phase = 2.0 * PI * offsets[c] * t as f64 / SAMPLING_FREQUENCY;
        if k == 0 {
            phase.cos()
        } else {
            phase.sin()
        }
    });
    Recordings::from(tones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm2117::format::RecordingFormat;

    #[test]
    fn test_tones_layout() {
        let recordings = generate_tones(16);
        assert_eq!(recordings.shape(), &[2, 2, 16]);
        assert_eq!(recordings.format(), RecordingFormat::MultipleIqFirst);
    }

    #[test]
    fn test_demo_writes_container() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path().join("demo"), 64).unwrap();

        let dataset = sm2117::dataset::read_iq_dataset(
            dir.path().join("demo"),
            "Demo",
            &sm2117::path::GroupPath::root(),
        )
        .unwrap();
        assert_eq!(dataset.channel_names, vec!["Channel_0", "Channel_1"]);
        assert_eq!(dataset.sample_count(), 64);
    }
}
