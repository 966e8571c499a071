use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use sm2117::dataset::{read_iq_dataset, IqDataset};
use sm2117::path::GroupPath;

/// Export one dataset as CSV with `<channel>_re,<channel>_im` column pairs
pub fn run(
    target: PathBuf,
    dataset: String,
    group: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let group = group.as_deref().map(GroupPath::parse).unwrap_or_default();
    let iq = read_iq_dataset(&target, &dataset, &group).with_context(|| {
        format!("Failed to read dataset '{}' from {}", dataset, target.display())
    })?;

    match &output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_csv(&iq, file)?;
            info!("Wrote {} samples to {}", iq.sample_count(), path.display());
        }
        None => write_csv(&iq, std::io::stdout().lock())?,
    }
    Ok(())
}

fn write_csv<W: Write>(dataset: &IqDataset, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let header: Vec<String> = dataset
        .channel_names
        .iter()
        .flat_map(|name| [format!("{}_re", name), format!("{}_im", name)])
        .collect();
    csv.write_record(&header)?;

    for column in dataset.samples.columns() {
        let record: Vec<String> = column
            .iter()
            .flat_map(|s| [s.re.to_string(), s.im.to_string()])
            .collect();
        csv.write_record(&record)?;
    }

    csv.flush().context("Failed to flush CSV output")?;
    Ok(())
}
