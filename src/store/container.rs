//! Single-file container: a ZIP archive of Parquet tables.
//!
//! ```text
//! capture.sm2117
//! ├── mimetype                  # "application/vnd.itu.sm2117" (stored, first entry)
//! ├── Dataset_0.parquet         # table in the root group
//! ├── site/                     # group
//! │   └── roof/                 # nested group
//! │       └── Capture.parquet   # table: one Struct{Real, Imag} column per field
//! ```
//!
//! Table attributes travel in the Parquet footer under
//! [`KEY_ATTRIBUTES`] as the ordered, type-tagged JSON form of
//! [`AttributeMap`].

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float32Array, StructArray};
use arrow::datatypes::{DataType, Field, Fields, Schema};
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use log::{debug, info, warn};
use num_complex::Complex32;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::format::KeyValue;
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::metadata::AttributeMap;
use crate::schema::{
    IMAG_FIELD, KEY_ATTRIBUTES, KEY_FORMAT_VERSION, REAL_FIELD, SM2117_FORMAT_VERSION,
    SM2117_MIMETYPE,
};

use super::memory::validate_name;
use super::{
    ContainerConfig, ContainerStore, GroupId, MemoryStore, Node, StoreError, TableId, WriteMode,
};

const MIMETYPE_ENTRY: &str = "mimetype";
const TABLE_SUFFIX: &str = ".parquet";

/// A container file opened for reading or staged writing.
///
/// All changes are made to an in-memory [`MemoryStore`]; nothing touches
/// disk until [`ContainerFile::commit`], which writes a temporary file next
/// to the target and renames it into place. Dropping the handle without
/// committing discards the staged changes.
#[derive(Debug)]
pub struct ContainerFile {
    path: PathBuf,
    store: MemoryStore,
    config: ContainerConfig,
    dirty: bool,
}

impl ContainerFile {
    /// Open for writing with the default encoding settings
    pub fn open<P: AsRef<Path>>(path: P, mode: WriteMode) -> Result<Self, StoreError> {
        Self::open_with_config(path, mode, ContainerConfig::default())
    }

    /// Open for writing with custom encoding settings
    pub fn open_with_config<P: AsRef<Path>>(
        path: P,
        mode: WriteMode,
        config: ContainerConfig,
    ) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let store = match mode {
            WriteMode::Append if path.exists() => {
                read_container(BufReader::new(File::open(&path)?))?
            }
            WriteMode::Append => MemoryStore::new(),
            WriteMode::Overwrite => MemoryStore::new(),
        };
        debug!("Opened {} in {:?} mode", path.display(), mode);

        Ok(Self {
            path,
            store,
            config,
            // Overwrite must replace the file even if nothing is added
            dirty: mode == WriteMode::Overwrite,
        })
    }

    /// Open an existing container for reading
    pub fn open_read<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let store = read_container(BufReader::new(File::open(&path)?))?;
        Ok(Self {
            path,
            store,
            config: ContainerConfig::default(),
            dirty: false,
        })
    }

    /// Path of the container file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Staged content
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Staged content, for modification
    pub fn store_mut(&mut self) -> &mut MemoryStore {
        self.dirty = true;
        &mut self.store
    }

    /// Write the staged content to disk atomically.
    pub fn commit(&mut self) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent)?;
        }

        let mut temp = NamedTempFile::new_in(&parent)?;
        let buf_writer =
            write_container(&self.store, BufWriter::new(temp.as_file_mut()), &self.config)?;
        buf_writer.into_inner().map_err(|e| {
            StoreError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to flush ZIP buffer: {}", e.error()),
            ))
        })?;
        // Keep the permissions of the file being replaced
        let permissions = match fs::metadata(&self.path) {
            Ok(existing) => existing.permissions(),
            Err(_) => default_permissions(temp.as_file())?,
        };
        temp.as_file().set_permissions(permissions)?;
        temp.persist(&self.path).map_err(|e| StoreError::IoError(e.error))?;

        self.dirty = false;
        info!(
            "Committed {} ({} tables)",
            self.path.display(),
            self.store.table_count()
        );
        Ok(())
    }
}

#[cfg(unix)]
fn default_permissions(_file: &File) -> Result<fs::Permissions, StoreError> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(file: &File) -> Result<fs::Permissions, StoreError> {
    Ok(file.metadata()?.permissions())
}

impl Drop for ContainerFile {
    fn drop(&mut self) {
        if self.dirty {
            debug!("Discarding uncommitted changes to {}", self.path.display());
        }
    }
}

/// Serialize a store as a container archive, returning the writer.
pub fn write_container<W: Write + Seek>(
    store: &MemoryStore,
    writer: W,
    config: &ContainerConfig,
) -> Result<W, StoreError> {
    let mut zip_writer = ZipWriter::new(writer);

    // mimetype MUST be uncompressed and first
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .unix_permissions(0o644);
    zip_writer.start_file(MIMETYPE_ENTRY, options)?;
    zip_writer.write_all(SM2117_MIMETYPE.as_bytes())?;

    write_group(store, store.root(), "", &mut zip_writer, config)?;

    Ok(zip_writer.finish()?)
}

fn write_group<W: Write + Seek>(
    store: &MemoryStore,
    group: GroupId,
    prefix: &str,
    zip_writer: &mut ZipWriter<W>,
    config: &ContainerConfig,
) -> Result<(), StoreError> {
    // Parquet tables stay uncompressed in the archive; they are ZSTD inside
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .unix_permissions(0o644);

    for (name, node) in store.children(group)? {
        match node {
            Node::Group(child) => {
                let path = format!("{}{}/", prefix, name);
                zip_writer.add_directory(path.as_str(), options)?;
                write_group(store, child, &path, zip_writer, config)?;
            }
            Node::Table(table) => {
                let bytes = encode_table(store, table, config)?;
                zip_writer.start_file(format!("{}{}{}", prefix, name, TABLE_SUFFIX), options)?;
                zip_writer.write_all(&bytes)?;
            }
        }
    }
    Ok(())
}

/// Load a container archive into memory.
pub fn read_container<R: Read + Seek>(reader: R) -> Result<MemoryStore, StoreError> {
    let mut archive = ZipArchive::new(reader)?;
    check_mimetype(&mut archive)?;

    let mut store = MemoryStore::new();
    for index in 1..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();

        if let Some(dir) = name.strip_suffix('/') {
            ensure_groups(&mut store, dir.split('/'))?;
        } else if let Some(stem) = name.strip_suffix(TABLE_SUFFIX) {
            let (group_path, table_name) = match stem.rsplit_once('/') {
                Some((group_path, table_name)) => (Some(group_path), table_name),
                None => (None, stem),
            };
            let group = match group_path {
                Some(path) => ensure_groups(&mut store, path.split('/'))?,
                None => store.root(),
            };
            // Declared sizes are untrusted
            let mut buffer = Vec::with_capacity(entry.size().min(1 << 26) as usize);
            entry.read_to_end(&mut buffer)?;
            decode_table(&mut store, group, table_name, Bytes::from(buffer))?;
        } else {
            warn!("Ignoring unexpected container entry {}", name);
        }
    }
    Ok(store)
}

fn check_mimetype<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<(), StoreError> {
    if archive.is_empty() {
        return Err(StoreError::InvalidFormat("empty container".to_string()));
    }
    let mut entry = archive.by_index(0)?;
    if entry.name() != MIMETYPE_ENTRY {
        return Err(StoreError::InvalidFormat(format!(
            "first entry is '{}', expected '{}'",
            entry.name(),
            MIMETYPE_ENTRY
        )));
    }
    let mut mimetype = String::new();
    entry.read_to_string(&mut mimetype)?;
    if mimetype != SM2117_MIMETYPE {
        return Err(StoreError::InvalidFormat(format!(
            "unsupported mimetype '{}'",
            mimetype
        )));
    }
    Ok(())
}

fn ensure_groups<'a>(
    store: &mut MemoryStore,
    segments: impl Iterator<Item = &'a str>,
) -> Result<GroupId, StoreError> {
    let mut current = store.root();
    for segment in segments {
        current = match store.child(current, segment)? {
            Some(Node::Group(id)) => id,
            Some(Node::Table(_)) => {
                return Err(StoreError::NameConflict(segment.to_string()));
            }
            None => store.create_group(current, segment)?,
        };
    }
    Ok(current)
}

fn pair_fields() -> Fields {
    Fields::from(vec![
        Field::new(REAL_FIELD, DataType::Float32, false),
        Field::new(IMAG_FIELD, DataType::Float32, false),
    ])
}

fn encode_table(
    store: &MemoryStore,
    table: TableId,
    config: &ContainerConfig,
) -> Result<Vec<u8>, StoreError> {
    let pairs = pair_fields();
    let mut schema_fields = Vec::new();
    let mut columns: Vec<ArrayRef> = Vec::new();

    for name in store.field_names(table)? {
        let samples = store.read_field(table, &name)?;
        let real = Float32Array::from_iter_values(samples.iter().map(|s| s.re));
        let imag = Float32Array::from_iter_values(samples.iter().map(|s| s.im));
        let column = StructArray::try_new(
            pairs.clone(),
            vec![Arc::new(real) as ArrayRef, Arc::new(imag) as ArrayRef],
            None,
        )?;
        schema_fields.push(Field::new(name, DataType::Struct(pairs.clone()), false));
        columns.push(Arc::new(column));
    }

    let schema = Arc::new(Schema::new(schema_fields));
    let batch = RecordBatch::try_new(schema.clone(), columns)?;

    let metadata = vec![
        KeyValue {
            key: KEY_FORMAT_VERSION.to_string(),
            value: Some(SM2117_FORMAT_VERSION.to_string()),
        },
        KeyValue {
            key: KEY_ATTRIBUTES.to_string(),
            value: Some(store.attributes(table)?.to_json()?),
        },
    ];
    let props = config.to_writer_properties(metadata);

    let mut writer = ArrowWriter::try_new(Vec::new(), schema, Some(props))?;
    writer.write(&batch)?;
    Ok(writer.into_inner()?)
}

fn decode_table(
    store: &mut MemoryStore,
    group: GroupId,
    name: &str,
    bytes: Bytes,
) -> Result<TableId, StoreError> {
    validate_name(name)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(bytes)?;

    let attributes = match builder
        .metadata()
        .file_metadata()
        .key_value_metadata()
        .and_then(|kv| kv.iter().find(|kv| kv.key == KEY_ATTRIBUTES))
        .and_then(|kv| kv.value.as_deref())
    {
        Some(json) => AttributeMap::from_json(json)?,
        None => AttributeMap::new(),
    };

    let field_names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let mut channels: Vec<Vec<Complex32>> = vec![Vec::new(); field_names.len()];

    for batch in builder.build()? {
        let batch = batch?;
        for (index, column) in batch.columns().iter().enumerate() {
            let pairs = column
                .as_any()
                .downcast_ref::<StructArray>()
                .ok_or_else(|| invalid_column(name, &field_names[index]))?;
            let real = float_child(pairs, REAL_FIELD)
                .ok_or_else(|| invalid_column(name, &field_names[index]))?;
            let imag = float_child(pairs, IMAG_FIELD)
                .ok_or_else(|| invalid_column(name, &field_names[index]))?;
            channels[index].extend(
                real.values()
                    .iter()
                    .zip(imag.values().iter())
                    .map(|(&re, &im)| Complex32::new(re, im)),
            );
        }
    }

    let rows = channels.first().map_or(0, Vec::len);
    let table = store.create_table(group, name, &field_names, rows)?;
    for (field, samples) in field_names.iter().zip(&channels) {
        store.write_field(table, field, samples)?;
    }
    store.set_attributes(table, &attributes)?;
    Ok(table)
}

fn float_child<'a>(pairs: &'a StructArray, name: &str) -> Option<&'a Float32Array> {
    pairs
        .column_by_name(name)?
        .as_any()
        .downcast_ref::<Float32Array>()
}

fn invalid_column(table: &str, field: &str) -> StoreError {
    StoreError::InvalidFormat(format!(
        "column '{}' of table '{}' is not a {}/{} pair",
        field, table, REAL_FIELD, IMAG_FIELD
    ))
}
