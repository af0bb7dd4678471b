//!
//! Binary dictionary shards and the glob used to find them.
//!
//! A shard is a little-endian record file:
//!
//! ```text
//! magic   "VDSH"
//! version u8
//! count   u64
//! record* { term_len u32, term (utf-8), index u32, doc_freq u32 }
//! ```
//!
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use glob::glob;
use log::debug;

use vecdump_core::DictionaryError;
use vecdump_core::models::TermDictionary;

use crate::consts::{SHARD_EXTENSION, SHARD_MAGIC, SHARD_VERSION};
use crate::record::DictionaryRecord;

///
/// The sorted list of shard files matching a glob pattern.
///
pub struct ShardGlob {
    curr: usize,
    files: Vec<PathBuf>,
}

impl ShardGlob {
    pub fn new(pattern: &str) -> Result<Self, DictionaryError> {
        let entries = glob(pattern).map_err(|err| DictionaryError::Glob(err.to_string()))?;
        let mut files = entries
            .map(|entry| entry.map_err(|err| DictionaryError::Io(err.into_error())))
            .collect::<Result<Vec<_>, _>>()?;

        files.retain(|path| path.is_file());
        files.sort();

        if files.is_empty() {
            return Err(DictionaryError::NoShards(pattern.to_string()));
        }

        Ok(ShardGlob { curr: 0, files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Iterator for ShardGlob {
    type Item = PathBuf;
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.files.get(self.curr).cloned();
        self.curr += 1;
        result
    }
}

///
/// Streaming reader over the records of one shard.
///
pub struct ShardReader<R: Read> {
    reader: R,
    label: String,
    record_count: u64,
    records_read: u64,
}

impl ShardReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!("Opened dictionary shard {}", path.display());
        ShardReader::new(BufReader::new(file), path.display().to_string())
    }
}

impl<R: Read> ShardReader<R> {
    ///
    /// Wrap a reader positioned at the start of a shard and validate its header.
    ///
    /// # Arguments:
    /// - `reader`: the shard bytes
    /// - `label`: name used in error messages, usually the file path
    ///
    pub fn new(mut reader: R, label: String) -> Result<Self, DictionaryError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != SHARD_MAGIC {
            return Err(DictionaryError::InvalidShard {
                path: label,
                reason: "missing shard header".to_string(),
            });
        }

        let version = reader.read_u8()?;
        if version != SHARD_VERSION {
            return Err(DictionaryError::UnsupportedShardVersion(version));
        }

        let record_count = reader.read_u64::<LittleEndian>()?;

        Ok(Self {
            reader,
            label,
            record_count,
            records_read: 0,
        })
    }

    ///
    /// Number of records the header says the shard holds.
    ///
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    fn read_record(&mut self) -> Result<DictionaryRecord, DictionaryError> {
        let term_len = self.reader.read_u32::<LittleEndian>()? as usize;
        let mut term_bytes = vec![0u8; term_len];
        self.reader.read_exact(&mut term_bytes)?;
        let term = String::from_utf8(term_bytes).map_err(|_| DictionaryError::InvalidShard {
            path: self.label.clone(),
            reason: format!("term of record {} is not valid UTF-8", self.records_read),
        })?;

        let index = self.reader.read_u32::<LittleEndian>()?;
        let doc_freq = self.reader.read_u32::<LittleEndian>()?;

        Ok(DictionaryRecord {
            term,
            index,
            doc_freq,
        })
    }
}

impl<R: Read> Iterator for ShardReader<R> {
    type Item = Result<DictionaryRecord, DictionaryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.records_read >= self.record_count {
            return None;
        }
        self.records_read += 1;
        Some(self.read_record())
    }
}

///
/// Every record of every shard matched by a [`ShardGlob`], in file order.
///
/// Shards are opened lazily, one at a time.
///
pub struct ShardRecords {
    shards: ShardGlob,
    current: Option<ShardReader<BufReader<File>>>,
    failed: bool,
}

impl ShardRecords {
    pub fn new(shards: ShardGlob) -> Self {
        Self {
            shards,
            current: None,
            failed: false,
        }
    }
}

impl Iterator for ShardRecords {
    type Item = Result<DictionaryRecord, DictionaryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(reader) = self.current.as_mut() {
                match reader.next() {
                    Some(Ok(record)) => return Some(Ok(record)),
                    Some(Err(err)) => {
                        self.failed = true;
                        return Some(Err(err));
                    }
                    None => self.current = None,
                }
            }

            let path = self.shards.next()?;
            match ShardReader::open(&path) {
                Ok(reader) => self.current = Some(reader),
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

///
/// Writer for a single shard. The header count is patched in by [`ShardWriter::finish`].
///
pub struct ShardWriter {
    writer: BufWriter<File>,
    record_count: u64,
}

impl ShardWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(SHARD_MAGIC)?;
        writer.write_u8(SHARD_VERSION)?;
        writer.write_u64::<LittleEndian>(0)?; // placeholder for record count

        Ok(Self {
            writer,
            record_count: 0,
        })
    }

    pub fn append(&mut self, record: &DictionaryRecord) -> Result<(), DictionaryError> {
        let term = record.term.as_bytes();
        self.writer.write_u32::<LittleEndian>(term.len() as u32)?;
        self.writer.write_all(term)?;
        self.writer.write_u32::<LittleEndian>(record.index)?;
        self.writer.write_u32::<LittleEndian>(record.doc_freq)?;
        self.record_count += 1;
        Ok(())
    }

    ///
    /// Flush the records and rewrite the header with the final count.
    ///
    pub fn finish(mut self) -> Result<u64, DictionaryError> {
        self.writer.flush()?;

        let mut file = self.writer.into_inner().map_err(|err| err.into_error())?;
        file.seek(SeekFrom::Start((SHARD_MAGIC.len() + 1) as u64))?;
        file.write_u64::<LittleEndian>(self.record_count)?;
        file.sync_all()?;

        Ok(self.record_count)
    }
}

///
/// Split a dictionary into shards named `<prefix>-00000.shard`, `<prefix>-00001.shard`, ...
///
/// Unset slots are skipped and doc frequencies are written as `0`. An empty dictionary
/// still produces one (empty) shard so the output can be globbed.
///
/// # Returns:
/// - the paths of the written shards, in order
///
pub fn write_sharded_dictionary<P: AsRef<Path>>(
    dictionary: &TermDictionary,
    dir: P,
    prefix: &str,
    records_per_shard: usize,
) -> Result<Vec<PathBuf>, DictionaryError> {
    let records_per_shard = records_per_shard.max(1);
    let entries: Vec<(usize, &str)> = dictionary.iter().collect();

    let mut chunks: Vec<&[(usize, &str)]> = entries.chunks(records_per_shard).collect();
    if chunks.is_empty() {
        chunks.push(&[]);
    }

    let mut paths = Vec::with_capacity(chunks.len());
    for (shard_id, chunk) in chunks.into_iter().enumerate() {
        let path = dir
            .as_ref()
            .join(format!("{}-{:05}.{}", prefix, shard_id, SHARD_EXTENSION));

        let mut writer = ShardWriter::create(&path)?;
        for (index, term) in chunk {
            let index = u32::try_from(*index).map_err(|_| DictionaryError::IndexOutOfBounds {
                index: *index,
                len: u32::MAX as usize,
            })?;
            writer.append(&DictionaryRecord::new(*term, index, 0))?;
        }
        let count = writer.finish()?;
        debug!("Wrote {} records to {}", count, path.display());

        paths.push(path);
    }

    Ok(paths)
}
