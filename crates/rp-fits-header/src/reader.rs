//! Block-level reading of the primary header
//!
//! The header is read one 2880-byte block at a time and each block is cut
//! into 80-byte records until the `END` record or the block ceiling is
//! reached, whichever comes first.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::index::HeaderSequence;
use crate::record::HeaderRecord;
use crate::{BLOCK_SIZE, RECORD_SIZE};

/// Number of blocks read before giving up on finding `END`
pub const DEFAULT_MAX_BLOCKS: usize = 10;

/// Bounds-checked cursor over the bytes of one block
#[derive(Debug)]
pub struct BlockCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> BlockCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Next record-sized slice, shorter than [`RECORD_SIZE`] only at the
    /// end of a partial block.
    pub fn next_record(&mut self) -> Option<&'a [u8]> {
        if self.remaining() == 0 {
            return None;
        }
        let end = self.offset.saturating_add(RECORD_SIZE).min(self.data.len());
        let slice = self.data.get(self.offset..end)?;
        self.offset = end;
        Some(slice)
    }
}

impl<'a> Iterator for BlockCursor<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

/// Reads header records from the start of a byte stream
#[derive(Debug)]
pub struct HeaderBlockReader<R> {
    reader: R,
    max_blocks: usize,
}

impl<R: Read> HeaderBlockReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            max_blocks: DEFAULT_MAX_BLOCKS,
        }
    }

    /// Override the block ceiling. A ceiling of 0 reads nothing.
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = max_blocks;
        self
    }

    /// Read records until `END`, end of stream or the block ceiling.
    ///
    /// Running out of data or blocks is not an error; the records collected
    /// so far are returned. Only I/O failures are reported.
    pub fn read_records(mut self) -> Result<HeaderSequence> {
        let mut records = Vec::new();
        let mut block = [0u8; BLOCK_SIZE];

        for block_index in 0..self.max_blocks {
            let filled = fill_block(&mut self.reader, &mut block)?;
            if filled == 0 {
                debug!("End of data after {} header blocks", block_index);
                break;
            }

            for bytes in BlockCursor::new(&block[..filled]) {
                let record = HeaderRecord::from_bytes(bytes);
                let is_end = record.is_end();
                records.push(record);
                if is_end {
                    debug!(
                        "Found END record in block {} ({} records)",
                        block_index,
                        records.len()
                    );
                    return Ok(HeaderSequence::new(records));
                }
            }

            if filled < BLOCK_SIZE {
                debug!(
                    "Partial header block {} ({} of {} bytes)",
                    block_index, filled, BLOCK_SIZE
                );
                break;
            }
        }

        debug!(
            "No END record within {} blocks, returning {} records",
            self.max_blocks,
            records.len()
        );
        Ok(HeaderSequence::new(records))
    }
}

/// Fill `block` from `reader`, returning how many bytes were read.
///
/// Fewer than `block.len()` bytes means the stream ended.
fn fill_block<R: Read>(reader: &mut R, block: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read the primary header of the file at `path`.
///
/// The file handle is dropped before returning on every path.
pub fn read_header_file(path: &Path, max_blocks: usize) -> Result<HeaderSequence> {
    debug!("Opening FITS file {}", path.display());
    let file = File::open(path)?;
    HeaderBlockReader::new(file)
        .with_max_blocks(max_blocks)
        .read_records()
}
