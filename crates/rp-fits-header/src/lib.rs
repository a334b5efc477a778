//! Primary FITS header reader
//!
//! Reads the 2880-byte header blocks at the start of a FITS file, slices
//! them into 80-character records and answers keyword lookups against the
//! resulting sequence. Only the primary header is handled; this is not a
//! general FITS library.

pub mod error;
pub mod index;
pub mod reader;
pub mod record;
pub mod value;

pub use error::{HeaderError, Result};
pub use index::{HeaderIndex, HeaderSequence};
pub use reader::{read_header_file, BlockCursor, HeaderBlockReader, DEFAULT_MAX_BLOCKS};
pub use record::HeaderRecord;
pub use value::{parse_value, KeywordEntry};

/// Size of one FITS block in bytes
pub const BLOCK_SIZE: usize = 2880;

/// Width of one header record in characters
pub const RECORD_SIZE: usize = 80;

/// Number of header records in a full block
pub const RECORDS_PER_BLOCK: usize = BLOCK_SIZE / RECORD_SIZE;

/// Width of the keyword field at the start of a record
pub const KEYWORD_WIDTH: usize = 8;

/// Offset of the value field (after `KEYWORD= `)
pub const VALUE_OFFSET: usize = 10;
