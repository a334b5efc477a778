//! Synthetic FITS files shared by the integration tests

use std::io::Write;

use rp_fits_header::{BLOCK_SIZE, RECORD_SIZE};

pub const M13_CARDS: [&str; 6] = [
    "SIMPLE  =                    T / file conforms to FITS standard",
    "NAXIS1  =                 4144 / length of data axis 1",
    "NAXIS2  =                 2822 / length of data axis 2",
    "RA      =   250.44218951953331 / Epoch : J2000",
    "DEC     =    36.45730116119505 / Epoch : J2000",
    "END",
];

/// Write `cards` as one or more space-padded header blocks
pub fn fits_file(cards: &[&str]) -> tempfile::NamedTempFile {
    let mut data = Vec::new();
    for text in cards {
        let mut bytes = text.as_bytes().to_vec();
        bytes.resize(RECORD_SIZE, b' ');
        data.extend(bytes);
    }
    data.resize(data.len().div_ceil(BLOCK_SIZE).max(1) * BLOCK_SIZE, b' ');
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    file.write_all(&data).expect("failed to write temp file");
    file
}
