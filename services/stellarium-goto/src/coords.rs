//! Equatorial coordinates and their J2000 unit vector

use rp_fits_header::HeaderIndex;

use crate::error::{GotoError, Result};

pub const RA_KEYWORD: &str = "RA";
pub const DEC_KEYWORD: &str = "DEC";

/// Right ascension and declination in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl EquatorialCoords {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    /// Read `RA` and `DEC` from the header.
    ///
    /// RA is checked first, so a header missing both reports RA.
    pub fn from_header(index: &HeaderIndex<'_>) -> Result<Self> {
        let ra_deg = read_degrees(index, RA_KEYWORD)?;
        let dec_deg = read_degrees(index, DEC_KEYWORD)?;
        Ok(Self { ra_deg, dec_deg })
    }

    pub fn to_j2000_vector(&self) -> J2000Vector {
        let ra = self.ra_deg.to_radians();
        let dec = self.dec_deg.to_radians();
        J2000Vector {
            x: dec.cos() * ra.cos(),
            y: dec.cos() * ra.sin(),
            z: dec.sin(),
        }
    }
}

fn read_degrees(index: &HeaderIndex<'_>, keyword: &str) -> Result<f64> {
    let entry = index
        .get_value(keyword)
        .ok_or_else(|| GotoError::MissingKeyword(keyword.to_string()))?;
    entry
        .parse_f64()
        .map_err(|source| GotoError::InvalidCoordinate {
            keyword: keyword.to_string(),
            value: entry.value_trimmed().to_string(),
            source,
        })
}

/// Cartesian direction in the J2000 frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct J2000Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl J2000Vector {
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// `[x,y,z]` as expected by the Stellarium `j2000` form field
    pub fn to_form_value(&self) -> String {
        format!("[{},{},{}]", self.x, self.y, self.z)
    }
}

impl std::fmt::Display for J2000Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_form_value())
    }
}
