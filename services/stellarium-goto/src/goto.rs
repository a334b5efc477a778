//! Reads a FITS header and sends its RA/DEC to Stellarium

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rp_fits_header::read_header_file;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::coords::EquatorialCoords;
use crate::error::{GotoError, Result};
use crate::io::HttpClient;

/// Keywords echoed to the operator before pointing
pub const SUMMARY_KEYWORDS: [&str; 5] = ["NAXIS1", "NAXIS2", "INSTRUME", "RA", "DEC"];

/// Form field carrying the view direction
pub const J2000_FIELD: &str = "j2000";

/// How Stellarium answered the view command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GotoOutcome {
    Accepted { body: String },
    Rejected { status: u16 },
}

/// Points Stellarium at the coordinates of one FITS file per call
pub struct GotoRunner {
    config: Config,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for GotoRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GotoRunner")
            .field("config", &self.config)
            .finish()
    }
}

impl GotoRunner {
    pub fn new(config: Config, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Read the header of `path`, convert RA/DEC and post the view command.
    ///
    /// A non-2xx answer is returned as [`GotoOutcome::Rejected`], not as an
    /// error.
    pub async fn run(&self, path: &Path) -> Result<GotoOutcome> {
        if !path.is_file() {
            return Err(GotoError::FileNotFound(path.to_path_buf()));
        }
        let full_path = std::fs::canonicalize(path)?;
        println!("Reading {}", full_path.display());

        let header = read_header_file(&full_path, self.config.header.max_blocks)?;
        debug!(
            "Read {} header records (terminated: {})",
            header.len(),
            header.has_terminator()
        );
        let index = header.index();

        for (key, value) in index.summary(&SUMMARY_KEYWORDS) {
            println!("{} {}", key, value.unwrap_or_default());
        }

        let coords = EquatorialCoords::from_header(&index)?;
        let vector = coords.to_j2000_vector();
        info!(
            "RA {} DEC {} -> {} (|v| = {})",
            coords.ra_deg,
            coords.dec_deg,
            vector,
            vector.magnitude()
        );

        let form_value = vector.to_form_value();
        println!("Sending Stellarium to {}", form_value);
        let response = self
            .http
            .post_form(&self.config.stellarium.url, &[(J2000_FIELD, form_value.as_str())])
            .await?;

        let outcome = if response.is_success() {
            println!("{}", response.body);
            GotoOutcome::Accepted {
                body: response.body,
            }
        } else {
            warn!(
                "Stellarium returned status {}: {}",
                response.status, response.body
            );
            println!("Error: {}", response.status);
            GotoOutcome::Rejected {
                status: response.status,
            }
        };

        let settle = self.config.stellarium.settle_delay_ms;
        if settle > 0 {
            debug!("Waiting {} ms after view command", settle);
            tokio::time::sleep(Duration::from_millis(settle)).await;
        }

        Ok(outcome)
    }
}
