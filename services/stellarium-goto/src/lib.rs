//! Stellarium goto
//!
//! Reads the RA/DEC recorded in the primary header of a FITS file, converts
//! them to a J2000 unit vector and asks a running Stellarium instance to
//! point its view there through the remote control plugin.

pub mod config;
pub mod coords;
pub mod error;
pub mod goto;
pub mod io;

pub use config::{load_config, Config, HeaderConfig, StellariumConfig};
pub use coords::{EquatorialCoords, J2000Vector};
pub use error::{GotoError, Result};
pub use goto::{GotoOutcome, GotoRunner};
pub use io::{HttpClient, HttpResponse, ReqwestHttpClient};

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Point Stellarium at the FITS file `path` using the production HTTP client
pub async fn run(config: Config, path: &Path) -> Result<GotoOutcome> {
    let http = ReqwestHttpClient::new(Duration::from_secs(config.stellarium.timeout_seconds))?;
    GotoRunner::new(config, Arc::new(http)).run(path).await
}
