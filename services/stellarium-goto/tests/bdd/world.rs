//! BDD test world for stellarium-goto

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cucumber::World;
use rp_fits_header::{HeaderSequence, KeywordEntry, BLOCK_SIZE, RECORD_SIZE};
use stellarium_goto::{GotoOutcome, HttpClient, HttpResponse};
use tempfile::TempDir;

/// HTTP client that records form posts and answers with a fixed status
#[derive(Debug)]
pub struct RecordingClient {
    pub status: u16,
    pub posts: Mutex<Vec<Vec<(String, String)>>>,
}

impl RecordingClient {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            posts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HttpClient for RecordingClient {
    async fn post_form(
        &self,
        _url: &str,
        params: &[(&str, &str)],
    ) -> stellarium_goto::Result<HttpResponse> {
        self.posts.lock().unwrap().push(
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        Ok(HttpResponse {
            status: self.status,
            body: "ok".to_string(),
        })
    }
}

#[derive(Debug, Default, World)]
pub struct GotoWorld {
    // Header construction
    pub cards: Vec<String>,
    pub temp_dir: Option<TempDir>,
    pub file_path: Option<PathBuf>,
    pub max_blocks: Option<usize>,

    // Header reading
    pub header: Option<HeaderSequence>,
    pub lookup: Option<Option<KeywordEntry>>,

    // Pointing
    pub client: Option<Arc<RecordingClient>>,
    pub outcome: Option<GotoOutcome>,
    pub last_error: Option<String>,
}

impl GotoWorld {
    /// Write the collected cards as space-padded header blocks
    pub fn write_file(&mut self) -> PathBuf {
        let mut data = Vec::new();
        for text in &self.cards {
            let mut bytes = text.as_bytes().to_vec();
            bytes.resize(RECORD_SIZE, b' ');
            data.extend(bytes);
        }
        data.resize(data.len().div_ceil(BLOCK_SIZE).max(1) * BLOCK_SIZE, b' ');

        let dir = self
            .temp_dir
            .get_or_insert_with(|| TempDir::new().expect("failed to create temp dir"));
        let path = dir.path().join("image.fits");
        std::fs::write(&path, data).expect("failed to write temp file");
        self.file_path = Some(path.clone());
        path
    }
}
