use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use moi_core::{resolve_moi_paths, MoiFile, MoiParser, ParseError, ParseFailure, PathError};

use crate::config::Config;

/// Outcome of a batch run over one or more MOI files
///
/// Every resolved input path lands in exactly one of `files` and
/// `failures`, so `files.len() + failures.len() == total`.
#[derive(Debug)]
pub struct BatchOutcome {
    pub total: usize,
    pub files: Vec<MoiFile>,
    pub failures: Vec<ParseFailure>,
    pub total_time: Duration,
}

impl BatchOutcome {
    /// A batch succeeded when no file produced a failure. An empty batch
    /// counts as success ("nothing found" is not an error).
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parses every MOI file under a path using a bounded worker pool
pub struct BatchParser {
    worker_semaphore: Arc<Semaphore>,
    max_concurrent: usize,
}

impl BatchParser {
    pub fn new(config: &Config) -> Self {
        let max_workers = config.performance.max_workers.max(1);
        Self {
            worker_semaphore: Arc::new(Semaphore::new(max_workers)),
            max_concurrent: max_workers,
        }
    }

    /// Parse all MOI files named by `path` (a file or a directory).
    ///
    /// A bad root path fails the whole run before any file is read.
    /// Everything after that is isolated per file; a malformed or
    /// unreadable file becomes a [`ParseFailure`] and the batch continues.
    pub async fn run(&self, path: &Path) -> Result<BatchOutcome, PathError> {
        let start_time = Instant::now();

        let moi_paths = resolve_moi_paths(path).await?;
        let total = moi_paths.len();

        if moi_paths.is_empty() {
            info!("No .MOI files found at {}", path.display());
            return Ok(BatchOutcome {
                total: 0,
                files: Vec::new(),
                failures: Vec::new(),
                total_time: start_time.elapsed(),
            });
        }

        info!("📼 Found {} MOI file(s) to parse", total);

        // One task per file. Results are joined back in spawn order, so the
        // outcome is indistinguishable from a sequential run no matter how
        // the workers interleave.
        let mut handles = Vec::with_capacity(total);
        for (index, moi_path) in moi_paths.into_iter().enumerate() {
            let semaphore = Arc::clone(&self.worker_semaphore);
            let task_path = moi_path.clone();

            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.unwrap();
                debug!("📼 Parsing {}/{}: {}", index + 1, total, task_path.display());
                parse_moi_file(&task_path).await
            });
            handles.push((moi_path, handle));
        }

        let mut files = Vec::new();
        let mut failures = Vec::new();
        for (moi_path, handle) in handles {
            match handle.await {
                Ok(Ok(moi_file)) => {
                    debug!("✅ Parsed {}", moi_path.display());
                    files.push(moi_file);
                }
                Ok(Err(failure)) => {
                    warn!("❌ {}", failure);
                    failures.push(failure);
                }
                Err(join_error) => {
                    // A panicked worker must not lose its input path.
                    failures.push(ParseFailure {
                        file_path: moi_path,
                        error: ParseError::Unknown(Box::new(join_error)),
                    });
                }
            }
        }

        let outcome = BatchOutcome {
            total,
            files,
            failures,
            total_time: start_time.elapsed(),
        };

        info!(
            "🏁 Parsed {}/{} file(s) in {:.2}s",
            outcome.files.len(),
            outcome.total,
            outcome.total_time.as_secs_f64()
        );

        Ok(outcome)
    }

    /// Get batch parser statistics
    pub fn stats(&self) -> BatchStats {
        BatchStats {
            max_workers: self.max_concurrent,
            available_permits: self.worker_semaphore.available_permits(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchStats {
    pub max_workers: usize,
    pub available_permits: usize,
}

/// Read and parse one MOI file, attaching the path to any failure.
async fn parse_moi_file(moi_path: &Path) -> Result<MoiFile, ParseFailure> {
    let data = tokio::fs::read(moi_path).await.map_err(|e| ParseFailure {
        file_path: moi_path.to_path_buf(),
        error: ParseError::Io(e),
    })?;

    match MoiParser::new(&data).parse() {
        Ok(mut moi_file) => {
            moi_file.file_name = Some(
                moi_path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );
            Ok(moi_file)
        }
        Err(error) => Err(ParseFailure {
            file_path: moi_path.to_path_buf(),
            error,
        }),
    }
}
