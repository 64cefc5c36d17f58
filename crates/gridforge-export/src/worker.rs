//! Background image encoder.
//!
//! Rendering stays on the caller's thread; only the encode step is handed
//! to a single worker thread over a crossbeam channel. Each job carries a
//! bounded(1) reply channel. The worker owns nothing but the job it is
//! encoding, so a caller that drops its [`PendingRaster`] simply abandons
//! the result: the worker's send fails and it moves on.

use crate::error::{EnvironmentError, ExportError};
use crate::format::{ExportFormat, RasterFormat};
use crate::pipeline::{deliver, ExportReport};
use crate::raster::encode;
use crate::sink::{DownloadSink, ExportFile};
use crossbeam_channel::{Receiver, Sender};
use image::RgbaImage;
use std::thread::{self, JoinHandle};

type EncodeResult = Result<Vec<u8>, EnvironmentError>;

struct EncodeJob {
    image: RgbaImage,
    format: RasterFormat,
    reply: Sender<EncodeResult>,
}

/// Owns the encode thread. Dropping it drains queued jobs and joins.
pub struct EncodeWorker {
    jobs: Option<Sender<EncodeJob>>,
    thread: Option<JoinHandle<()>>,
}

impl EncodeWorker {
    /// Start the worker thread.
    pub fn spawn() -> Result<Self, EnvironmentError> {
        let (tx, rx) = crossbeam_channel::unbounded::<EncodeJob>();
        let thread = thread::Builder::new()
            .name("gridforge-encode".into())
            .spawn(move || worker_loop(rx))
            .map_err(|e| EnvironmentError::WorkerUnavailable {
                reason: format!("failed to spawn encode thread: {e}"),
            })?;
        Ok(Self {
            jobs: Some(tx),
            thread: Some(thread),
        })
    }

    /// Queue `image` for encoding.
    pub(crate) fn submit(
        &self,
        image: RgbaImage,
        format: RasterFormat,
    ) -> Result<Receiver<EncodeResult>, EnvironmentError> {
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        let job = EncodeJob {
            image,
            format,
            reply: reply_tx,
        };
        self.jobs
            .as_ref()
            .ok_or_else(|| EnvironmentError::WorkerUnavailable {
                reason: "encode worker is shut down".into(),
            })?
            .send(job)
            .map_err(|_| EnvironmentError::WorkerUnavailable {
                reason: "encode worker exited".into(),
            })?;
        Ok(reply_rx)
    }
}

impl Drop for EncodeWorker {
    fn drop(&mut self) {
        // Closing the channel ends the loop once the queue is drained.
        self.jobs.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("encode worker panicked");
            }
        }
    }
}

impl std::fmt::Debug for EncodeWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodeWorker")
            .field("running", &self.jobs.is_some())
            .finish()
    }
}

fn worker_loop(rx: Receiver<EncodeJob>) {
    while let Ok(job) = rx.recv() {
        let (w, h) = job.image.dimensions();
        let result = encode(&job.image, job.format);
        tracing::debug!(width = w, height = h, format = %job.format.extension(), ok = result.is_ok(), "encoded raster");
        // The caller may have dropped its handle.
        let _ = job.reply.send(result);
    }
}

/// A raster export whose encode is still running.
#[derive(Debug)]
pub struct PendingRaster {
    filename: String,
    format: RasterFormat,
    reply: Receiver<EncodeResult>,
}

impl PendingRaster {
    pub(crate) fn new(filename: String, format: RasterFormat, reply: Receiver<EncodeResult>) -> Self {
        Self {
            filename,
            format,
            reply,
        }
    }

    /// Filename the image will be delivered under.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Target encoding.
    pub fn format(&self) -> RasterFormat {
        self.format
    }

    /// Block for the encoded bytes.
    pub fn wait(self) -> Result<Vec<u8>, EnvironmentError> {
        self.reply
            .recv()
            .map_err(|_| EnvironmentError::WorkerUnavailable {
                reason: "encode worker exited before replying".into(),
            })?
    }

    /// Block for the bytes and hand them to `sink`.
    pub fn finish(self, sink: &mut dyn DownloadSink) -> Result<ExportReport, ExportError> {
        let format = self.format;
        let filename = self.filename.clone();
        let mut report = ExportReport::new(ExportFormat::Raster(format));
        let result = self.wait().and_then(|bytes| {
            deliver(
                sink,
                ExportFile {
                    filename,
                    media_type: format.media_type(),
                    bytes,
                },
                &mut report,
            )
        });
        match result {
            Ok(()) => Ok(report),
            Err(e) => {
                tracing::error!(format = %format.extension(), error = %e, "deferred export failed");
                Err(e.into())
            }
        }
    }
}
