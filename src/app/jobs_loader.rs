//! Background job fetch for the search catalog
//!
//! Runs a single `GET /jobs` on a worker thread with its own current-thread
//! tokio runtime so the event loop never blocks, and hands the result back
//! over a channel.

use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::api::{ApiError, Job, JobsClient};
use crate::notification::NotificationTemplate;

/// Why the fetch failed, used to pick the notification template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    Network,
    Server,
}

impl LoadFailure {
    pub fn classify(error: &ApiError) -> Self {
        match error {
            ApiError::Network(_) => LoadFailure::Network,
            _ => LoadFailure::Server,
        }
    }

    pub fn template(self) -> NotificationTemplate {
        match self {
            LoadFailure::Network => NotificationTemplate::NetworkError,
            LoadFailure::Server => NotificationTemplate::ServerError,
        }
    }
}

pub type JobsResult = Result<Vec<Job>, LoadFailure>;

#[derive(Debug)]
pub struct JobsLoader {
    rx: Receiver<JobsResult>,
}

impl JobsLoader {
    pub fn spawn(client: JobsClient) -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create tokio runtime for jobs loader: {}", e);
                    let _ = tx.send(Err(LoadFailure::Network));
                    return;
                }
            };

            let result = rt.block_on(client.try_list_jobs()).map_err(|e| {
                log::error!("Failed to load jobs: {}", e);
                LoadFailure::classify(&e)
            });
            // Receiver is gone if the user quit before the fetch finished
            let _ = tx.send(result);
        });

        Self { rx }
    }

    /// Wrap an existing channel
    pub fn from_receiver(rx: Receiver<JobsResult>) -> Self {
        Self { rx }
    }

    /// Non-blocking check for the result
    pub fn poll(&self) -> Option<JobsResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadFailure::Network)),
        }
    }
}
