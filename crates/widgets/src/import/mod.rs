pub mod client;
pub mod models;
pub mod poller;
pub mod progress;
pub mod session;

pub use client::{ImportClient, ImportClientConfig, ImportClientError, ImportTaskSource};
pub use models::{ImportStatus, UploadMode};
pub use poller::{UploadPoller, DEFAULT_POLL_INTERVAL};
pub use progress::{UploadProgressView, ValidationError};
pub use session::{run_import, ImportOutcome, ImportRequest};
