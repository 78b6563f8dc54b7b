//! AppMessage enum for async communication within the application.

use crate::error::CompletionError;

/// Messages sent from background tasks back to the UI task.
#[derive(Debug)]
pub enum AppMessage {
    /// A generate request finished, successfully or not.
    JokesGenerated {
        request_id: u64,
        result: Result<Vec<String>, CompletionError>,
    },
}
