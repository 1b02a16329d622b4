use leptos::prelude::*;
use thiserror::Error;

#[cfg(feature = "hydrate")]
use crate::profile::UploadResponse;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Could not reach the analysis service. Is it running?")]
    Network,
    #[error("The analysis service rejected the upload (status {0}).")]
    Status(u16),
    #[error("The analysis service sent back something unreadable.")]
    Decode,
}

/// Lifecycle of a single CV submission. One request at a time: a new file is
/// rejected while a previous one is still in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(UploadError),
}

impl UploadPhase {
    pub fn accepts_submission(&self) -> bool {
        !matches!(self, UploadPhase::Submitting)
    }
}

/// Reactive wrapper around [`UploadPhase`] shared between the drop zone, the
/// file picker and the status panel.
#[derive(Clone, Copy)]
pub struct UploadController {
    phase: RwSignal<UploadPhase>,
}

impl UploadController {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(UploadPhase::Idle),
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase.get()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase.get(), UploadPhase::Submitting)
    }

    /// Moves to `Submitting` unless a request is already in flight.
    pub fn try_begin(&self) -> bool {
        if !self.phase.get_untracked().accepts_submission() {
            return false;
        }
        self.phase.set(UploadPhase::Submitting);
        true
    }

    pub fn finish_ok(&self) {
        self.phase.set(UploadPhase::Succeeded);
    }

    pub fn finish_err(&self, err: UploadError) {
        self.phase.set(UploadPhase::Failed(err));
    }

    pub fn reset(&self) {
        self.phase.set(UploadPhase::Idle);
    }
}

impl Default for UploadController {
    fn default() -> Self {
        Self::new()
    }
}

/// Posts the CV as the multipart field `cv` and decodes the extraction
/// response. The abort signal fires when the landing page unmounts mid-flight.
#[cfg(feature = "hydrate")]
pub async fn post_cv(
    file: &web_sys::File,
    abort: Option<&web_sys::AbortSignal>,
) -> Result<UploadResponse, UploadError> {
    use gloo_net::http::Request;

    let form = web_sys::FormData::new().map_err(|_| UploadError::Network)?;
    form.append_with_blob_and_filename("cv", file, &file.name())
        .map_err(|_| UploadError::Network)?;

    let response = Request::post(&crate::config::upload_url())
        .abort_signal(abort)
        .body(form)
        .map_err(|_| UploadError::Network)?
        .send()
        .await
        .map_err(|_| UploadError::Network)?;

    if !response.ok() {
        return Err(UploadError::Status(response.status()));
    }
    response
        .json::<UploadResponse>()
        .await
        .map_err(|_| UploadError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_submitting_blocks_new_uploads() {
        assert!(UploadPhase::Idle.accepts_submission());
        assert!(!UploadPhase::Submitting.accepts_submission());
        assert!(UploadPhase::Succeeded.accepts_submission());
        assert!(UploadPhase::Failed(UploadError::Network).accepts_submission());
    }

    #[test]
    fn test_controller_rejects_reentry() {
        let ctl = UploadController::new();
        assert!(ctl.try_begin());
        assert!(!ctl.try_begin());
        ctl.finish_ok();
        assert!(ctl.try_begin());
    }

    #[test]
    fn test_controller_failure_then_retry() {
        let ctl = UploadController::new();
        assert!(ctl.try_begin());
        ctl.finish_err(UploadError::Status(500));
        assert_eq!(
            ctl.phase.get_untracked(),
            UploadPhase::Failed(UploadError::Status(500))
        );
        ctl.reset();
        assert!(ctl.try_begin());
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        assert!(UploadError::Status(413).to_string().contains("413"));
        assert!(!UploadError::Network.to_string().is_empty());
    }
}
