use serde::Deserialize;

use crate::StatusFrame;

/// Server asks the window to shut down.
const TAG_CLOSE: &str = "close";
/// One unit of launcher work finished.
const TAG_PROGRESS_STEP: &str = "progress_step";
/// Expected total number of steps, as a numeric string payload.
const TAG_PROGRESS_MAX: &str = "progress_max";
/// Window title replacement.
const TAG_TITLE: &str = "title";

/// Wire shape of one status frame: `{"type": ..., "payload": ...}`.
/// Both fields are optional on the wire and default to the empty string.
#[derive(Debug, Deserialize)]
struct WireFrame {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    payload: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("frame is not a valid status object: {0}")]
    Json(#[from] serde_json::Error),
    #[error("progress_max payload is not numeric: {payload:?}")]
    ProgressMax { payload: String },
}

/// Decodes one UTF-8 text frame into a [`StatusFrame`].
///
/// The launcher also emits `message` and `error` tags; both carry plain
/// user text and take the fallback path together with any tag this client
/// does not know.
pub fn decode_frame(raw: &str) -> Result<StatusFrame, FrameError> {
    let frame: WireFrame = serde_json::from_str(raw)?;
    let decoded = match frame.kind.as_str() {
        TAG_CLOSE => StatusFrame::Close,
        TAG_PROGRESS_STEP => StatusFrame::ProgressStep,
        TAG_PROGRESS_MAX => {
            let max = frame
                .payload
                .trim()
                .parse::<f64>()
                .map_err(|_| FrameError::ProgressMax {
                    payload: frame.payload.clone(),
                })?;
            StatusFrame::ProgressMax(max)
        }
        TAG_TITLE => StatusFrame::Title(frame.payload),
        _ => StatusFrame::Status(frame.payload),
    };
    Ok(decoded)
}
