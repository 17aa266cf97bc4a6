/// Host bridge
///
/// The boundary between the wardrobe core and whatever hosts it.
/// Outbound requests are fire-and-forget; inbound events are translated
/// into catalog/view operations by `state::wardrobe::Wardrobe`.

pub mod upload;

use crate::state::data::ClothingItem;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use upload::{wait_for_photo, PendingPhoto};

/// What the host is asked to upload
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    Clothing,
    Selfie,
}

/// Outbound payload, as sent to the host
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HostRequest {
    RequestUpload {
        #[serde(rename = "type")]
        kind: UploadKind,
    },
}

impl HostRequest {
    /// Encode for the host channel
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Result of an upload performed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// A new garment was photographed and catalogued
    Clothing(ClothingItem),
    /// The selfie for the try-on preview is available
    Selfie,
    /// The host gave up; the reason is only logged
    Failed { kind: UploadKind, reason: String },
}

/// Events the host delivers to the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Viewport or visibility changed; re-render without a state change
    ViewportChanged,
    /// An upload finished; the outcome says which kind it was
    UploadCompleted(UploadOutcome),
}

/// Outbound calls from the core to its host
pub trait HostBridge {
    fn request_upload(&mut self, kind: UploadKind);
}

/// Desktop host: there is no messaging channel, so requests are logged
#[derive(Debug, Default)]
pub struct DesktopBridge;

impl HostBridge for DesktopBridge {
    fn request_upload(&mut self, kind: UploadKind) {
        match (HostRequest::RequestUpload { kind }).to_json() {
            Ok(payload) => info!(%payload, "📤 host request"),
            Err(e) => warn!(error = %e, "failed to encode host request"),
        }
    }
}

/// Records every request; used to observe the core in tests
#[cfg(test)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingBridge {
    pub uploads: Vec<UploadKind>,
}

#[cfg(test)]
impl HostBridge for RecordingBridge {
    fn request_upload(&mut self, kind: UploadKind) {
        self.uploads.push(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let json = HostRequest::RequestUpload { kind: UploadKind::Clothing }.to_json().unwrap();
        assert_eq!(json, r#"{"action":"requestUpload","type":"clothing"}"#);

        let json = HostRequest::RequestUpload { kind: UploadKind::Selfie }.to_json().unwrap();
        assert_eq!(json, r#"{"action":"requestUpload","type":"selfie"}"#);
    }

    #[test]
    fn test_request_payload_parses_back() {
        let parsed: HostRequest =
            serde_json::from_str(r#"{"action":"requestUpload","type":"selfie"}"#).unwrap();
        assert_eq!(parsed, HostRequest::RequestUpload { kind: UploadKind::Selfie });
    }

    #[test]
    fn test_recording_bridge_keeps_order() {
        let mut bridge = RecordingBridge::default();
        bridge.request_upload(UploadKind::Selfie);
        bridge.request_upload(UploadKind::Clothing);
        assert_eq!(bridge.uploads, vec![UploadKind::Selfie, UploadKind::Clothing]);
    }
}
