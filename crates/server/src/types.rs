use serde::{Deserialize, Serialize};

/// The body accepted by both generation endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The PDF to process, base64-encoded. Absence is reported by the provider.
    #[serde(rename = "fileBase64", default)]
    pub file_base64: Option<String>,
}

/// The uniform response of both generation endpoints.
///
/// On the wire this is `{"ok": true, "text": ...}` or `{"ok": false, "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireEnvelope", try_from = "WireEnvelope")]
pub enum Envelope {
    Success { text: String },
    Failure { error: String },
}

impl Envelope {
    pub fn success(text: impl Into<String>) -> Self {
        Envelope::Success { text: text.into() }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Envelope::Failure {
            error: error.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }
}

#[derive(Serialize, Deserialize)]
struct WireEnvelope {
    ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<Envelope> for WireEnvelope {
    fn from(envelope: Envelope) -> Self {
        match envelope {
            Envelope::Success { text } => WireEnvelope {
                ok: true,
                text: Some(text),
                error: None,
            },
            Envelope::Failure { error } => WireEnvelope {
                ok: false,
                text: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<WireEnvelope> for Envelope {
    type Error = String;

    fn try_from(wire: WireEnvelope) -> Result<Self, Self::Error> {
        match wire {
            WireEnvelope {
                ok: true,
                text: Some(text),
                ..
            } => Ok(Envelope::Success { text }),
            WireEnvelope {
                ok: false,
                error: Some(error),
                ..
            } => Ok(Envelope::Failure { error }),
            WireEnvelope { ok: true, .. } => Err("`ok: true` envelope without `text`".to_string()),
            WireEnvelope { ok: false, .. } => {
                Err("`ok: false` envelope without `error`".to_string())
            }
        }
    }
}
