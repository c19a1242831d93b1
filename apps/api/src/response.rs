use serde::Serialize;

/// Uniform response envelope: `{success, message, data}`.
///
/// Every endpoint answers HTTP 200 and signals business failure only through
/// the `success` flag; unset keys are omitted from the JSON body, so a plain
/// success carries no `message` and a failure usually carries no `data`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Envelope {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Envelope {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failure that still carries a well-formed payload (used by the page
    /// endpoint, which promises a parseable page shape even on fault).
    pub fn fail_with_data(message: impl Into<String>, data: T) -> Self {
        Envelope {
            success: false,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success with a message and no payload (delete confirmation).
    pub fn ok_message(message: impl Into<String>) -> Self {
        Envelope {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}
