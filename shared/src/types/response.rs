//! The `{errno, errmsg}` response envelope and its stable code table.
//!
//! Every JSON endpoint replies with this envelope. The `errno` values are
//! part of the client contract and must never be renumbered; they are strings
//! (e.g. `"0"`, `"4103"`) for byte-compatibility with existing clients.

use serde::{Deserialize, Serialize};

/// Stable result codes shared with the frontend.
pub mod ret {
    /// Success
    pub const OK: &str = "0";
    /// Database query or write failed
    pub const DBERR: &str = "4001";
    /// Data not found or expired
    pub const NODATA: &str = "4002";
    /// Data already exists (e.g. duplicate registration)
    pub const DATAEXIST: &str = "4003";
    /// Data content error (e.g. wrong challenge code)
    pub const DATAERR: &str = "4004";
    /// Missing or malformed request parameters
    pub const PARAMERR: &str = "4103";
    /// User does not exist
    pub const USERERR: &str = "4104";
    /// Wrong username or password
    pub const PWDERR: &str = "4106";
    /// Third-party service failure
    pub const THIRDERR: &str = "4301";
    /// Internal server error
    pub const SERVERERR: &str = "4500";
}

/// Response envelope with a stable numeric code and a human-readable message.
///
/// Internal error text never leaks into `errmsg`; callers pass a message that
/// is safe to show to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = ()> {
    /// Stable result code, see [`ret`]
    pub errno: String,
    /// Human-readable message
    pub errmsg: String,
    /// Optional payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    /// Success envelope with no payload.
    pub fn ok(errmsg: impl Into<String>) -> Self {
        Self {
            errno: ret::OK.to_string(),
            errmsg: errmsg.into(),
            data: None,
        }
    }

    /// Error envelope with the given code.
    pub fn error(errno: &str, errmsg: impl Into<String>) -> Self {
        Self {
            errno: errno.to_string(),
            errmsg: errmsg.into(),
            data: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Success envelope carrying a payload.
    pub fn ok_with_data(errmsg: impl Into<String>, data: T) -> Self {
        Self {
            errno: ret::OK.to_string(),
            errmsg: errmsg.into(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_serialization() {
        let response = ApiResponse::ok("success");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errno"], "0");
        assert_eq!(json["errmsg"], "success");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let response = ApiResponse::error(ret::PARAMERR, "missing parameter");
        assert_eq!(response.errno, "4103");
        assert_eq!(response.errmsg, "missing parameter");
    }

    #[test]
    fn test_envelope_with_data() {
        let response = ApiResponse::ok_with_data("ok", vec![1, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ret::OK, "0");
        assert_eq!(ret::DBERR, "4001");
        assert_eq!(ret::NODATA, "4002");
        assert_eq!(ret::DATAEXIST, "4003");
        assert_eq!(ret::DATAERR, "4004");
        assert_eq!(ret::PARAMERR, "4103");
        assert_eq!(ret::USERERR, "4104");
        assert_eq!(ret::PWDERR, "4106");
        assert_eq!(ret::THIRDERR, "4301");
        assert_eq!(ret::SERVERERR, "4500");
    }
}
