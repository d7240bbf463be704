// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of GridView.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use serde::{Deserialize, Serialize};

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationType {
    /// Translation key of the severity caption
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Success => "General.success",
            Self::Error => "General.error",
            Self::Warning => "General.warning",
            Self::Info => "General.info",
        }
    }
}

/// Message surfaced to the user by the notification display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Interpolation parameters for `message`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

impl Notification {
    #[must_use]
    pub fn new(kind: NotificationType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Success, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Error, message)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Warning, message)
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Info, message)
    }

    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_wire_format() {
        let notification = Notification::error("Edge.Config.saveFailed")
            .with_code(-32000)
            .with_params(["ess0"]);

        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["code"], -32000);
        assert_eq!(json["params"][0], "ess0");
    }

    #[test]
    fn test_optional_fields_skipped() {
        let json = serde_json::to_string(&Notification::success("Saved")).unwrap();
        assert_eq!(json, r#"{"type":"success","message":"Saved"}"#);
    }

    #[test]
    fn test_deserialize_minimal() {
        let parsed: Notification =
            serde_json::from_str(r#"{"type":"warning","message":"Low SoC"}"#).unwrap();
        assert_eq!(parsed.kind, NotificationType::Warning);
        assert!(parsed.code.is_none());
        assert!(parsed.params.is_empty());
        assert_eq!(parsed.kind.label_key(), "General.warning");
    }
}
