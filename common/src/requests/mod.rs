//! Request payloads and response envelopes shared by the dashboard and its
//! host.
//!
//! Every JSON endpoint except the raw export answers with an object carrying
//! `success: bool`. A `false` answer may carry an `error` message; a body with
//! no `success` field at all is treated as malformed.

use crate::error::ApiError;
use crate::model::analytics::{AnalyticsSession, Profile};
use crate::model::field::{Field, TemplateEntry};
use crate::model::result::ResultRow;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Multipart field carrying the analytics linkage token.
pub const FORM_CONNECT_GA: &str = "connect_ga";
/// Multipart field carrying the serialized `(name, label)` pairs.
pub const FORM_FIELDS: &str = "fields";
/// Multipart field carrying the uploaded file.
pub const FORM_FILE: &str = "file";
/// Form field of the export submission.
pub const FORM_EXPORT_DATA: &str = "data";

/// Decodes a response body that follows the `success` envelope.
///
/// On `success: true` the whole object is deserialized into `T`.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Transport(e.to_string()))?;

    let success = value
        .as_object()
        .and_then(|object| object.get("success"))
        .ok_or(ApiError::Malformed)?;

    if success.as_bool() == Some(true) {
        serde_json::from_value(value).map_err(|_| ApiError::Malformed)
    } else {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string);
        Err(ApiError::Rejected(message))
    }
}

/// The generic envelope, as written by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
            result: None,
            data: None,
        }
    }

    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::ok()
        }
    }

    pub fn with_result(result: bool) -> Self {
        Self {
            result: Some(result),
            ..Self::ok()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            result: None,
            data: None,
        }
    }
}

/// Answer to the credential existence check.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialCheck {
    #[serde(default)]
    pub result: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileList {
    pub data: Vec<Profile>,
}

/// Body of the data template lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTemplateRequest {
    pub data: Vec<String>,
}

/// Body of the data template update: the field types of a validated build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTemplateUpdate {
    pub data: Vec<TemplateEntry>,
}

impl DataTemplateUpdate {
    pub fn from_snapshot(snapshot: &[Field]) -> Self {
        Self {
            data: snapshot
                .iter()
                .map(|f| TemplateEntry {
                    name: f.name.clone(),
                    label: f.type_label.clone(),
                    code: f.type_code,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataTemplate {
    pub data: Vec<TemplateEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildResult {
    pub data: Vec<ResultRow>,
}

/// Acknowledgement with no payload of interest.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {}

/// Non-file parts of the model build submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// `(field name, type label)` pairs; the server derives codes from labels.
    pub fields: Vec<(String, String)>,
    /// `"Exclude"` or the linked analytics profile id.
    pub connect_ga: String,
}

impl BuildRequest {
    pub fn new(snapshot: &[Field], session: &AnalyticsSession) -> Self {
        Self {
            fields: snapshot
                .iter()
                .map(|f| (f.name.clone(), f.type_label.clone()))
                .collect(),
            connect_ga: session.link_token(),
        }
    }

    /// Value of the `fields` multipart part: a JSON array of pairs.
    pub fn fields_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::analytics::ProfileSelection;
    use crate::model::field::FieldType;

    #[test]
    fn missing_success_is_malformed() {
        let outcome = decode_envelope::<Ack>(r#"{"data": []}"#);
        assert_eq!(outcome.unwrap_err(), ApiError::Malformed);

        let outcome = decode_envelope::<Ack>("[1, 2]");
        assert_eq!(outcome.unwrap_err(), ApiError::Malformed);
    }

    #[test]
    fn non_json_body_is_transport_failure() {
        let outcome = decode_envelope::<Ack>("<html>502</html>");
        assert!(matches!(outcome, Err(ApiError::Transport(_))));
    }

    #[test]
    fn rejected_carries_server_message() {
        let outcome = decode_envelope::<Ack>(r#"{"success": false, "error": "No file part."}"#);
        assert_eq!(
            outcome.unwrap_err(),
            ApiError::Rejected(Some("No file part.".into()))
        );

        let outcome = decode_envelope::<Ack>(r#"{"success": false}"#);
        assert_eq!(outcome.unwrap_err(), ApiError::Rejected(None));
    }

    #[test]
    fn success_payload_with_wrong_shape_is_malformed() {
        let outcome = decode_envelope::<ProfileList>(r#"{"success": true, "data": "nope"}"#);
        assert!(matches!(outcome, Err(ApiError::Malformed)));
    }

    #[test]
    fn decodes_each_payload() {
        let check: CredentialCheck = decode_envelope(r#"{"success": true, "result": true}"#).unwrap();
        assert!(check.result);
        let check: CredentialCheck = decode_envelope(r#"{"success": true}"#).unwrap();
        assert!(!check.result);

        let profiles: ProfileList =
            decode_envelope(r#"{"success": true, "data": [{"id": "5", "name": "Shop"}]}"#).unwrap();
        assert_eq!(profiles.data[0].name, "Shop");

        let template: DataTemplate =
            decode_envelope(r#"{"success": true, "data": [["age", "Numeric", "3"]]}"#).unwrap();
        assert_eq!(template.data[0].code, 3);

        let built: BuildResult =
            decode_envelope(r#"{"success": true, "data": [{"Name": "Ann", "Prob": 0.9}]}"#).unwrap();
        assert_eq!(built.data.len(), 1);
    }

    #[test]
    fn envelope_serializes_only_present_parts() {
        let json = serde_json::to_string(&Envelope::<()>::with_result(false)).unwrap();
        assert_eq!(json, r#"{"success":true,"result":false}"#);

        let json = serde_json::to_string(&Envelope::<()>::failed("No selected file.")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"No selected file."}"#);
    }

    #[test]
    fn build_request_uses_labels_and_link_token() {
        let snapshot = vec![
            Field::with_type("age", FieldType::Numeric),
            Field::with_type("churn", FieldType::Response),
        ];
        let session = AnalyticsSession {
            credentials_present: true,
            selected_profile: ProfileSelection::Profile("42".into()),
        };

        let request = BuildRequest::new(&snapshot, &session);
        assert_eq!(request.connect_ga, "42");
        assert_eq!(
            request.fields_json().unwrap(),
            r#"[["age","Numeric"],["churn","Response Variable"]]"#
        );

        let request = BuildRequest::new(&snapshot, &AnalyticsSession::default());
        assert_eq!(request.connect_ga, "Exclude");
    }

    #[test]
    fn template_update_carries_chosen_types() {
        let snapshot = vec![
            Field::with_type("age", FieldType::Numeric),
            Field::with_type("churn", FieldType::Response),
        ];
        let json = serde_json::to_string(&DataTemplateUpdate::from_snapshot(&snapshot)).unwrap();
        assert_eq!(
            json,
            r#"{"data":[["age","Numeric",3],["churn","Response Variable",9]]}"#
        );
    }
}
