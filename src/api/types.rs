//! Jobs REST payloads

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::suggestion::{Suggestion, SuggestionType};

/// Ids arrive as strings from some endpoints and numbers from others
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn optional_id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// A sourcing job as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "optional_id_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Fields this client does not model, kept for round trips
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Job {
    pub fn to_suggestion(&self) -> Suggestion {
        let name = if self.title.is_empty() {
            format!("Job {}", self.id)
        } else {
            self.title.clone()
        };
        let suggestion = Suggestion::new(self.id.clone(), SuggestionType::Job, name);
        match self.material.as_deref().or(self.status.as_deref()) {
            Some(category) => suggestion.with_category(category),
            None => suggestion,
        }
    }
}

/// Body for `POST /jobs` and `PUT /jobs/:id`; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    #[serde(
        default,
        deserialize_with = "optional_id_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of a create/update/delete call
#[derive(Debug, Clone, PartialEq)]
pub enum MutationResult {
    /// The server's echo of the job, when the response carried one
    Success(Option<Job>),
    Failure { error: String },
}

impl MutationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, MutationResult::Success(_))
    }

    /// `{ "success": true, "job": ... }` or `{ "success": false, "error": ... }`
    pub fn to_json(&self) -> Value {
        match self {
            MutationResult::Success(job) => {
                serde_json::json!({ "success": true, "job": job })
            }
            MutationResult::Failure { error } => {
                serde_json::json!({ "success": false, "error": error })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_accepts_numeric_id_and_keeps_extra_fields() {
        let job: Job = serde_json::from_str(
            r#"{"id":17,"userId":"u1","title":"Caps","quantity":5000,"colour":"blue"}"#,
        )
        .unwrap();
        assert_eq!(job.id, "17");
        assert_eq!(job.user_id.as_deref(), Some("u1"));
        assert_eq!(job.quantity, Some(Number::from(5000)));
        assert_eq!(job.extra.get("colour"), Some(&Value::from("blue")));

        let back = serde_json::to_value(&job).unwrap();
        assert_eq!(back["colour"], "blue");
        assert_eq!(back["userId"], "u1");
        assert_eq!(back["quantity"], serde_json::json!(5000));
    }

    #[test]
    fn test_job_accepts_numeric_user_id() {
        let jobs: Vec<Job> = serde_json::from_str(
            r#"[{"id":1,"userId":42,"title":"A"},{"id":2,"userId":null},{"id":3}]"#,
        )
        .unwrap();
        assert_eq!(jobs[0].user_id.as_deref(), Some("42"));
        assert_eq!(jobs[1].user_id, None);
        assert_eq!(jobs[2].user_id, None);
    }

    #[test]
    fn test_job_rejects_object_user_id() {
        assert!(serde_json::from_str::<Job>(r#"{"id":1,"userId":{"x":1}}"#).is_err());
    }

    #[test]
    fn test_quantity_keeps_its_json_number_type() {
        let job: Job =
            serde_json::from_str(r#"{"id":1,"quantity":5000,"colour":"red"}"#).unwrap();
        let back = serde_json::to_string(&job).unwrap();
        assert!(back.contains(r#""quantity":5000"#), "{}", back);
        assert!(!back.contains("5000.0"), "{}", back);

        let fractional: Job = serde_json::from_str(r#"{"id":2,"quantity":12.5}"#).unwrap();
        assert_eq!(serde_json::to_value(&fractional).unwrap()["quantity"], 12.5);
    }

    #[test]
    fn test_job_rejects_object_id() {
        assert!(serde_json::from_str::<Job>(r#"{"id":{"x":1}}"#).is_err());
    }

    #[test]
    fn test_job_to_suggestion() {
        let job: Job =
            serde_json::from_str(r#"{"id":"j9","title":"Crate run","material":"HDPE"}"#).unwrap();
        let s = job.to_suggestion();
        assert_eq!(s.suggestion_type, SuggestionType::Job);
        assert_eq!(s.name, "Crate run");
        assert_eq!(s.category.as_deref(), Some("HDPE"));

        let untitled: Job = serde_json::from_str(r#"{"id":"j10"}"#).unwrap();
        assert_eq!(untitled.to_suggestion().name, "Job j10");
    }

    #[test]
    fn test_draft_serializes_only_set_fields() {
        let draft = JobDraft {
            title: Some("Lids".to_string()),
            quantity: Some(Number::from(100)),
            ..JobDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Lids", "quantity": 100}));
    }

    #[test]
    fn test_mutation_result_json() {
        let failure = MutationResult::Failure {
            error: "HTTP 500".to_string(),
        };
        assert_eq!(failure.to_json()["success"], false);
        assert_eq!(failure.to_json()["error"], "HTTP 500");
        assert!(MutationResult::Success(None).to_json()["job"].is_null());
    }
}
