//! Frontend Models
//!
//! Form fields and the data structures exchanged with the task API.

use serde::{Deserialize, Serialize};

/// Editable form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Address,
    Priority,
    Duration,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Address,
        Field::Priority,
        Field::Duration,
    ];

    /// Field name used for the DOM `name`/`id` and the JSON key
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Address => "address",
            Field::Priority => "priority",
            Field::Duration => "duration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title *",
            Field::Description => "Description",
            Field::Address => "Address *",
            Field::Priority => "Priority *",
            Field::Duration => "Estimated Duration (minutes)",
        }
    }

    /// Whether the input control carries the native `required` attribute
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Title | Field::Address | Field::Priority)
    }
}

/// Priority options: (value, label). The empty value is the unselected sentinel.
pub const PRIORITY_OPTIONS: &[(&str, &str)] = &[
    ("", "Select priority"),
    ("LOW", "Low"),
    ("MEDIUM", "Medium"),
    ("HIGH", "High"),
];

/// Raw values of every editable field, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub description: String,
    pub address: String,
    pub priority: String,
    pub duration: String,
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Address => &self.address,
            Field::Priority => &self.priority,
            Field::Duration => &self.duration,
        }
    }

    /// Replace one field's value, leaving the others untouched.
    /// No trimming or coercion: `duration` stays a display string.
    pub fn with_field(mut self, field: Field, value: String) -> Self {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Address => &mut self.address,
            Field::Priority => &mut self.priority,
            Field::Duration => &mut self.duration,
        };
        *slot = value;
        self
    }

    /// Freeze the current values into a request body
    pub fn to_payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            address: self.address.clone(),
            priority: self.priority.clone(),
            duration: parse_duration(&self.duration),
        }
    }
}

/// Base-10 integer prefix of `raw`, or `None` when there is no leading number.
///
/// Leading whitespace and one sign are accepted; anything after the digits
/// is ignored ("12abc" is 12, "1.5" is 1). Values outside `i64` yield `None`;
/// anything the server cannot hold is left for it to reject.
pub fn parse_duration(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    format!("{}{}", sign, &rest[..end]).parse().ok()
}

/// JSON body of `POST /api/tasks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub title: String,
    pub description: String,
    pub address: String,
    pub priority: String,
    /// Serialized as `null` when absent, never omitted
    pub duration: Option<i64>,
}

/// Success body of `POST /api/tasks`. Only `title` is read; other keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedTask {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> FormState {
        FormState {
            title: "Fix HVAC System".to_string(),
            description: "AC not cooling".to_string(),
            address: "123 Main St".to_string(),
            priority: "HIGH".to_string(),
            duration: "120".to_string(),
        }
    }

    #[test]
    fn test_with_field_touches_only_that_field() {
        for field in Field::ALL {
            let before = filled();
            let after = before.clone().with_field(field, "changed".to_string());
            for other in Field::ALL {
                if other == field {
                    assert_eq!(after.value(other), "changed");
                } else {
                    assert_eq!(after.value(other), before.value(other), "{:?} changed {:?}", field, other);
                }
            }
        }
    }

    #[test]
    fn test_with_field_stores_raw_value() {
        let state = FormState::default()
            .with_field(Field::Duration, "-".to_string())
            .with_field(Field::Title, "  padded  ".to_string());
        assert_eq!(state.duration, "-");
        assert_eq!(state.title, "  padded  ");
    }

    #[test]
    fn test_payload_with_all_fields() {
        let payload = filled().to_payload();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "title": "Fix HVAC System",
                "description": "AC not cooling",
                "address": "123 Main St",
                "priority": "HIGH",
                "duration": 120
            })
        );
    }

    #[test]
    fn test_payload_empty_duration_is_null() {
        let state = FormState {
            title: "Minimal Task".to_string(),
            address: "456 Oak St".to_string(),
            priority: "LOW".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_string(&state.to_payload()).unwrap();
        assert_eq!(
            body,
            r#"{"title":"Minimal Task","description":"","address":"456 Oak St","priority":"LOW","duration":null}"#
        );
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("120"), Some(120));
        assert_eq!(parse_duration("  42"), Some(42));
        assert_eq!(parse_duration("-5"), Some(-5));
        assert_eq!(parse_duration("+7"), Some(7));
        assert_eq!(parse_duration("12abc"), Some(12));
        assert_eq!(parse_duration("1.5"), Some(1));
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("   "), None);
        assert_eq!(parse_duration("-"), None);
        assert_eq!(parse_duration("abc"), None);
        assert_eq!(parse_duration("99999999999"), Some(99_999_999_999));
        assert_eq!(parse_duration("99999999999999999999"), None);
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = Field::ALL.iter().filter(|f| f.is_required()).map(|f| f.name()).collect();
        assert_eq!(required, vec!["title", "address", "priority"]);
    }

    #[test]
    fn test_priority_options() {
        let values: Vec<_> = PRIORITY_OPTIONS.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec!["", "LOW", "MEDIUM", "HIGH"]);
    }

    #[test]
    fn test_large_duration_is_sent_as_typed() {
        let state = FormState::default().with_field(Field::Duration, "3000000000".to_string());
        let body = serde_json::to_value(state.to_payload()).unwrap();
        assert_eq!(body["duration"], json!(3_000_000_000_i64));
    }

    #[test]
    fn test_created_task_reads_only_title() {
        let task: CreatedTask = serde_json::from_value(json!({"id": 42, "title": "Task X", "duration": "long"})).unwrap();
        assert_eq!(task.title, "Task X");
        assert!(serde_json::from_value::<CreatedTask>(json!({"id": "123"})).is_err());
    }
}
