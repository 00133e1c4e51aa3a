use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// `Monday, 2026-10-19`
pub const DATE_LABEL_FORMAT: &str = "%A, %Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: Uuid,
    #[serde(rename = "date")]
    pub date_label: String,
    #[serde(rename = "entry")]
    pub text: String,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(text: String, local_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date_label: date_label(local_date),
            text,
            created_at: Utc::now(),
        }
    }

    /// The calendar date encoded in the label, if it parses.
    pub fn date(&self) -> Option<NaiveDate> {
        let (_, ymd) = self.date_label.split_once(", ")?;
        NaiveDate::parse_from_str(ymd, "%Y-%m-%d").ok()
    }
}

pub fn date_label(date: NaiveDate) -> String {
    date.format(DATE_LABEL_FORMAT).to_string()
}

/// What clients see for an entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub date: String,
    pub entry: String,
    pub id: Uuid,
}

impl From<Entry> for EntryResponse {
    fn from(e: Entry) -> Self {
        Self {
            date: e.date_label,
            entry: e.text,
            id: e.id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub entries: Vec<EntryResponse>,
}

impl EntriesResponse {
    pub fn new(entries: Vec<Entry>, message: Option<&str>) -> Self {
        Self {
            message: message.map(str::to_owned),
            entries: entries.into_iter().map(EntryResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label_format() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(date_label(date), "Monday, 2026-10-19");
    }

    #[test]
    fn test_date_parses_back_from_label() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        let entry = Entry::new("text".into(), date);
        assert_eq!(entry.date(), Some(date));
    }

    #[test]
    fn test_malformed_label_has_no_date() {
        let mut entry = Entry::new("text".into(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        entry.date_label = "sometime last week".into();
        assert_eq!(entry.date(), None);
        entry.date_label = "Friday, not-a-date".into();
        assert_eq!(entry.date(), None);
    }

    #[test]
    fn test_stored_shape_uses_legacy_keys() {
        let entry = Entry::new("dear diary".into(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["entry"], "dear diary");
        assert_eq!(json["date"], "Thursday, 2026-01-01");
        assert!(json.get("created_at").is_some());
    }

    #[test]
    fn test_reads_naive_created_at_as_utc() {
        let entry: Entry = serde_json::from_str(
            r#"{
                "id": "3f1c2a9e-8d4b-4c6a-9f0e-1a2b3c4d5e6f",
                "date": "Monday, 2026-10-19",
                "entry": "written before offsets were stored",
                "created_at": "2026-10-19T08:00:00.123456"
            }"#,
        )
        .unwrap();
        assert_eq!(entry.created_at.to_rfc3339(), "2026-10-19T08:00:00.123456+00:00");
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2026, 10, 19));
    }

    #[test]
    fn test_response_omits_created_at() {
        let entry = Entry::new("dear diary".into(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let json = serde_json::to_value(EntryResponse::from(entry)).unwrap();
        assert!(json.get("created_at").is_none());
        assert_eq!(json["entry"], "dear diary");
    }
}
