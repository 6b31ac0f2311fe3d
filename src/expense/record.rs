use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Wire and display format for expense timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged expense. Records are addressed by their position in the log;
/// they carry no identifier of their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Builds a record stamped with the current local time. The category is
    /// lower-cased at storage time; display re-normalizes via [`title_case`].
    pub fn new(amount: f64, category: impl AsRef<str>, description: impl Into<String>) -> Self {
        Self {
            date: Local::now().naive_local(),
            amount,
            category: category.as_ref().trim().to_lowercase(),
            description: description.into(),
        }
    }

    pub fn display_category(&self) -> String {
        title_case(&self.category)
    }

    pub fn display_date(&self) -> String {
        self.date.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Upper-cases the first character of every alphanumeric run and lower-cases
/// the rest, so "food & drink" displays as "Food & Drink".
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
