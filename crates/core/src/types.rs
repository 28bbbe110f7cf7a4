use serde::{Deserialize, Deserializer};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Wall-clock start of a bookable hour. Stored as `TIMESTAMP` (no zone).
pub type SlotTime = chrono::NaiveDateTime;

/// An id as it arrives in a JSON body: either a number or a numeric string.
///
/// Browser forms post `<select>` values as strings, so `"3"` and `3` are
/// both accepted. Use [`IdInput::resolve`] to obtain a checked [`DbId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdInput {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for IdInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => IdInput::Number(n),
            Raw::Text(s) => IdInput::Text(s),
        })
    }
}

impl From<DbId> for IdInput {
    fn from(id: DbId) -> Self {
        IdInput::Number(id)
    }
}

impl IdInput {
    /// Resolve to a positive [`DbId`], or `None` if the value is not one.
    pub fn resolve(&self) -> Option<DbId> {
        let id = match self {
            IdInput::Number(n) => *n,
            IdInput::Text(s) => s.trim().parse().ok()?,
        };
        (id > 0).then_some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_number_and_numeric_string() {
        let n: IdInput = serde_json::from_str("7").unwrap();
        let s: IdInput = serde_json::from_str("\" 7 \"").unwrap();
        assert_eq!(n.resolve(), Some(7));
        assert_eq!(s.resolve(), Some(7));
    }

    #[test]
    fn rejects_non_positive_and_garbage() {
        assert_eq!(IdInput::Number(0).resolve(), None);
        assert_eq!(IdInput::Number(-4).resolve(), None);
        assert_eq!(IdInput::Text("abc".into()).resolve(), None);
        assert_eq!(IdInput::Text(String::new()).resolve(), None);
    }

    #[test]
    fn rejects_other_json_types() {
        assert!(serde_json::from_str::<IdInput>("true").is_err());
        assert!(serde_json::from_str::<IdInput>("1.5").is_err());
    }
}
