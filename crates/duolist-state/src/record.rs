use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record as the backend reports it.
///
/// Mock backends hand out numeric ids, real ones often use strings; both
/// decode into the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A single user or reviewer. Both collections share this shape; which one a
/// record came from is tracked by [`RecordKind`] at display time only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(rename = "catchPhrase", default)]
    pub tagline: String,
    #[serde(rename = "comments", default)]
    pub comment: String,
}

impl Record {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The two independent collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    User,
    Reviewer,
}

impl RecordKind {
    /// Both kinds, in display order.
    pub const ALL: [RecordKind; 2] = [RecordKind::User, RecordKind::Reviewer];

    /// Endpoint path segment under the base URL.
    pub fn resource(self) -> &'static str {
        match self {
            RecordKind::User => "users",
            RecordKind::Reviewer => "reviewers",
        }
    }

    /// Lower-case plural used in counters and error messages.
    pub fn plural(self) -> &'static str {
        self.resource()
    }

    /// Pane title.
    pub fn title(self) -> &'static str {
        match self {
            RecordKind::User => "Users",
            RecordKind::Reviewer => "Reviewers",
        }
    }

    /// Short tag shown on each card.
    pub fn tag(self) -> &'static str {
        match self {
            RecordKind::User => "user",
            RecordKind::Reviewer => "reviewer",
        }
    }

    /// The other collection.
    pub fn other(self) -> RecordKind {
        match self {
            RecordKind::User => RecordKind::Reviewer,
            RecordKind::Reviewer => RecordKind::User,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

#[cfg(test)]
pub(crate) fn sample(id: u64) -> Record {
    Record {
        id: RecordId::Number(id),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("person{id}@example.com"),
        tagline: "Synergize scalable paradigms".into(),
        comment: "Lorem ipsum dolor sit amet".into(),
    }
}
