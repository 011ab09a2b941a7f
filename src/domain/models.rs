/// One user entry as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadingState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadingState::Loaded | LoadingState::Failed(_))
    }
}

/// Records whose name contains `query`, in their original order.
///
/// Matching is case-sensitive and unanchored, so an empty query keeps
/// every record.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    records.iter().filter(|r| r.name.contains(query)).collect()
}
