use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// A single todo as handed to the printer
///
/// Todos arrive already parsed and validated. The only field the printer
/// interprets is `due`, which must be `YYYY-MM-DD` when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Todo {
    /// Display id, assigned by the data layer
    pub id: u32,
    /// Free text, may contain `+project` and `@context` tags
    pub subject: String,
    pub completed: bool,
    /// Priority todos are rendered bold + italic
    pub is_priority: bool,
    /// Due date as stored (format: YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Notes keyed by note id, printed in ascending id order
    #[serde(skip_serializing_if = "BTreeMap::is_empty", with = "note_keys")]
    pub notes: BTreeMap<u32, String>,
}

impl Todo {
    pub fn new(id: u32, subject: impl Into<String>) -> Self {
        Self {
            id,
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }

    pub fn with_priority(mut self, is_priority: bool) -> Self {
        self.is_priority = is_priority;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_note(mut self, note_id: u32, text: impl Into<String>) -> Self {
        self.notes.insert(note_id, text.into());
        self
    }

    /// Due date string, treating an empty string as absent
    pub fn due_str(&self) -> Option<&str> {
        self.due.as_deref().filter(|due| !due.is_empty())
    }
}

/// TOML table keys are always strings, so note ids travel as strings
mod note_keys {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(notes: &BTreeMap<u32, String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let keyed: BTreeMap<String, &String> = notes
            .iter()
            .map(|(id, text)| (id.to_string(), text))
            .collect();
        keyed.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<u32, String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keyed = BTreeMap::<String, String>::deserialize(deserializer)?;
        keyed
            .into_iter()
            .map(|(id, text)| {
                id.parse::<u32>()
                    .map(|id| (id, text))
                    .map_err(|_| D::Error::custom(format!("invalid note id '{}'", id)))
            })
            .collect()
    }
}

/// Todos clustered under group keys
///
/// Order inside a group is kept as inserted. Keys carry no order; the
/// printer sorts them when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedTodos {
    pub groups: HashMap<String, Vec<Todo>>,
}

impl GroupedTodos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a todo to a group, creating the group if needed
    pub fn insert(&mut self, key: impl Into<String>, todo: Todo) {
        self.groups.entry(key.into()).or_default().push(todo);
    }

    /// Group keys in ascending byte order
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn get(&self, key: &str) -> Option<&[Todo]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of todos across all groups
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
