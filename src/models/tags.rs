use serde::Serialize;

/// Labels used so far, offered as suggestions when adding entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tags {
    pub projects: Vec<String>,
    pub task_types: Vec<String>,
}
