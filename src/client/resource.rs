use fake::Dummy;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Defines task data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub completed: bool,
}

/// Task fields as the backend sends them, keyed by id in the enclosing map.
///
#[derive(Deserialize)]
struct TaskBody {
    #[serde(default)]
    description: String,
    #[serde(default)]
    completed: bool,
}

/// Snapshot of the backend's id -> task mapping, kept in the order the
/// backend sent it.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskMap(Vec<Task>);

impl TaskMap {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskMap(tasks)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.0.iter().find(|t| t.id == id)
    }
}

impl<'a> IntoIterator for &'a TaskMap {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

struct TaskMapVisitor;

impl<'de> Visitor<'de> for TaskMapVisitor {
    type Value = TaskMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of task id to task")
    }

    fn visit_map<A>(self, mut access: A) -> Result<TaskMap, A::Error>
    where
        A: MapAccess<'de>,
    {
        let capacity = access.size_hint().unwrap_or(0);
        let mut tasks: Vec<Task> = Vec::with_capacity(capacity);
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(capacity);
        while let Some((id, body)) = access.next_entry::<String, TaskBody>()? {
            // A repeated key replaces the earlier entry but keeps its position
            match positions.get(&id).copied() {
                Some(index) => {
                    let existing = &mut tasks[index];
                    existing.description = body.description;
                    existing.completed = body.completed;
                }
                None => {
                    positions.insert(id.clone(), tasks.len());
                    tasks.push(Task {
                        id,
                        description: body.description,
                        completed: body.completed,
                    });
                }
            }
        }
        Ok(TaskMap(tasks))
    }
}

impl<'de> Deserialize<'de> for TaskMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TaskMapVisitor)
    }
}

/// Which backend endpoint receives submitted text.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitEndpoint {
    /// Task requests; legacy path that does not check the status code.
    Process,
    /// Calendar requests; non-2xx responses are errors.
    Events,
}

impl SubmitEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            SubmitEndpoint::Process => "process",
            SubmitEndpoint::Events => "events",
        }
    }

    pub fn checks_status(&self) -> bool {
        matches!(self, SubmitEndpoint::Events)
    }

    /// Whether a successful submission may have changed the task list.
    ///
    pub fn mutates_tasks(&self) -> bool {
        matches!(self, SubmitEndpoint::Process)
    }

    pub fn toggled(&self) -> Self {
        match self {
            SubmitEndpoint::Process => SubmitEndpoint::Events,
            SubmitEndpoint::Events => SubmitEndpoint::Process,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmitEndpoint::Process => "tasks",
            SubmitEndpoint::Events => "events",
        }
    }
}

impl Default for SubmitEndpoint {
    fn default() -> Self {
        SubmitEndpoint::Process
    }
}

#[derive(Serialize)]
pub(crate) struct SubmitRequest<'a> {
    pub user_input: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct SubmitResponse {
    pub response: String,
}

/// Outcome of a successful clear. The body shape is not part of the
/// contract, so only a string `message` is picked out when present.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClearResponse {
    pub message: Option<String>,
}

impl ClearResponse {
    pub fn from_body(bytes: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(bytes)
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_owned)
            });
        ClearResponse { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn test_task_map_keeps_backend_order() {
        let body = r#"{
            "t2": {"description": "pay bills", "completed": false},
            "t1": {"description": "buy milk", "completed": true},
            "t3": {"description": "call mom"}
        }"#;
        let tasks: TaskMap = serde_json::from_str(body).unwrap();
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t1", "t3"]);
        assert!(tasks.get("t1").unwrap().completed);
        assert!(!tasks.get("t3").unwrap().completed);
    }

    #[test]
    fn test_task_map_empty_object() {
        let tasks: TaskMap = serde_json::from_str("{}").unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_task_map_rejects_array() {
        assert!(serde_json::from_str::<TaskMap>("[]").is_err());
    }

    #[test]
    fn test_task_map_duplicate_key_keeps_first_position() {
        let body = r#"{"a": {"description": "x"}, "b": {"description": "y"}, "a": {"description": "z"}}"#;
        let tasks: TaskMap = serde_json::from_str(body).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.iter().next().unwrap().description, "z");
    }

    #[test]
    fn test_task_map_lookup() {
        let task: Task = Faker.fake();
        let tasks = TaskMap::new(vec![task.clone()]);
        assert_eq!(tasks.get(&task.id), Some(&task));
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_task_map_duplicate_among_many() {
        let body = r#"{"a": {"description": "1"}, "b": {"description": "2"}, "c": {"description": "3"}, "b": {"description": "4", "completed": true}}"#;
        let tasks: TaskMap = serde_json::from_str(body).unwrap();
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(tasks.get("b").unwrap().completed);
        assert_eq!(tasks.get("b").unwrap().description, "4");
    }

    #[test]
    fn test_clear_response_from_body() {
        let response = ClearResponse::from_body(br#"{"message": "Tasks cleared successfully!"}"#);
        assert_eq!(response.message.as_deref(), Some("Tasks cleared successfully!"));

        assert_eq!(ClearResponse::from_body(b"").message, None);
        assert_eq!(ClearResponse::from_body(b"Cleared").message, None);
        assert_eq!(ClearResponse::from_body(br#""ok""#).message, None);
        assert_eq!(ClearResponse::from_body(br#"{"message": 1}"#).message, None);
    }

    #[test]
    fn test_submit_endpoint() {
        assert_eq!(SubmitEndpoint::default(), SubmitEndpoint::Process);
        assert!(!SubmitEndpoint::Process.checks_status());
        assert!(SubmitEndpoint::Events.checks_status());
        assert!(SubmitEndpoint::Process.mutates_tasks());
        assert!(!SubmitEndpoint::Events.mutates_tasks());
        assert_eq!(SubmitEndpoint::Process.toggled(), SubmitEndpoint::Events);
        assert_eq!(SubmitEndpoint::Events.path(), "events");
    }
}
