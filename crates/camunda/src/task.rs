use contracts::{VariableMap, VariableValue};

use crate::client::LockedTask;

/// Execution context handed to a task handler: the locked task's input
/// variables plus the output variables the handler sets. Output variables
/// are submitted back to the engine when the task completes.
pub struct TaskExecution {
    task: LockedTask,
    output: VariableMap,
}

impl TaskExecution {
    pub fn new(task: LockedTask) -> Self {
        Self {
            task,
            output: VariableMap::new(),
        }
    }

    pub fn task_id(&self) -> &str {
        &self.task.id
    }

    pub fn topic(&self) -> &str {
        &self.task.topic_name
    }

    pub fn activity_id(&self) -> &str {
        self.task.activity_id.as_deref().unwrap_or("")
    }

    pub fn process_instance_id(&self) -> &str {
        self.task.process_instance_id.as_deref().unwrap_or("")
    }

    pub fn business_key(&self) -> Option<&str> {
        self.task.business_key.as_deref()
    }

    pub fn variables(&self) -> &VariableMap {
        &self.task.variables
    }

    /// Looks up a variable by name, output variables shadowing input ones.
    pub fn variable(&self, name: &str) -> Option<&VariableValue> {
        self.output.get(name).or_else(|| self.task.variables.get(name))
    }

    pub fn string_variable(&self, name: &str) -> Option<String> {
        self.variable(name)
            .and_then(VariableValue::as_str)
            .map(str::to_string)
    }

    pub fn long_variable(&self, name: &str) -> Option<i64> {
        self.variable(name).and_then(VariableValue::as_long)
    }

    pub fn bool_variable(&self, name: &str) -> Option<bool> {
        self.variable(name).and_then(VariableValue::as_bool)
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: VariableValue) {
        self.output.insert(name.into(), value);
    }

    pub fn output(&self) -> &VariableMap {
        &self.output
    }

    pub fn into_parts(self) -> (LockedTask, VariableMap) {
        (self.task, self.output)
    }
}
