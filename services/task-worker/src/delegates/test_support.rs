use camunda::{LockedTask, TaskExecution};
use contracts::VariableMap;

pub fn execution(business_key: Option<&str>, variables: VariableMap) -> TaskExecution {
    TaskExecution::new(LockedTask {
        id: "task-1".to_string(),
        topic_name: "test-topic".to_string(),
        activity_id: Some("Activity_0tcd2jw".to_string()),
        process_instance_id: Some("process-123".to_string()),
        business_key: business_key.map(str::to_string),
        variables,
        retries: None,
    })
}
