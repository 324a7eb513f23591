// Process engine REST integration: message correlation and the external
// task worker protocol.
pub mod client;
pub mod error;
pub mod task;
pub mod worker;

pub use client::{
    CompleteRequest, CorrelationRequest, CorrelationResult, EngineClient, FailureRequest,
    FetchAndLockRequest, LockedTask, TopicSubscription,
};
pub use error::EngineError;
pub use task::TaskExecution;
pub use worker::{ExternalTaskWorker, TaskHandler, WorkerOptions};
