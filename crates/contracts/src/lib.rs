// Wire types shared between the gateway, the Kafka workers and the engine
pub mod customer;
pub mod process;
pub mod variables;

pub use customer::Customer;
pub use process::{ProcessMessage, ProcessPayload};
pub use variables::{VariableMap, VariableValue};
