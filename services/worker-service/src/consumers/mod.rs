pub mod data_format;
pub mod order_process;
pub mod start_process;
