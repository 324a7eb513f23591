pub mod customer_json;
pub mod customer_log;
pub mod customer_xml;
pub mod delivery_email;
pub mod order_processing;
pub mod publish_message;

#[cfg(test)]
pub(crate) mod test_support;
