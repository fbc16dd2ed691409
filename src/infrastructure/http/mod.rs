pub mod json_client;
