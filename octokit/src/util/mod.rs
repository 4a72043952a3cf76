mod request;

pub use request::{get_client, get_request_builder};
