pub mod response;

pub use response::{create_api_response, handle_api_error, ApiResponse};
