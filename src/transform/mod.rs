pub mod error;
pub mod request;
pub mod response;
pub mod validation;

pub use error::{ProviderErrorFields, invalid_response_error, normalize_error};
pub use request::{transform_request, transform_request_for};
pub use response::{
    Decoded, ResponseContext, decode_response, transform_response, transform_response_body,
};
pub use validation::check_range;
