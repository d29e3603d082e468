/// Data Transfer Objects for application layer
mod output_format;
mod resolution_request;
mod resolution_response;

pub use output_format::OutputFormat;
pub use resolution_request::ResolutionRequest;
pub use resolution_response::ResolutionResponse;
