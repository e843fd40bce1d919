mod formatting_error;
mod formatting_request;
mod image_payload;
mod request_state;
mod user_settings;

pub use formatting_error::FormattingError;
pub use formatting_request::FormattingRequest;
pub use image_payload::ImagePayload;
pub use request_state::RequestState;
pub use user_settings::UserSettings;
