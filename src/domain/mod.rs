mod client_message;
mod client_name;
mod client_phone;
mod form_submission;

pub use client_message::ClientMessage;
pub use client_name::ClientName;
pub use client_phone::ClientPhone;
pub use form_submission::{FormSubmission, InvalidReason};
