mod health_check;
mod home;
mod send_form;

// re-export
pub use health_check::*;
pub use home::*;
pub use send_form::*;
