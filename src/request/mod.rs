mod send_form_data;

pub use send_form_data::SendFormData;
