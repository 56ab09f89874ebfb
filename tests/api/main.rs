mod health_check;
mod send_form;
