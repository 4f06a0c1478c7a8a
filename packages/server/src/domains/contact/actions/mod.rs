pub mod submit_contact_form;

pub use submit_contact_form::*;
