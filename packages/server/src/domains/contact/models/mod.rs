pub mod contact_message;
pub mod settings;

pub use contact_message::*;
pub use settings::*;
