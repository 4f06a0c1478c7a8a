// Portfolio contact relay - API Core
//
// Backend for the portfolio contact form: validates submissions and relays
// them to the site owner through one configured transactional email provider.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
