pub mod catalog;
pub mod constants;
pub mod dispatcher;
pub mod errors;
pub mod services;
pub mod utils;
