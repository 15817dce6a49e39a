pub mod credentials;
pub mod logger;
pub mod validation;
