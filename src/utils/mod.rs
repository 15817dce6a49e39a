pub mod dispatch_errors;
pub mod suggest;
