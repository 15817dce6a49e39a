mod dispatch_error;

pub use dispatch_error::{DispatchError, DispatchErrorKind};
