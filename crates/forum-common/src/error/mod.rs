//! Error handling at the application boundary

mod app_error;
mod translator;

pub use app_error::{AppError, AppResult, ErrorResponse, ResponseStatus};
pub use translator::DomainErrorTranslator;
