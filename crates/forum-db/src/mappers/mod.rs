//! Row <-> entity mappers
//!
//! - `From<Model> for Entity`: convert database rows to domain objects.
//!   `TIMESTAMP` columns carry no zone and are read as UTC.
//! - `TryFrom<Created*Model>`: insert results pass back through the
//!   `Created*` validators.
//! - `*Insert` structs: bind values for inserts, id included.

mod comment;
mod reply;
mod thread;

pub use comment::CommentInsert;
pub use reply::ReplyInsert;
pub use thread::ThreadInsert;
