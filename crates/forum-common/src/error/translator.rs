//! Localized user-facing messages for domain errors
//!
//! The domain layer only knows error kinds. The wording users see lives here
//! and is looked up at the boundary.

use forum_core::error::{DomainError, Operation, PayloadViolation};

/// Message for any failure on our side
pub const SERVER_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// Maps domain errors to user-facing messages
pub struct DomainErrorTranslator;

impl DomainErrorTranslator {
    /// Message shown to the caller for `error`
    pub fn translate(error: &DomainError) -> &'static str {
        match error {
            DomainError::InvalidPayload {
                operation,
                violation,
            } => Self::payload_message(*operation, *violation),
            DomainError::ThreadNotFound(_) => "thread tidak ditemukan",
            DomainError::CommentNotFound(_) => "komentar tidak ditemukan",
            DomainError::CommentNotInThread { .. } => "komentar tidak ditemukan pada thread ini",
            DomainError::ReplyNotFound(_) => "balasan tidak ditemukan",
            DomainError::UserNotFound(_) => "user tidak ditemukan",
            DomainError::NotCommentOwner | DomainError::NotReplyOwner => {
                "tidak berhak mengakses resource ini"
            }
            DomainError::DatabaseError(_) | DomainError::InternalError(_) => {
                SERVER_FAILURE_MESSAGE
            }
        }
    }

    fn payload_message(operation: Operation, violation: PayloadViolation) -> &'static str {
        use Operation as Op;
        use PayloadViolation::{DataType, MissingProperty};

        match (operation, violation) {
            (Op::CreateThread, MissingProperty) => {
                "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
            }
            (Op::CreateThread, DataType) => {
                "tidak dapat membuat thread baru karena tipe data tidak sesuai"
            }
            (Op::CreateComment, MissingProperty) => {
                "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada"
            }
            (Op::CreateComment, DataType) => {
                "tidak dapat membuat comment baru karena tipe data tidak sesuai"
            }
            (Op::DeleteComment, MissingProperty) => {
                "tidak dapat menghapus comment karena properti yang dibutuhkan tidak ada"
            }
            (Op::DeleteComment, DataType) => {
                "tidak dapat menghapus comment karena tipe data tidak sesuai"
            }
            (Op::CreateReply, MissingProperty) => {
                "tidak dapat membuat balasan baru karena properti yang dibutuhkan tidak ada"
            }
            (Op::CreateReply, DataType) => {
                "tidak dapat membuat balasan baru karena tipe data tidak sesuai"
            }
            (Op::DeleteReply, MissingProperty) => {
                "tidak dapat menghapus balasan karena properti yang dibutuhkan tidak ada"
            }
            (Op::DeleteReply, DataType) => {
                "tidak dapat menghapus balasan karena tipe data tidak sesuai"
            }
            // Created* shapes are built from our own rows; a failure there is ours.
            (Op::CreatedThread | Op::CreatedComment | Op::CreatedReply, _) => {
                SERVER_FAILURE_MESSAGE
            }
        }
    }
}
