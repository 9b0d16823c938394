//! Domain traits (ports)

mod repositories;

pub use repositories::{CommentRepository, ReplyRepository, ThreadRepository, UserRepository};

#[cfg(any(test, feature = "testing"))]
pub use repositories::{
    MockCommentRepository, MockReplyRepository, MockThreadRepository, MockUserRepository,
};
