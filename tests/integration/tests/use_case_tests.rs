//! Use case integration tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test use_case_tests

use forum_common::{AppError, ErrorResponse, ResponseStatus};
use forum_core::{DomainError, DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT};
use forum_service::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, DeleteCommentUseCase,
    DeleteReplyUseCase, GetThreadUseCase, ServiceContext,
};
use integration_tests::{check_test_env, fixtures::*, test_config, TestApp};
use serde_json::json;

// ============================================================================
// Threads
// ============================================================================

#[tokio::test]
async fn test_add_thread_then_get_thread() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let user = UsersTable::add(&app.pool).await.unwrap();

    let created = AddThreadUseCase::new(&app.ctx)
        .execute(&thread_payload(&user.id))
        .await
        .unwrap();
    assert!(created.id.starts_with("thread-"));
    assert_eq!(created.title, "sebuah thread");
    assert_eq!(created.owner, user.id);

    let view = GetThreadUseCase::new(&app.ctx).execute(&created.id).await.unwrap();
    assert_eq!(view.id, created.id);
    assert_eq!(view.body, "sebuah body thread");
    assert_eq!(view.username, user.username);
    assert!(view.comments.is_empty());
}

#[tokio::test]
async fn test_get_unknown_thread_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let err = GetThreadUseCase::new(&app.ctx)
        .execute("thread-xxx")
        .await
        .unwrap_err();

    let err = AppError::from(err);
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.user_message(), "thread tidak ditemukan");
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_add_comment_round_trip() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let user = UsersTable::add(&app.pool).await.unwrap();
    let thread_id = ThreadsTable::add(&app.pool, &user.id).await.unwrap();

    let created = AddCommentUseCase::new(&app.ctx)
        .execute(&comment_payload(&thread_id, &user.id))
        .await
        .unwrap();
    assert!(created.id.starts_with("comment-"));

    let row = CommentsTable::find_by_id(&app.pool, &created.id)
        .await
        .unwrap()
        .expect("comment row");
    assert_eq!(row.thread_id, thread_id);
    assert_eq!(row.content, "sebuah komentar");
    assert_eq!(row.owner, user.id);
    assert!(!row.is_deleted);
}

#[tokio::test]
async fn test_add_comment_to_unknown_thread() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let user = UsersTable::add(&app.pool).await.unwrap();
    let missing = unique_id("thread");

    let err = AddCommentUseCase::new(&app.ctx)
        .execute(&comment_payload(&missing, &user.id))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::ThreadNotFound(missing));
}

#[tokio::test]
async fn test_invalid_payload_is_rejected_with_localized_message() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let err = AddCommentUseCase::new(&app.ctx)
        .execute(&json!({ "content": ["bukan", "string"], "threadId": "thread-123", "owner": "user-123" }))
        .await
        .unwrap_err();

    let response = ErrorResponse::from(AppError::from(err));
    assert_eq!(response.status, ResponseStatus::Fail);
    assert_eq!(response.code, "CREATE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION");
    assert_eq!(
        response.message,
        "tidak dapat membuat comment baru karena tipe data tidak sesuai"
    );
}

#[tokio::test]
async fn test_delete_comment_masks_content_but_keeps_row() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let user = UsersTable::add(&app.pool).await.unwrap();
    let thread_id = ThreadsTable::add(&app.pool, &user.id).await.unwrap();
    let comment_id = CommentsTable::add(&app.pool, &thread_id, &user.id, fixed_date(1))
        .await
        .unwrap();

    let payload = delete_comment_payload(&thread_id, &comment_id, &user.id);
    DeleteCommentUseCase::new(&app.ctx).execute(&payload).await.unwrap();
    // Deleting again is accepted silently
    DeleteCommentUseCase::new(&app.ctx).execute(&payload).await.unwrap();

    let row = CommentsTable::find_by_id(&app.pool, &comment_id)
        .await
        .unwrap()
        .expect("comment row");
    assert!(row.is_deleted);
    assert_eq!(row.content, "sebuah komentar");

    let view = GetThreadUseCase::new(&app.ctx).execute(&thread_id).await.unwrap();
    assert_eq!(view.comments.len(), 1);
    assert_eq!(view.comments[0].id, comment_id);
    assert_eq!(view.comments[0].content, DELETED_COMMENT_CONTENT);
    assert_eq!(view.comments[0].username, user.username);
}

#[tokio::test]
async fn test_delete_comment_by_stranger_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let owner = UsersTable::add(&app.pool).await.unwrap();
    let stranger = UsersTable::add(&app.pool).await.unwrap();
    let thread_id = ThreadsTable::add(&app.pool, &owner.id).await.unwrap();
    let comment_id = CommentsTable::add(&app.pool, &thread_id, &owner.id, fixed_date(1))
        .await
        .unwrap();

    let err = DeleteCommentUseCase::new(&app.ctx)
        .execute(&delete_comment_payload(&thread_id, &comment_id, &stranger.id))
        .await
        .unwrap_err();

    let err = AppError::from(err);
    assert_eq!(err.status_code(), 403);
    assert_eq!(err.user_message(), "tidak berhak mengakses resource ini");

    let row = CommentsTable::find_by_id(&app.pool, &comment_id)
        .await
        .unwrap()
        .expect("comment row");
    assert!(!row.is_deleted);
}

#[tokio::test]
async fn test_delete_unknown_comment_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let user = UsersTable::add(&app.pool).await.unwrap();
    let thread_id = ThreadsTable::add(&app.pool, &user.id).await.unwrap();

    let err = DeleteCommentUseCase::new(&app.ctx)
        .execute(&delete_comment_payload(&thread_id, "comment-xxx", &user.id))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(AppError::from(err).status_code(), 404);
}

// ============================================================================
// Replies
// ============================================================================

#[tokio::test]
async fn test_get_thread_nests_replies_in_date_order() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let author = UsersTable::add(&app.pool).await.unwrap();
    let commenter = UsersTable::add(&app.pool).await.unwrap();
    let thread_id = ThreadsTable::add(&app.pool, &author.id).await.unwrap();
    let second = CommentsTable::add(&app.pool, &thread_id, &author.id, fixed_date(5))
        .await
        .unwrap();
    let first = CommentsTable::add(&app.pool, &thread_id, &commenter.id, fixed_date(1))
        .await
        .unwrap();
    let late_reply = RepliesTable::add(&app.pool, &first, &author.id, fixed_date(4))
        .await
        .unwrap();
    let early_reply = RepliesTable::add(&app.pool, &first, &commenter.id, fixed_date(2))
        .await
        .unwrap();

    DeleteReplyUseCase::new(&app.ctx)
        .execute(&delete_reply_payload(&thread_id, &first, &late_reply, &author.id))
        .await
        .unwrap();

    let view = GetThreadUseCase::new(&app.ctx).execute(&thread_id).await.unwrap();

    assert_eq!(view.username, author.username);
    let comment_ids: Vec<_> = view.comments.iter().map(|c| c.id.clone()).collect();
    assert_eq!(comment_ids, [first.clone(), second]);

    let replies = &view.comments[0].replies;
    assert_eq!(view.comments[0].username, commenter.username);
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].id, early_reply);
    assert_eq!(replies[0].content, "sebuah balasan");
    assert_eq!(replies[0].username, commenter.username);
    assert_eq!(replies[1].id, late_reply);
    assert_eq!(replies[1].content, DELETED_REPLY_CONTENT);
    assert_eq!(replies[1].username, author.username);
    assert!(view.comments[1].replies.is_empty());

    let row = RepliesTable::find_by_id(&app.pool, &late_reply)
        .await
        .unwrap()
        .expect("reply row");
    assert!(row.is_deleted);
    assert_eq!(row.content, "sebuah balasan");
}

#[tokio::test]
async fn test_add_reply_round_trip() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let user = UsersTable::add(&app.pool).await.unwrap();
    let thread_id = ThreadsTable::add(&app.pool, &user.id).await.unwrap();
    let comment_id = CommentsTable::add(&app.pool, &thread_id, &user.id, fixed_date(1))
        .await
        .unwrap();

    let created = AddReplyUseCase::new(&app.ctx)
        .execute(&reply_payload(&thread_id, &comment_id, &user.id))
        .await
        .unwrap();
    assert!(created.id.starts_with("reply-"));
    assert_eq!(created.content, "sebuah balasan");
    assert_eq!(created.owner, user.id);

    let row = RepliesTable::find_by_id(&app.pool, &created.id)
        .await
        .unwrap()
        .expect("reply row");
    assert_eq!(row.comment_id, comment_id);
    assert_eq!(row.owner, user.id);
}

#[tokio::test]
async fn test_add_reply_with_mismatched_thread_inserts_nothing() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let user = UsersTable::add(&app.pool).await.unwrap();
    let thread_id = ThreadsTable::add(&app.pool, &user.id).await.unwrap();
    let other_thread_id = ThreadsTable::add(&app.pool, &user.id).await.unwrap();
    let comment_id = CommentsTable::add(&app.pool, &thread_id, &user.id, fixed_date(1))
        .await
        .unwrap();

    let err = AddReplyUseCase::new(&app.ctx)
        .execute(&reply_payload(&other_thread_id, &comment_id, &user.id))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::CommentNotInThread {
            comment_id: comment_id.clone(),
            thread_id: other_thread_id,
        }
    );
    assert_eq!(
        RepliesTable::count_by_comment_id(&app.pool, &comment_id).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_delete_reply_by_stranger_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let owner = UsersTable::add(&app.pool).await.unwrap();
    let stranger = UsersTable::add(&app.pool).await.unwrap();
    let thread_id = ThreadsTable::add(&app.pool, &owner.id).await.unwrap();
    let comment_id = CommentsTable::add(&app.pool, &thread_id, &owner.id, fixed_date(1))
        .await
        .unwrap();
    let reply_id = RepliesTable::add(&app.pool, &comment_id, &owner.id, fixed_date(2))
        .await
        .unwrap();

    let err = DeleteReplyUseCase::new(&app.ctx)
        .execute(&delete_reply_payload(&thread_id, &comment_id, &reply_id, &stranger.id))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::NotReplyOwner);
    let row = RepliesTable::find_by_id(&app.pool, &reply_id)
        .await
        .unwrap()
        .expect("reply row");
    assert!(!row.is_deleted);
}

#[tokio::test]
async fn test_delete_unknown_reply_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let app = TestApp::start().await.expect("Failed to start app");
    let user = UsersTable::add(&app.pool).await.unwrap();
    let thread_id = ThreadsTable::add(&app.pool, &user.id).await.unwrap();
    let comment_id = CommentsTable::add(&app.pool, &thread_id, &user.id, fixed_date(1))
        .await
        .unwrap();

    let err = DeleteReplyUseCase::new(&app.ctx)
        .execute(&delete_reply_payload(&thread_id, &comment_id, "reply-xxx", &user.id))
        .await
        .unwrap_err();

    let err = AppError::from(err);
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.user_message(), "balasan tidak ditemukan");
}

// ============================================================================
// Wiring
// ============================================================================

#[tokio::test]
async fn test_service_context_connects_from_config() {
    if !check_test_env().await {
        return;
    }

    // Schema bootstrap goes through the test app's pool
    TestApp::start().await.expect("Failed to start app");

    let config = test_config().expect("config");
    let ctx = ServiceContext::connect(&config).await.expect("connect");

    let err = GetThreadUseCase::new(&ctx).execute("thread-xxx").await.unwrap_err();
    assert_eq!(err, DomainError::ThreadNotFound("thread-xxx".into()));
}
