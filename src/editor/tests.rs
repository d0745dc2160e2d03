// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::application::port::ai::{ModelError, COMMUNICATION_MESSAGE};
use crate::domain::media::ImageMime;
use crate::test_utils::{first_pixel, solid_png, ScriptedModel, BLUE, RED};
use tempfile::tempdir;

fn png_upload(color: [u8; 4]) -> UploadFile {
    UploadFile::Bytes {
        mime: "image/png".to_string(),
        bytes: solid_png(2, 2, color),
    }
}

async fn ready_session(model: ScriptedModel) -> EditSession<ScriptedModel> {
    let mut session = EditSession::new(model);
    session.upload(png_upload(BLUE)).await;
    assert_eq!(session.phase(), Phase::Ready);
    session
}

fn model_ref(session: &EditSession<ScriptedModel>) -> &ScriptedModel {
    session.model.as_ref()
}

// -------------------------------------------------------------------------
// Upload
// -------------------------------------------------------------------------

#[test]
fn new_session_is_empty() {
    let session = EditSession::new(ScriptedModel::new());
    assert_eq!(session.phase(), Phase::Empty);
    assert!(session.current().is_none());
    assert!(session.current_data_url().is_none());
    assert!(!session.can_undo());
    assert!(!session.can_redo());
    assert!(session.error().is_none());
}

#[tokio::test]
async fn upload_seeds_history_with_original() {
    let session = ready_session(ScriptedModel::new()).await;

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().cursor(), Some(0));
    assert_eq!(session.current().map(ImagePayload::mime), Some(ImageMime::Png));
    assert!(!session.is_busy());
    assert!(session
        .current_data_url()
        .is_some_and(|url| url.starts_with("data:image/png;base64,")));
}

#[tokio::test]
async fn unsupported_upload_is_silently_ignored() {
    let mut session = EditSession::new(ScriptedModel::new());
    session
        .upload(UploadFile::Bytes {
            mime: "image/gif".to_string(),
            bytes: vec![1, 2, 3],
        })
        .await;

    assert_eq!(session.phase(), Phase::Empty);
    assert!(session.error().is_none());
}

#[tokio::test]
async fn unreadable_upload_reports_generic_error() {
    let dir = tempdir().expect("temp dir");
    let mut session = EditSession::new(ScriptedModel::new());
    session
        .upload(UploadFile::Path(dir.path().join("missing.png")))
        .await;

    assert_eq!(session.phase(), Phase::Empty);
    assert_eq!(session.error(), Some(UPLOAD_FAILED_MESSAGE));
}

#[tokio::test]
async fn upload_is_ignored_once_an_image_is_loaded() {
    let mut session = ready_session(ScriptedModel::new()).await;
    let before = session.current().cloned();

    assert!(session.begin_upload(png_upload(RED)).is_none());
    assert_eq!(session.current().cloned(), before);
}

// -------------------------------------------------------------------------
// Edit
// -------------------------------------------------------------------------

#[tokio::test]
async fn edit_pushes_result_with_source_mime() {
    let model = ScriptedModel::new().with_edit(Ok(vec![9, 9, 9]));
    let mut session = EditSession::new(model);
    session
        .upload(UploadFile::Bytes {
            mime: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8],
        })
        .await;

    session.edit("make it warmer").await;

    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history().cursor(), Some(1));
    let current = session.current().expect("current image");
    assert_eq!(current.mime(), ImageMime::Jpeg);
    assert_eq!(current.bytes(), &[9, 9, 9]);

    let calls = model_ref(&session).edit_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].mime, ImageMime::Jpeg);
    assert_eq!(calls[0].bytes, vec![0xFF, 0xD8]);
    assert_eq!(calls[0].prompt, "make it warmer");
}

#[tokio::test]
async fn edit_without_image_is_ignored() {
    let mut session = EditSession::new(ScriptedModel::new());
    session.edit("anything").await;
    assert!(model_ref(&session).edit_calls().is_empty());
    assert_eq!(session.phase(), Phase::Empty);
}

#[tokio::test]
async fn refusal_keeps_reason_and_history() {
    let model =
        ScriptedModel::new().with_edit(Err(ModelError::Refused("I can't do that".to_string())));
    let mut session = ready_session(model).await;

    session.edit("remove the person").await;

    assert_eq!(session.error(), Some("I can't do that"));
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.phase(), Phase::Ready);
}

#[tokio::test]
async fn communication_failure_uses_generic_message() {
    let model =
        ScriptedModel::new().with_edit(Err(ModelError::Communication("timeout".to_string())));
    let mut session = ready_session(model).await;

    session.edit("brighter").await;

    assert_eq!(session.error(), Some(COMMUNICATION_MESSAGE));
    assert!(!session.is_busy());
}

#[tokio::test]
async fn empty_model_answer_is_a_refusal() {
    let model = ScriptedModel::new().with_edit(Ok(Vec::new()));
    let mut session = ready_session(model).await;

    session.edit("brighter").await;

    assert!(session.error().is_some());
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn starting_a_request_clears_previous_error() {
    let model = ScriptedModel::new()
        .with_edit(Err(ModelError::Refused("no".to_string())))
        .with_edit(Ok(vec![1]));
    let mut session = ready_session(model).await;

    session.edit("first").await;
    assert!(session.error().is_some());

    let job = session.begin_edit("second").expect("job");
    assert!(session.error().is_none());
    assert_eq!(session.phase(), Phase::Busy);

    let outcome = job.run().await;
    session.complete(outcome);
    assert!(session.error().is_none());
    assert_eq!(session.history().len(), 2);
}

#[tokio::test]
async fn submit_prompt_trims_and_ignores_blank() {
    let model = ScriptedModel::new().with_edit(Ok(vec![1]));
    let mut session = ready_session(model).await;

    session.submit_prompt("   ").await;
    assert!(model_ref(&session).edit_calls().is_empty());

    session.submit_prompt("  add a cat \n").await;
    let calls = model_ref(&session).edit_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].prompt, "add a cat");
}

// -------------------------------------------------------------------------
// Busy guard and stale results
// -------------------------------------------------------------------------

#[tokio::test]
async fn busy_session_ignores_new_requests() {
    let model = ScriptedModel::new().with_edit(Ok(vec![1]));
    let mut session = ready_session(model).await;

    let job = session.begin_edit("first").expect("job");
    assert!(session.is_busy());
    assert!(session.begin_edit("second").is_none());
    assert!(session.begin_surprise().is_none());

    session.complete(job.run().await);

    let calls = model_ref(&session).edit_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].prompt, "first");
    assert_eq!(session.history().len(), 2);
    assert!(!session.is_busy());
}

#[tokio::test]
async fn result_after_new_image_is_discarded() {
    let model = ScriptedModel::new().with_edit(Ok(vec![1]));
    let mut session = ready_session(model).await;

    let job = session.begin_edit("slow edit").expect("job");
    session.new_image();
    assert_eq!(session.phase(), Phase::Empty);

    session.complete(job.run().await);

    assert_eq!(session.phase(), Phase::Empty);
    assert!(session.history().is_empty());
    assert!(session.error().is_none());
}

#[tokio::test]
async fn stale_result_does_not_touch_next_session() {
    let model = ScriptedModel::new()
        .with_edit(Err(ModelError::Refused("late".to_string())));
    let mut session = ready_session(model).await;

    let stale = session.begin_edit("old").expect("job");
    session.new_image();
    session.upload(png_upload(RED)).await;
    let fresh = session.current().cloned();

    session.complete(stale.run().await);

    assert_eq!(session.current().cloned(), fresh);
    assert_eq!(session.history().len(), 1);
    assert!(session.error().is_none());
}

#[tokio::test]
async fn dropped_request_does_not_leave_session_busy() {
    let mut session = ready_session(ScriptedModel::hanging()).await;

    tokio::select! {
        biased;
        () = session.edit("never answers") => panic!("hanging model answered"),
        () = async {} => {}
    }

    assert!(!session.is_busy());
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn dropped_job_releases_busy() {
    let model = ScriptedModel::new().with_edit(Ok(vec![1]));
    let mut session = ready_session(model).await;

    let job = session.begin_edit("first").expect("job");
    assert_eq!(session.phase(), Phase::Busy);
    drop(job);
    assert_eq!(session.phase(), Phase::Ready);

    session.edit("second").await;

    let calls = model_ref(&session).edit_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].prompt, "second");
    assert_eq!(session.history().len(), 2);
    assert!(!session.is_busy());
}

#[tokio::test]
async fn aborted_spawned_job_releases_busy() {
    let mut session = ready_session(ScriptedModel::hanging()).await;

    let job = session.begin_surprise().expect("job");
    let handle = tokio::spawn(job.run());
    assert!(session.is_busy());

    handle.abort();
    assert!(handle.await.is_err_and(|e| e.is_cancelled()));

    assert!(!session.is_busy());
    assert!(session.begin_edit("again").is_some());
}

#[tokio::test]
async fn pending_outcome_keeps_session_busy() {
    let model = ScriptedModel::new().with_edit(Ok(vec![1]));
    let mut session = ready_session(model).await;

    let job = session.begin_edit("first").expect("job");
    let outcome = job.run().await;
    assert!(session.is_busy());
    assert!(session.begin_edit("second").is_none());

    session.complete(outcome);
    assert!(!session.is_busy());
    assert_eq!(session.history().len(), 2);
}

// -------------------------------------------------------------------------
// Surprise me
// -------------------------------------------------------------------------

#[tokio::test]
async fn surprise_edits_with_trimmed_suggestion() {
    let model = ScriptedModel::new()
        .with_suggestion(Ok("  Paint it like Monet \n".to_string()))
        .with_edit(Ok(vec![4, 2]));
    let mut session = ready_session(model).await;

    session.surprise_me().await;

    let calls = model_ref(&session).edit_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].prompt, "Paint it like Monet");
    assert_eq!(session.history().len(), 2);
    assert!(session.error().is_none());
}

#[tokio::test]
async fn blocked_suggestion_never_runs_edit() {
    let model = ScriptedModel::new()
        .with_suggestion(Err(ModelError::Blocked("SAFETY".to_string())))
        .with_edit(Ok(vec![1]));
    let mut session = ready_session(model).await;

    session.surprise_me().await;

    assert_eq!(model_ref(&session).suggest_calls(), 1);
    assert!(model_ref(&session).edit_calls().is_empty());
    assert_eq!(session.history().len(), 1);
    assert!(session.error().is_some_and(|e| e.contains("SAFETY")));
    assert!(!session.is_busy());
}

#[tokio::test]
async fn blank_suggestion_is_one_error() {
    let model = ScriptedModel::new().with_suggestion(Ok("   ".to_string()));
    let mut session = ready_session(model).await;

    session.surprise_me().await;

    assert!(model_ref(&session).edit_calls().is_empty());
    assert_eq!(
        session.error(),
        Some(ModelError::EmptySuggestion.user_message().as_str())
    );
    assert_eq!(session.history().len(), 1);
}

// -------------------------------------------------------------------------
// Local transitions
// -------------------------------------------------------------------------

#[tokio::test]
async fn undo_redo_move_cursor_and_reset_adjustments() {
    let model = ScriptedModel::new().with_edit(Ok(vec![7]));
    let mut session = ready_session(model).await;
    session.edit("edit").await;

    session.set_brightness(150);
    session.rotate_right();
    session.undo();
    assert_eq!(session.history().cursor(), Some(0));
    assert!(!session.adjustments().has_changes());
    assert!(session.can_redo());

    session.set_contrast(80);
    session.redo();
    assert_eq!(session.history().cursor(), Some(1));
    assert!(!session.adjustments().has_changes());
}

#[tokio::test]
async fn undo_redo_leave_error_in_place() {
    let model = ScriptedModel::new()
        .with_edit(Ok(vec![7]))
        .with_edit(Err(ModelError::Refused("nope".to_string())));
    let mut session = ready_session(model).await;
    session.edit("ok").await;
    session.edit("refused").await;

    session.undo();
    assert_eq!(session.error(), Some("nope"));
    session.redo();
    assert_eq!(session.error(), Some("nope"));
}

#[tokio::test]
async fn adjustments_survive_failed_edit() {
    let model = ScriptedModel::new().with_edit(Err(ModelError::Refused("no".to_string())));
    let mut session = ready_session(model).await;
    session.set_brightness(130);

    session.edit("x").await;

    assert_eq!(session.adjustments().brightness.value(), 130);
}

#[tokio::test]
async fn reset_to_original_requires_undo_history() {
    let model = ScriptedModel::new().with_edit(Ok(vec![7]));
    let mut session = ready_session(model).await;

    session.reset_to_original();
    assert_eq!(session.history().len(), 1);

    session.edit("edit").await;
    session.reset_to_original();
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.history().cursor(), Some(2));
    assert_eq!(
        session.current(),
        session.history().entry_at(0).map(HistoryEntry::payload)
    );
}

#[tokio::test]
async fn new_image_clears_everything() {
    let model = ScriptedModel::new().with_edit(Err(ModelError::Refused("no".to_string())));
    let mut session = ready_session(model).await;
    session.edit("x").await;
    session.rotate_left();

    session.new_image();

    assert_eq!(session.phase(), Phase::Empty);
    assert!(session.error().is_none());
    assert!(!session.adjustments().has_changes());
    assert!(session.begin_upload(png_upload(RED)).is_some());
}

// -------------------------------------------------------------------------
// Export
// -------------------------------------------------------------------------

#[tokio::test]
async fn blue_to_red_end_to_end() {
    let model = ScriptedModel::new().with_edit(Ok(solid_png(2, 2, RED)));
    let mut session = ready_session(model).await;

    session.edit("make it red").await;
    assert_eq!(session.history().len(), 2);
    assert!(session.can_undo());

    let exported = session.export().await.expect("export");
    assert_eq!((exported.width, exported.height), (2, 2));
    assert_eq!(first_pixel(&exported.png_bytes), RED);

    session.undo();
    let exported = session.export().await.expect("export");
    assert_eq!(first_pixel(&exported.png_bytes), BLUE);
}

#[tokio::test]
async fn export_bakes_rotation() {
    let mut session = EditSession::new(ScriptedModel::new());
    session
        .upload(UploadFile::Bytes {
            mime: "image/png".to_string(),
            bytes: solid_png(4, 2, BLUE),
        })
        .await;
    session.rotate_left();

    let exported = session.export().await.expect("export");
    assert_eq!((exported.width, exported.height), (2, 4));
}

#[tokio::test]
async fn export_failure_becomes_session_error() {
    let model = ScriptedModel::new().with_edit(Ok(vec![1, 2, 3]));
    let mut session = ready_session(model).await;
    session.edit("garbage").await;

    assert!(session.export().await.is_none());
    assert!(session
        .error()
        .is_some_and(|e| e.starts_with("Export Error")));
}

#[tokio::test]
async fn successful_export_clears_previous_error() {
    let mut session = ready_session(ScriptedModel::new()).await;
    session.edit("unanswered").await;
    assert_eq!(session.error(), Some(COMMUNICATION_MESSAGE));

    assert!(session.export().await.is_some());
    assert!(session.error().is_none());
}

#[tokio::test]
async fn export_without_image_is_none() {
    let mut session = EditSession::new(ScriptedModel::new());
    assert!(session.export().await.is_none());
    assert!(session.error().is_none());
}
