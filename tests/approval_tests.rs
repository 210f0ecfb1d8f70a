use chrono::{NaiveDate, NaiveTime};
use rkintai::core::approval::{Actor, ApprovalFlow};
use rkintai::db::initialize::init_db;
use rkintai::db::pool::DbPool;
use rkintai::errors::AppError;
use rkintai::models::approval::{Approval, ApprovalStatus};
use rkintai::models::daily_record::DailyRecord;
use rkintai::models::monthly_settings::MonthlySettings;
use rkintai::store::AttendanceStore;

fn store() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init schema");
    pool
}

fn owner() -> Actor {
    Actor::new("alice")
}

fn boss() -> Actor {
    Actor::approver("boss")
}

#[test]
fn test_untouched_month_is_draft_and_editable() {
    let mut store = store();
    let status = ApprovalFlow::status(&mut store, "alice", 2025, 4).expect("status");
    assert_eq!(status, ApprovalStatus::Draft);
    assert!(ApprovalFlow::is_editable(&mut store, "alice", 2025, 4).expect("editable"));
}

#[test]
fn test_request_moves_draft_to_pending() {
    let mut store = store();
    let approval =
        ApprovalFlow::request(&mut store, &owner(), "alice", 2025, 4).expect("request");

    assert_eq!(approval.status, ApprovalStatus::Pending);
    assert!(approval.requested_at.is_some());

    let stored = store.approval("alice", 2025, 4).expect("read").expect("row");
    assert_eq!(stored.status, ApprovalStatus::Pending);
    assert!(stored.approved_by.is_none());
}

#[test]
fn test_re_request_refreshes_a_pending_month() {
    let mut store = store();
    ApprovalFlow::request(&mut store, &owner(), "alice", 2025, 4).expect("first");
    // a second request is not an error, the month just stays pending
    let again = ApprovalFlow::request(&mut store, &owner(), "alice", 2025, 4).expect("second");
    assert_eq!(again.status, ApprovalStatus::Pending);
}

#[test]
fn test_plain_actor_cannot_request_for_someone_else() {
    let mut store = store();
    let err = ApprovalFlow::request(&mut store, &Actor::new("bob"), "alice", 2025, 4)
        .expect_err("must fail");
    assert!(matches!(err, AppError::PermissionDenied(_)));

    // an approver may submit on the owner's behalf
    ApprovalFlow::request(&mut store, &boss(), "alice", 2025, 4).expect("by approver");
}

#[test]
fn test_approve_requires_role_and_pending_state() {
    let mut store = store();

    ApprovalFlow::request(&mut store, &owner(), "alice", 2025, 4).expect("request");

    let err = ApprovalFlow::approve(&mut store, &owner(), "alice", 2025, 4)
        .expect_err("owner lacks the role");
    assert!(matches!(err, AppError::PermissionDenied(_)));

    let approved = ApprovalFlow::approve(&mut store, &boss(), "alice", 2025, 4).expect("approve");
    assert_eq!(approved.status, ApprovalStatus::Approved);
    assert_eq!(approved.approved_by.as_deref(), Some("boss"));
    assert!(approved.approved_at.is_some());

    // approving again: no longer pending
    let err = ApprovalFlow::approve(&mut store, &boss(), "alice", 2025, 4)
        .expect_err("not pending anymore");
    assert!(matches!(err, AppError::StateConflict(_)));
}

#[test]
fn test_approve_draft_month_is_a_state_conflict() {
    let mut store = store();
    let err =
        ApprovalFlow::approve(&mut store, &boss(), "alice", 2025, 4).expect_err("nothing pending");
    assert!(matches!(err, AppError::StateConflict(_)));
}

#[test]
fn test_reject_stores_reason_and_reopens_month() {
    let mut store = store();
    ApprovalFlow::request(&mut store, &owner(), "alice", 2025, 4).expect("request");

    let rejected =
        ApprovalFlow::reject(&mut store, &boss(), "alice", 2025, 4, "missing day 12")
            .expect("reject");
    assert_eq!(rejected.status, ApprovalStatus::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("missing day 12"));

    // rejected months are editable and can be re-submitted; the new request
    // supersedes the rejection metadata
    assert!(ApprovalFlow::is_editable(&mut store, "alice", 2025, 4).expect("editable"));
    let again = ApprovalFlow::request(&mut store, &owner(), "alice", 2025, 4).expect("again");
    assert_eq!(again.status, ApprovalStatus::Pending);
    assert!(again.rejection_reason.is_none());
    assert!(again.approved_by.is_none());
}

#[test]
fn test_request_on_approved_month_fails_without_mutation() {
    let mut store = store();
    ApprovalFlow::request(&mut store, &owner(), "alice", 2025, 4).expect("request");
    ApprovalFlow::approve(&mut store, &boss(), "alice", 2025, 4).expect("approve");

    let err = ApprovalFlow::request(&mut store, &owner(), "alice", 2025, 4)
        .expect_err("approved months cannot be re-requested");
    assert!(matches!(err, AppError::StateConflict(_)));

    // the stored row is untouched
    let stored = store.approval("alice", 2025, 4).expect("read").expect("row");
    assert_eq!(stored.status, ApprovalStatus::Approved);
    assert_eq!(stored.approved_by.as_deref(), Some("boss"));
}

#[test]
fn test_cancel_returns_to_draft_and_keeps_request_timestamp() {
    let mut store = store();
    ApprovalFlow::request(&mut store, &owner(), "alice", 2025, 4).expect("request");
    let requested_at = store
        .approval("alice", 2025, 4)
        .expect("read")
        .expect("row")
        .requested_at;

    ApprovalFlow::approve(&mut store, &boss(), "alice", 2025, 4).expect("approve");
    let cancelled = ApprovalFlow::cancel(&mut store, &boss(), "alice", 2025, 4).expect("cancel");

    assert_eq!(cancelled.status, ApprovalStatus::Draft);
    assert!(cancelled.approved_by.is_none());
    assert!(cancelled.approved_at.is_none());
    assert!(cancelled.rejection_reason.is_none());
    assert_eq!(cancelled.requested_at, requested_at);

    assert!(ApprovalFlow::is_editable(&mut store, "alice", 2025, 4).expect("editable"));
}

#[test]
fn test_cancel_needs_role_and_approved_state() {
    let mut store = store();

    let err = ApprovalFlow::cancel(&mut store, &owner(), "alice", 2025, 4)
        .expect_err("owner lacks the role");
    assert!(matches!(err, AppError::PermissionDenied(_)));

    let err =
        ApprovalFlow::cancel(&mut store, &boss(), "alice", 2025, 4).expect_err("nothing approved");
    assert!(matches!(err, AppError::StateConflict(_)));
}

#[test]
fn test_store_compare_and_set_rejects_stale_transition() {
    let mut store = store();

    // month is draft; a write gated on pending must not happen
    let mut approval = Approval::draft("alice", 2025, 4);
    approval.status = ApprovalStatus::Approved;
    approval.approved_by = Some("boss".to_string());

    let stored = store
        .store_approval_when(&approval, &[ApprovalStatus::Pending])
        .expect("cas");
    assert!(!stored);
    assert!(store.approval("alice", 2025, 4).expect("read").is_none());
}

#[test]
fn test_record_and_settings_writes_blocked_on_approved_month() {
    let mut store = store();
    let date = NaiveDate::from_ymd_opt(2025, 4, 10).expect("date");

    // editable before approval
    let mut record = DailyRecord::new("alice", date);
    record.start_time = NaiveTime::from_hms_opt(9, 0, 0);
    record.end_time = NaiveTime::from_hms_opt(18, 0, 0);
    store.save_daily_record(&record).expect("save while draft");

    ApprovalFlow::request(&mut store, &owner(), "alice", 2025, 4).expect("request");
    ApprovalFlow::approve(&mut store, &boss(), "alice", 2025, 4).expect("approve");

    let err = store.save_daily_record(&record).expect_err("month is locked");
    assert!(matches!(err, AppError::MonthLocked(_)));

    let settings = MonthlySettings::new("alice", 2025, 4, 8.0);
    let err = store
        .save_monthly_settings(&settings)
        .expect_err("settings locked too");
    assert!(matches!(err, AppError::MonthLocked(_)));

    // another month of the same user is unaffected
    let other = DailyRecord::new("alice", NaiveDate::from_ymd_opt(2025, 5, 1).expect("date"));
    store.save_daily_record(&other).expect("other month writable");

    // and after cancel the month opens up again
    ApprovalFlow::cancel(&mut store, &boss(), "alice", 2025, 4).expect("cancel");
    store.save_daily_record(&record).expect("editable again");
}
