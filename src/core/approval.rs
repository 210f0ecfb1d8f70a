//! Monthly approval workflow.
//!
//! A month moves `draft → pending → approved`, with `rejected` as the
//! terminal "send it back" state and `cancel` as the only way out of
//! `approved`. Every transition is persisted through the store's
//! compare-and-set primitive, so two concurrent actors can never both win
//! the same transition.

use crate::errors::{AppError, AppResult};
use crate::models::approval::{Approval, ApprovalStatus};
use crate::store::AttendanceStore;
use chrono::Local;

/// Who is performing the operation. Built from config and CLI flags; the
/// engine never reads ambient identity on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub approver: bool,
    pub admin: bool,
}

impl Actor {
    pub fn new(id: &str) -> Self {
        Actor {
            id: id.to_string(),
            approver: false,
            admin: false,
        }
    }

    pub fn approver(id: &str) -> Self {
        Actor {
            id: id.to_string(),
            approver: true,
            admin: false,
        }
    }

    pub fn can_approve(&self) -> bool {
        self.approver || self.admin
    }

    /// Whether this actor may touch `user`'s data: the owner always may,
    /// approvers and admins may act on anyone's behalf.
    pub fn may_act_for(&self, user: &str) -> bool {
        self.id == user || self.can_approve()
    }
}

pub struct ApprovalFlow;

impl ApprovalFlow {
    /// Current status of a month; a month nobody touched yet is `Draft`.
    pub fn status(
        store: &mut dyn AttendanceStore,
        user: &str,
        year: i32,
        month: u32,
    ) -> AppResult<ApprovalStatus> {
        Ok(store
            .approval(user, year, month)?
            .map(|a| a.status)
            .unwrap_or_default())
    }

    /// Records and settings stay editable until the month is approved.
    /// `Rejected` months are editable again on purpose: the whole point of a
    /// rejection is to let the owner fix the data and re-request.
    pub fn is_editable(
        store: &mut dyn AttendanceStore,
        user: &str,
        year: i32,
        month: u32,
    ) -> AppResult<bool> {
        Ok(store
            .approval(user, year, month)?
            .is_none_or(|a| a.is_editable()))
    }

    /// Submit a month for approval. Allowed from `Draft`, `Pending` (a
    /// re-request refreshes the timestamp) and `Rejected`; an `Approved`
    /// month must be cancelled first and the attempt leaves no trace.
    pub fn request(
        store: &mut dyn AttendanceStore,
        actor: &Actor,
        user: &str,
        year: i32,
        month: u32,
    ) -> AppResult<Approval> {
        if !actor.may_act_for(user) {
            return Err(AppError::PermissionDenied(format!(
                "'{}' cannot request approval for '{}'",
                actor.id, user
            )));
        }

        let mut approval = store
            .approval(user, year, month)?
            .unwrap_or_else(|| Approval::draft(user, year, month));

        if approval.status == ApprovalStatus::Approved {
            return Err(AppError::StateConflict(format!(
                "{}-{:02} of '{}' is already approved; cancel the approval first",
                year, month, user
            )));
        }

        approval.status = ApprovalStatus::Pending;
        approval.requested_at = Some(Local::now().to_rfc3339());
        // A fresh request supersedes any earlier rejection.
        approval.approved_by = None;
        approval.approved_at = None;
        approval.rejection_reason = None;

        let stored = store.store_approval_when(
            &approval,
            &[
                ApprovalStatus::Draft,
                ApprovalStatus::Pending,
                ApprovalStatus::Rejected,
            ],
        )?;
        if !stored {
            return Err(AppError::StateConflict(format!(
                "{}-{:02} of '{}' was approved concurrently; cancel the approval first",
                year, month, user
            )));
        }
        Ok(approval)
    }

    /// Approve a pending month. From here on the month is locked against
    /// record and settings writes.
    pub fn approve(
        store: &mut dyn AttendanceStore,
        actor: &Actor,
        user: &str,
        year: i32,
        month: u32,
    ) -> AppResult<Approval> {
        let mut approval = Self::take_pending(store, actor, user, year, month)?;

        approval.status = ApprovalStatus::Approved;
        approval.approved_by = Some(actor.id.clone());
        approval.approved_at = Some(Local::now().to_rfc3339());
        approval.rejection_reason = None;

        Self::settle(store, approval, year, month, user)
    }

    /// Reject a pending month with a reason, unlocking it for fixes.
    pub fn reject(
        store: &mut dyn AttendanceStore,
        actor: &Actor,
        user: &str,
        year: i32,
        month: u32,
        reason: &str,
    ) -> AppResult<Approval> {
        let mut approval = Self::take_pending(store, actor, user, year, month)?;

        approval.status = ApprovalStatus::Rejected;
        approval.approved_by = Some(actor.id.clone());
        approval.approved_at = Some(Local::now().to_rfc3339());
        approval.rejection_reason = Some(reason.to_string());

        Self::settle(store, approval, year, month, user)
    }

    /// Revoke an approval, returning the month to `Draft` so it can be
    /// edited and re-submitted. The original request timestamp survives.
    pub fn cancel(
        store: &mut dyn AttendanceStore,
        actor: &Actor,
        user: &str,
        year: i32,
        month: u32,
    ) -> AppResult<Approval> {
        if !actor.can_approve() {
            return Err(AppError::PermissionDenied(format!(
                "'{}' lacks the approver role required to cancel an approval",
                actor.id
            )));
        }

        let mut approval = match store.approval(user, year, month)? {
            Some(a) if a.status == ApprovalStatus::Approved => a,
            other => {
                return Err(AppError::StateConflict(format!(
                    "{}-{:02} of '{}' is {}, not approved",
                    year,
                    month,
                    user,
                    other.map(|a| a.status).unwrap_or_default().to_db_str()
                )));
            }
        };

        approval.status = ApprovalStatus::Draft;
        approval.approved_by = None;
        approval.approved_at = None;
        approval.rejection_reason = None;

        let stored = store.store_approval_when(&approval, &[ApprovalStatus::Approved])?;
        if !stored {
            return Err(AppError::StateConflict(format!(
                "{}-{:02} of '{}' changed concurrently; nothing cancelled",
                year, month, user
            )));
        }
        Ok(approval)
    }

    fn take_pending(
        store: &mut dyn AttendanceStore,
        actor: &Actor,
        user: &str,
        year: i32,
        month: u32,
    ) -> AppResult<Approval> {
        if !actor.can_approve() {
            return Err(AppError::PermissionDenied(format!(
                "'{}' lacks the approver role",
                actor.id
            )));
        }
        match store.approval(user, year, month)? {
            Some(a) if a.status == ApprovalStatus::Pending => Ok(a),
            other => Err(AppError::StateConflict(format!(
                "{}-{:02} of '{}' is {}, not pending",
                year,
                month,
                user,
                other.map(|a| a.status).unwrap_or_default().to_db_str()
            ))),
        }
    }

    fn settle(
        store: &mut dyn AttendanceStore,
        approval: Approval,
        year: i32,
        month: u32,
        user: &str,
    ) -> AppResult<Approval> {
        let stored = store.store_approval_when(&approval, &[ApprovalStatus::Pending])?;
        if !stored {
            return Err(AppError::StateConflict(format!(
                "{}-{:02} of '{}' left the pending state concurrently",
                year, month, user
            )));
        }
        Ok(approval)
    }
}
