//! Leave Request Repository
//!
//! 状态迁移使用条件 UPDATE，保证每张请假单最多被审批一次。

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{LeaveRequest, LeaveRequestCreate, LeaveStatus};

#[derive(Clone)]
pub struct LeaveRequestRepository {
    base: BaseRepository,
}

impl LeaveRequestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new request for the given user, always starting as Pending
    pub async fn create(
        &self,
        user_id: RecordId,
        data: LeaveRequestCreate,
    ) -> RepoResult<LeaveRequest> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE leave_request SET
                    user_id = $user_id,
                    leave_type = $leave_type,
                    start_date = $start_date,
                    end_date = $end_date,
                    reason = $reason,
                    status = $status
                RETURN AFTER"#,
            )
            .bind(("user_id", user_id))
            .bind(("leave_type", data.leave_type))
            .bind(("start_date", data.start_date))
            .bind(("end_date", data.end_date))
            .bind(("reason", data.reason))
            .bind(("status", LeaveStatus::Pending))
            .await?;

        let created: Option<LeaveRequest> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create leave request".to_string()))
    }

    /// Find request by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<LeaveRequest>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let request: Option<LeaveRequest> = self.base.db().select(thing).await?;
        Ok(request)
    }

    /// All requests submitted by one user, newest first
    pub async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Vec<LeaveRequest>> {
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query(
                "SELECT * FROM leave_request WHERE user_id = $user_id ORDER BY start_date DESC",
            )
            .bind(("user_id", user_id))
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// All pending requests with the submitter's name projected in
    pub async fn find_pending(&self) -> RepoResult<Vec<LeaveRequest>> {
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query(
                r#"SELECT *, user_id.full_name AS full_name
                FROM leave_request
                WHERE status = $status
                ORDER BY start_date"#,
            )
            .bind(("status", LeaveStatus::Pending))
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Decide a pending request.
    ///
    /// The UPDATE only matches while the request is still Pending, so a
    /// request that was already decided returns [`RepoError::Conflict`]
    /// instead of being overwritten.
    pub async fn transition(&self, id: &str, to: LeaveStatus) -> RepoResult<LeaveRequest> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Leave request {} not found", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET status = $to
                WHERE status = $pending
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("to", to))
            .bind(("pending", LeaveStatus::Pending))
            .await?;

        let updated: Option<LeaveRequest> = result.take(0)?;
        updated.ok_or_else(|| {
            RepoError::Conflict(format!("Leave request {} has already been decided", id))
        })
    }
}
