//! Leave request model
//!
//! 请假单：员工提交，主管审批。状态机 Pending -> Approved | Rejected。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

pub type LeaveRequestId = RecordId;

/// 请假类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    /// Nghỉ phép năm
    Annual,
    /// Nghỉ ốm
    Sick,
    /// Nghỉ việc riêng
    Personal,
}

impl LeaveType {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Nghỉ phép năm",
            LeaveType::Sick => "Nghỉ ốm",
            LeaveType::Personal => "Nghỉ việc riêng",
        }
    }
}

/// 请假单状态 (封闭状态机)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

/// 请假单 (数据库记录)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<LeaveRequestId>,
    /// 提交人 (record link -> user)
    #[serde(with = "serde_helpers::record_id")]
    pub user_id: RecordId,
    /// 提交人姓名 (仅在审批列表查询中投影)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub leave_type: LeaveType,
    /// 开始日期 "YYYY-MM-DD"
    pub start_date: String,
    /// 结束日期 "YYYY-MM-DD"
    pub end_date: String,
    /// 事由 (可为空)
    pub reason: String,
    pub status: LeaveStatus,
}

/// 提交请假单的请求体
///
/// 日期只做必填校验，事由可留空。
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LeaveRequestCreate {
    pub leave_type: LeaveType,
    #[validate(length(min = 1, message = "start_date is required"))]
    pub start_date: String,
    #[validate(length(min = 1, message = "end_date is required"))]
    pub end_date: String,
    #[serde(default)]
    pub reason: String,
}
