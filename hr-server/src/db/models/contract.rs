//! Employment contract model
//!
//! 劳动合同记录与报表视图。工资存为 Decimal，展示时格式化为 "10,000,000 VND"。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// 合同 (数据库记录)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    /// 员工姓名
    pub employee_name: String,
    /// 合同类型 ("Full-time", "Part-time", ...)
    pub contract_type: String,
    /// 生效日期 "YYYY-MM-DD"
    pub start_date: String,
    /// 到期日期 "YYYY-MM-DD"
    pub end_date: String,
    /// 基本工资 (VND)
    pub salary_base: Decimal,
    /// 合同状态 ("Active", "Expired")
    pub status: String,
}

impl Contract {
    pub fn is_active(&self) -> bool {
        self.status == "Active"
    }

    /// Formatted salary for display, e.g. "10,000,000 VND"
    pub fn salary_display(&self) -> String {
        format!("{} VND", group_thousands(&self.salary_base))
    }
}

/// 创建合同的数据 (种子数据使用)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractCreate {
    pub employee_name: String,
    pub contract_type: String,
    pub start_date: String,
    pub end_date: String,
    pub salary_base: Decimal,
    pub status: String,
}

/// 合同报表视图 (API 响应)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractView {
    pub id: String,
    pub employee_name: String,
    pub contract_type: String,
    pub start_date: String,
    pub end_date: String,
    pub salary_base: Decimal,
    pub salary_display: String,
    pub status: String,
    pub active: bool,
}

impl From<Contract> for ContractView {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            active: contract.is_active(),
            salary_display: contract.salary_display(),
            employee_name: contract.employee_name,
            contract_type: contract.contract_type,
            start_date: contract.start_date,
            end_date: contract.end_date,
            salary_base: contract.salary_base,
            status: contract.status,
        }
    }
}

/// Thousands separators on the integer part, fraction kept as-is
fn group_thousands(value: &Decimal) -> String {
    let text = value.normalize().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contract(salary: i64, status: &str) -> Contract {
        Contract {
            id: None,
            employee_name: "Nguyễn Văn An".to_string(),
            contract_type: "Full-time".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2024-12-31".to_string(),
            salary_base: Decimal::from(salary),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_salary_display_grouping() {
        assert_eq!(
            sample_contract(10_000_000, "Active").salary_display(),
            "10,000,000 VND"
        );
        assert_eq!(sample_contract(500, "Active").salary_display(), "500 VND");
        assert_eq!(
            sample_contract(6_000_000, "Expired").salary_display(),
            "6,000,000 VND"
        );
    }

    #[test]
    fn test_view_carries_active_flag() {
        let active = ContractView::from(sample_contract(10_000_000, "Active"));
        assert!(active.active);
        assert_eq!(active.salary_display, "10,000,000 VND");

        let expired = ContractView::from(sample_contract(10_000_000, "Expired"));
        assert!(!expired.active);
    }
}
