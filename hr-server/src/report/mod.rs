//! Contract report
//!
//! 报表分两步：先把合同列表折叠成纯数据的 [`ReportDocument`]
//! (可独立测试)，再由 [`pdf`] 渲染成 PDF 字节流。

pub mod pdf;

pub use pdf::{ReportError, render_pdf};

use crate::db::models::Contract;

/// Column headers, unaccented so the builtin PDF fonts render them cleanly
pub const COLUMN_HEADERS: [&str; 6] = [
    "Nhan Vien",
    "Loai HD",
    "Ngay BD",
    "Ngay KT",
    "Luong CB",
    "Trang Thai",
];

/// Report content, independent of any output format
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: String,
    /// "Ngay xuat: YYYY-MM-DD" line under the title
    pub generated_on: String,
    pub headers: [&'static str; 6],
    pub rows: Vec<[String; 6]>,
}

/// Fold the contract list into the report table
pub fn build_contract_report(contracts: &[Contract]) -> ReportDocument {
    let rows = contracts
        .iter()
        .map(|c| {
            [
                c.employee_name.clone(),
                c.contract_type.clone(),
                c.start_date.clone(),
                c.end_date.clone(),
                c.salary_display(),
                c.status.clone(),
            ]
        })
        .collect();

    ReportDocument {
        title: "BAO CAO DANH SACH HOP DONG NHAN SU".to_string(),
        generated_on: chrono::Local::now().format("%Y-%m-%d").to_string(),
        headers: COLUMN_HEADERS,
        rows,
    }
}
