//! First-run seed data
//!
//! 空数据库启动时写入演示账户与合同，方便本地联调。
//! 所有演示账户的密码均为 "123"。

use rust_decimal::Decimal;
use shared::Role;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{ContractCreate, UserCreate};
use crate::db::repository::{ContractRepository, RepoResult, UserRepository};

/// Seed demo accounts and contracts if the tables are empty
pub async fn seed_if_empty(db: &Surreal<Db>) -> RepoResult<()> {
    seed_users(db).await?;
    seed_contracts(db).await?;
    Ok(())
}

async fn seed_users(db: &Surreal<Db>) -> RepoResult<()> {
    let users = UserRepository::new(db.clone());
    if users.count().await? > 0 {
        return Ok(());
    }

    let accounts = [
        UserCreate {
            username: "nhanvien".to_string(),
            password: "123".to_string(),
            full_name: "Nguyễn Văn An".to_string(),
            role: Role::Employee,
            department: "Kinh Doanh".to_string(),
        },
        UserCreate {
            username: "truongbp".to_string(),
            password: "123".to_string(),
            full_name: "Trần Thị Bình".to_string(),
            role: Role::Supervisor,
            department: "Kinh Doanh".to_string(),
        },
        UserCreate {
            username: "qlns".to_string(),
            password: "123".to_string(),
            full_name: "Lê Minh Châu".to_string(),
            role: Role::HrManager,
            department: "Nhân Sự".to_string(),
        },
    ];

    let total = accounts.len();
    for account in accounts {
        users.create(account).await?;
    }
    tracing::info!("Seeded {} demo accounts", total);

    Ok(())
}

async fn seed_contracts(db: &Surreal<Db>) -> RepoResult<()> {
    let contracts = ContractRepository::new(db.clone());
    if contracts.count().await? > 0 {
        return Ok(());
    }

    let records = [
        ContractCreate {
            employee_name: "Nguyễn Văn An".to_string(),
            contract_type: "Full-time".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2024-12-31".to_string(),
            salary_base: Decimal::from(10_000_000_i64),
            status: "Active".to_string(),
        },
        ContractCreate {
            employee_name: "Trần Thị Bình".to_string(),
            contract_type: "Full-time".to_string(),
            start_date: "2022-06-01".to_string(),
            end_date: "2025-05-31".to_string(),
            salary_base: Decimal::from(15_500_000_i64),
            status: "Active".to_string(),
        },
        ContractCreate {
            employee_name: "Phạm Quốc Dũng".to_string(),
            contract_type: "Part-time".to_string(),
            start_date: "2023-03-15".to_string(),
            end_date: "2024-03-14".to_string(),
            salary_base: Decimal::from(6_000_000_i64),
            status: "Expired".to_string(),
        },
    ];

    let total = records.len();
    for record in records {
        contracts.create(record).await?;
    }
    tracing::info!("Seeded {} demo contracts", total);

    Ok(())
}
