//! Contract Repository

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Contract, ContractCreate};

#[derive(Clone)]
pub struct ContractRepository {
    base: BaseRepository,
}

impl ContractRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All contracts, in employee name order
    pub async fn find_all(&self) -> RepoResult<Vec<Contract>> {
        let contracts: Vec<Contract> = self
            .base
            .db()
            .query("SELECT * FROM contract ORDER BY employee_name")
            .await?
            .take(0)?;
        Ok(contracts)
    }

    /// Create a contract record (seed data)
    pub async fn create(&self, data: ContractCreate) -> RepoResult<Contract> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE contract SET
                    employee_name = $employee_name,
                    contract_type = $contract_type,
                    start_date = $start_date,
                    end_date = $end_date,
                    salary_base = $salary_base,
                    status = $status
                RETURN AFTER"#,
            )
            .bind(("employee_name", data.employee_name))
            .bind(("contract_type", data.contract_type))
            .bind(("start_date", data.start_date))
            .bind(("end_date", data.end_date))
            .bind(("salary_base", data.salary_base))
            .bind(("status", data.status))
            .await?;

        let created: Option<Contract> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create contract".to_string()))
    }

    /// Number of contract records (seed check)
    pub async fn count(&self) -> RepoResult<usize> {
        #[derive(Deserialize)]
        struct CountRow {
            total: usize,
        }

        let mut result = self
            .base
            .db()
            .query("SELECT count() AS total FROM contract GROUP ALL")
            .await?;
        let row: Option<CountRow> = result.take(0)?;
        Ok(row.map(|r| r.total).unwrap_or(0))
    }
}
