//! Contract Handlers

use axum::{Json, extract::State, response::IntoResponse};
use http::{HeaderMap, header};

use crate::AppError;
use crate::core::ServerState;
use crate::db::models::ContractView;
use crate::db::repository::ContractRepository;
use crate::report;

/// All contracts for the report table
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ContractView>>, AppError> {
    let repo = ContractRepository::new(state.get_db());
    let contracts = repo.find_all().await?;
    Ok(Json(contracts.into_iter().map(ContractView::from).collect()))
}

/// Export the contract report as a downloadable PDF
pub async fn export(State(state): State<ServerState>) -> Result<impl IntoResponse, AppError> {
    let repo = ContractRepository::new(state.get_db());
    let contracts = repo.find_all().await?;

    let document = report::build_contract_report(&contracts);
    let bytes = report::render_pdf(&document)
        .map_err(|e| AppError::internal(format!("PDF rendering failed: {}", e)))?;

    tracing::info!(contracts = contracts.len(), "Contract report exported");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        header::HeaderValue::from_static("attachment; filename=\"Bao_Cao_Hop_Dong.pdf\""),
    );

    Ok((headers, bytes))
}
