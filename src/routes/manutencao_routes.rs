//! Rotas de manutenção (back-office)

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::manutencao_controller::ManutencaoController;
use crate::dto::manutencao_dto::AgendarManutencaoRequest;
use crate::dto::veiculo_dto::VeiculoResponse;
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_manutencao_router() -> Router<AppState> {
    Router::new()
        .route("/", post(agendar_manutencao))
        .route("/", get(listar_manutencoes))
}

async fn agendar_manutencao(
    State(state): State<AppState>,
    Json(request): Json<AgendarManutencaoRequest>,
) -> Result<Json<ApiResponse<VeiculoResponse>>, AppError> {
    let controller = ManutencaoController::new(state.pool.clone());
    let response = controller.agendar(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Manutenção agendada".to_string(),
    )))
}

async fn listar_manutencoes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VeiculoResponse>>>, AppError> {
    let controller = ManutencaoController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(ApiResponse::success(response)))
}
