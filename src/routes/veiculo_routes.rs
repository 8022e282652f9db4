//! Rotas de consulta de veículos (públicas)

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::veiculo_controller::VeiculoController;
use crate::dto::veiculo_dto::{DisponibilidadeQuery, VeiculoResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_veiculo_router() -> Router<AppState> {
    Router::new().route("/disponiveis", get(listar_disponiveis))
}

async fn listar_disponiveis(
    State(state): State<AppState>,
    Query(query): Query<DisponibilidadeQuery>,
) -> Result<Json<ApiResponse<Vec<VeiculoResponse>>>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.disponiveis(query).await?;
    Ok(Json(ApiResponse::success(response)))
}
