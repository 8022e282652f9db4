//! Rotas do catálogo de categorias (públicas)

use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::categoria_controller::CategoriaController;
use crate::dto::categoria_dto::CategoriaResponse;
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_categoria_router() -> Router<AppState> {
    Router::new().route("/", get(listar_categorias))
}

async fn listar_categorias(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CategoriaResponse>>>, AppError> {
    let controller = CategoriaController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(ApiResponse::success(response)))
}
