//! Rotas de locação (back-office)

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::locacao_controller::LocacaoController;
use crate::dto::locacao_dto::{
    ContratoLocacaoResponse, DevolucaoRequest, FaturamentoResponse, LocacaoResponse,
    RetiradaRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_locacao_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_locacoes))
        .route("/retirada", post(processar_retirada))
        .route("/:codigo/devolucao", post(processar_devolucao))
        .route("/cliente/:cpf", get(listar_por_cliente))
}

async fn processar_retirada(
    State(state): State<AppState>,
    Json(request): Json<RetiradaRequest>,
) -> Result<Json<ApiResponse<ContratoLocacaoResponse>>, AppError> {
    let controller = LocacaoController::new(state.pool.clone());
    let response = controller.processar_retirada(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Retirada confirmada".to_string(),
    )))
}

async fn processar_devolucao(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
    Json(request): Json<DevolucaoRequest>,
) -> Result<Json<ApiResponse<FaturamentoResponse>>, AppError> {
    let controller = LocacaoController::new(state.pool.clone());
    let response = controller.processar_devolucao(&codigo, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Devolução processada".to_string(),
    )))
}

async fn listar_locacoes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LocacaoResponse>>>, AppError> {
    let controller = LocacaoController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn listar_por_cliente(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<ApiResponse<Vec<LocacaoResponse>>>, AppError> {
    let controller = LocacaoController::new(state.pool.clone());
    let response = controller.listar_por_cliente(&cpf).await?;
    Ok(Json(ApiResponse::success(response)))
}
