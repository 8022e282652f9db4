//! Rotas de reserva
//!
//! Rotas do cliente autenticado (criar, consultar, cancelar,
//! replanejar) e rota administrativa de listagem geral.

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Extension, Json, Router,
};

use crate::controllers::reserva_controller::ReservaController;
use crate::dto::reserva_dto::{
    AlterarPeriodoRequest, CancelarReservaResponse, CriarReservaRequest, ReservaResponse,
};
use crate::dto::ApiResponse;
use crate::state::{AppState, Sessao};
use crate::utils::errors::AppError;

pub fn create_reserva_router() -> Router<AppState> {
    Router::new()
        .route("/", post(criar_reserva))
        .route("/minhas", get(listar_minhas))
        .route("/:codigo", get(buscar_reserva))
        .route("/:codigo/cancelar", post(cancelar_reserva))
        .route("/:codigo/periodo", put(alterar_periodo))
}

pub fn create_reserva_admin_router() -> Router<AppState> {
    Router::new().route("/", get(listar_todas))
}

/// Documento do cliente dono da sessão. Sessões administrativas não
/// carregam documento e não podem operar reservas em nome próprio.
fn documento_cliente(sessao: &Sessao) -> Result<&str, AppError> {
    if sessao.admin || sessao.documento.is_empty() {
        return Err(AppError::Forbidden(
            "Operação exclusiva de clientes autenticados".to_string(),
        ));
    }
    Ok(&sessao.documento)
}

async fn criar_reserva(
    State(state): State<AppState>,
    Extension(sessao): Extension<Sessao>,
    Json(request): Json<CriarReservaRequest>,
) -> Result<Json<ApiResponse<ReservaResponse>>, AppError> {
    let documento = documento_cliente(&sessao)?;
    let controller = ReservaController::new(state.pool.clone());
    let response = controller.criar(documento, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Reserva criada com sucesso".to_string(),
    )))
}

async fn buscar_reserva(
    State(state): State<AppState>,
    Extension(sessao): Extension<Sessao>,
    Path(codigo): Path<String>,
) -> Result<Json<ApiResponse<ReservaResponse>>, AppError> {
    let controller = ReservaController::new(state.pool.clone());
    let response = controller
        .buscar(&codigo, &sessao.documento, sessao.admin)
        .await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn listar_minhas(
    State(state): State<AppState>,
    Extension(sessao): Extension<Sessao>,
) -> Result<Json<ApiResponse<Vec<ReservaResponse>>>, AppError> {
    let documento = documento_cliente(&sessao)?;
    let controller = ReservaController::new(state.pool.clone());
    let response = controller.listar_do_cliente(documento).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn cancelar_reserva(
    State(state): State<AppState>,
    Extension(sessao): Extension<Sessao>,
    Path(codigo): Path<String>,
) -> Result<Json<ApiResponse<CancelarReservaResponse>>, AppError> {
    let documento = documento_cliente(&sessao)?;
    let controller = ReservaController::new(state.pool.clone());
    let response = controller.cancelar(documento, &codigo).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Reserva cancelada".to_string(),
    )))
}

async fn alterar_periodo(
    State(state): State<AppState>,
    Extension(sessao): Extension<Sessao>,
    Path(codigo): Path<String>,
    Json(request): Json<AlterarPeriodoRequest>,
) -> Result<Json<ApiResponse<ReservaResponse>>, AppError> {
    let documento = documento_cliente(&sessao)?;
    let controller = ReservaController::new(state.pool.clone());
    let response = controller
        .alterar_periodo(documento, &codigo, request)
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Período da reserva atualizado".to_string(),
    )))
}

async fn listar_todas(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ReservaResponse>>>, AppError> {
    let controller = ReservaController::new(state.pool.clone());
    let response = controller.listar_todas().await?;
    Ok(Json(ApiResponse::success(response)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documento_cliente() {
        let cliente = Sessao::new(
            "52998224725".to_string(),
            "João".to_string(),
            "joao".to_string(),
            false,
            1,
        );
        assert_eq!(documento_cliente(&cliente).unwrap(), "52998224725");
    }

    #[test]
    fn test_documento_cliente_rejeita_admin() {
        // Sessão administrativa não carrega documento; operar uma
        // reserva com ela deve falhar antes de chegar ao banco
        let admin = Sessao::new(
            String::new(),
            "Admin".to_string(),
            "admin".to_string(),
            true,
            1,
        );
        assert!(matches!(
            documento_cliente(&admin),
            Err(AppError::Forbidden(_))
        ));
    }
}
