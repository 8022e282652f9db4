//! Rotas de autenticação
//!
//! Registro e login de clientes, login de administradores e logout.
//! O login emite um cookie de sessão HttpOnly; privilégios nunca são
//! derivados de estado enviado pelo cliente.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    routing::post,
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    AdminAutenticacaoResponse, AutenticacaoResponse, LoginRequest, RegistroRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::sessao::extrair_cookie_sessao;
use crate::state::{AppState, Sessao, SESSAO_COOKIE, SESSAO_MAX_AGE_SEGUNDOS};
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/registro", post(registrar))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

pub fn create_admin_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login_admin))
}

fn cookie_sessao(id: &str) -> Result<HeaderValue, AppError> {
    let valor = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        SESSAO_COOKIE, id, SESSAO_MAX_AGE_SEGUNDOS
    );
    HeaderValue::from_str(&valor)
        .map_err(|_| AppError::Internal("Falha ao montar cookie de sessão".to_string()))
}

fn cookie_expirado() -> HeaderValue {
    HeaderValue::from_static("SESSAO_ID=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

async fn registrar(
    State(state): State<AppState>,
    Json(request): Json<RegistroRequest>,
) -> Result<Json<ApiResponse<AutenticacaoResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let cliente = controller.registrar(request).await?;

    let response = AutenticacaoResponse {
        documento: cliente.documento,
        nome: cliente.nome,
        email: cliente.email,
        login: cliente.login,
        status: cliente.status,
        mensagem: "Cadastro realizado com sucesso".to_string(),
    };

    Ok(Json(ApiResponse::success_with_message(
        response,
        "Cliente registrado".to_string(),
    )))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<ApiResponse<AutenticacaoResponse>>), AppError> {
    let controller = AuthController::new(state.pool.clone());
    let cliente = controller
        .autenticar_cliente(&request.login, &request.senha)
        .await?;

    let sessao = Sessao::new(
        cliente.documento.clone(),
        cliente.nome.clone(),
        cliente.login.clone(),
        false,
        state.config.sessao_duracao_horas,
    );
    let id = state.criar_sessao(sessao).await;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie_sessao(&id)?);

    let response = AutenticacaoResponse {
        documento: cliente.documento,
        nome: cliente.nome,
        email: cliente.email,
        login: cliente.login,
        status: cliente.status,
        mensagem: "Login realizado com sucesso".to_string(),
    };

    Ok((headers, Json(ApiResponse::success(response))))
}

async fn login_admin(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<ApiResponse<AdminAutenticacaoResponse>>), AppError> {
    let controller = AuthController::new(state.pool.clone());
    let admin = controller
        .autenticar_admin(&request.login, &request.senha)
        .await?;

    let sessao = Sessao::new(
        String::new(),
        admin.nome.clone(),
        admin.login.clone(),
        true,
        state.config.sessao_duracao_horas,
    );
    let id = state.criar_sessao(sessao).await;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie_sessao(&id)?);

    let response = AdminAutenticacaoResponse {
        login: admin.login,
        nome: admin.nome,
        mensagem: "Login realizado com sucesso".to_string(),
    };

    Ok((headers, Json(ApiResponse::success(response))))
}

async fn logout(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> Result<(HeaderMap, Json<ApiResponse<()>>), AppError> {
    if let Some(id) = request_headers
        .get(axum::http::header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(extrair_cookie_sessao)
    {
        state.remover_sessao(id).await;
    }

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie_expirado());

    Ok((
        headers,
        Json(ApiResponse::success_with_message(
            (),
            "Sessão encerrada".to_string(),
        )),
    ))
}
