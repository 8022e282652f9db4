mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::EnvironmentConfig;
use database::create_pool;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use middleware::sessao::{exigir_admin, exigir_sessao};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 AlugaCar - API de Locação de Veículos");
    info!("========================================");

    let config = EnvironmentConfig::from_env();

    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app_state = AppState::new(pool, config);

    // Limpeza periódica de sessões expiradas
    let limpeza_state = app_state.clone();
    tokio::spawn(async move {
        let mut intervalo = tokio::time::interval(std::time::Duration::from_secs(3600));
        loop {
            intervalo.tick().await;
            limpeza_state.limpar_sessoes_expiradas().await;
        }
    });

    // Rotas de reserva: cliente autenticado + listagem administrativa
    let reservas = routes::reserva_routes::create_reserva_router()
        .layer(from_fn_with_state(app_state.clone(), exigir_sessao))
        .merge(
            routes::reserva_routes::create_reserva_admin_router()
                .layer(from_fn_with_state(app_state.clone(), exigir_admin)),
        );

    let locacoes = routes::locacao_routes::create_locacao_router()
        .layer(from_fn_with_state(app_state.clone(), exigir_admin));

    let manutencoes = routes::manutencao_routes::create_manutencao_router()
        .layer(from_fn_with_state(app_state.clone(), exigir_admin));

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/v1/auth", routes::auth_routes::create_auth_router())
        .nest(
            "/api/v1/admin/auth",
            routes::auth_routes::create_admin_auth_router(),
        )
        .nest(
            "/api/v1/categorias",
            routes::categoria_routes::create_categoria_router(),
        )
        .nest(
            "/api/v1/veiculos",
            routes::veiculo_routes::create_veiculo_router(),
        )
        .nest("/api/v1/reservas", reservas)
        .nest("/api/v1/locacoes", locacoes)
        .nest("/api/v1/manutencoes", manutencoes)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Health check");
    info!("🔐 Autenticação:");
    info!("   POST /api/v1/auth/registro - Cadastro de cliente");
    info!("   POST /api/v1/auth/login - Login de cliente");
    info!("   POST /api/v1/auth/logout - Logout");
    info!("   POST /api/v1/admin/auth/login - Login de administrador");
    info!("📋 Catálogo:");
    info!("   GET  /api/v1/categorias - Categorias disponíveis");
    info!("   GET  /api/v1/veiculos/disponiveis - Veículos disponíveis");
    info!("📅 Reservas:");
    info!("   POST /api/v1/reservas - Criar reserva");
    info!("   GET  /api/v1/reservas - Listar todas (admin)");
    info!("   GET  /api/v1/reservas/minhas - Reservas do cliente");
    info!("   GET  /api/v1/reservas/:codigo - Consultar reserva");
    info!("   POST /api/v1/reservas/:codigo/cancelar - Cancelar reserva");
    info!("   PUT  /api/v1/reservas/:codigo/periodo - Replanejar período");
    info!("🔑 Locações (admin):");
    info!("   POST /api/v1/locacoes/retirada - Confirmar retirada");
    info!("   POST /api/v1/locacoes/:codigo/devolucao - Processar devolução");
    info!("   GET  /api/v1/locacoes - Listar locações");
    info!("   GET  /api/v1/locacoes/cliente/:cpf - Locações por cliente");
    info!("🔧 Manutenções (admin):");
    info!("   POST /api/v1/manutencoes - Agendar manutenção");
    info!("   GET  /api/v1/manutencoes - Listar manutenções");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Erro do servidor: {}", e);
            e
        })?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "alugacar-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 SIGTERM recebido, encerrando servidor...");
        },
    }
}
