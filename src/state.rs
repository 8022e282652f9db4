//! Estado compartilhado da aplicação
//!
//! Define o estado que é passado através do router do Axum,
//! incluindo o armazenamento de sessões em memória.

use std::collections::HashMap;
use std::sync::Arc;

use rand::distributions::Alphanumeric;
use rand::Rng;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::config::EnvironmentConfig;

/// Nome do cookie de sessão
pub const SESSAO_COOKIE: &str = "SESSAO_ID";

/// Validade do cookie de sessão em segundos (7 dias)
pub const SESSAO_MAX_AGE_SEGUNDOS: i64 = 7 * 24 * 60 * 60;

/// Sessão autenticada emitida pelo servidor
#[derive(Clone, Debug)]
pub struct Sessao {
    pub documento: String,
    pub nome: String,
    pub login: String,
    pub admin: bool,
    pub expira_em: chrono::DateTime<chrono::Utc>,
}

impl Sessao {
    pub fn new(documento: String, nome: String, login: String, admin: bool, duracao_horas: i64) -> Self {
        Self {
            documento,
            nome,
            login,
            admin,
            expira_em: chrono::Utc::now() + chrono::Duration::hours(duracao_horas),
        }
    }

    pub fn expirada(&self) -> bool {
        chrono::Utc::now() > self.expira_em
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub sessoes: Arc<RwLock<HashMap<String, Sessao>>>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            sessoes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Cria uma sessão e retorna o identificador para o cookie
    pub async fn criar_sessao(&self, sessao: Sessao) -> String {
        let id = gerar_id_sessao();
        let mut sessoes = self.sessoes.write().await;
        sessoes.insert(id.clone(), sessao);
        id
    }

    /// Busca uma sessão válida; sessões expiradas são descartadas
    pub async fn obter_sessao(&self, id: &str) -> Option<Sessao> {
        {
            let sessoes = self.sessoes.read().await;
            match sessoes.get(id) {
                Some(sessao) if !sessao.expirada() => return Some(sessao.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Sessão encontrada porém expirada
        let mut sessoes = self.sessoes.write().await;
        sessoes.remove(id);
        None
    }

    /// Remove uma sessão (logout)
    pub async fn remover_sessao(&self, id: &str) {
        let mut sessoes = self.sessoes.write().await;
        sessoes.remove(id);
    }

    /// Remove todas as sessões expiradas
    pub async fn limpar_sessoes_expiradas(&self) {
        let mut sessoes = self.sessoes.write().await;
        sessoes.retain(|_, sessao| !sessao.expirada());
    }
}

fn gerar_id_sessao() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(48)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gerar_id_sessao() {
        let id = gerar_id_sessao();
        assert_eq!(id.len(), 48);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(id, gerar_id_sessao());
    }

    #[test]
    fn test_sessao_expirada() {
        let valida = Sessao::new(
            "52998224725".to_string(),
            "João".to_string(),
            "joao".to_string(),
            false,
            1,
        );
        assert!(!valida.expirada());

        let expirada = Sessao::new(
            "52998224725".to_string(),
            "João".to_string(),
            "joao".to_string(),
            false,
            -1,
        );
        assert!(expirada.expirada());
    }
}
