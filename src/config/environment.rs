//! Configuração de variáveis de ambiente

use std::env;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub sessao_duracao_horas: i64,
}

impl EnvironmentConfig {
    /// Carrega a configuração do ambiente com defaults de desenvolvimento
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            sessao_duracao_horas: env::var("SESSAO_DURACAO_HORAS")
                .unwrap_or_else(|_| "168".to_string())
                .parse()
                .expect("SESSAO_DURACAO_HORAS must be a valid number"),
        }
    }

    /// Verifica se estamos em modo de desenvolvimento
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verifica se estamos em modo de produção
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
