use chrono::Utc;
use sqlx::PgPool;

use crate::utils::errors::AppError;

// Registro de cliente
#[derive(Debug, sqlx::FromRow)]
pub struct Cliente {
    pub documento: String,
    pub nome: String,
    pub cnh: String,
    pub email: String,
    pub login: String,
    pub senha_hash: String,
    pub status: String,
    pub created_at: chrono::DateTime<Utc>,
}

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(
        &self,
        documento: String,
        nome: String,
        cnh: String,
        email: String,
        login: String,
        senha_hash: String,
    ) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (documento, nome, cnh, email, login, senha_hash, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'ATIVO', $7)
            RETURNING *
            "#,
        )
        .bind(documento)
        .bind(nome)
        .bind(cnh)
        .bind(email)
        .bind(login)
        .bind(senha_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn buscar_por_documento(&self, documento: &str) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE documento = $1")
            .bind(documento)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cliente)
    }

    pub async fn buscar_por_login(&self, login: &str) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cliente)
    }

    pub async fn documento_existe(&self, documento: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clientes WHERE documento = $1)")
                .bind(documento)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn login_existe(&self, login: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clientes WHERE login = $1)")
                .bind(login)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
