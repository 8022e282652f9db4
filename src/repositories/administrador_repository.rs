use chrono::Utc;
use sqlx::PgPool;

use crate::utils::errors::AppError;

// Registro de administrador do back-office
#[derive(Debug, sqlx::FromRow)]
pub struct Administrador {
    pub login: String,
    pub nome: String,
    pub senha_hash: String,
    pub created_at: chrono::DateTime<Utc>,
}

pub struct AdministradorRepository {
    pool: PgPool,
}

impl AdministradorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn buscar_por_login(&self, login: &str) -> Result<Option<Administrador>, AppError> {
        let admin =
            sqlx::query_as::<_, Administrador>("SELECT * FROM administradores WHERE login = $1")
                .bind(login)
                .fetch_optional(&self.pool)
                .await?;

        Ok(admin)
    }
}
