use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::utils::errors::AppError;

// Registro de categoria do catálogo
#[derive(Debug, sqlx::FromRow)]
pub struct Categoria {
    pub codigo: String,
    pub nome: String,
    pub descricao: String,
    pub diaria: Decimal,
    pub modelos_exemplo: Vec<String>,
    pub quantidade_disponivel: i32,
}

pub struct CategoriaRepository {
    pool: PgPool,
}

impl CategoriaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar_todas(&self) -> Result<Vec<Categoria>, AppError> {
        let categorias =
            sqlx::query_as::<_, Categoria>("SELECT * FROM categorias ORDER BY diaria ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(categorias)
    }

    pub async fn buscar_por_codigo(&self, codigo: &str) -> Result<Option<Categoria>, AppError> {
        let categoria =
            sqlx::query_as::<_, Categoria>("SELECT * FROM categorias WHERE codigo = $1")
                .bind(codigo)
                .fetch_optional(&self.pool)
                .await?;

        Ok(categoria)
    }
}
