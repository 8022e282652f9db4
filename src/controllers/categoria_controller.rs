//! Catálogo de categorias

use sqlx::PgPool;

use crate::dto::categoria_dto::CategoriaResponse;
use crate::repositories::categoria_repository::CategoriaRepository;
use crate::utils::errors::AppError;

pub struct CategoriaController {
    categorias: CategoriaRepository,
}

impl CategoriaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            categorias: CategoriaRepository::new(pool),
        }
    }

    pub async fn listar(&self) -> Result<Vec<CategoriaResponse>, AppError> {
        let categorias = self.categorias.listar_todas().await?;
        Ok(categorias
            .into_iter()
            .map(|c| CategoriaResponse {
                codigo: c.codigo,
                nome: c.nome,
                descricao: c.descricao,
                diaria: c.diaria,
                modelos_exemplo: c.modelos_exemplo,
                quantidade_disponivel: c.quantidade_disponivel,
            })
            .collect())
    }
}
