//! Consulta de frota disponível

use sqlx::PgPool;

use crate::dto::veiculo_dto::{DisponibilidadeQuery, VeiculoResponse};
use crate::models::shared::CategoriaCodigo;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::errors::AppError;
use crate::utils::validation;

pub struct VeiculoController {
    veiculos: VeiculoRepository,
}

impl VeiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            veiculos: VeiculoRepository::new(pool),
        }
    }

    /// Lista veículos disponíveis, com filtros opcionais de cidade,
    /// categoria e período pretendido.
    pub async fn disponiveis(
        &self,
        query: DisponibilidadeQuery,
    ) -> Result<Vec<VeiculoResponse>, AppError> {
        let categoria = match &query.categoria {
            Some(texto) => Some(CategoriaCodigo::from_texto(texto)?),
            None => None,
        };

        let inicio = match &query.data_retirada {
            Some(texto) => Some(validation::validar_datetime(texto).map_err(|_| {
                AppError::BadRequest("Data de retirada inválida".to_string())
            })?),
            None => None,
        };

        let fim = match &query.data_devolucao {
            Some(texto) => Some(validation::validar_datetime(texto).map_err(|_| {
                AppError::BadRequest("Data de devolução inválida".to_string())
            })?),
            None => None,
        };

        if inicio.is_some() != fim.is_some() {
            return Err(AppError::BadRequest(
                "Informe as datas de retirada e devolução juntas".to_string(),
            ));
        }

        if let (Some(inicio), Some(fim)) = (inicio, fim) {
            if fim < inicio {
                return Err(AppError::BadRequest(
                    "A devolução não pode ocorrer antes da retirada".to_string(),
                ));
            }
        }

        let cidade = query.cidade.as_ref().map(|c| c.trim().to_string());

        let veiculos = self
            .veiculos
            .buscar_disponiveis(
                cidade.as_deref(),
                categoria.map(|c| c.as_str()),
                inicio,
                fim,
            )
            .await?;

        Ok(veiculos
            .into_iter()
            .map(|v| VeiculoResponse {
                placa: v.placa,
                modelo: v.modelo,
                categoria: v.categoria,
                cidade: v.cidade,
                diaria: v.diaria,
                status: v.status,
                manutencao_prevista: v.manutencao_prevista,
                manutencao_nota: v.manutencao_nota,
            })
            .collect())
    }
}
