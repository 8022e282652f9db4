//! Agendamento de manutenção de veículos (back-office)

use sqlx::PgPool;
use tracing::info;

use crate::dto::manutencao_dto::AgendarManutencaoRequest;
use crate::dto::veiculo_dto::VeiculoResponse;
use crate::models::shared::StatusVeiculo;
use crate::models::veiculo as regras_veiculo;
use crate::repositories::veiculo_repository::{Veiculo, VeiculoRepository};
use crate::utils::errors::AppError;
use crate::utils::formatting::formatar_data_hora;
use crate::utils::validation;

pub struct ManutencaoController {
    veiculos: VeiculoRepository,
}

impl ManutencaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            veiculos: VeiculoRepository::new(pool),
        }
    }

    pub async fn agendar(
        &self,
        request: AgendarManutencaoRequest,
    ) -> Result<VeiculoResponse, AppError> {
        let placa = validation::validar_placa(&request.placa)
            .map_err(|_| AppError::BadRequest("Placa de veículo inválida".to_string()))?;

        validation::validar_nao_vazio(&request.motivo)
            .map_err(|_| AppError::BadRequest("O motivo da manutenção é obrigatório".to_string()))?;

        let previsao = validation::validar_datetime(&request.previsao)
            .map_err(|_| AppError::BadRequest("Previsão de manutenção inválida".to_string()))?;

        let veiculo = self
            .veiculos
            .buscar_por_placa(&placa)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        regras_veiculo::validar_agendamento_manutencao(StatusVeiculo::parse(&veiculo.status)?)?;

        let atualizado = self
            .veiculos
            .agendar_manutencao(&placa, previsao, request.motivo.trim())
            .await?;

        info!(
            "🔧 Manutenção agendada: veículo {} para {}",
            placa,
            formatar_data_hora(previsao)
        );

        Ok(montar_response(atualizado))
    }

    pub async fn listar(&self) -> Result<Vec<VeiculoResponse>, AppError> {
        let veiculos = self.veiculos.listar_em_manutencao().await?;
        Ok(veiculos.into_iter().map(montar_response).collect())
    }
}

fn montar_response(veiculo: Veiculo) -> VeiculoResponse {
    VeiculoResponse {
        placa: veiculo.placa,
        modelo: veiculo.modelo,
        categoria: veiculo.categoria,
        cidade: veiculo.cidade,
        diaria: veiculo.diaria,
        status: veiculo.status,
        manutencao_prevista: veiculo.manutencao_prevista,
        manutencao_nota: veiculo.manutencao_nota,
    }
}
