//! Retirada e devolução de veículos (back-office)
//!
//! A retirada converte uma reserva ATIVA em locação; a devolução
//! finaliza a locação e calcula o faturamento com eventuais
//! atrasos, multa e taxas.

use sqlx::PgPool;
use tracing::info;

use crate::dto::locacao_dto::{
    ContratoLocacaoResponse, DevolucaoRequest, FaturamentoResponse, LocacaoResponse,
    RetiradaRequest,
};
use crate::models::locacao::{
    finalizar_locacao, percentual_multa_padrao, CalculoMulta, MultaIsenta, MultaPadrao,
};
use crate::models::shared::{PeriodoLocacao, StatusLocacao, StatusReserva, StatusVeiculo};
use crate::models::veiculo as regras_veiculo;
use crate::repositories::locacao_repository::{Locacao, LocacaoRepository};
use crate::repositories::reserva_repository::ReservaRepository;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::codigo::gerar_codigo_locacao;
use crate::utils::errors::AppError;
use crate::utils::formatting::{calcular_dias, formatar_cpf, formatar_moeda};
use crate::utils::validation;

pub struct LocacaoController {
    locacoes: LocacaoRepository,
    reservas: ReservaRepository,
    veiculos: VeiculoRepository,
}

impl LocacaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            locacoes: LocacaoRepository::new(pool.clone()),
            reservas: ReservaRepository::new(pool.clone()),
            veiculos: VeiculoRepository::new(pool),
        }
    }

    pub async fn processar_retirada(
        &self,
        request: RetiradaRequest,
    ) -> Result<ContratoLocacaoResponse, AppError> {
        let reserva = self
            .reservas
            .buscar_por_codigo(&request.codigo_reserva)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada".to_string()))?;

        if !StatusReserva::parse(&reserva.status)?.ativa() {
            return Err(AppError::Conflict(
                "A reserva já foi processada".to_string(),
            ));
        }

        // CNH conferida no balcão
        if !request.documentos_validos.unwrap_or(true) {
            return Err(AppError::BadRequest(
                "CNH vencida. Renovação necessária".to_string(),
            ));
        }

        let cnh = validation::validar_cnh(&request.cnh_condutor)
            .map_err(|_| AppError::BadRequest("CNH do condutor inválida".to_string()))?;

        let placa = validation::validar_placa(&request.placa_veiculo)
            .map_err(|_| AppError::BadRequest("Placa de veículo inválida".to_string()))?;

        if placa != reserva.placa_veiculo {
            return Err(AppError::BadRequest(
                "A placa do veículo não corresponde à placa da reserva".to_string(),
            ));
        }

        validation::validar_nao_negativo(request.quilometragem_saida)
            .map_err(|_| AppError::BadRequest("A quilometragem de saída não pode ser negativa".to_string()))?;

        let nivel_tanque = request.nivel_tanque_saida.trim().to_uppercase();
        validation::validar_nao_vazio(&nivel_tanque)
            .map_err(|_| AppError::BadRequest("O nível do tanque é obrigatório".to_string()))?;

        let data_hora_retirada = validation::validar_datetime(&request.data_hora_retirada)
            .map_err(|_| AppError::BadRequest("Data e hora da retirada inválidas".to_string()))?;

        let veiculo = self
            .veiculos
            .buscar_por_placa(&placa)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        regras_veiculo::validar_locacao(StatusVeiculo::parse(&veiculo.status)?)?;

        if veiculo.categoria != reserva.categoria {
            return Err(AppError::Conflict(
                "Categoria do veículo não corresponde à reserva".to_string(),
            ));
        }

        let periodo = PeriodoLocacao::new(reserva.data_retirada, reserva.data_devolucao)?;
        let dias_previstos = i32::try_from(periodo.dias())
            .map_err(|_| AppError::Internal("Período da reserva excede o limite".to_string()))?;

        let codigo = gerar_codigo_locacao();
        let locacao = self
            .locacoes
            .criar(
                codigo,
                reserva.codigo.clone(),
                placa.clone(),
                dias_previstos,
                veiculo.diaria,
                cnh,
                data_hora_retirada,
                request.quilometragem_saida,
                nivel_tanque,
                request.observacoes.unwrap_or_default(),
            )
            .await?;

        self.veiculos
            .atualizar_status(&placa, StatusVeiculo::Locado.as_str())
            .await?;

        self.reservas
            .atualizar_status(&reserva.codigo, StatusReserva::Concluida.as_str())
            .await?;

        info!(
            "🔑 Retirada confirmada: locação {} (reserva {}, veículo {})",
            locacao.codigo, reserva.codigo, placa
        );

        Ok(ContratoLocacaoResponse {
            codigo_locacao: locacao.codigo,
            codigo_reserva: reserva.codigo,
            placa_veiculo: placa,
            status: locacao.status,
        })
    }

    pub async fn processar_devolucao(
        &self,
        codigo_locacao: &str,
        request: DevolucaoRequest,
    ) -> Result<FaturamentoResponse, AppError> {
        let locacao = self
            .locacoes
            .buscar_por_codigo(codigo_locacao)
            .await?
            .ok_or_else(|| AppError::NotFound("Locação não encontrada".to_string()))?;

        let reserva = self
            .reservas
            .buscar_por_codigo(&locacao.codigo_reserva)
            .await?
            .ok_or_else(|| AppError::Internal("Reserva da locação não encontrada".to_string()))?;

        validation::validar_nao_negativo(request.quilometragem)
            .map_err(|_| AppError::BadRequest("A quilometragem não pode ser negativa".to_string()))?;

        let combustivel = request.combustivel.trim().to_uppercase();
        validation::validar_nao_vazio(&combustivel)
            .map_err(|_| AppError::BadRequest("O nível de combustível é obrigatório".to_string()))?;

        let data_devolucao = validation::validar_datetime(&request.data_devolucao)
            .map_err(|_| AppError::BadRequest("Data de devolução inválida".to_string()))?;

        // Dias utilizados e de atraso derivados das datas reais
        let dias_utilizados = calcular_dias(locacao.data_hora_retirada, data_devolucao);
        let dias_atraso = calcular_dias(reserva.data_devolucao, data_devolucao);

        let percentual = request
            .percentual_multa_atraso
            .unwrap_or_else(percentual_multa_padrao);
        let taxa = request.taxa_combustivel.unwrap_or_default();

        let estrategia: &dyn CalculoMulta = if request.isentar_multa.unwrap_or(false) {
            &MultaIsenta
        } else {
            &MultaPadrao
        };

        let faturamento = finalizar_locacao(
            StatusLocacao::parse(&locacao.status)?,
            locacao.valor_diaria,
            locacao.dias_previstos,
            dias_utilizados as i32,
            dias_atraso as i32,
            percentual,
            taxa,
            estrategia,
        )?;

        self.locacoes
            .registrar_devolucao(
                codigo_locacao,
                request.quilometragem,
                &combustivel,
                request.possui_avarias,
                data_devolucao,
            )
            .await?;

        let novo_status = regras_veiculo::status_apos_devolucao(request.possui_avarias);
        self.veiculos
            .atualizar_status(&locacao.placa_veiculo, novo_status.as_str())
            .await?;

        info!(
            "🏁 Devolução processada: locação {} (total {}, atraso {} dias)",
            codigo_locacao,
            formatar_moeda(faturamento.total),
            dias_atraso
        );

        Ok(FaturamentoResponse {
            valor_total: faturamento.total,
            valor_diarias: faturamento.diarias,
            valor_atraso: faturamento.valor_atraso,
            valor_multa: faturamento.multa_atraso,
            valor_taxas: faturamento.taxas_adicionais,
        })
    }

    pub async fn listar(&self) -> Result<Vec<LocacaoResponse>, AppError> {
        let locacoes = self.locacoes.listar().await?;
        Ok(locacoes.into_iter().map(montar_response).collect())
    }

    pub async fn listar_por_cliente(&self, cpf: &str) -> Result<Vec<LocacaoResponse>, AppError> {
        let documento = validation::somente_digitos(cpf);
        info!("🔎 Consultando locações do cliente {}", formatar_cpf(&documento));
        let locacoes = self.locacoes.listar_por_cliente(&documento).await?;
        Ok(locacoes.into_iter().map(montar_response).collect())
    }
}

fn montar_response(locacao: Locacao) -> LocacaoResponse {
    LocacaoResponse {
        codigo: locacao.codigo,
        codigo_reserva: locacao.codigo_reserva,
        placa_veiculo: locacao.placa_veiculo,
        modelo_veiculo: locacao.modelo_veiculo,
        cliente_nome: locacao.cliente_nome,
        dias_previstos: locacao.dias_previstos,
        valor_diaria: locacao.valor_diaria,
        status: locacao.status,
        data_hora_retirada: locacao.data_hora_retirada,
    }
}
