//! Operações de reserva
//!
//! Criação com verificação de disponibilidade e precificação,
//! cancelamento com janela de 12 horas, replanejamento de período
//! e consultas.

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use crate::dto::reserva_dto::{
    AlterarPeriodoRequest, CancelarReservaResponse, CriarReservaRequest, ReservaResponse,
};
use crate::models::reserva as regras;
use crate::models::shared::{CategoriaCodigo, PeriodoLocacao, StatusReserva, StatusVeiculo};
use crate::models::veiculo as regras_veiculo;
use crate::repositories::categoria_repository::CategoriaRepository;
use crate::repositories::locacao_repository::LocacaoRepository;
use crate::repositories::reserva_repository::{Reserva, ReservaRepository};
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::codigo::gerar_codigo_reserva;
use crate::utils::errors::AppError;
use crate::utils::validation;

pub struct ReservaController {
    reservas: ReservaRepository,
    categorias: CategoriaRepository,
    veiculos: VeiculoRepository,
    locacoes: LocacaoRepository,
}

impl ReservaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reservas: ReservaRepository::new(pool.clone()),
            categorias: CategoriaRepository::new(pool.clone()),
            veiculos: VeiculoRepository::new(pool.clone()),
            locacoes: LocacaoRepository::new(pool),
        }
    }

    pub async fn criar(
        &self,
        cliente_documento: &str,
        request: CriarReservaRequest,
    ) -> Result<ReservaResponse, AppError> {
        let categoria_codigo = CategoriaCodigo::from_texto(&request.categoria_codigo)?;

        let cidade = request.cidade_retirada.trim().to_string();
        validation::validar_nao_vazio(&cidade)
            .map_err(|_| AppError::BadRequest("A cidade de retirada é obrigatória".to_string()))?;

        let placa = validation::validar_placa(&request.placa_veiculo)
            .map_err(|_| AppError::BadRequest("Placa de veículo inválida".to_string()))?;

        let periodo = parse_periodo(&request.periodo.data_retirada, &request.periodo.data_devolucao)?;

        // O veículo escolhido precisa existir, ser da categoria pedida e
        // estar disponível
        let veiculo = self
            .veiculos
            .buscar_por_placa(&placa)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Veículo não encontrado: {}", placa)))?;

        if veiculo.categoria != categoria_codigo.as_str() {
            return Err(AppError::BadRequest(
                "A categoria do veículo não corresponde à categoria solicitada".to_string(),
            ));
        }

        regras_veiculo::validar_reserva(StatusVeiculo::parse(&veiculo.status)?)?;

        // Conflito direto do veículo no período
        if self
            .reservas
            .existe_conflito_veiculo(&placa, periodo.retirada(), periodo.devolucao())
            .await?
        {
            return Err(AppError::Conflict(
                "O veículo já está reservado para outro cliente no período solicitado".to_string(),
            ));
        }

        if self
            .locacoes
            .existe_conflito_veiculo(&placa, periodo.retirada(), periodo.devolucao())
            .await?
        {
            return Err(AppError::Conflict(
                "O veículo já está locado para outro cliente no período solicitado".to_string(),
            ));
        }

        let categoria = self
            .categorias
            .buscar_por_codigo(categoria_codigo.as_str())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Categoria não encontrada: {}", categoria_codigo.as_str()))
            })?;

        // Ocupação da categoria no período: reservas ativas + locações ativas
        let ocupacao = self
            .reservas
            .contar_conflitos_categoria(
                categoria_codigo.as_str(),
                periodo.retirada(),
                periodo.devolucao(),
                None,
            )
            .await?
            + self
                .locacoes
                .contar_conflitos_categoria(
                    categoria_codigo.as_str(),
                    periodo.retirada(),
                    periodo.devolucao(),
                )
                .await?;

        let disponibilidade = i64::from(categoria.quantidade_disponivel) - ocupacao;
        let valor_estimado = regras::calcular_valor_estimado(categoria.diaria, &periodo, disponibilidade)?;

        let codigo = gerar_codigo_reserva();
        info!(
            "📝 Criando reserva {} para cliente {} ({} diárias, valor {})",
            codigo,
            cliente_documento,
            periodo.dias(),
            valor_estimado
        );

        let reserva = self
            .reservas
            .criar(
                codigo,
                categoria_codigo.as_str().to_string(),
                cidade,
                periodo.retirada(),
                periodo.devolucao(),
                valor_estimado,
                cliente_documento.to_string(),
                placa,
            )
            .await?;

        Ok(montar_response(reserva))
    }

    pub async fn cancelar(
        &self,
        cliente_documento: &str,
        codigo: &str,
    ) -> Result<CancelarReservaResponse, AppError> {
        let reserva = self
            .reservas
            .buscar_por_codigo(codigo)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada".to_string()))?;

        // Uma reserva só pode ser cancelada pelo seu dono
        if reserva.cliente_documento != cliente_documento {
            return Err(AppError::Forbidden(
                "A reserva não pertence ao cliente informado".to_string(),
            ));
        }

        let agora = Utc::now().naive_utc();
        let status = StatusReserva::parse(&reserva.status)?;
        regras::validar_cancelamento(status, reserva.data_retirada, agora)?;

        let tarifa = regras::calcular_tarifa_cancelamento(reserva.data_retirada, agora);

        self.reservas
            .atualizar_status(codigo, StatusReserva::Cancelada.as_str())
            .await?;

        info!("🚫 Reserva {} cancelada (tarifa {})", codigo, tarifa);

        Ok(CancelarReservaResponse {
            codigo_reserva: reserva.codigo,
            status: StatusReserva::Cancelada.as_str().to_string(),
            tarifa_cancelamento: tarifa,
        })
    }

    pub async fn alterar_periodo(
        &self,
        cliente_documento: &str,
        codigo: &str,
        request: AlterarPeriodoRequest,
    ) -> Result<ReservaResponse, AppError> {
        let reserva = self
            .reservas
            .buscar_por_codigo(codigo)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada".to_string()))?;

        if reserva.cliente_documento != cliente_documento {
            return Err(AppError::Forbidden(
                "A reserva não pertence ao cliente informado".to_string(),
            ));
        }

        regras::validar_replanejamento(StatusReserva::parse(&reserva.status)?)?;

        let novo_periodo = parse_periodo(&request.data_retirada, &request.data_devolucao)?;

        let categoria = self
            .categorias
            .buscar_por_codigo(&reserva.categoria)
            .await?
            .ok_or_else(|| AppError::NotFound("Categoria não encontrada".to_string()))?;

        // Ocupação no novo período, sem contar esta reserva e incluindo-a
        // de volta no total
        let ocupacao = self
            .reservas
            .contar_conflitos_categoria(
                &reserva.categoria,
                novo_periodo.retirada(),
                novo_periodo.devolucao(),
                Some(codigo),
            )
            .await?
            + self
                .locacoes
                .contar_conflitos_categoria(
                    &reserva.categoria,
                    novo_periodo.retirada(),
                    novo_periodo.devolucao(),
                )
                .await?
            + 1;

        if ocupacao > i64::from(categoria.quantidade_disponivel) {
            return Err(AppError::Conflict(
                "Período indisponível para a categoria desejada".to_string(),
            ));
        }

        // Valor recalculado sobre a diária vigente da categoria
        let novo_valor = categoria.diaria * rust_decimal::Decimal::from(novo_periodo.dias());

        self.reservas
            .atualizar_periodo(
                codigo,
                novo_periodo.retirada(),
                novo_periodo.devolucao(),
                novo_valor,
            )
            .await?;

        info!("🔁 Reserva {} replanejada ({} diárias)", codigo, novo_periodo.dias());

        let atualizada = self
            .reservas
            .buscar_por_codigo(codigo)
            .await?
            .ok_or_else(|| AppError::Internal("Reserva não encontrada após atualização".to_string()))?;

        Ok(montar_response(atualizada))
    }

    pub async fn buscar(
        &self,
        codigo: &str,
        cliente_documento: &str,
        admin: bool,
    ) -> Result<ReservaResponse, AppError> {
        let reserva = self
            .reservas
            .buscar_por_codigo(codigo)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada".to_string()))?;

        if !admin && reserva.cliente_documento != cliente_documento {
            return Err(AppError::Forbidden(
                "A reserva não pertence ao cliente informado".to_string(),
            ));
        }

        Ok(montar_response(reserva))
    }

    pub async fn listar_do_cliente(
        &self,
        cliente_documento: &str,
    ) -> Result<Vec<ReservaResponse>, AppError> {
        let reservas = self.reservas.listar_por_cliente(cliente_documento).await?;
        Ok(reservas.into_iter().map(montar_response).collect())
    }

    pub async fn listar_todas(&self) -> Result<Vec<ReservaResponse>, AppError> {
        let reservas = self.reservas.listar().await?;
        Ok(reservas.into_iter().map(montar_response).collect())
    }
}

fn parse_periodo(data_retirada: &str, data_devolucao: &str) -> Result<PeriodoLocacao, AppError> {
    let retirada = validation::validar_datetime(data_retirada)
        .map_err(|_| AppError::BadRequest("Data de retirada inválida".to_string()))?;
    let devolucao = validation::validar_datetime(data_devolucao)
        .map_err(|_| AppError::BadRequest("Data de devolução inválida".to_string()))?;

    PeriodoLocacao::new(retirada, devolucao)
}

fn montar_response(reserva: Reserva) -> ReservaResponse {
    let agora = Utc::now().naive_utc();
    let pode_cancelar = regras::pode_cancelar(&reserva.status, reserva.data_retirada, agora);

    ReservaResponse {
        codigo: reserva.codigo,
        categoria: reserva.categoria,
        cidade_retirada: reserva.cidade_retirada,
        data_retirada: reserva.data_retirada,
        data_devolucao: reserva.data_devolucao,
        valor_estimado: reserva.valor_estimado,
        status: reserva.status,
        cliente_nome: reserva.cliente_nome,
        cliente_documento: reserva.cliente_documento,
        placa_veiculo: reserva.placa_veiculo,
        pode_cancelar,
    }
}
