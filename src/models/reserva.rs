//! Regras de negócio de reservas
//!
//! Precificação com fator de alta demanda, janela de cancelamento
//! de 12 horas e transições de status.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use super::shared::{PeriodoLocacao, StatusReserva};
use crate::utils::errors::AppError;

/// Antecedência mínima para cancelamento, em horas
pub const LIMITE_HORAS_CANCELAMENTO: i64 = 12;

/// Multiplicador aplicado quando resta apenas um veículo livre na categoria
pub fn fator_alta_demanda() -> Decimal {
    Decimal::new(125, 2)
}

/// Calcula o valor estimado de uma reserva.
///
/// Base = diária × dias do período. Quando a disponibilidade restante
/// na categoria é exatamente 1, aplica o fator de alta demanda.
/// Disponibilidade zero ou negativa é erro.
pub fn calcular_valor_estimado(
    diaria: Decimal,
    periodo: &PeriodoLocacao,
    disponibilidade: i64,
) -> Result<Decimal, AppError> {
    if disponibilidade <= 0 {
        return Err(AppError::Conflict(
            "Não há veículos disponíveis para o período selecionado".to_string(),
        ));
    }

    let base = diaria * Decimal::from(periodo.dias());
    if disponibilidade == 1 {
        return Ok(base * fator_alta_demanda());
    }

    Ok(base)
}

/// Gate de exibição do botão de cancelamento na listagem:
/// status ativo/confirmado e pelo menos 12 horas até a retirada.
/// Limite inclusivo: exatamente 12h ainda é elegível.
pub fn pode_cancelar(status: &str, retirada: NaiveDateTime, agora: NaiveDateTime) -> bool {
    let status_elegivel = matches!(
        status.trim().to_uppercase().as_str(),
        "ATIVA" | "ACTIVE" | "CONFIRMADA" | "CONFIRMED"
    );

    status_elegivel && retirada - agora >= Duration::hours(LIMITE_HORAS_CANCELAMENTO)
}

/// Valida o cancelamento autoritativo de uma reserva.
///
/// A reserva deve estar ATIVA e a solicitação deve anteceder a
/// retirada em pelo menos 12 horas.
pub fn validar_cancelamento(
    status: StatusReserva,
    retirada: NaiveDateTime,
    solicitacao: NaiveDateTime,
) -> Result<(), AppError> {
    if !status.ativa() {
        return Err(AppError::Conflict(format!(
            "Só é possível cancelar reservas ATIVAS. Status atual: {}",
            status.as_str()
        )));
    }

    if retirada - solicitacao < Duration::hours(LIMITE_HORAS_CANCELAMENTO) {
        return Err(AppError::Conflict(
            "Cancelamento não permitido nas últimas 12 horas".to_string(),
        ));
    }

    Ok(())
}

/// Tarifa de cancelamento. A política vigente é isenção total;
/// o campo existe no contrato para permitir tarifas futuras.
pub fn calcular_tarifa_cancelamento(
    _retirada: NaiveDateTime,
    _solicitacao: NaiveDateTime,
) -> Decimal {
    Decimal::ZERO
}

/// Valida o replanejamento de período de uma reserva
pub fn validar_replanejamento(status: StatusReserva) -> Result<(), AppError> {
    if !status.ativa() {
        return Err(AppError::Conflict(format!(
            "Só é possível replanejar reservas ATIVAS. Status atual: {}",
            status.as_str()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(dia: u32, hora: u32, minuto: u32, segundo: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, dia)
            .unwrap()
            .and_hms_opt(hora, minuto, segundo)
            .unwrap()
    }

    fn periodo(dias: u32) -> PeriodoLocacao {
        PeriodoLocacao::new(dt(10, 10, 0, 0), dt(10 + dias, 10, 0, 0)).unwrap()
    }

    #[test]
    fn test_valor_estimado_sem_alta_demanda() {
        let valor = calcular_valor_estimado(Decimal::new(10000, 2), &periodo(3), 4).unwrap();
        assert_eq!(valor, Decimal::new(30000, 2));
    }

    #[test]
    fn test_valor_estimado_alta_demanda() {
        // Último veículo da categoria: 3 diárias de R$ 100,00 × 1.25
        let valor = calcular_valor_estimado(Decimal::new(10000, 2), &periodo(3), 1).unwrap();
        assert_eq!(valor, Decimal::new(37500, 2));
    }

    #[test]
    fn test_valor_estimado_sem_disponibilidade() {
        assert!(calcular_valor_estimado(Decimal::new(10000, 2), &periodo(3), 0).is_err());
    }

    #[test]
    fn test_pode_cancelar_exatamente_12h() {
        let agora = dt(1, 0, 0, 0);
        let retirada = dt(1, 12, 0, 0);
        assert!(pode_cancelar("ATIVA", retirada, agora));
    }

    #[test]
    fn test_pode_cancelar_11h59m59s() {
        let agora = dt(1, 0, 0, 1);
        let retirada = dt(1, 12, 0, 0);
        assert!(!pode_cancelar("ATIVA", retirada, agora));
    }

    #[test]
    fn test_pode_cancelar_tempo_negativo() {
        let agora = dt(2, 0, 0, 0);
        let retirada = dt(1, 12, 0, 0);
        assert!(!pode_cancelar("ATIVA", retirada, agora));
    }

    #[test]
    fn test_pode_cancelar_status() {
        let agora = dt(1, 0, 0, 0);
        let retirada = dt(3, 0, 0, 0);
        assert!(pode_cancelar("ativa", retirada, agora));
        assert!(pode_cancelar("CONFIRMADA", retirada, agora));
        assert!(pode_cancelar("confirmed", retirada, agora));
        assert!(!pode_cancelar("CANCELADA", retirada, agora));
        assert!(!pode_cancelar("CONCLUIDA", retirada, agora));
    }

    #[test]
    fn test_pode_cancelar_status_cancelada_independe_do_tempo() {
        let agora = dt(1, 0, 0, 0);
        let retirada = dt(30, 0, 0, 0);
        assert!(!pode_cancelar("CANCELADA", retirada, agora));
    }

    #[test]
    fn test_validar_cancelamento_dentro_da_janela() {
        assert!(validar_cancelamento(StatusReserva::Ativa, dt(3, 10, 0, 0), dt(1, 10, 0, 0)).is_ok());
    }

    #[test]
    fn test_validar_cancelamento_janela_estourada() {
        let erro = validar_cancelamento(StatusReserva::Ativa, dt(1, 11, 0, 0), dt(1, 0, 0, 0));
        assert!(erro.is_err());
    }

    #[test]
    fn test_validar_cancelamento_status_errado() {
        let erro = validar_cancelamento(StatusReserva::Concluida, dt(5, 10, 0, 0), dt(1, 10, 0, 0));
        assert!(erro.is_err());
    }

    #[test]
    fn test_tarifa_cancelamento_isenta() {
        assert_eq!(
            calcular_tarifa_cancelamento(dt(5, 10, 0, 0), dt(1, 10, 0, 0)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_validar_replanejamento() {
        assert!(validar_replanejamento(StatusReserva::Ativa).is_ok());
        assert!(validar_replanejamento(StatusReserva::Cancelada).is_err());
    }
}
