//! Transições de status de veículo

use super::shared::StatusVeiculo;
use crate::utils::errors::AppError;

/// Valida a retirada de um veículo para locação
pub fn validar_locacao(status: StatusVeiculo) -> Result<(), AppError> {
    match status {
        StatusVeiculo::Vendido => Err(AppError::Conflict(
            "Veículo vendido não pode ser locado".to_string(),
        )),
        StatusVeiculo::EmManutencao => Err(AppError::Conflict(
            "Veículo selecionado precisa passar por manutenção".to_string(),
        )),
        StatusVeiculo::Locado => Err(AppError::Conflict(
            "O veículo já está locado".to_string(),
        )),
        StatusVeiculo::Disponivel | StatusVeiculo::Reservado => Ok(()),
    }
}

/// Valida a reserva de um veículo
pub fn validar_reserva(status: StatusVeiculo) -> Result<(), AppError> {
    if !status.disponivel() {
        return Err(AppError::Conflict(
            "O veículo não está disponível para reserva".to_string(),
        ));
    }
    Ok(())
}

/// Valida o agendamento de manutenção
pub fn validar_agendamento_manutencao(status: StatusVeiculo) -> Result<(), AppError> {
    match status {
        StatusVeiculo::Locado => Err(AppError::Conflict(
            "Veículo não pode entrar em manutenção enquanto locado".to_string(),
        )),
        StatusVeiculo::Vendido => Err(AppError::Conflict(
            "Veículo vendido não pode entrar em manutenção".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Status resultante da devolução: avarias mandam o veículo para
/// manutenção, caso contrário volta a ficar disponível.
pub fn status_apos_devolucao(possui_avarias: bool) -> StatusVeiculo {
    if possui_avarias {
        StatusVeiculo::EmManutencao
    } else {
        StatusVeiculo::Disponivel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validar_locacao() {
        assert!(validar_locacao(StatusVeiculo::Disponivel).is_ok());
        assert!(validar_locacao(StatusVeiculo::Reservado).is_ok());
        assert!(validar_locacao(StatusVeiculo::Locado).is_err());
        assert!(validar_locacao(StatusVeiculo::Vendido).is_err());
        assert!(validar_locacao(StatusVeiculo::EmManutencao).is_err());
    }

    #[test]
    fn test_validar_reserva() {
        assert!(validar_reserva(StatusVeiculo::Disponivel).is_ok());
        assert!(validar_reserva(StatusVeiculo::Reservado).is_err());
        assert!(validar_reserva(StatusVeiculo::Vendido).is_err());
    }

    #[test]
    fn test_validar_agendamento_manutencao() {
        assert!(validar_agendamento_manutencao(StatusVeiculo::Disponivel).is_ok());
        assert!(validar_agendamento_manutencao(StatusVeiculo::Reservado).is_ok());
        assert!(validar_agendamento_manutencao(StatusVeiculo::EmManutencao).is_ok());
        assert!(validar_agendamento_manutencao(StatusVeiculo::Locado).is_err());
        assert!(validar_agendamento_manutencao(StatusVeiculo::Vendido).is_err());
    }

    #[test]
    fn test_status_apos_devolucao() {
        assert_eq!(status_apos_devolucao(true), StatusVeiculo::EmManutencao);
        assert_eq!(status_apos_devolucao(false), StatusVeiculo::Disponivel);
    }
}
