//! Tipos compartilhados do domínio de locação
//!
//! Status, códigos de categoria e o período de locação com suas
//! regras de contagem de dias e sobreposição.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

/// Status de uma reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusReserva {
    Ativa,
    Cancelada,
    Concluida,
    Expirada,
    EmAndamento,
}

impl StatusReserva {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusReserva::Ativa => "ATIVA",
            StatusReserva::Cancelada => "CANCELADA",
            StatusReserva::Concluida => "CONCLUIDA",
            StatusReserva::Expirada => "EXPIRADA",
            StatusReserva::EmAndamento => "EM_ANDAMENTO",
        }
    }

    pub fn parse(valor: &str) -> Result<Self, AppError> {
        match valor.trim().to_uppercase().as_str() {
            "ATIVA" => Ok(StatusReserva::Ativa),
            "CANCELADA" => Ok(StatusReserva::Cancelada),
            "CONCLUIDA" => Ok(StatusReserva::Concluida),
            "EXPIRADA" => Ok(StatusReserva::Expirada),
            "EM_ANDAMENTO" => Ok(StatusReserva::EmAndamento),
            outro => Err(AppError::Internal(format!(
                "Status de reserva desconhecido: {}",
                outro
            ))),
        }
    }

    pub fn ativa(&self) -> bool {
        *self == StatusReserva::Ativa
    }
}

/// Status de um veículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusVeiculo {
    Disponivel,
    Reservado,
    Locado,
    EmManutencao,
    Vendido,
}

impl StatusVeiculo {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusVeiculo::Disponivel => "DISPONIVEL",
            StatusVeiculo::Reservado => "RESERVADO",
            StatusVeiculo::Locado => "LOCADO",
            StatusVeiculo::EmManutencao => "EM_MANUTENCAO",
            StatusVeiculo::Vendido => "VENDIDO",
        }
    }

    pub fn parse(valor: &str) -> Result<Self, AppError> {
        match valor.trim().to_uppercase().as_str() {
            "DISPONIVEL" => Ok(StatusVeiculo::Disponivel),
            "RESERVADO" => Ok(StatusVeiculo::Reservado),
            "LOCADO" => Ok(StatusVeiculo::Locado),
            "EM_MANUTENCAO" => Ok(StatusVeiculo::EmManutencao),
            "VENDIDO" => Ok(StatusVeiculo::Vendido),
            outro => Err(AppError::Internal(format!(
                "Status de veículo desconhecido: {}",
                outro
            ))),
        }
    }

    pub fn disponivel(&self) -> bool {
        *self == StatusVeiculo::Disponivel
    }
}

/// Status de uma locação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLocacao {
    Ativa,
    EmAndamento,
    Finalizada,
}

impl StatusLocacao {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLocacao::Ativa => "ATIVA",
            StatusLocacao::EmAndamento => "EM_ANDAMENTO",
            StatusLocacao::Finalizada => "FINALIZADA",
        }
    }

    pub fn parse(valor: &str) -> Result<Self, AppError> {
        match valor.trim().to_uppercase().as_str() {
            "ATIVA" => Ok(StatusLocacao::Ativa),
            "EM_ANDAMENTO" => Ok(StatusLocacao::EmAndamento),
            "FINALIZADA" => Ok(StatusLocacao::Finalizada),
            outro => Err(AppError::Internal(format!(
                "Status de locação desconhecido: {}",
                outro
            ))),
        }
    }

    pub fn ativa(&self) -> bool {
        *self == StatusLocacao::Ativa
    }
}

/// Status de um cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCliente {
    Ativo,
    Bloqueado,
    Inativo,
}

impl StatusCliente {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCliente::Ativo => "ATIVO",
            StatusCliente::Bloqueado => "BLOQUEADO",
            StatusCliente::Inativo => "INATIVO",
        }
    }

    pub fn parse(valor: &str) -> Result<Self, AppError> {
        match valor.trim().to_uppercase().as_str() {
            "ATIVO" => Ok(StatusCliente::Ativo),
            "BLOQUEADO" => Ok(StatusCliente::Bloqueado),
            "INATIVO" => Ok(StatusCliente::Inativo),
            outro => Err(AppError::Internal(format!(
                "Status de cliente desconhecido: {}",
                outro
            ))),
        }
    }
}

/// Código de categoria de veículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoriaCodigo {
    Economico,
    Intermediario,
    Executivo,
    Premium,
    Suv,
}

impl CategoriaCodigo {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoriaCodigo::Economico => "ECONOMICO",
            CategoriaCodigo::Intermediario => "INTERMEDIARIO",
            CategoriaCodigo::Executivo => "EXECUTIVO",
            CategoriaCodigo::Premium => "PREMIUM",
            CategoriaCodigo::Suv => "SUV",
        }
    }

    /// Converte texto em código de categoria (case-insensitive)
    pub fn from_texto(valor: &str) -> Result<Self, AppError> {
        match valor.trim().to_uppercase().as_str() {
            "ECONOMICO" => Ok(CategoriaCodigo::Economico),
            "INTERMEDIARIO" => Ok(CategoriaCodigo::Intermediario),
            "EXECUTIVO" => Ok(CategoriaCodigo::Executivo),
            "PREMIUM" => Ok(CategoriaCodigo::Premium),
            "SUV" => Ok(CategoriaCodigo::Suv),
            outro => Err(AppError::BadRequest(format!(
                "Categoria inválida: {}",
                outro
            ))),
        }
    }
}

/// Período de uma locação ou reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodoLocacao {
    retirada: NaiveDateTime,
    devolucao: NaiveDateTime,
}

impl PeriodoLocacao {
    pub fn new(retirada: NaiveDateTime, devolucao: NaiveDateTime) -> Result<Self, AppError> {
        if devolucao < retirada {
            return Err(AppError::BadRequest(
                "A devolução não pode ocorrer antes da retirada".to_string(),
            ));
        }
        Ok(Self { retirada, devolucao })
    }

    pub fn retirada(&self) -> NaiveDateTime {
        self.retirada
    }

    pub fn devolucao(&self) -> NaiveDateTime {
        self.devolucao
    }

    /// Número de diárias do período: horas arredondadas para cima
    /// em dias, no mínimo 1.
    pub fn dias(&self) -> i64 {
        let horas = (self.devolucao - self.retirada).num_hours();
        let mut dias = horas / 24;
        if horas % 24 != 0 {
            dias += 1;
        }
        dias.max(1)
    }

    /// Sobreposição inclusiva entre dois períodos
    pub fn conflita_com(&self, outro: &PeriodoLocacao) -> bool {
        self.retirada <= outro.devolucao && self.devolucao >= outro.retirada
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(dia: u32, hora: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, dia)
            .unwrap()
            .and_hms_opt(hora, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_periodo_invalido() {
        assert!(PeriodoLocacao::new(dt(10, 10), dt(9, 10)).is_err());
    }

    #[test]
    fn test_dias_exatos() {
        let periodo = PeriodoLocacao::new(dt(1, 10), dt(4, 10)).unwrap();
        assert_eq!(periodo.dias(), 3);
    }

    #[test]
    fn test_dias_fracao_arredonda_para_cima() {
        let periodo = PeriodoLocacao::new(dt(1, 10), dt(4, 12)).unwrap();
        assert_eq!(periodo.dias(), 4);
    }

    #[test]
    fn test_dias_minimo_um() {
        let periodo = PeriodoLocacao::new(dt(1, 10), dt(1, 10)).unwrap();
        assert_eq!(periodo.dias(), 1);
    }

    #[test]
    fn test_conflito_sobreposicao() {
        let a = PeriodoLocacao::new(dt(1, 10), dt(5, 10)).unwrap();
        let b = PeriodoLocacao::new(dt(4, 10), dt(8, 10)).unwrap();
        let c = PeriodoLocacao::new(dt(6, 10), dt(8, 10)).unwrap();
        assert!(a.conflita_com(&b));
        assert!(b.conflita_com(&a));
        assert!(!a.conflita_com(&c));
    }

    #[test]
    fn test_conflito_limite_inclusivo() {
        let a = PeriodoLocacao::new(dt(1, 10), dt(5, 10)).unwrap();
        let b = PeriodoLocacao::new(dt(5, 10), dt(8, 10)).unwrap();
        assert!(a.conflita_com(&b));
    }

    #[test]
    fn test_status_reserva_parse() {
        assert_eq!(StatusReserva::parse("ativa").unwrap(), StatusReserva::Ativa);
        assert_eq!(
            StatusReserva::parse("EM_ANDAMENTO").unwrap(),
            StatusReserva::EmAndamento
        );
        assert!(StatusReserva::parse("QUALQUER").is_err());
    }

    #[test]
    fn test_categoria_from_texto() {
        assert_eq!(
            CategoriaCodigo::from_texto("suv").unwrap(),
            CategoriaCodigo::Suv
        );
        assert!(CategoriaCodigo::from_texto("LUXO").is_err());
    }
}
