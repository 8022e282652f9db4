//! Faturamento de devolução
//!
//! Decomposição do valor final: diárias, atraso, multa e taxas.
//! A multa por atraso é calculada por estratégia para permitir
//! isenções (clientes VIP, campanhas).

use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::errors::AppError;

use super::shared::StatusLocacao;

/// Percentual padrão de multa sobre o valor do atraso (10%)
pub fn percentual_multa_padrao() -> Decimal {
    Decimal::new(10, 2)
}

/// Decomposição do valor total de uma locação finalizada
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faturamento {
    pub total: Decimal,
    pub diarias: Decimal,
    pub valor_atraso: Decimal,
    pub multa_atraso: Decimal,
    pub taxas_adicionais: Decimal,
}

/// Estratégia de cálculo de multa por atraso
pub trait CalculoMulta {
    fn calcular(&self, valor_atraso: Decimal, percentual: Decimal) -> Decimal;
}

/// Multa padrão: percentual sobre o valor do atraso
pub struct MultaPadrao;

impl CalculoMulta for MultaPadrao {
    fn calcular(&self, valor_atraso: Decimal, percentual: Decimal) -> Decimal {
        if valor_atraso <= Decimal::ZERO || percentual <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        valor_atraso * percentual
    }
}

/// Isenção de multa
pub struct MultaIsenta;

impl CalculoMulta for MultaIsenta {
    fn calcular(&self, _valor_atraso: Decimal, _percentual: Decimal) -> Decimal {
        Decimal::ZERO
    }
}

/// Finaliza uma locação calculando o faturamento.
///
/// Diárias cobram ao menos os dias previstos no contrato; dias de
/// atraso entram a valor de diária cheia e recebem multa pela
/// estratégia informada. Locação já finalizada é erro.
#[allow(clippy::too_many_arguments)]
pub fn finalizar_locacao(
    status: StatusLocacao,
    valor_diaria: Decimal,
    dias_previstos: i32,
    dias_utilizados: i32,
    dias_atraso: i32,
    percentual_multa: Decimal,
    taxa_combustivel: Decimal,
    estrategia_multa: &dyn CalculoMulta,
) -> Result<Faturamento, AppError> {
    if !status.ativa() {
        return Err(AppError::Conflict(
            "A locação já foi finalizada".to_string(),
        ));
    }

    let dias_considerados = dias_utilizados.max(dias_previstos);
    let diarias = valor_diaria * Decimal::from(dias_considerados);

    let valor_atraso = if dias_atraso > 0 {
        valor_diaria * Decimal::from(dias_atraso)
    } else {
        Decimal::ZERO
    };

    let multa_atraso = estrategia_multa.calcular(valor_atraso, percentual_multa);
    let total = diarias + valor_atraso + multa_atraso + taxa_combustivel;

    Ok(Faturamento {
        total,
        diarias,
        valor_atraso,
        multa_atraso,
        taxas_adicionais: taxa_combustivel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(centavos: i64) -> Decimal {
        Decimal::new(centavos, 2)
    }

    #[test]
    fn test_finalizar_sem_atraso() {
        let faturamento = finalizar_locacao(
            StatusLocacao::Ativa,
            dec(10000),
            3,
            3,
            0,
            percentual_multa_padrao(),
            Decimal::ZERO,
            &MultaPadrao,
        )
        .unwrap();

        assert_eq!(faturamento.diarias, dec(30000));
        assert_eq!(faturamento.valor_atraso, Decimal::ZERO);
        assert_eq!(faturamento.multa_atraso, Decimal::ZERO);
        assert_eq!(faturamento.total, dec(30000));
    }

    #[test]
    fn test_finalizar_com_atraso_e_multa() {
        // 3 previstos + 2 de atraso a R$ 100,00, multa de 10%
        let faturamento = finalizar_locacao(
            StatusLocacao::Ativa,
            dec(10000),
            3,
            5,
            2,
            percentual_multa_padrao(),
            Decimal::ZERO,
            &MultaPadrao,
        )
        .unwrap();

        assert_eq!(faturamento.diarias, dec(50000));
        assert_eq!(faturamento.valor_atraso, dec(20000));
        assert_eq!(faturamento.multa_atraso, dec(2000));
        assert_eq!(faturamento.total, dec(72000));
    }

    #[test]
    fn test_finalizar_devolucao_antecipada_cobra_dias_previstos() {
        let faturamento = finalizar_locacao(
            StatusLocacao::Ativa,
            dec(10000),
            5,
            2,
            0,
            percentual_multa_padrao(),
            Decimal::ZERO,
            &MultaPadrao,
        )
        .unwrap();

        assert_eq!(faturamento.diarias, dec(50000));
        assert_eq!(faturamento.total, dec(50000));
    }

    #[test]
    fn test_finalizar_com_taxa_combustivel() {
        let faturamento = finalizar_locacao(
            StatusLocacao::Ativa,
            dec(10000),
            1,
            1,
            0,
            percentual_multa_padrao(),
            dec(8000),
            &MultaPadrao,
        )
        .unwrap();

        assert_eq!(faturamento.taxas_adicionais, dec(8000));
        assert_eq!(faturamento.total, dec(18000));
    }

    #[test]
    fn test_multa_isenta() {
        let faturamento = finalizar_locacao(
            StatusLocacao::Ativa,
            dec(10000),
            3,
            5,
            2,
            percentual_multa_padrao(),
            Decimal::ZERO,
            &MultaIsenta,
        )
        .unwrap();

        assert_eq!(faturamento.multa_atraso, Decimal::ZERO);
        assert_eq!(faturamento.total, dec(70000));
    }

    #[test]
    fn test_decomposicao_soma_no_total() {
        let f = finalizar_locacao(
            StatusLocacao::Ativa,
            dec(15050),
            4,
            6,
            2,
            percentual_multa_padrao(),
            dec(4500),
            &MultaPadrao,
        )
        .unwrap();

        assert_eq!(
            f.total,
            f.diarias + f.valor_atraso + f.multa_atraso + f.taxas_adicionais
        );
    }

    #[test]
    fn test_finalizar_duas_vezes_falha() {
        let erro = finalizar_locacao(
            StatusLocacao::Finalizada,
            dec(10000),
            3,
            3,
            0,
            percentual_multa_padrao(),
            Decimal::ZERO,
            &MultaPadrao,
        );
        assert!(erro.is_err());
    }

    #[test]
    fn test_multa_padrao_sem_atraso() {
        assert_eq!(
            MultaPadrao.calcular(Decimal::ZERO, percentual_multa_padrao()),
            Decimal::ZERO
        );
        assert_eq!(MultaPadrao.calcular(dec(10000), Decimal::ZERO), Decimal::ZERO);
    }
}
