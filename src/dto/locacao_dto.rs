//! DTOs de locação: retirada, devolução e faturamento

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Request de confirmação de retirada
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetiradaRequest {
    pub codigo_reserva: String,
    pub placa_veiculo: String,
    pub cnh_condutor: String,
    pub data_hora_retirada: String,
    pub quilometragem_saida: i32,
    pub nivel_tanque_saida: String,
    pub observacoes: Option<String>,
    // CNH conferida no balcão; ausente assume válida
    pub documentos_validos: Option<bool>,
}

// Contrato de locação emitido na retirada
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContratoLocacaoResponse {
    pub codigo_locacao: String,
    pub codigo_reserva: String,
    pub placa_veiculo: String,
    pub status: String,
}

// Request de processamento de devolução
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevolucaoRequest {
    pub quilometragem: i32,
    pub combustivel: String,
    pub possui_avarias: bool,
    pub data_devolucao: String,
    pub taxa_combustivel: Option<Decimal>,
    pub percentual_multa_atraso: Option<Decimal>,
    pub isentar_multa: Option<bool>,
}

// Decomposição do faturamento da devolução
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaturamentoResponse {
    pub valor_total: Decimal,
    pub valor_diarias: Decimal,
    pub valor_atraso: Decimal,
    pub valor_multa: Decimal,
    pub valor_taxas: Decimal,
}

// Response de locação para listagens administrativas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocacaoResponse {
    pub codigo: String,
    pub codigo_reserva: String,
    pub placa_veiculo: String,
    pub modelo_veiculo: String,
    pub cliente_nome: String,
    pub dias_previstos: i32,
    pub valor_diaria: Decimal,
    pub status: String,
    pub data_hora_retirada: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_retirada_request_contrato() {
        let body = json!({
            "codigoReserva": "RES-2026-000001",
            "placaVeiculo": "ABC1D23",
            "cnhCondutor": "12345678901",
            "dataHoraRetirada": "2026-06-01T10:00:00",
            "quilometragemSaida": 45210,
            "nivelTanqueSaida": "CHEIO",
            "observacoes": "Risco no para-choque dianteiro"
        });

        let request: RetiradaRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.quilometragem_saida, 45210);
        assert_eq!(request.documentos_validos, None);
    }

    #[test]
    fn test_faturamento_response_contrato() {
        let response = FaturamentoResponse {
            valor_total: Decimal::new(72000, 2),
            valor_diarias: Decimal::new(50000, 2),
            valor_atraso: Decimal::new(20000, 2),
            valor_multa: Decimal::new(2000, 2),
            valor_taxas: Decimal::ZERO,
        };

        let valor = serde_json::to_value(&response).unwrap();
        assert!(valor.get("valorTotal").is_some());
        assert!(valor.get("valorDiarias").is_some());
        assert!(valor.get("valorAtraso").is_some());
        assert!(valor.get("valorMulta").is_some());
        assert!(valor.get("valorTaxas").is_some());
    }

    #[test]
    fn test_devolucao_request_campos_opcionais() {
        let body = json!({
            "quilometragem": 46000,
            "combustivel": "MEIO",
            "possuiAvarias": false,
            "dataDevolucao": "2026-06-04T10:00:00"
        });

        let request: DevolucaoRequest = serde_json::from_value(body).unwrap();
        assert!(request.taxa_combustivel.is_none());
        assert!(request.percentual_multa_atraso.is_none());
    }
}
