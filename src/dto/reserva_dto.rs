//! DTOs de reserva
//!
//! Os nomes de campo seguem o contrato JSON do frontend
//! (camelCase em português).

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Período no formato do contrato: datas como string ISO 8601,
// validadas na entrada
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodoRequest {
    pub data_retirada: String,
    pub data_devolucao: String,
}

// Request para criar reserva
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriarReservaRequest {
    pub categoria_codigo: String,
    pub cidade_retirada: String,
    pub periodo: PeriodoRequest,
    pub placa_veiculo: String,
}

// Request para alterar o período de uma reserva
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlterarPeriodoRequest {
    pub data_retirada: String,
    pub data_devolucao: String,
}

// Response de reserva
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservaResponse {
    pub codigo: String,
    pub categoria: String,
    pub cidade_retirada: String,
    pub data_retirada: NaiveDateTime,
    pub data_devolucao: NaiveDateTime,
    pub valor_estimado: Decimal,
    pub status: String,
    pub cliente_nome: String,
    pub cliente_documento: String,
    pub placa_veiculo: String,
    // Gate de exibição do cancelamento; o backend continua sendo a
    // autoridade no endpoint de cancelar
    pub pode_cancelar: bool,
}

// Response de cancelamento
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelarReservaResponse {
    pub codigo_reserva: String,
    pub status: String,
    pub tarifa_cancelamento: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_criar_reserva_request_contrato() {
        let body = json!({
            "categoriaCodigo": "SUV",
            "cidadeRetirada": "São Paulo",
            "periodo": {
                "dataRetirada": "2026-06-01T10:00:00",
                "dataDevolucao": "2026-06-04T10:00:00"
            },
            "placaVeiculo": "ABC1D23"
        });

        let request: CriarReservaRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.categoria_codigo, "SUV");
        assert_eq!(request.periodo.data_retirada, "2026-06-01T10:00:00");
    }

    #[test]
    fn test_cancelar_response_contrato() {
        let response = CancelarReservaResponse {
            codigo_reserva: "RES-2026-000123".to_string(),
            status: "CANCELADA".to_string(),
            tarifa_cancelamento: Decimal::ZERO,
        };

        let valor = serde_json::to_value(&response).unwrap();
        assert!(valor.get("codigoReserva").is_some());
        assert!(valor.get("tarifaCancelamento").is_some());
    }
}
