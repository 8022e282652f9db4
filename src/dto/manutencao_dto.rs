//! DTOs de manutenção

use serde::Deserialize;

// Request de agendamento de manutenção
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendarManutencaoRequest {
    pub placa: String,
    pub previsao: String,
    pub motivo: String,
}
