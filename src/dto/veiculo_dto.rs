//! DTOs de veículo

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Query de busca de veículos disponíveis
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisponibilidadeQuery {
    pub cidade: Option<String>,
    pub categoria: Option<String>,
    pub data_retirada: Option<String>,
    pub data_devolucao: Option<String>,
}

// Response de veículo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VeiculoResponse {
    pub placa: String,
    pub modelo: String,
    pub categoria: String,
    pub cidade: String,
    pub diaria: Decimal,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manutencao_prevista: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manutencao_nota: Option<String>,
}
