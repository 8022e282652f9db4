//! DTOs de categoria

use rust_decimal::Decimal;
use serde::Serialize;

// Response de categoria do catálogo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaResponse {
    pub codigo: String,
    pub nome: String,
    pub descricao: String,
    pub diaria: Decimal,
    pub modelos_exemplo: Vec<String>,
    pub quantidade_disponivel: i32,
}
