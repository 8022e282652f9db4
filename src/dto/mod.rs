pub mod auth_dto;
pub mod categoria_dto;
pub mod locacao_dto;
pub mod manutencao_dto;
pub mod reserva_dto;
pub mod veiculo_dto;

use serde::Serialize;

/// Envelope padrão de resposta da API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
