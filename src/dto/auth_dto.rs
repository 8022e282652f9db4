//! DTOs de autenticação e cadastro

use serde::{Deserialize, Serialize};

// Request de cadastro de cliente
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroRequest {
    pub nome: String,
    pub cpf_ou_cnpj: String,
    pub cnh: String,
    pub email: String,
    pub login: String,
    pub senha: String,
}

// Request de login (cliente e administrador)
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub senha: String,
}

// Response de autenticação/cadastro
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutenticacaoResponse {
    pub documento: String,
    pub nome: String,
    pub email: String,
    pub login: String,
    pub status: String,
    pub mensagem: String,
}

// Response de login de administrador
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAutenticacaoResponse {
    pub login: String,
    pub nome: String,
    pub mensagem: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registro_request_contrato() {
        let body = json!({
            "nome": "João da Silva",
            "cpfOuCnpj": "529.982.247-25",
            "cnh": "12345678901",
            "email": "joao@exemplo.com",
            "login": "joao.silva",
            "senha": "segredo1"
        });

        let request: RegistroRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.cpf_ou_cnpj, "529.982.247-25");
    }
}
