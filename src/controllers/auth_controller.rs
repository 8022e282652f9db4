//! Autenticação e cadastro de clientes e administradores
//!
//! As senhas são armazenadas com bcrypt; a emissão do cookie de
//! sessão fica na camada de rotas.

use sqlx::PgPool;

use crate::dto::auth_dto::RegistroRequest;
use crate::models::shared::StatusCliente;
use crate::repositories::administrador_repository::{Administrador, AdministradorRepository};
use crate::repositories::cliente_repository::{Cliente, ClienteRepository};
use crate::utils::errors::AppError;
use crate::utils::validation;

pub struct AuthController {
    clientes: ClienteRepository,
    administradores: AdministradorRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            clientes: ClienteRepository::new(pool.clone()),
            administradores: AdministradorRepository::new(pool),
        }
    }

    pub async fn registrar(&self, request: RegistroRequest) -> Result<Cliente, AppError> {
        let nome = request.nome.trim().to_string();
        validation::validar_nao_vazio(&nome)
            .map_err(|_| AppError::BadRequest("O nome do cliente é obrigatório".to_string()))?;

        let documento = validation::validar_documento(&request.cpf_ou_cnpj)
            .map_err(|_| AppError::BadRequest("CPF inválido. Verifique os dígitos informados".to_string()))?;

        let cnh = validation::validar_cnh(&request.cnh)
            .map_err(|_| AppError::BadRequest("CNH inválida. Utilize somente números".to_string()))?;

        validation::validar_email(&request.email)
            .map_err(|_| AppError::BadRequest("E-mail inválido".to_string()))?;

        let login = validation::validar_login(&request.login).map_err(|_| {
            AppError::BadRequest(
                "Login inválido. Use 4-30 caracteres alfanuméricos, pontos, hífens ou underscores"
                    .to_string(),
            )
        })?;

        validation::validar_senha(&request.senha)
            .map_err(|_| AppError::BadRequest("Senha deve ter no mínimo 6 caracteres".to_string()))?;

        if self.clientes.documento_existe(&documento).await? {
            return Err(AppError::Conflict(
                "Já existe um cliente cadastrado com este documento".to_string(),
            ));
        }

        if self.clientes.login_existe(&login).await? {
            return Err(AppError::Conflict(
                "Este login já está em uso".to_string(),
            ));
        }

        let senha_hash = bcrypt::hash(&request.senha, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Erro ao gerar hash da senha: {}", e)))?;

        let cliente = self
            .clientes
            .criar(documento, nome, cnh, request.email.trim().to_string(), login, senha_hash)
            .await?;

        Ok(cliente)
    }

    pub async fn autenticar_cliente(&self, login: &str, senha: &str) -> Result<Cliente, AppError> {
        let cliente = self
            .clientes
            .buscar_por_login(login)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Login ou senha inválidos".to_string()))?;

        match StatusCliente::parse(&cliente.status)? {
            StatusCliente::Bloqueado => {
                return Err(AppError::Forbidden(
                    "Cliente bloqueado. Entre em contato com o suporte".to_string(),
                ));
            }
            StatusCliente::Inativo => {
                return Err(AppError::Forbidden(
                    "Cliente inativo. Entre em contato com o suporte".to_string(),
                ));
            }
            StatusCliente::Ativo => {}
        }

        let senha_confere = bcrypt::verify(senha, &cliente.senha_hash)
            .map_err(|e| AppError::Internal(format!("Erro ao verificar senha: {}", e)))?;

        if !senha_confere {
            return Err(AppError::Unauthorized("Login ou senha inválidos".to_string()));
        }

        Ok(cliente)
    }

    pub async fn autenticar_admin(&self, login: &str, senha: &str) -> Result<Administrador, AppError> {
        let admin = self
            .administradores
            .buscar_por_login(login)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Login ou senha inválidos".to_string()))?;

        let senha_confere = bcrypt::verify(senha, &admin.senha_hash)
            .map_err(|e| AppError::Internal(format!("Erro ao verificar senha: {}", e)))?;

        if !senha_confere {
            return Err(AppError::Unauthorized("Login ou senha inválidos".to_string()));
        }

        Ok(admin)
    }
}
