//! Utilidades de validação
//!
//! Este módulo contém funções helper para validação de documentos,
//! credenciais e dados de entrada.

use chrono::{DateTime, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref LOGIN_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9._-]{4,30}$").unwrap();
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

const SENHA_MIN_LENGTH: usize = 6;

/// Remove todos os caracteres não numéricos de um documento
pub fn somente_digitos(valor: &str) -> String {
    valor.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Valida um CPF pelo checksum de dois dígitos verificadores.
///
/// Caracteres não numéricos são ignorados. Rejeita comprimento
/// diferente de 11 e sequências com todos os dígitos iguais.
pub fn validar_cpf(cpf: &str) -> bool {
    let numeros = somente_digitos(cpf);

    if numeros.len() != 11 {
        return false;
    }

    let digitos: Vec<u32> = numeros.chars().filter_map(|c| c.to_digit(10)).collect();

    let primeiro = digitos[0];
    if digitos.iter().all(|&d| d == primeiro) {
        return false;
    }

    // Primeiro dígito verificador: pesos 10..2 sobre as posições 1..9
    let soma: u32 = (1..=9).map(|i| digitos[i - 1] * (11 - i as u32)).sum();
    let mut resto = (soma * 10) % 11;
    if resto == 10 || resto == 11 {
        resto = 0;
    }
    if resto != digitos[9] {
        return false;
    }

    // Segundo dígito verificador: pesos 11..2 sobre as posições 1..10
    let soma: u32 = (1..=10).map(|i| digitos[i - 1] * (12 - i as u32)).sum();
    let mut resto = (soma * 10) % 11;
    if resto == 10 || resto == 11 {
        resto = 0;
    }

    resto == digitos[10]
}

/// Valida um documento de cliente (CPF de 11 dígitos)
pub fn validar_documento(valor: &str) -> Result<String, ValidationError> {
    let numeros = somente_digitos(valor);
    if !validar_cpf(&numeros) {
        let mut error = ValidationError::new("documento");
        error.add_param("value".into(), &valor.to_string());
        return Err(error);
    }
    Ok(numeros)
}

/// Valida uma CNH (11 dígitos numéricos)
pub fn validar_cnh(valor: &str) -> Result<String, ValidationError> {
    let numeros = somente_digitos(valor);
    if numeros.len() != 11 {
        let mut error = ValidationError::new("cnh");
        error.add_param("value".into(), &valor.to_string());
        return Err(error);
    }
    Ok(numeros)
}

/// Valida um login (4-30 caracteres alfanuméricos, pontos, hífens ou underscores)
pub fn validar_login(valor: &str) -> Result<String, ValidationError> {
    let login = valor.trim();
    if !LOGIN_REGEX.is_match(login) {
        let mut error = ValidationError::new("login");
        error.add_param("value".into(), &valor.to_string());
        error.add_param("format".into(), &"4-30 caracteres [a-zA-Z0-9._-]".to_string());
        return Err(error);
    }
    Ok(login.to_string())
}

/// Valida uma senha (mínimo 6 caracteres)
pub fn validar_senha(valor: &str) -> Result<(), ValidationError> {
    if valor.len() < SENHA_MIN_LENGTH {
        let mut error = ValidationError::new("senha");
        error.add_param("min_length".into(), &SENHA_MIN_LENGTH);
        return Err(error);
    }
    Ok(())
}

/// Valida formato de email
pub fn validar_email(valor: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(valor) {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &valor.to_string());
        return Err(error);
    }
    Ok(())
}

/// Valida e normaliza uma placa de veículo
pub fn validar_placa(valor: &str) -> Result<String, ValidationError> {
    let placa = valor.trim().to_uppercase();
    let limpa: String = placa.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if limpa.len() < 5 || limpa.len() > 10 {
        let mut error = ValidationError::new("placa");
        error.add_param("value".into(), &valor.to_string());
        return Err(error);
    }
    Ok(placa)
}

/// Valida que um string não está vazio
pub fn validar_nao_vazio(valor: &str) -> Result<(), ValidationError> {
    if valor.trim().is_empty() {
        let mut error = ValidationError::new("nao_vazio");
        error.add_param("value".into(), &valor.to_string());
        return Err(error);
    }
    Ok(())
}

/// Valida e converte string para datetime
pub fn validar_datetime(valor: &str) -> Result<NaiveDateTime, ValidationError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(valor) {
        return Ok(dt.with_timezone(&Utc).naive_utc());
    }

    NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(valor, "%Y-%m-%dT%H:%M"))
        .map_err(|_| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &valor.to_string());
            error.add_param("format".into(), &"ISO 8601".to_string());
            error
        })
}

/// Valida que um valor é não negativo
pub fn validar_nao_negativo<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    valor: T,
) -> Result<(), ValidationError> {
    if valor < T::zero() {
        let mut error = ValidationError::new("nao_negativo");
        error.add_param("value".into(), &valor);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validar_cpf_conhecido_valido() {
        assert!(validar_cpf("52998224725"));
    }

    #[test]
    fn test_validar_cpf_com_mascara() {
        assert_eq!(validar_cpf("529.982.247-25"), validar_cpf("52998224725"));
        assert!(validar_cpf("529.982.247-25"));
    }

    #[test]
    fn test_validar_cpf_digitos_repetidos() {
        assert!(!validar_cpf("00000000000"));
        assert!(!validar_cpf("11111111111"));
        assert!(!validar_cpf("99999999999"));
    }

    #[test]
    fn test_validar_cpf_tamanho_errado() {
        assert!(!validar_cpf("123"));
        assert!(!validar_cpf(""));
        assert!(!validar_cpf("529982247250"));
    }

    #[test]
    fn test_validar_cpf_checksum_invalido() {
        // Último dígito alterado do CPF de referência
        assert!(!validar_cpf("52998224726"));
        // Primeiro dígito verificador alterado
        assert!(!validar_cpf("52998224735"));
    }

    #[test]
    fn test_validar_documento() {
        assert_eq!(validar_documento("529.982.247-25").unwrap(), "52998224725");
        assert!(validar_documento("11111111111").is_err());
    }

    #[test]
    fn test_validar_cnh() {
        assert_eq!(validar_cnh("12345678901").unwrap(), "12345678901");
        assert_eq!(validar_cnh("123.456.789-01").unwrap(), "12345678901");
        assert!(validar_cnh("123").is_err());
    }

    #[test]
    fn test_validar_login() {
        assert!(validar_login("joao.silva").is_ok());
        assert!(validar_login("ab").is_err());
        assert!(validar_login("login com espaço").is_err());
    }

    #[test]
    fn test_validar_senha() {
        assert!(validar_senha("123456").is_ok());
        assert!(validar_senha("12345").is_err());
    }

    #[test]
    fn test_validar_email() {
        assert!(validar_email("teste@exemplo.com").is_ok());
        assert!(validar_email("invalido").is_err());
        assert!(validar_email("teste@").is_err());
    }

    #[test]
    fn test_validar_placa() {
        assert_eq!(validar_placa("abc1d23").unwrap(), "ABC1D23");
        assert!(validar_placa("A").is_err());
    }

    #[test]
    fn test_validar_datetime() {
        assert!(validar_datetime("2026-01-15T10:00:00").is_ok());
        assert!(validar_datetime("2026-01-15T10:00").is_ok());
        assert!(validar_datetime("2026-01-15T10:00:00Z").is_ok());
        assert!(validar_datetime("15/01/2026").is_err());
    }

    #[test]
    fn test_validar_nao_negativo() {
        assert!(validar_nao_negativo(0).is_ok());
        assert!(validar_nao_negativo(10).is_ok());
        assert!(validar_nao_negativo(-1).is_err());
    }
}
