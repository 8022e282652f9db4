//! Geração de códigos de reserva e locação

use chrono::{Datelike, Utc};
use rand::Rng;

/// Gera um código de reserva no formato RES-AAAA-NNNNNN
pub fn gerar_codigo_reserva() -> String {
    gerar_codigo("RES")
}

/// Gera um código de locação no formato LOC-AAAA-NNNNNN
pub fn gerar_codigo_locacao() -> String {
    gerar_codigo("LOC")
}

fn gerar_codigo(prefixo: &str) -> String {
    let ano = Utc::now().year();
    let sufixo: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{}-{}-{:06}", prefixo, ano, sufixo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formato_codigo_reserva() {
        let codigo = gerar_codigo_reserva();
        assert!(codigo.starts_with("RES-"));
        let partes: Vec<&str> = codigo.split('-').collect();
        assert_eq!(partes.len(), 3);
        assert_eq!(partes[2].len(), 6);
        assert!(partes[1].parse::<i32>().is_ok());
    }

    #[test]
    fn test_formato_codigo_locacao() {
        let codigo = gerar_codigo_locacao();
        assert!(codigo.starts_with("LOC-"));
    }
}
