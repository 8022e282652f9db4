//! Formatação de apresentação
//!
//! Máscaras de documento, moeda e data no padrão pt-BR.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::validation::somente_digitos;

/// Formata um CPF para o padrão XXX.XXX.XXX-XX
pub fn formatar_cpf(cpf: &str) -> String {
    let numeros = somente_digitos(cpf);
    if numeros.len() != 11 {
        return numeros;
    }
    format!(
        "{}.{}.{}-{}",
        &numeros[0..3],
        &numeros[3..6],
        &numeros[6..9],
        &numeros[9..11]
    )
}

/// Formata um CEP para o padrão XXXXX-XXX
pub fn formatar_cep(cep: &str) -> String {
    let numeros = somente_digitos(cep);
    if numeros.len() != 8 {
        return numeros;
    }
    format!("{}-{}", &numeros[0..5], &numeros[5..8])
}

/// Formata um telefone para o padrão (XX) XXXXX-XXXX ou (XX) XXXX-XXXX
pub fn formatar_telefone(telefone: &str) -> String {
    let numeros = somente_digitos(telefone);
    match numeros.len() {
        11 => format!("({}) {}-{}", &numeros[0..2], &numeros[2..7], &numeros[7..11]),
        10 => format!("({}) {}-{}", &numeros[0..2], &numeros[2..6], &numeros[6..10]),
        _ => numeros,
    }
}

/// Formata um valor monetário para o padrão R$ X.XXX,XX
pub fn formatar_moeda(valor: Decimal) -> String {
    let arredondado = valor.round_dp(2);
    let negativo = arredondado.is_sign_negative();
    let texto = arredondado.abs().to_string();

    let (inteiro, centavos) = match texto.split_once('.') {
        Some((i, c)) => (i.to_string(), format!("{:0<2}", c)),
        None => (texto, "00".to_string()),
    };

    // Agrupamento de milhares com ponto
    let mut agrupado = String::new();
    let digitos: Vec<char> = inteiro.chars().collect();
    for (i, d) in digitos.iter().enumerate() {
        if i > 0 && (digitos.len() - i) % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(*d);
    }

    if negativo {
        format!("-R$ {},{}", agrupado, centavos)
    } else {
        format!("R$ {},{}", agrupado, centavos)
    }
}

/// Formata uma data para o padrão DD/MM/YYYY
pub fn formatar_data(data: NaiveDateTime) -> String {
    data.format("%d/%m/%Y").to_string()
}

/// Formata data e hora para o padrão DD/MM/YYYY HH:MM
pub fn formatar_data_hora(data: NaiveDateTime) -> String {
    data.format("%d/%m/%Y %H:%M").to_string()
}

/// Calcula o número de dias entre duas datas (arredondado para cima)
pub fn calcular_dias(inicio: NaiveDateTime, fim: NaiveDateTime) -> i64 {
    let segundos = (fim - inicio).num_seconds();
    if segundos <= 0 {
        return 0;
    }
    (segundos + 86_399) / 86_400
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(ano: i32, mes: u32, dia: u32, hora: u32, minuto: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(ano, mes, dia)
            .unwrap()
            .and_hms_opt(hora, minuto, 0)
            .unwrap()
    }

    #[test]
    fn test_formatar_cpf() {
        assert_eq!(formatar_cpf("52998224725"), "529.982.247-25");
        assert_eq!(formatar_cpf("529.982.247-25"), "529.982.247-25");
        assert_eq!(formatar_cpf("123"), "123");
    }

    #[test]
    fn test_formatar_cep() {
        assert_eq!(formatar_cep("01310100"), "01310-100");
        assert_eq!(formatar_cep("01310-100"), "01310-100");
    }

    #[test]
    fn test_formatar_telefone() {
        assert_eq!(formatar_telefone("11987654321"), "(11) 98765-4321");
        assert_eq!(formatar_telefone("1133334444"), "(11) 3333-4444");
    }

    #[test]
    fn test_formatar_moeda() {
        assert_eq!(formatar_moeda(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(formatar_moeda(Decimal::new(900, 1)), "R$ 90,00");
        assert_eq!(formatar_moeda(Decimal::ZERO), "R$ 0,00");
        assert_eq!(formatar_moeda(Decimal::new(123456789, 2)), "R$ 1.234.567,89");
    }

    #[test]
    fn test_formatar_data() {
        assert_eq!(formatar_data(dt(2026, 1, 15, 10, 30)), "15/01/2026");
        assert_eq!(formatar_data_hora(dt(2026, 1, 15, 10, 30)), "15/01/2026 10:30");
    }

    #[test]
    fn test_calcular_dias() {
        assert_eq!(calcular_dias(dt(2026, 1, 1, 10, 0), dt(2026, 1, 4, 10, 0)), 3);
        // Fração de dia conta como dia inteiro
        assert_eq!(calcular_dias(dt(2026, 1, 1, 10, 0), dt(2026, 1, 4, 11, 0)), 4);
        assert_eq!(calcular_dias(dt(2026, 1, 4, 10, 0), dt(2026, 1, 1, 10, 0)), 0);
    }
}
