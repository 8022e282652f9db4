use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::utils::errors::AppError;

// Registro de veículo da frota
#[derive(Debug, sqlx::FromRow)]
pub struct Veiculo {
    pub placa: String,
    pub modelo: String,
    pub categoria: String,
    pub cidade: String,
    pub diaria: Decimal,
    pub status: String,
    pub manutencao_prevista: Option<NaiveDateTime>,
    pub manutencao_nota: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
}

pub struct VeiculoRepository {
    pool: PgPool,
}

impl VeiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn buscar_por_placa(&self, placa: &str) -> Result<Option<Veiculo>, AppError> {
        let veiculo = sqlx::query_as::<_, Veiculo>("SELECT * FROM veiculos WHERE placa = $1")
            .bind(placa)
            .fetch_optional(&self.pool)
            .await?;

        Ok(veiculo)
    }

    pub async fn atualizar_status(&self, placa: &str, status: &str) -> Result<Veiculo, AppError> {
        let veiculo = sqlx::query_as::<_, Veiculo>(
            "UPDATE veiculos SET status = $2 WHERE placa = $1 RETURNING *",
        )
        .bind(placa)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        Ok(veiculo)
    }

    pub async fn agendar_manutencao(
        &self,
        placa: &str,
        previsao: NaiveDateTime,
        nota: &str,
    ) -> Result<Veiculo, AppError> {
        let veiculo = sqlx::query_as::<_, Veiculo>(
            r#"
            UPDATE veiculos
            SET status = 'EM_MANUTENCAO', manutencao_prevista = $2, manutencao_nota = $3
            WHERE placa = $1
            RETURNING *
            "#,
        )
        .bind(placa)
        .bind(previsao)
        .bind(nota)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        Ok(veiculo)
    }

    /// Veículos DISPONIVEL filtrados por cidade e categoria, sem reserva
    /// ativa nem locação ativa conflitante no período informado
    pub async fn buscar_disponiveis(
        &self,
        cidade: Option<&str>,
        categoria: Option<&str>,
        inicio: Option<NaiveDateTime>,
        fim: Option<NaiveDateTime>,
    ) -> Result<Vec<Veiculo>, AppError> {
        let veiculos = sqlx::query_as::<_, Veiculo>(
            r#"
            SELECT v.* FROM veiculos v
            WHERE v.status = 'DISPONIVEL'
              AND ($1::text IS NULL OR LOWER(v.cidade) = LOWER($1))
              AND ($2::text IS NULL OR v.categoria = $2)
              AND ($3::timestamp IS NULL OR $4::timestamp IS NULL OR NOT EXISTS (
                    SELECT 1 FROM reservas r
                    WHERE r.placa_veiculo = v.placa
                      AND r.status = 'ATIVA'
                      AND r.data_retirada <= $4
                      AND r.data_devolucao >= $3
              ))
              AND ($3::timestamp IS NULL OR $4::timestamp IS NULL OR NOT EXISTS (
                    SELECT 1 FROM locacoes l
                    JOIN reservas r ON r.codigo = l.codigo_reserva
                    WHERE l.placa_veiculo = v.placa
                      AND l.status = 'ATIVA'
                      AND r.data_retirada <= $4
                      AND r.data_devolucao >= $3
              ))
            ORDER BY v.diaria ASC
            "#,
        )
        .bind(cidade)
        .bind(categoria)
        .bind(inicio)
        .bind(fim)
        .fetch_all(&self.pool)
        .await?;

        Ok(veiculos)
    }

    pub async fn listar_em_manutencao(&self) -> Result<Vec<Veiculo>, AppError> {
        let veiculos = sqlx::query_as::<_, Veiculo>(
            r#"
            SELECT * FROM veiculos
            WHERE status = 'EM_MANUTENCAO' OR manutencao_prevista IS NOT NULL
            ORDER BY manutencao_prevista ASC NULLS LAST
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(veiculos)
    }
}
