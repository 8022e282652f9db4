use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::utils::errors::AppError;

// Registro de reserva; cliente_nome vem do join com clientes
#[derive(Debug, sqlx::FromRow)]
pub struct Reserva {
    pub codigo: String,
    pub categoria: String,
    pub cidade_retirada: String,
    pub data_retirada: NaiveDateTime,
    pub data_devolucao: NaiveDateTime,
    pub valor_estimado: Decimal,
    pub status: String,
    pub cliente_documento: String,
    pub cliente_nome: String,
    pub placa_veiculo: String,
    pub created_at: chrono::DateTime<Utc>,
}

const SELECT_RESERVA: &str = r#"
    SELECT r.codigo, r.categoria, r.cidade_retirada, r.data_retirada, r.data_devolucao,
           r.valor_estimado, r.status, r.cliente_documento, c.nome AS cliente_nome,
           r.placa_veiculo, r.created_at
    FROM reservas r
    JOIN clientes c ON c.documento = r.cliente_documento
"#;

pub struct ReservaRepository {
    pool: PgPool,
}

impl ReservaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn criar(
        &self,
        codigo: String,
        categoria: String,
        cidade_retirada: String,
        data_retirada: NaiveDateTime,
        data_devolucao: NaiveDateTime,
        valor_estimado: Decimal,
        cliente_documento: String,
        placa_veiculo: String,
    ) -> Result<Reserva, AppError> {
        sqlx::query(
            r#"
            INSERT INTO reservas
                (codigo, categoria, cidade_retirada, data_retirada, data_devolucao,
                 valor_estimado, status, cliente_documento, placa_veiculo, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'ATIVA', $7, $8, $9)
            "#,
        )
        .bind(&codigo)
        .bind(categoria)
        .bind(cidade_retirada)
        .bind(data_retirada)
        .bind(data_devolucao)
        .bind(valor_estimado)
        .bind(cliente_documento)
        .bind(placa_veiculo)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        self.buscar_por_codigo(&codigo)
            .await?
            .ok_or_else(|| AppError::Internal("Reserva recém-criada não encontrada".to_string()))
    }

    pub async fn buscar_por_codigo(&self, codigo: &str) -> Result<Option<Reserva>, AppError> {
        let query = format!("{} WHERE r.codigo = $1", SELECT_RESERVA);
        let reserva = sqlx::query_as::<_, Reserva>(&query)
            .bind(codigo)
            .fetch_optional(&self.pool)
            .await?;

        Ok(reserva)
    }

    pub async fn listar(&self) -> Result<Vec<Reserva>, AppError> {
        let query = format!("{} ORDER BY r.created_at DESC", SELECT_RESERVA);
        let reservas = sqlx::query_as::<_, Reserva>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(reservas)
    }

    pub async fn listar_por_cliente(&self, documento: &str) -> Result<Vec<Reserva>, AppError> {
        let query = format!(
            "{} WHERE r.cliente_documento = $1 ORDER BY r.created_at DESC",
            SELECT_RESERVA
        );
        let reservas = sqlx::query_as::<_, Reserva>(&query)
            .bind(documento)
            .fetch_all(&self.pool)
            .await?;

        Ok(reservas)
    }

    pub async fn atualizar_status(&self, codigo: &str, status: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE reservas SET status = $2 WHERE codigo = $1")
            .bind(codigo)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reserva não encontrada".to_string()));
        }

        Ok(())
    }

    pub async fn atualizar_periodo(
        &self,
        codigo: &str,
        data_retirada: NaiveDateTime,
        data_devolucao: NaiveDateTime,
        valor_estimado: Decimal,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE reservas
            SET data_retirada = $2, data_devolucao = $3, valor_estimado = $4
            WHERE codigo = $1
            "#,
        )
        .bind(codigo)
        .bind(data_retirada)
        .bind(data_devolucao)
        .bind(valor_estimado)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reserva não encontrada".to_string()));
        }

        Ok(())
    }

    /// Conta reservas ATIVAS da categoria com período conflitante
    /// (sobreposição inclusiva), opcionalmente excluindo uma reserva
    pub async fn contar_conflitos_categoria(
        &self,
        categoria: &str,
        inicio: NaiveDateTime,
        fim: NaiveDateTime,
        excluir_codigo: Option<&str>,
    ) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM reservas
            WHERE categoria = $1
              AND status = 'ATIVA'
              AND data_retirada <= $3
              AND data_devolucao >= $2
              AND ($4::text IS NULL OR codigo <> $4)
            "#,
        )
        .bind(categoria)
        .bind(inicio)
        .bind(fim)
        .bind(excluir_codigo)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Verifica se o veículo tem reserva ATIVA conflitante no período
    pub async fn existe_conflito_veiculo(
        &self,
        placa: &str,
        inicio: NaiveDateTime,
        fim: NaiveDateTime,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reservas
                WHERE placa_veiculo = $1
                  AND status = 'ATIVA'
                  AND data_retirada <= $3
                  AND data_devolucao >= $2
            )
            "#,
        )
        .bind(placa)
        .bind(inicio)
        .bind(fim)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
