use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::utils::errors::AppError;

// Registro de locação; modelo e nome do cliente vêm dos joins
#[derive(Debug, sqlx::FromRow)]
pub struct Locacao {
    pub codigo: String,
    pub codigo_reserva: String,
    pub placa_veiculo: String,
    pub modelo_veiculo: String,
    pub cliente_documento: String,
    pub cliente_nome: String,
    pub dias_previstos: i32,
    pub valor_diaria: Decimal,
    pub status: String,
    pub cnh_condutor: String,
    pub data_hora_retirada: NaiveDateTime,
    pub quilometragem_saida: i32,
    pub nivel_tanque_saida: String,
    pub observacoes: String,
    pub quilometragem_devolucao: Option<i32>,
    pub combustivel_devolucao: Option<String>,
    pub possui_avarias: Option<bool>,
    pub data_devolucao: Option<NaiveDateTime>,
    pub created_at: chrono::DateTime<Utc>,
}

const SELECT_LOCACAO: &str = r#"
    SELECT l.codigo, l.codigo_reserva, l.placa_veiculo, v.modelo AS modelo_veiculo,
           r.cliente_documento, c.nome AS cliente_nome, l.dias_previstos, l.valor_diaria,
           l.status, l.cnh_condutor, l.data_hora_retirada, l.quilometragem_saida,
           l.nivel_tanque_saida, l.observacoes, l.quilometragem_devolucao,
           l.combustivel_devolucao, l.possui_avarias, l.data_devolucao, l.created_at
    FROM locacoes l
    JOIN reservas r ON r.codigo = l.codigo_reserva
    JOIN clientes c ON c.documento = r.cliente_documento
    JOIN veiculos v ON v.placa = l.placa_veiculo
"#;

pub struct LocacaoRepository {
    pool: PgPool,
}

impl LocacaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn criar(
        &self,
        codigo: String,
        codigo_reserva: String,
        placa_veiculo: String,
        dias_previstos: i32,
        valor_diaria: Decimal,
        cnh_condutor: String,
        data_hora_retirada: NaiveDateTime,
        quilometragem_saida: i32,
        nivel_tanque_saida: String,
        observacoes: String,
    ) -> Result<Locacao, AppError> {
        sqlx::query(
            r#"
            INSERT INTO locacoes
                (codigo, codigo_reserva, placa_veiculo, dias_previstos, valor_diaria, status,
                 cnh_condutor, data_hora_retirada, quilometragem_saida, nivel_tanque_saida,
                 observacoes, created_at)
            VALUES ($1, $2, $3, $4, $5, 'ATIVA', $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(&codigo)
        .bind(codigo_reserva)
        .bind(placa_veiculo)
        .bind(dias_previstos)
        .bind(valor_diaria)
        .bind(cnh_condutor)
        .bind(data_hora_retirada)
        .bind(quilometragem_saida)
        .bind(nivel_tanque_saida)
        .bind(observacoes)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        self.buscar_por_codigo(&codigo)
            .await?
            .ok_or_else(|| AppError::Internal("Locação recém-criada não encontrada".to_string()))
    }

    pub async fn buscar_por_codigo(&self, codigo: &str) -> Result<Option<Locacao>, AppError> {
        let query = format!("{} WHERE l.codigo = $1", SELECT_LOCACAO);
        let locacao = sqlx::query_as::<_, Locacao>(&query)
            .bind(codigo)
            .fetch_optional(&self.pool)
            .await?;

        Ok(locacao)
    }

    pub async fn listar(&self) -> Result<Vec<Locacao>, AppError> {
        let query = format!("{} ORDER BY l.created_at DESC", SELECT_LOCACAO);
        let locacoes = sqlx::query_as::<_, Locacao>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(locacoes)
    }

    pub async fn listar_por_cliente(&self, documento: &str) -> Result<Vec<Locacao>, AppError> {
        let query = format!(
            "{} WHERE r.cliente_documento = $1 ORDER BY l.created_at DESC",
            SELECT_LOCACAO
        );
        let locacoes = sqlx::query_as::<_, Locacao>(&query)
            .bind(documento)
            .fetch_all(&self.pool)
            .await?;

        Ok(locacoes)
    }

    /// Registra a vistoria de devolução e finaliza a locação
    pub async fn registrar_devolucao(
        &self,
        codigo: &str,
        quilometragem: i32,
        combustivel: &str,
        possui_avarias: bool,
        data_devolucao: NaiveDateTime,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE locacoes
            SET status = 'FINALIZADA', quilometragem_devolucao = $2, combustivel_devolucao = $3,
                possui_avarias = $4, data_devolucao = $5
            WHERE codigo = $1
            "#,
        )
        .bind(codigo)
        .bind(quilometragem)
        .bind(combustivel)
        .bind(possui_avarias)
        .bind(data_devolucao)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Locação não encontrada".to_string()));
        }

        Ok(())
    }

    /// Conta locações ATIVAS da categoria com período conflitante,
    /// usando o período da reserva de origem
    pub async fn contar_conflitos_categoria(
        &self,
        categoria: &str,
        inicio: NaiveDateTime,
        fim: NaiveDateTime,
    ) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM locacoes l
            JOIN reservas r ON r.codigo = l.codigo_reserva
            WHERE r.categoria = $1
              AND l.status = 'ATIVA'
              AND r.data_retirada <= $3
              AND r.data_devolucao >= $2
            "#,
        )
        .bind(categoria)
        .bind(inicio)
        .bind(fim)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Verifica se o veículo tem locação ATIVA conflitante no período
    pub async fn existe_conflito_veiculo(
        &self,
        placa: &str,
        inicio: NaiveDateTime,
        fim: NaiveDateTime,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM locacoes l
                JOIN reservas r ON r.codigo = l.codigo_reserva
                WHERE l.placa_veiculo = $1
                  AND l.status = 'ATIVA'
                  AND r.data_retirada <= $3
                  AND r.data_devolucao >= $2
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
