//! Postgres settings provider.
//!
//! Loads one `interview_settings` row plus the custom question lists for
//! the configured company and field. Question rows are filtered to
//! `ask = TRUE` and to questions matching the interview field (or tagged
//! with no field at all), ordered by `order_index`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::domain::foundation::SettingsId;
use crate::ports::{InterviewSettings, SettingsError, SettingsProvider, Strictness};

/// Postgres implementation of the [`SettingsProvider`] port.
#[derive(Debug, Clone)]
pub struct PostgresSettings {
    pool: PgPool,
}

impl PostgresSettings {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_questions(
        &self,
        table: QuestionTable,
        company_id: &str,
        field: &str,
    ) -> Result<Vec<String>, SettingsError> {
        let query = match table {
            QuestionTable::Hr => {
                r#"
                SELECT question_text
                FROM custom_hr_questions
                WHERE company_id = $1
                  AND ask = TRUE
                  AND (field = $2 OR field IS NULL OR field = '')
                ORDER BY order_index
                "#
            }
            QuestionTable::Technical => {
                r#"
                SELECT question_text
                FROM custom_technical_questions
                WHERE company_id = $1
                  AND ask = TRUE
                  AND (field = $2 OR field IS NULL OR field = '')
                ORDER BY order_index
                "#
            }
        };

        let rows: Vec<(String,)> = sqlx::query_as(query)
            .bind(company_id)
            .bind(field)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SettingsError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|(text,)| text).collect())
    }
}

#[derive(Debug, Clone, Copy)]
enum QuestionTable {
    Hr,
    Technical,
}

#[async_trait]
impl SettingsProvider for PostgresSettings {
    async fn load(&self, id: SettingsId) -> Result<InterviewSettings, SettingsError> {
        let row: Option<(String, String, bool, bool, String, String, String)> = sqlx::query_as(
            r#"
            SELECT
                company_id,
                interview_field,
                include_hr,
                include_technical,
                voice,
                language,
                strictness_level
            FROM interview_settings
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SettingsError::Database(e.to_string()))?;

        let Some((company_id, interview_field, include_hr, include_technical, voice, language, strictness)) =
            row
        else {
            return Err(SettingsError::NotFound(id));
        };

        let hr_questions = if include_hr {
            self.load_questions(QuestionTable::Hr, &company_id, &interview_field)
                .await?
        } else {
            Vec::new()
        };
        let technical_questions = if include_technical {
            self.load_questions(QuestionTable::Technical, &company_id, &interview_field)
                .await?
        } else {
            Vec::new()
        };

        info!(
            company = %company_id,
            field = %interview_field,
            hr_questions = hr_questions.len(),
            tech_questions = technical_questions.len(),
            "interview settings loaded"
        );

        Ok(InterviewSettings {
            company_name: title_case(&company_id),
            interview_field,
            include_hr,
            include_technical,
            voice,
            language,
            strictness: parse_strictness(&strictness),
            skip_requires_insist: true,
            hr_questions,
            technical_questions,
        })
    }
}

fn parse_strictness(level: &str) -> Strictness {
    match level.to_lowercase().as_str() {
        "lenient" | "low" => Strictness::Lenient,
        "strict" | "high" => Strictness::Strict,
        _ => Strictness::Medium,
    }
}

/// `company_id` values are stored lowercase; display names capitalize the
/// first letter of each word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
