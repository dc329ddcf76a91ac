//! Knowledge record database operations.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::models::{KnowledgeRecord, Urgency};

const KNOWLEDGE_COLUMNS: &str = "id, symptoms, conditions, treatments, medicine_ids, species, urgency, confidence, sources, last_updated";

impl Database {
    /// Insert or update a knowledge record. New records are appended after existing ones.
    pub fn upsert_knowledge(&self, record: &KnowledgeRecord) -> DbResult<()> {
        let symptoms_json = serde_json::to_string(&record.symptoms)?;
        let conditions_json = serde_json::to_string(&record.conditions)?;
        let treatments_json = serde_json::to_string(&record.treatments)?;
        let medicines_json = serde_json::to_string(&record.medicine_ids)?;
        let species_json = serde_json::to_string(&record.species)?;
        let sources_json = serde_json::to_string(&record.sources)?;

        self.conn.execute(
            r#"
            INSERT INTO knowledge_records (
                id, symptoms, conditions, treatments, medicine_ids,
                species, urgency, confidence, sources, last_updated, seq
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                (SELECT COALESCE(MAX(seq), 0) + 1 FROM knowledge_records))
            ON CONFLICT(id) DO UPDATE SET
                symptoms = excluded.symptoms,
                conditions = excluded.conditions,
                treatments = excluded.treatments,
                medicine_ids = excluded.medicine_ids,
                species = excluded.species,
                urgency = excluded.urgency,
                confidence = excluded.confidence,
                sources = excluded.sources,
                last_updated = excluded.last_updated
            "#,
            params![
                record.id,
                symptoms_json,
                conditions_json,
                treatments_json,
                medicines_json,
                species_json,
                record.urgency.as_str(),
                record.confidence,
                sources_json,
                record.last_updated.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get a knowledge record by id.
    pub fn get_knowledge(&self, id: &str) -> DbResult<Option<KnowledgeRecord>> {
        let sql = format!("SELECT {KNOWLEDGE_COLUMNS} FROM knowledge_records WHERE id = ?");
        let result = self
            .conn
            .query_row(&sql, [id], KnowledgeRow::from_row)
            .optional()?;

        result.map(|row| row.try_into()).transpose()
    }

    /// All knowledge records in insertion order.
    pub fn list_knowledge(&self) -> DbResult<Vec<KnowledgeRecord>> {
        let sql = format!("SELECT {KNOWLEDGE_COLUMNS} FROM knowledge_records ORDER BY seq");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], KnowledgeRow::from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.try_into()?);
        }
        Ok(records)
    }

    /// Update only the confidence of a record. Returns false if the id is unknown.
    pub fn set_knowledge_confidence(
        &self,
        id: &str,
        confidence: f64,
        updated_at: DateTime<Utc>,
    ) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE knowledge_records SET confidence = ?1, last_updated = ?2 WHERE id = ?3",
            params![confidence, updated_at.to_rfc3339(), id],
        )?;
        Ok(rows_affected > 0)
    }

    /// Number of knowledge records.
    pub fn count_knowledge(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM knowledge_records", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Intermediate row struct for database mapping.
struct KnowledgeRow {
    id: String,
    symptoms: String,
    conditions: String,
    treatments: String,
    medicine_ids: String,
    species: String,
    urgency: String,
    confidence: f64,
    sources: String,
    last_updated: String,
}

impl KnowledgeRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            symptoms: row.get(1)?,
            conditions: row.get(2)?,
            treatments: row.get(3)?,
            medicine_ids: row.get(4)?,
            species: row.get(5)?,
            urgency: row.get(6)?,
            confidence: row.get(7)?,
            sources: row.get(8)?,
            last_updated: row.get(9)?,
        })
    }
}

impl TryFrom<KnowledgeRow> for KnowledgeRecord {
    type Error = DbError;

    fn try_from(row: KnowledgeRow) -> Result<Self, Self::Error> {
        let urgency = Urgency::parse(&row.urgency)
            .ok_or_else(|| DbError::Constraint(format!("Unknown urgency: {}", row.urgency)))?;

        Ok(KnowledgeRecord {
            id: row.id,
            symptoms: serde_json::from_str(&row.symptoms)?,
            conditions: serde_json::from_str(&row.conditions)?,
            treatments: serde_json::from_str(&row.treatments)?,
            medicine_ids: serde_json::from_str(&row.medicine_ids)?,
            species: serde_json::from_str(&row.species)?,
            urgency,
            confidence: row.confidence,
            sources: serde_json::from_str(&row.sources)?,
            last_updated: DateTime::parse_from_rfc3339(&row.last_updated)?.with_timezone(&Utc),
        })
    }
}
