//! Query history and common-query counter operations.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::models::{Feedback, Language, PetSpecies, UserQuery};

impl Database {
    /// Append a query to the history.
    pub fn insert_query(&self, query: &UserQuery) -> DbResult<()> {
        let matched_json = serde_json::to_string(&query.matched_knowledge)?;

        self.conn.execute(
            r#"
            INSERT INTO user_queries (
                id, query, language, species, timestamp, response, matched_knowledge, feedback
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                query.id,
                query.query,
                query.language.code(),
                query.species.as_str(),
                query.timestamp.to_rfc3339(),
                query.response,
                matched_json,
                query.feedback.map(|f| f.as_str()),
            ],
        )?;
        Ok(())
    }

    /// Get a query by id.
    pub fn get_query(&self, id: &str) -> DbResult<Option<UserQuery>> {
        let result = self
            .conn
            .query_row(
                r#"
                SELECT id, query, language, species, timestamp, response, matched_knowledge, feedback
                FROM user_queries
                WHERE id = ?
                "#,
                [id],
                QueryRow::from_row,
            )
            .optional()?;

        result.map(|row| row.try_into()).transpose()
    }

    /// Record feedback on a query. Returns false if the id is unknown.
    pub fn set_query_feedback(&self, id: &str, feedback: Feedback) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE user_queries SET feedback = ?1 WHERE id = ?2",
            params![feedback.as_str(), id],
        )?;
        Ok(rows_affected > 0)
    }

    /// Number of queries in the history.
    pub fn count_queries(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM user_queries", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Increment the counter for a normalized query and return the new count.
    pub fn bump_common_query(&self, key: &str) -> DbResult<u32> {
        self.conn.execute(
            r#"
            INSERT INTO common_queries (query_key, count) VALUES (?1, 1)
            ON CONFLICT(query_key) DO UPDATE SET count = count + 1
            "#,
            [key],
        )?;
        let count: u32 = self.conn.query_row(
            "SELECT count FROM common_queries WHERE query_key = ?",
            [key],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Most frequent normalized queries, highest count first.
    pub fn top_common_queries(&self, limit: usize) -> DbResult<Vec<(String, u32)>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT query_key, count
            FROM common_queries
            ORDER BY count DESC, rowid ASC
            LIMIT ?
            "#,
        )?;
        let rows = stmt.query_map([limit as i64], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut queries = Vec::new();
        for row in rows {
            queries.push(row?);
        }
        Ok(queries)
    }
}

/// Intermediate row struct for database mapping.
struct QueryRow {
    id: String,
    query: String,
    language: String,
    species: String,
    timestamp: String,
    response: String,
    matched_knowledge: String,
    feedback: Option<String>,
}

impl QueryRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            query: row.get(1)?,
            language: row.get(2)?,
            species: row.get(3)?,
            timestamp: row.get(4)?,
            response: row.get(5)?,
            matched_knowledge: row.get(6)?,
            feedback: row.get(7)?,
        })
    }
}

impl TryFrom<QueryRow> for UserQuery {
    type Error = DbError;

    fn try_from(row: QueryRow) -> Result<Self, Self::Error> {
        let language = Language::parse(&row.language)
            .ok_or_else(|| DbError::Constraint(format!("Unknown language: {}", row.language)))?;
        let species = PetSpecies::parse(&row.species)
            .ok_or_else(|| DbError::Constraint(format!("Unknown species: {}", row.species)))?;
        let feedback = row
            .feedback
            .map(|f| {
                Feedback::parse(&f)
                    .ok_or_else(|| DbError::Constraint(format!("Unknown feedback: {}", f)))
            })
            .transpose()?;

        Ok(UserQuery {
            id: row.id,
            query: row.query,
            language,
            species,
            timestamp: DateTime::parse_from_rfc3339(&row.timestamp)?.with_timezone(&Utc),
            response: row.response,
            matched_knowledge: serde_json::from_str(&row.matched_knowledge)?,
            feedback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get_query() {
        let db = Database::open_in_memory().unwrap();
        let mut query = UserQuery::new(
            "Mans suns klepo".into(),
            Language::Lv,
            PetSpecies::GuineaPig,
            "response".into(),
        );
        query.matched_knowledge = vec!["digestive-issues".into()];
        db.insert_query(&query).unwrap();

        let retrieved = db.get_query(&query.id).unwrap().unwrap();
        assert_eq!(retrieved.query, "Mans suns klepo");
        assert_eq!(retrieved.species, PetSpecies::GuineaPig);
        assert_eq!(retrieved.matched_knowledge, vec!["digestive-issues".to_string()]);
        assert!(retrieved.feedback.is_none());
        assert_eq!(db.count_queries().unwrap(), 1);
    }

    #[test]
    fn test_query_feedback() {
        let db = Database::open_in_memory().unwrap();
        let query = UserQuery::new("q".into(), Language::En, PetSpecies::Cat, "r".into());
        db.insert_query(&query).unwrap();

        assert!(db.set_query_feedback(&query.id, Feedback::NotHelpful).unwrap());
        assert!(!db.set_query_feedback("missing", Feedback::Helpful).unwrap());

        let retrieved = db.get_query(&query.id).unwrap().unwrap();
        assert_eq!(retrieved.feedback, Some(Feedback::NotHelpful));
    }

    #[test]
    fn test_common_query_counter() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.bump_common_query("dog vomiting").unwrap(), 1);
        assert_eq!(db.bump_common_query("cat itching").unwrap(), 1);
        assert_eq!(db.bump_common_query("cat itching").unwrap(), 2);

        let top = db.top_common_queries(10).unwrap();
        assert_eq!(top[0], ("cat itching".to_string(), 2));
        assert_eq!(top.len(), 2);

        assert_eq!(db.top_common_queries(1).unwrap().len(), 1);
    }
}
