//! Repository abstraction over knowledge and query history storage.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::KnowledgeResult;
use crate::db::Database;
use crate::models::{Feedback, KnowledgeRecord, UserQuery};

/// Storage backend for the knowledge base.
///
/// Records keep insertion order; `records()` returns them in that order.
pub trait KnowledgeStore {
    fn records(&self) -> KnowledgeResult<Vec<KnowledgeRecord>>;

    fn get_record(&self, id: &str) -> KnowledgeResult<Option<KnowledgeRecord>>;

    /// Insert a new record or replace the one with the same id.
    fn put_record(&mut self, record: &KnowledgeRecord) -> KnowledgeResult<()>;

    fn record_count(&self) -> KnowledgeResult<usize>;

    /// Overwrite a record's confidence and timestamp. Returns false when the id is unknown.
    fn set_confidence(
        &mut self,
        id: &str,
        confidence: f64,
        updated_at: DateTime<Utc>,
    ) -> KnowledgeResult<bool>;

    fn insert_query(&mut self, query: &UserQuery) -> KnowledgeResult<()>;

    fn get_query(&self, id: &str) -> KnowledgeResult<Option<UserQuery>>;

    /// Returns false when the query id is unknown.
    fn set_query_feedback(&mut self, id: &str, feedback: Feedback) -> KnowledgeResult<bool>;

    fn query_count(&self) -> KnowledgeResult<usize>;

    /// Increment the counter for a normalized query text, returning the new count.
    fn bump_common_query(&mut self, key: &str) -> KnowledgeResult<u32>;

    /// Highest counts first; ties keep first-seen order.
    fn top_common_queries(&self, limit: usize) -> KnowledgeResult<Vec<(String, u32)>>;
}

/// Process-memory store. Everything is lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<KnowledgeRecord>,
    queries: Vec<UserQuery>,
    /// (key, count) in first-seen order
    common_queries: Vec<(String, u32)>,
    common_index: HashMap<String, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KnowledgeStore for MemoryStore {
    fn records(&self) -> KnowledgeResult<Vec<KnowledgeRecord>> {
        Ok(self.records.clone())
    }

    fn get_record(&self, id: &str) -> KnowledgeResult<Option<KnowledgeRecord>> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }

    fn put_record(&mut self, record: &KnowledgeRecord) -> KnowledgeResult<()> {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => self.records.push(record.clone()),
        }
        Ok(())
    }

    fn record_count(&self) -> KnowledgeResult<usize> {
        Ok(self.records.len())
    }

    fn set_confidence(
        &mut self,
        id: &str,
        confidence: f64,
        updated_at: DateTime<Utc>,
    ) -> KnowledgeResult<bool> {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.confidence = confidence;
                record.last_updated = updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn insert_query(&mut self, query: &UserQuery) -> KnowledgeResult<()> {
        self.queries.push(query.clone());
        Ok(())
    }

    fn get_query(&self, id: &str) -> KnowledgeResult<Option<UserQuery>> {
        Ok(self.queries.iter().find(|q| q.id == id).cloned())
    }

    fn set_query_feedback(&mut self, id: &str, feedback: Feedback) -> KnowledgeResult<bool> {
        match self.queries.iter_mut().find(|q| q.id == id) {
            Some(query) => {
                query.feedback = Some(feedback);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn query_count(&self) -> KnowledgeResult<usize> {
        Ok(self.queries.len())
    }

    fn bump_common_query(&mut self, key: &str) -> KnowledgeResult<u32> {
        let idx = match self.common_index.get(key) {
            Some(&idx) => idx,
            None => {
                self.common_queries.push((key.to_string(), 0));
                let idx = self.common_queries.len() - 1;
                self.common_index.insert(key.to_string(), idx);
                idx
            }
        };
        let entry = &mut self.common_queries[idx];
        entry.1 += 1;
        Ok(entry.1)
    }

    fn top_common_queries(&self, limit: usize) -> KnowledgeResult<Vec<(String, u32)>> {
        let mut sorted = self.common_queries.clone();
        // Stable sort keeps first-seen order among equal counts
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(limit);
        Ok(sorted)
    }
}

impl KnowledgeStore for Database {
    fn records(&self) -> KnowledgeResult<Vec<KnowledgeRecord>> {
        Ok(self.list_knowledge()?)
    }

    fn get_record(&self, id: &str) -> KnowledgeResult<Option<KnowledgeRecord>> {
        Ok(self.get_knowledge(id)?)
    }

    fn put_record(&mut self, record: &KnowledgeRecord) -> KnowledgeResult<()> {
        Ok(self.upsert_knowledge(record)?)
    }

    fn record_count(&self) -> KnowledgeResult<usize> {
        Ok(self.count_knowledge()?)
    }

    fn set_confidence(
        &mut self,
        id: &str,
        confidence: f64,
        updated_at: DateTime<Utc>,
    ) -> KnowledgeResult<bool> {
        Ok(self.set_knowledge_confidence(id, confidence, updated_at)?)
    }

    fn insert_query(&mut self, query: &UserQuery) -> KnowledgeResult<()> {
        Ok(Database::insert_query(self, query)?)
    }

    fn get_query(&self, id: &str) -> KnowledgeResult<Option<UserQuery>> {
        Ok(Database::get_query(self, id)?)
    }

    fn set_query_feedback(&mut self, id: &str, feedback: Feedback) -> KnowledgeResult<bool> {
        Ok(Database::set_query_feedback(self, id, feedback)?)
    }

    fn query_count(&self) -> KnowledgeResult<usize> {
        Ok(self.count_queries()?)
    }

    fn bump_common_query(&mut self, key: &str) -> KnowledgeResult<u32> {
        Ok(Database::bump_common_query(self, key)?)
    }

    fn top_common_queries(&self, limit: usize) -> KnowledgeResult<Vec<(String, u32)>> {
        Ok(Database::top_common_queries(self, limit)?)
    }
}

/// Type-erased store chosen at runtime (memory or SQLite).
pub type DynStore = Box<dyn KnowledgeStore + Send>;

impl<S: KnowledgeStore + ?Sized> KnowledgeStore for Box<S> {
    fn records(&self) -> KnowledgeResult<Vec<KnowledgeRecord>> {
        (**self).records()
    }

    fn get_record(&self, id: &str) -> KnowledgeResult<Option<KnowledgeRecord>> {
        (**self).get_record(id)
    }

    fn put_record(&mut self, record: &KnowledgeRecord) -> KnowledgeResult<()> {
        (**self).put_record(record)
    }

    fn record_count(&self) -> KnowledgeResult<usize> {
        (**self).record_count()
    }

    fn set_confidence(
        &mut self,
        id: &str,
        confidence: f64,
        updated_at: DateTime<Utc>,
    ) -> KnowledgeResult<bool> {
        (**self).set_confidence(id, confidence, updated_at)
    }

    fn insert_query(&mut self, query: &UserQuery) -> KnowledgeResult<()> {
        (**self).insert_query(query)
    }

    fn get_query(&self, id: &str) -> KnowledgeResult<Option<UserQuery>> {
        (**self).get_query(id)
    }

    fn set_query_feedback(&mut self, id: &str, feedback: Feedback) -> KnowledgeResult<bool> {
        (**self).set_query_feedback(id, feedback)
    }

    fn query_count(&self) -> KnowledgeResult<usize> {
        (**self).query_count()
    }

    fn bump_common_query(&mut self, key: &str) -> KnowledgeResult<u32> {
        (**self).bump_common_query(key)
    }

    fn top_common_queries(&self, limit: usize) -> KnowledgeResult<Vec<(String, u32)>> {
        (**self).top_common_queries(limit)
    }
}
