//! SQLite schema definition.

/// Complete database schema for the advice engine.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Knowledge Base
-- ============================================================================

CREATE TABLE IF NOT EXISTS knowledge_records (
    id TEXT PRIMARY KEY,
    symptoms TEXT NOT NULL DEFAULT '[]',          -- JSON array of strings
    conditions TEXT NOT NULL DEFAULT '[]',        -- JSON array of strings
    treatments TEXT NOT NULL DEFAULT '[]',        -- JSON array of strings
    medicine_ids TEXT NOT NULL DEFAULT '[]',      -- JSON array of catalog ids
    species TEXT NOT NULL DEFAULT '[]',           -- JSON array of species wire names
    urgency TEXT NOT NULL CHECK (urgency IN ('low', 'medium', 'high', 'emergency')),
    confidence REAL NOT NULL CHECK (confidence >= 0.0 AND confidence <= 1.0),
    sources TEXT NOT NULL DEFAULT '[]',           -- JSON array of strings
    last_updated TEXT NOT NULL,                   -- RFC 3339
    seq INTEGER NOT NULL DEFAULT 0                -- insertion order
);

CREATE INDEX IF NOT EXISTS idx_knowledge_seq ON knowledge_records(seq);

-- ============================================================================
-- Query History
-- ============================================================================

CREATE TABLE IF NOT EXISTS user_queries (
    id TEXT PRIMARY KEY,
    query TEXT NOT NULL,
    language TEXT NOT NULL CHECK (language IN ('lv', 'ru', 'en')),
    species TEXT NOT NULL,
    timestamp TEXT NOT NULL,                      -- RFC 3339
    response TEXT NOT NULL,
    matched_knowledge TEXT NOT NULL DEFAULT '[]', -- JSON array of knowledge ids
    feedback TEXT CHECK (feedback IS NULL OR feedback IN ('helpful', 'not_helpful'))
);

CREATE INDEX IF NOT EXISTS idx_queries_timestamp ON user_queries(timestamp);

-- Normalized query text -> times asked
CREATE TABLE IF NOT EXISTS common_queries (
    query_key TEXT PRIMARY KEY,
    count INTEGER NOT NULL DEFAULT 0
);
"#;
