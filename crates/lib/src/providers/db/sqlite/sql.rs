//! # SQLite Specific SQL Queries

pub const CREATE_DOCUMENTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS documents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        stored_name TEXT NOT NULL,
        original_name TEXT NOT NULL,
        path TEXT NOT NULL,
        text_preview TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
";

pub const ALL_TABLE_CREATION_SQL: &[&str] = &[CREATE_DOCUMENTS_TABLE];

pub const INSERT_DOCUMENT: &str = "INSERT INTO documents (stored_name, original_name, path, text_preview, created_at) VALUES (?, ?, ?, ?, ?)";

