//! SQLite-backed saved-application store
//!
//! Each application is one row holding its JSON record. Rows are listed in
//! insertion order.

use chrono::Utc;
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};
use std::path::{Path, PathBuf};

use super::key::app_id;
use crate::error::StoreError;
use crate::schema::{AppCategory, ApplicationStructure, SavedApplication};

/// Schema version stamped into `PRAGMA user_version`
const SCHEMA_VERSION: i32 = 1;

type Result<T> = std::result::Result<T, StoreError>;

/// Persistent collection of saved applications
pub struct AppStore {
    conn: Connection,
}

impl AppStore {
    /// Open or create the store at the default data location
    pub fn open() -> Result<Self> {
        Self::open_file(&Self::default_path()?)
    }

    /// Default database path (`<data_dir>/appforge/apps.db`)
    pub fn default_path() -> Result<PathBuf> {
        let data_base = dirs::data_dir().ok_or(StoreError::NoHome)?;
        Ok(data_base.join("appforge").join("apps.db"))
    }

    /// Open or create the store at a specific database file
    pub fn open_file(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Io(format!("Failed to create store dir: {}", e)))?;
        }

        let conn = Connection::open(db_path)?;

        let version: i32 = conn.pragma_query_value(None, "user_version", |r| r.get(0))?;

        // 0 is a fresh file; anything else we don't know is left untouched.
        if version != 0 && version != SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema(version, SCHEMA_VERSION));
        }

        Self::init(conn)
    }

    /// Open a throwaway in-memory store
    pub fn in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS apps (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                data TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self { conn })
    }

    /// All saved applications, oldest first
    pub fn list(&self) -> Result<Vec<SavedApplication>> {
        let mut stmt = self.conn.prepare("SELECT id, data FROM apps ORDER BY seq")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;

        let mut apps = Vec::new();
        for row in rows {
            let (id, data) = row?;
            apps.push(decode(&id, &data)?);
        }
        Ok(apps)
    }

    /// Find an application by id
    pub fn find(&self, id: &str) -> Result<Option<SavedApplication>> {
        let data: Option<String> = self
            .conn
            .query_row("SELECT data FROM apps WHERE id = ?1", [id], |r| r.get(0))
            .optional()?;

        data.map(|data| decode(id, &data)).transpose()
    }

    /// Get an application by id, failing when absent
    pub fn get(&self, id: &str) -> Result<SavedApplication> {
        self.find(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Insert a new record
    pub fn insert(&self, app: &SavedApplication) -> Result<()> {
        let data = encode(app)?;
        let inserted = self.conn.execute(
            "INSERT INTO apps (id, name, data, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                app.id,
                app.name,
                data,
                app.created_at.timestamp_millis(),
                app.updated_at.timestamp_millis()
            ],
        );

        match inserted {
            Ok(_) => {
                log::debug!("Inserted app {}", app.id);
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(StoreError::Duplicate(app.id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Build, id and insert a new application
    pub fn create(
        &self,
        name: &str,
        category: AppCategory,
        template_id: &str,
        prompt: &str,
        structure: ApplicationStructure,
    ) -> Result<SavedApplication> {
        let id = app_id(name, Utc::now());
        let app = SavedApplication::new(id, name, category, template_id, prompt, structure);
        self.insert(&app)?;
        Ok(app)
    }

    /// Apply an edit to a fresh copy, stamp it and persist the whole record
    pub fn update<F>(&self, id: &str, edit: F) -> Result<SavedApplication>
    where
        F: FnOnce(&mut SavedApplication),
    {
        let mut app = self.get(id)?;
        edit(&mut app);
        app.id = id.to_string();
        app.updated_at = Utc::now();
        self.write(&app)?;
        Ok(app)
    }

    /// Replace a record wholesale, keeping its id and creation time
    pub fn replace(&self, id: &str, mut app: SavedApplication) -> Result<SavedApplication> {
        let existing = self.get(id)?;
        app.id = existing.id;
        app.created_at = existing.created_at;
        app.updated_at = Utc::now();
        self.write(&app)?;
        Ok(app)
    }

    /// Delete a record, returning whether one was removed
    pub fn delete(&self, id: &str) -> Result<bool> {
        let deleted = self.conn.execute("DELETE FROM apps WHERE id = ?1", [id])?;
        if deleted > 0 {
            log::debug!("Deleted app {}", id);
        }
        Ok(deleted > 0)
    }

    /// Number of saved applications
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM apps", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    fn write(&self, app: &SavedApplication) -> Result<()> {
        let data = encode(app)?;
        let changed = self.conn.execute(
            "UPDATE apps SET name = ?2, data = ?3, updated_at = ?4 WHERE id = ?1",
            params![app.id, app.name, data, app.updated_at.timestamp_millis()],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(app.id.clone()));
        }
        log::debug!("Updated app {}", app.id);
        Ok(())
    }
}

fn encode(app: &SavedApplication) -> Result<String> {
    serde_json::to_string(app).map_err(|e| StoreError::Corrupt(app.id.clone(), e.to_string()))
}

fn decode(id: &str, data: &str) -> Result<SavedApplication> {
    serde_json::from_str(data).map_err(|e| StoreError::Corrupt(id.to_string(), e.to_string()))
}
