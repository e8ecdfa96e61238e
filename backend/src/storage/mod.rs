//! # Lead Store
//!
//! SQLite persistence for submitted leads. The store owns a single connection
//! behind a mutex; every write is one `INSERT` statement, so a lead is either
//! stored completely or not at all.
//!
//! Opening a store:
//! - creates the database's parent directory when it is missing,
//! - switches the journal to WAL,
//! - creates the `leads` table, and adds the `email` column to databases that
//!   were created before it existed.

use common::model::lead::LeadField;
use log::info;
use rusqlite::{params_from_iter, Connection};
use std::path::Path;
use std::sync::{LazyLock, Mutex};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection lock poisoned")]
    Poisoned,
}

const CREATE_LEADS: &str = "
    CREATE TABLE IF NOT EXISTS leads (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        phone TEXT NOT NULL,
        email TEXT,
        city TEXT,
        expected_return_date TEXT,
        cleaning_plan TEXT,
        professional_cleaning_clause TEXT,
        source_page TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )";

/// `INSERT` over every `LeadField` column, with positional parameters in
/// `LeadField::ALL` order.
static INSERT_LEAD: LazyLock<String> = LazyLock::new(|| {
    let columns: Vec<_> = LeadField::ALL.iter().map(|f| f.column()).collect();
    let placeholders: Vec<_> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT INTO leads ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    )
});

#[cfg(test)]
static SELECT_LEAD: LazyLock<String> = LazyLock::new(|| {
    let columns: Vec<_> = LeadField::ALL
        .iter()
        .map(|f| format!("COALESCE({}, '')", f.column()))
        .collect();
    format!(
        "SELECT id, {}, created_at FROM leads WHERE id = ?1",
        columns.join(", ")
    )
});

/// A sanitized lead that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub expected_return_date: String,
    pub cleaning_plan: String,
    pub professional_cleaning_clause: String,
    pub source_page: String,
}

impl NewLead {
    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Phone => &self.phone,
            LeadField::Email => &self.email,
            LeadField::City => &self.city,
            LeadField::ExpectedReturnDate => &self.expected_return_date,
            LeadField::CleaningPlan => &self.cleaning_plan,
            LeadField::ProfessionalCleaningClause => &self.professional_cleaning_clause,
            LeadField::SourcePage => &self.source_page,
        }
    }
}

/// A stored row, as read back by tests.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLead {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub expected_return_date: String,
    pub cleaning_plan: String,
    pub professional_cleaning_clause: String,
    pub source_page: String,
    /// `YYYY-MM-DD HH:MM:SS` in UTC, assigned by SQLite at insert time.
    pub created_at: String,
}

pub struct LeadStore {
    conn: Mutex<Connection>,
}

impl LeadStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        info!("Opened lead store at {} (journal_mode={})", path.display(), mode);
        Self::with_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::Poisoned)
    }

    /// Inserts one lead and returns its new id.
    pub fn insert(&self, lead: &NewLead) -> Result<i64, StorageError> {
        let conn = self.lock()?;
        conn.execute(
            &INSERT_LEAD,
            params_from_iter(LeadField::ALL.map(|field| lead.value(field))),
        )?;
        Ok(conn.last_insert_rowid())
    }

    #[cfg(test)]
    pub fn find(&self, id: i64) -> Result<Option<StoredLead>, StorageError> {
        use rusqlite::{params, OptionalExtension};

        let conn = self.lock()?;
        let lead = conn
            .query_row(&SELECT_LEAD, params![id], |row| {
                Ok(StoredLead {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    phone: row.get(2)?,
                    email: row.get(3)?,
                    city: row.get(4)?,
                    expected_return_date: row.get(5)?,
                    cleaning_plan: row.get(6)?,
                    professional_cleaning_clause: row.get(7)?,
                    source_page: row.get(8)?,
                    created_at: row.get(9)?,
                })
            })
            .optional()?;
        Ok(lead)
    }

    pub fn count(&self) -> Result<i64, StorageError> {
        let conn = self.lock()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM leads", [], |row| row.get(0))?)
    }

    /// Drops the `leads` table so the next insert fails.
    #[cfg(test)]
    pub(crate) fn break_schema(&self) {
        self.lock()
            .unwrap()
            .execute_batch("DROP TABLE leads")
            .unwrap();
    }
}

fn migrate(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(CREATE_LEADS)?;

    let has_email = conn
        .prepare("SELECT 1 FROM pragma_table_info('leads') WHERE name = 'email'")?
        .exists([])?;
    if !has_email {
        info!("Adding missing email column to leads");
        conn.execute_batch("ALTER TABLE leads ADD COLUMN email TEXT")?;
    }
    Ok(())
}
