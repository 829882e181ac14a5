use rusqlite::{Connection, Result as SqlResult};
use std::path::{Path, PathBuf};

use super::data::Label;

/// The Catalog wraps the SQLite database holding the labels table.
/// The table itself is created and populated elsewhere; this adapter
/// only evolves the schema with the image_path column, reads rows that
/// still need a path, and writes paths back.
pub struct Catalog {
    conn: Connection,
    db_path: PathBuf,
}

impl Catalog {
    /// Open the catalog database and make sure the image_path column exists
    pub fn open(db_path: &Path) -> SqlResult<Self> {
        let conn = Connection::open(db_path)?;

        println!("📁 Catalog opened at: {}", db_path.display());

        let catalog = Catalog {
            conn,
            db_path: db_path.to_path_buf(),
        };
        catalog.ensure_image_path_column();

        Ok(catalog)
    }

    /// Add the image_path column if it doesn't exist (for existing catalogs).
    /// This is safe - if the column exists, the ALTER will be silently ignored.
    fn ensure_image_path_column(&self) {
        let _ = self
            .conn
            .execute("ALTER TABLE labels ADD COLUMN image_path TEXT", []);
    }

    /// Fetch rows without an image path, ordered by (book, page, id).
    ///
    /// The ordering is load-bearing: the allocator consumes candidates for
    /// each page in this exact sequence, so it must be stable across runs.
    pub fn fetch_unassigned(&self) -> SqlResult<Vec<Label>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, book, page
             FROM labels
             WHERE image_path IS NULL OR image_path = ''
             ORDER BY book, page, id",
        )?;

        let label_iter = stmt.query_map([], |row| {
            Ok(Label {
                id: row.get(0)?,
                book: row.get(1)?,
                page: row.get(2)?,
            })
        })?;

        let mut labels = Vec::new();
        for label in label_iter {
            labels.push(label?);
        }

        Ok(labels)
    }

    /// Write the image path for one row. Autocommit, so a later failure
    /// leaves this write in place.
    pub fn set_image_path(&self, id: i64, path: &str) -> SqlResult<()> {
        self.conn.execute(
            "UPDATE labels SET image_path = ?1 WHERE id = ?2",
            rusqlite::params![path, id],
        )?;
        Ok(())
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("db_path", &self.db_path)
            .finish()
    }
}
