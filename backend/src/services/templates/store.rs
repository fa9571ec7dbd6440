//! Template registry access.
//!
//! The registry is a single SQLite table mapping a template id to its
//! display name and the front/back markup. It is seeded once at startup
//! with the built-in card designs and is read-only from the rendering
//! pipeline's perspective; every handler opens its own short-lived
//! connection against the configured database path.

use common::model::template::{Template, TemplateSummary};
use log::info;
use rusqlite::{params, Connection};

/// Built-in designs inserted when the registry is empty.
/// (name, front markup, back markup)
const SEED_TEMPLATES: [(&str, &str, &str); 2] = [
    (
        "Onyx",
        r#"<div class="card card-onyx" style="background:#101014;color:#e8e6e3;">
  <div class="card-accent" style="background:#c9a227;"></div>
  <div class="card-name">{{fullName}}</div>
  <div class="card-title">{{jobTitle}}</div>
  <div class="card-qr">{{qrCode}}</div>
</div>"#,
        r#"<div class="card card-onyx card-back" style="background:#101014;color:#e8e6e3;">
  <img class="card-logo" src="{{bannerImage}}" alt=""/>
  <div class="card-line">{{email}}</div>
  <div class="card-line">{{phoneNumber}}</div>
  <div class="card-line">{{address}}</div>
  <div class="card-line">{{website}}</div>
</div>"#,
    ),
    (
        "Brushed Steel",
        r#"<div class="card card-steel" style="background:linear-gradient(135deg,#8e9196,#b7babf);color:#16181d;">
  <img class="card-photo" src="{{profileImage}}" alt=""/>
  <div class="card-name">{{fullName}}</div>
  <div class="card-title">{{jobTitle}} · {{organization}}</div>
  <div class="card-qr">{{qrCode}}</div>
</div>"#,
        r#"<div class="card card-steel card-back" style="background:linear-gradient(135deg,#8e9196,#b7babf);color:#16181d;">
  <div class="card-line">{{email}}</div>
  <div class="card-line">{{phoneNumber}}</div>
  <div class="card-line">{{address}}</div>
</div>"#,
    ),
];

/// Creates the registry table if needed and seeds the built-in designs
/// into an empty registry. Called once from `main`.
pub fn ensure_registry(db_path: &str) -> Result<(), String> {
    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;
    ensure_registry_conn(&conn)
}

pub(crate) fn ensure_registry_conn(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS templates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            front_markup TEXT NOT NULL,
            back_markup TEXT NOT NULL,
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )
    .map_err(|e| e.to_string())?;

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM templates", [], |row| row.get(0))
        .map_err(|e| e.to_string())?;

    if count == 0 {
        for (name, front, back) in SEED_TEMPLATES {
            conn.execute(
                "INSERT INTO templates (name, front_markup, back_markup) VALUES (?1, ?2, ?3)",
                params![name, front, back],
            )
            .map_err(|e| e.to_string())?;
        }
        info!("Seeded template registry with {} designs", SEED_TEMPLATES.len());
    }

    Ok(())
}

/// Fetches one template by id. `Ok(None)` means the id is not in the
/// registry; `Err` is a storage fault.
pub fn fetch_template(db_path: &str, template_id: i64) -> Result<Option<Template>, String> {
    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;
    fetch_template_conn(&conn, template_id)
}

pub(crate) fn fetch_template_conn(
    conn: &Connection,
    template_id: i64,
) -> Result<Option<Template>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, front_markup, back_markup, active, created_at, updated_at
             FROM templates WHERE id = ?1",
        )
        .map_err(|e| e.to_string())?;

    let result = stmt.query_row(params![template_id], |row| {
        Ok(Template {
            id: row.get(0)?,
            name: row.get(1)?,
            front_markup: row.get(2)?,
            back_markup: row.get(3)?,
            active: row.get::<_, i64>(4)? != 0,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    });

    match result {
        Ok(template) => Ok(Some(template)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

/// Lists the catalog entries for the template picker, active first.
pub fn list_templates(db_path: &str) -> Result<Vec<TemplateSummary>, String> {
    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;
    list_templates_conn(&conn)
}

pub(crate) fn list_templates_conn(conn: &Connection) -> Result<Vec<TemplateSummary>, String> {
    let mut stmt = conn
        .prepare("SELECT id, name, active FROM templates ORDER BY active DESC, id ASC")
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map([], |row| {
            Ok(TemplateSummary {
                id: row.get(0)?,
                name: row.get(1)?,
                active: row.get::<_, i64>(2)? != 0,
            })
        })
        .map_err(|e| e.to_string())?;

    Ok(rows.filter_map(Result::ok).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::template::CardSide;

    fn registry() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        ensure_registry_conn(&conn).unwrap();
        conn
    }

    #[test]
    fn seeds_once_and_is_idempotent() {
        let conn = registry();
        ensure_registry_conn(&conn).unwrap();
        let templates = list_templates_conn(&conn).unwrap();
        assert_eq!(templates.len(), SEED_TEMPLATES.len());
        assert!(templates.iter().all(|t| t.active));
    }

    #[test]
    fn fetch_returns_both_sides() {
        let conn = registry();
        let template = fetch_template_conn(&conn, 1).unwrap().unwrap();
        assert_eq!(template.name, "Onyx");
        assert!(template.markup_for(CardSide::Front).contains("{{fullName}}"));
        assert!(template.markup_for(CardSide::Back).contains("{{email}}"));
    }

    #[test]
    fn unknown_id_is_none_not_an_error() {
        let conn = registry();
        assert!(fetch_template_conn(&conn, 9999).unwrap().is_none());
    }
}
