//! Basic CRUD operations for cards.

use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

use super::{CardStore, Result};
use crate::models::card::{CardRecord, CardUpdate, ExtractionResult, NewCard};

const SELECT_CARDS: &str = "SELECT id, company_name, card_holder_name, designation, \
     mobile_numbers, email_addresses, website_url, area, city, state, pin_code, image \
     FROM cards";

impl CardStore {
    /// Persist an extraction result with its image. Returns the assigned id.
    pub fn insert(&self, result: &ExtractionResult, image: &[u8]) -> Result<i64> {
        self.insert_card(&NewCard::from_extraction(result, image))
    }

    /// Persist a prepared card row. Returns the assigned id.
    pub fn insert_card(&self, card: &NewCard) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO cards (company_name, card_holder_name, designation, mobile_numbers, \
             email_addresses, website_url, area, city, state, pin_code, image) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                card.company_name,
                card.card_holder_name,
                card.designation,
                card.mobile_numbers,
                card.email_addresses,
                card.website_url,
                card.area,
                card.city,
                card.state,
                card.pin_code,
                card.image,
            ],
        )?;

        let id = conn.last_insert_rowid();
        info!("Stored card {} ({} image bytes)", id, card.image.len());
        Ok(id)
    }

    /// Get all cards ordered by id.
    pub fn fetch_all(&self) -> Result<Vec<CardRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_CARDS))?;
        let cards = stmt
            .query_map([], row_to_card)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Fetched {} cards", cards.len());
        Ok(cards)
    }

    /// Get a card by id.
    pub fn get(&self, id: i64) -> Result<Option<CardRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", SELECT_CARDS))?;
        let card = stmt.query_row(params![id], row_to_card).optional()?;
        Ok(card)
    }

    /// Count stored cards.
    pub fn count(&self) -> Result<u64> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM cards", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Overwrite every editable column of card `id`.
    ///
    /// Succeeds without changes when no card has that id.
    pub fn update(&self, id: i64, fields: &CardUpdate) -> Result<()> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE cards SET company_name = ?1, card_holder_name = ?2, designation = ?3, \
             mobile_numbers = ?4, email_addresses = ?5, website_url = ?6, area = ?7, \
             city = ?8, state = ?9, pin_code = ?10 WHERE id = ?11",
            params![
                fields.company_name,
                fields.card_holder_name,
                fields.designation,
                fields.mobile_numbers,
                fields.email_addresses,
                fields.website_url,
                fields.area,
                fields.city,
                fields.state,
                fields.pin_code,
                id,
            ],
        )?;

        debug!("Update of card {} touched {} rows", id, changed);
        Ok(())
    }

    /// Delete card `id`. Succeeds without changes when it does not exist.
    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM cards WHERE id = ?1", params![id])?;

        debug!("Delete of card {} touched {} rows", id, changed);
        Ok(())
    }
}

fn row_to_card(row: &Row<'_>) -> rusqlite::Result<CardRecord> {
    Ok(CardRecord {
        id: row.get("id")?,
        company_name: row.get("company_name")?,
        card_holder_name: row.get("card_holder_name")?,
        designation: row.get("designation")?,
        mobile_numbers: row.get("mobile_numbers")?,
        email_addresses: row.get("email_addresses")?,
        website_url: row.get("website_url")?,
        area: row.get("area")?,
        city: row.get("city")?,
        state: row.get("state")?,
        pin_code: row.get("pin_code")?,
        image: row.get::<_, Option<Vec<u8>>>("image")?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardExtractor, RuleCardParser};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, CardStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CardStore::open(&dir.path().join("cards.db")).unwrap();
        (dir, store)
    }

    fn sample_result() -> ExtractionResult {
        RuleCardParser::new().extract_from_lines(&[
            "John Doe",
            "Senior Engineer",
            "Acme Corp",
            "www.acme.com",
            "john@acme.com",
            "sales@acme.com",
            "+1-415-555-0100",
            "98765-43210",
            "123 Main St,",
        ])
    }

    #[test]
    fn test_insert_and_fetch_roundtrip() {
        let (_dir, store) = open_store();
        let result = sample_result();

        let id = store.insert(&result, b"\x89PNG").unwrap();
        let cards = store.fetch_all().unwrap();

        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.id, id);
        assert_eq!(card.company_name.as_deref(), Some("Acme Corp"));
        assert_eq!(card.card_holder_name.as_deref(), Some("John Doe"));
        assert_eq!(card.designation.as_deref(), Some("Senior Engineer"));
        assert_eq!(card.emails(), result.emails);
        assert_eq!(card.phones(), result.phones);
        assert_eq!(card.websites(), result.websites);
        assert_eq!(card.area.as_deref(), Some("123 Main St,"));
        assert_eq!(card.city, None);
        assert_eq!(card.state, None);
        assert_eq!(card.pin_code, None);
        assert_eq!(card.image, b"\x89PNG".to_vec());
    }

    #[test]
    fn test_ids_are_monotonic() {
        let (_dir, store) = open_store();
        let result = sample_result();

        let first = store.insert(&result, &[]).unwrap();
        let second = store.insert(&result, &[]).unwrap();

        assert!(second > first);
        let ids: Vec<i64> = store.fetch_all().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_empty_lists_stored_as_null() {
        let (_dir, store) = open_store();
        let result = RuleCardParser::new().extract_from_lines(&["Jane Roe"]);

        let id = store.insert(&result, &[]).unwrap();
        let card = store.get(id).unwrap().unwrap();

        assert_eq!(card.mobile_numbers, None);
        assert_eq!(card.email_addresses, None);
        assert_eq!(card.website_url, None);
        assert_eq!(card.designation, None);
        assert_eq!(card.company_name.as_deref(), Some(""));
        assert!(card.phones().is_empty());
    }

    #[test]
    fn test_update_overwrites_editable_columns() {
        let (_dir, store) = open_store();
        let id = store.insert(&sample_result(), b"img").unwrap();

        let fields = CardUpdate {
            company_name: Some("Globex".to_string()),
            card_holder_name: Some("Hank Scorpio".to_string()),
            city: Some("Cypress Creek".to_string()),
            ..CardUpdate::default()
        };
        store.update(id, &fields).unwrap();

        let card = store.get(id).unwrap().unwrap();
        assert_eq!(card.company_name.as_deref(), Some("Globex"));
        assert_eq!(card.card_holder_name.as_deref(), Some("Hank Scorpio"));
        assert_eq!(card.city.as_deref(), Some("Cypress Creek"));
        assert_eq!(card.designation, None);
        assert_eq!(card.email_addresses, None);
        assert_eq!(card.image, b"img".to_vec());
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let (_dir, store) = open_store();
        store.insert(&sample_result(), &[]).unwrap();
        let before = store.fetch_all().unwrap();

        let fields = CardUpdate {
            company_name: Some("Nobody".to_string()),
            ..CardUpdate::default()
        };
        store.update(9_999, &fields).unwrap();

        assert_eq!(store.fetch_all().unwrap(), before);
    }

    #[test]
    fn test_delete() {
        let (_dir, store) = open_store();
        let keep = store.insert(&sample_result(), &[]).unwrap();
        let gone = store.insert(&sample_result(), &[]).unwrap();

        store.delete(gone).unwrap();

        assert_eq!(store.count().unwrap(), 1);
        assert!(store.get(gone).unwrap().is_none());
        assert!(store.get(keep).unwrap().is_some());
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let (_dir, store) = open_store();
        store.insert(&sample_result(), &[]).unwrap();

        store.delete(42).unwrap();

        assert_eq!(store.count().unwrap(), 1);
    }
}
