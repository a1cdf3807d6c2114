//! Database schema initialization.

use super::{CardStore, Result};

impl CardStore {
    /// Ensure the `cards` table exists. Safe to call repeatedly.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS cards (
                id INTEGER PRIMARY KEY,
                company_name TEXT,
                card_holder_name TEXT,
                designation TEXT,
                mobile_numbers TEXT,
                email_addresses TEXT,
                website_url TEXT,
                area TEXT,
                city TEXT,
                state TEXT,
                pin_code TEXT,
                image BLOB
            );
            "#,
        )?;
        Ok(())
    }
}
