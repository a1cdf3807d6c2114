//! Business card data models: recognized fragments, extracted fields and
//! persisted card records.

use serde::{Deserialize, Serialize};

/// Separator used when a list field is flattened into a single column.
pub const LIST_SEPARATOR: &str = ", ";

/// One unit of recognized text with its position on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Recognized text content.
    pub text: String,

    /// Bounding box coordinates (x1, y1, x2, y2, x3, y3, x4, y4) for quadrilateral.
    pub bbox: [f32; 8],

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl Fragment {
    /// Create a fragment with no position information.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bbox: [0.0; 8],
            confidence: 1.0,
        }
    }

    /// Set the bounding box.
    pub fn with_bbox(mut self, bbox: [f32; 8]) -> Self {
        self.bbox = bbox;
        self
    }

    /// Set the confidence score.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Get the axis-aligned bounding rectangle (min_x, min_y, max_x, max_y).
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Structured contact fields extracted from a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Text of the first fragment.
    pub holder_name: Option<String>,

    /// Text of the second fragment.
    pub designation: Option<String>,

    /// Fragments not claimed by any other field, space-joined.
    pub company_name: String,

    /// Address lines, space-joined in collection order.
    pub address: String,

    /// Email fragments in card order.
    pub emails: Vec<String>,

    /// Phone fragments in card order.
    pub phones: Vec<String>,

    /// Website matches found in the aggregate text.
    pub websites: Vec<String>,

    /// Raw address lines as collected. These may also appear in `phones`.
    pub address_lines: Vec<String>,
}

/// Insert payload for the record store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCard {
    pub company_name: String,
    pub card_holder_name: Option<String>,
    pub designation: Option<String>,
    pub mobile_numbers: Option<String>,
    pub email_addresses: Option<String>,
    pub website_url: Option<String>,
    pub area: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    pub image: Vec<u8>,
}

impl NewCard {
    /// Flatten an extraction result into storable columns.
    ///
    /// City, state and pin code are not derived by the extractor and stay unset.
    pub fn from_extraction(result: &ExtractionResult, image: &[u8]) -> Self {
        Self {
            company_name: result.company_name.clone(),
            card_holder_name: result.holder_name.clone(),
            designation: result.designation.clone(),
            mobile_numbers: join_list(&result.phones),
            email_addresses: join_list(&result.emails),
            website_url: join_list(&result.websites),
            area: result.address.clone(),
            city: None,
            state: None,
            pin_code: None,
            image: image.to_vec(),
        }
    }
}

/// A card as persisted by the record store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: i64,
    pub company_name: Option<String>,
    pub card_holder_name: Option<String>,
    pub designation: Option<String>,
    pub mobile_numbers: Option<String>,
    pub email_addresses: Option<String>,
    pub website_url: Option<String>,
    pub area: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    #[serde(skip)]
    pub image: Vec<u8>,
}

impl CardRecord {
    /// Stored mobile numbers as a list.
    pub fn phones(&self) -> Vec<String> {
        split_list(self.mobile_numbers.as_deref())
    }

    /// Stored email addresses as a list.
    pub fn emails(&self) -> Vec<String> {
        split_list(self.email_addresses.as_deref())
    }

    /// Stored website URLs as a list.
    pub fn websites(&self) -> Vec<String> {
        split_list(self.website_url.as_deref())
    }
}

/// Replacement values for every editable column of a card.
///
/// Fields left as `None` are stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardUpdate {
    pub company_name: Option<String>,
    pub card_holder_name: Option<String>,
    pub designation: Option<String>,
    pub mobile_numbers: Option<String>,
    pub email_addresses: Option<String>,
    pub website_url: Option<String>,
    pub area: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
}

/// Join a list field for storage. Empty lists are stored as NULL.
pub fn join_list(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(LIST_SEPARATOR))
    }
}

/// Split a stored list column back into its items.
pub fn split_list(column: Option<&str>) -> Vec<String> {
    column
        .map(|s| {
            s.split(',')
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
