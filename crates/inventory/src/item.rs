use core::convert::Infallible;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gallery_core::ItemId;

/// Sale status lifecycle of an art item.
///
/// The known states render as "For Sale", "Sold" and "Reserved". Parsing
/// compares the whole text against those names ignoring case, so persisted
/// `"sold"` and `"SOLD"` both read as [`ItemStatus::Sold`]. Any other text is
/// kept verbatim in [`ItemStatus::Other`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    #[default]
    ForSale,
    Sold,
    Reserved,
    Other(String),
}

impl ItemStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::ForSale => "For Sale",
            ItemStatus::Sold => "Sold",
            ItemStatus::Reserved => "Reserved",
            ItemStatus::Other(text) => text,
        }
    }

    pub fn is_sold(&self) -> bool {
        *self == ItemStatus::Sold
    }
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let known = [ItemStatus::ForSale, ItemStatus::Sold, ItemStatus::Reserved];
        Ok(known
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .unwrap_or_else(|| ItemStatus::Other(s.to_string())))
    }
}

impl From<String> for ItemStatus {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for ItemStatus {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<ItemStatus> for String {
    fn from(value: ItemStatus) -> Self {
        match value {
            ItemStatus::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

/// A single sellable art piece.
///
/// Field names double as the persisted record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtItem {
    item_id: ItemId,
    title: String,
    artist: String,
    year: i32,
    price: f64,
    quantity_in_stock: u32,
    #[serde(default)]
    status: ItemStatus,
}

impl ArtItem {
    /// Create an item that is up for sale.
    pub fn new(
        item_id: ItemId,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        price: f64,
        quantity_in_stock: u32,
    ) -> Self {
        Self {
            item_id,
            title: title.into(),
            artist: artist.into(),
            year,
            price,
            quantity_in_stock,
            status: ItemStatus::ForSale,
        }
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn status(&self) -> &ItemStatus {
        &self.status
    }

    /// Reduce the price by `percentage` percent.
    ///
    /// Not clamped: anything above 100 drives the price negative, and a
    /// negative percentage raises it.
    pub fn apply_discount(&mut self, percentage: f64) {
        self.price -= self.price * percentage / 100.0;
    }

    pub fn is_available(&self) -> bool {
        self.quantity_in_stock > 0
    }

    pub fn update_status(&mut self, new_status: ItemStatus) {
        self.status = new_status;
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_artist(&mut self, artist: String) {
        self.artist = artist;
    }

    pub(crate) fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub(crate) fn set_quantity_in_stock(&mut self, quantity: u32) {
        self.quantity_in_stock = quantity;
    }
}

impl core::fmt::Display for ArtItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} by {} ({}) | Price: ${:.2} | Status: {}",
            self.title, self.artist, self.year, self.price, self.status
        )
    }
}
