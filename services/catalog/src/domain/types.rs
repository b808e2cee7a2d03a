use rust_decimal::Decimal;
use uuid::Uuid;

/// The acting user, as established by the gateway identity headers.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub id: Uuid,
    pub is_staff: bool,
}

/// Catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub country: String,
    pub owner_id: Option<Uuid>,
    /// Denormalized count of relations with `in_favorites = true`.
    /// Written only by the favorite recount, never by API clients.
    pub favorite_count: Option<i32>,
}

/// First/last name projection of a user holding a relation to a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerName {
    pub first_name: String,
    pub last_name: String,
}

/// Product with its query-time aggregates and viewer projection.
#[derive(Debug, Clone)]
pub struct AnnotatedProduct {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub country: String,
    pub owner_id: Option<Uuid>,
    pub favorite_count: Option<i32>,
    /// Count of relations with `is_liked = true`.
    pub annotated_likes: i64,
    /// Mean of `rate` over rated relations; `None` when nothing is rated.
    pub rating: Option<Decimal>,
    /// Owner's username, empty when the product has no owner.
    pub owner_name: String,
    pub viewers: Vec<ViewerName>,
}

/// Fields for a new product. The owner is supplied separately and always
/// taken from the acting user.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub country: String,
}

/// Partial product update. Owner and favorite_count are not updatable.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub country: Option<String>,
}

/// Per-(user, product) like/favorite/rating record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub id: i32,
    pub user_id: Uuid,
    pub product_id: i32,
    pub is_liked: bool,
    pub in_favorites: bool,
    pub rate: Option<i16>,
}

/// Partial update to a relation.
///
/// `rate` is double-optional: outer `None` = untouched, `Some(None)` =
/// cleared to null, `Some(Some(v))` = set to `v`.
#[derive(Debug, Clone, Default)]
pub struct RelationPatch {
    pub is_liked: Option<bool>,
    pub in_favorites: Option<bool>,
    pub rate: Option<Option<i16>>,
}

impl RelationPatch {
    /// A set rate must be in 1..=5; clearing and omitting are always valid.
    pub fn is_valid(&self) -> bool {
        match self.rate {
            Some(Some(rate)) => (1..=5).contains(&rate),
            _ => true,
        }
    }
}

/// Exact-match and substring filters for product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub price: Option<Decimal>,
    /// Case-insensitive substring matched against name OR country.
    pub search: Option<String>,
}

/// Generic sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    Asc,
    Desc,
}

/// Sort options for product listing. Defaults to id ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSortBy {
    #[default]
    Id,
    Price(Sort),
    Country(Sort),
}

impl ProductSortBy {
    /// Parse an `ordering` query value; a leading '-' means descending.
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "price" => Some(Self::Price(Sort::Asc)),
            "-price" => Some(Self::Price(Sort::Desc)),
            "country" => Some(Self::Country(Sort::Asc)),
            "-country" => Some(Self::Country(Sort::Desc)),
            _ => None,
        }
    }
}

/// Validate a product price: at most 2 decimal places, at most 8 digits
/// total (|price| < 1,000,000).
pub fn validate_price(price: Decimal) -> bool {
    price.normalize().scale() <= 2 && price.abs() < Decimal::new(1_000_000, 0)
}
