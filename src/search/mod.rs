pub mod criteria;
pub mod normalize;
pub mod query;

pub use criteria::{quick_search_query, BedroomFilter, Criteria, RawCriteria, SortMode};
pub use normalize::normalize;
pub use query::{query, FavoriteIds};
