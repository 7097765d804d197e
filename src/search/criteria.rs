use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Bedroom constraint of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BedroomFilter {
    #[default]
    Any,
    Exactly(u32),
    /// "4+": four or more bedrooms
    AtLeastFour,
}

impl BedroomFilter {
    /// Parse a form value. Empty, "all" and anything unreadable mean no filter.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "4+" => BedroomFilter::AtLeastFour,
            v => v.parse().map(BedroomFilter::Exactly).unwrap_or_default(),
        }
    }

    pub fn matches(&self, bedrooms: u32) -> bool {
        match self {
            BedroomFilter::Any => true,
            BedroomFilter::Exactly(n) => bedrooms == *n,
            BedroomFilter::AtLeastFour => bedrooms >= 4,
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Recent,
    PriceAsc,
    PriceDesc,
}

impl From<&str> for SortMode {
    /// Unknown names fall back to `Recent`
    fn from(value: &str) -> Self {
        match value.trim() {
            "price_asc" => SortMode::PriceAsc,
            "price_desc" => SortMode::PriceDesc,
            _ => SortMode::Recent,
        }
    }
}

/// Typed search, filter and sort parameters for one query
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub search: String,
    pub city: Option<String>,
    pub min_price: f64,
    pub max_price: f64,
    pub bedrooms: BedroomFilter,
    /// Every listed tag is required
    pub tags: Vec<String>,
    pub favorites_only: bool,
    pub sort: SortMode,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            city: None,
            min_price: 0.0,
            max_price: f64::INFINITY,
            bedrooms: BedroomFilter::Any,
            tags: Vec::new(),
            favorites_only: false,
            sort: SortMode::Recent,
        }
    }
}

/// Untyped control values, exactly as a form or command line hands them over
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCriteria {
    pub search: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub bedrooms: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub favorites_only: bool,
    pub sort: Option<String>,
}

impl RawCriteria {
    /// Prefill `search` and `city` from a listings query string such as
    /// `search=casa&city=Santos`. `city=all` leaves the city unset.
    pub fn apply_query_string(&mut self, query: &str) {
        let query = query.trim_start_matches('?');
        let Ok(url) = Url::parse(&format!("http://listing.local/?{}", query)) else {
            return;
        };
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "search" if !value.trim().is_empty() => {
                    self.search = Some(value.into_owned());
                }
                "city" if !value.is_empty() && value != "all" => {
                    self.city = Some(value.into_owned());
                }
                _ => {}
            }
        }
    }

    /// Convert into typed criteria, degrading every malformed value to
    /// "no filter on that dimension".
    pub fn into_criteria(self) -> Criteria {
        let min_price = parse_price(self.min_price.as_deref()).unwrap_or(0.0);
        // A zero upper bound reads as "unset", same as an empty field
        let max_price = parse_price(self.max_price.as_deref())
            .filter(|p| *p != 0.0)
            .unwrap_or(f64::INFINITY);

        Criteria {
            search: self.search.unwrap_or_default().trim().to_string(),
            city: self.city.filter(|c| !c.is_empty() && c != "all"),
            min_price,
            max_price,
            bedrooms: self
                .bedrooms
                .as_deref()
                .map(BedroomFilter::parse)
                .unwrap_or_default(),
            tags: self.tags.into_iter().filter(|t| !t.is_empty()).collect(),
            favorites_only: self.favorites_only,
            sort: self.sort.as_deref().map(SortMode::from).unwrap_or_default(),
        }
    }
}

/// Build the listings query string for a quick search
pub fn quick_search_query(search: &str, city: Option<&str>) -> String {
    let Ok(mut url) = Url::parse("http://listing.local/") else {
        return String::new();
    };
    {
        let mut pairs = url.query_pairs_mut();
        if !search.trim().is_empty() {
            pairs.append_pair("search", search.trim());
        }
        if let Some(city) = city.filter(|c| !c.is_empty() && *c != "all") {
            pairs.append_pair("city", city);
        }
    }
    url.query().unwrap_or_default().to_string()
}

fn parse_price(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bedroom_values() {
        assert_eq!(BedroomFilter::parse(""), BedroomFilter::Any);
        assert_eq!(BedroomFilter::parse("all"), BedroomFilter::Any);
        assert_eq!(BedroomFilter::parse("3"), BedroomFilter::Exactly(3));
        assert_eq!(BedroomFilter::parse("4+"), BedroomFilter::AtLeastFour);
        assert_eq!(BedroomFilter::parse("lots"), BedroomFilter::Any);

        assert!(BedroomFilter::AtLeastFour.matches(4));
        assert!(BedroomFilter::AtLeastFour.matches(7));
        assert!(!BedroomFilter::AtLeastFour.matches(3));
    }

    #[test]
    fn unknown_sort_is_recent() {
        assert_eq!(SortMode::from("price_asc"), SortMode::PriceAsc);
        assert_eq!(SortMode::from("price_desc"), SortMode::PriceDesc);
        assert_eq!(SortMode::from("relevance"), SortMode::Recent);
    }

    #[test]
    fn malformed_prices_fall_back() {
        let criteria = RawCriteria {
            min_price: Some("abc".into()),
            max_price: Some("".into()),
            ..Default::default()
        }
        .into_criteria();

        assert_eq!(criteria.min_price, 0.0);
        assert_eq!(criteria.max_price, f64::INFINITY);
    }

    #[test]
    fn zero_max_price_means_unbounded() {
        let criteria = RawCriteria {
            max_price: Some("0".into()),
            ..Default::default()
        }
        .into_criteria();
        assert_eq!(criteria.max_price, f64::INFINITY);
    }

    #[test]
    fn search_is_trimmed_and_city_all_ignored() {
        let criteria = RawCriteria {
            search: Some("  casa  ".into()),
            city: Some("all".into()),
            ..Default::default()
        }
        .into_criteria();

        assert_eq!(criteria.search, "casa");
        assert_eq!(criteria.city, None);
    }

    #[test]
    fn query_string_prefills_search_and_city() {
        let mut raw = RawCriteria::default();
        raw.apply_query_string("?search=s%C3%A3o+vicente&city=Santos&sort=price_asc");

        assert_eq!(raw.search.as_deref(), Some("são vicente"));
        assert_eq!(raw.city.as_deref(), Some("Santos"));
        assert_eq!(raw.sort, None);
    }

    #[test]
    fn quick_search_skips_empty_values() {
        assert_eq!(quick_search_query("", Some("all")), "");
        assert_eq!(quick_search_query("casa praia", None), "search=casa+praia");

        let mut raw = RawCriteria::default();
        raw.apply_query_string(&quick_search_query("Açaí", Some("Rio de Janeiro")));
        assert_eq!(raw.search.as_deref(), Some("Açaí"));
        assert_eq!(raw.city.as_deref(), Some("Rio de Janeiro"));
    }
}
