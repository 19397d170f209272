// web_app/model/listing.rs - Search filters of the product listing page

use super::SearchCriteria;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductListing {
    /// Key/name filter as typed
    pub key_filter: String,
    pub type_filter: Option<i64>,
}

impl ProductListing {
    /// Search body. The key is upper-cased; blank filters are sent as null
    /// and left to the server's query logic.
    pub fn search_criteria(&self) -> SearchCriteria {
        let key = self.key_filter.trim();
        SearchCriteria {
            key: (!key.is_empty()).then(|| key.to_uppercase()),
            type_product_id: self.type_filter,
        }
    }

    /// Reset both filters. The caller reloads the unfiltered list.
    pub fn clear_search(&mut self) {
        self.key_filter.clear();
        self.type_filter = None;
    }

    /// Parse the value of the type `<select>`; an empty value means "any"
    pub fn set_type_filter(&mut self, raw: &str) {
        self.type_filter = raw.parse::<i64>().ok();
    }

    pub fn is_filtered(&self) -> bool {
        self.search_criteria() != SearchCriteria::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_becomes_null() {
        let listing = ProductListing {
            key_filter: "   ".to_string(),
            ..ProductListing::default()
        };
        assert_eq!(listing.search_criteria(), SearchCriteria::default());
        assert!(!listing.is_filtered());
    }

    #[test]
    fn test_type_filter_parsing() {
        let mut listing = ProductListing::default();
        listing.set_type_filter("4");
        assert_eq!(listing.type_filter, Some(4));
        listing.set_type_filter("");
        assert_eq!(listing.type_filter, None);
    }
}
