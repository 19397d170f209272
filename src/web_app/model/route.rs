// web_app/model/route.rs - Client routes and the header title for each

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Products,
    AddProduct,
    EditProduct(i64),
}

impl AppRoute {
    /// Resolve a pathname. Anything unmatched is the listing, which is
    /// where the router redirects it.
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["addProduct"] => AppRoute::AddProduct,
            ["editProduct", id] => id
                .parse()
                .map(AppRoute::EditProduct)
                .unwrap_or(AppRoute::Products),
            _ => AppRoute::Products,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Products => "Product List",
            AppRoute::AddProduct => "Add Product",
            AppRoute::EditProduct(_) => "Edit Product",
        }
    }

    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppRoute::Products => write!(f, "/products"),
            AppRoute::AddProduct => write!(f, "/addProduct"),
            AppRoute::EditProduct(id) => write!(f, "/editProduct/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_path_round_trip() {
        let route = AppRoute::EditProduct(15);
        assert_eq!(route.path(), "/editProduct/15");
        assert_eq!(AppRoute::from_path(&route.path()), route);
    }

    #[test]
    fn test_bad_edit_id_falls_back_to_listing() {
        assert_eq!(AppRoute::from_path("/editProduct/x"), AppRoute::Products);
    }
}
