//! Pagination and search query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::repositories::PageRequest;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Pagination query parameters.
///
/// `pag` is the 1-indexed page number and `por_pag` the page size; `page` and
/// `page_size` are accepted as aliases. Uses `serde_with` to parse the numbers
/// from query strings, which keeps working when the struct is flattened.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, rename = "pag", alias = "page")]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, rename = "por_pag", alias = "page_size")]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates the parameters and converts them into a [`PageRequest`].
    ///
    /// Without a page size the whole collection is requested.
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and [`MAX_PAGE_SIZE`]
    pub fn to_page_request(&self) -> Result<PageRequest, String> {
        let page = self.page.unwrap_or(1);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        match self.page_size {
            None => Ok(PageRequest::all()),
            Some(size) if (1..=MAX_PAGE_SIZE).contains(&size) => {
                Ok(PageRequest::page(i64::from(page), i64::from(size)))
            }
            Some(_) => Err(format!("Page size must be between 1 and {MAX_PAGE_SIZE}")),
        }
    }
}

/// Query parameters for `GET /clinicas/filter`.
#[derive(Debug, Deserialize)]
pub struct ClinicSearchParams {
    pub term: String,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Query parameters for `GET /ratings/filter`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct RatingFilterParams {
    #[serde_as(as = "DisplayFromStr")]
    pub id_clinica: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, page_size: Option<u32>) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn test_defaults_return_everything() {
        assert_eq!(params(None, None).to_page_request(), Ok(PageRequest::all()));
    }

    #[test]
    fn test_page_without_size_returns_everything() {
        assert_eq!(params(Some(3), None).to_page_request(), Ok(PageRequest::all()));
    }

    #[test]
    fn test_second_page_of_one() {
        let page = params(Some(2), Some(1)).to_page_request().unwrap();
        assert_eq!(page.offset, 1);
        assert_eq!(page.limit, Some(1));
    }

    #[test]
    fn test_size_without_page_starts_at_first() {
        let page = params(None, Some(20)).to_page_request().unwrap();
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, Some(20));
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), Some(10)).to_page_request().is_err());
        assert!(params(Some(0), None).to_page_request().is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(params(None, Some(0)).to_page_request().is_err());
        assert!(params(None, Some(1)).to_page_request().is_ok());
        assert!(params(None, Some(MAX_PAGE_SIZE)).to_page_request().is_ok());
        assert!(params(None, Some(MAX_PAGE_SIZE + 1)).to_page_request().is_err());
    }

    #[test]
    fn test_spanish_and_english_names() {
        let p: PaginationParams = serde_json::from_str(r#"{"pag": "2", "por_pag": "5"}"#).unwrap();
        assert_eq!((p.page, p.page_size), (Some(2), Some(5)));

        let p: PaginationParams =
            serde_json::from_str(r#"{"page": "4", "page_size": "10"}"#).unwrap();
        assert_eq!((p.page, p.page_size), (Some(4), Some(10)));
    }

    #[test]
    fn test_search_params_flatten_pagination() {
        let p: ClinicSearchParams =
            serde_json::from_str(r#"{"term": "norte", "pag": "1", "por_pag": "3"}"#).unwrap();
        assert_eq!(p.term, "norte");
        assert_eq!(p.pagination.page_size, Some(3));
    }

    #[test]
    fn test_non_numeric_page_is_error() {
        assert!(serde_json::from_str::<PaginationParams>(r#"{"pag": "dos"}"#).is_err());
    }
}
