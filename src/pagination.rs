//! Pagination arithmetic shared by all paged list endpoints

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Page metadata included in every paged list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageInfo {
    /// Total number of pages
    pub number_of_pages: i64,
    /// Page the returned slice belongs to (1-based)
    pub current_page: i64,
    /// Next page number, if any
    pub next_page: Option<i64>,
    /// Previous page number, if any
    pub previous_page: Option<i64>,
}

/// Compute page metadata from an (offset, limit) slice of `counts` rows.
///
/// The current page is derived from the offset, so an offset that is not a
/// multiple of the limit snaps to the page containing it.
pub fn pagination_details(offset: i64, limit: i64, counts: i64) -> PageInfo {
    let number_of_pages = (counts + limit - 1) / limit;
    let current_page = (offset / limit) + 1;
    let next_page = (current_page < number_of_pages).then(|| current_page + 1);
    let previous_page = (current_page > 1).then(|| current_page - 1);

    PageInfo {
        number_of_pages,
        current_page,
        next_page,
        previous_page,
    }
}

/// Query parameters accepted by paged list endpoints
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct PagerParams {
    /// Number of items to be skipped
    #[serde(default)]
    #[validate(range(min = 0))]
    pub skip: i64,
    /// Page size, between 1 and 1000
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_many() {
        let page = pagination_details(0, 10, 50);
        assert_eq!(page.number_of_pages, 5);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.next_page, Some(2));
        assert_eq!(page.previous_page, None);
    }

    #[test]
    fn middle_page() {
        let page = pagination_details(20, 10, 50);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.next_page, Some(4));
        assert_eq!(page.previous_page, Some(2));
    }

    #[test]
    fn last_page_has_no_next() {
        let page = pagination_details(40, 10, 50);
        assert_eq!(page.number_of_pages, 5);
        assert_eq!(page.current_page, 5);
        assert_eq!(page.next_page, None);
        assert_eq!(page.previous_page, Some(4));
    }

    #[test]
    fn empty_result_set() {
        let page = pagination_details(0, 10, 0);
        assert_eq!(page.number_of_pages, 0);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.next_page, None);
        assert_eq!(page.previous_page, None);
    }

    #[test]
    fn partial_last_page_counts_as_a_page() {
        let page = pagination_details(0, 10, 41);
        assert_eq!(page.number_of_pages, 5);
    }

    #[test]
    fn unaligned_offset_snaps_to_containing_page() {
        let page = pagination_details(15, 10, 50);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.next_page, Some(3));
        assert_eq!(page.previous_page, Some(1));
    }

    #[test]
    fn pager_params_bounds() {
        let ok = PagerParams { skip: 0, limit: 100 };
        assert!(ok.validate().is_ok());

        let negative_skip = PagerParams { skip: -1, limit: 10 };
        assert!(negative_skip.validate().is_err());

        let zero_limit = PagerParams { skip: 0, limit: 0 };
        assert!(zero_limit.validate().is_err());

        let oversized_limit = PagerParams { skip: 0, limit: 1001 };
        assert!(oversized_limit.validate().is_err());
    }
}
