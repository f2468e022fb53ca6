// src/domain/pagination.rs

/// Offset/limit window handed to repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u32,
}

/// Resolved page position within a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber {
    pub number: u32,
    pub num_pages: u32,
    pub per_page: u32,
}

impl PageNumber {
    /// Resolves a raw `?page=` value against the listing size.
    ///
    /// Missing or non-numeric input selects the first page, numbers past the
    /// end select the last page. An empty listing still has one (empty) page.
    pub fn resolve(raw: Option<&str>, total: u64, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let num_pages = if total == 0 {
            1
        } else {
            u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX)
        };

        let requested = raw
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(1);

        Self {
            number: requested.min(num_pages),
            num_pages,
            per_page,
        }
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            offset: u64::from(self.number - 1) * u64::from(self.per_page),
            limit: self.per_page,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_garbage_page_is_first() {
        assert_eq!(PageNumber::resolve(None, 10, 3).number, 1);
        assert_eq!(PageNumber::resolve(Some("abc"), 10, 3).number, 1);
        assert_eq!(PageNumber::resolve(Some("0"), 10, 3).number, 1);
    }

    #[test]
    fn page_past_end_is_last() {
        let page = PageNumber::resolve(Some("99"), 10, 3);
        assert_eq!(page.num_pages, 4);
        assert_eq!(page.number, 4);
        assert_eq!(page.window(), PageWindow { offset: 9, limit: 3 });
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn empty_listing_has_single_page() {
        let page = PageNumber::resolve(Some("2"), 0, 1);
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 1);
        assert_eq!(page.window().offset, 0);
    }
}
