use std::num::NonZeroU32;

/// Default page size requested from the backend.
pub const PAGE_SIZE: u32 = 50;

/// The parameters of one page request.
///
/// Once issued a `SearchParams` is never mutated; it doubles as the request
/// key for de-duplication and as the token that identifies which request a
/// response belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchParams {
    page: NonZeroU32,
    limit: NonZeroU32,
    search_value: Option<String>,
}

impl SearchParams {
    /// Build params. A page or limit of zero is raised to one, and an empty
    /// search string is treated as no search.
    pub fn new(page: u32, limit: u32, search: impl Into<String>) -> Self {
        let search = search.into();
        Self {
            page: NonZeroU32::new(page).unwrap_or(NonZeroU32::MIN),
            limit: NonZeroU32::new(limit).unwrap_or(NonZeroU32::MIN),
            search_value: (!search.is_empty()).then_some(search),
        }
    }

    pub fn page(&self) -> u32 {
        self.page.get()
    }

    pub fn limit(&self) -> u32 {
        self.limit.get()
    }

    pub fn search_value(&self) -> Option<&str> {
        self.search_value.as_deref()
    }

    /// Number of records that precede this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.get() - 1) * u64::from(self.limit.get())
    }

    /// Query-string pairs: `_page`, `_limit` and, when searching, `q`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("_page", self.page.to_string()),
            ("_limit", self.limit.to_string()),
        ];
        if let Some(q) = &self.search_value {
            pairs.push(("q", q.clone()));
        }
        pairs
    }

    /// Whether more pages are likely after a response to these params.
    ///
    /// With a total count the answer is exact. Without one, a full page is
    /// taken to mean more may follow, which costs one extra fetch when the
    /// collection size is a multiple of the page size. An empty page always
    /// ends the list.
    pub fn has_more_after(&self, returned: usize, total_count: Option<u64>) -> bool {
        match total_count {
            Some(total) => returned > 0 && self.offset() + (returned as u64) < total,
            None => returned == self.limit.get() as usize,
        }
    }
}
