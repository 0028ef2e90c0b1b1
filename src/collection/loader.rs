use tracing::{debug, info, warn};

use super::{Collection, CollectionItem};
use crate::error::Result;

/// Items requested per page
pub const PAGE_SIZE: u32 = 100;

/// One page of a remote collection listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPage {
    /// Page number this response describes
    pub page: u32,
    /// Total page count as reported by the remote
    pub pages: u32,
    pub items: Vec<CollectionItem>,
}

/// Paginated source of a user's collection
pub trait RemoteSource: Send + Sync {
    /// Fetch one page of `username`'s whole collection
    fn fetch_page(&self, username: &str, page: u32, per_page: u32) -> Result<CollectionPage>;
}

impl<R: RemoteSource + ?Sized> RemoteSource for &R {
    fn fetch_page(&self, username: &str, page: u32, per_page: u32) -> Result<CollectionPage> {
        (**self).fetch_page(username, page, per_page)
    }
}

/// Pages through a [`RemoteSource`] to assemble a complete collection
pub struct CollectionLoader<R> {
    source: R,
}

impl<R: RemoteSource> CollectionLoader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Fetch every page of `username`'s collection.
    ///
    /// Starts at page 1 and keeps going while the page number does not
    /// exceed the total reported by the latest response. Any failure aborts
    /// the whole load; partial results are discarded.
    pub fn load(&self, username: &str) -> Result<Collection> {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let response = self.source.fetch_page(username, page, PAGE_SIZE)?;
            if response.page != page {
                warn!(
                    username,
                    requested = page,
                    returned = response.page,
                    "remote returned a different page"
                );
            }
            debug!(
                username,
                page,
                pages = response.pages,
                count = response.items.len(),
                "fetched collection page"
            );

            let total_pages = response.pages;
            items.extend(response.items);
            page += 1;

            if page > total_pages {
                break;
            }
        }

        info!(username, items = items.len(), pages = page - 1, "loaded collection");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShuffleError;
    use std::sync::Mutex;

    fn item(title: &str) -> CollectionItem {
        CollectionItem {
            title: title.to_string(),
            artists: vec!["Artist".to_string()],
            cover_image: String::new(),
        }
    }

    /// Serves pre-built pages and records every request
    struct StubSource {
        pages: Vec<Vec<CollectionItem>>,
        fail_on: Option<u32>,
        requests: Mutex<Vec<(String, u32, u32)>>,
    }

    impl StubSource {
        fn new(pages: Vec<Vec<CollectionItem>>) -> Self {
            Self {
                pages,
                fail_on: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requested_pages(&self) -> Vec<u32> {
            self.requests.lock().unwrap().iter().map(|r| r.1).collect()
        }
    }

    impl RemoteSource for StubSource {
        fn fetch_page(&self, username: &str, page: u32, per_page: u32) -> Result<CollectionPage> {
            self.requests
                .lock()
                .unwrap()
                .push((username.to_string(), page, per_page));
            if self.fail_on == Some(page) {
                return Err(ShuffleError::api(500, "server exploded"));
            }
            Ok(CollectionPage {
                page,
                pages: self.pages.len() as u32,
                items: self.pages[(page - 1) as usize].clone(),
            })
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_single_page() {
        let source = StubSource::new(vec![vec![item("a"), item("b")]]);
        let loader = CollectionLoader::new(&source);

        let collection = loader.load("kasn").unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(source.requested_pages(), vec![1]);
    }

    #[test]
    fn test_requests_every_page_in_order() {
        let pages = (0..4)
            .map(|p| (0..3).map(|i| item(&format!("{p}-{i}"))).collect())
            .collect();
        let source = StubSource::new(pages);
        let loader = CollectionLoader::new(&source);

        let collection = loader.load("kasn").unwrap();

        assert_eq!(source.requested_pages(), vec![1, 2, 3, 4]);
        let titles: Vec<_> = collection.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["0-0", "0-1", "0-2", "1-0", "1-1", "1-2", "2-0", "2-1", "2-2", "3-0", "3-1", "3-2"]
        );
    }

    #[test]
    fn test_uses_fixed_page_size() {
        let source = StubSource::new(vec![vec![item("a")], vec![item("b")]]);
        let loader = CollectionLoader::new(&source);

        loader.load("kasn").unwrap();

        let requests = source.requests.lock().unwrap();
        assert_eq!(requests[0], ("kasn".to_string(), 1, PAGE_SIZE));
        assert_eq!(requests[1], ("kasn".to_string(), 2, PAGE_SIZE));
        assert_eq!(PAGE_SIZE, 100);
    }

    #[test]
    fn test_zero_total_pages_stops_after_first_request() {
        struct Empty;
        impl RemoteSource for Empty {
            fn fetch_page(&self, _: &str, page: u32, _: u32) -> Result<CollectionPage> {
                assert_eq!(page, 1, "only the first page may be requested");
                Ok(CollectionPage {
                    page,
                    pages: 0,
                    items: vec![],
                })
            }
        }

        let collection = CollectionLoader::new(Empty).load("nobody").unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_total_pages_reread_each_response() {
        // First response claims 3 pages, the second says there are only 2.
        struct Shrinking;
        impl RemoteSource for Shrinking {
            fn fetch_page(&self, _: &str, page: u32, _: u32) -> Result<CollectionPage> {
                assert!(page <= 2);
                Ok(CollectionPage {
                    page,
                    pages: if page == 1 { 3 } else { 2 },
                    items: vec![item(&page.to_string())],
                })
            }
        }

        let collection = CollectionLoader::new(Shrinking).load("kasn").unwrap();
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_paging_follows_requested_page_not_echoed_page() {
        // A remote that always claims to be serving page 1.
        struct StuckEcho;
        impl RemoteSource for StuckEcho {
            fn fetch_page(&self, _: &str, page: u32, _: u32) -> Result<CollectionPage> {
                Ok(CollectionPage {
                    page: 1,
                    pages: 3,
                    items: vec![item(&page.to_string())],
                })
            }
        }

        let collection = CollectionLoader::new(StuckEcho).load("kasn").unwrap();
        let titles: Vec<_> = collection.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["1", "2", "3"]);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Failure Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_failure_mid_load_returns_error() {
        let mut source = StubSource::new(vec![vec![item("a")], vec![item("b")], vec![item("c")]]);
        source.fail_on = Some(2);
        let loader = CollectionLoader::new(&source);

        let result = loader.load("kasn");

        assert!(matches!(result, Err(ShuffleError::Api { status: 500, .. })));
        assert_eq!(source.requested_pages(), vec![1, 2]);
    }
}
