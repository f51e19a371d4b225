use std::sync::Mutex;

use crate::domain::SearchResults;

// The one result set the app remembers, replaced wholesale by each
// successful crawl. Error paths never write.
pub struct SearchStore {
    current: Mutex<Option<SearchResults>>,
}

impl SearchStore {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    pub fn replace(&self, results: SearchResults) {
        *self.current.lock().unwrap() = Some(results);
    }

    pub fn snapshot(&self) -> Option<SearchResults> {
        self.current.lock().unwrap().clone()
    }

    pub fn has_results(&self) -> bool {
        self.current.lock().unwrap().is_some()
    }
}
