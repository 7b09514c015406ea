//! In-memory [`PlacesProvider`] for pipeline tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::PlacesError;
use crate::fields::FieldMask;
use crate::provider::PlacesProvider;
use crate::types::{LegacyPlace, Place, TextSearchPage};

#[derive(Default)]
pub(crate) struct FakeProvider {
    pages: Mutex<VecDeque<Result<TextSearchPage, PlacesError>>>,
    details: HashMap<String, LegacyPlace>,
    failing_details: HashSet<String>,
    search_text_result: Mutex<Option<Result<Vec<Place>, PlacesError>>>,
    pub(crate) page_requests: Mutex<Vec<Option<String>>>,
    pub(crate) detail_requests: Mutex<Vec<(String, FieldMask)>>,
    pub(crate) search_text_requests: Mutex<Vec<(FieldMask, usize)>>,
}

impl FakeProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_page(self, page: TextSearchPage) -> Self {
        self.pages.lock().unwrap().push_back(Ok(page));
        self
    }

    pub(crate) fn with_page_error(self, err: PlacesError) -> Self {
        self.pages.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn with_detail(mut self, place: LegacyPlace) -> Self {
        let id = place.place_id.clone().expect("detail fixture needs a place_id");
        self.details.insert(id, place);
        self
    }

    pub(crate) fn with_failing_detail(mut self, place_id: &str) -> Self {
        self.failing_details.insert(place_id.to_owned());
        self
    }

    pub(crate) fn with_search_text(self, result: Result<Vec<Place>, PlacesError>) -> Self {
        *self.search_text_result.lock().unwrap() = Some(result);
        self
    }

    pub(crate) fn page_request_count(&self) -> usize {
        self.page_requests.lock().unwrap().len()
    }

    pub(crate) fn detail_request_count(&self) -> usize {
        self.detail_requests.lock().unwrap().len()
    }

    pub(crate) fn search_text_request_count(&self) -> usize {
        self.search_text_requests.lock().unwrap().len()
    }
}

pub(crate) fn api_error(status: &str) -> PlacesError {
    PlacesError::Api {
        status: status.to_owned(),
        message: format!("fake {status}"),
    }
}

#[async_trait]
impl PlacesProvider for FakeProvider {
    async fn text_search_page(
        &self,
        _query: &str,
        page_token: Option<&str>,
    ) -> Result<TextSearchPage, PlacesError> {
        self.page_requests
            .lock()
            .unwrap()
            .push(page_token.map(str::to_owned));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(TextSearchPage::default()))
    }

    async fn place_details(
        &self,
        place_id: &str,
        fields: &FieldMask,
    ) -> Result<LegacyPlace, PlacesError> {
        self.detail_requests
            .lock()
            .unwrap()
            .push((place_id.to_owned(), fields.clone()));
        if self.failing_details.contains(place_id) {
            return Err(api_error("NOT_FOUND"));
        }
        self.details
            .get(place_id)
            .cloned()
            .ok_or_else(|| api_error("NOT_FOUND"))
    }

    async fn search_text(
        &self,
        _query: &str,
        fields: &FieldMask,
        max_results: usize,
    ) -> Result<Vec<Place>, PlacesError> {
        self.search_text_requests
            .lock()
            .unwrap()
            .push((fields.clone(), max_results));
        self.search_text_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// A text-search candidate with the given identifier and review count.
pub(crate) fn candidate(id: &str, reviews: Option<u32>) -> LegacyPlace {
    LegacyPlace {
        place_id: Some(id.to_owned()),
        name: Some(format!("Business {id}")),
        formatted_address: Some(format!("{id} Main St")),
        business_status: Some("OPERATIONAL".to_owned()),
        rating: Some(4.0),
        user_ratings_total: reviews,
        ..LegacyPlace::default()
    }
}

/// A rich details result for `id`.
pub(crate) fn detail(id: &str, reviews: Option<u32>, website: Option<&str>) -> LegacyPlace {
    LegacyPlace {
        website: website.map(str::to_owned),
        formatted_phone_number: Some("(512) 555-0100".to_owned()),
        url: Some(format!("https://maps.google.com/?cid={id}")),
        ..candidate(id, reviews)
    }
}

pub(crate) fn page(results: Vec<LegacyPlace>, next: Option<&str>) -> TextSearchPage {
    TextSearchPage {
        results,
        next_page_token: next.map(str::to_owned),
    }
}
