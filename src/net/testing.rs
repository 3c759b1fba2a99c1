//! Test doubles for the HTTP pipeline.
//!
//! The fakes mirror the browser wiring: a transport that replays canned
//! responses while recording what was sent, a navigator that records hard
//! navigations, and the in-memory token store.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::error::ApiError;
use super::http::{ApiClient, ApiRequest, ApiResponse, Navigator, Transport};
use super::token::MemoryTokens;

/// Transport returning canned responses and recording every request.
///
/// With no canned response queued it answers `200 {}`.
#[derive(Default)]
pub struct FakeTransport {
    pub sent: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl FakeTransport {
    pub fn push_response(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_owned(),
        }));
    }

    pub fn push_failure(&self, err: ApiError) {
        self.responses.borrow_mut().push_back(Err(err));
    }
}

impl Transport for FakeTransport {
    async fn send(&self, _base: &str, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.borrow_mut().push(req.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(ApiResponse {
                    status: 200,
                    body: "{}".to_owned(),
                })
            })
    }
}

/// Navigator pinned to a fixed current path, recording navigations.
///
/// The current path stays fixed across `go` calls: a real hard navigation
/// tears the page down, so nothing after it runs in the same document.
pub struct FakeNavigator {
    pub path: RefCell<String>,
    pub visited: RefCell<Vec<String>>,
}

impl FakeNavigator {
    pub fn at(path: &str) -> Rc<Self> {
        Rc::new(Self {
            path: RefCell::new(path.to_owned()),
            visited: RefCell::new(Vec::new()),
        })
    }
}

impl Navigator for FakeNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn go(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_owned());
    }
}

/// Client wired to fakes, with handles to the store and navigator.
pub fn client_at(path: &str) -> (ApiClient<FakeTransport>, Rc<MemoryTokens>, Rc<FakeNavigator>) {
    let tokens = Rc::new(MemoryTokens::new());
    let nav = FakeNavigator::at(path);
    let api = ApiClient::new(
        "http://backend.test/api/v1".to_owned(),
        FakeTransport::default(),
        tokens.clone(),
        nav.clone(),
    );
    (api, tokens, nav)
}
