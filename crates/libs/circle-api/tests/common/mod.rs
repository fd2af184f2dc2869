#![allow(dead_code)]

use circle_api::{Api, Project};
use mockito::{Mock, Server};

pub const TOKEN: &str = "test-token";

/// `Basic base64("test-token:")`, the token as user name with an empty password.
pub const AUTHORIZATION: &str = "Basic dGVzdC10b2tlbjo=";

pub fn load_mock(name: &str) -> String {
    let path = format!("{}/tests/mocks/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Mock '{}' missing", path))
}

pub fn api(server: &Server) -> Api {
    Api::with_url(TOKEN, server.url()).unwrap()
}

pub fn project() -> Project {
    Project::new("ccie-tester", "testing")
}

/// A mock that expects the client's credential and accept headers.
pub fn authed(server: &mut Server, method: &str, path: &str) -> Mock {
    server
        .mock(method, path)
        .match_header("authorization", AUTHORIZATION)
        .match_header("accept", "application/json")
}
