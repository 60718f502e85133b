use httpmock::Method::DELETE;
use httpmock::prelude::*;
use httpmock::{
    Mock,
    Then,
    When,
};
use serde_json::json;

use crate::constants::*;

pub struct MockServerBuilder {
    server: MockServer,
    handlers: Vec<Box<dyn Fn(When, Then)>>,
    mock_ids: Vec<usize>,
}

fn print_req(req: &HttpMockRequest) -> bool {
    // Use println instead of info! so that this works outside of the lib crate
    println!("    Received: {} {}", req.method_str(), req.uri().path());
    true
}

impl MockServerBuilder {
    pub fn new() -> MockServerBuilder {
        MockServerBuilder {
            server: MockServer::start(),
            handlers: vec![],
            mock_ids: vec![],
        }
    }

    pub fn assert(&self) {
        for id in &self.mock_ids {
            println!("checking assertions for mock {id}");
            Mock::new(*id, &self.server).assert()
        }
    }

    pub fn handle<F: Fn(When, Then) + 'static>(&mut self, f: F) -> &mut Self {
        self.handlers.push(Box::new(move |w, t| {
            let w = w.matches(print_req);
            f(w, t);
        }));
        self
    }

    pub fn handle_delete(&mut self, path: String) -> &mut Self {
        self.handle(move |when, then| {
            when.method(DELETE).path(&path);
            then.json_body(status_ok());
        })
    }

    pub fn handle_not_found(&mut self, path: String) -> &mut Self {
        self.handle(move |when, then| {
            when.path(&path);
            then.status(404).json_body(status_not_found());
        })
    }

    pub fn handle_list(&mut self, path: String, selector: String, items: Vec<serde_json::Value>) -> &mut Self {
        self.handle(move |when, then| {
            when.method(GET).path(&path).query_param("labelSelector", &selector);
            then.json_body(json!({
                "kind": "List",
                "apiVersion": "v1",
                "metadata": {},
                "items": items,
            }));
        })
    }

    pub fn build(&mut self) {
        for f in self.handlers.iter() {
            self.mock_ids.push(self.server.mock(f).id);
        }

        // Print all unmatched/unhandled requests for easier debugging;
        // this has to go last so that the other mock rules have a chance
        // to match first
        self.server.mock(|when, _| {
            when.matches(print_req);
        });
    }

    pub fn url(&self) -> http::Uri {
        http::Uri::try_from(self.server.url("/")).unwrap()
    }
}

impl Default for MockServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn make_fake_apiserver() -> (MockServerBuilder, kube::Client) {
    let builder = MockServerBuilder::new();
    let config = kube::Config::new(builder.url());
    let client = kube::Client::try_from(config).unwrap();
    (builder, client)
}

pub fn tasks_path(name: Option<&str>) -> String {
    resource_path(TEKTON_API_PREFIX, "tasks", name)
}

pub fn task_runs_path(name: Option<&str>) -> String {
    resource_path(TEKTON_API_PREFIX, "taskruns", name)
}

pub fn trigger_templates_path(name: Option<&str>) -> String {
    resource_path(TRIGGERS_API_PREFIX, "triggertemplates", name)
}

fn resource_path(prefix: &str, plural: &str, name: Option<&str>) -> String {
    match name {
        Some(n) => format!("{prefix}/namespaces/{TEST_NAMESPACE}/{plural}/{n}"),
        None => format!("{prefix}/namespaces/{TEST_NAMESPACE}/{plural}"),
    }
}

pub fn namespace_path(ns: &str) -> String {
    format!("/api/v1/namespaces/{ns}")
}

pub fn status_ok() -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Success",
      "code": 200
    })
}

pub fn status_not_found() -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Failure",
      "message": "not found",
      "reason": "NotFound",
      "code": 404
    })
}
