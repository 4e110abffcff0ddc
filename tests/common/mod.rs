//! Test utilities and scripted collaborators for the booklinks test suite

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use booklinks::{ConnectivityProbe, Delay, FetchConfig, FetchError, FetchResult, SearchBackend};
use mockito::{Matcher, Mock, Server};

/// Builds a results page with one `div.g` container per href
#[allow(dead_code)]
pub fn create_results_html(hrefs: &[&str]) -> String {
    let results: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="g"><div class="yuRUbf"><a href="{href}"><h3>Result</h3></a></div></div>"#
            )
        })
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Search</title></head>
<body><div id="search">{results}</div></body>
</html>"#
    )
}

/// A page that parses fine but has no result container
#[allow(dead_code)]
pub fn create_empty_results_html() -> String {
    create_results_html(&[])
}

/// Config with millisecond waits and the given attempt count
#[allow(dead_code)]
pub fn fast_config(retries: u32) -> FetchConfig {
    FetchConfig::builder()
        .retries(retries)
        .retry_delay(Duration::from_millis(5))
        .throttle_interval(Duration::from_millis(3))
        .build()
        .expect("valid test config")
}

/// Backend replaying a script of responses, one per call
///
/// Once the script is exhausted every further call fails.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct ScriptedBackend {
    script: Mutex<VecDeque<FetchResult<String>>>,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedBackend {
    pub fn new(script: Vec<FetchResult<String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Fail `failures` times with numbered messages, then serve `body`
    pub fn failing_then(failures: usize, body: String) -> Self {
        let mut script: Vec<FetchResult<String>> = (1..=failures)
            .map(|n| Err(FetchError::Request(format!("connection reset #{n}"))))
            .collect();
        script.push(Ok(body));
        Self::new(script)
    }

    pub fn always_failing(attempts: usize) -> Self {
        Self::new(
            (1..=attempts)
                .map(|n| Err(FetchError::Request(format!("503 Service Unavailable #{n}"))))
                .collect(),
        )
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl SearchBackend for ScriptedBackend {
    async fn fetch(&self, query: &str) -> FetchResult<String> {
        self.queries.lock().unwrap().push(query.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Request("script exhausted".to_string())))
    }
}

/// Backend that answers by query text, for batch tests
#[derive(Debug)]
#[allow(dead_code)]
pub struct ByQueryBackend {
    pub respond: fn(&str) -> FetchResult<String>,
}

impl SearchBackend for ByQueryBackend {
    async fn fetch(&self, query: &str) -> FetchResult<String> {
        (self.respond)(query)
    }
}

/// Probe returning scripted answers, then `fallback` forever
#[derive(Debug)]
#[allow(dead_code)]
pub struct ScriptedProbe {
    answers: Mutex<VecDeque<bool>>,
    fallback: bool,
    calls: Mutex<usize>,
}

#[allow(dead_code)]
impl ScriptedProbe {
    pub fn online() -> Self {
        Self::new(Vec::new(), true)
    }

    pub fn offline() -> Self {
        Self::new(Vec::new(), false)
    }

    pub fn new(answers: Vec<bool>, fallback: bool) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            fallback,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl ConnectivityProbe for ScriptedProbe {
    async fn is_reachable(&self) -> bool {
        *self.calls.lock().unwrap() += 1;
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

/// Delay that records requested waits and returns immediately
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingDelay {
    waits: Mutex<Vec<Duration>>,
}

#[allow(dead_code)]
impl RecordingDelay {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

impl Delay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

/// Sets up a mock HTTP server
#[allow(dead_code)]
pub async fn setup_mock_server() -> mockito::ServerGuard {
    Server::new_async().await
}

/// Creates a `/search` endpoint answering `query` with HTML
#[allow(dead_code)]
pub async fn create_search_mock(server: &mut Server, query: &str, html: &str) -> Mock {
    server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), query.into()))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a `/search` endpoint that always returns `status`
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, status: usize) -> Mock {
    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}
