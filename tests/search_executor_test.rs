mod common;

use std::time::Duration;

use booklinks::{FetchConfig, FetchError, NoOpProgress, SearchExecutor, SearchOutcome};
use common::{
    RecordingDelay, ScriptedBackend, ScriptedProbe, create_empty_results_html,
    create_results_html, fast_config,
};

fn executor(
    config: &FetchConfig,
    backend: ScriptedBackend,
    probe: ScriptedProbe,
) -> SearchExecutor<ScriptedBackend, ScriptedProbe, RecordingDelay, NoOpProgress> {
    SearchExecutor::new(config, backend, probe, RecordingDelay::default(), NoOpProgress)
}

#[tokio::test]
async fn test_first_attempt_success_returns_link_without_waiting() {
    let config = fast_config(3);
    let exec = executor(
        &config,
        ScriptedBackend::failing_then(0, create_results_html(&["https://www.rokomari.com/book/1"])),
        ScriptedProbe::online(),
    );

    let outcome = exec.search("Cosmos by Carl Sagan in rokomari").await;

    assert_eq!(
        outcome,
        SearchOutcome::Link("https://www.rokomari.com/book/1".to_string())
    );
    assert_eq!(exec.backend().calls(), 1);
    assert!(exec.delay().waits().is_empty());
}

#[tokio::test]
async fn test_success_on_attempt_n_waits_n_minus_one_times() {
    for n in 1..=3u32 {
        let config = fast_config(3);
        let exec = executor(
            &config,
            ScriptedBackend::failing_then(
                (n - 1) as usize,
                create_results_html(&["/url?q=https://example.com/"]),
            ),
            ScriptedProbe::online(),
        );

        let outcome = exec.search("Wonder").await;

        assert_eq!(
            outcome,
            SearchOutcome::Link("/url?q=https://example.com/".to_string()),
            "n = {n}"
        );
        assert_eq!(exec.backend().calls(), n as usize, "n = {n}");
        assert_eq!(
            exec.delay().waits(),
            vec![config.retry_delay(); (n - 1) as usize],
            "n = {n}"
        );
    }
}

#[tokio::test]
async fn test_exhausted_retries_record_last_failure() {
    let config = fast_config(3);
    let exec = executor(&config, ScriptedBackend::always_failing(5), ScriptedProbe::online());

    let outcome = exec.search("1984 by George Orwell in rokomari").await;

    assert_eq!(
        outcome,
        SearchOutcome::Failed("Error after 3 attempts: 503 Service Unavailable #3".to_string())
    );
    // No fourth attempt, and no wait after the last one
    assert_eq!(exec.backend().calls(), 3);
    assert_eq!(exec.delay().waits().len(), 2);
}

#[tokio::test]
async fn test_single_attempt_config_never_waits() {
    let config = fast_config(1);
    let exec = executor(&config, ScriptedBackend::always_failing(2), ScriptedProbe::online());

    let outcome = exec.search("Lalsalu").await;

    assert!(outcome.is_failed());
    assert!(outcome.to_string().starts_with("Error after 1 attempts: "));
    assert_eq!(exec.backend().calls(), 1);
    assert!(exec.delay().waits().is_empty());
}

#[tokio::test]
async fn test_page_without_results_is_sentinel() {
    let config = fast_config(3);
    let exec = executor(
        &config,
        ScriptedBackend::failing_then(0, create_empty_results_html()),
        ScriptedProbe::online(),
    );

    let outcome = exec.search("টাইম লুপ").await;

    assert_eq!(outcome, SearchOutcome::NotFound);
    assert_eq!(outcome.to_string(), "No link found");
    assert_eq!(exec.backend().calls(), 1);
}

#[tokio::test]
async fn test_parse_anomaly_is_not_retried() {
    let config = fast_config(3);
    let exec = executor(
        &config,
        ScriptedBackend::failing_then(0, r#"<div class="g"><a>no href</a></div>"#.to_string()),
        ScriptedProbe::online(),
    );

    let outcome = exec.search("Sapiens").await;

    assert_eq!(
        outcome,
        SearchOutcome::Failed("Error: First result link has no 'href' attribute".to_string())
    );
    assert_eq!(exec.backend().calls(), 1);
    assert!(exec.delay().waits().is_empty());
}

#[tokio::test]
async fn test_backend_parse_error_short_circuits() {
    let config = fast_config(3);
    let exec = executor(
        &config,
        ScriptedBackend::new(vec![Err(FetchError::Parse("body was not UTF-8".into()))]),
        ScriptedProbe::online(),
    );

    assert_eq!(
        exec.search("Ikigai").await,
        SearchOutcome::Failed("Error: body was not UTF-8".to_string())
    );
    assert_eq!(exec.backend().calls(), 1);
}

#[tokio::test]
async fn test_offline_waits_do_not_consume_attempts() {
    let config = fast_config(2);
    // Offline twice, online for the first attempt, offline once more, online again
    let exec = executor(
        &config,
        ScriptedBackend::failing_then(1, create_results_html(&["https://example.com/found"])),
        ScriptedProbe::new(vec![false, false, true, false, true], true),
    );

    let outcome = exec.search("Feluda Series").await;

    // Two attempts were enough despite three offline rounds
    assert_eq!(outcome, SearchOutcome::Link("https://example.com/found".to_string()));
    assert_eq!(exec.backend().calls(), 2);
    assert_eq!(exec.probe().calls(), 5);
    // Three offline waits plus one retry wait
    assert_eq!(exec.delay().waits().len(), 4);
}

#[tokio::test]
async fn test_bounded_offline_waits_give_up() {
    let config = FetchConfig::builder()
        .retry_delay(Duration::from_millis(1))
        .max_offline_waits(4)
        .build()
        .unwrap();
    let exec = executor(&config, ScriptedBackend::default(), ScriptedProbe::offline());

    let outcome = exec.search("Pather Panchali").await;

    assert_eq!(
        outcome,
        SearchOutcome::Failed("Error: no internet connection after 4 waits".to_string())
    );
    assert_eq!(exec.backend().calls(), 0);
    assert_eq!(exec.delay().waits().len(), 4);
}

#[tokio::test]
async fn test_query_is_passed_through_unchanged() {
    let config = fast_config(3);
    let exec = executor(
        &config,
        ScriptedBackend::failing_then(0, create_empty_results_html()),
        ScriptedProbe::online(),
    );

    let title = "দ্য হিচহাইকার'স গাইড টু দ্য গ্যালাক্সি by ডগলাস অ্যাডামস্ in rokomari";
    exec.search(title).await;

    assert_eq!(exec.backend().queries(), vec![title.to_string()]);
}
