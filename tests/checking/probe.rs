//! Contract of the per-URL probe policy, exercised against a real server.
use std::time::Duration;

use linkprobe::checker::probe::{HttpProber, Prober as _};
use linkprobe::checker::StatusOutcome;

use crate::common::responder;

fn prober() -> HttpProber {
    HttpProber::new(Duration::from_millis(250)).expect("it should build the prober")
}

#[tokio::test]
async fn it_should_report_the_code_the_header_probe_gets() {
    let responder = responder::start().await;

    assert_eq!(prober().probe(responder.url("/ok")).await, StatusOutcome::Code(200));
    assert_eq!(prober().probe(responder.url("/nowhere")).await, StatusOutcome::Code(404));

    responder.abort();
}

#[tokio::test]
async fn it_should_fall_back_to_a_retrieval_probe_when_the_header_probe_is_forbidden() {
    let responder = responder::start().await;

    let outcome = prober().probe(responder.url("/forbidden-to-head")).await;

    assert_eq!(outcome, StatusOutcome::Code(200));

    let requests = responder.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "HEAD");
    assert_eq!(requests[1].method, "GET");

    responder.abort();
}

#[tokio::test]
async fn it_should_fall_back_to_a_retrieval_probe_when_the_header_probe_is_a_bad_request() {
    let responder = responder::start().await;

    let outcome = prober().probe(responder.url("/bad-request-to-head")).await;

    assert_eq!(outcome, StatusOutcome::Code(200));

    responder.abort();
}

#[tokio::test]
async fn it_should_keep_the_retrieval_code_even_when_it_is_a_reject_code_too() {
    let responder = responder::start().await;

    let outcome = prober().probe(responder.url("/rejects-every-method")).await;

    assert_eq!(outcome, StatusOutcome::Code(400));

    let requests = responder.requests().await;
    assert_eq!(requests.len(), 2);

    responder.abort();
}

#[tokio::test]
async fn it_should_not_follow_redirects_on_the_header_probe() {
    let responder = responder::start().await;

    let outcome = prober().probe(responder.url("/redirect")).await;

    assert_eq!(outcome, StatusOutcome::Code(301));

    let requests = responder.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "HEAD");

    responder.abort();
}

#[tokio::test]
async fn it_should_time_out_when_the_server_stalls() {
    let responder = responder::start().await;

    let outcome = prober().probe(responder.url("/stall")).await;

    assert_eq!(outcome, StatusOutcome::TimedOut);
    assert_eq!(outcome.as_code(), Some(408));

    responder.abort();
}

#[tokio::test]
async fn it_should_time_out_when_the_retrieval_probe_stalls() {
    let responder = responder::start().await;

    let outcome = prober().probe(responder.url("/forbidden-then-stall")).await;

    assert_eq!(outcome, StatusOutcome::TimedOut);

    let requests = responder.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "HEAD");
    assert_eq!(requests[1].method, "GET");

    responder.abort();
}

#[tokio::test]
async fn it_should_report_a_refused_connection_as_unknown() {
    let url = responder::refused_url().await;

    let outcome = prober().probe(url).await;

    assert_eq!(outcome, StatusOutcome::Unknown);
}

#[tokio::test]
async fn it_should_report_a_dropped_retrieval_connection_as_unknown() {
    let responder = responder::start().await;

    let outcome = prober().probe(responder.url("/forbidden-then-drop")).await;

    assert_eq!(outcome, StatusOutcome::Unknown);

    let requests = responder.requests().await;
    assert_eq!(requests.len(), 2);

    responder.abort();
}

#[tokio::test]
async fn it_should_report_a_malformed_url_as_unknown() {
    let outcome = prober().probe("not a url".to_string()).await;

    assert_eq!(outcome, StatusOutcome::Unknown);
}
