//! End-to-end pipeline tests against wiremock stand-ins for the search API,
//! the RDAP aggregator, and the LLM endpoint.

use brandnav_core::{AppConfig, BrandQuery, Environment};
use brandnav_research::Analyzer;
use wiremock::matchers::{method, path, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(
    search_url: &str,
    rdap_url: &str,
    llm_url: &str,
    platforms: &[&str],
    tlds: &[&str],
) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        log_level: "warn".to_string(),
        search_api_key: "test-search-key".to_string(),
        search_base_url: search_url.to_string(),
        llm_api_key: "test-llm-key".to_string(),
        llm_base_url: llm_url.to_string(),
        llm_model: "gpt-4o".to_string(),
        rdap_base_url: rdap_url.to_string(),
        request_timeout_secs: 5,
        search_result_count: 10,
        social_platforms: platforms.iter().map(ToString::to_string).collect(),
        domain_tlds: tlds.iter().map(ToString::to_string).collect(),
        trademark_country: "US".to_string(),
    }
}

fn empty_search_body() -> serde_json::Value {
    serde_json::json!({ "web": { "results": [] } })
}

fn evaluation_content(score: i64) -> String {
    serde_json::json!({
        "linguistic_analysis": "Easy to pronounce and spell.",
        "memorability_distinctiveness": "Distinctive coinage.",
        "relevance": "Abstract; fits most categories.",
        "availability_summary": "Few conflicts in the provided data.",
        "overall_score": score
    })
    .to_string()
}

fn llm_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [ { "message": { "role": "assistant", "content": content } } ]
    })
}

async fn mount_default_search(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/web/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_search_body()))
        .mount(server)
        .await;
}

async fn mount_llm(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(llm_body(content)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn zyxosphere_with_no_hits_produces_clean_report() {
    let search = MockServer::start().await;
    let rdap = MockServer::start().await;
    let llm = MockServer::start().await;

    mount_default_search(&search).await;
    mount_llm(&llm, &evaluation_content(9)).await;

    Mock::given(method("GET"))
        .and(path("/domain/zyxosphere.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "objectClassName": "domain", "ldhName": "zyxosphere.com"
        })))
        .mount(&rdap)
        .await;
    Mock::given(method("GET"))
        .and(path("/domain/zyxosphere.ai"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&rdap)
        .await;
    Mock::given(method("GET"))
        .and(path("/domain/zyxosphere.io"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&rdap)
        .await;

    let config = test_config(
        &search.uri(),
        &rdap.uri(),
        &llm.uri(),
        &["twitter.com"],
        &["com", "ai", "io"],
    );
    let analyzer = Analyzer::from_config(&config).expect("analyzer");
    let query = BrandQuery::parse("ZyxoSphere").expect("query");
    let report = analyzer.analyze(&query).await;

    let json = serde_json::to_value(&report).expect("serialize");
    let research = &json["research"];

    assert_eq!(research["brand_name"], "ZyxoSphere");
    assert_eq!(research["web_search"]["web_links"], serde_json::json!([]));
    assert_eq!(
        research["web_search"]["potential_conflicts"],
        serde_json::json!([])
    );
    assert!(research["web_search"].get("error").is_none());

    assert_eq!(
        research["domain_availability"]["zyxosphere.com"],
        "not_available"
    );
    assert_eq!(
        research["domain_availability"]["zyxosphere.ai"],
        "potentially_available"
    );
    assert_eq!(research["domain_availability"]["zyxosphere.io"], "error");

    assert_eq!(json["evaluation"]["overall_score"], 9);
    assert!(json["report_markdown"]
        .as_str()
        .expect("markdown")
        .contains("# Brand Analysis Report: ZyxoSphere"));
}

#[tokio::test]
async fn one_platform_failure_does_not_abort_the_others() {
    let search = MockServer::start().await;
    let rdap = MockServer::start().await;
    let llm = MockServer::start().await;

    // Instagram lookups fail; everything else answers with zero hits.
    Mock::given(method("GET"))
        .and(path("/web/search"))
        .and(query_param_contains("q", "site:instagram.com"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&search)
        .await;
    mount_default_search(&search).await;
    mount_llm(&llm, &evaluation_content(7)).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&rdap)
        .await;

    let config = test_config(
        &search.uri(),
        &rdap.uri(),
        &llm.uri(),
        &["twitter.com", "instagram.com", "facebook.com"],
        &["com"],
    );
    let analyzer = Analyzer::from_config(&config).expect("analyzer");
    let query = BrandQuery::parse("ZyxoSphere").expect("query");
    let report = analyzer.analyze(&query).await;

    let json = serde_json::to_value(&report).expect("serialize");
    let results = &json["research"]["social_media_search"]["platform_results"];
    assert_eq!(results["instagram.com"], "check_error");
    assert_eq!(
        results["twitter.com"],
        "potentially_available_low_presence"
    );
    assert_eq!(
        results["facebook.com"],
        "potentially_available_low_presence"
    );
}

#[tokio::test]
async fn web_search_failure_leaves_sibling_sections_intact() {
    let search = MockServer::start().await;
    let rdap = MockServer::start().await;
    let llm = MockServer::start().await;

    // Only the market-research query fails; platform and trademark queries
    // are site-scoped and keep working.
    Mock::given(method("GET"))
        .and(path("/web/search"))
        .and(query_param_contains("q", "brand OR company"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&search)
        .await;
    mount_default_search(&search).await;
    mount_llm(&llm, &evaluation_content(6)).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&rdap)
        .await;

    let config = test_config(
        &search.uri(),
        &rdap.uri(),
        &llm.uri(),
        &["twitter.com"],
        &["com"],
    );
    let analyzer = Analyzer::from_config(&config).expect("analyzer");
    let query = BrandQuery::parse("ZyxoSphere").expect("query");
    let report = analyzer.analyze(&query).await;

    let json = serde_json::to_value(&report).expect("serialize");
    let research = &json["research"];

    let web_error = research["web_search"]["error"].as_str().expect("error");
    assert!(!web_error.is_empty());

    assert!(research["social_media_search"]["platform_results"].is_object());
    assert_eq!(
        research["trademark_check"]["status"],
        "no_exact_match_found_on_site"
    );
    assert_eq!(
        research["domain_availability"]["zyxosphere.com"],
        "potentially_available"
    );
}

#[tokio::test]
async fn evaluation_still_runs_when_every_research_stage_fails() {
    let search = MockServer::start().await;
    let rdap = MockServer::start().await;
    let llm = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/web/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&search)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&rdap)
        .await;
    mount_llm(&llm, &evaluation_content(3)).await;

    let config = test_config(
        &search.uri(),
        &rdap.uri(),
        &llm.uri(),
        &["twitter.com"],
        &["com"],
    );
    let analyzer = Analyzer::from_config(&config).expect("analyzer");
    let query = BrandQuery::parse("ZyxoSphere").expect("query");
    let report = analyzer.analyze(&query).await;

    let json = serde_json::to_value(&report).expect("serialize");
    let research = &json["research"];

    assert!(research["web_search"]["error"].is_string());
    // Social section succeeds structurally; each platform is check_error.
    assert_eq!(
        research["social_media_search"]["platform_results"]["twitter.com"],
        "check_error"
    );
    assert!(research["trademark_check"]["error"].is_string());
    assert_eq!(research["domain_availability"]["zyxosphere.com"], "error");

    assert_eq!(json["evaluation"]["overall_score"], 3);

    let received = llm.received_requests().await.expect("recorded requests");
    assert_eq!(received.len(), 1, "evaluation call should still happen");
}

#[tokio::test]
async fn unparseable_evaluation_becomes_an_error_not_a_score() {
    let search = MockServer::start().await;
    let rdap = MockServer::start().await;
    let llm = MockServer::start().await;

    mount_default_search(&search).await;
    mount_llm(&llm, "I would rate this brand quite highly!").await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&rdap)
        .await;

    let config = test_config(
        &search.uri(),
        &rdap.uri(),
        &llm.uri(),
        &["twitter.com"],
        &["com"],
    );
    let analyzer = Analyzer::from_config(&config).expect("analyzer");
    let query = BrandQuery::parse("ZyxoSphere").expect("query");
    let report = analyzer.analyze(&query).await;

    let json = serde_json::to_value(&report).expect("serialize");
    let error = json["evaluation"]["error"].as_str().expect("error");
    assert!(error.contains("could not parse"), "got: {error}");
    assert!(json["research"]["web_search"].get("web_links").is_some());
}

#[tokio::test]
async fn followup_answers_come_back_verbatim() {
    let search = MockServer::start().await;
    let rdap = MockServer::start().await;
    let llm = MockServer::start().await;

    mount_llm(&llm, "The .com domain was taken according to the report.").await;

    let config = test_config(
        &search.uri(),
        &rdap.uri(),
        &llm.uri(),
        &["twitter.com"],
        &["com"],
    );
    let analyzer = Analyzer::from_config(&config).expect("analyzer");

    let context = serde_json::json!({
        "brand_name": "ZyxoSphere",
        "research_data": { "domain_availability": { "zyxosphere.com": "not_available" } }
    });
    let answer = analyzer
        .answer_followup("Was the .com domain available?", &context)
        .await
        .expect("answer");
    assert_eq!(answer, "The .com domain was taken according to the report.");
}
