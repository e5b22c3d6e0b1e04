//! End-to-end tests through the MCP tool surface: repository load, lookup
//! session and JSON tool results.

mod mocks;

use faq_lookup::cache::MemoryStore;
use faq_lookup::embedding::{HashingEmbedderLoader, LazyEmbedder};
use faq_lookup::repositories::CorpusRepository;
use faq_lookup::server::handlers::{FindContactsParams, LookupParams};
use faq_lookup::services::{LookupService, LookupSession};
use faq_lookup::{EmbeddingStrategy, FaqMcpServer, LexicalStrategy, Metrics, RankingStrategy};
use mocks::{sample_snapshot, MockCorpusRepository};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, ErrorCode};
use std::sync::Arc;

async fn server_with(strategy: Arc<dyn RankingStrategy>, metrics: Metrics) -> FaqMcpServer {
    let repo = MockCorpusRepository::new(sample_snapshot());
    let snapshot = repo.load().await.unwrap();
    let session = LookupSession::new(Arc::new(snapshot), strategy, metrics);
    FaqMcpServer::new(Arc::new(session) as Arc<dyn LookupService>)
}

async fn lexical_server() -> FaqMcpServer {
    server_with(Arc::new(LexicalStrategy::default()), Metrics::new()).await
}

async fn embedding_server() -> FaqMcpServer {
    let metrics = Metrics::new();
    let strategy = EmbeddingStrategy::new(
        LazyEmbedder::new(Arc::new(HashingEmbedderLoader::new(128))),
        Arc::new(MemoryStore::new()),
        0.35,
        metrics.clone(),
    );
    server_with(Arc::new(strategy), metrics).await
}

fn body(result: &CallToolResult) -> serde_json::Value {
    let raw = serde_json::to_value(result).unwrap();
    let text = raw["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

fn lookup_params(query: &str) -> Parameters<LookupParams> {
    Parameters(LookupParams {
        query: query.to_string(),
    })
}

#[tokio::test]
async fn test_lookup_returns_answer_with_provenance() {
    let server = lexical_server().await;
    let json = body(&server.lookup(lookup_params("검사 기한")).await.unwrap());

    assert_eq!(json["strategy"], "lexical");
    assert_eq!(json["best"]["id"], 0);
    assert_eq!(json["best"]["provenance"]["policy_id"], "POL-INSPECT-01");
    assert_eq!(json["best"]["provenance"]["version"], "2024.1");
    assert_eq!(json["contacts"].as_array().map(Vec::len), Some(0));
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_lookup_with_contact_hint_returns_contacts() {
    let server = lexical_server().await;
    let json = body(&server.lookup(lookup_params("담당자 연락처")).await.unwrap());

    assert_eq!(json["contacts_requested"], true);
    assert_eq!(json["best"]["question"], "담당자 연락처");
    assert_eq!(json["contacts"][0]["dept"], "검사지원팀");
    assert_eq!(json["contacts"][0]["dial"], "0514401005");
}

#[tokio::test]
async fn test_lookup_related_questions_carry_follow_up_query() {
    let server = lexical_server().await;
    let json = body(&server.lookup(lookup_params("검사")).await.unwrap());

    let related = json["related"].as_array().unwrap();
    assert_eq!(related.len(), 2);
    assert_eq!(related[0]["follow_up_query"], related[0]["question"]);

    let follow_up = related[0]["follow_up_query"].as_str().unwrap();
    let again = body(&server.lookup(lookup_params(follow_up)).await.unwrap());
    assert_eq!(again["best"]["id"], related[0]["id"]);
}

#[tokio::test]
async fn test_lookup_not_found_shape() {
    let server = lexical_server().await;
    let json = body(&server.lookup(lookup_params("xyz")).await.unwrap());

    assert!(json["best"].is_null());
    assert_eq!(json["message"], "해당 내용을 찾지 못했어요. 다른 표현으로 질문해 보세요.");
    assert_eq!(
        json["example_queries"],
        serde_json::json!(["검사 준비사항", "검사기한", "담당자 연락처"])
    );
}

#[tokio::test]
async fn test_lookup_rejects_invalid_queries() {
    let server = lexical_server().await;

    let empty = server.lookup(lookup_params("   ")).await.unwrap_err();
    assert_eq!(empty.code.0, ErrorCode::INVALID_PARAMS.0);

    let long = "검".repeat(501);
    let too_long = server.lookup(lookup_params(&long)).await.unwrap_err();
    assert_eq!(too_long.code.0, ErrorCode::INVALID_PARAMS.0);
}

#[tokio::test]
async fn test_find_contacts_respects_max_results() {
    let server = lexical_server().await;
    let result = server
        .find_contacts(Parameters(FindContactsParams {
            query: "민원".to_string(),
            max_results: Some(1),
        }))
        .await
        .unwrap();

    let json = body(&result);
    assert_eq!(json["contacts"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["contacts"][0]["dept"], "민원상담실");
}

#[tokio::test]
async fn test_corpus_info_counts_lookups() {
    let server = lexical_server().await;
    server.lookup(lookup_params("주차")).await.unwrap();
    server.lookup(lookup_params("xyz")).await.unwrap();

    let json = body(&server.corpus_info().await.unwrap());
    assert_eq!(json["qa_count"], 5);
    assert_eq!(json["contact_count"], 3);
    assert!(json["fingerprint"].as_str().unwrap().starts_with("5-"));
    assert_eq!(json["metrics"]["queries_total"], 2);
    assert_eq!(json["metrics"]["empty_results_total"], 1);
    assert!(json.get("backend_state").is_none());
}

#[tokio::test]
async fn test_embedding_backend_state_is_reported() {
    let server = embedding_server().await;

    let before = body(&server.corpus_info().await.unwrap());
    assert_eq!(before["strategy"], "embedding");
    assert_eq!(before["backend_state"], "uninitialized");

    let json = body(&server.lookup(lookup_params("주차 안내")).await.unwrap());
    assert_eq!(json["best"]["id"], 4);

    let after = body(&server.corpus_info().await.unwrap());
    assert_eq!(after["backend_state"], "ready");
    assert_eq!(after["metrics"]["items_embedded_total"], 5);
    assert_eq!(after["metrics"]["cache_misses_total"], 1);
}
