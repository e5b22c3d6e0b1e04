//! In-memory test doubles shared by the integration tests.

#![allow(dead_code)]

mod mock_corpus_repository;
mod mock_embedder;
mod mock_store;

pub use mock_corpus_repository::MockCorpusRepository;
pub use mock_embedder::{CountingEmbedder, CountingLoader, FailingLoader};
pub use mock_store::FailingStore;

use faq_lookup::models::{ContactItem, Corpus, CorpusSnapshot, QaItem};

/// A small corpus in the shape of the published data file.
pub fn sample_snapshot() -> CorpusSnapshot {
    let mut deadline = QaItem::new("검사 기한은 언제인가요", "매월 말일까지 검사를 받아야 합니다.")
        .with_tags(["검사", "기한"])
        .with_policy("POL-INSPECT-01");
    deadline.version = Some("2024.1".to_string());
    deadline.source_url = Some("https://faq.example.com/policy/inspect".to_string());

    CorpusSnapshot::new(
        Corpus::new(vec![
            deadline,
            QaItem::new("검사 준비사항", "신분증과 신청서를 지참하세요.").with_tags(["검사", "준비"]),
            QaItem::new("검사 신청 방법", "온라인으로 접수할 수 있습니다.").with_tags(["신청", "접수"]),
            QaItem::new("담당자 연락처", "아래 담당 부서로 문의하세요.").with_tags(["연락처", "담당"]),
            QaItem::new("주차 안내", "지하 2층 주차장을 이용하세요.").with_tags(["주차"]),
        ]),
        Corpus::new(vec![
            ContactItem::new("검사지원팀", "051-440-1005")
                .with_person("김검사")
                .with_tags(["검사", "연락처", "담당"])
                .with_note("평일 09:00-18:00"),
            ContactItem::new("민원상담실", "051-440-2000")
                .with_tags(["상담", "민원"]),
            ContactItem::new("총무팀", "051-440-3000").with_tags(["주차", "시설"]),
        ]),
    )
}
