//! Lookup service layer.
//!
//! A [`LookupSession`] owns everything a query needs: the corpus snapshot,
//! the active ranking strategy, the synonym table and the result caps. It
//! holds no per-query state, so one session serves concurrent callers.

use super::contact_gate::wants_contacts;
use super::outcome::{
    BestMatch, ContactCard, ContactsOutcome, CorpusInfo, LookupOutcome, RelatedSuggestion,
};
use crate::error::{LookupError, LookupResult};
use crate::matching::{rank_lexical, DuplicatePolicy, Ranked, SynonymTable, CONTACT_WEIGHTS};
use crate::metrics::{Metrics, QueryTimer};
use crate::models::CorpusSnapshot;
use crate::search::{fingerprint, RankingStrategy};
use async_trait::async_trait;
use std::sync::Arc;

/// Longest accepted query, in characters.
const MAX_QUERY_CHARS: usize = 500;

/// Result caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupLimits {
    /// Runner-up entries offered as related questions
    pub max_related: usize,

    /// Rows in the contact panel
    pub max_contacts: usize,
}

impl Default for LookupLimits {
    fn default() -> Self {
        Self {
            max_related: 2,
            max_contacts: 5,
        }
    }
}

/// Lookup service trait for business operations.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Answer a free-text query: best entry, related entries and, when the
    /// query asks for it, matching contacts.
    async fn lookup(&self, query: &str) -> LookupResult<LookupOutcome>;

    /// Search the contact directory directly, without hint gating.
    async fn find_contacts(
        &self,
        query: &str,
        max_results: Option<usize>,
    ) -> LookupResult<ContactsOutcome>;

    /// Corpus sizes, fingerprint, strategy and counters.
    fn corpus_info(&self) -> CorpusInfo;
}

/// Default implementation of LookupService.
pub struct LookupSession {
    snapshot: Arc<CorpusSnapshot>,
    strategy: Arc<dyn RankingStrategy>,
    synonyms: SynonymTable,
    policy: DuplicatePolicy,
    limits: LookupLimits,
    metrics: Metrics,
}

impl LookupSession {
    /// Create a session with the default synonym table, policy and caps.
    pub fn new(
        snapshot: Arc<CorpusSnapshot>,
        strategy: Arc<dyn RankingStrategy>,
        metrics: Metrics,
    ) -> Self {
        Self {
            snapshot,
            strategy,
            synonyms: SynonymTable::korean_default(),
            policy: DuplicatePolicy::default(),
            limits: LookupLimits::default(),
            metrics,
        }
    }

    /// Replace the synonym table used for contact matching.
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Set how content-identical contact rows are reported.
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_limits(mut self, limits: LookupLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn snapshot(&self) -> &CorpusSnapshot {
        &self.snapshot
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Validate and trim a query.
    fn validate_query(query: &str) -> LookupResult<&str> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }
        if query.chars().count() > MAX_QUERY_CHARS {
            return Err(LookupError::InvalidQuery(format!(
                "Search query too long (max {} characters)",
                MAX_QUERY_CHARS
            )));
        }
        Ok(query)
    }

    /// Lexical ranking of the contact directory.
    fn rank_contacts(&self, query: &str) -> Vec<Ranked> {
        rank_lexical(
            &self.snapshot.contacts,
            query,
            &self.synonyms,
            CONTACT_WEIGHTS,
            self.policy,
        )
    }

    fn contact_cards(&self, ranked: &[Ranked], cap: usize) -> Vec<ContactCard> {
        ranked
            .iter()
            .take(cap)
            .filter_map(|r| {
                self.snapshot
                    .contacts
                    .get(r.id)
                    .map(|item| ContactCard::new(r.id, r.score, item))
            })
            .collect()
    }
}

#[async_trait]
impl LookupService for LookupSession {
    async fn lookup(&self, query: &str) -> LookupResult<LookupOutcome> {
        let query = Self::validate_query(query)?;
        let timer = QueryTimer::new(self.metrics.clone());
        let contacts_requested = wants_contacts(query);

        let ranked = self.strategy.rank(query, &self.snapshot.qa).await?;

        let mut entries = ranked.iter().filter_map(|r| {
            self.snapshot.qa.get(r.id).map(|item| (r, item))
        });

        let (top, item) = match entries.next() {
            Some(found) => found,
            None => {
                tracing::debug!("No match for '{}' ({})", query, self.strategy.name());
                timer.complete_empty();
                return Ok(LookupOutcome::not_found(
                    query,
                    self.strategy.name(),
                    contacts_requested,
                ));
            }
        };

        let best = BestMatch::new(top.id, top.score, item);
        let related: Vec<RelatedSuggestion> = entries
            .take(self.limits.max_related)
            .map(|(r, item)| RelatedSuggestion::new(r.id, r.score, item))
            .collect();

        let contacts = if contacts_requested {
            self.contact_cards(&self.rank_contacts(query), self.limits.max_contacts)
        } else {
            Vec::new()
        };
        if !contacts.is_empty() {
            self.metrics.record_contact_panel();
        }

        tracing::debug!(
            "Lookup '{}' ({}): best {} score {:.3}, {} related, {} contacts",
            query,
            self.strategy.name(),
            best.id,
            best.score,
            related.len(),
            contacts.len()
        );
        timer.complete();

        Ok(LookupOutcome {
            query: query.to_string(),
            strategy: self.strategy.name(),
            best: Some(best),
            related,
            contacts,
            contacts_requested,
            message: None,
            example_queries: Vec::new(),
        })
    }

    async fn find_contacts(
        &self,
        query: &str,
        max_results: Option<usize>,
    ) -> LookupResult<ContactsOutcome> {
        let query = Self::validate_query(query)?;
        let cap = max_results.unwrap_or(self.limits.max_contacts);

        let ranked = self.rank_contacts(query);
        let contacts = self.contact_cards(&ranked, cap);

        tracing::debug!(
            "Contact search '{}': {} matches, returning {}",
            query,
            ranked.len(),
            contacts.len()
        );

        Ok(ContactsOutcome {
            query: query.to_string(),
            contacts,
            total_matches: ranked.len(),
        })
    }

    fn corpus_info(&self) -> CorpusInfo {
        CorpusInfo {
            qa_count: self.snapshot.qa.len(),
            contact_count: self.snapshot.contacts.len(),
            fingerprint: fingerprint(&self.snapshot.qa),
            strategy: self.strategy.name(),
            backend_state: self.strategy.backend_state(),
            metrics: self.metrics.summary(),
        }
    }
}
