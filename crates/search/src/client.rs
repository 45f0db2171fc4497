//! Thin wrapper over the Meilisearch client.

use meilisearch_sdk::client::Client;
use meilisearch_sdk::errors::Error;
use meilisearch_sdk::settings::{MinWordSizeForTypos, Settings, TypoToleranceSettings};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use quorum_core::types::DbId;

use crate::documents::{
    AnswerDoc, CommentDoc, QuestionDoc, TagDoc, ANSWER_INDEX, COMMENT_INDEX, DOC_ID,
    QUESTION_INDEX, TAG_INDEX,
};
use crate::page::{SearchPage, PAGE_SIZE};

/// Sortable attribute exposed on the search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Date,
    Popularity,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortField {
    /// Meilisearch sort expression for this field and direction.
    pub fn sort_expr(self, order: SortOrder) -> &'static str {
        match (self, order) {
            (SortField::Date, SortOrder::Asc) => "created:asc",
            (SortField::Date, SortOrder::Desc) => "created:desc",
            (SortField::Popularity, SortOrder::Asc) => "upvotes:asc",
            (SortField::Popularity, SortOrder::Desc) => "upvotes:desc",
        }
    }
}

/// Handle to the search engine, shared via the app state.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
}

impl SearchClient {
    pub fn new(url: &str, api_key: Option<&str>) -> Result<Self, Error> {
        let client = Client::new(url, api_key)?;
        Ok(Self { client })
    }

    /// Whether the engine answers its health endpoint.
    pub async fn is_healthy(&self) -> bool {
        self.client.is_healthy().await
    }

    /// Push index settings for all four indexes. Run once at startup;
    /// settings updates are idempotent.
    pub async fn ensure_indexes(&self) -> Result<(), Error> {
        self.client
            .index(QUESTION_INDEX)
            .set_settings(
                &base_settings()
                    .with_searchable_attributes(["title", "body", "tags"])
                    .with_sortable_attributes(["created", "upvotes"]),
            )
            .await?;
        self.client
            .index(ANSWER_INDEX)
            .set_settings(
                &base_settings()
                    .with_searchable_attributes(["body"])
                    .with_sortable_attributes(["created", "upvotes"]),
            )
            .await?;
        self.client
            .index(COMMENT_INDEX)
            .set_settings(
                &base_settings()
                    .with_searchable_attributes(["body"])
                    .with_sortable_attributes(["created", "upvotes"]),
            )
            .await?;
        self.client
            .index(TAG_INDEX)
            .set_settings(&base_settings().with_searchable_attributes(["name", "description"]))
            .await?;

        info!("search index settings applied");
        Ok(())
    }

    pub async fn index_question(&self, doc: &QuestionDoc) -> Result<(), Error> {
        self.upsert(QUESTION_INDEX, doc).await
    }

    pub async fn index_answer(&self, doc: &AnswerDoc) -> Result<(), Error> {
        self.upsert(ANSWER_INDEX, doc).await
    }

    pub async fn index_comment(&self, doc: &CommentDoc) -> Result<(), Error> {
        self.upsert(COMMENT_INDEX, doc).await
    }

    pub async fn index_tag(&self, doc: &TagDoc) -> Result<(), Error> {
        self.upsert(TAG_INDEX, doc).await
    }

    /// Remove one document. Called after content deletion; a miss is not
    /// an error on the Meilisearch side.
    pub async fn remove(&self, index: &str, id: DbId) -> Result<(), Error> {
        self.client.index(index).delete_document(id).await?;
        Ok(())
    }

    /// Run a relevance-ordered query against one index.
    pub async fn search<T>(
        &self,
        index: &str,
        query: &str,
        page: i64,
    ) -> Result<SearchPage<T>, Error>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let page = page.max(1);
        let results = self
            .client
            .index(index)
            .search()
            .with_query(query)
            .with_page(page as usize)
            .with_hits_per_page(PAGE_SIZE as usize)
            .execute::<T>()
            .await?;
        Ok(to_page(results, page))
    }

    /// Run a query ordered by a sortable attribute instead of relevance.
    pub async fn search_sorted<T>(
        &self,
        index: &str,
        query: &str,
        page: i64,
        field: SortField,
        order: SortOrder,
    ) -> Result<SearchPage<T>, Error>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let page = page.max(1);
        let sort = [field.sort_expr(order)];
        let results = self
            .client
            .index(index)
            .search()
            .with_query(query)
            .with_page(page as usize)
            .with_hits_per_page(PAGE_SIZE as usize)
            .with_sort(&sort)
            .execute::<T>()
            .await?;
        Ok(to_page(results, page))
    }

    async fn upsert<T>(&self, index: &str, doc: &T) -> Result<(), Error>
    where
        T: Serialize + Send + Sync,
    {
        self.client
            .index(index)
            .add_or_update(std::slice::from_ref(doc), Some(DOC_ID))
            .await?;
        Ok(())
    }
}

fn to_page<T>(results: meilisearch_sdk::search::SearchResults<T>, page: i64) -> SearchPage<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let total_hits = results.total_hits.unwrap_or(0) as i64;
    let hits = results.hits.into_iter().map(|hit| hit.result).collect();
    SearchPage::new(hits, total_hits, page)
}

fn base_settings() -> Settings {
    Settings::new()
        .with_ranking_rules([
            "words",
            "typo",
            "proximity",
            "exactness",
            "attribute",
            "sort",
        ])
        .with_typo_tolerance(TypoToleranceSettings {
            enabled: Some(true),
            disable_on_attributes: None,
            disable_on_words: None,
            min_word_size_for_typos: Some(MinWordSizeForTypos {
                one_typo: Some(5),
                two_typos: Some(9),
            }),
        })
}
