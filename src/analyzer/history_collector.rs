use crate::config::Config;
use crate::domain::{DocsUrlPolicy, HistoricalVersion, SemVer, StablePolicy};
use crate::error::Result;
use crate::git::Repository;
use tracing::debug;

/// Collects the released versions of a repository from its tags
pub struct HistoryCollector {
    stable: StablePolicy,
    docs: DocsUrlPolicy,
}

impl HistoryCollector {
    /// Create a new history collector
    pub fn new(stable: StablePolicy, docs: DocsUrlPolicy) -> Self {
        HistoryCollector { stable, docs }
    }

    /// Create a collector from the stable and docs configuration sections
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(HistoryCollector::new(
            StablePolicy::from_config(&config.stable)?,
            DocsUrlPolicy::from_config(&config.docs)?,
        ))
    }

    /// List the repository tags and turn them into sorted historical versions
    pub fn collect<R: Repository + ?Sized>(&self, repo: &R) -> Result<Vec<HistoricalVersion>> {
        let tags = repo.list_tags()?;
        Ok(self.collect_from_tags(tags.iter().map(String::as_str)))
    }

    /// Parse tag names, dropping those that are not semantic versions,
    /// and sort ascending by version precedence
    pub fn collect_from_tags<'a>(
        &self,
        tags: impl IntoIterator<Item = &'a str>,
    ) -> Vec<HistoricalVersion> {
        let mut versions: Vec<HistoricalVersion> = tags
            .into_iter()
            .filter_map(|tag| match SemVer::parse(tag) {
                Ok(version) => Some(version),
                Err(e) => {
                    debug!(tag, "skipping tag: {}", e);
                    None
                }
            })
            .map(|version| self.annotate(version))
            .collect();

        versions.sort_by(|a, b| a.version.cmp_precedence(&b.version));
        versions
    }

    fn annotate(&self, version: SemVer) -> HistoricalVersion {
        HistoricalVersion {
            is_stable: self.stable.is_stable(&version),
            docs_url: self.docs.docs_url(&version),
            version,
        }
    }
}
