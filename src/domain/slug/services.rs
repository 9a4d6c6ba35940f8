// src/domain/slug/services.rs
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::Slug;

/// Turns a display string into a base slug. May return an empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Collision oracle for one entity kind.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Whether a persisted record of this kind already holds `slug`.
    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool>;
}

/// Domain service producing unique slugs for any entity kind.
///
/// The kind is selected by the [`SlugLookup`] passed in, so categories and
/// books share one probing loop while their slug spaces stay separate.
pub struct UniqueSlugService {
    generator: Arc<dyn SlugGenerator>,
    max_attempts: u32,
}

impl UniqueSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, max_attempts: u32) -> Self {
        Self {
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Return `current` when it is set, otherwise the first free candidate
    /// among `base`, `base-1`, `base-2`, ... in that order.
    pub async fn assign<L>(
        &self,
        current: Option<&Slug>,
        display: &str,
        lookup: &L,
    ) -> DomainResult<Slug>
    where
        L: SlugLookup + ?Sized,
    {
        if let Some(existing) = current.filter(|slug| !slug.is_empty()) {
            return Ok(existing.clone());
        }

        let base = self.generator.slugify(display);
        let mut candidate = Slug::new(base.clone());
        let mut suffix = 0u64;

        while lookup.slug_exists(&candidate).await? {
            suffix += 1;
            candidate = Slug::with_suffix(&base, suffix);
        }

        tracing::debug!(base = %base, slug = %candidate, probes = suffix + 1, "slug assigned");
        Ok(candidate)
    }

    /// Assign a slug and hand it to `persist`, treating the storage unique
    /// constraint as authoritative.
    ///
    /// A generated slug that loses a race at insert time is re-assigned
    /// against a fresh view of the persisted slugs, up to `max_attempts`
    /// inserts. A preset slug is persisted once and any collision is
    /// returned to the caller.
    pub async fn persist_with_unique_slug<L, T, F, Fut>(
        &self,
        preset: Option<Slug>,
        display: &str,
        lookup: &L,
        mut persist: F,
    ) -> DomainResult<T>
    where
        L: SlugLookup + ?Sized,
        F: FnMut(Slug) -> Fut + Send,
        Fut: Future<Output = DomainResult<T>> + Send,
        T: Send,
    {
        if let Some(slug) = preset.filter(|slug| !slug.is_empty()) {
            return persist(slug).await;
        }

        let mut attempt = 1;
        loop {
            let slug = self.assign(None, display, lookup).await?;
            match persist(slug.clone()).await {
                Err(err) if err.is_slug_collision() && attempt < self.max_attempts => {
                    tracing::warn!(
                        slug = %slug,
                        attempt,
                        max_attempts = self.max_attempts,
                        "slug taken before insert; reassigning"
                    );
                    attempt += 1;
                }
                Err(err) if err.is_slug_collision() => {
                    tracing::warn!(slug = %slug, attempt, "slug assignment attempts exhausted");
                    return Err(err);
                }
                other => return other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::infrastructure::util::DefaultSlugGenerator;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct SetLookup {
        taken: Mutex<HashSet<String>>,
        probes: AtomicUsize,
    }

    impl SetLookup {
        fn with(slugs: &[&str]) -> Self {
            let lookup = Self::default();
            for slug in slugs {
                lookup.take(slug);
            }
            lookup
        }

        fn take(&self, slug: &str) {
            self.taken.lock().unwrap().insert(slug.to_string());
        }
    }

    #[async_trait]
    impl SlugLookup for SetLookup {
        async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            Ok(self.taken.lock().unwrap().contains(slug.as_str()))
        }
    }

    fn service(max_attempts: u32) -> UniqueSlugService {
        UniqueSlugService::new(Arc::new(DefaultSlugGenerator), max_attempts)
    }

    #[tokio::test]
    async fn same_base_yields_consecutive_suffixes() {
        let service = service(1);
        let lookup = SetLookup::default();
        let mut assigned = Vec::new();

        for _ in 0..4 {
            let slug = service.assign(None, "The Hobbit", &lookup).await.unwrap();
            lookup.take(slug.as_str());
            assigned.push(slug.into_inner());
        }

        assert_eq!(
            assigned,
            vec!["the-hobbit", "the-hobbit-1", "the-hobbit-2", "the-hobbit-3"]
        );
    }

    #[tokio::test]
    async fn scan_stops_at_first_unused_consecutive_suffix() {
        let service = service(1);
        let lookup = SetLookup::with(&["dune", "dune-1", "dune-3"]);

        let slug = service.assign(None, "Dune", &lookup).await.unwrap();

        assert_eq!(slug.as_str(), "dune-2");
        assert_eq!(lookup.probes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn present_slug_is_kept_without_probing() {
        let service = service(1);
        let lookup = SetLookup::with(&["custom"]);
        let current = Slug::new("custom");

        let slug = service
            .assign(Some(&current), "Something Else", &lookup)
            .await
            .unwrap();

        assert_eq!(slug, current);
        assert_eq!(lookup.probes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_present_slug_is_treated_as_unset() {
        let service = service(1);
        let lookup = SetLookup::default();
        let current = Slug::new("");

        let slug = service
            .assign(Some(&current), "Science Fiction", &lookup)
            .await
            .unwrap();

        assert_eq!(slug.as_str(), "science-fiction");
    }

    #[tokio::test]
    async fn degenerate_display_string_produces_empty_base() {
        let service = service(1);
        let lookup = SetLookup::default();

        let first = service.assign(None, "", &lookup).await.unwrap();
        lookup.take(first.as_str());
        let second = service.assign(None, "?!", &lookup).await.unwrap();

        assert_eq!(first.as_str(), "");
        assert_eq!(second.as_str(), "-1");
    }

    #[tokio::test]
    async fn lost_race_is_reassigned_against_fresh_view() {
        let service = service(3);
        let lookup = SetLookup::default();
        let calls = AtomicUsize::new(0);

        let slug = service
            .persist_with_unique_slug(None, "Dune", &lookup, |slug| {
                let call = calls.fetch_add(1, Ordering::SeqCst);
                if call == 0 {
                    // another writer committed the same slug first
                    lookup.take(slug.as_str());
                }
                async move {
                    if call == 0 {
                        Err(DomainError::SlugCollision(slug.into_inner()))
                    } else {
                        Ok(slug)
                    }
                }
            })
            .await
            .unwrap();

        assert_eq!(slug.as_str(), "dune-1");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn preset_collision_is_not_retried() {
        let service = service(5);
        let lookup = SetLookup::default();
        let calls = AtomicUsize::new(0);

        let result: DomainResult<Slug> = service
            .persist_with_unique_slug(Some(Slug::new("taken")), "Dune", &lookup, |slug| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(DomainError::SlugCollision(slug.into_inner())) }
            })
            .await;

        assert!(matches!(result, Err(DomainError::SlugCollision(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(lookup.probes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn exhausted_attempts_surface_the_collision() {
        let service = service(2);
        let lookup = SetLookup::default();
        let calls = AtomicUsize::new(0);

        let result: DomainResult<Slug> = service
            .persist_with_unique_slug(None, "Dune", &lookup, |slug| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(DomainError::SlugCollision(slug.into_inner())) }
            })
            .await;

        assert!(matches!(result, Err(DomainError::SlugCollision(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn other_persistence_errors_are_not_retried() {
        let service = service(5);
        let lookup = SetLookup::default();
        let calls = AtomicUsize::new(0);

        let result: DomainResult<Slug> = service
            .persist_with_unique_slug(None, "Dune", &lookup, |_slug| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(DomainError::Persistence("connection reset".into())) }
            })
            .await;

        assert!(matches!(result, Err(DomainError::Persistence(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
