//! Schedule assembly
//!
//! Fans out one resolution per selected module (bounded), then merges the results
//! into a [`Schedule`] keyed by module code in selection order. Every selected module
//! gets an entry, even when it resolved to zero lessons.

use crate::types::{ModuleResolution, ModuleSelection, Schedule, Selection};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Resolves a single module selection into concrete lessons.
///
/// Implementations must not fail; problems are reported through the resolution status.
#[async_trait]
pub trait ModuleResolver: Send + Sync {
    async fn resolve(
        &self,
        module: &ModuleSelection,
        academic_year: &str,
        term: u32,
    ) -> ModuleResolution;
}

#[async_trait]
impl<R: ModuleResolver + ?Sized> ModuleResolver for Arc<R> {
    async fn resolve(
        &self,
        module: &ModuleSelection,
        academic_year: &str,
        term: u32,
    ) -> ModuleResolution {
        (**self).resolve(module, academic_year, term).await
    }
}

pub struct ScheduleAssembler<R> {
    resolver: R,
    max_concurrent: usize,
}

impl<R: ModuleResolver> ScheduleAssembler<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Upper bound on in-flight module lookups (at least 1).
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub async fn assemble(&self, selection: &Selection, academic_year: &str) -> Schedule {
        debug!(
            modules = selection.modules.len(),
            max_concurrent = self.max_concurrent,
            academic_year,
            term = selection.term,
            "Assembling schedule"
        );

        // `buffered` yields in input order, so results line up with `selection.modules`.
        let resolutions: Vec<ModuleResolution> = stream::iter(selection.modules.iter())
            .map(|module| self.resolver.resolve(module, academic_year, selection.term))
            .buffered(self.max_concurrent)
            .collect()
            .await;

        let mut schedule = Schedule::new();
        for (module, mut resolution) in selection.modules.iter().zip(resolutions) {
            resolution.module_code = module.module_code.clone();
            schedule.insert(resolution);
        }

        info!(
            modules = schedule.len(),
            lessons = schedule.total_lessons(),
            "Schedule assembled"
        );
        schedule
    }
}
