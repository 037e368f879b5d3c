use std::sync::Arc;

use eyre::Result;
use futures::future::BoxFuture;
use spotbot_psql::{
    model::{Sighting, SightingScope},
    Database,
};

/// Where paginated sightings are loaded from.
pub trait SightingSource: Send + Sync + 'static {
    fn count(&self, scope: SightingScope) -> BoxFuture<'_, Result<u64>>;

    /// Newest first. An offset past the end yields an empty list.
    fn page(
        &self,
        scope: SightingScope,
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'_, Result<Vec<Sighting>>>;
}

impl SightingSource for Database {
    fn count(&self, scope: SightingScope) -> BoxFuture<'_, Result<u64>> {
        Box::pin(self.count_sightings(scope))
    }

    fn page(
        &self,
        scope: SightingScope,
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'_, Result<Vec<Sighting>>> {
        Box::pin(self.select_sightings(scope, offset, limit))
    }
}

impl<T: SightingSource> SightingSource for Arc<T> {
    #[inline]
    fn count(&self, scope: SightingScope) -> BoxFuture<'_, Result<u64>> {
        (**self).count(scope)
    }

    #[inline]
    fn page(
        &self,
        scope: SightingScope,
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'_, Result<Vec<Sighting>>> {
        (**self).page(scope, offset, limit)
    }
}
