use crate::cache::SchemaCache;
use crate::error::ClientError;
use crate::provider::SchemaProvider;
use selectql_core::Schema;

/// Build a [`Schema`] from `cache` when it holds an entry for the provider's
/// cache key, or from `provider` otherwise (storing the document in `cache`
/// once it has been built successfully).
///
/// Failing cache reads and writes are logged and otherwise ignored.
pub fn load_schema(
    provider: &dyn SchemaProvider,
    cache: Option<&dyn SchemaCache>,
) -> Result<Schema, ClientError> {
    let cache_key = provider.cache_key();

    if let Some(cache) = cache {
        match cache.get(cache_key) {
            Ok(Some(raw_schema)) => {
                tracing::debug!("Returning schema `{cache_key}` from cache");
                return Ok(Schema::from_raw(raw_schema)?);
            },
            Ok(None) => tracing::trace!("No cached schema for `{cache_key}`"),
            Err(err) => tracing::warn!("Failed to read schema `{cache_key}` from cache: {err}"),
        }
    }

    let raw_schema = provider.load_schema()?;
    let schema = Schema::from_raw(raw_schema)?;

    if let Some(cache) = cache
        && let Err(err) = cache.put(cache_key, schema.raw()) {
        tracing::warn!("Failed to store schema `{cache_key}` in cache: {err}");
    }

    tracing::debug!(
        "Loaded schema `{cache_key}` with {} types",
        schema.all_types().count(),
    );
    Ok(schema)
}
