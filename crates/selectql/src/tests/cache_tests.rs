use crate::cache::CacheError;
use crate::cache::DirectoryCache;
use crate::cache::InMemoryCache;
use crate::tests::starwars_raw;

type Result<T> = std::result::Result<T, CacheError>;

mod in_memory {
    use super::*;

    #[test]
    fn miss_then_hit() -> Result<()> {
        let cache = InMemoryCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get("mock://starwars")?, None);

        cache.put("mock://starwars", &starwars_raw())?;
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("mock://starwars")?, Some(starwars_raw()));
        assert_eq!(cache.get("mock://other")?, None);
        Ok(())
    }

    #[test]
    fn put_replaces_existing_entry() -> Result<()> {
        let cache = InMemoryCache::new();
        cache.put("key", &serde_json::json!({ "types": [] }))?;
        cache.put("key", &starwars_raw())?;

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("key")?, Some(starwars_raw()));
        Ok(())
    }

    #[test]
    fn is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryCache>();
        assert_send_sync::<DirectoryCache>();
    }
}

mod directory {
    use super::*;

    #[test]
    fn entries_survive_a_new_cache_instance() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir can be created");
        let cache_dir = dir.path().join("schemas");

        DirectoryCache::new(&cache_dir).put("https://example.com/graphql", &starwars_raw())?;

        let cache = DirectoryCache::new(&cache_dir);
        assert_eq!(cache.get("https://example.com/graphql")?, Some(starwars_raw()));
        assert_eq!(cache.get("https://example.com/other")?, None);
        Ok(())
    }

    #[test]
    fn keys_map_to_distinct_sanitized_files() {
        let cache = DirectoryCache::new("/tmp/selectql");
        let a = cache.entry_path("https://example.com/a");
        let b = cache.entry_path("https://example.com/a?");

        assert_ne!(a, b);
        assert_eq!(a.parent(), Some(cache.directory()));
        let file_name = a.file_name()
            .and_then(|name| name.to_str())
            .expect("file name is utf-8");
        assert!(file_name.starts_with("https___example_com_a-"));
        assert!(file_name.ends_with(".json"));
        assert_eq!(cache.entry_path("https://example.com/a"), a);
    }

    #[test]
    fn file_names_carry_a_sha256_prefix() {
        let cache = DirectoryCache::new("/tmp/selectql");
        assert_eq!(
            cache.entry_path("abc"),
            std::path::Path::new("/tmp/selectql/abc-ba7816bf8f01cfea.json"),
        );
    }

    #[test]
    fn corrupt_entry_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir can be created");
        let cache = DirectoryCache::new(dir.path());
        let path = cache.entry_path("key");
        std::fs::write(&path, "{ not json").expect("entry can be written");

        assert!(matches!(
            cache.get("key"),
            Err(CacheError::InvalidJson { path: err_path, .. }) if err_path == path,
        ));
    }
}
