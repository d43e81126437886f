//! Demonstration wrapper: exercise the cache and dump its contents from
//! most to least recently used.
//!
//! Run with `cargo run --example print_cache`.

use lru_kv::LruKvCache;

fn print_cache(cache: &LruKvCache) {
    let entries = cache.entries();
    if entries.is_empty() {
        return;
    }
    println!("\n>>>>>>>>>>>>>>>");
    println!("cache (key value):");
    for (key, value) in entries {
        print!("({}, {})", key, value);
    }
    println!("\n<<<<<<<<<<<<<<<");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cache = LruKvCache::new(3)?;

    cache.set("one", "1")?;
    cache.set("two", "2")?;
    cache.set("three", "3")?;
    print_cache(&cache);

    // Touch "one" so it outlives the next insert.
    cache.get("one");
    cache.set("four", "4")?;
    print_cache(&cache);

    match cache.get("two") {
        Some(value) => println!("two => {}", value),
        None => println!("two was evicted"),
    }

    Ok(())
}
