use pebble_series::cli::build::build_site;
use pebble_series::cli::load_site;
use pebble_series::content::LoadOptions;
use pebble_series::models::PaginationConfig;
use pebble_series::services::{adjacency, pages, pagination, series};
use pebble_series::{Collection, Config};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_article(root: &Path, relative: &str, frontmatter: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("---\n{}\n---\n\nBody text.\n", frontmatter.trim())).unwrap();
}

/// A small blog: three standalone posts, a three-part Rust series, a
/// two-part Chinese-titled series, a draft and a file without a title.
fn create_test_blog() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let blogs = dir.path().join("src/content/blogs");

    write_article(&blogs, "hello-world.md", "title: Hello World\ndatetime: 2023-01-10");
    write_article(&blogs, "tools/Editor Setup.md", "title: Editor Setup\ndatetime: 2023-06-01");
    write_article(&blogs, "year-review.mdx", "title: Year Review\ndatetime: 2023-12-31");

    write_article(
        &blogs,
        "rust/ownership.md",
        "title: Ownership\ndatetime: 2024-02-01\nparent: Rust 入門\nseriesIndex: 2",
    );
    write_article(
        &blogs,
        "rust/install.md",
        "title: Install\ndatetime: 2024-01-01\nparent: \"Rust 入門\"\nseriesIndex: 1",
    );
    write_article(
        &blogs,
        "rust/extras.md",
        "title: Extras\ndatetime: 2024-01-15\nparent: Rust 入門 ",
    );

    write_article(
        &blogs,
        "ds/stack.md",
        "title: 堆疊\ndatetime: 2024-05-01\nparent: 資料結構\nseriesIndex: 1",
    );
    write_article(
        &blogs,
        "ds/queue.md",
        "title: 佇列\ndatetime: 2024-05-02\nparent: 資料結構\nseriesIndex: 2",
    );

    write_article(
        &blogs,
        "draft.md",
        "title: Draft\ndatetime: 2024-07-01\nisEnabled: false",
    );
    write_article(&blogs, "broken.md", "datetime: 2024-07-01");
    fs::write(blogs.join("notes.txt"), "not markdown").unwrap();

    let config = r#"
[site]
title = "Coding Afternoon"
description = "軟體開發技術分享"
url = "https://blog.example"

[pagination]
items_per_page = 2
"#;
    fs::write(dir.path().join("pebble-series.toml"), config).unwrap();

    dir
}

fn load(dir: &TempDir) -> Collection {
    Collection::load(
        &dir.path().join("src/content/blogs"),
        &LoadOptions::default(),
    )
    .expect("Failed to load collection")
}

mod loader_integration_tests {
    use super::*;

    #[test]
    fn test_load_skips_drafts_and_invalid_files() {
        let dir = create_test_blog();
        let collection = load(&dir);

        assert_eq!(collection.len(), 8);
        assert!(collection.get_by_slug("draft").is_none());
        assert!(collection.get_by_slug("broken").is_none());
    }

    #[test]
    fn test_load_includes_drafts_when_asked() {
        let dir = create_test_blog();
        let options = LoadOptions {
            include_disabled: true,
            ..Default::default()
        };
        let collection =
            Collection::load(&dir.path().join("src/content/blogs"), &options).unwrap();

        let draft = collection.get_by_slug("draft").unwrap();
        assert!(!draft.is_enabled);
    }

    #[test]
    fn test_ids_and_slugs_follow_paths() {
        let dir = create_test_blog();
        let collection = load(&dir);

        let setup = collection.get_by_slug("tools/editor-setup").unwrap();
        assert_eq!(setup.id, "tools/Editor Setup.md");
        assert!(collection.get_by_slug("year-review").is_some());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = Collection::load(&dir.path().join("nope"), &LoadOptions::default());
        assert!(result.is_err());
    }
}

mod series_integration_tests {
    use super::*;

    #[test]
    fn test_series_list_from_disk() {
        let dir = create_test_blog();
        let collection = load(&dir);

        let list = series::generate_series_list(&collection);
        assert_eq!(list.len(), 2);

        assert_eq!(list[0].name, "資料結構");
        assert_eq!(list[0].slug, "資料結構");
        assert_eq!(list[1].name, "Rust 入門");
        assert_eq!(list[1].slug, "rust-入門");

        let order: Vec<&str> = list[1].articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(order, vec!["Install", "Ownership", "Extras"]);
        assert_eq!(list[1].count, 3);
    }

    #[test]
    fn test_every_series_member_shares_the_name() {
        let dir = create_test_blog();
        let collection = load(&dir);

        for s in series::generate_series_list(&collection) {
            assert!(s.count > 0);
            assert_eq!(s.count, s.articles.len());
            for article in &s.articles {
                assert_eq!(article.series_name.as_deref(), Some(s.name.as_str()));
            }
        }
    }

    #[test]
    fn test_series_summary_from_disk() {
        let dir = create_test_blog();
        let collection = load(&dir);

        let rust = series::find_series_by_slug(&collection, "rust-入門").unwrap();
        let summary = series::get_series_summary(&rust);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.first_date.as_deref(), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(summary.latest_date.as_deref(), Some("2024-02-01T00:00:00.000Z"));
    }

    #[test]
    fn test_series_page_from_disk() {
        let dir = create_test_blog();
        let collection = load(&dir);
        let config = PaginationConfig::with_items_per_page(2);

        let page =
            pages::build_series_page(&collection, "rust-入門", 2, &config, "https://blog.example")
                .unwrap();
        assert_eq!(page.paginated_articles.total_pages, 2);
        assert_eq!(page.paginated_articles.items.len(), 1);
        assert_eq!(page.paginated_articles.items[0].title, "Extras");
        assert!(page.next_page.is_none());
        assert_eq!(page.prev_page.as_deref(), Some("/series/rust-入門"));
    }
}

mod adjacency_integration_tests {
    use super::*;

    fn slug(article: Option<&pebble_series::models::Article>) -> Option<&str> {
        article.map(|a| a.slug.as_str())
    }

    #[test]
    fn test_standalone_feed_neighbours() {
        let dir = create_test_blog();
        let collection = load(&dir);

        let newest = adjacency::get_adjacent_posts(&collection, "year-review");
        assert_eq!(slug(newest.prev_post), None);
        assert_eq!(slug(newest.next_post), Some("tools/editor-setup"));

        let oldest = adjacency::get_adjacent_posts(&collection, "hello-world");
        assert_eq!(slug(oldest.prev_post), Some("tools/editor-setup"));
        assert_eq!(slug(oldest.next_post), None);
    }

    #[test]
    fn test_series_neighbours() {
        let dir = create_test_blog();
        let collection = load(&dir);

        let middle = adjacency::get_adjacent_series_posts(&collection, "rust/ownership", "Rust 入門");
        assert_eq!(slug(middle.prev_post), Some("rust/install"));
        assert_eq!(slug(middle.next_post), Some("rust/extras"));

        let feed = adjacency::get_adjacent_posts(&collection, "rust/ownership");
        assert!(feed.prev_post.is_none() && feed.next_post.is_none());
    }
}

mod pagination_integration_tests {
    use super::*;

    #[test]
    fn test_paging_the_whole_collection() {
        let dir = create_test_blog();
        let collection = load(&dir);
        let articles: Vec<_> = collection.articles().iter().collect();
        let config = PaginationConfig::with_items_per_page(3);

        let first = pagination::create_pagination(&articles, 1, &config);
        assert_eq!(first.total_pages, 3);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            seen.extend(pagination::create_pagination(&articles, page, &config).items);
        }
        assert_eq!(seen, articles);
    }
}

mod build_integration_tests {
    use super::*;

    #[test]
    fn test_build_writes_navigation_and_feed() {
        let dir = create_test_blog();
        let (config, collection) = load_site(&dir.path().join("pebble-series.toml")).unwrap();
        let output = dir.path().join("dist");

        build_site(&config, &collection, &output, "https://blog.example").unwrap();

        let index: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("series/index.json")).unwrap())
                .unwrap();
        assert_eq!(index["totalSeries"], 2);
        assert_eq!(index["seriesList"][0]["slug"], "資料結構");

        assert!(output.join("series/rust-入門/1.json").exists());
        assert!(output.join("series/rust-入門/2.json").exists());
        assert!(!output.join("series/rust-入門/3.json").exists());

        let nav: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(output.join("blogs/rust/install/nav.json")).unwrap(),
        )
        .unwrap();
        assert!(nav["prev"].is_null());
        assert_eq!(nav["next"]["slug"], "rust/ownership");

        let rss = fs::read_to_string(output.join("feed.xml")).unwrap();
        assert!(rss.contains("<title>Coding Afternoon</title>"));
        assert!(rss.contains("https://blog.example/blogs/hello-world/"));
        assert_eq!(rss.matches("<item>").count(), 8);
    }

    #[test]
    fn test_build_refuses_slug_collisions() {
        let dir = TempDir::new().unwrap();
        let blogs = dir.path().join("blogs");
        write_article(&blogs, "a.md", "title: A\ndatetime: 2024-01-01\nparent: C++ Notes");
        write_article(&blogs, "b.md", "title: B\ndatetime: 2024-01-02\nparent: C Notes");

        let collection = Collection::load(&blogs, &LoadOptions::default()).unwrap();
        let result = build_site(
            &Config::default(),
            &collection,
            &dir.path().join("dist"),
            "https://blog.example",
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("c-notes"));
    }

    #[test]
    fn test_build_skips_series_without_a_usable_slug() {
        let dir = TempDir::new().unwrap();
        let blogs = dir.path().join("blogs");
        let long_name = "a".repeat(160);
        write_article(&blogs, "sparkle.md", "title: Sparkle\ndatetime: 2024-01-01\nparent: ✨");
        write_article(
            &blogs,
            "long.md",
            &format!("title: Long\ndatetime: 2024-01-02\nparent: {}", long_name),
        );
        write_article(&blogs, "go.md", "title: Go\ndatetime: 2024-01-03\nparent: Go Notes");

        let collection = Collection::load(&blogs, &LoadOptions::default()).unwrap();
        let output = dir.path().join("dist");
        build_site(&Config::default(), &collection, &output, "https://blog.example").unwrap();

        assert!(output.join("series/go-notes/1.json").exists());
        assert!(!output.join("series/1.json").exists());
        assert!(!output.join("series").join(&long_name).exists());
        assert!(output.join("blogs/sparkle/nav.json").exists());
        assert_eq!(
            series::find_invalid_slugs(&series::generate_series_list(&collection)).len(),
            2
        );
    }

    #[test]
    fn test_build_keeps_nav_files_inside_output() {
        let dir = TempDir::new().unwrap();
        let blogs = dir.path().join("blogs");
        write_article(&blogs, "escape.md", "title: Escape\ndatetime: 2024-01-01\nslug: ../../escaped");
        write_article(&blogs, "blank.md", "title: Blank\ndatetime: 2024-01-02\nslug: \"\"");

        let collection = Collection::load(&blogs, &LoadOptions::default()).unwrap();
        let output = dir.path().join("out/dist");
        build_site(&Config::default(), &collection, &output, "https://blog.example").unwrap();

        assert!(!dir.path().join("escaped/nav.json").exists());
        assert!(!dir.path().join("out/escaped/nav.json").exists());
        assert!(!output.join("blogs/nav.json").exists());
        assert!(output.join("blogs/escape/nav.json").exists());
        assert!(output.join("blogs/blank/nav.json").exists());
    }

    #[test]
    fn test_build_writes_only_pre_generated_pages() {
        let dir = TempDir::new().unwrap();
        let blogs = dir.path().join("blogs");
        for i in 1..=5 {
            write_article(
                &blogs,
                &format!("part-{}.md", i),
                &format!("title: Part {}\ndatetime: 2024-01-0{}\nparent: Long Run\nseriesIndex: {}", i, i, i),
            );
        }

        let mut config = Config::default();
        config.pagination.items_per_page = 1;
        config.pagination.pre_generate_pages = 2;

        let collection = Collection::load(&blogs, &LoadOptions::default()).unwrap();
        let output = dir.path().join("dist");
        build_site(&config, &collection, &output, "https://blog.example").unwrap();

        assert!(output.join("series/long-run/2.json").exists());
        assert!(!output.join("series/long-run/3.json").exists());
        let later = pages::build_series_page(&collection, "long-run", 5, &config.pagination, "")
            .unwrap();
        assert_eq!(later.paginated_articles.items[0].title, "Part 5");
    }
}
