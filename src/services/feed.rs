use crate::config::SiteConfig;
use crate::models::{Article, SortOrder};
use crate::services::ordering::sort_articles;
use crate::Collection;
use quick_xml::escape::escape;

/// Articles that belong in the public feed, newest first. Slugs containing
/// `exclude_pattern` are held back.
pub fn feed_articles<'a>(collection: &'a Collection, exclude_pattern: &str) -> Vec<&'a Article> {
    let published: Vec<&Article> = collection
        .articles()
        .iter()
        .filter(|a| exclude_pattern.is_empty() || !a.slug.contains(exclude_pattern))
        .collect();
    sort_articles(&published, SortOrder::DateDesc)
}

pub fn article_url(site_url: &str, article: &Article) -> String {
    format!("{}/blogs/{}/", site_url.trim_end_matches('/'), article.slug)
}

pub fn generate_rss(site: &SiteConfig, site_url: &str, articles: &[&Article]) -> String {
    let site_url = site_url.trim_end_matches('/');
    let mut items = String::new();
    for article in articles {
        let link = article_url(site_url, article);
        let pub_date = article
            .published_at
            .map(|dt| format!("<pubDate>{}</pubDate>\n", dt.to_rfc2822()))
            .unwrap_or_default();
        items.push_str(&format!(
            r#"<item>
<title>{}</title>
<link>{}</link>
<guid>{}</guid>
{}<description><![CDATA[{}]]></description>
</item>
"#,
            escape(&article.title),
            escape(&link),
            escape(&link),
            pub_date,
            article.description.as_deref().unwrap_or("").replace("]]>", "]]&gt;"),
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
<channel>
<title>{}</title>
<link>{}</link>
<description>{}</description>
<language>{}</language>
<atom:link href="{}/feed.xml" rel="self" type="application/rss+xml"/>
{}
</channel>
</rss>"#,
        escape(&site.title),
        escape(site_url),
        escape(&site.description),
        escape(&site.language),
        escape(site_url),
        items
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            title: "Coding & Coffee".to_string(),
            description: "軟體開發技術分享".to_string(),
            url: "https://blog.example".to_string(),
            language: "zh-TW".to_string(),
        }
    }

    #[test]
    fn test_feed_excludes_pattern_and_sorts_newest_first() {
        let collection = Collection::from_articles(vec![
            Article::new("a", "a", "A", "2024-01-01"),
            Article::new("b", "drafts/not-deployed/b", "B", "2024-05-01"),
            Article::new("c", "c", "C", "2024-03-01").with_series("S", Some(1)),
        ]);
        let slugs: Vec<&str> = feed_articles(&collection, "not-deployed")
            .iter()
            .map(|a| a.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["c", "a"]);
    }

    #[test]
    fn test_rss_escapes_and_links() {
        let article = Article::new("x", "tips", "Rust <&> Go", "2024-01-02T03:04:05Z")
            .with_description("short");
        let rss = generate_rss(&site(), "https://blog.example/", &[&article]);
        assert!(rss.contains("<title>Coding &amp; Coffee</title>"));
        assert!(rss.contains("<title>Rust &lt;&amp;&gt; Go</title>"));
        assert!(rss.contains("<link>https://blog.example/blogs/tips/</link>"));
        assert!(rss.contains("2 Jan 2024 03:04:05"));
        assert!(rss.contains("<language>zh-TW</language>"));
        assert!(rss.contains(r#"<atom:link href="https://blog.example/feed.xml""#));
        assert!(rss.contains("<![CDATA[short]]>"));
    }
}
