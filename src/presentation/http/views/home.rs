// src/presentation/http/views/home.rs
use super::{PUBLIC_SUMMARY_CHARS, display_date, escape, layout};
use crate::application::dto::{AuthenticatedUser, PublicArticleDto};
use crate::domain::article::summarize;
use std::fmt::Write as _;

pub fn home_page(user: Option<&AuthenticatedUser>, articles: &[PublicArticleDto]) -> String {
    let mut body = String::from(
        "<h1>Welcome to the Article Portal</h1>\n<p class=\"meta\">Read what our authors have published.</p>\n",
    );

    if articles.is_empty() {
        body.push_str(
            r#"<div class="card"><p>No articles have been published yet.</p><p><a href="/register">Register</a> to write the first one.</p></div>"#,
        );
    }

    for entry in articles {
        let article = &entry.article;
        let author = if entry.author.name.trim().is_empty() {
            &entry.author.email
        } else {
            &entry.author.name
        };
        let summary = summarize(
            article.excerpt.as_deref(),
            &article.content,
            PUBLIC_SUMMARY_CHARS,
        );
        let _ = write!(
            body,
            r#"<article class="card"><h2>{title}</h2><p>{summary}</p><p class="meta">By {author} &middot; {date}</p></article>
"#,
            title = escape(&article.title),
            summary = escape(&summary),
            author = escape(author),
            date = display_date(article.created_at),
        );
    }

    layout("Article Portal", user, &body, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{ArticleDto, AuthorDto};
    use chrono::{TimeZone, Utc};

    fn entry(title: &str, content: &str) -> PublicArticleDto {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        PublicArticleDto {
            article: ArticleDto {
                id: 1,
                title: title.into(),
                content: content.into(),
                excerpt: None,
                published: true,
                author_id: 1,
                created_at: at,
                updated_at: at,
            },
            author: AuthorDto {
                name: "Ana".into(),
                email: "ana@x.com".into(),
            },
        }
    }

    #[test]
    fn empty_state_links_to_registration() {
        let html = home_page(None, &[]);
        assert!(html.contains("No articles have been published yet."));
        assert!(html.contains(r#"href="/register""#));
    }

    #[test]
    fn cards_escape_content_and_show_author() {
        let html = home_page(None, &[entry("<b>Hi</b>", "body")]);
        assert!(html.contains("&lt;b&gt;Hi&lt;/b&gt;"));
        assert!(!html.contains("<b>Hi</b>"));
        assert!(html.contains("By Ana"));
        assert!(html.contains("2/1/2024"));
    }

    #[test]
    fn long_content_is_cut_at_public_length() {
        let content = "x".repeat(PUBLIC_SUMMARY_CHARS + 10);
        let html = home_page(None, &[entry("t", &content)]);
        let expected = format!("{}...", "x".repeat(PUBLIC_SUMMARY_CHARS));
        assert!(html.contains(&expected));
    }
}
