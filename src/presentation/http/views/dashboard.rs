// src/presentation/http/views/dashboard.rs
use super::{DASHBOARD_SUMMARY_CHARS, display_date, escape, layout};
use crate::application::dto::{ArticleDto, AuthenticatedUser};
use crate::domain::article::summarize;
use std::fmt::Write as _;

const NEW_ARTICLE_FORM: &str = r#"<section class="card">
<h2>New article</h2>
<form id="new-article">
<label>Title <input type="text" name="title" required></label>
<label>Excerpt <input type="text" name="excerpt"></label>
<label>Content <textarea name="content" rows="8" required></textarea></label>
<label><input type="checkbox" name="published"> Publish now</label>
<p class="error" id="new-article-error"></p>
<button type="submit">Save</button>
</form>
</section>
"#;

const DASHBOARD_SCRIPT: &str = r"
document.getElementById('new-article').addEventListener('submit', async function (event) {
  event.preventDefault();
  var data = new FormData(event.target);
  var response = await fetch('/api/articles', {
    method: 'POST',
    credentials: 'same-origin',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({
      title: data.get('title'),
      excerpt: data.get('excerpt'),
      content: data.get('content'),
      published: data.get('published') === 'on'
    })
  });
  if (response.ok) { window.location.reload(); return; }
  var payload = await response.json().catch(function () { return {}; });
  document.getElementById('new-article-error').textContent = payload.message || 'Could not save the article';
});
document.querySelectorAll('[data-toggle-publish]').forEach(function (button) {
  button.addEventListener('click', async function () {
    var response = await fetch('/api/articles/' + button.dataset.id, {
      method: 'PATCH',
      credentials: 'same-origin',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ published: button.dataset.published !== 'true' })
    });
    if (response.ok) { window.location.reload(); }
  });
});
";

pub fn dashboard_page(user: &AuthenticatedUser, articles: &[ArticleDto]) -> String {
    let mut body = format!(
        "<h1>Dashboard</h1>\n<p>Welcome back, {}.</p>\n{NEW_ARTICLE_FORM}<h2>Your articles</h2>\n",
        escape(user.display_name())
    );

    if articles.is_empty() {
        body.push_str(r#"<p class="meta">You have not written any articles yet.</p>"#);
    }

    for article in articles {
        let (badge, action) = if article.published {
            (r#"<span class="badge published">Published</span>"#, "Unpublish")
        } else {
            (r#"<span class="badge draft">Draft</span>"#, "Publish")
        };
        let summary = summarize(
            article.excerpt.as_deref(),
            &article.content,
            DASHBOARD_SUMMARY_CHARS,
        );
        let _ = write!(
            body,
            r#"<article class="card"><h3>{title} {badge}</h3><p>{summary}</p><p class="meta">{date}</p><button type="button" data-toggle-publish data-id="{id}" data-published="{published}">{action}</button></article>
"#,
            title = escape(&article.title),
            summary = escape(&summary),
            date = display_date(article.created_at),
            id = article.id,
            published = article.published,
        );
    }

    layout("Dashboard", Some(user), &body, DASHBOARD_SCRIPT)
}
