use liquid::model::Value;
use liquid::Object;
use log::debug;

use crate::collections::post::model::Post;
use crate::collections::related::RelatedPosts;
use crate::layout::{Layouts, Renderer};
use crate::utils::error::QuillResult;
use crate::utils::value::deep_merge;

impl Post {
    /// Payload for rendering this post.
    ///
    /// `{"site": {"related_posts": [...]}, "page": <projection>}` merged
    /// over a copy of `site_payload`. Keys set here win.
    pub fn payload(&self, site_payload: &Object, posts: &[Post], related: &dyn RelatedPosts) -> Object {
        let related_posts: Vec<Value> = related
            .related_posts(self, posts)
            .into_iter()
            .map(|post| Value::Object(post.to_liquid_shallow()))
            .collect();

        let mut site = Object::new();
        site.insert("related_posts".into(), Value::Array(related_posts));

        let mut overlay = Object::new();
        overlay.insert("site".into(), Value::Object(site));
        overlay.insert("page".into(), Value::Object(self.to_liquid(posts)));

        let mut payload = site_payload.clone();
        deep_merge(&mut payload, overlay);
        payload
    }

    /// Render the excerpt, then the body, against `payload`.
    ///
    /// The excerpt sees the same payload minus `page.layout`, so it stays
    /// a bare fragment.
    pub fn render(&mut self, layouts: &Layouts, payload: &Object, renderer: &dyn Renderer) -> QuillResult<()> {
        debug!("Rendering {}", self.path());

        // extract before taking the mutable handle
        self.excerpt();
        if let Some(excerpt) = self.excerpt.get_mut() {
            excerpt.render(layouts, &without_page_layout(payload), renderer)?;
        }

        self.output = Some(renderer.render(&self.content, payload, layouts)?);
        Ok(())
    }
}

/// Copy of `payload` with `page.layout` removed
fn without_page_layout(payload: &Object) -> Object {
    let mut payload = payload.clone();
    if let Some(Value::Object(page)) = payload.get_mut("page") {
        page.remove("layout");
    }
    payload
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use liquid::model::ValueView;

    use super::*;
    use crate::collections::related::{MostRecentPosts, NoRelatedPosts};
    use crate::config::Config;
    use crate::front_matter::FrontMatter;
    use crate::layout::{Layout, LiquidRenderer};

    /// Records every call and echoes the content back
    #[derive(Default)]
    struct EchoRenderer {
        calls: RefCell<Vec<(String, Object)>>,
    }

    impl Renderer for EchoRenderer {
        fn render(&self, content: &str, payload: &Object, _layouts: &Layouts) -> QuillResult<String> {
            self.calls.borrow_mut().push((content.to_string(), payload.clone()));
            Ok(format!("<{}>", content))
        }
    }

    fn post(name: &str) -> Post {
        Post::new(&Config::default(), "", name, FrontMatter::new(), "Lead.\n\nRest.").unwrap()
    }

    fn site_payload() -> Object {
        let mut site = Object::new();
        site.insert("title".into(), Value::scalar("Blog".to_string()));
        site.insert("related_posts".into(), Value::scalar("stale".to_string()));
        let mut page = Object::new();
        page.insert("title".into(), Value::scalar("Site page".to_string()));

        let mut payload = Object::new();
        payload.insert("site".into(), Value::Object(site));
        payload.insert("page".into(), Value::Object(page));
        payload
    }

    fn site_field(payload: &Object, key: &str) -> Value {
        payload.get("site").and_then(|s| s.as_object()).and_then(|s| s.get(key)).unwrap().to_value()
    }

    #[test]
    fn test_payload_merges_over_site() {
        let posts = vec![post("2008-11-05-a.md"), post("2008-11-06-b.md")];
        let payload = posts[0].payload(&site_payload(), &posts, &NoRelatedPosts);

        assert_eq!(site_field(&payload, "title").to_kstr().to_string(), "Blog");
        assert_eq!(ValueView::as_array(&site_field(&payload, "related_posts")).map(|a| a.size()), Some(0));

        let page = payload.get("page").and_then(|p| p.as_object()).unwrap();
        assert_eq!(page.get("title").unwrap().to_kstr().to_string(), "A");
        assert_eq!(page.get("url").unwrap().to_kstr().to_string(), "/2008/11/05/a.html");
    }

    #[test]
    fn test_payload_lists_related_posts() {
        let posts = vec![post("2008-11-05-a.md"), post("2008-11-06-b.md"), post("2008-11-07-c.md")];
        let payload = posts[0].payload(&Object::new(), &posts, &MostRecentPosts::new(10));

        let related = site_field(&payload, "related_posts");
        let related = ValueView::as_array(&related).unwrap();
        assert_eq!(related.size(), 2);
        let first = related.first().and_then(|v| v.as_object()).unwrap();
        assert_eq!(first.get("title").unwrap().to_kstr().to_string(), "C");
    }

    #[test]
    fn test_render_sets_excerpt_and_output() {
        let renderer = EchoRenderer::default();
        let posts = vec![post("2008-11-05-a.md")];
        let payload = posts[0].payload(&site_payload(), &posts, &NoRelatedPosts);

        let mut p = posts[0].clone();
        p.render(&Layouts::new(), &payload, &renderer).unwrap();

        assert_eq!(p.output(), Some("<Lead.\n\nRest.>"));
        assert_eq!(p.excerpt().output(), Some("<Lead.>"));

        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "Lead.");
        assert_eq!(calls[1].0, "Lead.\n\nRest.");
        assert_eq!(calls[1].1, payload);
    }

    #[test]
    fn test_projection_uses_rendered_content() {
        let renderer = EchoRenderer::default();
        let mut p = post("2008-11-05-a.md");
        let payload = p.payload(&Object::new(), &[], &NoRelatedPosts);
        p.render(&Layouts::new(), &payload, &renderer).unwrap();

        let obj = p.to_liquid(&[]);
        assert_eq!(obj.get("content").unwrap().to_kstr().to_string(), "<Lead.\n\nRest.>");
        assert_eq!(obj.get("excerpt").unwrap().to_kstr().to_string(), "<Lead.>");
    }

    #[test]
    fn test_excerpt_is_not_wrapped_in_layout() {
        let fm = FrontMatter::from_yaml("layout: default").unwrap();
        let mut p = Post::new(&Config::default(), "", "2008-11-05-a.md", fm, "Lead.\n\nRest.").unwrap();

        let mut layouts = Layouts::new();
        layouts.insert(
            "default".to_string(),
            Layout {
                name: "default".to_string(),
                content: "<html>{{ content }}</html>".to_string(),
                front_matter: FrontMatter::new(),
            },
        );

        let renderer = LiquidRenderer::new().unwrap();
        let payload = p.payload(&Object::new(), &[], &NoRelatedPosts);
        p.render(&layouts, &payload, &renderer).unwrap();

        assert_eq!(p.excerpt().output(), Some("Lead."));
        assert_eq!(p.output(), Some("<html>Lead.\n\nRest.</html>"));

        let page = p.to_liquid(&[]);
        assert_eq!(page.get("excerpt").unwrap().to_kstr().to_string(), "Lead.");
    }

    #[test]
    fn test_excerpt_payload_keeps_other_page_keys() {
        let renderer = EchoRenderer::default();
        let fm = FrontMatter::from_yaml("layout: default\nauthor: Ana").unwrap();
        let mut p = Post::new(&Config::default(), "", "2008-11-05-a.md", fm, "Lead.\n\nRest.").unwrap();
        let payload = p.payload(&Object::new(), &[], &NoRelatedPosts);
        p.render(&Layouts::new(), &payload, &renderer).unwrap();

        let calls = renderer.calls.borrow();
        let excerpt_page = calls[0].1.get("page").and_then(|v| v.as_object()).unwrap();
        assert!(excerpt_page.get("layout").is_none());
        assert_eq!(excerpt_page.get("author").unwrap().to_kstr().to_string(), "Ana");

        let body_page = calls[1].1.get("page").and_then(|v| v.as_object()).unwrap();
        assert_eq!(body_page.get("layout").unwrap().to_kstr().to_string(), "default");
    }
}
