use liquid::model::Value;
use liquid::Object;

use crate::collections::post::model::Post;
use crate::utils::value::deep_merge;

/// Date format exposed to templates
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

impl Post {
    /// Template view of the post.
    ///
    /// The front matter with the computed fields merged on top, so a
    /// front matter `url` or `title` never shadows the real one.
    /// `next`/`previous` are looked up in `posts` and embedded without
    /// their own neighbours.
    pub fn to_liquid(&self, posts: &[Post]) -> Object {
        let mut computed = self.computed_fields();
        computed.insert("next".into(), neighbour(self.next(posts)));
        computed.insert("previous".into(), neighbour(self.previous(posts)));

        let mut obj = self.front_matter.to_liquid_object();
        deep_merge(&mut obj, computed);
        obj
    }

    /// Projection with `next` and `previous` left as nil
    pub(crate) fn to_liquid_shallow(&self) -> Object {
        let mut obj = self.front_matter.to_liquid_object();
        deep_merge(&mut obj, self.computed_fields());
        obj
    }

    fn computed_fields(&self) -> Object {
        let mut obj = Object::new();

        obj.insert("title".into(), Value::scalar(self.title()));
        obj.insert("url".into(), Value::scalar(self.url().to_string()));
        obj.insert("date".into(), Value::scalar(self.date.format(DATE_FORMAT).to_string()));
        obj.insert("id".into(), Value::scalar(self.id()));
        obj.insert("categories".into(), string_array(&self.categories));
        obj.insert("next".into(), Value::Nil);
        obj.insert("previous".into(), Value::Nil);
        obj.insert("tags".into(), string_array(&self.tags));

        let content = self.output.clone().unwrap_or_else(|| self.content.clone());
        obj.insert("content".into(), Value::scalar(content));
        obj.insert("excerpt".into(), Value::scalar(self.excerpt().text().to_string()));
        obj.insert("path".into(), Value::scalar(self.path()));

        obj
    }
}

fn neighbour(post: Option<&Post>) -> Value {
    match post {
        Some(post) => Value::Object(post.to_liquid_shallow()),
        None => Value::Nil,
    }
}

fn string_array(values: &[String]) -> Value {
    Value::Array(values.iter().map(|v| Value::scalar(v.clone())).collect())
}

#[cfg(test)]
mod tests {
    use liquid::model::ValueView;

    use crate::collections::post::model::Post;
    use crate::config::Config;
    use crate::front_matter::FrontMatter;

    fn post(name: &str, yaml: &str) -> Post {
        let fm = FrontMatter::from_yaml(yaml).unwrap();
        Post::new(&Config::default(), "", name, fm, "First paragraph.\n\nSecond.").unwrap()
    }

    fn text(obj: &liquid::Object, key: &str) -> String {
        obj.get(key).map(|v| v.to_kstr().to_string()).unwrap_or_default()
    }

    #[test]
    fn test_computed_fields() {
        let p = post("2008-11-05-my-post.md", "tags: [rust, web]\ncategory: Notes");
        let obj = p.to_liquid(std::slice::from_ref(&p));

        assert_eq!(text(&obj, "title"), "My Post");
        assert_eq!(text(&obj, "url"), "/notes/2008/11/05/my-post.html");
        assert_eq!(text(&obj, "date"), "2008-11-05 00:00:00 +0000");
        assert_eq!(text(&obj, "id"), "/notes/2008/11/05/my-post");
        assert_eq!(text(&obj, "content"), "First paragraph.\n\nSecond.");
        assert_eq!(text(&obj, "excerpt"), "First paragraph.");
        assert_eq!(text(&obj, "path"), "_posts/2008-11-05-my-post.md");
        assert_eq!(obj.get("tags").and_then(|v| ValueView::as_array(v)).map(|a| a.size()), Some(2));
        assert!(obj.get("next").unwrap().is_nil());
        assert!(obj.get("previous").unwrap().is_nil());
    }

    #[test]
    fn test_computed_fields_win_over_front_matter() {
        let p = post("2008-11-05-my-post.md", "url: /bogus/\nid: nope\nauthor: Ana");
        let obj = p.to_liquid(&[]);

        assert_eq!(text(&obj, "url"), "/2008/11/05/my-post.html");
        assert_eq!(text(&obj, "id"), "/2008/11/05/my-post");
        assert_eq!(text(&obj, "author"), "Ana");
    }

    #[test]
    fn test_neighbours_are_shallow() {
        let posts = vec![
            post("2008-11-05-a.md", ""),
            post("2008-11-06-b.md", ""),
            post("2008-11-07-c.md", ""),
        ];
        let obj = posts[1].to_liquid(&posts);

        let next = obj.get("next").and_then(|v| v.as_object()).unwrap();
        assert_eq!(next.get("title").unwrap().to_kstr().to_string(), "C");
        assert!(next.get("next").unwrap().is_nil());
        assert!(next.get("previous").unwrap().is_nil());

        let previous = obj.get("previous").and_then(|v| v.as_object()).unwrap();
        assert_eq!(previous.get("url").unwrap().to_kstr().to_string(), "/2008/11/05/a.html");
    }
}
