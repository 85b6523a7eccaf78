use crate::collections::{read_posts, Post};
use crate::config::Config;
use crate::utils::error::QuillResult;

/// Print one line per post, oldest first
pub fn handle_list_command(config: Config) -> QuillResult<()> {
    for post in read_posts(&config)? {
        println!("{}", format_line(&post));
    }
    Ok(())
}

/// `date  url  title`
fn format_line(post: &Post) -> String {
    format!("{}  {}  {}", post.date().format("%Y-%m-%d"), post.url(), post.title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_matter::FrontMatter;

    #[test]
    fn test_format_line() {
        let post = Post::new(&Config::default(), "", "2008-11-05-my-post.md", FrontMatter::new(), "").unwrap();
        assert_eq!(format_line(&post), "2008-11-05  /2008/11/05/my-post.html  My Post");
    }
}
