use super::*;

fn news(title: &str) -> NewsData {
    NewsData { title: title.to_owned(), date: "2024-03-07T15:05:00Z".to_owned(), desc: format!("{title} body") }
}

#[test]
fn default_limit_shows_first_item_only() {
    let items = vec![news("Newest"), news("Older"), news("Oldest")];
    let cards = news_cards(&items, DEFAULT_NEWS_PREVIEW_LIMIT);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Newest");
    assert_eq!(cards[0].date, "Mar 7, 3:05 PM");
    assert_eq!(cards[0].desc, "Newest body");
}

#[test]
fn empty_news_renders_no_cards() {
    assert!(news_cards(&[], DEFAULT_NEWS_PREVIEW_LIMIT).is_empty());
}

#[test]
fn larger_limit_is_capped_by_length() {
    let items = vec![news("A"), news("B")];
    assert_eq!(news_cards(&items, 5).len(), 2);
    assert_eq!(news_cards(&items, 0).len(), 0);
}
