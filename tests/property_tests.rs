use proptest::prelude::*;
use top_articles::config::AppConfig;
use top_articles::internal::models::Article;
use top_articles::internal::ranker::{filter_and_sort_articles, filter_articles, rank};

fn arb_title() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), "[a-z]{1,8}".prop_map(Some)]
}

fn arb_article() -> impl Strategy<Value = Article> {
    (arb_title(), arb_title(), proptest::option::of(0u64..50)).prop_map(
        |(title, story_title, num_comments)| Article {
            title,
            story_title,
            num_comments,
            ..Default::default()
        },
    )
}

proptest! {
    #[test]
    fn test_filter_keeps_exactly_titled_in_order(articles in prop::collection::vec(arb_article(), 0..40)) {
        let filtered = filter_articles(&articles);
        let expected: Vec<Article> = articles
            .iter()
            .filter(|a| {
                a.title.as_deref().is_some_and(|t| !t.is_empty())
                    || a.story_title.as_deref().is_some_and(|t| !t.is_empty())
            })
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn test_sort_is_non_increasing_and_stable(articles in prop::collection::vec(arb_article(), 0..40)) {
        // Give every surviving record a unique, position-ordered title so stability is observable
        let tagged: Vec<Article> = filter_articles(&articles)
            .into_iter()
            .enumerate()
            .map(|(i, mut a)| {
                a.title = Some(format!("{i:04}"));
                a
            })
            .collect();

        let sorted = filter_and_sort_articles(&tagged);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].comment_count() >= pair[1].comment_count());
            if pair[0].comment_count() == pair[1].comment_count() {
                prop_assert!(pair[0].title < pair[1].title);
            }
        }
    }

    #[test]
    fn test_rank_is_prefix_of_full_ranking(articles in prop::collection::vec(arb_article(), 0..40), n in 0usize..50) {
        let full = rank(&articles, usize::MAX);
        let top = rank(&articles, n);
        prop_assert_eq!(top.len(), n.min(full.len()));
        prop_assert_eq!(&full[..top.len()], &top[..]);
    }

    #[test]
    fn test_config_parsing_resilience(s in "\\PC*") {
        // Random input should produce an Err, never a panic
        let _ = ron::from_str::<AppConfig>(&s);
    }
}
