use proptest::prelude::*;
use wordsplit::tokenizer::{split, token_count};
use wordsplit::SeparatorSet;

fn separator_sets() -> impl Strategy<Value = SeparatorSet> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', ',', ';', 'a']), 0..4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn tokens_never_contain_separators(input in "[ab ,;\t]{0,40}", set in separator_sets()) {
        let tokens = split(&input, &set).unwrap();
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.len(), token_count(&input, &set));
        for t in &tokens {
            prop_assert!(!t.chars().any(|c| set.contains(c)), "token {:?}", t);
        }
    }

    #[test]
    fn only_edge_tokens_may_be_empty(input in "[ab ,;\t]{1,40}", set in separator_sets()) {
        let tokens = split(&input, &set).unwrap();
        if tokens.len() > 2 {
            for t in &tokens[1..tokens.len() - 1] {
                prop_assert!(!t.is_empty());
            }
        }
    }

    #[test]
    fn each_token_resplits_to_itself(input in "[ab ,;\t]{0,40}", set in separator_sets()) {
        for t in split(&input, &set).unwrap() {
            prop_assert_eq!(split(&t, &set).unwrap(), vec![t.clone()]);
        }
    }

    #[test]
    fn joining_with_one_separator_round_trips(input in "[ab ,;\t]{0,40}", set in separator_sets()) {
        prop_assume!(!set.is_empty());
        let sep = set.iter().next().unwrap().to_string();
        let tokens = split(&input, &set).unwrap();
        let joined = tokens.join(sep.as_str());
        prop_assert_eq!(split(&joined, &set).unwrap(), tokens);
    }

    #[test]
    fn empty_set_returns_input(input in ".{0,40}") {
        prop_assert_eq!(split(&input, &SeparatorSet::empty()).unwrap(), vec![input.clone()]);
    }
}
