//! Property tests for pattern compilation.

use hsh_router::routing::{compile, Params};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Param(String),
    Wildcard,
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        "[a-zA-Z0-9._~()\\[\\]$^|?+{}-]{0,8}".prop_map(Segment::Literal),
        "[a-z_][a-z0-9_]{0,6}".prop_map(Segment::Param),
        Just(Segment::Wildcard),
    ]
}

proptest! {
    #[test]
    fn test_substituted_template_always_matches(
        segments in prop::collection::vec(segment(), 1..6),
        values in prop::collection::vec("[a-zA-Z0-9%/_-]{1,8}", 6),
    ) {
        let mut pattern = String::new();
        let mut path = String::new();
        let mut names = Vec::new();

        for (i, seg) in segments.iter().enumerate() {
            pattern.push('/');
            path.push('/');
            match seg {
                Segment::Literal(text) => {
                    pattern.push_str(text);
                    path.push_str(text);
                }
                Segment::Param(name) => {
                    pattern.push(':');
                    pattern.push_str(name);
                    path.push_str(&values[i]);
                    names.push(name.clone());
                }
                Segment::Wildcard => {
                    pattern.push('*');
                    path.push_str(&values[i]);
                }
            }
        }

        let matcher = compile(pattern.as_str()).unwrap();
        prop_assert_eq!(matcher.param_names(), names.as_slice());

        let mut params = Params::new();
        prop_assert!(matcher.capture_into(&path, &mut params), "{} !~ {}", path, pattern);
        for name in &names {
            prop_assert!(params.get(name).is_some());
        }
    }

    #[test]
    fn test_param_free_template_matches_itself_with_no_params(
        text in "(/[a-zA-Z0-9._~()$^|?+-]{0,6}){1,5}",
    ) {
        let matcher = compile(text.as_str()).unwrap();
        let mut params = Params::new();
        prop_assert!(matcher.capture_into(&text, &mut params));
        prop_assert!(params.is_empty());
    }

    #[test]
    fn test_catch_all_matches_non_empty(path in "(?s).{1,40}") {
        let matcher = compile("*").unwrap();
        prop_assert!(matcher.is_match(&path));
    }
}
