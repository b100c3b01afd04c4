//! Dispatch behaviour of a Router in both modes.

use hsh_router::{DispatchContext, DispatchMode, Flow, Pattern, Router};

mod common;
use common::{register_all, Hits};

#[test]
fn test_first_registered_route_wins_in_first_match_mode() {
    let hits = Hits::new();
    let mut router = Router::default();
    router.set("mode", "first_match");
    register_all(
        &mut router,
        &hits,
        &[
            ("/user/:id", "first", Flow::Continue),
            ("/user/:name", "second", Flow::Continue),
            ("*", "fallback", Flow::Continue),
        ],
    );

    let ctx = router.show("/user/42");

    assert_eq!(hits.take(), ["first"]);
    assert_eq!(ctx.param("id"), Some("42"));
    assert_eq!(ctx.param("name"), None);
}

#[test]
fn test_duplicate_patterns_are_kept_and_earlier_wins() {
    let hits = Hits::new();
    let mut router = Router::default();
    register_all(
        &mut router,
        &hits,
        &[("/a", "one", Flow::Stop), ("/a", "two", Flow::Stop)],
    );

    assert_eq!(router.routes().len(), 2);
    router.show("/a");
    assert_eq!(hits.take(), ["one"]);
}

#[test]
fn test_chain_continue_reaches_next_matching_route() {
    let hits = Hits::new();
    let mut router = Router::default();
    assert_eq!(router.options().mode, DispatchMode::Chain);
    register_all(
        &mut router,
        &hits,
        &[
            ("*", "log", Flow::Continue),
            ("/admin/*", "guard", Flow::Continue),
            ("/other", "skipped", Flow::Continue),
            ("/admin/:page", "page", Flow::Stop),
            ("*", "never", Flow::Continue),
        ],
    );

    let ctx = router.show("/admin/users");

    assert_eq!(hits.take(), ["log", "guard", "page"]);
    assert_eq!(ctx.matched(), ["*", "/admin/*", "/admin/:page"]);
    assert_eq!(ctx.param("page"), Some("users"));
}

#[test]
fn test_chain_stop_ends_dispatch() {
    let hits = Hits::new();
    let mut router = Router::default();
    register_all(
        &mut router,
        &hits,
        &[("*", "guard", Flow::Stop), ("/a", "a", Flow::Stop)],
    );

    let ctx = router.show("/a");
    assert_eq!(hits.take(), ["guard"]);
    assert_eq!(ctx.handled(), 1);
}

#[test]
fn test_chain_params_accumulate_across_routes() {
    let mut router = Router::default();
    router
        .register("/:section/*", |_: &mut DispatchContext| Flow::Continue)
        .unwrap()
        .register("/shop/:item", |_: &mut DispatchContext| Flow::Stop)
        .unwrap();

    let ctx = router.show("/shop/hat");
    assert_eq!(ctx.param("section"), Some("shop"));
    assert_eq!(ctx.param("item"), Some("hat"));
}

#[test]
fn test_no_match_is_silent() {
    let hits = Hits::new();
    for mode in ["first_match", "chain"] {
        let mut router = Router::default();
        router.set("mode", mode);
        register_all(&mut router, &hits, &[("/a", "a", Flow::Continue)]);

        let ctx = router.show("/b");
        assert_eq!(ctx.handled(), 0);
        assert!(ctx.params().is_empty());
        assert_eq!(router.current_path(), Some("/b"));
    }
    assert!(hits.take().is_empty());
}

#[test]
fn test_raw_pattern_positional_params() {
    let mut router = Router::default();
    router
        .register(Pattern::raw(r"^/(\d{4})/(\d{2})$").unwrap(), |ctx: &mut DispatchContext| {
            assert_eq!(ctx.params().get_index(0), Some("2024"));
            assert_eq!(ctx.params().get_index(1), Some("05"));
        })
        .unwrap();

    assert_eq!(router.show("/2024/05").handled(), 1);
    assert_eq!(router.show("/2024/5").handled(), 0);
}

#[test]
fn test_greedy_param_swallows_remaining_segments() {
    let mut router = Router::default();
    router
        .register("/user/:id", |_: &mut DispatchContext| {})
        .unwrap();

    let ctx = router.show("/user/42/extra");
    assert_eq!(ctx.param("id"), Some("42/extra"));
}

#[test]
fn test_catch_all_and_params_accept_newlines() {
    let hits = Hits::new();
    let mut router = Router::default();
    router.set("mode", "first_match");
    register_all(
        &mut router,
        &hits,
        &[("/user/:id", "user", Flow::Stop), ("*", "fallback", Flow::Stop)],
    );

    let ctx = router.show("/user/4\n2");
    assert_eq!(ctx.param("id"), Some("4\n2"));

    let ctx = router.show("/a\nb");
    assert_eq!(ctx.matched(), ["*"]);
    assert_eq!(hits.take(), ["user", "fallback"]);
}

#[test]
fn test_handler_redirects_are_applied_after_chain() {
    let location = hsh_router::MemoryLocation::new();
    let mut router = Router::new(location.clone());
    router.set("prefix", "!");
    router
        .register("/private", |ctx: &mut DispatchContext| {
            ctx.redirect_internal("/login");
            Flow::Continue
        })
        .unwrap()
        .register("*", |ctx: &mut DispatchContext| {
            ctx.redirect_external("https://example.com/bye");
        })
        .unwrap();

    let ctx = router.show("/private");

    assert_eq!(ctx.handled(), 2);
    assert_eq!(location.hash_writes(), ["!/login"]);
    assert_eq!(location.assigned(), ["https://example.com/bye"]);
}

#[test]
fn test_current_path_tracks_latest_dispatch() {
    let mut router = Router::default();
    router.show("/one");
    router.show("/two");
    assert_eq!(router.current_path(), Some("/two"));
}
