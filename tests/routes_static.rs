use routex_rs::{CompileOptions, Route, RouteMatch};

fn find(route: &Route, path: &str) -> RouteMatch {
    route
        .find(path)
        .expect("engine should finish")
        .expect("path should match")
}

fn miss(route: &Route, path: &str) {
    let hit = route.find(path).expect("engine should finish");
    assert!(hit.is_none(), "{path:?} should not match, got {hit:?}");
}

#[test]
fn route_when_root_pattern_then_matches_root() {
    let route = Route::new("/", None).expect("root route should build");

    let hit = find(&route, "/");

    assert_eq!(hit.matched, "/");
    assert!(hit.values.is_empty());
    assert!(route.keys().is_empty());
}

#[test]
fn route_when_static_path_then_matches_exactly() {
    let route = Route::new("/test", None).expect("static route should build");

    assert_eq!(find(&route, "/test").matched, "/test");
    miss(&route, "/route");
    miss(&route, "/test/route");
}

#[test]
fn route_when_trailing_slash_then_accepted_by_default() {
    let route = Route::new("/test", None).expect("static route should build");

    assert_eq!(find(&route, "/test/").matched, "/test/");
    miss(&route, "/test//");
}

#[test]
fn route_when_case_differs_then_matches_by_default() {
    let route = Route::new("/test", None).expect("static route should build");

    assert_eq!(find(&route, "/TEST").matched, "/TEST");
}

#[test]
fn route_when_sensitive_enabled_then_rejects_different_case() {
    let options = CompileOptions::builder().sensitive(true).build();
    let route = Route::new("/test", Some(options)).expect("sensitive route should build");

    assert_eq!(find(&route, "/test").matched, "/test");
    miss(&route, "/TEST");
}

#[test]
fn route_when_parentheses_escaped_then_matches_literally() {
    let route = Route::new("/\\(testing\\)", None).expect("escaped route should build");

    assert_eq!(find(&route, "/(testing)").matched, "/(testing)");
    miss(&route, "/testing");
    assert!(route.keys().is_empty());
}

#[test]
fn route_when_metacharacters_in_pattern_then_match_literally() {
    let route = Route::new("/te+st", None).expect("metachar route should build");

    assert_eq!(find(&route, "/te+st").matched, "/te+st");
    miss(&route, "/teest");
}

#[test]
fn route_when_pattern_has_no_leading_slash_then_still_matches() {
    let route = Route::new("test", None).expect("bare route should build");

    assert_eq!(find(&route, "test").matched, "test");
    miss(&route, "/test");
}
