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

fn values(hit: &RouteMatch) -> Vec<Option<&str>> {
    hit.values.iter().map(|value| value.as_deref()).collect()
}

#[test]
fn set_when_two_static_branches_then_each_matches_alone() {
    let route = Route::any(["/one", "/two"], None).expect("set should build");

    assert_eq!(find(&route, "/one").matched, "/one");
    assert_eq!(find(&route, "/two").matched, "/two");
    miss(&route, "/three");
    miss(&route, "/one/two");
}

#[test]
fn set_when_branches_carry_parameters_then_keys_concatenate_in_branch_order() {
    let route = Route::any(["/:foo", "/user/:bar"], None).expect("set should build");

    let names: Vec<&str> = route.keys().iter().map(|key| key.name.as_str()).collect();
    assert_eq!(names, vec!["foo", "bar"]);
}

#[test]
fn set_when_first_branch_matches_then_other_branch_groups_report_none() {
    let route = Route::any(["/:foo", "/user/:bar"], None).expect("set should build");

    let hit = find(&route, "/route");
    assert_eq!(values(&hit), vec![Some("route"), None]);

    let hit = find(&route, "/user/123");
    assert_eq!(values(&hit), vec![None, Some("123")]);
}

#[test]
fn set_when_bare_groups_in_branches_then_counter_restarts() {
    let route = Route::any(["/(\\d+)", "/x/(\\w+)"], None).expect("set should build");

    let names: Vec<&str> = route.keys().iter().map(|key| key.name.as_str()).collect();
    assert_eq!(names, vec!["0", "0"]);
}

#[test]
fn set_when_sensitive_then_applies_to_every_branch() {
    let options = CompileOptions::builder().sensitive(true).build();
    let route = Route::any(["/one", "/two"], Some(options)).expect("set should build");

    assert_eq!(find(&route, "/one").matched, "/one");
    miss(&route, "/ONE");
    miss(&route, "/TWO");
}

#[test]
fn set_when_non_ending_then_every_branch_matches_prefixes() {
    let options = CompileOptions::builder().end(false).build();
    let route = Route::any(["/one", "/two"], Some(options)).expect("set should build");

    assert_eq!(find(&route, "/one/route").matched, "/one");
    assert_eq!(find(&route, "/two/route").matched, "/two");
}
