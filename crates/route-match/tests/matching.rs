//! End-to-end matching scenarios: one descriptor, many requests.

use route_match::{RouteDescriptor, compile, match_route};

#[test]
fn one_descriptor_serves_many_requests() {
    let route = compile("users/{username}/account/{id}");

    let requests = [
        ("/users/nic/account/1", "nic", "1"),
        ("/users/ada/account/42/", "ada", "42"),
        ("users/bob/account/7", "bob", "7"),
        ("/users/eve/account/9/settings/email", "eve", "9"),
    ];

    for (path, username, id) in requests {
        let hit = match_route(Some(path), &route).unwrap();
        assert_eq!(hit.get_param("username"), Some(username), "path {path:?}");
        assert_eq!(hit.get_param("id"), Some(id), "path {path:?}");
        assert_eq!(hit.route, path);
    }

    assert!(match_route(Some("/users/nic"), &route).is_none());
    assert!(match_route(Some("/accounts/1"), &route).is_none());
}

#[test]
fn matched_prefix_chains_into_sub_routes() {
    // A caller can route hierarchically: match a parent route, strip its
    // matched prefix, and hand the remainder to a child route.
    let parent = compile("api/{version}");
    let child = compile("users/{id}");

    let path = "/api/v2/users/42";
    let outer = match_route(Some(path), &parent).unwrap();
    assert_eq!(outer.matched, "/api/v2/");
    assert_eq!(outer.get_param("version"), Some("v2"));

    // Keep the slash that ends the matched prefix as the remainder's lead.
    let rest = &path[outer.matched.len() - 1..];
    assert_eq!(rest, "/users/42");

    let inner = match_route(Some(rest), &child).unwrap();
    assert_eq!(inner.get_param("id"), Some("42"));
}

#[test]
fn descriptor_is_shared_across_threads() {
    let route = compile("users/{id}");

    std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for n in 0..8 {
            let route = &route;
            handles.push(scope.spawn(move || {
                let path = format!("/users/{n}");
                let hit = route.match_path(Some(&path)).unwrap();
                hit.get_param("id").map(str::to_owned)
            }));
        }
        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().as_deref(), Some(n.to_string().as_str()));
        }
    });
}

#[test]
fn persisted_descriptor_still_matches() {
    let route = compile("users/{username}/account/{id}");
    let json = serde_json::to_string(&route).unwrap();

    let restored: RouteDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, route);

    let hit = restored.match_path(Some("/users/nic/account/1")).unwrap();
    assert_eq!(hit.get_param("username"), Some("nic"));
    assert_eq!(hit.get_param("id"), Some("1"));
}
