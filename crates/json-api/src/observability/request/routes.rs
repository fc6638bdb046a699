//! Route labels for spans and metrics.

use uuid::Uuid;

/// Label shared by every path the router does not serve.
pub(super) const UNMATCHED: &str = "unmatched";

/// Route patterns served by the application, as produced by [`normalize`].
const ROUTES: &[&str] = &[
    "/healthcheck",
    "/metrics",
    "/api-doc/openapi.json",
    "/docs",
    "/users",
    "/users/register",
    "/users/login",
    "/users/check-email",
    "/users/count",
    "/users/me",
    "/users/me/cart",
    "/users/me/orders",
    "/users/me/password",
    "/users/{uuid}",
    "/users/{uuid}/admin",
    "/products",
    "/products/all",
    "/products/count",
    "/products/search/{name}",
    "/products/{uuid}",
    "/products/{uuid}/archive",
    "/products/{uuid}/activate",
    "/carts",
    "/carts/{uuid}",
    "/carts/{uuid}/checkout",
    "/carts/{uuid}/recalculate",
    "/carts/{uuid}/items",
    "/carts/{uuid}/items/{uuid}",
    "/orders",
    "/orders/count",
    "/orders/total-sales",
    "/orders/user/{uuid}",
    "/orders/{uuid}",
];

/// Collapse caller-chosen segments into placeholders.
fn normalize(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.first() == Some(&"docs") {
        return "/docs".to_owned();
    }

    let mut label = String::new();

    for (index, segment) in segments.iter().enumerate() {
        label.push('/');

        if index == 2 && segments.starts_with(&["products", "search"]) {
            label.push_str("{name}");
        } else if Uuid::parse_str(segment).is_ok() {
            label.push_str("{uuid}");
        } else {
            label.push_str(segment);
        }
    }

    label
}

/// The route pattern a request path belongs to, or [`UNMATCHED`].
///
/// Labels come from a fixed set so metric cardinality does not grow with
/// search terms or probed URLs.
pub(super) fn route_label(path: &str) -> &'static str {
    let normalized = normalize(path);

    ROUTES
        .iter()
        .find(|route| **route == normalized)
        .copied()
        .unwrap_or(UNMATCHED)
}
