/// Route identifiers understood by the app shell.
///
/// The core only hands these to a `Navigator`; what a route renders, and
/// how transitions are animated, is entirely the shell's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Category,
    Cart,
    Profile,
    Detail { product_id: i64 },
    Favorite,
    Order,
    Address,
    PersonalInformation,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "home".to_string(),
            Route::Category => "category".to_string(),
            Route::Cart => "cart".to_string(),
            Route::Profile => "profile".to_string(),
            Route::Detail { product_id } => format!("detail/{product_id}"),
            Route::Favorite => "favorite".to_string(),
            Route::Order => "order".to_string(),
            Route::Address => "address".to_string(),
            Route::PersonalInformation => "personal-information".to_string(),
        }
    }

    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "home" => Some(Route::Home),
            "category" => Some(Route::Category),
            "cart" => Some(Route::Cart),
            "profile" => Some(Route::Profile),
            "favorite" => Some(Route::Favorite),
            "order" => Some(Route::Order),
            "address" => Some(Route::Address),
            "personal-information" => Some(Route::PersonalInformation),
            other => other
                .strip_prefix("detail/")
                .and_then(|id| id.parse().ok())
                .map(|product_id| Route::Detail { product_id }),
        }
    }
}

/// Route-change request sink implemented by the shell.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_routes_round_trip() {
        for route in [
            Route::Home,
            Route::Category,
            Route::Cart,
            Route::Profile,
            Route::Favorite,
            Route::Order,
            Route::Address,
            Route::PersonalInformation,
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn detail_route_carries_the_product_id() {
        let route = Route::Detail { product_id: 42 };

        assert_eq!(route.path(), "detail/42");
        assert_eq!(Route::parse("detail/42"), Some(route));
    }

    #[test]
    fn unknown_paths_do_not_parse() {
        assert_eq!(Route::parse("checkout"), None);
        assert_eq!(Route::parse("detail/not-a-number"), None);
    }
}
