pub mod application {
    pub mod cart {
        pub mod add_to_cart;
        pub mod clear_cart;
        pub mod remove_from_cart;
        pub mod remove_or_decrement;
        pub mod watch_cart;
        pub mod watch_quantity;
    }
    pub mod favorite {
        pub mod clear_favorites;
        pub mod toggle_favorite;
        pub mod watch_favorites;
        pub mod watch_is_favorite;
    }
    pub mod product {
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod get_categories;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod fault_policy;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod get_categories;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_to_cart;
            pub mod clear_cart;
            pub mod remove_from_cart;
            pub mod remove_or_decrement;
            pub mod watch_cart;
            pub mod watch_quantity;
        }
    }
    pub mod favorite {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod clear_favorites;
            pub mod toggle_favorite;
            pub mod watch_favorites;
            pub mod watch_is_favorite;
        }
    }
}
