pub mod application {
    pub mod scan {
        pub mod end_session;
        pub mod get_by_id;
        pub mod get_history;
        pub mod get_state;
        pub mod submit;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod scan {
        pub mod catalog;
        pub mod category;
        pub mod errors;
        pub mod image;
        pub mod model;
        pub mod parser;
        pub mod repository;
        pub mod services;
        pub mod session;
        pub mod use_cases {
            pub mod end_session;
            pub mod get_by_id;
            pub mod get_history;
            pub mod get_state;
            pub mod submit;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
