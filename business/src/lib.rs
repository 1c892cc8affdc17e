pub mod application {
    pub mod suggestion {
        pub mod aggregate;
        pub mod suggest;
    }
}

pub mod domain {
    pub mod logger;
    pub mod suggestion {
        pub mod errors;
        pub mod model;
        pub mod parser;
        pub mod prompt;
        pub mod queries;
        pub mod services;
        pub mod use_cases {
            pub mod suggest;
        }
    }
}
