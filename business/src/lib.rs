pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod checkout;
    }
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_page;
        pub mod update;
    }
    pub mod qr_payload {
        pub mod resolve;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod checkout;
        pub mod errors;
        pub mod model;
        pub mod storage;
        pub mod store;
        pub mod use_cases {
            pub mod add_item;
            pub mod checkout;
        }
    }
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_page;
            pub mod update;
        }
    }
    pub mod qr_payload {
        pub mod codec;
        pub mod errors;
        pub mod use_cases {
            pub mod resolve;
        }
    }
}
