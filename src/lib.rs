// Crate entry point. Declares modules so binaries and tests can reach them.

pub mod shared {
    pub mod config;
    pub mod infrastructure {
        pub mod document_store;
    }
}

pub mod modules {
    pub mod app {
        pub mod resolver;
    }
    pub mod client_build {
        pub mod core {
            pub mod build_config;
            pub mod plugin;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod vite_config;
            }
        }
    }
}

pub mod shell;
