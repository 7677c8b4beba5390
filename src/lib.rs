
pub mod service {
    pub mod traits {
        pub mod i_service;
    }
    pub mod combine;
    pub mod config_service;
    pub mod file;
    pub mod strip;
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
    pub mod strip;
}

pub mod facade {
    pub mod traits {
        pub mod i_combine;
    }
    pub mod combine_facade;
}

pub mod models {
    pub mod combine;
    pub mod file;
    pub mod selection;
    pub mod strip;
}

pub mod utils {
    pub mod utils;
}
