pub mod app;
pub mod config;
pub mod content;
pub mod state;
pub mod storage;

pub mod components {
    pub mod blog_carousel;
    pub mod lazy_image;
    pub mod nav;
    pub mod skill_card;
}

pub mod pages {
    pub mod home;
}
