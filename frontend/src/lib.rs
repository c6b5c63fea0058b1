pub mod config;
pub mod content;
pub mod state {
    pub mod accordion;
    pub mod modal;
    pub mod scroll;
}
pub mod utils {
    pub mod hover;
    pub mod scroll_source;
}
pub mod components {
    pub mod faq;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod login_modal;
    pub mod navbar;
}
pub mod pages {
    pub mod landing;
}

pub use pages::landing::App;
