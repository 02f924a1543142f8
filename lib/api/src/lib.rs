pub mod rest;
pub mod view;

pub use rest::RestApi;
pub use view::{ItemView, RecommendationResponse, RecommendationView};
