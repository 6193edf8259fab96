pub mod article;
pub mod attachment;
pub mod category;
pub mod errors;
