pub mod articles;

pub use articles::{ArticleDto, ArticleInput};
