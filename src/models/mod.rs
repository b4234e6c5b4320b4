mod article;
mod pagination;
mod series;

pub use article::*;
pub use pagination::*;
pub use series::*;
