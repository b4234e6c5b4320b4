pub mod adjacency;
pub mod feed;
pub mod ordering;
pub mod pages;
pub mod pagination;
pub mod series;
pub mod slug;
