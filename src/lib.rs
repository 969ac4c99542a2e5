pub mod display;
pub mod search;
pub mod topk;

pub use search::*;
pub use topk::TopK;
