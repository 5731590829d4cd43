pub mod storage;
pub mod types;

pub use storage::{get_tips_path, load_tips, save_tips};
pub use types::TipCollection;
