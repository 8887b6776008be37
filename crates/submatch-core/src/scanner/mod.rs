mod walk;

pub use walk::{collect_candidates, collect_files, Candidates};
