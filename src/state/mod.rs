pub mod cleanup;

pub use cleanup::{clean_output, CleanupManager, CleanupReport};
