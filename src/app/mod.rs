//! App layer - the editing session behind one open document
//!
//! A session owns the current request, the body format selection and the
//! headers/params editor text, and turns edits into request mutations.

pub mod state;
pub mod commands;

pub use state::Session;
