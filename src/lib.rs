pub mod deadline;
pub mod output;
pub mod party;
pub mod scoring;
pub mod store;
pub mod submit;
