pub mod inputs;
pub mod report;
pub mod scoring;
