//! Input processing module
//! Handles the resume corpus, job description files and role batches

pub mod corpus;
pub mod file_detector;
pub mod manager;
pub mod roles;
pub mod text_extractor;
