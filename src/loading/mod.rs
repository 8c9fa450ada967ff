//! Reading render jobs for the command line driver

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::book::{Book, Chapter};
use crate::config::Config;
use crate::language::{LoadingError, Located};

/// Everything needed to render one chapter: the settings, the book model
/// with its registries already filled in, which chapter to render, and the
/// commands the compiler produced for it.
#[derive(Debug, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub config: Config,
    pub book: Book,
    pub chapter: String,
    pub nodes: Vec<Located>,
}

impl Job {
    pub fn chapter(&self) -> Option<&Chapter> {
        self.book
            .chapter(&self.chapter)
    }
}

/// Read a file and return an owned String.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Decode a job description and check that the chapter it names exists.
pub fn parse<'i>(filename: &'i Path, content: &str) -> Result<Job, LoadingError<'i>> {
    let job: Job = match serde_json::from_str(content) {
        Ok(job) => job,
        Err(error) => {
            debug!(?error);
            return Err(LoadingError {
                problem: "Invalid render job".to_string(),
                details: error.to_string(),
                filename,
            });
        }
    };

    if job
        .chapter()
        .is_none()
    {
        return Err(LoadingError {
            problem: "Unknown chapter".to_string(),
            details: format!("the book has no chapter with id {}", job.chapter),
            filename,
        });
    }

    debug!(
        "Found {} node{} for chapter {}",
        job.nodes
            .len(),
        if job.nodes.len() == 1 { "" } else { "s" },
        job.chapter
    );

    Ok(job)
}
