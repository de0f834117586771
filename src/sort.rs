pub mod classify;
pub mod detect;
pub mod extract;
pub mod order;
pub mod rewrite;

use crate::config::Config;
use crate::error::Result;
use crate::types::Violation;
use extract::Extractor;

/// Sorting rules bound to one configuration.
///
/// Immutable once built; workers share it by reference.
#[derive(Debug)]
pub struct ClassSorter {
    config: Config,
    extractor: Extractor,
}

impl ClassSorter {
    pub fn new(config: Config) -> Result<Self> {
        let extractor = Extractor::new(&config.class_attributes)?;
        Ok(Self { config, extractor })
    }

    pub fn detect(&self, buf: &[u8]) -> Vec<Violation> {
        detect::detect(buf, &self.extractor, &self.config)
    }

    pub fn rewrite(&self, buf: &[u8]) -> Vec<u8> {
        rewrite::rewrite(buf, &self.extractor, &self.config)
    }
}
