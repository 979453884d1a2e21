//! Main fingerprinting engine implementation.

use std::path::Path;

use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::api::results::{ComparisonReport, DocumentFingerprint};
use crate::core::config::SimHashConfig;
use crate::core::errors::Result;
use crate::core::text_source::{FsTextSource, TextSource};
use crate::detectors::simhash::{compare, SimHash, TextSignature};

/// Reads documents, fingerprints them and compares the results.
pub struct SimHashEngine<S = FsTextSource> {
    /// Engine configuration
    config: SimHashConfig,

    /// Fingerprint generator sized from the configuration
    simhash: SimHash,

    /// Where document text comes from
    source: S,
}

impl SimHashEngine<FsTextSource> {
    /// Create an engine reading documents from the filesystem
    pub fn new(config: SimHashConfig) -> Result<Self> {
        Self::with_source(config, FsTextSource::new())
    }
}

impl<S: TextSource> SimHashEngine<S> {
    /// Create an engine with a custom text source
    pub fn with_source(config: SimHashConfig, source: S) -> Result<Self> {
        config.validate()?;

        info!(
            "Initializing SimHash engine with {} hash bits",
            config.num_hash_bits
        );

        Ok(Self {
            simhash: SimHash::new(config.num_hash_bits),
            config,
            source,
        })
    }

    /// Engine configuration
    pub fn config(&self) -> &SimHashConfig {
        &self.config
    }

    /// Fingerprint width B
    pub fn num_hash_bits(&self) -> usize {
        self.simhash.num_hash_bits()
    }

    /// Fingerprint text that is already in memory
    pub fn fingerprint_text(&self, text: &str) -> TextSignature {
        self.simhash.analyze_text(text)
    }

    /// Read and fingerprint one document
    pub fn fingerprint_document<P: AsRef<Path>>(&self, path: P) -> Result<DocumentFingerprint> {
        let path = path.as_ref();
        debug!("Fingerprinting {}", path.display());

        let text = self.source.read_text(path)?;
        let signature = self.simhash.analyze_text(&text);
        if signature.token_count == 0 {
            warn!(
                "No content tokens left in {} after stop-word filtering",
                path.display()
            );
        }

        Ok(DocumentFingerprint::from_signature(path, signature))
    }

    /// Read, fingerprint and compare two documents
    pub fn compare_documents<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        first: P,
        second: Q,
    ) -> Result<ComparisonReport> {
        let first = self.fingerprint_document(first)?;
        let second = self.fingerprint_document(second)?;
        let comparison = compare(&first.fingerprint, &second.fingerprint)?;

        info!(
            "Compared {} and {}: distance {}, similarity {}%",
            first.source.display(),
            second.source.display(),
            comparison.hamming_distance,
            comparison.similarity
        );

        Ok(ComparisonReport::new(first, second, comparison))
    }
}

impl<S: TextSource + Sync> SimHashEngine<S> {
    /// Fingerprint many documents; one unreadable document does not stop the rest.
    ///
    /// Results come back in input order.
    pub fn fingerprint_documents<P>(&self, paths: &[P]) -> Vec<Result<DocumentFingerprint>>
    where
        P: AsRef<Path> + Sync,
    {
        info!("Fingerprinting {} documents", paths.len());

        #[cfg(feature = "parallel")]
        let results = paths
            .par_iter()
            .map(|path| self.fingerprint_document(path))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results = paths
            .iter()
            .map(|path| self.fingerprint_document(path))
            .collect();

        results
    }
}
