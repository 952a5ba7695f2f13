//! Configuration for chunking behavior.
//!
//! This module provides types to configure how text is split:
//!
//! - [`ChunkConfig`] - Controls boost budget and word-count thresholds
//! - [`ClusterPolicy`] - What to do with multi-code-point grapheme clusters
//!
//! # Example
//!
//! ```
//! use speakchunk::{ChunkConfig, ClusterPolicy};
//!
//! // Custom thresholds
//! let config = ChunkConfig::new(1, 6, 20)?;
//!
//! // Builder pattern
//! let config = ChunkConfig::default()
//!     .with_boost(0)
//!     .with_cluster_policy(ClusterPolicy::Drop);
//!
//! # Ok::<(), speakchunk::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Default number of chunks emitted with greedy boost rules.
pub const DEFAULT_BOOST: usize = 2;

/// Default minimum number of words before a limit pre-flush may happen.
pub const DEFAULT_MINIMUM_WORDS: usize = 4;

/// Default word-count ceiling for a chunk.
pub const DEFAULT_MAXIMUM_WORDS: usize = 12;

/// Configuration for text chunking.
///
/// - `boost` - Number of leading chunks emitted at the first breakpoint of
///   any kind. Front-loads short chunks so synthesis can start early.
/// - `minimum_words` - A chunk in progress must hold more than this many
///   words before it is flushed early because the next span would push it
///   past `maximum_words`.
/// - `maximum_words` - Word-count ceiling. A chunk exceeding it is emitted at
///   the next breakpoint, soft or hard.
///
/// # Example
///
/// ```
/// use speakchunk::ChunkConfig;
///
/// let config = ChunkConfig::default()
///     .with_minimum_words(2)
///     .with_maximum_words(8);
/// assert!(config.validate().is_ok());
/// ```
///
/// With the `serde` feature, missing fields take their defaults and the
/// result is validated like [`ChunkConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct ChunkConfig {
    boost: usize,
    minimum_words: usize,
    maximum_words: usize,
    cluster_policy: ClusterPolicy,
}

impl ChunkConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `minimum_words` is greater
    /// than `maximum_words`.
    ///
    /// # Example
    ///
    /// ```
    /// use speakchunk::ChunkConfig;
    ///
    /// let config = ChunkConfig::new(2, 4, 12)?;
    /// assert_eq!(config.maximum_words(), 12);
    /// assert!(ChunkConfig::new(2, 13, 12).is_err());
    /// # Ok::<(), speakchunk::ChunkError>(())
    /// ```
    pub fn new(
        boost: usize,
        minimum_words: usize,
        maximum_words: usize,
    ) -> Result<Self, ChunkError> {
        if minimum_words > maximum_words {
            return Err(ChunkError::InvalidConfig {
                message: "minimum_words cannot be greater than maximum_words",
            });
        }

        Ok(Self {
            boost,
            minimum_words,
            maximum_words,
            cluster_policy: ClusterPolicy::default(),
        })
    }

    /// Sets the boost budget.
    pub fn with_boost(mut self, boost: usize) -> Self {
        self.boost = boost;
        self
    }

    /// Sets the minimum word count.
    ///
    /// Note: This does not validate the configuration. Use [`ChunkConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_minimum_words(mut self, words: usize) -> Self {
        self.minimum_words = words;
        self
    }

    /// Sets the maximum word count.
    ///
    /// Note: This does not validate the configuration. Use [`ChunkConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_maximum_words(mut self, words: usize) -> Self {
        self.maximum_words = words;
        self
    }

    /// Sets the multi-code-point cluster policy.
    pub fn with_cluster_policy(mut self, policy: ClusterPolicy) -> Self {
        self.cluster_policy = policy;
        self
    }

    /// Returns the boost budget.
    pub fn boost(&self) -> usize {
        self.boost
    }

    /// Returns the minimum word count.
    pub fn minimum_words(&self) -> usize {
        self.minimum_words
    }

    /// Returns the maximum word count.
    pub fn maximum_words(&self) -> usize {
        self.maximum_words
    }

    /// Returns the multi-code-point cluster policy.
    pub fn cluster_policy(&self) -> ClusterPolicy {
        self.cluster_policy
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use speakchunk::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_minimum_words(40);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ChunkError> {
        Self::new(self.boost, self.minimum_words, self.maximum_words).map(|_| ())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            boost: DEFAULT_BOOST,
            minimum_words: DEFAULT_MINIMUM_WORDS,
            maximum_words: DEFAULT_MAXIMUM_WORDS,
            cluster_policy: ClusterPolicy::default(),
        }
    }
}

/// Unvalidated form of [`ChunkConfig`] as it appears in serialized data.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawConfig {
    boost: usize,
    minimum_words: usize,
    maximum_words: usize,
    cluster_policy: ClusterPolicy,
}

#[cfg(feature = "serde")]
impl Default for RawConfig {
    fn default() -> Self {
        let ChunkConfig {
            boost,
            minimum_words,
            maximum_words,
            cluster_policy,
        } = ChunkConfig::default();
        Self {
            boost,
            minimum_words,
            maximum_words,
            cluster_policy,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for ChunkConfig {
    type Error = ChunkError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Ok(ChunkConfig::new(raw.boost, raw.minimum_words, raw.maximum_words)?
            .with_cluster_policy(raw.cluster_policy))
    }
}

/// Handling of grapheme clusters made of more than one code point.
///
/// Such clusters (emoji with modifiers, flags, base letters with combining
/// marks, `\r\n`) are never breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClusterPolicy {
    /// Keep the cluster as plain content.
    #[default]
    Keep,
    /// Drop the cluster from the output text.
    Drop,
}
