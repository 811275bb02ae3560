//! Query structure decoding with a guaranteed fallback.
//!
//! [`QueryStructureDecoder::parse`] never fails: it tries each configured
//! [`DecodeStrategy`] in order and, when none applies, falls back to the
//! [`BooleanSplitStrategy`]. The result records which strategy produced it
//! and whether that was a degraded (non-strict) path.

use super::entities::QueryStructure;
use super::strategy::{BooleanSplitStrategy, DecodeStrategy, FencedJsonStrategy, StrictJsonStrategy};
use tracing::debug;

/// Where a decoded structure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSource {
    /// Name of the strategy that produced the structure.
    pub strategy: &'static str,
    /// True for every path other than the first strategy in the chain.
    pub degraded: bool,
}

/// A decoded structure together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedQuery {
    pub structure: QueryStructure,
    pub source: DecodeSource,
}

impl DecodedQuery {
    pub fn is_degraded(&self) -> bool {
        self.source.degraded
    }

    pub fn into_structure(self) -> QueryStructure {
        self.structure
    }
}

/// Converts a raw completion into a [`QueryStructure`].
pub struct QueryStructureDecoder {
    strategies: Vec<Box<dyn DecodeStrategy>>,
    fallback: BooleanSplitStrategy,
}

impl Default for QueryStructureDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryStructureDecoder {
    /// Strict JSON first, boolean splitting as the fallback.
    pub fn new() -> Self {
        Self::with_strategies(vec![Box::new(StrictJsonStrategy)])
    }

    /// Use a custom strategy chain. The boolean splitter still runs last.
    pub fn with_strategies(strategies: Vec<Box<dyn DecodeStrategy>>) -> Self {
        Self {
            strategies,
            fallback: BooleanSplitStrategy,
        }
    }

    /// Append a strategy to the chain (before the fallback).
    pub fn with_strategy(mut self, strategy: Box<dyn DecodeStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Also accept JSON wrapped in a Markdown code fence.
    pub fn with_fenced_json(self) -> Self {
        self.with_strategy(Box::new(FencedJsonStrategy))
    }

    /// Names of the strategies tried, in order, fallback included.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies
            .iter()
            .map(|s| s.name())
            .chain(std::iter::once(self.fallback.name()))
            .collect()
    }

    /// Decode a completion. Always returns a usable structure.
    pub fn parse(&self, raw: &str) -> DecodedQuery {
        for (position, strategy) in self.strategies.iter().enumerate() {
            match strategy.decode(raw) {
                Ok(structure) => {
                    return DecodedQuery {
                        structure,
                        source: DecodeSource {
                            strategy: strategy.name(),
                            degraded: position > 0,
                        },
                    };
                }
                Err(e) => debug!("Decode strategy {} rejected completion: {}", strategy.name(), e),
            }
        }

        DecodedQuery {
            structure: self.fallback.split(raw),
            source: DecodeSource {
                strategy: self.fallback.name(),
                degraded: true,
            },
        }
    }
}
