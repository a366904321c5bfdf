//! Configuration for casting.

use serde::{Deserialize, Serialize};

use crate::caster::{Caster, ProtocolKind};
use crate::random::RngService;

/// Configuration for a casting engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastConfig {
    /// RNG seed for reproducible draws; entropy when absent.
    pub seed: Option<u64>,
    /// Protocol a fresh caster starts in.
    pub protocol: ProtocolKind,
}

impl CastConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting protocol.
    pub fn with_protocol(mut self, protocol: ProtocolKind) -> Self {
        self.protocol = protocol;
        self
    }

    /// Randomness service for this configuration.
    pub fn rng(&self) -> RngService {
        RngService::new(self.seed)
    }

    /// Empty caster in the starting protocol.
    pub fn caster(&self) -> Caster {
        Caster::new(self.protocol)
    }
}
