//! Random port selection service.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, trace, warn};

use crate::config::SelectionPolicy;
use crate::domain::{is_well_known, Protocol, WELL_KNOWN_PORTS};
use crate::error::{Error, Result};
use crate::ports::AvailabilityProbe;

/// Application service that picks random free ports.
///
/// Candidates are drawn uniformly from the policy range, well-known ports are
/// rejected, and the remaining candidate is checked with the injected
/// `AvailabilityProbe`. The random generator is injected as well, so a seeded
/// generator makes selection fully reproducible.
pub struct PortSelector<P: AvailabilityProbe, R: RngCore = StdRng> {
    probe: P,
    policy: SelectionPolicy,
    rng: Mutex<R>,
}

impl<P: AvailabilityProbe> PortSelector<P, StdRng> {
    /// Create a selector seeded from OS entropy.
    pub fn new(probe: P, policy: SelectionPolicy) -> Result<Self> {
        Self::with_rng(probe, policy, StdRng::from_entropy())
    }
}

impl<P: AvailabilityProbe, R: RngCore> PortSelector<P, R> {
    /// Create a selector with a caller-supplied random generator.
    pub fn with_rng(probe: P, policy: SelectionPolicy, rng: R) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            probe,
            policy,
            rng: Mutex::new(rng),
        })
    }

    /// Select a random port that is free for `protocol` right now.
    ///
    /// Every draw counts as an attempt, whether it was rejected as well-known
    /// or failed the probe. Draws are independent, so a rejected port may come
    /// up again.
    pub fn select(&self, protocol: Protocol) -> Result<u16> {
        let mut rng = self.rng.lock();

        for attempt in 1..=self.policy.max_attempts {
            let port = rng.gen_range(self.policy.min_port..=self.policy.max_port);

            if is_well_known(port) {
                trace!(port = port, "Rejected well-known port");
                continue;
            }

            if self.probe.is_available(port, protocol) {
                debug!(port = port, protocol = %protocol, attempts = attempt, "Selected port");
                return Ok(port);
            }

            debug!(port = port, protocol = %protocol, "Candidate port is in use");
        }

        warn!(
            protocol = %protocol,
            attempts = self.policy.max_attempts,
            "Gave up looking for an available port"
        );
        Err(Error::NoPortAvailable {
            attempts: self.policy.max_attempts,
        })
    }

    /// Draw a random non-well-known port without probing it.
    ///
    /// Used for decoys; the port may well be in use.
    pub fn draw_candidate(&self) -> Result<u16> {
        let mut rng = self.rng.lock();

        for _ in 0..self.policy.max_attempts {
            let port = rng.gen_range(self.policy.min_port..=self.policy.max_port);
            if !is_well_known(port) {
                return Ok(port);
            }
        }

        Err(Error::NoPortAvailable {
            attempts: self.policy.max_attempts,
        })
    }

    /// Pick a uniformly random entry of the well-known port table.
    pub fn sample_well_known(&self) -> u16 {
        let index = self.rng.lock().gen_range(0..WELL_KNOWN_PORTS.len());
        WELL_KNOWN_PORTS[index]
    }
}
