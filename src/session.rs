//! Calculator session state
//!
//! Holds the last displayed result of each scenario and the latest front
//! office allocation that the back office may reuse. Single writer, single
//! reader; latest value wins.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

use serde::Serialize;

use crate::models::{CalculationResult, OperatingWindow, Scenario, UpstreamAllocation};
use crate::CommandError;

/// Sent to subscribers after every successful calculation
#[derive(Debug, Clone, Serialize)]
pub struct CalculationNotice {
    pub scenario: Scenario,
    pub result: CalculationResult,
    /// Present for front office results
    pub allocation: Option<UpstreamAllocation>,
}

/// Session state shared by both scenarios
#[derive(Default)]
pub struct AppState {
    front_office_allocation: Mutex<Option<UpstreamAllocation>>,
    front_office_result: Mutex<Option<CalculationResult>>,
    back_office_result: Mutex<Option<CalculationResult>>,
    subscribers: Mutex<Vec<Sender<CalculationNotice>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest front office allocation, if the front office has been sized
    pub fn front_office_allocation(&self) -> Result<Option<UpstreamAllocation>, CommandError> {
        let guard = self
            .front_office_allocation
            .lock()
            .map_err(|_| CommandError::LockPoisoned)?;
        Ok(*guard)
    }

    /// Result currently displayed for a scenario
    pub fn last_result(&self, scenario: Scenario) -> Result<Option<CalculationResult>, CommandError> {
        let guard = self
            .result_slot(scenario)
            .lock()
            .map_err(|_| CommandError::LockPoisoned)?;
        Ok(guard.clone())
    }

    /// Receive a notice after each successful calculation
    pub fn subscribe(&self) -> Result<Receiver<CalculationNotice>, CommandError> {
        let (tx, rx) = channel();
        self.subscribers
            .lock()
            .map_err(|_| CommandError::LockPoisoned)?
            .push(tx);
        Ok(rx)
    }

    /// Store a successful result and notify subscribers. Front office
    /// results also replace the published allocation.
    pub fn record(
        &self,
        result: &CalculationResult,
        window: Option<OperatingWindow>,
    ) -> Result<(), CommandError> {
        let allocation = match (result.scenario, window) {
            (Scenario::FrontOffice, Some(window)) => {
                let allocation = UpstreamAllocation {
                    units: result.gpus_needed,
                    window,
                };
                *self
                    .front_office_allocation
                    .lock()
                    .map_err(|_| CommandError::LockPoisoned)? = Some(allocation);
                tracing::info!(
                    "Published front office allocation: {} GPUs, {}:00-{}:00",
                    allocation.units,
                    window.start_hour,
                    window.end_hour
                );
                Some(allocation)
            }
            _ => None,
        };

        *self
            .result_slot(result.scenario)
            .lock()
            .map_err(|_| CommandError::LockPoisoned)? = Some(result.clone());

        let notice = CalculationNotice {
            scenario: result.scenario,
            result: result.clone(),
            allocation,
        };
        let mut subscribers = self
            .subscribers
            .lock()
            .map_err(|_| CommandError::LockPoisoned)?;
        // Drop subscribers whose receiver has gone away
        subscribers.retain(|tx| tx.send(notice.clone()).is_ok());

        Ok(())
    }

    fn result_slot(&self, scenario: Scenario) -> &Mutex<Option<CalculationResult>> {
        match scenario {
            Scenario::FrontOffice => &self.front_office_result,
            Scenario::BackOffice => &self.back_office_result,
        }
    }
}
