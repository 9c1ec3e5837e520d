//! Calculator command handlers
//!
//! Operations exposed to the host (CLI or any other front end).
//! Each command parses the form buffer, runs the sizing engine and
//! records the result only on success.

use std::sync::mpsc::Receiver;

use crate::metrics::calculate;
use crate::models::{CalculationResult, Scenario, UpstreamAllocation};
use crate::parser::{BackOfficeForm, FrontOfficeForm, ScenarioForm};
use crate::session::{AppState, CalculationNotice};
use crate::CommandError;

/// Size the front office and publish its allocation
pub fn calculate_front_office(
    state: &AppState,
    form: &FrontOfficeForm,
) -> Result<CalculationResult, CommandError> {
    let input = form.parse().map_err(|failure| {
        tracing::warn!("Front office calculation rejected: {}", failure);
        failure
    })?;

    let result = calculate(&input);
    tracing::info!(
        "Front office sized: {} GPUs, ${:.2}/month",
        result.gpus_needed,
        result.total_cost
    );

    state.record(&result, input.window)?;
    Ok(result)
}

/// Size the back office, reusing the latest front office allocation when
/// the form asks for it and one exists
pub fn calculate_back_office(
    state: &AppState,
    form: &BackOfficeForm,
) -> Result<CalculationResult, CommandError> {
    let latest = if form.use_front_office_units {
        state.front_office_allocation()?
    } else {
        None
    };
    if form.use_front_office_units && latest.is_none() {
        tracing::debug!("No front office allocation yet; sizing back office independently");
    }

    calculate_back_office_with(state, form, latest)
}

/// Size the back office against an explicit upstream allocation. The
/// allocation is ignored when the form's reuse toggle is off.
pub fn calculate_back_office_with(
    state: &AppState,
    form: &BackOfficeForm,
    upstream: Option<UpstreamAllocation>,
) -> Result<CalculationResult, CommandError> {
    let input = form.parse().map_err(|failure| {
        tracing::warn!("Back office calculation rejected: {}", failure);
        failure
    })?;

    let upstream = upstream.filter(|_| form.use_front_office_units);
    let result = calculate(&input.with_upstream(upstream));
    tracing::info!(
        "Back office sized: {} GPUs ({}), ${:.2}/month",
        result.gpus_needed,
        if result.using_upstream_units {
            "front office units"
        } else {
            "independent"
        },
        result.total_cost
    );

    state.record(&result, None)?;
    Ok(result)
}

/// Dispatch on the form's scenario
pub fn calculate_scenario(
    state: &AppState,
    form: &ScenarioForm,
) -> Result<CalculationResult, CommandError> {
    match form {
        ScenarioForm::FrontOffice(form) => calculate_front_office(state, form),
        ScenarioForm::BackOffice(form) => calculate_back_office(state, form),
    }
}

/// Latest front office GPUs and hours, for the back office banner
pub fn get_front_office_allocation(
    state: &AppState,
) -> Result<Option<UpstreamAllocation>, CommandError> {
    state.front_office_allocation()
}

/// Result currently on display for a scenario
pub fn get_last_result(
    state: &AppState,
    scenario: Scenario,
) -> Result<Option<CalculationResult>, CommandError> {
    state.last_result(scenario)
}

/// Subscribe to "most recent result" notices
pub fn subscribe_results(state: &AppState) -> Result<Receiver<CalculationNotice>, CommandError> {
    state.subscribe()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OperatingWindow;
    use crate::parser::Field;
    use crate::presets::call_center_case_study;

    fn large_back_office() -> BackOfficeForm {
        BackOfficeForm {
            monthly_output_tokens: "100000000000".to_string(),
            ..BackOfficeForm::default()
        }
    }

    #[test]
    fn test_front_office_publishes_allocation() {
        let state = AppState::new();
        assert_eq!(get_front_office_allocation(&state).unwrap(), None);

        let result = calculate_front_office(&state, &call_center_case_study()).unwrap();
        let allocation = get_front_office_allocation(&state).unwrap().unwrap();

        assert_eq!(allocation.units, result.gpus_needed);
        assert_eq!(allocation.window, OperatingWindow::new(9, 17));
        assert_eq!(
            get_last_result(&state, Scenario::FrontOffice).unwrap(),
            Some(result)
        );
    }

    #[test]
    fn test_back_office_reuses_front_office_units() {
        let state = AppState::new();
        let front = calculate_front_office(&state, &call_center_case_study()).unwrap();
        assert_eq!(front.gpus_needed, 4);

        // Independently this volume needs 13 GPUs
        let back = calculate_back_office(&state, &large_back_office()).unwrap();
        assert!(back.using_upstream_units);
        assert_eq!(back.gpus_needed, front.gpus_needed);
        assert_eq!(back.raw_gpus, None);
        assert_eq!(back.hours_per_day, 16.0);
    }

    #[test]
    fn test_back_office_toggle_off_sizes_independently() {
        let state = AppState::new();
        calculate_front_office(&state, &call_center_case_study()).unwrap();

        let form = BackOfficeForm {
            use_front_office_units: false,
            ..large_back_office()
        };
        let back = calculate_back_office(&state, &form).unwrap();

        assert!(!back.using_upstream_units);
        assert_eq!(back.gpus_needed, 13);
        assert_eq!(back.hours_per_day, 24.0);
    }

    #[test]
    fn test_back_office_without_front_office_sizes_independently() {
        let state = AppState::new();
        let back = calculate_back_office(&state, &large_back_office()).unwrap();
        assert!(!back.using_upstream_units);
        assert_eq!(back.raw_gpus, Some(13));
    }

    #[test]
    fn test_latest_front_office_value_wins() {
        let state = AppState::new();
        calculate_front_office(&state, &call_center_case_study()).unwrap();

        let mut evening = call_center_case_study();
        evening.start_hour = "12".to_string();
        evening.end_hour = "20".to_string();
        evening.calls_per_day = "100000".to_string();
        let second = calculate_front_office(&state, &evening).unwrap();

        let allocation = get_front_office_allocation(&state).unwrap().unwrap();
        assert_eq!(allocation.units, second.gpus_needed);
        assert_eq!(allocation.window, OperatingWindow::new(12, 20));
    }

    #[test]
    fn test_validation_failure_keeps_previous_result() {
        let state = AppState::new();
        let first = calculate_front_office(&state, &call_center_case_study()).unwrap();

        let mut broken = call_center_case_study();
        broken.calls_per_day = String::new();
        broken.start_hour = "0".to_string();

        match calculate_front_office(&state, &broken) {
            Err(CommandError::Validation(failure)) => {
                assert_eq!(failure.missing_fields(), vec![Field::CallsPerDay]);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }

        assert_eq!(
            get_last_result(&state, Scenario::FrontOffice).unwrap(),
            Some(first)
        );
        let allocation = get_front_office_allocation(&state).unwrap().unwrap();
        assert_eq!(allocation.window, OperatingWindow::new(9, 17));
    }

    #[test]
    fn test_subscribers_receive_notices() {
        let state = AppState::new();
        let rx = subscribe_results(&state).unwrap();

        let front = calculate_front_office(&state, &call_center_case_study()).unwrap();
        let notice = rx.try_recv().unwrap();
        assert_eq!(notice.scenario, Scenario::FrontOffice);
        assert_eq!(notice.result, front);
        assert_eq!(notice.allocation.unwrap().units, front.gpus_needed);

        calculate_back_office(&state, &large_back_office()).unwrap();
        let notice = rx.try_recv().unwrap();
        assert_eq!(notice.scenario, Scenario::BackOffice);
        assert!(notice.allocation.is_none());

        // Failures are silent
        let _ = calculate_back_office(&state, &BackOfficeForm::default());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let state = AppState::new();
        drop(subscribe_results(&state).unwrap());
        assert!(calculate_front_office(&state, &call_center_case_study()).is_ok());
    }

    #[test]
    fn test_explicit_upstream_allocation() {
        let state = AppState::new();
        let upstream = UpstreamAllocation {
            units: 8,
            window: OperatingWindow::new(6, 18),
        };

        let back = calculate_back_office_with(&state, &large_back_office(), Some(upstream)).unwrap();
        assert_eq!(back.gpus_needed, 8);
        assert_eq!(back.hours_per_day, 12.0);

        let form = BackOfficeForm {
            use_front_office_units: false,
            ..large_back_office()
        };
        let back = calculate_back_office_with(&state, &form, Some(upstream)).unwrap();
        assert!(!back.using_upstream_units);
    }

    #[test]
    fn test_calculate_scenario_dispatch() {
        let state = AppState::new();
        let result =
            calculate_scenario(&state, &ScenarioForm::FrontOffice(call_center_case_study()))
                .unwrap();
        assert_eq!(result.scenario, Scenario::FrontOffice);
    }
}
