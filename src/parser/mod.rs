//! Form parsing module
//!
//! Turns the editing buffers a host keeps for each scenario into immutable
//! [`CalculationInput`] records. Parsing collects every missing or
//! non-numeric field before returning so the host can flag them all at once.

pub mod form;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use form::{BackOfficeForm, FrontOfficeForm, ScenarioForm};

use crate::models::CalculationInput;

/// Identifier of an input field, as shown to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CallsPerDay,
    AvgCallDurationMinutes,
    TurnsPerCall,
    InputTokensPerTurn,
    OutputTokensPerTurn,
    StartHour,
    EndHour,
    MonthlyOutputTokens,
    Concurrency,
    OutputSeqLength,
    Ttft,
    Itl,
    GpuHourlyRate,
    PerMinuteRate,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::CallsPerDay => "calls_per_day",
            Field::AvgCallDurationMinutes => "avg_call_duration_minutes",
            Field::TurnsPerCall => "turns_per_call",
            Field::InputTokensPerTurn => "input_tokens_per_turn",
            Field::OutputTokensPerTurn => "output_tokens_per_turn",
            Field::StartHour => "start_hour",
            Field::EndHour => "end_hour",
            Field::MonthlyOutputTokens => "monthly_output_tokens",
            Field::Concurrency => "concurrency",
            Field::OutputSeqLength => "output_seq_length",
            Field::Ttft => "ttft",
            Field::Itl => "itl",
            Field::GpuHourlyRate => "gpu_hourly_rate",
            Field::PerMinuteRate => "per_minute_rate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What is wrong with a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    Missing,
    NotNumeric,
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub problem: Problem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            Problem::Missing => write!(f, "{} is required", self.field),
            Problem::NotNumeric => write!(f, "{} must be a number", self.field),
        }
    }
}

/// A calculation was rejected before any arithmetic ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("Please fill in all required fields: {}", join_errors(.fields))]
pub struct ValidationFailure {
    pub fields: Vec<FieldError>,
}

fn join_errors(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationFailure {
    /// Fields that were left empty
    pub fn missing_fields(&self) -> Vec<Field> {
        self.fields_with(Problem::Missing)
    }

    /// Fields whose text is not a number
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.fields_with(Problem::NotNumeric)
    }

    fn fields_with(&self, problem: Problem) -> Vec<Field> {
        self.fields
            .iter()
            .filter(|e| e.problem == problem)
            .map(|e| e.field)
            .collect()
    }
}

/// Collects field errors while reading a form
#[derive(Default)]
pub(crate) struct FieldReader {
    errors: Vec<FieldError>,
}

impl FieldReader {
    fn reject(&mut self, field: Field, problem: Problem) {
        self.errors.push(FieldError { field, problem });
    }

    /// Required real number. Returns NaN after recording a failure so
    /// reading can continue; the value is never used in that case.
    pub(crate) fn number(&mut self, field: Field, raw: &str) -> f64 {
        match self.optional_number(field, raw) {
            Some(value) => value,
            None => {
                if raw.trim().is_empty() {
                    self.reject(field, Problem::Missing);
                }
                f64::NAN
            }
        }
    }

    /// Optional real number; empty text means "not supplied"
    pub(crate) fn optional_number(&mut self, field: Field, raw: &str) -> Option<f64> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                self.reject(field, Problem::NotNumeric);
                None
            }
        }
    }

    /// Required whole clock hour
    pub(crate) fn hour(&mut self, field: Field, raw: &str) -> i32 {
        let raw = raw.trim();
        if raw.is_empty() {
            self.reject(field, Problem::Missing);
            return 0;
        }
        match raw.parse::<i32>() {
            Ok(hour) => hour,
            Err(_) => {
                self.reject(field, Problem::NotNumeric);
                0
            }
        }
    }

    pub(crate) fn finish<T>(self, value: T) -> Result<T, ValidationFailure> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationFailure {
                fields: self.errors,
            })
        }
    }
}

/// Parse either scenario's form
pub fn parse_form(form: &ScenarioForm) -> Result<CalculationInput, ValidationFailure> {
    match form {
        ScenarioForm::FrontOffice(form) => form.parse(),
        ScenarioForm::BackOffice(form) => form.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_collects_all_errors() {
        let mut reader = FieldReader::default();
        reader.number(Field::CallsPerDay, "");
        reader.number(Field::TurnsPerCall, "ten");
        reader.number(Field::Ttft, " 296 ");
        reader.hour(Field::StartHour, "9.5");

        let failure = reader.finish(()).unwrap_err();
        assert_eq!(failure.missing_fields(), vec![Field::CallsPerDay]);
        assert_eq!(
            failure.invalid_fields(),
            vec![Field::TurnsPerCall, Field::StartHour]
        );
    }

    #[test]
    fn test_reader_rejects_non_finite() {
        let mut reader = FieldReader::default();
        reader.number(Field::Concurrency, "inf");
        reader.number(Field::Itl, "NaN");
        assert_eq!(reader.finish(()).unwrap_err().invalid_fields().len(), 2);
    }

    #[test]
    fn test_optional_number() {
        let mut reader = FieldReader::default();
        assert_eq!(reader.optional_number(Field::PerMinuteRate, "  "), None);
        assert_eq!(reader.optional_number(Field::PerMinuteRate, "0.25"), Some(0.25));
        assert!(reader.finish(()).is_ok());
    }

    #[test]
    fn test_failure_message_lists_fields() {
        let failure = ValidationFailure {
            fields: vec![
                FieldError {
                    field: Field::CallsPerDay,
                    problem: Problem::Missing,
                },
                FieldError {
                    field: Field::Itl,
                    problem: Problem::NotNumeric,
                },
            ],
        };
        assert_eq!(
            failure.to_string(),
            "Please fill in all required fields: calls_per_day is required, itl must be a number"
        );
    }
}
