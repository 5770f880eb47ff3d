//! Turns raw request parameters into a validated [`ServicePeriod`].

use crate::service::calendar::discharge_after_months;
use crate::service::ServicePeriod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Service length applied to branch codes that are not recognised.
pub const DEFAULT_SERVICE_MONTHS: u32 = 18;

/// Military branch, which determines the length of service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Army,
    Marines,
    Navy,
    #[serde(rename = "airforce")]
    AirForce,
}

impl Branch {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "army" => Some(Self::Army),
            "marines" => Some(Self::Marines),
            "navy" => Some(Self::Navy),
            "airforce" => Some(Self::AirForce),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Army => "army",
            Self::Marines => "marines",
            Self::Navy => "navy",
            Self::AirForce => "airforce",
        }
    }

    pub const fn service_months(self) -> u32 {
        match self {
            Self::Army | Self::Marines => 18,
            Self::Navy => 20,
            Self::AirForce => 21,
        }
    }
}

/// Service length for a raw branch code, defaulting for unknown codes.
pub fn service_months_for(code: &str) -> u32 {
    match Branch::from_code(code) {
        Some(branch) => branch.service_months(),
        None => {
            warn!(code, "unrecognised branch code, using default service length");
            DEFAULT_SERVICE_MONTHS
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Missing start date")]
    MissingStartDate,
    #[error("Missing end date or branch")]
    MissingDischarge,
    #[error("invalid date '{raw}': expected YYYYMMDD or YYYY-MM-DD")]
    InvalidDate { raw: String },
    #[error("discharge date {discharge} must be after enlistment date {enlistment}")]
    DischargeNotAfterEnlistment {
        enlistment: NaiveDate,
        discharge: NaiveDate,
    },
    #[error("service length of {months} months from {enlistment} is out of range")]
    OutOfRange { enlistment: NaiveDate, months: u32 },
}

/// Parses `YYYYMMDD` or `YYYY-MM-DD`.
pub fn parse_service_date(raw: &str) -> Result<NaiveDate, ResolveError> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let well_formed = match bytes.len() {
        8 => bytes.iter().all(u8::is_ascii_digit),
        10 => bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        }),
        _ => false,
    };

    let invalid = || ResolveError::InvalidDate {
        raw: raw.to_string(),
    };
    if !well_formed {
        return Err(invalid());
    }
    let compact = trimmed.replace('-', "");

    let year = compact[0..4].parse::<i32>().map_err(|_| invalid())?;
    let month = compact[4..6].parse::<u32>().map_err(|_| invalid())?;
    let day = compact[6..8].parse::<u32>().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Discharge date for `months` of service starting at `enlistment`.
pub fn derive_discharge(enlistment: NaiveDate, months: u32) -> Result<NaiveDate, ResolveError> {
    discharge_after_months(enlistment, months)
        .ok_or(ResolveError::OutOfRange { enlistment, months })
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Resolves the service period from the badge query parameters.
///
/// An explicit discharge date takes precedence over a branch code.
pub fn resolve(
    start_date: Option<&str>,
    end_date: Option<&str>,
    branch: Option<&str>,
) -> Result<ServicePeriod, ResolveError> {
    let enlistment = parse_service_date(present(start_date).ok_or(ResolveError::MissingStartDate)?)?;

    let discharge = match (present(end_date), present(branch)) {
        (Some(raw), _) => parse_service_date(raw)?,
        (None, Some(code)) => {
            let months = service_months_for(code);
            let discharge = derive_discharge(enlistment, months)?;
            debug!(%enlistment, code, months, %discharge, "derived discharge date from branch");
            discharge
        }
        (None, None) => return Err(ResolveError::MissingDischarge),
    };

    ServicePeriod::new(enlistment, discharge).ok_or(ResolveError::DischargeNotAfterEnlistment {
        enlistment,
        discharge,
    })
}
