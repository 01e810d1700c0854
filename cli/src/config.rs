//! Curve snapshot loading - flags or a credit-record JSON file

use anyhow::{Context, Result};
use curve_model::CurveState;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk shape of a credit record, as the platform stores it. Extra
/// fields (id, symbol, balances) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRecord {
    pub current_supply: f64,
    pub max_supply: f64,
}

pub fn load_curve_state(
    state_path: Option<&Path>,
    supply: Option<f64>,
    max_supply: Option<f64>,
) -> Result<CurveState> {
    let (current, max) = match (supply, max_supply) {
        (Some(current), Some(max)) => (current, max),
        (None, None) => {
            let path = state_path
                .context("pass --state FILE, or both --supply and --max-supply")?;
            let record = read_credit_record(path)?;
            debug!(
                "loaded credit record from {}: supply {} / {}",
                path.display(),
                record.current_supply,
                record.max_supply
            );
            (record.current_supply, record.max_supply)
        }
        _ => anyhow::bail!("--supply and --max-supply must be passed together"),
    };

    CurveState::new(current, max)
        .with_context(|| format!("invalid curve snapshot: supply {current} / {max}"))
}

fn read_credit_record(path: &Path) -> Result<CreditRecord> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read credit record: {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse credit record JSON: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_credit_record_with_extra_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"id":"proj-1","symbol":"DEMO","currentSupply":250000,"maxSupply":1000000}}"#
        )
        .unwrap();

        let state = load_curve_state(Some(file.path()), None, None).unwrap();
        assert_eq!(state.current_supply, 250_000.0);
        assert_eq!(state.max_supply, 1_000_000.0);
    }

    #[test]
    fn flags_override_state_file() {
        let state = load_curve_state(None, Some(10.0), Some(100.0)).unwrap();
        assert_eq!(state.current_supply, 10.0);
        assert_eq!(state.max_supply, 100.0);
    }

    #[test]
    fn rejects_half_specified_flags() {
        assert!(load_curve_state(None, Some(10.0), None).is_err());
    }

    #[test]
    fn rejects_invalid_snapshot() {
        assert!(load_curve_state(None, Some(10.0), Some(0.0)).is_err());
    }
}
