use crate::error::CalcError;
use crate::table::splits::Splits;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PkdConfig {
    pub output: Option<OutputConfig>,
    pub splits: Option<SplitsConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    Md,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoostsSetting {
    Any,
    Two,
    Three,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<FormatSetting>,
    pub limit: Option<usize>,
    pub boosts: Option<BoostsSetting>,
    #[serde(default)]
    pub detail: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SplitsConfig {
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub rooms: Splits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: FormatSetting,
    pub limit: usize,
    pub boosts: BoostsSetting,
    pub detail: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: FormatSetting::Md,
            limit: 5,
            boosts: BoostsSetting::Any,
            detail: false,
        }
    }
}

fn is_valid_time(seconds: f64) -> bool {
    seconds.is_finite() && seconds >= 0.0
}

impl PkdConfig {
    pub fn output_settings(&self) -> OutputSettings {
        let defaults = OutputSettings::default();
        match &self.output {
            Some(output) => OutputSettings {
                format: output.format.unwrap_or(defaults.format),
                limit: output.limit.unwrap_or(defaults.limit),
                boosts: output.boosts.unwrap_or(defaults.boosts),
                detail: output.detail,
            },
            None => defaults,
        }
    }

    pub fn splits_path(&self) -> Option<&PathBuf> {
        self.splits.as_ref().and_then(|splits| splits.path.as_ref())
    }

    pub fn inline_splits(&self) -> Option<&Splits> {
        self.splits
            .as_ref()
            .map(|splits| &splits.rooms)
            .filter(|rooms| !rooms.is_empty())
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        if let Some(limit) = self.output.as_ref().and_then(|output| output.limit) {
            if limit == 0 {
                return Err(CalcError::ConfigParse(
                    "output.limit must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(rooms) = self.inline_splits() {
            for (name, room) in rooms {
                if name.trim().is_empty() {
                    return Err(CalcError::ConfigParse(
                        "splits.rooms entries must have non-empty names".to_string(),
                    ));
                }
                if !is_valid_time(room.boostless_time) {
                    return Err(CalcError::ConfigParse(format!(
                        "splits.rooms.{name}.boostless_time must be finite and >= 0"
                    )));
                }
                if let Some(strat) = room
                    .boost_strats
                    .iter()
                    .find(|strat| !is_valid_time(strat.boost_time) || !strat.time.is_finite())
                {
                    return Err(CalcError::ConfigParse(format!(
                        "splits.rooms.{name}: times for '{}' must be finite, boost_time >= 0",
                        strat.name
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let cfg: PkdConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.output_settings(), OutputSettings::default());
        assert!(cfg.splits_path().is_none());
        assert!(cfg.inline_splits().is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[output]
format = "json"
limit = 10
boosts = "three"
detail = true

[splits]
path = "splits.json"

[splits.rooms."Sandpit"]
boostless_time = 33.5
boost_strats = [{ name = "cp 0-1", time = 24.0, boost_time = 3.5 }]
"#;

        let cfg: PkdConfig = toml::from_str(toml_str).expect("full config should parse");
        let output = cfg.output_settings();
        assert_eq!(output.format, FormatSetting::Json);
        assert_eq!(output.limit, 10);
        assert_eq!(output.boosts, BoostsSetting::Three);
        assert!(output.detail);
        assert_eq!(
            cfg.splits_path().map(|path| path.to_string_lossy().into_owned()),
            Some("splits.json".to_string())
        );
        let rooms = cfg.inline_splits().expect("inline rooms should parse");
        assert_eq!(rooms["Sandpit"].boost_strats.len(), 1);
        cfg.validate().expect("full config should validate");
    }

    #[test]
    fn validate_rejects_zero_limit() {
        let cfg: PkdConfig = toml::from_str("[output]\nlimit = 0\n").expect("config should parse");
        assert!(matches!(cfg.validate(), Err(CalcError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_negative_inline_boost_time() {
        let cfg: PkdConfig = toml::from_str(
            r#"
[splits.rooms."Ice"]
boostless_time = 17.0
boost_strats = [{ name = "cp 0-1", time = 14.5, boost_time = -2.0 }]
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(CalcError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_infinite_inline_times() {
        let cfg: PkdConfig = toml::from_str(
            r#"
[splits.rooms."Sandpit"]
boostless_time = inf
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(CalcError::ConfigParse(_))));

        let cfg: PkdConfig = toml::from_str(
            r#"
[splits.rooms."Ice"]
boostless_time = 17.0
boost_strats = [{ name = "cp 0-1", time = 14.5, boost_time = inf }]
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(CalcError::ConfigParse(_))));
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let parsed: Result<PkdConfig, _> = toml::from_str("[output]\nformat = \"sarif\"\n");
        assert!(parsed.is_err());
    }
}
