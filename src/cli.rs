use std::path::PathBuf;

use chrono::NaiveDate;

pub const USAGE: &str =
    "Usage: daymark [--theme NAME] [--fade-others] [--month YYYY/MM] [--config PATH]";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOptions {
    pub theme: Option<String>,
    pub fade_others: bool,
    pub month: Option<NaiveDate>,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliMode {
    Run(CliOptions),
    Help,
}

pub fn parse_cli_mode<I>(args: I) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--theme" => {
                let name = args.next().ok_or("--theme needs a theme name")?;
                options.theme = Some(name);
            }
            "--fade-others" => {
                options.fade_others = true;
            }
            "--month" => {
                let value = args.next().ok_or("--month needs YYYY/MM")?;
                let first = NaiveDate::parse_from_str(&format!("{value}/01"), "%Y/%m/%d")
                    .map_err(|_| format!("Invalid month '{}'. Use YYYY/MM.", value))?;
                options.month = Some(first);
            }
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(CliMode::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliMode, String> {
        parse_cli_mode(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments_runs_with_defaults() {
        assert_eq!(parse(&[]), Ok(CliMode::Run(CliOptions::default())));
    }

    #[test]
    fn all_options_are_parsed() {
        let mode = parse(&["--theme", "dark", "--fade-others", "--month", "2025/02", "--config", "/tmp/c.toml"]);
        assert_eq!(
            mode,
            Ok(CliMode::Run(CliOptions {
                theme: Some("dark".to_string()),
                fade_others: true,
                month: NaiveDate::from_ymd_opt(2025, 2, 1),
                config: Some(PathBuf::from("/tmp/c.toml")),
            }))
        );
    }

    #[test]
    fn help_wins_over_other_options() {
        assert_eq!(parse(&["--fade-others", "--help"]), Ok(CliMode::Help));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(parse(&["--month", "2025/13"]).is_err());
    }

    #[test]
    fn missing_option_value_is_rejected() {
        assert!(parse(&["--theme"]).is_err());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert_eq!(parse(&["--agenda"]), Err("Unknown argument: --agenda".to_string()));
    }
}
