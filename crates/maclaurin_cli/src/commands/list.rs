//! `list`: the available series with their menu numbers and domains.

use clap::Args;
use maclaurin_math::SeriesKind;

use super::OutputFormat;
use crate::json_types::{print_pretty_json, SeriesInfoJson};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn domain_text(kind: SeriesKind) -> String {
    kind.domain()
        .map(|d| format!("x in {}", d))
        .unwrap_or_else(|| "any x".to_string())
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Text => {
            for kind in SeriesKind::ALL {
                let exponent = if kind.needs_exponent() { "  (needs --m)" } else { "" };
                println!(
                    "{}. {:<6} {:<8} {}{}",
                    kind.menu_number(),
                    kind.name(),
                    kind.label(),
                    domain_text(kind),
                    exponent
                );
            }
            Ok(())
        }
        OutputFormat::Json => {
            let rows: Vec<SeriesInfoJson> = SeriesKind::ALL
                .into_iter()
                .map(|kind| SeriesInfoJson {
                    number: kind.menu_number(),
                    name: kind.name().to_string(),
                    label: kind.label().to_string(),
                    domain: kind.domain().map(|d| d.to_string()),
                    needs_exponent: kind.needs_exponent(),
                })
                .collect();
            print_pretty_json(&rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_text_per_series() {
        assert_eq!(domain_text(SeriesKind::Sin), "any x");
        assert_eq!(domain_text(SeriesKind::Ln1PlusX), "x in (-1, 1]");
        assert_eq!(domain_text(SeriesKind::PowerMinus), "x in (-1, 1)");
    }
}
