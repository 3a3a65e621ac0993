use anyhow::Result;
use cashia_config::Config;

use crate::cli::InputArgs;
use crate::commands::{build_session, resolve_format};
use crate::render;

pub fn handle(input: &InputArgs, format: Option<String>, config: &Config) -> Result<()> {
    let format = resolve_format(format, &config.format)?;
    let session = build_session(input)?;
    let overview = session.overview();

    match format.as_str() {
        "json" => {
            let json = serde_json::json!({
                "overview": overview,
                "items": session.entries(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            let stdout = std::io::stdout();
            render::write_overview(
                &mut stdout.lock(),
                &overview,
                session.entries(),
                &config.currency,
            )?;
        }
    }

    Ok(())
}
