use anyhow::Result;
use cashia_config::Config;
use cashia_engine::Planner;

use crate::cli::InputArgs;
use crate::commands::{build_session, resolve_format};
use crate::render;

pub fn handle(input: &InputArgs, format: Option<String>, config: &Config) -> Result<()> {
    let format = resolve_format(format, &config.format)?;
    let session = build_session(input)?;

    let planner = Planner::with_max_capacity(config.max_capacity)
        .with_max_table_cells(config.max_table_cells);
    let plan = match planner.plan(&session.snapshot()) {
        Ok(plan) => plan,
        Err(e) => {
            let Some((title, message)) = render::notice(&e) else {
                return Err(e.into());
            };
            render::write_notice(&mut std::io::stderr().lock(), title, message)?;
            std::process::exit(1);
        }
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        _ => {
            let stdout = std::io::stdout();
            render::write_plan(&mut stdout.lock(), &plan, &config.currency)?;
        }
    }

    Ok(())
}
