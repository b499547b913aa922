//! `xul render`: render a markup document.

use std::fs;

use tracing::{debug, info, instrument};
use xul_adapters::{load_data, standard_service};
use xul_core::{application::UnknownTagPolicy, domain::DataContext};

use crate::{
    cli::{RenderArgs, RenderFormat},
    commands::read_markup,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(
    args: RenderArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let markup = read_markup(&args.file)?;

    let data = match args.data.or(config.render.data) {
        Some(path) => load_data(&path)?,
        None => DataContext::new(),
    };

    let policy = if args.strict || config.render.strict {
        UnknownTagPolicy::Reject
    } else {
        UnknownTagPolicy::Passthrough
    };
    let format = args.format.unwrap_or(config.render.format);
    debug!(?policy, %format, keys = data.len(), "Rendering");

    let service = standard_service(policy);
    let rendered = service.render_str(&markup, &data)?;

    let document = match format {
        RenderFormat::Html => rendered.html,
        RenderFormat::Json => {
            serde_json::to_string_pretty(&rendered).map_err(|e| CliError::InvalidInput {
                message: format!("Failed to serialise render output: {e}"),
                source: Some(Box::new(e)),
            })?
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{document}\n"))
                .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
            info!(path = %path.display(), "Output written");
            output.success(&format!("Rendered to {}", path.display()))?;
        }
        None => output.emit(&document)?,
    }

    Ok(())
}
