//! Implementation of the `pyinit templates` command.

use pyinit_core::application::TemplateService;

use crate::{
    cli::{ListFormat, TemplatesArgs},
    commands::template_store,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = TemplateService::new(template_store(config)?);
    let templates = service.list();

    // A global `--output-format json` wins over the table default.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Project templates:")?;
            let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
            for template in &templates {
                let marker = if template.available { "" } else { "  (missing)" };
                output.print(&format!(
                    "  {:<width$}  ->  {}{marker}",
                    template.name, template.output
                ))?;
            }

            let unused = service.unused();
            if !unused.is_empty() {
                output.print("")?;
                output.info(&format!("Not used by any output: {}", unused.join(", ")))?;
            }
        }
        ListFormat::List => {
            for template in &templates {
                output.print(&template.name)?;
            }
        }
        ListFormat::Json => output.json(&templates)?,
    }

    Ok(())
}
