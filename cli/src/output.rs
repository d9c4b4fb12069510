use tempfile::NamedTempFile;

use crate::embed::render_embed_html;
use crate::imports::*;
use crate::types::EmbedOptions;

pub fn write_embed(options: &EmbedOptions) -> Result<()> {
    let inner = || {
        let html = render_embed_html(
            &options.mount_id,
            &options.script_url,
            options.from.as_deref(),
            options.to.as_deref(),
        )?;
        if let Some(output_file_path) = &options.output_file {
            info!("Writing embed HTML to: {:?}", output_file_path);
            let mut temp_file = NamedTempFile::new_in(
                output_file_path
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .unwrap_or(&env::current_dir().context("Failed to get current directory")?),
            )
            .with_context(|| format!("Failed to create embed HTML output file: {:?}", output_file_path))?;
            io::Write::write_all(&mut temp_file, html.as_bytes())
                .with_context(|| format!("Failed to write embed HTML to file: {:?}", output_file_path))?;
            temp_file
                .persist(output_file_path)
                .context(format!("Failed to persist temporary file to: {:?}", output_file_path))?;
        } else {
            print!("{}", html);
        }
        Ok(()) as Result<_>
    };
    inner().context("Failed to write embed HTML")
}
