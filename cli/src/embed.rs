use crate::imports::*;

/// Renders the widget calls as JavaScript source instead of running them.
#[derive(Debug)]
pub struct ScriptRuntime {
    global: String,
    script: RefCell<Option<String>>,
}

/// A JavaScript string literal that is also safe inside an HTML `<script>` element.
pub fn js_string_literal(value: &str) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub fn escape_html_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;").replace('>', "&gt;")
}

impl ScriptRuntime {
    pub fn new() -> ScriptRuntime {
        ScriptRuntime { global: format!("window.{}", WIDGET_GLOBAL_NAME), script: RefCell::new(None) }
    }

    /// The launch statement produced by the last `main` call.
    pub fn into_script(self) -> Option<String> {
        self.script.into_inner()
    }
}

impl Default for ScriptRuntime {
    fn default() -> ScriptRuntime {
        ScriptRuntime::new()
    }
}

impl WidgetRuntime for ScriptRuntime {
    // ID of the mount element
    type Mount = str;
    // JavaScript expression
    type Location = String;
    type Error = serde_json::Error;

    fn location(&self, label: &str) -> Result<String, serde_json::Error> {
        Ok(format!("{}.location({})", self.global, js_string_literal(label)?))
    }

    fn no_location(&self) -> Result<String, serde_json::Error> {
        Ok(format!("{}.noLocation", self.global))
    }

    fn main(&self, mount_id: &str, start: String, destination: String) -> Result<(), serde_json::Error> {
        let mount = format!("document.getElementById({})", js_string_literal(mount_id)?);
        *self.script.borrow_mut() = Some(format!("{}.main({})({})({})();", self.global, mount, start, destination));
        Ok(())
    }
}

/// Builds the HTML that loads the widget script and mounts the widget.
pub fn render_embed_html(
    mount_id: &str,
    script_url: &str,
    start: Option<&str>,
    destination: Option<&str>,
) -> Result<String> {
    let runtime = ScriptRuntime::new();
    launch_widget(&runtime, mount_id, start, destination).context("Failed to render widget launch script")?;
    let script = runtime.into_script().ok_or_else(|| anyhow!("Widget launch script was not rendered"))?;
    Ok(format!(
        "<div id=\"{}\"></div>\n<script src=\"{}\"></script>\n<script>\n{}\n</script>\n",
        escape_html_attribute(mount_id),
        escape_html_attribute(script_url),
        script
    ))
}
