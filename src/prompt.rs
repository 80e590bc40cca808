//! Prompt rendering helpers.

use minijinja::Environment;
use serde::Serialize;

/// Renders a prompt from a template string and a serializable context.
///
/// Templates are plain minijinja; single braces pass through untouched, so
/// JSON samples can be embedded literally.
pub fn render_prompt<T: Serialize>(template: &str, context: T) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("prompt", template)?;
    let tmpl = env.get_template("prompt")?;
    tmpl.render(context)
}
