//! Server entrypoint generation (`src/main.ts`)
//!
//! The port is substituted only into the fallback expression; the `listen`
//! call reads the same `PORT` constant at run time.

use crate::error::Result;
use crate::types::Port;
use tera::{Context, Tera};
use tracing::debug;

/// Path of the generated entrypoint, relative to the project root
pub const ENTRYPOINT_FILE: &str = "src/main.ts";

const TEMPLATE_NAME: &str = "main.ts";

/// Renders the entrypoint from its embedded template
pub struct EntrypointRenderer {
    tera: Tera,
}

impl EntrypointRenderer {
    /// Create a renderer with the embedded template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, include_str!("../templates/main.ts.tera"))?;
        Ok(Self { tera })
    }

    /// Render the entrypoint source for `port`
    pub fn render(&self, port: Port) -> Result<String> {
        debug!("Rendering {} with fallback port {}", ENTRYPOINT_FILE, port);
        let mut context = Context::new();
        context.insert("port", &port.get());
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}
