use anyhow::Result;

use crate::connector::tui::run_interactive;

use super::super::Container;

pub struct InteractiveController<'a> {
    container: &'a Container,
}

impl<'a> InteractiveController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn run(&self) -> Result<String> {
        run_interactive(self.container.fetch_use_case(), self.container.theme()).await?;
        Ok(String::new())
    }
}
