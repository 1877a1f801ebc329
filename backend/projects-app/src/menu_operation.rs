use crate::{AppResult, ProjectService, Prompt};

use async_trait::async_trait;

/// One selectable entry of the menu.
#[async_trait]
pub trait MenuOperation: Send + Sync {
    /// Text shown after the selection code in the menu listing
    fn label(&self) -> &str;

    async fn perform(
        &self,
        console: &mut dyn Prompt,
        service: &dyn ProjectService,
    ) -> AppResult<()>;
}
