use lexa_core::surface::RenderSurface;
use lexa_core::workflow::SearchWorkflow;
use lexa_dict::DictionarySource;

pub async fn handle_search<D, R>(
    workflow: &mut SearchWorkflow<D, R>,
    text: &str,
) -> anyhow::Result<()>
where
    D: DictionarySource,
    R: RenderSurface,
{
    tracing::debug!("search submitted: {} chars", text.len());
    workflow.submit(text).await
}
