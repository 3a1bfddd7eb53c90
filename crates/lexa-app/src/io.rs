use kanal::AsyncSender;
use lexa_types::{AppEvent, UiEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Reads user input lines from stdin and forwards them as events.
///
/// `:`-prefixed lines are commands; anything else is a search query,
/// blank lines included (the workflow owns the empty-input error).
pub async fn input_loop(
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("input loop stopping");
                return Ok(());
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                    return Ok(());
                };

                let Some(event) = parse_line(&line) else {
                    continue;
                };

                let closing = matches!(event, UiEvent::Close);
                ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                if closing {
                    return Ok(());
                }
            }
        }
    }
}

/// Map an input line to a UI event.
fn parse_line(line: &str) -> Option<UiEvent> {
    let trimmed = line.trim();

    match trimmed {
        ":q" | ":quit" => return Some(UiEvent::Close),
        ":theme" => return Some(UiEvent::ToggleTheme),
        ":fonts" => return Some(UiEvent::ListFonts),
        ":play" => return Some(UiEvent::PlayAudio),
        _ => {}
    }

    if let Some(name) = trimmed.strip_prefix(":font ") {
        return Some(UiEvent::SelectFont(name.trim().to_string()));
    }

    if trimmed.starts_with(':') {
        tracing::warn!("unknown command {trimmed:?}");
        return None;
    }

    Some(UiEvent::Search(line.to_string()))
}
