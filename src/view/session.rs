use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    error::AppResult,
    view::{
        commands::{Command, HELP},
        controller::CatalogController,
        render::{render_catalog, render_genres},
    },
};

/// Interactive loop: reads commands line by line and writes the rendered view
///
/// Ends on `quit` or end of input.
pub async fn run_session<R, W>(
    controller: &CatalogController,
    input: R,
    output: &mut W,
) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    controller.start().await;
    write_block(output, &render_catalog(&controller.snapshot().await)).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                write_block(output, &e.to_string()).await?;
                continue;
            }
        };

        let text = match &command {
            Command::Quit => break,
            Command::Help => HELP.to_string(),
            Command::ListGenres => {
                render_genres(&controller.snapshot().await)
            }
            _ => {
                command.apply(controller).await;
                render_catalog(&controller.snapshot().await)
            }
        };
        write_block(output, &text).await?;
    }

    Ok(())
}

async fn write_block<W>(output: &mut W, text: &str) -> AppResult<()>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(format!("{}\n\n", text.trim_end()).as_bytes())
        .await?;
    output.flush().await?;
    Ok(())
}
