use crate::render::render;
use crate::{dashboard, Args, TrendsDashboard};
use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use trends::dashboard::user_message;
use trends::{Debouncer, Filter};

/// Applies a `location=<value>` or `topic=<value>` line to `filter`. An empty value clears the criterion.
pub fn apply_command(filter: &Filter, line: &str) -> Option<Filter> {
    let (key, value) = line.split_once('=')?;
    match key.trim() {
        "location" => Some(filter.clone().with_location(value)),
        "topic" => Some(filter.clone().with_topic(value)),
        _ => None,
    }
}

/// Draws the chart for the initial filter, then redraws it whenever filter changes read
/// from `input` settle. Returns once `input` is closed and the last change is drawn.
pub async fn watch<R, W>(args: &Args, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let dashboard = dashboard(args)?;
    let debouncer = Debouncer::new(args.debounce());
    let (settled_sender, mut settled_receiver) = mpsc::unbounded_channel::<Filter>();
    let mut filter = args.filter();
    let mut lines = input.lines();

    show(&dashboard, &filter, &mut output).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => break,
                };
                match apply_command(&filter, &line) {
                    Some(changed) if changed != filter => {
                        filter = changed;
                        let settled = debouncer.schedule(filter.clone());
                        let sender = settled_sender.clone();
                        tokio::spawn(async move {
                            if let Some(filter) = settled.await {
                                let _ = sender.send(filter);
                            }
                        });
                    }
                    Some(_) => debug!("Filter unchanged"),
                    None => warn!("Ignoring '{}'. Expected location=<value> or topic=<value>", line),
                }
            }
            Some(settled) = settled_receiver.recv() => show(&dashboard, &settled, &mut output).await?,
        }
    }

    drop(settled_sender);
    while let Some(settled) = settled_receiver.recv().await {
        show(&dashboard, &settled, &mut output).await?;
    }
    Ok(())
}

async fn show<W>(dashboard: &TrendsDashboard, filter: &Filter, output: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let text = match dashboard.load(filter).await {
        Ok(trends) => render(&trends),
        Err(err) => user_message(&err),
    };
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n\n").await?;
    output.flush().await?;
    Ok(())
}
