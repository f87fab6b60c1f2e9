use std::time::Duration;

use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::engine::{Edge, NavigationEngine, Outcome};
use crate::events::{NavRequest, RenderCommand};

/// Drives one carousel: applies requests in arrival order and tells the
/// renderer what to draw.
///
/// Rules:
/// - Each request is applied to completion before the next is received.
/// - `Moved` becomes a `Translate`; `NoOp` emits nothing.
/// - `BoundaryReached` emits `Bump` and, once `bump_duration` has passed
///   without another bump, `ClearBump`. A bump on the other edge clears the
///   first one immediately.
///
/// Returns the engine when cancelled, or when either channel closes.
#[instrument(
    skip_all,
    fields(slides = engine.slides().count(), items_per_slide = engine.items_per_slide())
)]
pub async fn run(
    mut engine: NavigationEngine,
    mut requests: Receiver<NavRequest>,
    to_renderer: Sender<RenderCommand>,
    bump_duration: Duration,
    cancel: CancellationToken,
) -> Result<NavigationEngine> {
    let bump_timer = sleep(bump_duration);
    tokio::pin!(bump_timer);
    let mut bumped: Option<Edge> = None;

    loop {
        select! {
            _ = cancel.cancelled() => {
                info!("cancel received; exiting controller task");
                break;
            }

            () = &mut bump_timer, if bumped.is_some() => {
                if let Some(edge) = bumped.take() {
                    if !emit(&to_renderer, RenderCommand::ClearBump(edge)).await {
                        break;
                    }
                }
            }

            req = requests.recv() => {
                let Some(req) = req else {
                    info!("request channel closed; exiting controller task");
                    break;
                };
                let delivered = match engine.apply(req) {
                    Outcome::Moved(res) => {
                        emit(
                            &to_renderer,
                            RenderCommand::Translate {
                                offset: res.applied_offset,
                                delta: res.delta,
                                active: engine.visible_range(),
                            },
                        )
                        .await
                    }
                    Outcome::BoundaryReached { edge } => {
                        let mut delivered = true;
                        if let Some(previous) = bumped.replace(edge) {
                            if previous != edge {
                                delivered = emit(&to_renderer, RenderCommand::ClearBump(previous)).await;
                            }
                        }
                        debug!(direction = edge.bump_direction(), "boundary bump");
                        bump_timer.as_mut().reset(Instant::now() + bump_duration);
                        delivered && emit(&to_renderer, RenderCommand::Bump(edge)).await
                    }
                    Outcome::NoOp => {
                        debug!(?req, "request produced no movement");
                        true
                    }
                };
                if !delivered {
                    break;
                }
            }
        }
    }

    if let Some(edge) = bumped.take() {
        if let Err(err) = to_renderer.try_send(RenderCommand::ClearBump(edge)) {
            debug!(?edge, %err, "pending bump clear not delivered on shutdown");
        }
    }
    Ok(engine)
}

async fn emit(to_renderer: &Sender<RenderCommand>, cmd: RenderCommand) -> bool {
    debug!(?cmd, "render");
    if to_renderer.send(cmd).await.is_err() {
        info!("renderer channel closed; exiting controller task");
        return false;
    }
    true
}
