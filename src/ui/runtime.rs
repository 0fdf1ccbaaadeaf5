use crate::catalog::{ProductId, ProductSource};
use crate::nav::History;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::product::ProductDetailView;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Everything the interactive loop needs from the caller.
pub struct RunOptions {
    pub initial: Option<ProductId>,
    pub source: Arc<dyn ProductSource>,
    /// Shown in the header to say which catalog is in use.
    pub catalog_label: String,
    pub tick_rate: Duration,
}

/// Run the terminal UI until the user quits.
///
/// Fetches are spawned on `runtime`; this thread only draws and handles
/// input.
pub fn run(options: RunOptions, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = options.tick_rate;
    let events = EventHandler::new(tick_rate);

    let (settled_tx, mut settled_rx) = mpsc::unbounded_channel();
    let forward = events.sender();
    runtime.spawn(async move {
        while let Some(settled) = settled_rx.recv().await {
            if forward.send(AppEvent::Settled(settled)).is_err() {
                break;
            }
        }
    });

    let view = ProductDetailView::new(
        History::starting_at(options.initial),
        options.source,
        runtime.clone(),
        settled_tx,
    );
    let mut app = App::new(view, options.catalog_label);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => app.request_quit(),
        }
    }

    drop(app);
    drop(guard);
    Ok(())
}

fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Settled(settled) => app.on_settled(settled),
        AppEvent::Tick | AppEvent::Resize => {}
        AppEvent::InputClosed => {
            tracing::warn!("terminal input closed, shutting down");
            app.request_quit();
        }
    }
}
