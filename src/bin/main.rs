use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use log::{info, warn};
use storyline_core::{
    app::{StoryViewer, TickResult, ViewerConfig},
    content::{StorySource, static_source::demo_source},
    input::mock::TimedScript,
};
use tracing_subscriber::EnvFilter;

use frame_log::FrameLog;
use shell_host::ShellHost;

#[path = "main/frame_log.rs"]
mod frame_log;
#[path = "main/session.rs"]
mod session;
#[path = "main/shell_host.rs"]
mod shell_host;

const FRAME_MS: u64 = 16;
const SESSION_TIMEOUT_MS: u64 = 60_000;
const REPORT_INTERVAL_MS: u64 = 5_000;
const DEFAULT_LOG_FILTER: &str = "info";

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let source = demo_source();
    info!(
        "boot: storyline starting users={} frame_ms={}",
        source.user_count(),
        FRAME_MS
    );

    let mut viewer = StoryViewer::new(
        source,
        TimedScript::new(&session::DEMO_SESSION),
        ShellHost::default(),
        ViewerConfig::default(),
    );
    let mut frames = FrameLog::default();

    let loop_start = Instant::now();
    if let Err(err) = viewer.open(session::INITIAL_USER, 0) {
        warn!(
            "boot: open failed user={} err={:?}",
            session::INITIAL_USER,
            err
        );
        return;
    }

    let mut report_start_ms = 0u64;
    let mut report_renders = 0u32;

    loop {
        let now_ms = loop_start.elapsed().as_millis();
        viewer.input_mut().set_clock(now_ms);

        if viewer.tick(now_ms) == TickResult::RenderRequested {
            viewer.with_screen(now_ms, |screen| {
                frames.render(screen);
            });
            report_renders = report_renders.saturating_add(1);
        }

        if !viewer.is_open() {
            break;
        }

        if now_ms >= SESSION_TIMEOUT_MS {
            warn!("session: timeout after {}ms, closing", SESSION_TIMEOUT_MS);
            viewer.close(now_ms);
            break;
        }

        let elapsed_ms = now_ms.saturating_sub(report_start_ms);
        if elapsed_ms >= REPORT_INTERVAL_MS {
            let script_done = viewer.input_mut().is_finished();
            if let Some(cursor) = viewer.cursor() {
                info!(
                    "stats: renders={} elapsed_ms={} user={} index={} progress={}% script_done={}",
                    report_renders,
                    elapsed_ms,
                    cursor.user_id,
                    cursor.index,
                    cursor.progress_pct,
                    script_done
                );
            }
            report_renders = 0;
            report_start_ms = now_ms;
        }

        Timer::after_millis(FRAME_MS).await;
    }

    let host = viewer.host();
    info!(
        "session: done closed={} stories_shown={} profile_request={:?}",
        host.closed(),
        host.stories_shown(),
        host.profile_request()
    );
}
