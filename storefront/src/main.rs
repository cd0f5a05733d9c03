use storefront::{AppState, BackgroundTasks, LandingView, TaskKind, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    print_banner();

    tracing::info!(
        "🍔 Storefront starting (env: {}, tz: {})",
        config.environment,
        config.timezone
    );

    // 2. 加载业务配置
    let state = match AppState::initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to load business config: {}", e);
            return Err(e.into());
        }
    };

    // 3. 挂载页面 + 后台任务
    let mut tasks = BackgroundTasks::new();
    let view = LandingView::mount(
        state.business.clone(),
        state.clock(),
        config.refresh_interval(),
        &mut tasks,
    );
    println!("{}", view.render());

    let mut updates = view.subscribe();
    let shutdown = tasks.shutdown_token();
    tasks.spawn("status_logger", TaskKind::Listener, async move {
        loop {
            tokio::select! {
                changed = updates.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    let status = updates.borrow_and_update().clone();
                    tracing::info!(
                        open = status.is_open,
                        hours = %status.hours_label,
                        "{} ({})",
                        status.badge(),
                        status.evaluated_at
                    );
                }
                _ = shutdown.cancelled() => return,
            }
        }
    });
    tasks.log_summary();

    // 4. 等待关机信号
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    if tasks.check_health() > 0 {
        tracing::warn!("Some background tasks exited early");
    }
    tasks.shutdown().await;
    view.unmount();

    Ok(())
}
