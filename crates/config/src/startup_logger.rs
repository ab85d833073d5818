//! Service startup logging for the shopmock mock server

use std::env;

use tracing::info;

/// Logs service information at startup
pub fn log_service_info() {
	let service_name = "shopmock";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Shopmock Mock Server Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Shopmock Mock Server Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Shopmock Mock Server Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Serving canned commerce responses");
}
