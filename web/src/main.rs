fn main() {
	tracing_subscriber::fmt()
		.with_writer(
			tracing_subscriber_wasm::MakeConsoleWriter::default()
				.map_trace_level_to(tracing::Level::DEBUG)
		)
		.with_max_level(tracing::Level::INFO)
		.with_ansi(false)
		.without_time()
		.init();
	console_error_panic_hook::set_once();

	leptos::mount::mount_to_body(groupadmin_web::App);
}
