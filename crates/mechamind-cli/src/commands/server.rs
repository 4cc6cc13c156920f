pub fn run(host: &str, port: u16) {
    let store = super::make_store();

    let base = format!("http://{host}:{port}");

    println!("MechaMind+ Backend v{}", mechamind_core::VERSION);
    println!("   {base}");
    println!("   store: {}", store.config().url());
    println!();
    println!("   Endpoints:");
    println!("     GET /                 Service banner");
    println!("     GET /vehicle-data     Simulated vehicle snapshot (not read from the store)");
    println!();
    println!("   Examples:");
    println!("     curl {base}/vehicle-data");
    println!();

    let rt = super::runtime();
    if let Err(e) = rt.block_on(mechamind_server::run_server(store, host, port)) {
        super::fatal(&format!("server on {base} failed: {e}"));
    }
}
