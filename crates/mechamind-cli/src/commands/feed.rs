//! `mechamind feed` — push simulated snapshots into the store forever.

use mechamind_core::DeliveryLoop;

pub fn run() {
    let store = super::make_store();
    let delivery = DeliveryLoop::new(store);

    println!("Feeding simulated vehicle data");
    println!("  Table:     {}", delivery.sink().table_url());
    println!("  Interval:  {}s", delivery.interval().as_secs());
    println!("  Stop:      kill the process (Ctrl+C)");
    println!();

    let rt = super::runtime();
    rt.block_on(delivery.run());
}
