//! Example: List used ports and pick a free one.

use port_randomizer_core::{
    PortSelector, Protocol, SelectionPolicy, SocketEnumerator, SocketProbe, UsageLister,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("Enumerating ports...\n");

    match SocketEnumerator::new() {
        Ok(enumerator) => {
            let lister = UsageLister::new(enumerator);
            match lister.list_all().await {
                Ok(rows) => {
                    println!("{:<8} {:<8}", "TCP", "UDP");
                    println!("{}", "-".repeat(17));
                    for row in &rows {
                        println!(
                            "{:<8} {:<8}",
                            row.tcp.map(|p| p.to_string()).unwrap_or_default(),
                            row.udp.map(|p| p.to_string()).unwrap_or_default()
                        );
                    }
                    println!("\nTotal: {} rows", rows.len());
                }
                Err(e) => eprintln!("Error listing ports: {}", e),
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }

    match PortSelector::new(SocketProbe::new(), SelectionPolicy::default()) {
        Ok(selector) => {
            for protocol in Protocol::ALL {
                match selector.select(protocol) {
                    Ok(port) => println!("Free {} port: {}", protocol.display_name(), port),
                    Err(e) => eprintln!("Error selecting {} port: {}", protocol, e),
                }
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
