use anyhow::Result;
use virmac::MacAddress;

pub fn handle(mac: &str) -> Result<()> {
    let mac = MacAddress::parse(mac)?;
    for (label, value) in describe(&mac) {
        println!("{:<10} {}", label, value);
    }
    Ok(())
}

fn describe(mac: &MacAddress) -> Vec<(&'static str, String)> {
    let kind = if mac.is_multicast() { "multicast" } else { "unicast" };
    vec![
        ("Address:", mac.to_string()),
        ("Prefix:", mac.prefix().to_string()),
        ("Type:", kind.to_string()),
    ]
}
