use anyhow::Result;
use virmac::MacAddress;

pub fn handle(mac: &str) -> Result<()> {
    println!("{}", canonical(mac)?);
    Ok(())
}

/// Parse strictly and return the canonical XX:XX:XX:XX:XX:XX form
pub fn canonical(mac: &str) -> Result<String> {
    let mac = MacAddress::parse(mac)?;
    Ok(mac.to_string())
}
