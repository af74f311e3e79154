use anyhow::{Context, Result};
use std::cmp::Ordering;
use tracing::debug;
use virmac::{compare_text, MacAddress};

pub fn handle(a: &str, b: &str, binary: bool) -> Result<()> {
    let ordering = compare(a, b, binary)?;
    println!("{}", describe(ordering));
    Ok(())
}

/// Compare loosely as text, or byte-exactly after parsing both sides
pub fn compare(a: &str, b: &str, binary: bool) -> Result<Ordering> {
    if !binary {
        debug!("Comparing {:?} and {:?} as text", a, b);
        return Ok(compare_text(a, b));
    }

    let left = MacAddress::parse(a).context("left operand")?;
    let right = MacAddress::parse(b).context("right operand")?;
    debug!("Comparing {} and {} as binary", left, right);
    Ok(left.compare_binary(&right))
}

fn describe(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}
