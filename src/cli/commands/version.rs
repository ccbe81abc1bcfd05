//! `passcodec version`: display version information.

use console::style;

use crate::crypto::Algorithm;
use crate::errors::Result;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    println!("passcodec {current}");

    let tags: Vec<&str> = Algorithm::ALL.iter().map(|a| a.tag()).collect();
    println!("{} {}", style("algorithms:").dim(), tags.join(", "));

    Ok(())
}
