//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::credential::HashParams;
use crate::crypto::Algorithm;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the supported algorithms, marking the configured default.
pub fn print_algorithms_table(default: Option<Algorithm>) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tag", "Description", "Default"]);

    for alg in Algorithm::ALL {
        let marker = if Some(alg) == default { "*" } else { "" };
        table.add_row(vec![
            alg.tag().to_string(),
            alg.description().to_string(),
            marker.to_string(),
        ]);
    }

    println!("{table}");
}

/// Print the parameters embedded in a stored hash.
pub fn print_params_table(params: &HashParams) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["algorithm".to_string(), params.algorithm().to_string()]);
    match params {
        HashParams::Bcrypt { cost } => {
            table.add_row(vec!["cost".to_string(), cost.to_string()]);
        }
        HashParams::Pbkdf2 {
            iterations,
            salt_len,
            ..
        } => {
            table.add_row(vec!["iterations".to_string(), iterations.to_string()]);
            table.add_row(vec!["salt bytes".to_string(), salt_len.to_string()]);
        }
    }

    println!("{table}");
}
