//! Page shell driving a controlled checkbox group.
//!
//! The host keeps the selected values, passes them to the group, and updates
//! them from every `selection_changed` notification. A few scripted clicks
//! stand in for user input.
//!
//! Run with: cargo run -p multicheck --example app_shell

use std::sync::Arc;

use multicheck::{
    CheckOption, LayoutDebug, MultiCheckboxes, MultiCheckboxesConfig, SELECT_ALL_VALUE,
};
use parking_lot::Mutex;

const LABELS: [&str; 16] = [
    "aaaa", "bbbb", "cccc", "dddd", "eeee", "ffff", "gggg", "hhhh", "iiii", "jjjj", "kkkk",
    "llll", "mmmm", "nnnn", "oooo", "pppp",
];

const DEFAULT_VALUES: [&str; 3] = ["1000", "1111", "0001"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options: Vec<CheckOption> = LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| CheckOption::new(*label, format!("{i:04b}")))
        .collect();

    let selected_values = Arc::new(Mutex::new(
        DEFAULT_VALUES.iter().map(|value| value.to_string()).collect::<Vec<_>>(),
    ));

    let config = MultiCheckboxesConfig::new(options)
        .columns(4)
        .values(selected_values.lock().clone());

    let host_values = selected_values.clone();
    let mut group = MultiCheckboxes::new(config)?.with_on_change(move |selected| {
        *host_values.lock() = selected.iter().map(|option| option.value.clone()).collect();
    });

    println!("Multi Check Component");
    println!("=====================");
    println!();
    print!("{}", LayoutDebug::new(&group));
    print_selected(&selected_values.lock());

    for value in ["0010", "1111", SELECT_ALL_VALUE, "0101", SELECT_ALL_VALUE] {
        println!();
        println!("> click {value}");
        group.click(value);
        // Re-render with the host's latest values.
        group.set_values(selected_values.lock().clone());

        print!("{}", LayoutDebug::new(&group));
        print_selected(&selected_values.lock());
    }

    Ok(())
}

fn print_selected(values: &[String]) {
    println!("Current selected values:");
    println!("{}", values.join(","));
}
