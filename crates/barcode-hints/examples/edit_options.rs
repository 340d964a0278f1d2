//! Applies `name=value` assignments and `--reset name` removals to Data
//! Matrix options and prints the resulting hint store as JSON.
//!
//! ```text
//! cargo run --example edit_options -- min_size=10x20 symbol_shape=force_square --reset min_size
//! ```
//!
//! `name=` with an empty value sets the property to the empty string.

use std::env;
use std::process;

use barcode_hints::datamatrix::DATAMATRIX_PROPERTIES;
use barcode_hints::{DatamatrixEncodingOptions, HintOptions, HintStore};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: edit_options [name=value | --reset name]...");
        eprintln!();
        eprintln!("Properties:");
        for descriptor in DATAMATRIX_PROPERTIES.iter() {
            eprintln!("  {:<20} [{}] {}", descriptor.name, descriptor.category, descriptor.description);
        }
        process::exit(1);
    }

    let mut hints = HintStore::new();
    let mut options = DatamatrixEncodingOptions::new(&mut hints);

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        let result = if arg == "--reset" {
            let Some(name) = args.next() else {
                eprintln!("Expected a property name after --reset");
                process::exit(1);
            };
            options.reset(name)
        } else {
            let Some((name, value)) = arg.split_once('=') else {
                eprintln!("Expected name=value, got {:?}", arg);
                process::exit(1);
            };
            options.set_text(name, value)
        };
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    for descriptor in DATAMATRIX_PROPERTIES.iter() {
        if let Ok(Some(text)) = options.get_text(descriptor.name) {
            println!("{} = {}", descriptor.name, text);
        }
    }

    match serde_json::to_string_pretty(&hints) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing hints: {}", e);
            process::exit(1);
        }
    }
}
