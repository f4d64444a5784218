use std::{env, fs::read_to_string};

use minipas::analyzer::analyzer::analyze;
use minipas::diagnostics::diagnostics::Report;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        panic!("No source files provided!");
    }

    for path in &args[1..] {
        let source = read_to_string(path).expect("Failed to read file!");

        println!("Testing: {}", path);
        print_report(&analyze(&source));
        println!();
    }
}

fn print_report(report: &Report) {
    if report.success {
        println!("Analysis successful: No errors found.");
    } else {
        println!("Errors found:");
        for message in report.messages() {
            println!("- {}", message);
        }
    }
}
