//! CLI entry point for bitsy_parse.
//! Usage: cargo run -p bitsy_parse -- info game.bitsy

use std::{env, fs, process};

use bitsy_parse::{Parsed, parse_file};
use ron::ser::PrettyConfig;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    // Accept either:
    // 1) cargo run: <bin> -- <cmd> <args>
    // 2) direct:    <bin> <cmd> <args>
    let rest: Vec<String> = match args.as_slice() {
        [_, flag, cmd, tail @ ..] if flag == "--" && (cmd == "info" || cmd == "compile") => {
            let mut v = vec![cmd.clone()];
            v.extend_from_slice(tail);
            v
        },
        [_, cmd, tail @ ..] if cmd == "info" || cmd == "compile" => {
            let mut v = vec![cmd.clone()];
            v.extend_from_slice(tail);
            v
        },
        _ => {
            eprintln!(
                "Usage:\n  bitsy_parse info <file.bitsy>\n  bitsy_parse compile <file.bitsy> [--out <out.ron>]"
            );
            process::exit(2);
        },
    };
    let cmd = &rest[0];
    if cmd == "info" {
        run_info(&rest[1..]);
    } else {
        run_compile(&rest[1..]);
    }
}

fn load(path: &str) -> Parsed {
    let parsed = parse_file(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });
    for warning in &parsed.warnings {
        eprintln!("warning: {}: {warning}", path);
    }
    parsed
}

fn run_info(args: &[String]) {
    let Some(path) = args.first() else {
        eprintln!("Usage: bitsy_parse info <file.bitsy>");
        process::exit(2);
    };
    let parsed = load(path);
    println!("Game Title: {}", parsed.world.title);
    println!("{}", parsed.world.stats());
}

fn run_compile(args: &[String]) {
    let mut path: Option<String> = None;
    let mut out_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--out" {
            if i + 1 >= args.len() {
                eprintln!("--out requires a filepath");
                process::exit(2);
            }
            out_path = Some(args[i + 1].clone());
            i += 2;
            continue;
        }
        if path.is_none() {
            path = Some(args[i].clone());
        }
        i += 1;
    }
    let Some(path) = path else {
        eprintln!("Usage: bitsy_parse compile <file.bitsy> [--out <out.ron>]");
        process::exit(2);
    };
    let parsed = load(&path);
    let ron = ron::ser::to_string_pretty(&parsed.world, PrettyConfig::default()).unwrap_or_else(|e| {
        eprintln!("error: serializing world: {e}");
        process::exit(1);
    });
    if let Some(out) = out_path {
        fs::write(&out, ron).unwrap_or_else(|e| {
            eprintln!("error: writing '{}': {}", &out, e);
            process::exit(1);
        });
    } else {
        println!("{ron}");
    }
}
