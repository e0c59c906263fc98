use clap::error::ErrorKind;
use subnet_check::cli::{parse_args, USAGE};
use subnet_check::logging::init_logging;
use subnet_check::output::{render, summary_line};
use std::process::exit;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.print().ok();
                exit(0);
            }
            e.print().ok();
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log_config, config.verbose) {
        eprintln!("Logging disabled: {e}");
    }
    log::info!("#Start main()");

    let report = match subnet_check::run(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };

    match render(&report, config.format) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    }

    if config.summary {
        eprintln!("{}", summary_line(&report.summary));
    }
}
