//! ambari-trap: Render an Ambari alert notification as an SNMP trap PDU.
//!
//! Part of the ambari-snmp-trap CLI utilities.

use ambari_snmp_trap::cli::args::{InputArgs, OutputArgs, TargetArgs};
use ambari_snmp_trap::cli::input::parse_notification;
use ambari_snmp_trap::cli::output::{OutputContext, write_error};
use ambari_snmp_trap::{AMBARI_SNMP_TARGET_TYPE, DispatchConfig, DispatchRegistry, TrapBuilder};
use clap::Parser;
use std::process::ExitCode;

/// Build the SNMP trap an Ambari alert target would send for a notification.
#[derive(Debug, Parser)]
#[command(name = "ambari-trap", version, about)]
struct Args {
    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    input: InputArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    args.output.init_tracing();

    // Validate dispatch properties before touching the input
    let properties = args.target.dispatch_properties();
    let config = match DispatchConfig::from_properties(&properties) {
        Ok(config) => config,
        Err(e) => {
            write_error(&e);
            return ExitCode::FAILURE;
        }
    };
    let registry = DispatchRegistry::with_ambari_config(config);
    let Some(builder) = registry.get(AMBARI_SNMP_TARGET_TYPE) else {
        eprintln!("Error: no trap builder registered for {}", AMBARI_SNMP_TARGET_TYPE);
        return ExitCode::FAILURE;
    };

    let text = match args.input.read() {
        Ok(text) => text,
        Err(e) => {
            write_error(&e);
            return ExitCode::FAILURE;
        }
    };
    let notification = match parse_notification(&text) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: invalid notification JSON: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pdu = builder.build_trap(&notification, config.version);

    let output_ctx = OutputContext {
        format: args.output.format,
        show_hints: !args.output.no_hints,
    };
    if let Err(e) = output_ctx.write_trap(builder.target_type(), config.port.get(), &pdu) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
