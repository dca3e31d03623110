//! Command-line argument structures for the CLI tool.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::Version;
use crate::config::{PORT_PROPERTY, VERSION_PROPERTY};

/// SNMP version for CLI argument parsing.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SnmpVersion {
    /// SNMPv1
    #[value(name = "1")]
    V1,
    /// SNMPv2c (default)
    #[default]
    #[value(name = "2c")]
    V2c,
    /// SNMPv3
    #[value(name = "3")]
    V3,
}

impl From<SnmpVersion> for Version {
    fn from(v: SnmpVersion) -> Self {
        match v {
            SnmpVersion::V1 => Version::V1,
            SnmpVersion::V2c => Version::V2c,
            SnmpVersion::V3 => Version::V3,
        }
    }
}

/// Output format for CLI tools.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with type information.
    #[default]
    Human,
    /// JSON output for scripting.
    Json,
    /// Raw tab-separated output for scripting.
    Raw,
}

/// Alert target settings.
#[derive(Debug, Parser)]
pub struct TargetArgs {
    /// Destination port of the SNMP trap receiver.
    #[arg(short = 'p', long = "port")]
    pub port: Option<String>,

    /// SNMP version to build the trap for.
    #[arg(short = 'v', long = "snmp-version", value_enum)]
    pub snmp_version: Option<SnmpVersion>,

    /// Extra dispatch property (repeatable).
    #[arg(short = 'P', long = "property", value_name = "KEY=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,
}

impl TargetArgs {
    /// Collect dispatch properties, letting `--port` and `--snmp-version`
    /// override `--property` entries with the same name.
    pub fn dispatch_properties(&self) -> HashMap<String, String> {
        let mut props: HashMap<String, String> = self.properties.iter().cloned().collect();
        if let Some(port) = &self.port {
            props.insert(PORT_PROPERTY.to_string(), port.clone());
        }
        if let Some(version) = self.snmp_version {
            props.insert(VERSION_PROPERTY.to_string(), Version::from(version).to_string());
        }
        props
    }
}

/// Parse a `KEY=VALUE` pair.
fn parse_property(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

/// Input arguments.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// JSON notification or alert record to encode ("-" or omitted for stdin).
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Read the whole input as a string.
    pub fn read(&self) -> std::io::Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
            _ => std::io::read_to_string(std::io::stdin().lock()),
        }
    }
}

/// Output and logging arguments.
#[derive(Debug, Parser)]
pub struct OutputArgs {
    /// Output format.
    #[arg(short = 'O', long = "output", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Disable Ambari MIB name hints in output.
    #[arg(long = "no-hints")]
    pub no_hints: bool,

    /// Enable debug logging.
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Enable trace-level logging.
    #[arg(long = "trace")]
    pub trace: bool,
}

impl OutputArgs {
    /// Initialize tracing based on debug/trace flags.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = if self.trace {
            "ambari_snmp_trap=trace"
        } else if self.debug {
            "ambari_snmp_trap=debug"
        } else {
            "ambari_snmp_trap=warn"
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .try_init();
    }
}
