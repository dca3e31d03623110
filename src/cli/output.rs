//! Output formatting for the CLI tool.
//!
//! Supports human-readable, JSON, and raw output formats.

use crate::cli::args::OutputFormat;
use crate::{Pdu, VarBind};
use serde::Serialize;
use std::io::{self, Write};

/// Trap ready for output.
#[derive(Debug, Serialize)]
pub struct TrapResult {
    pub target_type: String,
    pub port: u16,
    pub version: String,
    pub pdu_type: String,
    pub varbinds: Vec<VarBindResult>,
}

/// A single varbind.
#[derive(Debug, Serialize)]
pub struct VarBindResult {
    pub oid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: String,
}

/// Output context for formatting.
pub struct OutputContext {
    pub format: OutputFormat,
    pub show_hints: bool,
}

impl OutputContext {
    /// Create a new output context with default settings.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            show_hints: true,
        }
    }

    /// Write a trap to stdout.
    pub fn write_trap(&self, target_type: &str, port: u16, pdu: &Pdu) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_trap_to(&mut stdout, target_type, port, pdu)
    }

    /// Write a trap to any writer.
    pub fn write_trap_to<W: Write>(
        &self,
        w: &mut W,
        target_type: &str,
        port: u16,
        pdu: &Pdu,
    ) -> io::Result<()> {
        let result = self.build_result(target_type, port, pdu);

        match self.format {
            OutputFormat::Human => self.write_human(w, &result),
            OutputFormat::Json => self.write_json(w, &result),
            OutputFormat::Raw => self.write_raw(w, &result),
        }
    }

    fn build_result(&self, target_type: &str, port: u16, pdu: &Pdu) -> TrapResult {
        TrapResult {
            target_type: target_type.to_string(),
            port,
            version: pdu.version.to_string(),
            pdu_type: pdu.pdu_type.to_string(),
            varbinds: pdu.varbinds.iter().map(|vb| self.format_varbind(vb)).collect(),
        }
    }

    fn format_varbind(&self, vb: &VarBind) -> VarBindResult {
        let hint = if self.show_hints {
            vb.mib_name().map(String::from)
        } else {
            None
        };

        VarBindResult {
            oid: vb.oid.to_string(),
            hint,
            value_type: vb.value.type_name().to_string(),
            value: vb.value.to_string(),
        }
    }

    fn write_human<W: Write>(&self, w: &mut W, result: &TrapResult) -> io::Result<()> {
        writeln!(
            w,
            "{} trap for {} (port {}): {} varbind(s)",
            result.version,
            result.target_type,
            result.port,
            result.varbinds.len()
        )?;
        writeln!(w, "PDU type: {}", result.pdu_type)?;

        for vb in &result.varbinds {
            if let Some(ref hint) = vb.hint {
                write!(w, "{} ({})", vb.oid, hint)?;
            } else {
                write!(w, "{}", vb.oid)?;
            }

            write!(w, " = {}: ", vb.value_type)?;

            if vb.value_type == "STRING" {
                writeln!(w, "\"{}\"", vb.value)?;
            } else {
                writeln!(w, "{}", vb.value)?;
            }
        }

        Ok(())
    }

    fn write_json<W: Write>(&self, w: &mut W, result: &TrapResult) -> io::Result<()> {
        let json = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
        writeln!(w, "{}", json)
    }

    fn write_raw<W: Write>(&self, w: &mut W, result: &TrapResult) -> io::Result<()> {
        for vb in &result.varbinds {
            writeln!(w, "{}\t{}", vb.oid, vb.value)?;
        }
        Ok(())
    }
}

/// Write an error message to stderr.
pub fn write_error(err: &dyn std::fmt::Display) {
    eprintln!("Error: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlertInfo, AmbariTrapBuilder, DispatchConfig, Notification, TrapBuilder, Version};

    fn sample_pdu() -> Pdu {
        let builder = AmbariTrapBuilder::new(DispatchConfig::try_new(162).unwrap());
        let info = AlertInfo::new().definition_id(42).host_name("node1");
        builder.build_trap(&Notification::alert(info), Version::V2c)
    }

    fn render(ctx: &OutputContext, pdu: &Pdu) -> String {
        let mut out = Vec::new();
        ctx.write_trap_to(&mut out, "AMBARI_SNMP", 162, pdu).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_output() {
        let text = render(&OutputContext::new(OutputFormat::Human), &sample_pdu());
        assert!(text.starts_with("SNMPv2c trap for AMBARI_SNMP (port 162): 10 varbind(s)\n"));
        assert!(text.contains("PDU type: TrapV2"));
        assert!(text.contains(
            "1.3.6.1.6.3.1.1.4.1.0 (snmpTrapOID.0) = OID: 1.3.6.1.4.1.18060.16.0\n"
        ));
        assert!(text.contains("1.3.6.1.4.1.18060.16.1.1.1.1 (alertDefinitionId) = STRING: \"42\"\n"));
        assert!(text.contains("1.3.6.1.4.1.18060.16.1.1.1.8 (alertService) = STRING: \"null\"\n"));
    }

    #[test]
    fn test_human_output_without_hints() {
        let ctx = OutputContext {
            format: OutputFormat::Human,
            show_hints: false,
        };
        let text = render(&ctx, &sample_pdu());
        assert!(!text.contains("alertDefinitionId"));
    }

    #[test]
    fn test_raw_output() {
        let text = render(&OutputContext::new(OutputFormat::Raw), &sample_pdu());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "1.3.6.1.6.3.1.1.4.1.0\t1.3.6.1.4.1.18060.16.0");
        assert_eq!(lines[7], "1.3.6.1.4.1.18060.16.1.1.1.7\tnode1");
    }

    #[test]
    fn test_json_output() {
        let text = render(&OutputContext::new(OutputFormat::Json), &sample_pdu());
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["version"], "SNMPv2c");
        assert_eq!(json["pdu_type"], "TrapV2");
        assert_eq!(json["port"], 162);
        assert_eq!(json["varbinds"].as_array().unwrap().len(), 10);
        assert_eq!(json["varbinds"][1]["hint"], "alertDefinitionId");
        assert_eq!(json["varbinds"][1]["type"], "STRING");
        assert_eq!(json["varbinds"][1]["value"], "42");
    }

    #[test]
    fn test_empty_pdu_output() {
        let builder = AmbariTrapBuilder::new(DispatchConfig::try_new(162).unwrap());
        let pdu = builder.build_trap(&Notification::generic("s", "b"), Version::V1);
        let text = render(&OutputContext::new(OutputFormat::Human), &pdu);
        assert_eq!(
            text,
            "SNMPv1 trap for AMBARI_SNMP (port 162): 0 varbind(s)\nPDU type: TrapV1\n"
        );
    }
}
