//! Text and JSON reports for the command line.

use cube_core::{CellProbe, SliceSummary};
use serde::Serialize;

/// Everything printed for one invocation.
#[derive(Debug, Serialize)]
pub struct Report {
    pub summary: SliceSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe: Option<CellProbe>,
}

/// Parse a `G,B` cell coordinate.
pub fn parse_cell(s: &str) -> Result<(u8, u8), String> {
    let (g, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected G,B but got '{}'", s))?;
    let channel = |v: &str| {
        v.trim()
            .parse::<u8>()
            .map_err(|_| format!("'{}' is not a channel value (0-255)", v.trim()))
    };
    Ok((channel(g)?, channel(b)?))
}

/// Human-readable probe details, one line per reference.
pub fn format_probe(probe: &CellProbe, min_contrast: f64) -> String {
    let mut out = format!(
        "Cell {} luminance {:.4}: {}\n",
        probe.color,
        probe.luminance,
        if probe.passes(min_contrast) {
            "pass"
        } else {
            "fail"
        }
    );
    for contrast in &probe.ratios {
        out.push_str(&format!(
            "  vs {}: {:.2}:1\n",
            contrast.reference, contrast.ratio
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{ContrastEngine, ReferenceSet, Rgb};

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("12,34"), Ok((12, 34)));
        assert_eq!(parse_cell(" 0 , 255 "), Ok((0, 255)));
        assert!(parse_cell("12").is_err());
        assert!(parse_cell("12,256").is_err());
        assert!(parse_cell("a,b").is_err());
    }

    #[test]
    fn test_format_probe() {
        let engine = ContrastEngine::new();
        let refs = ReferenceSet::from_colors(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
        let probe = engine.probe(255, 0, 0, &refs);

        insta::assert_snapshot!(format_probe(&probe, 4.5).trim_end(), @r"
        Cell #ff0000 luminance 0.2126: fail
          vs #000000: 5.25:1
          vs #ffffff: 4.00:1
        ");
    }

    #[test]
    fn test_report_omits_missing_probe() {
        let engine = ContrastEngine::new();
        let refs = ReferenceSet::default();
        let mask = engine.compute_references(0, 3.0, &refs).unwrap();
        let report = Report {
            summary: SliceSummary::new(0, 3.0, &refs, &mask),
            probe: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("probe").is_none());
        assert_eq!(json["summary"]["references"][0], "#ffffff");
    }
}
