// crates/cli/src/presentation.rs
use crate::args::OutputOptions;
use crate::error::Result;
use crate::options::OutputFormat;
use comfy_table::{CellAlignment, Table, presets};
use std::fmt::Write as _;
use std::io::Write;
use target_sum_engine::Strategy;
use target_sum_engine::outcome::{Outcome, RunResult};

pub fn render<W: Write>(out: &mut W, result: &RunResult, options: &OutputOptions) -> Result<()> {
    let outcomes = &result.outcomes;
    match options.format {
        OutputFormat::Table => write_table(out, result, options.total_row),
        OutputFormat::Plain => write_plain(out, outcomes),
        OutputFormat::Csv => write_sv(out, result, ",", options.total_row),
        OutputFormat::Tsv => write_sv(out, result, "\t", options.total_row),
        OutputFormat::Json => write_json(out, outcomes),
        OutputFormat::Jsonl => write_jsonl(out, result),
        OutputFormat::Yaml => write_yaml(out, outcomes),
        OutputFormat::Md => write_markdown(out, result, options.total_row),
    }
}

fn join_numbers(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_strategies(strategies: &[Strategy], separator: &str) -> String {
    strategies
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(separator)
}

fn any_verified(outcomes: &[Outcome]) -> bool {
    outcomes.iter().any(|o| !o.verified_by.is_empty())
}

fn write_table<W: Write>(out: &mut W, result: &RunResult, total_row: bool) -> Result<()> {
    let outcomes = &result.outcomes;
    let verified = any_verified(outcomes);

    let mut header = vec!["TARGET", "NUMBERS", "WAYS", "STRATEGY"];
    if verified {
        header.push("VERIFIED BY");
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).set_header(header);

    for o in outcomes {
        let mut row = vec![
            o.target.to_string(),
            join_numbers(&o.numbers),
            o.ways.to_string(),
            o.strategy.to_string(),
        ];
        if verified {
            row.push(join_strategies(&o.verified_by, ", "));
        }
        table.add_row(row);
    }

    if total_row {
        table.add_row(vec![
            String::new(),
            format!("TOTAL ({} problems)", outcomes.len()),
            result.total_ways().to_string(),
            String::new(),
        ]);
    }

    for index in [0, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "[target_sum] Completed: {} problems solved.",
        outcomes.len()
    )?;
    Ok(())
}

fn write_plain<W: Write>(out: &mut W, outcomes: &[Outcome]) -> Result<()> {
    for o in outcomes {
        writeln!(out, "{}", o.ways)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, outcomes: &[Outcome]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcomes)?;
    writeln!(out)?;
    Ok(())
}

fn write_yaml<W: Write>(out: &mut W, outcomes: &[Outcome]) -> Result<()> {
    let yaml = serde_yaml::to_string(outcomes)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

fn write_jsonl<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    for o in &result.outcomes {
        let mut v = serde_json::to_value(o)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "problem".into());
        }
        writeln!(out, "{}", serde_json::to_string(&v)?)?;
    }

    let total_obj = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "problems": result.outcomes.len(),
        "errors": result.errors.len(),
        "ways": result.total_ways(),
    });
    writeln!(out, "{total_obj}")?;
    Ok(())
}

fn write_markdown<W: Write>(out: &mut W, result: &RunResult, total_row: bool) -> Result<()> {
    let outcomes = &result.outcomes;
    let verified = any_verified(outcomes);

    let mut header = String::from("| Target | Numbers | Ways | Strategy |");
    let mut separator = String::from("|---:|:---|---:|:---|");
    if verified {
        header.push_str(" Verified by |");
        separator.push_str(":---|");
    }

    writeln!(out, "### Target Sum Results")?;
    writeln!(out)?;
    writeln!(out, "{header}")?;
    writeln!(out, "{separator}")?;

    for o in outcomes {
        let mut row = format!(
            "| {} | {} | {} | {} |",
            o.target,
            join_numbers(&o.numbers),
            o.ways,
            o.strategy
        );
        if verified {
            let _ = write!(row, " {} |", join_strategies(&o.verified_by, ", "));
        }
        writeln!(out, "{row}")?;
    }

    if total_row {
        let mut row = format!("| | **TOTAL** | {} | |", result.total_ways());
        if verified {
            row.push_str(" |");
        }
        writeln!(out, "{row}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_sv<W: Write>(
    out: &mut W,
    result: &RunResult,
    delimiter: &str,
    total_row: bool,
) -> Result<()> {
    let header = ["target", "numbers", "ways", "strategy", "verified_by"].join(delimiter);
    writeln!(out, "{header}")?;

    for o in &result.outcomes {
        let row = [
            o.target.to_string(),
            join_numbers(&o.numbers),
            o.ways.to_string(),
            o.strategy.to_string(),
            join_strategies(&o.verified_by, ";"),
        ]
        .join(delimiter);
        writeln!(out, "{row}")?;
    }

    if total_row {
        let row = [
            String::new(),
            "TOTAL".to_string(),
            result.total_ways().to_string(),
            String::new(),
            String::new(),
        ]
        .join(delimiter);
        writeln!(out, "{row}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use target_sum_engine::Problem;

    fn sample() -> RunResult {
        let mut verified = Outcome::new(&Problem::new(vec![1, 2, 3], 0), Strategy::Complement, 2);
        verified.verified_by = vec![Strategy::Direct, Strategy::Dynamic];
        RunResult {
            outcomes: vec![
                Outcome::new(&Problem::new(vec![1, 1, 1, 1, 1], 3), Strategy::Complement, 5),
                verified,
            ],
            errors: Vec::new(),
        }
    }

    fn rendered(format: OutputFormat, total_row: bool) -> String {
        let mut buf = Vec::new();
        render(&mut buf, &sample(), &OutputOptions { format, total_row }).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_prints_counts_only() {
        assert_eq!(rendered(OutputFormat::Plain, false), "5\n2\n");
    }

    #[test]
    fn csv_has_header_rows_and_total() {
        let csv = rendered(OutputFormat::Csv, true);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "target,numbers,ways,strategy,verified_by");
        assert_eq!(lines[1], "3,1 1 1 1 1,5,complement,");
        assert_eq!(lines[2], "0,1 2 3,2,complement,direct;dynamic");
        assert_eq!(lines[3], ",TOTAL,7,,");
    }

    #[test]
    fn tsv_uses_tabs() {
        let tsv = rendered(OutputFormat::Tsv, false);
        assert!(tsv.starts_with("target\tnumbers\tways\tstrategy\tverified_by\n"));
        assert_eq!(tsv.lines().count(), 3);
    }

    #[test]
    fn json_is_an_array_of_outcomes() {
        let text = rendered(OutputFormat::Json, false);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["ways"], 5);
        assert_eq!(items[0]["strategy"], "complement");
        assert!(items[0].get("verified_by").is_none());
        assert_eq!(items[1]["verified_by"][1], "dynamic");
    }

    #[test]
    fn jsonl_ends_with_total() {
        let text = rendered(OutputFormat::Jsonl, false);
        let lines: Vec<&str> = text.lines().collect();
        let last: serde_json::Value = serde_json::from_str(lines[lines.len() - 1]).unwrap();
        assert_eq!(last["type"], "total");
        assert_eq!(last["problems"], 2);
        assert_eq!(last["ways"], 7);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "problem");
    }

    #[test]
    fn yaml_lists_outcomes() {
        let yaml = rendered(OutputFormat::Yaml, false);
        assert!(yaml.contains("ways: 5"));
        assert!(yaml.contains("strategy: complement"));
    }

    #[test]
    fn markdown_adds_verified_column_when_needed() {
        let md = rendered(OutputFormat::Md, true);
        assert!(md.contains("| Target | Numbers | Ways | Strategy | Verified by |"));
        assert!(md.contains("| 0 | 1 2 3 | 2 | complement | direct, dynamic |"));
        assert!(md.contains("| | **TOTAL** | 7 | | |"));
    }

    #[test]
    fn table_reports_completion() {
        let table = rendered(OutputFormat::Table, true);
        assert!(table.contains("WAYS"));
        assert!(table.contains("TOTAL (2 problems)"));
        assert!(table.ends_with("[target_sum] Completed: 2 problems solved.\n"));
    }
}
