//! Interactive session: one ledger kept for the life of the process.

use ck_app::{
    AppError, AppResult, Session, Spacing, SweepRequest, apply_template, calculate, convert,
    delete_template, history_csv, list_templates, parse_assignments, run_sweep, save_template,
    templates_csv, write_export,
};
use std::io::{BufRead, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  calc FORMULA [KEY=VALUE ...]                 evaluate and record
  sweep FORMULA KEY [START END [STEPS]] [--log] [KEY=VALUE ...]
  convert DIMENSION FROM TO VALUE
  history                                      newest first
  clear                                        clear history
  save NAME FORMULA [KEY=VALUE ...]            save a template
  load NAME                                    calculate with a template
  templates [FILTER]
  delete NAME
  export-history FILE
  export-templates FILE
  help
  quit
Quote names containing spaces: calc \"Reynolds Number\" v=2";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Read commands from `input` until `quit` or end of input. Command errors
/// are reported and the session carries on.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> AppResult<()> {
    writeln!(out, "chemkit session. Type 'help' for commands.")?;
    write!(out, "ck> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match execute(session, &line, out) {
            Ok(Flow::Quit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => writeln!(out, "Error: {e}")?,
        }
        write!(out, "ck> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn execute<W: Write>(session: &mut Session, line: &str, out: &mut W) -> AppResult<Flow> {
    let tokens = tokenize(line)?;
    let Some((command, args)) = tokens.split_first() else {
        return Ok(Flow::Continue);
    };

    match command.as_str() {
        "calc" => {
            let [formula, assignments @ ..] = args else {
                return Err(usage("calc FORMULA [KEY=VALUE ...]"));
            };
            let calc = calculate(session, formula, &parse_assignments(assignments)?)?;
            writeln!(out, "{}", calc.display(session.config().precision))?;
            if let Some(regime) = calc.regime {
                writeln!(out, "Flow regime: {regime}")?;
            }
        }
        "sweep" => cmd_sweep(session, args, out)?,
        "convert" => {
            let [dimension, from, to, value] = args else {
                return Err(usage("convert DIMENSION FROM TO VALUE"));
            };
            let value = parse_number(value)?;
            let result = convert(dimension, from, to, value)?;
            writeln!(
                out,
                "{} {} = {} {}",
                session.format_value(value),
                from,
                session.format_value(result),
                to
            )?;
        }
        "history" => {
            let ledger = session.ledger();
            if ledger.is_empty() {
                writeln!(out, "No calculations yet")?;
            }
            for entry in ledger.history() {
                let inputs: Vec<_> = entry
                    .inputs
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect();
                writeln!(
                    out,
                    "{}  {}: {}  [{}]",
                    entry.timestamp,
                    entry.formula,
                    session.format_value(entry.result),
                    inputs.join(", ")
                )?;
            }
            if !ledger.is_empty() {
                writeln!(out, "Total calculations: {}", ledger.len())?;
            }
        }
        "clear" => {
            session.ledger_mut().clear();
            writeln!(out, "History cleared")?;
        }
        "save" => {
            let [name, formula, assignments @ ..] = args else {
                return Err(usage("save NAME FORMULA [KEY=VALUE ...]"));
            };
            let replaced = save_template(session, name, formula, &parse_assignments(assignments)?)?;
            if replaced.is_some() {
                writeln!(out, "Template '{name}' updated")?;
            } else {
                writeln!(out, "Template '{name}' saved")?;
            }
        }
        "load" => {
            let [name] = args else {
                return Err(usage("load NAME"));
            };
            let calc = apply_template(session, name)?;
            writeln!(out, "{}", calc.display(session.config().precision))?;
        }
        "templates" => {
            let filter = args.first().map(String::as_str).unwrap_or("");
            let templates = list_templates(session, filter);
            if templates.is_empty() {
                writeln!(out, "No templates")?;
            }
            for template in templates {
                writeln!(out, "  {:<16} {} ({})", template.name, template.formula, template.timestamp)?;
            }
        }
        "delete" => {
            let [name] = args else {
                return Err(usage("delete NAME"));
            };
            if delete_template(session, name).is_some() {
                writeln!(out, "Template '{name}' deleted")?;
            } else {
                writeln!(out, "No template named '{name}'")?;
            }
        }
        "export-history" => {
            let [path] = args else {
                return Err(usage("export-history FILE"));
            };
            write_export(Path::new(path), &history_csv(session.ledger().history()))?;
            writeln!(out, "✓ Exported {} rows to {path}", session.ledger().len())?;
        }
        "export-templates" => {
            let [path] = args else {
                return Err(usage("export-templates FILE"));
            };
            let templates = session.ledger().list_templates("");
            write_export(Path::new(path), &templates_csv(templates.iter().copied()))?;
            writeln!(out, "✓ Exported {} templates to {path}", templates.len())?;
        }
        "help" | "?" => writeln!(out, "{HELP}")?,
        "quit" | "exit" => return Ok(Flow::Quit),
        other => {
            return Err(AppError::InvalidInput(format!(
                "unknown command '{other}' (try 'help')"
            )));
        }
    }
    Ok(Flow::Continue)
}

/// `sweep FORMULA KEY [START END [STEPS]] [--log] [KEY=VALUE ...]`, printed
/// as a two-column table.
fn cmd_sweep<W: Write>(session: &Session, args: &[String], out: &mut W) -> AppResult<()> {
    const USAGE: &str = "sweep FORMULA KEY [START END [STEPS]] [--log] [KEY=VALUE ...]";
    let [formula, vary, rest @ ..] = args else {
        return Err(usage(USAGE));
    };

    let mut request = SweepRequest::new(formula.as_str(), vary.as_str());
    let mut numbers = Vec::new();
    let mut assignments = Vec::new();
    for arg in rest {
        if arg == "--log" {
            request.spacing = Spacing::Logarithmic;
        } else if arg.contains('=') {
            assignments.push(arg.as_str());
        } else {
            numbers.push(parse_number(arg)?);
        }
    }
    match numbers[..] {
        [] => {}
        [start, end] => {
            request.start = Some(start);
            request.end = Some(end);
        }
        [start, end, steps] => {
            if steps.fract() != 0.0 || steps < 0.0 {
                return Err(AppError::InvalidInput(format!(
                    "steps must be a whole number, got {steps}"
                )));
            }
            request.start = Some(start);
            request.end = Some(end);
            request.steps = Some(steps as usize);
        }
        _ => return Err(usage(USAGE)),
    }
    request.overrides = parse_assignments(&assignments)?;

    let result = run_sweep(session, &request)?;
    writeln!(out, "{} | {}", result.x_label, result.y_label)?;
    for point in &result.points {
        writeln!(
            out,
            "{} | {}",
            session.format_value(point.x),
            session.format_value(point.y_or_nan())
        )?;
    }
    if result.num_undefined() > 0 {
        writeln!(out, "{} of {} samples undefined", result.num_undefined(), result.len())?;
    }
    Ok(())
}

fn usage(text: &str) -> AppError {
    AppError::InvalidInput(format!("usage: {text}"))
}

fn parse_number(text: &str) -> AppResult<f64> {
    text.parse()
        .map_err(|_| AppError::InvalidInput(format!("'{text}' is not a number")))
}

/// Split on whitespace; double quotes group words into one token.
fn tokenize(line: &str) -> AppResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(AppError::InvalidInput("unterminated quote".to_string()));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
