use clap::Parser;
use std::fs;
use std::io::{Read, Write};
use std::sync::Arc;

use serde::Serialize;

use culter::{ByteQuota, ByteString, Slicer};

mod cli;
use cli::display;
use cli::{parse_delimiter, CaseMode, Cli, Commands};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Longest input prefix shown in the find preview line.
const PREVIEW_BYTES: usize = 120;

fn main() {
    let cli = Cli::parse();

    let slicer = match cli.max_bytes {
        Some(limit) => Slicer::with_gate(Arc::new(ByteQuota::new(limit))),
        None => Slicer::new(),
    };

    let result = match cli.command {
        Commands::Find {
            pattern,
            file,
            count_only,
        } => run_find(&slicer, &pattern, file.as_deref(), count_only, cli.json),
        Commands::Replace {
            pattern,
            replacement,
            file,
        } => run_replace(&slicer, &pattern, &replacement, file.as_deref(), cli.json),
        Commands::Split { delimiter, file } => {
            run_split(&slicer, &delimiter, file.as_deref(), cli.json)
        }
        Commands::Join { delimiter, parts } => {
            run_join(&slicer, delimiter.as_deref(), &parts, cli.json)
        }
        Commands::Slice { from, to, file } => {
            run_slice(&slicer, from, to, file.as_deref(), cli.json)
        }
        Commands::Case { mode, file } => run_case(&slicer, mode, file.as_deref(), cli.json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Read the whole input: a file path, or stdin when omitted or given as "-".
fn read_input(file: Option<&str>) -> Result<ByteString, Box<dyn std::error::Error>> {
    let bytes = match file {
        Some(path) if path != "-" => fs::read(path)?,
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(ByteString::from(bytes))
}

/// Write result bytes to stdout exactly as produced, no trailing newline.
///
/// Transformation commands emit raw bytes so they compose in pipelines;
/// formatting happens only in `--json` mode or for find/split reports.
fn emit_bytes(out: &ByteString) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()
}

fn lossy(out: &ByteString) -> String {
    String::from_utf8_lossy(out.as_bytes()).into_owned()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FindReport<'a> {
    pattern: &'a str,
    input_len: usize,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    indices: Option<Vec<usize>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransformReport {
    input_len: usize,
    output_len: usize,
    output: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SplitReport {
    count: usize,
    segments: Vec<String>,
}

fn run_find(
    slicer: &Slicer,
    pattern: &str,
    file: Option<&str>,
    count_only: bool,
    json: bool,
) -> CliResult {
    let hay = read_input(file)?;
    let pat = ByteString::from(pattern);

    let count = slicer.count_matches(&hay, &pat)?;
    let indices = if count_only {
        None
    } else {
        Some(slicer.match_indices(&hay, &pat)?)
    };

    if json {
        let report = FindReport {
            pattern,
            input_len: hay.len(),
            count,
            indices,
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    if count_only {
        println!("{}", count);
        return Ok(());
    }

    display::section_top("FIND");
    display::row(&format!(
        " input    {}",
        display::format_size(hay.len())
    ));
    display::row(&format!(" pattern  {}", display::render_bytes(pat.as_bytes())));
    display::row(&format!(
        " count    {}",
        display::themed(display::GREEN, &[display::BOLD], &count.to_string())
    ));
    if let Some(ref idxs) = indices {
        display::row(&format!(" indices  {:?}", idxs));
    }
    display::section_bot();

    // Preview the start of the input with match spans highlighted.
    if let Some(ref idxs) = indices {
        let window = hay.len().min(PREVIEW_BYTES);
        let visible: Vec<usize> = idxs.iter().copied().filter(|&i| i < window).collect();
        let mut preview =
            display::highlight_matches(&hay.as_bytes()[..window], &visible, pat.len());
        if window < hay.len() {
            preview.push_str("...");
        }
        println!("{}", preview);
    }
    Ok(())
}

fn run_replace(
    slicer: &Slicer,
    pattern: &str,
    replacement: &str,
    file: Option<&str>,
    json: bool,
) -> CliResult {
    let hay = read_input(file)?;
    let out = slicer.replace(&hay, &ByteString::from(pattern), &ByteString::from(replacement))?;

    if json {
        let report = TransformReport {
            input_len: hay.len(),
            output_len: out.len(),
            output: lossy(&out),
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }
    emit_bytes(&out)?;
    Ok(())
}

fn run_split(slicer: &Slicer, delimiter: &str, file: Option<&str>, json: bool) -> CliResult {
    let delim = parse_delimiter(delimiter)?;
    let input = read_input(file)?;
    let segments = slicer.split(&input, delim)?;

    if json {
        let report = SplitReport {
            count: segments.len(),
            segments: segments.iter().map(lossy).collect(),
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }
    for segment in &segments {
        println!("{}", display::render_bytes(segment.as_bytes()));
    }
    Ok(())
}

fn run_join(
    slicer: &Slicer,
    delimiter: Option<&str>,
    parts: &[String],
    json: bool,
) -> CliResult {
    let delim = delimiter.map(parse_delimiter).transpose()?;
    let owned: Vec<ByteString> = parts.iter().map(|p| ByteString::from(p.as_str())).collect();
    let out = slicer.join(&owned, delim)?;

    if json {
        let report = TransformReport {
            input_len: owned.iter().map(ByteString::len).sum(),
            output_len: out.len(),
            output: lossy(&out),
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }
    emit_bytes(&out)?;
    Ok(())
}

fn run_slice(
    slicer: &Slicer,
    from: usize,
    to: usize,
    file: Option<&str>,
    json: bool,
) -> CliResult {
    let input = read_input(file)?;
    let out = slicer.substring(&input, from, to)?;

    if json {
        let report = TransformReport {
            input_len: input.len(),
            output_len: out.len(),
            output: lossy(&out),
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }
    emit_bytes(&out)?;
    Ok(())
}

fn run_case(slicer: &Slicer, mode: CaseMode, file: Option<&str>, json: bool) -> CliResult {
    let input = read_input(file)?;
    let out = match mode {
        CaseMode::Upper => slicer.to_uppercase(&input)?,
        CaseMode::Lower => slicer.to_lowercase(&input)?,
        CaseMode::Capitalize => slicer.capitalize(&input)?,
    };

    if json {
        let report = TransformReport {
            input_len: input.len(),
            output_len: out.len(),
            output: lossy(&out),
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }
    emit_bytes(&out)?;
    Ok(())
}
