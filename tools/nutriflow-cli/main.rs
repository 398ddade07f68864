use clap::{Parser, Subcommand};
use nutriflow::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// Author-side tooling for questionnaire flows: lint, preview and walk them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Map an extra step type name onto a built-in kind, e.g. `question=singleChoice`
    #[arg(long = "alias", global = true, value_name = "NAME=KIND")]
    aliases: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a flow for broken pointers and suspicious structure
    Lint {
        /// Path to the flow JSON document
        flow_path: String,
    },
    /// Run a flow against scripted answers
    Preview {
        /// Path to the flow JSON document
        flow_path: String,
        /// Optional path to a JSON answer script
        #[arg(short, long)]
        answers: Option<String>,
        /// Optional path to a preview config JSON file
        #[arg(short, long)]
        config: Option<String>,
        /// Step to start at instead of the first step
        #[arg(short, long)]
        start: Option<String>,
        /// Stop after visiting this many steps
        #[arg(long)]
        max_steps: Option<usize>,
    },
    /// Walk a flow interactively, answering each step at the prompt
    Walk {
        /// Path to the flow JSON document
        flow_path: String,
    },
    /// Freeze a flow into a binary snapshot
    Snapshot {
        /// Path to the flow JSON document
        flow_path: String,
        /// Where to write the snapshot
        output_path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nutriflow=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = build_registry(&cli.aliases);

    match cli.command {
        Command::Lint { flow_path } => run_lint(&load_flow(&flow_path, &registry)),
        Command::Preview {
            flow_path,
            answers,
            config,
            start,
            max_steps,
        } => {
            let flow = load_flow(&flow_path, &registry);
            let mut preview_config = match config {
                Some(path) => PreviewConfig::from_file(&path).unwrap_or_else(|e| {
                    exit_with_error(&format!("Failed to load config '{}': {}", path, e))
                }),
                None => PreviewConfig::default(),
            };
            if let Some(start) = start {
                preview_config = preview_config.with_start_step(start);
            }
            if let Some(max_steps) = max_steps {
                preview_config = preview_config.with_max_steps(max_steps);
            }
            run_preview(&flow, answers, preview_config);
        }
        Command::Walk { flow_path } => run_walk(&load_flow(&flow_path, &registry)),
        Command::Snapshot {
            flow_path,
            output_path,
        } => {
            let flow = load_flow(&flow_path, &registry);
            FlowSnapshot::new(flow)
                .save(&output_path)
                .unwrap_or_else(|e| exit_with_error(&format!("Snapshot failed: {}", e)));
            println!("Wrote snapshot to '{}'", output_path);
        }
    }
}

fn build_registry(aliases: &[String]) -> KindRegistry {
    aliases.iter().fold(KindRegistry::new(), |registry, alias| {
        match alias.split_once('=') {
            Some((name, kind)) if StepKind::from_name(kind).is_some() => {
                registry.with_alias(name, kind)
            }
            _ => exit_with_error(&format!(
                "Invalid alias '{}', expected NAME=KIND with a built-in kind",
                alias
            )),
        }
    })
}

fn load_flow(path: &str, registry: &KindRegistry) -> Flow {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read flow file '{}': {}", path, e)));
    FlowDocument::from_json(&json)
        .and_then(|doc| doc.into_flow_with(registry))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow '{}': {}", path, e)))
}

fn run_lint(flow: &Flow) {
    let report = lint(flow);
    println!("Flow '{}' ({} steps)", flow.name, flow.len());
    for diagnostic in &report.diagnostics {
        println!("  {}", diagnostic);
    }
    println!(
        "{} error(s), {} warning(s)",
        report.errors().len(),
        report.warnings().len()
    );
    if !report.is_valid() {
        std::process::exit(1);
    }
}

fn run_preview(flow: &Flow, answers_path: Option<String>, config: PreviewConfig) {
    let script = match answers_path {
        Some(path) => AnswerScript::from_file(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load answers from '{}': {}", path, e))
        }),
        None => {
            println!("No answer script provided. Following default pointers only.");
            AnswerScript::default()
        }
    };

    let start = Instant::now();
    let report = Simulator::new(flow, config)
        .run(&script)
        .unwrap_or_else(|e| exit_with_error(&format!("Preview failed: {}", e)));
    let elapsed = start.elapsed();

    println!("\nPreview Finished!");
    println!("  -> Path: {}", report.reason);
    println!("  -> Steps visited: {}", report.path.len());
    if !report.unanswered.is_empty() {
        println!("  -> Unanswered: {}", report.unanswered.join(", "));
    }
    println!("  -> Took {:?}", elapsed);
}

/// Prompt-driven traversal. `back` returns to the previous step, `quit` stops.
fn run_walk(flow: &Flow) {
    println!("--- Walking '{}' ---", flow.name);
    let mut session = TraversalSession::start_at_first(flow);

    while let Some(step) = session.current_step() {
        println!("\n[{}] {}", session.progress(), step.display_name());
        if let Some(prompt) = &step.config.prompt {
            println!("{}", prompt);
        }
        for option in &step.config.options {
            println!("  - {} ({})", option.label, option.value);
        }

        let input = prompt_for_input("Answer (back/quit)", None);
        match input.as_str() {
            "quit" => break,
            "back" => {
                if !session.go_back() {
                    println!("Already at the first step.");
                }
                continue;
            }
            _ => {}
        }

        if step.kind.collects_answer() && !input.is_empty() {
            let value = match step.kind.descriptor().answer {
                nutriflow::flow::AnswerShape::Choices => AnswerValue::choices(
                    input.split(',').map(str::trim).filter(|s| !s.is_empty()),
                ),
                nutriflow::flow::AnswerShape::Media => AnswerValue::media(input),
                _ => AnswerValue::text(input),
            };
            session.record_answer(&step.id, value);
        }
        session.advance();
    }

    let summary = session.summary();
    println!("\n{}", summary.reason);
    for (name, value) in session.variables() {
        println!("  {} = {}", name, value);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or(String::new(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }
    match io::stdin().read_line(&mut line) {
        // End of input behaves like `quit`.
        Ok(0) => return "quit".to_string(),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
