use clap::{Parser, Subcommand, ValueEnum};
use exam_core::{
    AnswerKey, GenerateError, MAX_VERSIONS, Question, bundle, generate_versions, parse_answers,
    parse_questions,
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Randomized exam version generator",
    long_about = "Parses a plain-text question bank and answer key, then emits independently \
                  shuffled exam versions with matching answer keys"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    /// Write one file per rendered exam and answer key.
    Files,
    /// Print the filename-to-content bundle as JSON on stdout.
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Generate shuffled exam versions and their answer keys.
    Generate {
        /// Path to the plain-text question bank.
        #[arg(long, value_name = "FILE")]
        questions: PathBuf,
        /// Path to the plain-text answer key.
        #[arg(long, value_name = "FILE")]
        answers: PathBuf,
        /// Number of versions to produce (1-26).
        #[arg(long, default_value_t = 2)]
        versions: usize,
        /// Output directory (defaults to EXAMGEN_OUTPUT_DIR or the current directory).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Overwrite existing output files.
        #[arg(long)]
        force: bool,
        /// How to emit the generated bundle.
        #[arg(long, value_enum, default_value_t = OutputFormat::Files)]
        format: OutputFormat,
    },
    /// Parse both inputs and report whether they align, without generating.
    Check {
        /// Path to the plain-text question bank.
        #[arg(long, value_name = "FILE")]
        questions: PathBuf,
        /// Path to the plain-text answer key.
        #[arg(long, value_name = "FILE")]
        answers: PathBuf,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            questions,
            answers,
            versions,
            out,
            force,
            format,
        } => run_generate(questions, answers, versions, out, force, format),
        Command::Check { questions, answers } => run_check(questions, answers),
    }
}

fn run_generate(
    questions_path: PathBuf,
    answers_path: PathBuf,
    count: usize,
    out_dir: Option<PathBuf>,
    force: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let (questions, key) = load_inputs(&questions_path, &answers_path)?;
    warn_skipped(&key);

    let versions = generate_versions(&questions, &key.letters, count)
        .map_err(|err| describe_generate_error(err, &key))?;
    let files = bundle(&versions);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&files)?);
        }
        OutputFormat::Files => {
            let out_root = resolve_output_root(out_dir)?;
            fs::create_dir_all(&out_root)?;
            if !force {
                for name in files.keys() {
                    let target = out_root.join(name);
                    if target.exists() {
                        return Err(format!(
                            "{} already exists; rerun with --force to overwrite",
                            target.display()
                        )
                        .into());
                    }
                }
            }
            for (name, contents) in &files {
                fs::write(out_root.join(name), contents)?;
            }
            println!(
                "Generated {} version(s) ({} files) in {}",
                versions.len(),
                files.len(),
                out_root.display()
            );
        }
    }
    Ok(())
}

fn run_check(questions_path: PathBuf, answers_path: PathBuf) -> CliResult<()> {
    let (questions, key) = load_inputs(&questions_path, &answers_path)?;
    warn_skipped(&key);

    println!(
        "Parsed {} question(s) and {} answer(s)",
        questions.len(),
        key.letters.len()
    );

    if questions.is_empty() {
        return Err(GenerateError::EmptyQuestionBank.to_string().into());
    }
    if questions.len() != key.letters.len() {
        let err = GenerateError::AlignmentMismatch {
            questions: questions.len(),
            answers: key.letters.len(),
        };
        return Err(describe_generate_error(err, &key).into());
    }
    println!(
        "Inputs align; up to {} version(s) can be generated",
        MAX_VERSIONS
    );
    Ok(())
}

fn load_inputs(
    questions_path: &Path,
    answers_path: &Path,
) -> CliResult<(Vec<Question>, AnswerKey)> {
    let questions_text = fs::read_to_string(questions_path)
        .map_err(|err| format!("cannot read {}: {}", questions_path.display(), err))?;
    let answers_text = fs::read_to_string(answers_path)
        .map_err(|err| format!("cannot read {}: {}", answers_path.display(), err))?;
    Ok((parse_questions(&questions_text), parse_answers(&answers_text)))
}

fn warn_skipped(key: &AnswerKey) {
    for skipped in &key.skipped {
        eprintln!(
            "Warning: answer line {} has no A-D letter and was skipped: {}",
            skipped.line, skipped.text
        );
    }
}

fn describe_generate_error(err: GenerateError, key: &AnswerKey) -> String {
    match err {
        GenerateError::AlignmentMismatch { .. } if !key.skipped.is_empty() => format!(
            "{} ({} answer line(s) were skipped; see warnings above)",
            err,
            key.skipped.len()
        ),
        other => other.to_string(),
    }
}

fn resolve_output_root(out: Option<PathBuf>) -> CliResult<PathBuf> {
    let candidate = match out {
        Some(path) => path,
        None => env::var_os("EXAMGEN_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    if candidate.as_os_str().is_empty() {
        return Err("output directory cannot be empty".into());
    }
    Ok(candidate)
}
