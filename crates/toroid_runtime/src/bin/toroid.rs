//! Toroid CLI entry point.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use toroid_debug::{Tracer, TracerConfig};
use toroid_engine::{Config, Interpreter, RunMode};
use toroid_runtime::host::parse_level;
use toroid_runtime::{Repl, Session, StdinInput, init_logging};
use toroid_space::read_text_file;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    file: Option<PathBuf>,
    program_args: Vec<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    befunge93: bool,
    seed: Option<u64>,
    max_ticks: Option<u64>,
    delay_ms: Option<u64>,
    single_step: bool,
    // Debug flags
    trace: bool,
    trace_json: bool,
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn value_of(args: &[String], i: usize, flag: &str) -> Result<u64, Box<dyn std::error::Error>> {
    let value = args
        .get(i)
        .ok_or_else(|| format!("{flag} requires a value"))?;
    Ok(value
        .parse()
        .map_err(|_| format!("invalid {flag} value: {value}"))?)
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--93" => config.befunge93 = true,
            "--step" => config.single_step = true,
            "--trace" => config.trace = true,
            "--trace-json" => config.trace_json = true,
            "--seed" => {
                i += 1;
                config.seed = Some(value_of(&args, i, "--seed")?);
            }
            "--max-ticks" => {
                i += 1;
                config.max_ticks = Some(value_of(&args, i, "--max-ticks")?);
            }
            "--delay-ms" => {
                i += 1;
                config.delay_ms = Some(value_of(&args, i, "--delay-ms")?);
            }
            "--log-level" => {
                i += 1;
                let level = args.get(i).ok_or("--log-level requires a value")?;
                config.log_level = Some(level.clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                // everything after the program file belongs to the program
                config.file = Some(PathBuf::from(path));
                config.program_args = args[i..].to_vec();
                break;
            }
        }
        i += 1;
    }

    Ok(config)
}

impl CliConfig {
    fn engine_config(&self) -> Config {
        let mut config = if self.befunge93 {
            Config::befunge93()
        } else {
            Config::default()
        };
        config = config
            .with_max_ticks(self.max_ticks)
            .with_args(self.program_args.clone())
            .with_env(env::vars().collect());
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.single_step {
            config = config.with_mode(RunMode::SingleStep);
        } else if let Some(ms) = self.delay_ms {
            config = config.with_mode(RunMode::Delayed(Duration::from_millis(ms)));
        }
        config
    }

    fn tracer_config(&self) -> TracerConfig {
        if self.trace_json {
            TracerConfig::development().json()
        } else if self.trace {
            TracerConfig::development()
        } else {
            TracerConfig::default()
        }
    }
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("toroid {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(parse_level(config.log_level.as_deref().unwrap_or("warn"))?);

    if config.batch_mode {
        return run_batch(&config);
    }

    let mut session = Session::new(config.engine_config(), config.tracer_config());
    if let Some(path) = &config.file {
        println!("{}", session.load_file(path)?);
    }

    let mut repl = Repl::new()?.with_session(session);
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

/// Runs a program to completion with stdin as input, streaming output.
fn run_batch(config: &CliConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let path = config.file.as_ref().ok_or("--batch requires a program file")?;
    let (text, _) = read_text_file(path)?;

    let engine_config = config.engine_config().with_echo_input(false);
    let max_ticks = engine_config.max_ticks;
    let mut interpreter = Interpreter::with_source(engine_config, &text);
    interpreter.set_input(Box::new(StdinInput::stdin()));
    let mut tracer = Tracer::new(config.tracer_config());
    interpreter.set_record_steps(tracer.wants_steps());

    let delay = interpreter.pace().unwrap_or(Duration::ZERO);
    let mut stdout = io::stdout().lock();
    interpreter.start();
    loop {
        if max_ticks.is_some_and(|max| interpreter.tick_count() >= max) {
            interpreter.stop();
            log::warn!("stopped after {} ticks", interpreter.tick_count());
            break;
        }
        let report = interpreter.tick();
        tracer.observe(&report, interpreter.ips());
        let output = interpreter.take_output();
        if !output.is_empty() {
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
        if report.signal.is_some() {
            break;
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    Ok(match interpreter.quit_code() {
        Some(code) => ExitCode::from(u8::try_from(code & 0xFF).unwrap_or(1)),
        None => ExitCode::SUCCESS,
    })
}

fn print_help() {
    println!(
        "\x1b[1mToroid\x1b[0m - Befunge-93 and Funge-98 interpreter and editor

\x1b[1mUSAGE:\x1b[0m
    toroid [OPTIONS] [FILE [PROGRAM ARGS...]]

\x1b[1mARGUMENTS:\x1b[0m
    [FILE]             Program to load before starting the editor
    [PROGRAM ARGS...]  Arguments reported to the program by 'y'

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run FILE with stdin as input and exit with its quit code
    --93               Befunge-93 mode (80x25 board, Funge-98 instructions reflect)
    --seed N           Seed for the '?' instruction
    --delay-ms N       Pause N milliseconds between ticks
    --step             Single-step mode (advance with :step)

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace            Trace every instruction to stderr
    --trace-json       Trace as JSON lines
    --max-ticks N      Stop after N ticks
    --log-level L      off, error, warn (default), info, debug, or trace

\x1b[1mEXAMPLES:\x1b[0m
    toroid                           Start the editor
    toroid hello.bf                  Load hello.bf, then start the editor
    toroid -b hello.bf               Run hello.bf and exit
    toroid -b --93 game.bf < moves   Run a Befunge-93 program on piped input
    toroid --trace -b --max-ticks 50 loop.bf

\x1b[1mEDITOR COMMANDS:\x1b[0m
    Lines without a leading ':' are typed at the edit cursor.
    :run, :step [N], :stop     Control the program
    :load PATH, :save [PATH]   Read and write program files
    :help                      List every command
    Ctrl+C                     Stop a running program
    Ctrl+D                     Exit"
    );
}
