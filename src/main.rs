// braintty: Time-Travel Brainfuck Interpreter with Tape Visualization

use std::fs;
use std::io;
use std::path::Path;
use std::process::exit;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use braintty::interpreter::Interpreter;
use braintty::trace::ConsoleReporter;
use braintty::ui::App;

/// Demo program used when no file is given: prints "Hello, World!".
const DEMO_PROGRAM: &str = "
>++++++++[<+++++++++>-]<.>++++[<+++++++>-]<+.+++++++..+++.>>++++++[<+++++++>-]<+
+.------------.>++++++[<+++++++++>-]<+.<.+++.------.--------.>>>++++[<++++++++>-
]<+.
";

fn usage(program_name: &str) {
    eprintln!("Usage: {} [options] [file.b]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --headless   Run without the TUI and print the final output");
    eprintln!("  --trace      Print a slow-motion per-step trace (implies --headless)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {}                   # Step through the built-in demo", program_name);
    eprintln!("  {} program.b         # Step through your own program", program_name);
    eprintln!("  {} --trace program.b # Watch it execute on the console", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("braintty");

    let mut headless = false;
    let mut trace = false;
    let mut file: Option<&str> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--headless" => headless = true,
            "--trace" => {
                trace = true;
                headless = true;
            }
            "--help" | "-h" => {
                usage(program_name);
                return Ok(());
            }
            other if other.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", other);
                eprintln!();
                usage(program_name);
                exit(1);
            }
            other => file = Some(other),
        }
    }

    // Read source code
    let source = match file {
        Some(path) => {
            if !Path::new(path).exists() {
                eprintln!("Error: File '{}' not found", path);
                eprintln!();
                usage(program_name);
                exit(1);
            }
            fs::read_to_string(path)?
        }
        None => DEMO_PROGRAM.to_string(),
    };

    let mut interpreter = Interpreter::new();
    interpreter.load(&source);

    if trace {
        interpreter.set_reporter(Box::new(ConsoleReporter::new()));
    }

    // Execute to completion first; input prompts happen on the plain
    // console, before any alternate screen is entered.
    if let Err(e) = interpreter.run() {
        eprintln!("Runtime error: {}", e);
        exit(1);
    }

    if headless {
        // The trace reporter already printed the final output.
        if !trace {
            println!("Final Output:\n{}", interpreter.output_string());
        }
        return Ok(());
    }

    eprintln!(
        "Executed {} instructions ({} snapshots). Entering TUI...",
        interpreter.program().len(),
        interpreter.total_snapshots()
    );

    // Rewind to the beginning so the TUI starts at step one
    interpreter.rewind_to_start();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(interpreter);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
