use std::io::{BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use console_explorer::search::IntelligentFileSearch;
use console_explorer::terminal::{SessionEvent, Terminal, TerminalOptions};

#[derive(Parser)]
#[command(name = "console-explorer")]
#[command(about = "A simulated Linux console with AI-assisted file search")]
#[command(version)]
struct Cli {
    /// Execute the commands from the argument, one per line, then exit
    #[arg(short = 'c')]
    script: Option<String>,

    /// Real directory subtree the find command searches
    #[arg(long = "search-scope", default_value = ".")]
    search_scope: String,

    /// Output the session history as JSON
    #[arg(long = "json")]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let (tx, mut rx) = unbounded_channel();
    let mut terminal = Terminal::new(TerminalOptions {
        search: Some(Arc::new(IntelligentFileSearch::offline())),
        search_scope: cli.search_scope,
        events: Some(tx),
    });

    if let Some(script) = cli.script {
        for line in script.lines() {
            if cli.json {
                terminal.execute(line).await;
            } else {
                run_line(&mut terminal, &mut rx, line).await;
            }
            if terminal.is_exited() {
                break;
            }
        }
        if cli.json {
            match serde_json::to_string_pretty(terminal.history()) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: cannot serialize history: {}", e);
                    std::process::exit(1);
                }
            }
        }
        return;
    }

    println!("{}", terminal.history()[0].output);

    let stdin = std::io::stdin();
    loop {
        print!("FileExplorer:{}> ", terminal.current_path());
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        run_line(&mut terminal, &mut rx, line.trim_end_matches(&['\r', '\n'][..])).await;

        if terminal.is_exited() {
            break;
        }
    }
}

/// Execute one line, printing history events as they arrive so the find
/// command's interim message shows before the search settles.
async fn run_line(terminal: &mut Terminal, rx: &mut UnboundedReceiver<SessionEvent>, line: &str) {
    let exec = terminal.execute(line);
    tokio::pin!(exec);
    loop {
        tokio::select! {
            _ = &mut exec => break,
            Some(event) = rx.recv() => print_event(event),
        }
    }
    while let Ok(event) = rx.try_recv() {
        print_event(event);
    }
}

fn print_event(event: SessionEvent) {
    match event {
        SessionEvent::Appended(_) => {}
        SessionEvent::Updated(entry) => {
            if !entry.output.is_empty() {
                println!("{}", entry.output);
            }
        }
        SessionEvent::Cleared => {
            print!("\x1B[2J\x1B[1;1H");
            let _ = std::io::stdout().flush();
        }
    }
}
