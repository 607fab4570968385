//! Interactive text front end for the task board.
//!
//! Reads one command per line from stdin and redraws the board whenever a
//! new snapshot is published.

use anyhow::Context;
use taskboard::{screen, Alert, BoardConfig, TaskBoard};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Commands:
  type <text>   replace the input field
  add [text]    press the add button (optionally typing <text> first)
  submit        press return in the input field
  toggle <n>    tap the checkbox of row <n>
  delete <n>    tap the delete icon of row <n>
  show          redraw the board
  json          print the current view as JSON
  help          show this help
  quit          leave";

/// One line of user input
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Type(&'a str),
    Add(Option<&'a str>),
    Submit,
    Toggle(usize),
    Delete(usize),
    Show,
    Json,
    Help,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, Some(rest)),
            None => (line, None),
        };

        match (word.trim(), rest) {
            ("type", text) => Some(Self::Type(text.unwrap_or(""))),
            ("add", text) => Some(Self::Add(text)),
            ("submit", None) => Some(Self::Submit),
            ("toggle", Some(n)) => n.trim().parse().ok().map(Self::Toggle),
            ("delete", Some(n)) => n.trim().parse().ok().map(Self::Delete),
            ("show", None) => Some(Self::Show),
            ("json", None) => Some(Self::Json),
            ("help", None) => Some(Self::Help),
            ("quit" | "exit", None) => Some(Self::Quit),
            _ => None,
        }
    }
}

fn show_alert(alert: &Alert) {
    println!("!! {alert}");
}

fn press_add(board: &mut TaskBoard) {
    if !board.can_submit() {
        println!("(add is disabled while the input is blank)");
        return;
    }
    if let Err(error) = board.submit() {
        show_alert(&Alert::from(error));
    }
}

fn tap_row(board: &mut TaskBoard, number: usize, delete: bool) {
    let view = board.view();
    let Some(id) = screen::task_at(&view, number) else {
        println!("(no row {number})");
        return;
    };
    if delete {
        board.delete(id);
    } else {
        board.toggle_complete(id);
    }
}

fn draw(board: &mut TaskBoard) {
    let state = board.snapshot();
    let view = board.view();
    println!("{}", screen::render(&state, &view));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = BoardConfig::from_env().context("loading board configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(id_strategy = ?config.id_strategy, "Starting task board");

    let mut board = TaskBoard::mount(&config);
    let mut snapshots = board.subscribe();

    println!("{HELP}\n");
    draw(&mut board);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Some(Command::Type(text)) => {
                board.type_text(text);
            },
            Some(Command::Add(text)) => {
                if let Some(text) = text {
                    board.type_text(text);
                }
                press_add(&mut board);
            },
            Some(Command::Submit) => {
                if let Err(error) = board.submit() {
                    show_alert(&Alert::from(error));
                }
            },
            Some(Command::Toggle(n)) => tap_row(&mut board, n, false),
            Some(Command::Delete(n)) => tap_row(&mut board, n, true),
            Some(Command::Show) => draw(&mut board),
            Some(Command::Json) => {
                let view = board.view();
                println!("{}", serde_json::to_string_pretty(&*view)?);
            },
            Some(Command::Help) => println!("{HELP}"),
            Some(Command::Quit) => break,
            None => println!("(unknown command, try `help`)"),
        }

        if snapshots.has_changed().unwrap_or(false) {
            snapshots.mark_unchanged();
            draw(&mut board);
        }
    }

    tracing::info!("Task board unmounted");
    Ok(())
}
