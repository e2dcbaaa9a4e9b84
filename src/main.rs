//! Line-oriented shell around the editor core
//!
//! Reads one command per line from stdin, turns it into a [`Msg`], runs it
//! through `update`, and prints the title and status line after each step.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use splitpad::cli::CliArgs;
use splitpad::commands::Cmd;
use splitpad::confirm::{ConfirmChoice, ConfirmClose};
use splitpad::messages::{AppMsg, DocumentMsg, LayoutMsg, Msg};
use splitpad::model::{AppModel, Document, NoticeKind, SplitDirection};
use splitpad::update::update;
use splitpad::EditorConfig;

const HELP: &str = "\
commands:
  open <path>          open a file (focuses it if already open)
  new                  new untitled document in the focused pane
  split h|v            split the focused pane, new pane gets a blank document
  splitdoc h|v         split the focused pane, new pane shows the same document
  pane h|v             add a pane at the top level
  close                close the focused pane
  closetab             close the current tab
  focus next|prev|<n>  move focus between panes (n is 1-based)
  tab next|prev|<n>    switch tabs in the focused pane (n is 0-based)
  type <text>          insert text at the cursor
  backspace            delete the character before the cursor
  save                 save the focused document
  saveas <path>        save under a new name
  tree                 print the layout
  quit                 exit (asks about unsaved documents)";

/// Asks Save/Discard/Cancel on stdin, and for a file name when saving an
/// untitled document
struct StdinConfirm;

impl ConfirmClose for StdinConfirm {
    fn confirm(&mut self, document: &Document) -> ConfirmChoice {
        ask_choice(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            &document.display_name(),
        )
    }

    fn save_path(&mut self, document: &Document) -> Option<PathBuf> {
        println!("{} has no file name yet.", document.display_name());
        prompt_path().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "reading save path failed");
            None
        })
    }
}

/// Prompt until a recognised answer arrives. End of input, or a prompt that
/// cannot be written, counts as Cancel.
fn ask_choice(input: &mut impl BufRead, output: &mut impl Write, name: &str) -> ConfirmChoice {
    loop {
        if write!(output, "{} has unsaved changes. [s]ave, [d]iscard, [c]ancel? ", name).is_err()
            || output.flush().is_err()
        {
            return ConfirmChoice::Cancel;
        }

        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(0) | Err(_) => return ConfirmChoice::Cancel,
            Ok(_) => {}
        }
        match answer.trim() {
            "s" | "save" => return ConfirmChoice::Save,
            "d" | "discard" => return ConfirmChoice::Discard,
            "" | "c" | "cancel" => return ConfirmChoice::Cancel,
            _ => continue,
        }
    }
}

/// What a shell line asks for
enum ShellCommand {
    Msg(Msg),
    Tree,
    Help,
}

fn parse_direction(arg: &str) -> Result<SplitDirection, String> {
    match arg {
        "h" | "horizontal" => Ok(SplitDirection::Horizontal),
        "v" | "vertical" => Ok(SplitDirection::Vertical),
        other => Err(format!("expected h or v, got '{}'", other)),
    }
}

fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (cmd, arg) = line
        .split_once(char::is_whitespace)
        .map(|(c, a)| (c, a.trim()))
        .unwrap_or((line, ""));

    let msg = match (cmd, arg) {
        ("help" | "?", _) => return Ok(ShellCommand::Help),
        ("tree", _) => return Ok(ShellCommand::Tree),
        ("open", "") | ("saveas", "") => return Err(format!("usage: {} <path>", cmd)),
        ("open", path) => Msg::App(AppMsg::OpenFile(PathBuf::from(path))),
        ("new", _) => Msg::App(AppMsg::NewFile),
        ("save", _) => Msg::App(AppMsg::SaveFile),
        ("saveas", path) => Msg::App(AppMsg::SaveFileAs(PathBuf::from(path))),
        ("quit" | "exit", _) => Msg::App(AppMsg::Quit),
        ("split", dir) => Msg::Layout(LayoutMsg::SplitFocused(parse_direction(dir)?)),
        ("splitdoc", dir) => {
            Msg::Layout(LayoutMsg::SplitFocusedWithCurrent(parse_direction(dir)?))
        }
        ("pane", dir) => Msg::Layout(LayoutMsg::AddPane(parse_direction(dir)?)),
        ("close", _) => Msg::Layout(LayoutMsg::CloseFocusedGroup),
        ("closetab", _) => Msg::Layout(LayoutMsg::CloseFocusedTab),
        ("focus", "next") => Msg::Layout(LayoutMsg::FocusNextGroup),
        ("focus", "prev") => Msg::Layout(LayoutMsg::FocusPrevGroup),
        ("focus", n) => Msg::Layout(LayoutMsg::FocusGroupByIndex(
            n.parse().map_err(|_| format!("bad pane number '{}'", n))?,
        )),
        ("tab", "next") => Msg::Layout(LayoutMsg::NextTab),
        ("tab", "prev") => Msg::Layout(LayoutMsg::PrevTab),
        ("tab", n) => Msg::Layout(LayoutMsg::SwitchToTab(
            n.parse().map_err(|_| format!("bad tab number '{}'", n))?,
        )),
        ("type", text) => Msg::Document(DocumentMsg::InsertText(text.to_string())),
        ("backspace", _) => Msg::Document(DocumentMsg::DeleteBackward),
        (other, _) => return Err(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(ShellCommand::Msg(msg))
}

fn print_tree(model: &AppModel) {
    let area = &model.editor_area;
    println!("layout: {}", area.layout());
    for group in area.groups_in_order() {
        let marker = if group.id == area.active_group_id() {
            "*"
        } else {
            " "
        };
        let tabs: Vec<String> = group
            .panes()
            .iter()
            .enumerate()
            .filter_map(|(i, pane)| {
                let doc = area.document(pane.document_id())?;
                let current = if group.current_index() == Some(i) {
                    ">"
                } else {
                    ""
                };
                let modified = if doc.is_modified { "*" } else { "" };
                Some(format!("{}{}{}", current, doc.display_name(), modified))
            })
            .collect();
        println!("{} pane {}: [{}]", marker, group.id.0, tabs.join(", "));
    }
}

fn render(model: &mut AppModel) {
    if let Some(notice) = model.ui.take_notice() {
        let label = match notice.kind {
            NoticeKind::Error => "error",
            NoticeKind::Incompatible => "notice",
        };
        println!("{}: {}", label, notice.text);
    }
    println!("{}", model.window_title());
    println!("{}", model.status_line());
}

fn prompt_path() -> Result<Option<PathBuf>> {
    print!("save as: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("reading save path")?;
    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}

fn main() -> Result<()> {
    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    splitpad::tracing::init();

    let mut config = EditorConfig::load();
    startup.apply_to(&mut config);
    tracing::info!(max_groups = config.max_groups, "starting");

    let mut model = AppModel::new(config, startup.file_paths());
    let mut confirm = StdinConfirm;
    render(&mut model);

    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if io::stdin()
            .read_line(&mut line)
            .context("reading command")?
            == 0
        {
            if model.editor_area.has_unsaved() {
                tracing::warn!("stdin closed with unsaved documents");
            }
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let msg = match parse_command(&line) {
            Ok(ShellCommand::Msg(msg)) => msg,
            Ok(ShellCommand::Tree) => {
                print_tree(&model);
                continue;
            }
            Ok(ShellCommand::Help) => {
                println!("{}", HELP);
                continue;
            }
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match update(&mut model, msg, &mut confirm) {
            Some(Cmd::Quit) => break,
            Some(Cmd::PromptSaveAs) => {
                if let Some(path) = prompt_path()? {
                    update(
                        &mut model,
                        Msg::App(AppMsg::SaveFileAs(path)),
                        &mut confirm,
                    );
                }
            }
            Some(Cmd::Redraw) | None => {}
        }
        render(&mut model);
    }

    Ok(())
}
